//! AWS in-tree cloud provider options.
//!
//! Wire keys follow the kubelet `cloud-config` file, so most of them are hyphenated.

use std::collections::BTreeMap;

record! {
    pub struct AwsCloudProvider => "awsCloudProvider" {
        FIELD_GLOBAL: global: Option<GlobalAwsOpts> = "global",
        /// Per-service endpoint overrides keyed by an arbitrary section name.
        FIELD_SERVICE_OVERRIDE: service_override: BTreeMap<String, ServiceOverride> = "serviceOverride",
    }
}

record! {
    /// `[Global]` section of the AWS cloud config.
    pub struct GlobalAwsOpts => "globalAwsOpts" {
        FIELD_DISABLE_SECURITY_GROUP_INGRESS: disable_security_group_ingress: bool = "disable-security-group-ingress",
        FIELD_DISABLE_STRICT_ZONE_CHECK: disable_strict_zone_check: bool = "disable-strict-zone-check",
        FIELD_ELB_SECURITY_GROUP: elb_security_group: String = "elb-security-group",
        FIELD_KUBERNETES_CLUSTER_ID: kubernetes_cluster_id: String = "kubernetes-cluster-id",
        FIELD_KUBERNETES_CLUSTER_TAG: kubernetes_cluster_tag: String = "kubernetes-cluster-tag",
        FIELD_ROLE_ARN: role_arn: String = "role-arn",
        FIELD_ROUTE_TABLE_ID: route_table_id: String = "routetable-id",
        FIELD_SUBNET_ID: subnet_id: String = "subnet-id",
        FIELD_VPC: vpc: String = "vpc",
        FIELD_ZONE: zone: String = "zone",
    }
}

record! {
    pub struct ServiceOverride => "serviceOverride" {
        FIELD_REGION: region: String = "region",
        FIELD_SERVICE: service: String = "service",
        FIELD_SIGNING_METHOD: signing_method: String = "signing-method",
        FIELD_SIGNING_NAME: signing_name: String = "signing-name",
        FIELD_SIGNING_REGION: signing_region: String = "signing-region",
        FIELD_URL: url: String = "url",
    }
}
