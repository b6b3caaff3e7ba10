//! Azure in-tree cloud provider options.

record! {
    pub struct AzureCloudProvider => "azureCloudProvider" {
        FIELD_AAD_CLIENT_CERT_PASSWORD: aad_client_cert_password: String = "aadClientCertPassword" secret,
        FIELD_AAD_CLIENT_CERT_PATH: aad_client_cert_path: String = "aadClientCertPath",
        FIELD_AAD_CLIENT_ID: aad_client_id: String = "aadClientId",
        FIELD_AAD_CLIENT_SECRET: aad_client_secret: String = "aadClientSecret" secret,
        FIELD_CLOUD: cloud: String = "cloud",
        FIELD_CLOUD_PROVIDER_BACKOFF: cloud_provider_backoff: bool = "cloudProviderBackoff",
        FIELD_CLOUD_PROVIDER_BACKOFF_DURATION: cloud_provider_backoff_duration: i64 = "cloudProviderBackoffDuration",
        FIELD_CLOUD_PROVIDER_BACKOFF_EXPONENT: cloud_provider_backoff_exponent: i64 = "cloudProviderBackoffExponent",
        FIELD_CLOUD_PROVIDER_BACKOFF_JITTER: cloud_provider_backoff_jitter: i64 = "cloudProviderBackoffJitter",
        FIELD_CLOUD_PROVIDER_BACKOFF_RETRIES: cloud_provider_backoff_retries: i64 = "cloudProviderBackoffRetries",
        FIELD_CLOUD_PROVIDER_RATE_LIMIT: cloud_provider_rate_limit: bool = "cloudProviderRateLimit",
        FIELD_CLOUD_PROVIDER_RATE_LIMIT_BUCKET: cloud_provider_rate_limit_bucket: i64 = "cloudProviderRateLimitBucket",
        FIELD_CLOUD_PROVIDER_RATE_LIMIT_QPS: cloud_provider_rate_limit_qps: i64 = "cloudProviderRateLimitQPS",
        FIELD_EXCLUDE_MASTER_FROM_STANDARD_LB: exclude_master_from_standard_lb: Option<bool> = "excludeMasterFromStandardLB",
        FIELD_LOAD_BALANCER_SKU: load_balancer_sku: String = "loadBalancerSku",
        FIELD_LOCATION: location: String = "location",
        FIELD_MAXIMUM_LOAD_BALANCER_RULE_COUNT: maximum_load_balancer_rule_count: i64 = "maximumLoadBalancerRuleCount",
        FIELD_PRIMARY_AVAILABILITY_SET_NAME: primary_availability_set_name: String = "primaryAvailabilitySetName",
        FIELD_PRIMARY_SCALE_SET_NAME: primary_scale_set_name: String = "primaryScaleSetName",
        FIELD_RESOURCE_GROUP: resource_group: String = "resourceGroup",
        FIELD_ROUTE_TABLE_NAME: route_table_name: String = "routeTableName",
        FIELD_SECURITY_GROUP_NAME: security_group_name: String = "securityGroupName",
        FIELD_SUBNET_NAME: subnet_name: String = "subnetName",
        FIELD_SUBSCRIPTION_ID: subscription_id: String = "subscriptionId",
        FIELD_TENANT_ID: tenant_id: String = "tenantId",
        FIELD_USE_INSTANCE_METADATA: use_instance_metadata: bool = "useInstanceMetadata",
        FIELD_USE_MANAGED_IDENTITY_EXTENSION: use_managed_identity_extension: bool = "useManagedIdentityExtension",
        FIELD_USER_ASSIGNED_IDENTITY_ID: user_assigned_identity_id: String = "userAssignedIdentityID",
        FIELD_VM_TYPE: vm_type: String = "vmType",
        FIELD_VNET_NAME: vnet_name: String = "vnetName",
        FIELD_VNET_RESOURCE_GROUP: vnet_resource_group: String = "vnetResourceGroup",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use serde_json::json;

    #[test]
    fn test_irregular_casing_is_preserved() {
        let provider = AzureCloudProvider {
            cloud_provider_rate_limit_qps: 6,
            user_assigned_identity_id: "identity".to_string(),
            exclude_master_from_standard_lb: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&provider).unwrap(),
            json!({
                "cloudProviderRateLimitQPS": 6,
                "excludeMasterFromStandardLB": false,
                "userAssignedIdentityID": "identity"
            })
        );
    }

    #[test]
    fn test_client_secrets_are_flagged() {
        let secrets: Vec<_> = AzureCloudProvider::FIELDS
            .iter()
            .filter(|field| field.secret)
            .map(|field| field.name)
            .collect();
        assert_eq!(secrets, vec!["aadClientCertPassword", "aadClientSecret"]);
    }
}
