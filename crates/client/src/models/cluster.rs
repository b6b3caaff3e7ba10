//! Cluster resource.
//!
//! Hosted-provider sub-trees (AKS, EKS, GKE, k3s, RKE2) and status documents
//! owned by other controllers are carried as opaque JSON. The RKE
//! configuration and the authorized cluster endpoint are typed.

use std::collections::BTreeMap;

use super::{OwnerReference, RancherKubernetesEngineConfig};

record! {
    /// A downstream cluster managed by Rancher.
    pub struct Cluster => "cluster" {
        FIELD_AAD_CLIENT_CERT_SECRET: aad_client_cert_secret: String = "aadClientCertSecret",
        FIELD_AAD_CLIENT_SECRET: aad_client_secret: String = "aadClientSecret",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_AGENT_ENV_VARS: agent_env_vars: Vec<EnvVar> = "agentEnvVars",
        FIELD_AGENT_FEATURES: agent_features: BTreeMap<String, bool> = "agentFeatures",
        FIELD_AGENT_IMAGE: agent_image: String = "agentImage",
        FIELD_AGENT_IMAGE_OVERRIDE: agent_image_override: String = "agentImageOverride",
        FIELD_AKS_CONFIG: aks_config: serde_json::Value = "aksConfig",
        FIELD_AKS_STATUS: aks_status: serde_json::Value = "aksStatus",
        FIELD_ALLOCATABLE: allocatable: BTreeMap<String, String> = "allocatable",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_API_ENDPOINT: api_endpoint: String = "apiEndpoint",
        FIELD_APPLIED_AGENT_ENV_VARS: applied_agent_env_vars: Vec<EnvVar> = "appliedAgentEnvVars",
        FIELD_APPLIED_CLUSTER_AGENT_DEPLOYMENT_CUSTOMIZATION: applied_cluster_agent_deployment_customization: serde_json::Value = "appliedClusterAgentDeploymentCustomization",
        FIELD_APPLIED_ENABLE_NETWORK_POLICY: applied_enable_network_policy: bool = "appliedEnableNetworkPolicy",
        FIELD_APPLIED_SPEC: applied_spec: serde_json::Value = "appliedSpec",
        FIELD_AUTH_IMAGE: auth_image: String = "authImage",
        FIELD_CA_CERT: ca_cert: String = "caCert",
        FIELD_CAPABILITIES: capabilities: serde_json::Value = "capabilities",
        FIELD_CAPACITY: capacity: BTreeMap<String, String> = "capacity",
        FIELD_CERTIFICATES_EXPIRATION: certificates_expiration: BTreeMap<String, serde_json::Value> = "certificatesExpiration",
        FIELD_CLUSTER_AGENT_DEPLOYMENT_CUSTOMIZATION: cluster_agent_deployment_customization: serde_json::Value = "clusterAgentDeploymentCustomization",
        FIELD_CLUSTER_SECRETS: cluster_secrets: serde_json::Value = "clusterSecrets",
        /// Cluster template answers; the key differs from the field name.
        FIELD_CLUSTER_TEMPLATE_ANSWERS: cluster_template_answers: serde_json::Value = "answers",
        FIELD_CLUSTER_TEMPLATE_ID: cluster_template_id: String = "clusterTemplateId",
        /// Cluster template questions; the key differs from the field name.
        FIELD_CLUSTER_TEMPLATE_QUESTIONS: cluster_template_questions: Vec<serde_json::Value> = "questions",
        FIELD_CLUSTER_TEMPLATE_REVISION_ID: cluster_template_revision_id: String = "clusterTemplateRevisionId",
        FIELD_COMPONENT_STATUSES: component_statuses: Vec<serde_json::Value> = "componentStatuses",
        FIELD_CONDITIONS: conditions: Vec<ClusterCondition> = "conditions",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_CURRENT_CIS_RUN_NAME: current_cis_run_name: String = "currentCisRunName",
        FIELD_DEFAULT_CLUSTER_ROLE_FOR_PROJECT_MEMBERS: default_cluster_role_for_project_members: String = "defaultClusterRoleForProjectMembers",
        FIELD_DEFAULT_POD_SECURITY_ADMISSION_CONFIGURATION_TEMPLATE_NAME: default_pod_security_admission_configuration_template_name: String = "defaultPodSecurityAdmissionConfigurationTemplateName",
        FIELD_DESCRIPTION: description: String = "description",
        FIELD_DESIRED_AGENT_IMAGE: desired_agent_image: String = "desiredAgentImage",
        FIELD_DESIRED_AUTH_IMAGE: desired_auth_image: String = "desiredAuthImage",
        FIELD_DOCKER_ROOT_DIR: docker_root_dir: String = "dockerRootDir",
        FIELD_DRIVER: driver: String = "driver",
        FIELD_EKS_CONFIG: eks_config: serde_json::Value = "eksConfig",
        FIELD_EKS_STATUS: eks_status: serde_json::Value = "eksStatus",
        FIELD_ENABLE_NETWORK_POLICY: enable_network_policy: Option<bool> = "enableNetworkPolicy",
        FIELD_FAILED_SPEC: failed_spec: serde_json::Value = "failedSpec",
        FIELD_FLEET_AGENT_DEPLOYMENT_CUSTOMIZATION: fleet_agent_deployment_customization: serde_json::Value = "fleetAgentDeploymentCustomization",
        FIELD_FLEET_WORKSPACE_NAME: fleet_workspace_name: String = "fleetWorkspaceName",
        FIELD_GKE_CONFIG: gke_config: serde_json::Value = "gkeConfig",
        FIELD_GKE_STATUS: gke_status: serde_json::Value = "gkeStatus",
        FIELD_ID: id: String = "id",
        FIELD_IMPORTED_CONFIG: imported_config: serde_json::Value = "importedConfig",
        FIELD_INTERNAL: internal: bool = "internal",
        FIELD_ISTIO_ENABLED: istio_enabled: bool = "istioEnabled",
        FIELD_K3S_CONFIG: k3s_config: serde_json::Value = "k3sConfig",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LIMITS: limits: BTreeMap<String, String> = "limits",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_LINUX_WORKER_COUNT: linux_worker_count: i64 = "linuxWorkerCount",
        FIELD_LOCAL_CLUSTER_AUTH_ENDPOINT: local_cluster_auth_endpoint: Option<LocalClusterAuthEndpoint> = "localClusterAuthEndpoint",
        FIELD_NAME: name: String = "name",
        FIELD_NODE_COUNT: node_count: i64 = "nodeCount",
        FIELD_NODE_VERSION: node_version: i64 = "nodeVersion",
        FIELD_OPEN_STACK_SECRET: open_stack_secret: String = "openStackSecret",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_PRIVATE_REGISTRY_SECRET: private_registry_secret: String = "privateRegistrySecret",
        FIELD_PROVIDER: provider: String = "provider",
        FIELD_RANCHER_KUBERNETES_ENGINE_CONFIG: rancher_kubernetes_engine_config: Option<RancherKubernetesEngineConfig> = "rancherKubernetesEngineConfig",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_REQUESTED: requested: BTreeMap<String, String> = "requested",
        FIELD_RKE2_CONFIG: rke2_config: serde_json::Value = "rke2Config",
        FIELD_S3_CREDENTIAL_SECRET: s3_credential_secret: String = "s3CredentialSecret",
        FIELD_SERVICE_ACCOUNT_TOKEN_SECRET: service_account_token_secret: String = "serviceAccountTokenSecret",
        FIELD_STATE: state: String = "state",
        FIELD_TRANSITIONING: transitioning: String = "transitioning",
        FIELD_TRANSITIONING_MESSAGE: transitioning_message: String = "transitioningMessage",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
        /// Kubernetes version info reported by the cluster.
        FIELD_VERSION: version: serde_json::Value = "version",
        FIELD_VIRTUAL_CENTER_SECRET: virtual_center_secret: String = "virtualCenterSecret",
        FIELD_VSPHERE_SECRET: vsphere_secret: String = "vsphereSecret",
        FIELD_WEAVE_PASSWORD_SECRET: weave_password_secret: String = "weavePasswordSecret",
        FIELD_WINDOWS_PREFERED_CLUSTER: windows_prefered_cluster: bool = "windowsPreferedCluster",
        FIELD_WINDOWS_WORKER_COUNT: windows_worker_count: i64 = "windowsWorkerCount",
    }
}

impl Cluster {
    /// Condition of the given type, if the cluster reports one.
    pub fn condition(&self, condition_type: &str) -> Option<&ClusterCondition> {
        self.conditions
            .iter()
            .find(|condition| condition.r#type == condition_type)
    }

    /// Whether the `Ready` condition is `True`.
    pub fn is_ready(&self) -> bool {
        self.condition("Ready")
            .is_some_and(|condition| condition.status == "True")
    }
}

record! {
    pub struct ClusterCondition => "clusterCondition" {
        FIELD_LAST_TRANSITION_TIME: last_transition_time: String = "lastTransitionTime",
        FIELD_LAST_UPDATE_TIME: last_update_time: String = "lastUpdateTime",
        FIELD_MESSAGE: message: String = "message",
        FIELD_REASON: reason: String = "reason",
        /// `True`, `False` or `Unknown`.
        FIELD_STATUS: status: String = "status",
        FIELD_TYPE: r#type: String = "type",
    }
}

record! {
    /// Environment variable passed to the cluster agent.
    pub struct EnvVar => "envVar" {
        FIELD_NAME: name: String = "name",
        FIELD_VALUE: value: String = "value",
        FIELD_VALUE_FROM: value_from: serde_json::Value = "valueFrom",
    }
}

record! {
    /// Authorized cluster endpoint that bypasses the Rancher proxy.
    pub struct LocalClusterAuthEndpoint => "localClusterAuthEndpoint" {
        FIELD_CA_CERTS: ca_certs: String = "caCerts",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_FQDN: fqdn: String = "fqdn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::load_fixture;
    use serde_json::json;

    #[test]
    fn test_template_keys_differ_from_field_names() {
        assert_eq!(Cluster::FIELD_CLUSTER_TEMPLATE_ANSWERS, "answers");
        assert_eq!(Cluster::FIELD_CLUSTER_TEMPLATE_QUESTIONS, "questions");

        let cluster = Cluster {
            cluster_template_answers: json!({"values": {"cpu": "2"}}),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&cluster).unwrap(),
            json!({"answers": {"values": {"cpu": "2"}}})
        );
    }

    #[test]
    fn test_cluster_fixture() {
        let cluster: Cluster = serde_json::from_value(load_fixture("cluster.json")).unwrap();

        assert_eq!(cluster.id, "c-m-4x7kq2zt");
        assert_eq!(cluster.r#type, "cluster");
        assert_eq!(cluster.enable_network_policy, Some(false));
        assert_eq!(cluster.agent_features.get("fleet"), Some(&true));
        assert_eq!(cluster.agent_env_vars[0].name, "HTTP_PROXY");
        assert!(cluster.local_cluster_auth_endpoint.as_ref().unwrap().enabled);
        assert!(cluster.is_ready());
        assert_eq!(
            cluster.condition("Provisioned").map(|c| c.status.as_str()),
            Some("True")
        );

        let rke = cluster.rancher_kubernetes_engine_config.as_ref().unwrap();
        assert_eq!(rke.version, "v1.27.10-rancher1-1");
        assert_eq!(cluster.eks_config, serde_json::Value::Null);
        assert_eq!(cluster.version["gitVersion"], json!("v1.27.10"));
    }

    #[test]
    fn test_null_metadata_decodes_as_absent() {
        let cluster: Cluster = crate::format::decode(
            crate::format::Format::Json,
            r#"{"name":"prod","removed":null,"annotations":null,"agentEnvVars":null}"#,
        )
        .unwrap();

        assert_eq!(cluster.name, "prod");
        assert!(cluster.removed.is_empty());
        assert!(cluster.annotations.is_empty());
        assert!(cluster.agent_env_vars.is_empty());
    }

    #[test]
    fn test_not_ready_without_condition() {
        assert!(!Cluster::default().is_ready());
    }
}
