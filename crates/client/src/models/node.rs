//! Node templates, node pools, node drivers and custom nodes.
//!
//! Resources here carry their desired-state fields at the top level, as the
//! management API does. References by name become `*Id` fields on the wire.

use std::collections::BTreeMap;

use super::{Condition, OwnerReference};

record! {
    pub struct NodeTemplate => "nodeTemplate" {
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_AUTH_CERTIFICATE_AUTHORITY: auth_certificate_authority: String = "authCertificateAuthority",
        FIELD_AUTH_KEY: auth_key: String = "authKey",
        /// Populated from the server-side `cloudCredentialName` reference.
        FIELD_CLOUD_CREDENTIAL_ID: cloud_credential_id: String = "cloudCredentialId",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DESCRIPTION: description: String = "description",
        FIELD_DISPLAY_NAME: display_name: String = "displayName",
        FIELD_DOCKER_VERSION: docker_version: String = "dockerVersion",
        FIELD_DRIVER: driver: String = "driver",
        FIELD_ENGINE_ENV: engine_env: BTreeMap<String, String> = "engineEnv",
        FIELD_ENGINE_INSECURE_REGISTRY: engine_insecure_registry: Vec<String> = "engineInsecureRegistry",
        FIELD_ENGINE_INSTALL_URL: engine_install_url: String = "engineInstallURL",
        FIELD_ENGINE_LABEL: engine_label: BTreeMap<String, String> = "engineLabel",
        FIELD_ENGINE_OPT: engine_opt: BTreeMap<String, String> = "engineOpt",
        FIELD_ENGINE_REGISTRY_MIRROR: engine_registry_mirror: Vec<String> = "engineRegistryMirror",
        FIELD_ENGINE_STORAGE_DRIVER: engine_storage_driver: String = "engineStorageDriver",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_LOG_OPT: log_opt: BTreeMap<String, String> = "logOpt",
        FIELD_NAME: name: String = "name",
        FIELD_NAMESPACE_ID: namespace_id: String = "namespaceId",
        FIELD_NODE_TAINTS: node_taints: Vec<Taint> = "nodeTaints",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_STATE: state: String = "state",
        FIELD_STATUS: status: Option<NodeTemplateStatus> = "status",
        FIELD_STORAGE_OPT: storage_opt: BTreeMap<String, String> = "storageOpt",
        FIELD_TRANSITIONING: transitioning: String = "transitioning",
        FIELD_TRANSITIONING_MESSAGE: transitioning_message: String = "transitioningMessage",
        FIELD_TYPE: r#type: String = "type",
        FIELD_USE_INTERNAL_IP_ADDRESS: use_internal_ip_address: Option<bool> = "useInternalIpAddress",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct NodeTemplateStatus => "nodeTemplateStatus" {
        FIELD_CONDITIONS: conditions: Vec<NodeTemplateCondition> = "conditions",
    }
}

record! {
    pub struct NodeTemplateCondition => "nodeTemplateCondition" {
        FIELD_LAST_TRANSITION_TIME: last_transition_time: String = "lastTransitionTime",
        FIELD_LAST_UPDATE_TIME: last_update_time: String = "lastUpdateTime",
        FIELD_REASON: reason: String = "reason",
        FIELD_STATUS: status: String = "status",
        FIELD_TYPE: r#type: String = "type",
    }
}

record! {
    pub struct NodePool => "nodePool" {
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        /// Populated from the server-side `clusterName` reference.
        FIELD_CLUSTER_ID: cluster_id: String = "clusterId",
        FIELD_CONTROL_PLANE: control_plane: bool = "controlPlane",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        /// Seconds; zero disables deletion of not-ready nodes.
        FIELD_DELETE_NOT_READY_AFTER_SECS: delete_not_ready_after_secs: i64 = "deleteNotReadyAfterSecs",
        FIELD_DISPLAY_NAME: display_name: String = "displayName",
        FIELD_DRAIN_BEFORE_DELETE: drain_before_delete: bool = "drainBeforeDelete",
        FIELD_ETCD: etcd: bool = "etcd",
        FIELD_HOSTNAME_PREFIX: hostname_prefix: String = "hostnamePrefix",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_NAMESPACE_ID: namespace_id: String = "namespaceId",
        FIELD_NODE_ANNOTATIONS: node_annotations: BTreeMap<String, String> = "nodeAnnotations",
        FIELD_NODE_LABELS: node_labels: BTreeMap<String, String> = "nodeLabels",
        FIELD_NODE_TAINTS: node_taints: Vec<Taint> = "nodeTaints",
        /// Populated from the server-side `nodeTemplateName` reference.
        FIELD_NODE_TEMPLATE_ID: node_template_id: String = "nodeTemplateId",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_QUANTITY: quantity: i64 = "quantity",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_STATE: state: String = "state",
        FIELD_STATUS: status: Option<NodePoolStatus> = "status",
        FIELD_TRANSITIONING: transitioning: String = "transitioning",
        FIELD_TRANSITIONING_MESSAGE: transitioning_message: String = "transitioningMessage",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
        FIELD_WORKER: worker: bool = "worker",
    }
}

record! {
    pub struct NodePoolStatus => "nodePoolStatus" {
        FIELD_CONDITIONS: conditions: Vec<Condition> = "conditions",
    }
}

record! {
    /// Kubernetes node taint.
    pub struct Taint => "taint" {
        FIELD_EFFECT: effect: String = "effect",
        FIELD_KEY: key: String = "key",
        FIELD_TIME_ADDED: time_added: String = "timeAdded",
        FIELD_VALUE: value: String = "value",
    }
}

record! {
    /// Connection details for a node registered by hand instead of provisioned.
    pub struct CustomConfig => "customConfig" {
        FIELD_ADDRESS: address: String = "address",
        FIELD_DOCKER_SOCKET: docker_socket: String = "dockerSocket",
        FIELD_INTERNAL_ADDRESS: internal_address: String = "internalAddress",
        FIELD_LABEL: label: BTreeMap<String, String> = "label",
        FIELD_SSH_CERT: ssh_cert: String = "sshCert",
        FIELD_SSH_KEY: ssh_key: String = "sshKey" secret,
        /// `key=value:Effect` strings.
        FIELD_TAINTS: taints: Vec<String> = "taints",
        FIELD_USER: user: String = "user",
    }
}

record! {
    pub struct NodeDrainInput => "nodeDrainInput" {
        FIELD_DELETE_LOCAL_DATA: delete_local_data: bool = "deleteLocalData",
        FIELD_FORCE: force: bool = "force",
        /// Seconds; negative means the pod's own grace period.
        FIELD_GRACE_PERIOD: grace_period: i64 = "gracePeriod",
        FIELD_IGNORE_DAEMON_SETS: ignore_daemon_sets: Option<bool> = "ignoreDaemonSets",
        FIELD_TIMEOUT: timeout: i64 = "timeout",
    }
}

record! {
    /// docker-machine driver available for node templates.
    pub struct NodeDriver => "nodeDriver" {
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ACTIVE: active: bool = "active",
        FIELD_ADD_CLOUD_CREDENTIAL: add_cloud_credential: bool = "addCloudCredential",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_BUILTIN: builtin: bool = "builtin",
        FIELD_CHECKSUM: checksum: String = "checksum",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DESCRIPTION: description: String = "description",
        FIELD_DISPLAY_NAME: display_name: String = "displayName",
        FIELD_EXTERNAL_ID: external_id: String = "externalId",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_STATE: state: String = "state",
        FIELD_STATUS: status: Option<NodeDriverStatus> = "status",
        FIELD_TRANSITIONING: transitioning: String = "transitioning",
        FIELD_TRANSITIONING_MESSAGE: transitioning_message: String = "transitioningMessage",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UI_URL: ui_url: String = "uiUrl",
        FIELD_URL: url: String = "url",
        FIELD_UUID: uuid: String = "uuid",
        FIELD_WHITELIST_DOMAINS: whitelist_domains: Vec<String> = "whitelistDomains",
    }
}

record! {
    pub struct NodeDriverStatus => "nodeDriverStatus" {
        FIELD_APPLIED_CHECKSUM: applied_checksum: String = "appliedChecksum",
        FIELD_APPLIED_DOCKER_MACHINE_VERSION: applied_docker_machine_version: String = "appliedDockerMachineVersion",
        FIELD_APPLIED_URL: applied_url: String = "appliedURL",
        FIELD_CONDITIONS: conditions: Vec<Condition> = "conditions",
    }
}
