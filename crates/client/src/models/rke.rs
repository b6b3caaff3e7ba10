//! RKE cluster configuration.
//!
//! Mirrors `cluster.yml` as exposed by the management API: node list,
//! per-component service options, networking, DNS, ingress and system images.
//! Sub-documents whose schema belongs to Kubernetes itself (audit policy,
//! admission and encryption configuration, update strategies) are kept as
//! opaque JSON.

use std::collections::BTreeMap;

use super::{AciNetworkProvider, BackupConfig, CloudProvider, NodeDrainInput, RestoreConfig, RotateCertificates};

record! {
    pub struct RancherKubernetesEngineConfig => "rancherKubernetesEngineConfig" {
        /// Seconds.
        FIELD_ADDON_JOB_TIMEOUT: addon_job_timeout: i64 = "addonJobTimeout",
        FIELD_ADDONS: addons: String = "addons",
        FIELD_ADDONS_INCLUDE: addons_include: Vec<String> = "addonsInclude",
        FIELD_AUTHENTICATION: authentication: Option<AuthnConfig> = "authentication",
        FIELD_AUTHORIZATION: authorization: Option<AuthzConfig> = "authorization",
        FIELD_BASTION_HOST: bastion_host: Option<BastionHost> = "bastionHost",
        FIELD_CLOUD_PROVIDER: cloud_provider: Option<CloudProvider> = "cloudProvider",
        FIELD_CLUSTER_NAME: cluster_name: String = "clusterName",
        FIELD_DNS: dns: Option<DnsConfig> = "dns",
        FIELD_IGNORE_DOCKER_VERSION: ignore_docker_version: Option<bool> = "ignoreDockerVersion",
        FIELD_INGRESS: ingress: Option<IngressConfig> = "ingress",
        FIELD_MONITORING: monitoring: Option<MonitoringConfig> = "monitoring",
        FIELD_NETWORK: network: Option<NetworkConfig> = "network",
        FIELD_NODES: nodes: Vec<RkeConfigNode> = "nodes",
        FIELD_PREFIX_PATH: prefix_path: String = "prefixPath",
        FIELD_PRIVATE_REGISTRIES: private_registries: Vec<PrivateRegistry> = "privateRegistries",
        FIELD_RESTORE: restore: Option<RestoreConfig> = "restore",
        FIELD_ROTATE_CERTIFICATES: rotate_certificates: Option<RotateCertificates> = "rotateCertificates",
        FIELD_SERVICES: services: Option<RkeConfigServices> = "services",
        FIELD_SSH_AGENT_AUTH: ssh_agent_auth: bool = "sshAgentAuth",
        FIELD_SSH_CERT_PATH: ssh_cert_path: String = "sshCertPath",
        FIELD_SSH_KEY_PATH: ssh_key_path: String = "sshKeyPath",
        FIELD_SYSTEM_IMAGES: system_images: Option<RkeSystemImages> = "systemImages",
        FIELD_UPGRADE_STRATEGY: upgrade_strategy: Option<NodeUpgradeStrategy> = "upgradeStrategy",
        FIELD_VERSION: version: String = "kubernetesVersion",
    }
}

record! {
    pub struct NodeUpgradeStrategy => "nodeUpgradeStrategy" {
        FIELD_DRAIN: drain: bool = "drain",
        FIELD_MAX_UNAVAILABLE_CONTROLPLANE: max_unavailable_controlplane: String = "maxUnavailableControlplane",
        /// Count or percentage, e.g. `10%`.
        FIELD_MAX_UNAVAILABLE_WORKER: max_unavailable_worker: String = "maxUnavailableWorker",
        FIELD_NODE_DRAIN_INPUT: node_drain_input: Option<NodeDrainInput> = "nodeDrainInput",
    }
}

record! {
    /// Jump host used to reach the cluster nodes over SSH.
    pub struct BastionHost => "bastionHost" {
        FIELD_ADDRESS: address: String = "address",
        FIELD_PORT: port: String = "port",
        FIELD_SSH_AGENT_AUTH: ssh_agent_auth: bool = "sshAgentAuth",
        FIELD_SSH_CERT: ssh_cert: String = "sshCert",
        FIELD_SSH_CERT_PATH: ssh_cert_path: String = "sshCertPath",
        FIELD_SSH_KEY: ssh_key: String = "sshKey" secret,
        FIELD_SSH_KEY_PATH: ssh_key_path: String = "sshKeyPath",
        FIELD_USER: user: String = "user",
    }
}

record! {
    pub struct PrivateRegistry => "privateRegistry" {
        FIELD_IS_DEFAULT: is_default: bool = "isDefault",
        FIELD_PASSWORD: password: String = "password" secret,
        FIELD_URL: url: String = "url",
        FIELD_USER: user: String = "user",
    }
}

record! {
    /// Container images for every system component.
    pub struct RkeSystemImages => "rkeSystemImages" {
        FIELD_ALPINE: alpine: String = "alpine",
        FIELD_CALICO_CNI: calico_cni: String = "calicoCni",
        FIELD_CALICO_CONTROLLERS: calico_controllers: String = "calicoControllers",
        FIELD_CALICO_CTL: calico_ctl: String = "calicoCtl",
        FIELD_CALICO_FLEX_VOL: calico_flex_vol: String = "calicoFlexVol",
        FIELD_CALICO_NODE: calico_node: String = "calicoNode",
        FIELD_CANAL_CNI: canal_cni: String = "canalCni",
        FIELD_CANAL_FLANNEL: canal_flannel: String = "canalFlannel",
        FIELD_CANAL_FLEX_VOL: canal_flex_vol: String = "canalFlexVol",
        FIELD_CANAL_NODE: canal_node: String = "canalNode",
        FIELD_CERT_DOWNLOADER: cert_downloader: String = "certDownloader",
        FIELD_CORE_DNS: core_dns: String = "coredns",
        FIELD_CORE_DNS_AUTOSCALER: core_dns_autoscaler: String = "corednsAutoscaler",
        FIELD_DNSMASQ: dnsmasq: String = "dnsmasq",
        FIELD_ETCD: etcd: String = "etcd",
        FIELD_FLANNEL: flannel: String = "flannel",
        FIELD_FLANNEL_CNI: flannel_cni: String = "flannelCni",
        FIELD_INGRESS: ingress: String = "ingress",
        FIELD_INGRESS_BACKEND: ingress_backend: String = "ingressBackend",
        FIELD_KUBE_DNS: kube_dns: String = "kubedns",
        FIELD_KUBE_DNS_AUTOSCALER: kube_dns_autoscaler: String = "kubednsAutoscaler",
        FIELD_KUBE_DNS_SIDECAR: kube_dns_sidecar: String = "kubednsSidecar",
        FIELD_KUBERNETES: kubernetes: String = "kubernetes",
        FIELD_KUBERNETES_SERVICES_SIDECAR: kubernetes_services_sidecar: String = "kubernetesServicesSidecar",
        FIELD_METRICS_SERVER: metrics_server: String = "metricsServer",
        FIELD_NGINX_PROXY: nginx_proxy: String = "nginxProxy",
        FIELD_NODELOCAL: nodelocal: String = "nodelocal",
        FIELD_POD_INFRA_CONTAINER: pod_infra_container: String = "podInfraContainer",
        FIELD_WEAVE_CNI: weave_cni: String = "weaveCni",
        FIELD_WEAVE_NODE: weave_node: String = "weaveNode",
        FIELD_WINDOWS_POD_INFRA_CONTAINER: windows_pod_infra_container: String = "windowsPodInfraContainer",
    }
}

record! {
    pub struct RkeConfigNode => "rkeConfigNode" {
        FIELD_ADDRESS: address: String = "address",
        FIELD_DOCKER_SOCKET: docker_socket: String = "dockerSocket",
        FIELD_HOSTNAME_OVERRIDE: hostname_override: String = "hostnameOverride",
        FIELD_INTERNAL_ADDRESS: internal_address: String = "internalAddress",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        /// Populated from the server-side `nodeName` reference.
        FIELD_NODE_ID: node_id: String = "nodeId",
        FIELD_PORT: port: String = "port",
        /// Any of `etcd`, `controlplane`, `worker`.
        FIELD_ROLE: role: Vec<String> = "role",
        FIELD_SSH_AGENT_AUTH: ssh_agent_auth: bool = "sshAgentAuth",
        FIELD_SSH_CERT: ssh_cert: String = "sshCert",
        FIELD_SSH_CERT_PATH: ssh_cert_path: String = "sshCertPath",
        FIELD_SSH_KEY: ssh_key: String = "sshKey" secret,
        FIELD_SSH_KEY_PATH: ssh_key_path: String = "sshKeyPath",
        FIELD_TAINTS: taints: Vec<RkeTaint> = "taints",
        FIELD_USER: user: String = "user",
    }
}

record! {
    pub struct RkeTaint => "rkeTaint" {
        FIELD_EFFECT: effect: String = "effect",
        FIELD_KEY: key: String = "key",
        FIELD_TIME_ADDED: time_added: String = "timeAdded",
        FIELD_VALUE: value: String = "value",
    }
}

record! {
    pub struct RkeConfigServices => "rkeConfigServices" {
        FIELD_ETCD: etcd: Option<EtcdService> = "etcd",
        FIELD_KUBE_API: kube_api: Option<KubeApiService> = "kubeApi",
        FIELD_KUBE_CONTROLLER: kube_controller: Option<KubeControllerService> = "kubeController",
        FIELD_KUBELET: kubelet: Option<KubeletService> = "kubelet",
        FIELD_KUBEPROXY: kubeproxy: Option<KubeproxyService> = "kubeproxy",
        FIELD_SCHEDULER: scheduler: Option<SchedulerService> = "scheduler",
    }
}

record! {
    pub struct EtcdService => "etcdService" {
        FIELD_BACKUP_CONFIG: backup_config: Option<BackupConfig> = "backupConfig",
        FIELD_CA_CERT: ca_cert: String = "caCert",
        FIELD_CERT: cert: String = "cert",
        /// Snapshot interval, e.g. `12h`.
        FIELD_CREATION: creation: String = "creation",
        FIELD_EXTERNAL_URLS: external_urls: Vec<String> = "externalUrls",
        FIELD_EXTRA_ARGS: extra_args: BTreeMap<String, String> = "extraArgs",
        FIELD_EXTRA_BINDS: extra_binds: Vec<String> = "extraBinds",
        FIELD_EXTRA_ENV: extra_env: Vec<String> = "extraEnv",
        FIELD_GID: gid: i64 = "gid",
        FIELD_IMAGE: image: String = "image",
        FIELD_KEY: key: String = "key",
        FIELD_PATH: path: String = "path",
        FIELD_RETENTION: retention: String = "retention",
        FIELD_SNAPSHOT: snapshot: Option<bool> = "snapshot",
        FIELD_UID: uid: i64 = "uid",
    }
}

record! {
    pub struct KubeApiService => "kubeAPIService" {
        FIELD_ADMISSION_CONFIGURATION: admission_configuration: serde_json::Value = "admissionConfiguration",
        FIELD_ALWAYS_PULL_IMAGES: always_pull_images: bool = "alwaysPullImages",
        FIELD_AUDIT_LOG: audit_log: Option<AuditLog> = "auditLog",
        FIELD_EVENT_RATE_LIMIT: event_rate_limit: Option<EventRateLimit> = "eventRateLimit",
        FIELD_EXTRA_ARGS: extra_args: BTreeMap<String, String> = "extraArgs",
        FIELD_EXTRA_BINDS: extra_binds: Vec<String> = "extraBinds",
        FIELD_EXTRA_ENV: extra_env: Vec<String> = "extraEnv",
        FIELD_IMAGE: image: String = "image",
        FIELD_POD_SECURITY_POLICY: pod_security_policy: bool = "podSecurityPolicy",
        FIELD_SECRETS_ENCRYPTION_CONFIG: secrets_encryption_config: Option<SecretsEncryptionConfig> = "secretsEncryptionConfig",
        FIELD_SERVICE_CLUSTER_IP_RANGE: service_cluster_ip_range: String = "serviceClusterIpRange",
        FIELD_SERVICE_NODE_PORT_RANGE: service_node_port_range: String = "serviceNodePortRange",
    }
}

record! {
    pub struct KubeControllerService => "kubeControllerService" {
        FIELD_CLUSTER_CIDR: cluster_cidr: String = "clusterCidr",
        FIELD_EXTRA_ARGS: extra_args: BTreeMap<String, String> = "extraArgs",
        FIELD_EXTRA_BINDS: extra_binds: Vec<String> = "extraBinds",
        FIELD_EXTRA_ENV: extra_env: Vec<String> = "extraEnv",
        FIELD_IMAGE: image: String = "image",
        FIELD_SERVICE_CLUSTER_IP_RANGE: service_cluster_ip_range: String = "serviceClusterIpRange",
    }
}

record! {
    pub struct KubeletService => "kubeletService" {
        FIELD_CLUSTER_DNS_SERVER: cluster_dns_server: String = "clusterDnsServer",
        FIELD_CLUSTER_DOMAIN: cluster_domain: String = "clusterDomain",
        FIELD_EXTRA_ARGS: extra_args: BTreeMap<String, String> = "extraArgs",
        FIELD_EXTRA_BINDS: extra_binds: Vec<String> = "extraBinds",
        FIELD_EXTRA_ENV: extra_env: Vec<String> = "extraEnv",
        FIELD_FAIL_SWAP_ON: fail_swap_on: bool = "failSwapOn",
        FIELD_GENERATE_SERVING_CERTIFICATE: generate_serving_certificate: bool = "generateServingCertificate",
        FIELD_IMAGE: image: String = "image",
        FIELD_INFRA_CONTAINER_IMAGE: infra_container_image: String = "infraContainerImage",
    }
}

record! {
    pub struct KubeproxyService => "kubeproxyService" {
        FIELD_EXTRA_ARGS: extra_args: BTreeMap<String, String> = "extraArgs",
        FIELD_EXTRA_BINDS: extra_binds: Vec<String> = "extraBinds",
        FIELD_EXTRA_ENV: extra_env: Vec<String> = "extraEnv",
        FIELD_IMAGE: image: String = "image",
    }
}

record! {
    pub struct SchedulerService => "schedulerService" {
        FIELD_EXTRA_ARGS: extra_args: BTreeMap<String, String> = "extraArgs",
        FIELD_EXTRA_BINDS: extra_binds: Vec<String> = "extraBinds",
        FIELD_EXTRA_ENV: extra_env: Vec<String> = "extraEnv",
        FIELD_IMAGE: image: String = "image",
    }
}

record! {
    pub struct AuditLog => "auditLog" {
        FIELD_CONFIGURATION: configuration: Option<AuditLogConfig> = "configuration",
        FIELD_ENABLED: enabled: bool = "enabled",
    }
}

record! {
    pub struct AuditLogConfig => "auditLogConfig" {
        FIELD_FORMAT: format: String = "format",
        FIELD_MAX_AGE: max_age: i64 = "maxAge",
        FIELD_MAX_BACKUP: max_backup: i64 = "maxBackup",
        FIELD_MAX_SIZE: max_size: i64 = "maxSize",
        FIELD_PATH: path: String = "path",
        /// `audit.k8s.io` policy document.
        FIELD_POLICY: policy: serde_json::Value = "policy",
    }
}

record! {
    pub struct EventRateLimit => "eventRateLimit" {
        FIELD_CONFIGURATION: configuration: serde_json::Value = "configuration",
        FIELD_ENABLED: enabled: bool = "enabled",
    }
}

record! {
    pub struct SecretsEncryptionConfig => "secretsEncryptionConfig" {
        FIELD_CUSTOM_CONFIG: custom_config: serde_json::Value = "customConfig",
        FIELD_ENABLED: enabled: bool = "enabled",
    }
}

record! {
    pub struct NetworkConfig => "networkConfig" {
        FIELD_ACI_NETWORK_PROVIDER: aci_network_provider: Option<AciNetworkProvider> = "aciNetworkProvider",
        FIELD_CALICO_NETWORK_PROVIDER: calico_network_provider: Option<CalicoNetworkProvider> = "calicoNetworkProvider",
        FIELD_CANAL_NETWORK_PROVIDER: canal_network_provider: Option<CanalNetworkProvider> = "canalNetworkProvider",
        FIELD_FLANNEL_NETWORK_PROVIDER: flannel_network_provider: Option<FlannelNetworkProvider> = "flannelNetworkProvider",
        FIELD_MTU: mtu: i64 = "mtu",
        FIELD_NODE_SELECTOR: node_selector: BTreeMap<String, String> = "nodeSelector",
        FIELD_OPTIONS: options: BTreeMap<String, String> = "options",
        /// `canal`, `flannel`, `calico`, `weave`, `aci` or `none`.
        FIELD_PLUGIN: plugin: String = "plugin",
        FIELD_UPDATE_STRATEGY: update_strategy: serde_json::Value = "updateStrategy",
        FIELD_WEAVE_NETWORK_PROVIDER: weave_network_provider: Option<WeaveNetworkProvider> = "weaveNetworkProvider",
    }
}

record! {
    pub struct CalicoNetworkProvider => "calicoNetworkProvider" {
        FIELD_CLOUD_PROVIDER: cloud_provider: String = "cloudProvider",
    }
}

record! {
    pub struct CanalNetworkProvider => "canalNetworkProvider" {
        FIELD_IFACE: iface: String = "iface",
    }
}

record! {
    pub struct FlannelNetworkProvider => "flannelNetworkProvider" {
        FIELD_IFACE: iface: String = "iface",
    }
}

record! {
    pub struct WeaveNetworkProvider => "weaveNetworkProvider" {
        FIELD_PASSWORD: password: String = "password" secret,
    }
}

record! {
    pub struct AuthnConfig => "authnConfig" {
        /// Extra subject alternative names for the API server certificate.
        FIELD_SANS: sans: Vec<String> = "sans",
        FIELD_STRATEGY: strategy: String = "strategy",
        FIELD_WEBHOOK: webhook: Option<AuthWebhookConfig> = "webhook",
    }
}

record! {
    pub struct AuthWebhookConfig => "authWebhookConfig" {
        FIELD_CACHE_TIMEOUT: cache_timeout: String = "cacheTimeout",
        FIELD_CONFIG_FILE: config_file: String = "configFile",
    }
}

record! {
    pub struct AuthzConfig => "authzConfig" {
        FIELD_MODE: mode: String = "mode",
        FIELD_OPTIONS: options: BTreeMap<String, String> = "options",
    }
}

record! {
    pub struct IngressConfig => "ingressConfig" {
        FIELD_DNS_POLICY: dns_policy: String = "dnsPolicy",
        FIELD_EXTRA_ARGS: extra_args: BTreeMap<String, String> = "extraArgs",
        FIELD_EXTRA_ENVS: extra_envs: Vec<serde_json::Value> = "extraEnvs",
        FIELD_EXTRA_VOLUME_MOUNTS: extra_volume_mounts: Vec<serde_json::Value> = "extraVolumeMounts",
        FIELD_EXTRA_VOLUMES: extra_volumes: Vec<serde_json::Value> = "extraVolumes",
        FIELD_NODE_SELECTOR: node_selector: BTreeMap<String, String> = "nodeSelector",
        FIELD_OPTIONS: options: BTreeMap<String, String> = "options",
        FIELD_PROVIDER: provider: String = "provider",
        FIELD_UPDATE_STRATEGY: update_strategy: serde_json::Value = "updateStrategy",
    }
}

record! {
    pub struct MonitoringConfig => "monitoringConfig" {
        FIELD_NODE_SELECTOR: node_selector: BTreeMap<String, String> = "nodeSelector",
        FIELD_OPTIONS: options: BTreeMap<String, String> = "options",
        FIELD_PROVIDER: provider: String = "provider",
        FIELD_REPLICAS: replicas: Option<i64> = "replicas",
        FIELD_UPDATE_STRATEGY: update_strategy: serde_json::Value = "updateStrategy",
    }
}

record! {
    /// Cluster DNS add-on. Several keys are all-lowercase on the wire.
    pub struct DnsConfig => "dnsConfig" {
        FIELD_LINEAR_AUTOSCALER_PARAMS: linear_autoscaler_params: Option<LinearAutoscalerParams> = "linearAutoscalerParams",
        FIELD_NODE_SELECTOR: node_selector: BTreeMap<String, String> = "nodeSelector",
        FIELD_NODELOCAL: nodelocal: Option<Nodelocal> = "nodelocal",
        FIELD_PROVIDER: provider: String = "provider",
        FIELD_REVERSE_CIDRS: reverse_cidrs: Vec<String> = "reversecidrs",
        FIELD_STUB_DOMAINS: stub_domains: BTreeMap<String, Vec<String>> = "stubdomains",
        FIELD_UPDATE_STRATEGY: update_strategy: serde_json::Value = "updateStrategy",
        FIELD_UPSTREAM_NAMESERVERS: upstream_nameservers: Vec<String> = "upstreamnameservers",
    }
}

record! {
    pub struct Nodelocal => "nodelocal" {
        /// Link-local address the node cache listens on.
        FIELD_IP_ADDRESS: ip_address: String = "ipAddress",
        FIELD_NODE_SELECTOR: node_selector: BTreeMap<String, String> = "nodeSelector",
        FIELD_UPDATE_STRATEGY: update_strategy: serde_json::Value = "updateStrategy",
    }
}

record! {
    /// Parameters for the cluster-proportional DNS autoscaler.
    pub struct LinearAutoscalerParams => "linearAutoscalerParams" {
        FIELD_CORES_PER_REPLICA: cores_per_replica: f64 = "coresPerReplica",
        FIELD_MAX: max: i64 = "max",
        FIELD_MIN: min: i64 = "min",
        FIELD_NODES_PER_REPLICA: nodes_per_replica: f64 = "nodesPerReplica",
        FIELD_PREVENT_SINGLE_POINT_FAILURE: prevent_single_point_failure: Option<bool> = "preventSinglePointFailure",
    }
}
