//! Record types for the Rancher management `v3` API.
//!
//! Types are organized by resource family in submodules and re-exported here
//! so callers (and the registry) can name them without the module path.

pub mod aci;
pub mod auth_config;
pub mod aws;
pub mod azure;
pub mod backup;
pub mod cloud_provider;
pub mod cluster;
pub mod common;
pub mod ldap;
pub mod node;
pub mod openstack;
pub mod rke;
pub mod saml;
pub mod vsphere;

pub use aci::AciNetworkProvider;
pub use auth_config::{
    AuthConfig, AuthConfigConditions, AuthConfigStatus, AzureAdConfig, GithubConfig,
    GoogleOauthConfig, KeyCloakOidcConfig, LocalConfig, OidcConfig,
};
pub use aws::{AwsCloudProvider, GlobalAwsOpts, ServiceOverride};
pub use azure::AzureCloudProvider;
pub use backup::{
    BackupConfig, EtcdBackup, EtcdBackupStatus, RestoreConfig, RotateCertificates,
    S3BackupConfig,
};
pub use cloud_provider::CloudProvider;
pub use cluster::{Cluster, ClusterCondition, EnvVar, LocalClusterAuthEndpoint};
pub use common::{Collection, Condition, OwnerReference, Pagination, Sort};
pub use ldap::{ActiveDirectoryConfig, FreeIpaConfig, LdapConfig, LdapFields, OpenLdapConfig};
pub use node::{
    CustomConfig, NodeDrainInput, NodeDriver, NodeDriverStatus, NodePool, NodePoolStatus,
    NodeTemplate, NodeTemplateCondition, NodeTemplateStatus, Taint,
};
pub use openstack::{
    BlockStorageOpenstackOpts, GlobalOpenstackOpts, LoadBalancerOpenstackOpts,
    MetadataOpenstackOpts, OpenstackCloudProvider, RouteOpenstackOpts,
};
pub use rke::{
    AuditLog, AuditLogConfig, AuthWebhookConfig, AuthnConfig, AuthzConfig, BastionHost,
    CalicoNetworkProvider, CanalNetworkProvider, DnsConfig, EtcdService, EventRateLimit,
    FlannelNetworkProvider, IngressConfig, KubeApiService, KubeControllerService, KubeletService,
    KubeproxyService, LinearAutoscalerParams, MonitoringConfig, NetworkConfig, NodeUpgradeStrategy,
    Nodelocal, PrivateRegistry, RancherKubernetesEngineConfig, RkeConfigNode, RkeConfigServices,
    RkeSystemImages, RkeTaint, SchedulerService, SecretsEncryptionConfig, WeaveNetworkProvider,
};
pub use saml::{AdfsConfig, KeyCloakConfig, OktaConfig, PingConfig, SamlConfig, ShibbolethConfig};
pub use vsphere::{
    DiskVsphereOpts, GlobalVsphereOpts, NetworkVshpereOpts, VirtualCenterConfig,
    VsphereCloudProvider, WorkspaceVsphereOpts,
};
