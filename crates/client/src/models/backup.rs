//! etcd snapshot, restore and certificate rotation settings.

use std::collections::BTreeMap;

use super::{Condition, OwnerReference};

record! {
    /// Recurring etcd snapshot schedule.
    pub struct BackupConfig => "backupConfig" {
        FIELD_ENABLED: enabled: Option<bool> = "enabled",
        FIELD_INTERVAL_HOURS: interval_hours: i64 = "intervalHours",
        /// Number of snapshots kept.
        FIELD_RETENTION: retention: i64 = "retention",
        FIELD_S3_BACKUP_CONFIG: s3_backup_config: Option<S3BackupConfig> = "s3BackupConfig",
        FIELD_SAFE_TIMESTAMP: safe_timestamp: bool = "safeTimestamp",
        /// Seconds.
        FIELD_TIMEOUT: timeout: i64 = "timeout",
    }
}

record! {
    pub struct S3BackupConfig => "s3BackupConfig" {
        FIELD_ACCESS_KEY: access_key: String = "accessKey",
        FIELD_BUCKET_NAME: bucket_name: String = "bucketName",
        FIELD_CUSTOM_CA: custom_ca: String = "customCa",
        FIELD_ENDPOINT: endpoint: String = "endpoint",
        FIELD_FOLDER: folder: String = "folder",
        FIELD_REGION: region: String = "region",
        FIELD_SECRET_KEY: secret_key: String = "secretKey" secret,
    }
}

record! {
    /// A single etcd snapshot of a cluster.
    pub struct EtcdBackup => "etcdBackup" {
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_BACKUP_CONFIG: backup_config: Option<BackupConfig> = "backupConfig",
        FIELD_CLUSTER_ID: cluster_id: String = "clusterId",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_FILENAME: filename: String = "filename",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_MANUAL: manual: bool = "manual",
        FIELD_NAME: name: String = "name",
        FIELD_NAMESPACE_ID: namespace_id: String = "namespaceId",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_STATE: state: String = "state",
        FIELD_STATUS: status: Option<EtcdBackupStatus> = "status",
        FIELD_TRANSITIONING: transitioning: String = "transitioning",
        FIELD_TRANSITIONING_MESSAGE: transitioning_message: String = "transitioningMessage",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct EtcdBackupStatus => "etcdBackupStatus" {
        /// Serialized cluster object at snapshot time.
        FIELD_CLUSTER_OBJECT: cluster_object: String = "clusterObject",
        FIELD_CONDITIONS: conditions: Vec<Condition> = "conditions",
        FIELD_KUBERNETES_VERSION: kubernetes_version: String = "kubernetesVersion",
    }
}

record! {
    pub struct RestoreConfig => "restoreConfig" {
        FIELD_RESTORE: restore: bool = "restore",
        FIELD_SNAPSHOT_NAME: snapshot_name: String = "snapshotName",
    }
}

record! {
    pub struct RotateCertificates => "rotateCertificates" {
        FIELD_CA_CERTIFICATES: ca_certificates: bool = "caCertificates",
        /// Any of `etcd`, `kubelet`, `kube-apiserver`, `kube-proxy`,
        /// `kube-scheduler`, `kube-controller-manager`.
        FIELD_SERVICES: services: Vec<String> = "services",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redact::Redact;
    use serde_json::json;

    #[test]
    fn test_backup_config_disabled_is_explicit() {
        let config = BackupConfig {
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"enabled": false})
        );
        assert_eq!(
            serde_json::to_value(BackupConfig::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_etcd_backup_redacts_nested_s3_secret() {
        let mut backup: EtcdBackup = serde_json::from_value(json!({
            "clusterId": "c-abc12",
            "manual": true,
            "backupConfig": {
                "intervalHours": 12,
                "retention": 6,
                "s3BackupConfig": {
                    "accessKey": "AKIA",
                    "secretKey": "s3-secret",
                    "bucketName": "snapshots"
                }
            }
        }))
        .unwrap();

        backup.redact();

        let s3 = backup
            .backup_config
            .as_ref()
            .and_then(|config| config.s3_backup_config.as_ref())
            .unwrap();
        assert_eq!(s3.secret_key, crate::redact::REDACTED);
        assert_eq!(s3.access_key, "AKIA");
        assert!(backup.manual);
    }
}
