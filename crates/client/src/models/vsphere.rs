//! vSphere in-tree cloud provider options.
//!
//! Several Rust names differ from their wire keys: the vCenter address is
//! sent as `server` and the default datastore as `datastore` (or
//! `default-datastore` in the workspace section).

use std::collections::BTreeMap;

record! {
    pub struct VsphereCloudProvider => "vsphereCloudProvider" {
        FIELD_DISK: disk: Option<DiskVsphereOpts> = "disk",
        FIELD_GLOBAL: global: Option<GlobalVsphereOpts> = "global",
        FIELD_NETWORK: network: Option<NetworkVshpereOpts> = "network",
        /// Keyed by vCenter address.
        FIELD_VIRTUAL_CENTER: virtual_center: BTreeMap<String, VirtualCenterConfig> = "virtualCenter",
        FIELD_WORKSPACE: workspace: Option<WorkspaceVsphereOpts> = "workspace",
    }
}

record! {
    pub struct GlobalVsphereOpts => "globalVsphereOpts" {
        FIELD_DATACENTER: datacenter: String = "datacenter",
        FIELD_DATACENTERS: datacenters: String = "datacenters",
        FIELD_DEFAULT_DATASTORE: default_datastore: String = "datastore",
        FIELD_INSECURE_FLAG: insecure_flag: bool = "insecure-flag",
        FIELD_PASSWORD: password: String = "password" secret,
        FIELD_ROUND_TRIPPER_COUNT: round_tripper_count: i64 = "soap-roundtrip-count",
        FIELD_USER: user: String = "user",
        FIELD_VCENTER_IP: vcenter_ip: String = "server",
        FIELD_VCENTER_PORT: vcenter_port: String = "port",
        FIELD_VM_NAME: vm_name: String = "vm-name",
        FIELD_VM_UUID: vm_uuid: String = "vm-uuid",
        FIELD_WORKING_DIR: working_dir: String = "working-dir",
    }
}

record! {
    pub struct VirtualCenterConfig => "virtualCenterConfig" {
        FIELD_DATACENTERS: datacenters: String = "datacenters",
        FIELD_PASSWORD: password: String = "password" secret,
        FIELD_ROUND_TRIPPER_COUNT: round_tripper_count: i64 = "soap-roundtrip-count",
        FIELD_USER: user: String = "user",
        FIELD_VCENTER_PORT: vcenter_port: String = "port",
    }
}

record! {
    /// Network section. The type name keeps the upstream misspelling.
    pub struct NetworkVshpereOpts => "networkVshpereOpts" {
        FIELD_PUBLIC_NETWORK: public_network: String = "public-network",
    }
}

record! {
    pub struct DiskVsphereOpts => "diskVsphereOpts" {
        FIELD_SCSI_CONTROLLER_TYPE: scsi_controller_type: String = "scsicontrollertype",
    }
}

record! {
    pub struct WorkspaceVsphereOpts => "workspaceVsphereOpts" {
        FIELD_DATACENTER: datacenter: String = "datacenter",
        FIELD_DEFAULT_DATASTORE: default_datastore: String = "default-datastore",
        FIELD_FOLDER: folder: String = "folder",
        FIELD_RESOURCE_POOL_PATH: resource_pool_path: String = "resourcepool-path",
        FIELD_VCENTER_IP: vcenter_ip: String = "server",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renamed_fields_use_config_file_keys() {
        let global = GlobalVsphereOpts {
            vcenter_ip: "vc.example.com".to_string(),
            default_datastore: "ds1".to_string(),
            round_tripper_count: 3,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&global).unwrap(),
            json!({"datastore": "ds1", "server": "vc.example.com", "soap-roundtrip-count": 3})
        );

        let workspace = WorkspaceVsphereOpts {
            default_datastore: "ds1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&workspace).unwrap(),
            json!({"default-datastore": "ds1"})
        );
    }

    #[test]
    fn test_lowercase_scsi_key() {
        let disk: DiskVsphereOpts =
            serde_json::from_value(json!({"scsicontrollertype": "pvscsi"})).unwrap();
        assert_eq!(disk.scsi_controller_type, "pvscsi");
    }
}
