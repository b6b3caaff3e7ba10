//! SAML authentication providers.
//!
//! Ping, ADFS and KeyCloak carry the plain SAML field set. Okta and
//! Shibboleth add an `openLdapConfig` section used for group lookups.

use std::collections::BTreeMap;

use super::{AuthConfigStatus, LdapFields, OwnerReference};

record! {
    pub struct SamlConfig => "samlConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DISPLAY_NAME_FIELD: display_name_field: String = "displayNameField",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ENTITY_ID: entity_id: String = "entityID",
        FIELD_GROUPS_FIELD: groups_field: String = "groupsField",
        FIELD_ID: id: String = "id",
        FIELD_IDP_METADATA_CONTENT: idp_metadata_content: String = "idpMetadataContent",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_RANCHER_API_HOST: rancher_api_host: String = "rancherApiHost",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SP_CERT: sp_cert: String = "spCert",
        FIELD_SP_KEY: sp_key: String = "spKey" secret,
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UID_FIELD: uid_field: String = "uidField",
        FIELD_USER_NAME_FIELD: user_name_field: String = "userNameField",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct PingConfig => "pingConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DISPLAY_NAME_FIELD: display_name_field: String = "displayNameField",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ENTITY_ID: entity_id: String = "entityID",
        FIELD_GROUPS_FIELD: groups_field: String = "groupsField",
        FIELD_ID: id: String = "id",
        FIELD_IDP_METADATA_CONTENT: idp_metadata_content: String = "idpMetadataContent",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_RANCHER_API_HOST: rancher_api_host: String = "rancherApiHost",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SP_CERT: sp_cert: String = "spCert",
        FIELD_SP_KEY: sp_key: String = "spKey" secret,
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UID_FIELD: uid_field: String = "uidField",
        FIELD_USER_NAME_FIELD: user_name_field: String = "userNameField",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct AdfsConfig => "adfsConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DISPLAY_NAME_FIELD: display_name_field: String = "displayNameField",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ENTITY_ID: entity_id: String = "entityID",
        FIELD_GROUPS_FIELD: groups_field: String = "groupsField",
        FIELD_ID: id: String = "id",
        FIELD_IDP_METADATA_CONTENT: idp_metadata_content: String = "idpMetadataContent",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_RANCHER_API_HOST: rancher_api_host: String = "rancherApiHost",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SP_CERT: sp_cert: String = "spCert",
        FIELD_SP_KEY: sp_key: String = "spKey" secret,
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UID_FIELD: uid_field: String = "uidField",
        FIELD_USER_NAME_FIELD: user_name_field: String = "userNameField",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct KeyCloakConfig => "keyCloakConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DISPLAY_NAME_FIELD: display_name_field: String = "displayNameField",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ENTITY_ID: entity_id: String = "entityID",
        FIELD_GROUPS_FIELD: groups_field: String = "groupsField",
        FIELD_ID: id: String = "id",
        FIELD_IDP_METADATA_CONTENT: idp_metadata_content: String = "idpMetadataContent",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_RANCHER_API_HOST: rancher_api_host: String = "rancherApiHost",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SP_CERT: sp_cert: String = "spCert",
        FIELD_SP_KEY: sp_key: String = "spKey" secret,
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UID_FIELD: uid_field: String = "uidField",
        FIELD_USER_NAME_FIELD: user_name_field: String = "userNameField",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct OktaConfig => "oktaConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DISPLAY_NAME_FIELD: display_name_field: String = "displayNameField",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ENTITY_ID: entity_id: String = "entityID",
        FIELD_GROUPS_FIELD: groups_field: String = "groupsField",
        FIELD_ID: id: String = "id",
        FIELD_IDP_METADATA_CONTENT: idp_metadata_content: String = "idpMetadataContent",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OPEN_LDAP_CONFIG: open_ldap_config: Option<LdapFields> = "openLdapConfig",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_RANCHER_API_HOST: rancher_api_host: String = "rancherApiHost",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SP_CERT: sp_cert: String = "spCert",
        FIELD_SP_KEY: sp_key: String = "spKey" secret,
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UID_FIELD: uid_field: String = "uidField",
        FIELD_USER_NAME_FIELD: user_name_field: String = "userNameField",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct ShibbolethConfig => "shibbolethConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DISPLAY_NAME_FIELD: display_name_field: String = "displayNameField",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ENTITY_ID: entity_id: String = "entityID",
        FIELD_GROUPS_FIELD: groups_field: String = "groupsField",
        FIELD_ID: id: String = "id",
        FIELD_IDP_METADATA_CONTENT: idp_metadata_content: String = "idpMetadataContent",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OPEN_LDAP_CONFIG: open_ldap_config: Option<LdapFields> = "openLdapConfig",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_RANCHER_API_HOST: rancher_api_host: String = "rancherApiHost",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SP_CERT: sp_cert: String = "spCert",
        FIELD_SP_KEY: sp_key: String = "spKey" secret,
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UID_FIELD: uid_field: String = "uidField",
        FIELD_USER_NAME_FIELD: user_name_field: String = "userNameField",
        FIELD_UUID: uuid: String = "uuid",
    }
}
