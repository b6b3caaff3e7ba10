//! LDAP-family authentication providers.
//!
//! OpenLDAP and FreeIPA share the `ldapConfig` field set. Active Directory
//! has its own attribute defaults and a `serviceAccountUsername` instead of a
//! distinguished name.

use std::collections::BTreeMap;

use super::{AuthConfigStatus, OwnerReference};

record! {
    /// Directory connection settings without the provider header. Embedded by
    /// the SAML providers that look users up over LDAP.
    pub struct LdapFields => "ldapFields" {
        FIELD_CERTIFICATE: certificate: String = "certificate",
        FIELD_CONNECTION_TIMEOUT: connection_timeout: i64 = "connectionTimeout",
        FIELD_GROUP_DN_ATTRIBUTE: group_dn_attribute: String = "groupDNAttribute",
        FIELD_GROUP_MEMBER_MAPPING_ATTRIBUTE: group_member_mapping_attribute: String = "groupMemberMappingAttribute",
        FIELD_GROUP_MEMBER_USER_ATTRIBUTE: group_member_user_attribute: String = "groupMemberUserAttribute",
        FIELD_GROUP_NAME_ATTRIBUTE: group_name_attribute: String = "groupNameAttribute",
        FIELD_GROUP_OBJECT_CLASS: group_object_class: String = "groupObjectClass",
        FIELD_GROUP_SEARCH_ATTRIBUTE: group_search_attribute: String = "groupSearchAttribute",
        FIELD_GROUP_SEARCH_BASE: group_search_base: String = "groupSearchBase",
        FIELD_GROUP_SEARCH_FILTER: group_search_filter: String = "groupSearchFilter",
        FIELD_NESTED_GROUP_MEMBERSHIP_ENABLED: nested_group_membership_enabled: bool = "nestedGroupMembershipEnabled",
        FIELD_PORT: port: i64 = "port",
        FIELD_SERVERS: servers: Vec<String> = "servers",
        FIELD_SERVICE_ACCOUNT_DISTINGUISHED_NAME: service_account_distinguished_name: String = "serviceAccountDistinguishedName",
        FIELD_SERVICE_ACCOUNT_PASSWORD: service_account_password: String = "serviceAccountPassword" secret,
        FIELD_START_TLS: start_tls: bool = "starttls",
        FIELD_TLS: tls: bool = "tls",
        FIELD_USER_DISABLED_BIT_MASK: user_disabled_bit_mask: i64 = "userDisabledBitMask",
        FIELD_USER_ENABLED_ATTRIBUTE: user_enabled_attribute: String = "userEnabledAttribute",
        FIELD_USER_LOGIN_ATTRIBUTE: user_login_attribute: String = "userLoginAttribute",
        FIELD_USER_MEMBER_ATTRIBUTE: user_member_attribute: String = "userMemberAttribute",
        FIELD_USER_NAME_ATTRIBUTE: user_name_attribute: String = "userNameAttribute",
        FIELD_USER_OBJECT_CLASS: user_object_class: String = "userObjectClass",
        FIELD_USER_SEARCH_ATTRIBUTE: user_search_attribute: String = "userSearchAttribute",
        FIELD_USER_SEARCH_BASE: user_search_base: String = "userSearchBase",
        FIELD_USER_SEARCH_FILTER: user_search_filter: String = "userSearchFilter",
    }
}

record! {
    pub struct LdapConfig => "ldapConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CERTIFICATE: certificate: String = "certificate",
        FIELD_CONNECTION_TIMEOUT: connection_timeout: i64 = "connectionTimeout",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_GROUP_DN_ATTRIBUTE: group_dn_attribute: String = "groupDNAttribute",
        FIELD_GROUP_MEMBER_MAPPING_ATTRIBUTE: group_member_mapping_attribute: String = "groupMemberMappingAttribute",
        FIELD_GROUP_MEMBER_USER_ATTRIBUTE: group_member_user_attribute: String = "groupMemberUserAttribute",
        FIELD_GROUP_NAME_ATTRIBUTE: group_name_attribute: String = "groupNameAttribute",
        FIELD_GROUP_OBJECT_CLASS: group_object_class: String = "groupObjectClass",
        FIELD_GROUP_SEARCH_ATTRIBUTE: group_search_attribute: String = "groupSearchAttribute",
        FIELD_GROUP_SEARCH_BASE: group_search_base: String = "groupSearchBase",
        FIELD_GROUP_SEARCH_FILTER: group_search_filter: String = "groupSearchFilter",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_NESTED_GROUP_MEMBERSHIP_ENABLED: nested_group_membership_enabled: bool = "nestedGroupMembershipEnabled",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_PORT: port: i64 = "port",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SERVERS: servers: Vec<String> = "servers",
        FIELD_SERVICE_ACCOUNT_DISTINGUISHED_NAME: service_account_distinguished_name: String = "serviceAccountDistinguishedName",
        FIELD_SERVICE_ACCOUNT_PASSWORD: service_account_password: String = "serviceAccountPassword" secret,
        FIELD_START_TLS: start_tls: bool = "starttls",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TLS: tls: bool = "tls",
        FIELD_TYPE: r#type: String = "type",
        FIELD_USER_DISABLED_BIT_MASK: user_disabled_bit_mask: i64 = "userDisabledBitMask",
        FIELD_USER_ENABLED_ATTRIBUTE: user_enabled_attribute: String = "userEnabledAttribute",
        FIELD_USER_LOGIN_ATTRIBUTE: user_login_attribute: String = "userLoginAttribute",
        FIELD_USER_MEMBER_ATTRIBUTE: user_member_attribute: String = "userMemberAttribute",
        FIELD_USER_NAME_ATTRIBUTE: user_name_attribute: String = "userNameAttribute",
        FIELD_USER_OBJECT_CLASS: user_object_class: String = "userObjectClass",
        FIELD_USER_SEARCH_ATTRIBUTE: user_search_attribute: String = "userSearchAttribute",
        FIELD_USER_SEARCH_BASE: user_search_base: String = "userSearchBase",
        FIELD_USER_SEARCH_FILTER: user_search_filter: String = "userSearchFilter",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct OpenLdapConfig => "openLdapConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CERTIFICATE: certificate: String = "certificate",
        FIELD_CONNECTION_TIMEOUT: connection_timeout: i64 = "connectionTimeout",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_GROUP_DN_ATTRIBUTE: group_dn_attribute: String = "groupDNAttribute",
        FIELD_GROUP_MEMBER_MAPPING_ATTRIBUTE: group_member_mapping_attribute: String = "groupMemberMappingAttribute",
        FIELD_GROUP_MEMBER_USER_ATTRIBUTE: group_member_user_attribute: String = "groupMemberUserAttribute",
        FIELD_GROUP_NAME_ATTRIBUTE: group_name_attribute: String = "groupNameAttribute",
        FIELD_GROUP_OBJECT_CLASS: group_object_class: String = "groupObjectClass",
        FIELD_GROUP_SEARCH_ATTRIBUTE: group_search_attribute: String = "groupSearchAttribute",
        FIELD_GROUP_SEARCH_BASE: group_search_base: String = "groupSearchBase",
        FIELD_GROUP_SEARCH_FILTER: group_search_filter: String = "groupSearchFilter",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_NESTED_GROUP_MEMBERSHIP_ENABLED: nested_group_membership_enabled: bool = "nestedGroupMembershipEnabled",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_PORT: port: i64 = "port",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SERVERS: servers: Vec<String> = "servers",
        FIELD_SERVICE_ACCOUNT_DISTINGUISHED_NAME: service_account_distinguished_name: String = "serviceAccountDistinguishedName",
        FIELD_SERVICE_ACCOUNT_PASSWORD: service_account_password: String = "serviceAccountPassword" secret,
        FIELD_START_TLS: start_tls: bool = "starttls",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TLS: tls: bool = "tls",
        FIELD_TYPE: r#type: String = "type",
        FIELD_USER_DISABLED_BIT_MASK: user_disabled_bit_mask: i64 = "userDisabledBitMask",
        FIELD_USER_ENABLED_ATTRIBUTE: user_enabled_attribute: String = "userEnabledAttribute",
        FIELD_USER_LOGIN_ATTRIBUTE: user_login_attribute: String = "userLoginAttribute",
        FIELD_USER_MEMBER_ATTRIBUTE: user_member_attribute: String = "userMemberAttribute",
        FIELD_USER_NAME_ATTRIBUTE: user_name_attribute: String = "userNameAttribute",
        FIELD_USER_OBJECT_CLASS: user_object_class: String = "userObjectClass",
        FIELD_USER_SEARCH_ATTRIBUTE: user_search_attribute: String = "userSearchAttribute",
        FIELD_USER_SEARCH_BASE: user_search_base: String = "userSearchBase",
        FIELD_USER_SEARCH_FILTER: user_search_filter: String = "userSearchFilter",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct FreeIpaConfig => "freeIpaConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CERTIFICATE: certificate: String = "certificate",
        FIELD_CONNECTION_TIMEOUT: connection_timeout: i64 = "connectionTimeout",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_GROUP_DN_ATTRIBUTE: group_dn_attribute: String = "groupDNAttribute",
        FIELD_GROUP_MEMBER_MAPPING_ATTRIBUTE: group_member_mapping_attribute: String = "groupMemberMappingAttribute",
        FIELD_GROUP_MEMBER_USER_ATTRIBUTE: group_member_user_attribute: String = "groupMemberUserAttribute",
        FIELD_GROUP_NAME_ATTRIBUTE: group_name_attribute: String = "groupNameAttribute",
        FIELD_GROUP_OBJECT_CLASS: group_object_class: String = "groupObjectClass",
        FIELD_GROUP_SEARCH_ATTRIBUTE: group_search_attribute: String = "groupSearchAttribute",
        FIELD_GROUP_SEARCH_BASE: group_search_base: String = "groupSearchBase",
        FIELD_GROUP_SEARCH_FILTER: group_search_filter: String = "groupSearchFilter",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_NESTED_GROUP_MEMBERSHIP_ENABLED: nested_group_membership_enabled: bool = "nestedGroupMembershipEnabled",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_PORT: port: i64 = "port",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SERVERS: servers: Vec<String> = "servers",
        FIELD_SERVICE_ACCOUNT_DISTINGUISHED_NAME: service_account_distinguished_name: String = "serviceAccountDistinguishedName",
        FIELD_SERVICE_ACCOUNT_PASSWORD: service_account_password: String = "serviceAccountPassword" secret,
        FIELD_START_TLS: start_tls: bool = "starttls",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TLS: tls: bool = "tls",
        FIELD_TYPE: r#type: String = "type",
        FIELD_USER_DISABLED_BIT_MASK: user_disabled_bit_mask: i64 = "userDisabledBitMask",
        FIELD_USER_ENABLED_ATTRIBUTE: user_enabled_attribute: String = "userEnabledAttribute",
        FIELD_USER_LOGIN_ATTRIBUTE: user_login_attribute: String = "userLoginAttribute",
        FIELD_USER_MEMBER_ATTRIBUTE: user_member_attribute: String = "userMemberAttribute",
        FIELD_USER_NAME_ATTRIBUTE: user_name_attribute: String = "userNameAttribute",
        FIELD_USER_OBJECT_CLASS: user_object_class: String = "userObjectClass",
        FIELD_USER_SEARCH_ATTRIBUTE: user_search_attribute: String = "userSearchAttribute",
        FIELD_USER_SEARCH_BASE: user_search_base: String = "userSearchBase",
        FIELD_USER_SEARCH_FILTER: user_search_filter: String = "userSearchFilter",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct ActiveDirectoryConfig => "activeDirectoryConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CERTIFICATE: certificate: String = "certificate",
        FIELD_CONNECTION_TIMEOUT: connection_timeout: i64 = "connectionTimeout",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_DEFAULT_LOGIN_DOMAIN: default_login_domain: String = "defaultLoginDomain",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_GROUP_DN_ATTRIBUTE: group_dn_attribute: String = "groupDNAttribute",
        FIELD_GROUP_MEMBER_MAPPING_ATTRIBUTE: group_member_mapping_attribute: String = "groupMemberMappingAttribute",
        FIELD_GROUP_MEMBER_USER_ATTRIBUTE: group_member_user_attribute: String = "groupMemberUserAttribute",
        FIELD_GROUP_NAME_ATTRIBUTE: group_name_attribute: String = "groupNameAttribute",
        FIELD_GROUP_OBJECT_CLASS: group_object_class: String = "groupObjectClass",
        FIELD_GROUP_SEARCH_ATTRIBUTE: group_search_attribute: String = "groupSearchAttribute",
        FIELD_GROUP_SEARCH_BASE: group_search_base: String = "groupSearchBase",
        FIELD_GROUP_SEARCH_FILTER: group_search_filter: String = "groupSearchFilter",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_NESTED_GROUP_MEMBERSHIP_ENABLED: nested_group_membership_enabled: Option<bool> = "nestedGroupMembershipEnabled",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_PORT: port: i64 = "port",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SERVERS: servers: Vec<String> = "servers",
        FIELD_SERVICE_ACCOUNT_PASSWORD: service_account_password: String = "serviceAccountPassword" secret,
        FIELD_SERVICE_ACCOUNT_USERNAME: service_account_username: String = "serviceAccountUsername",
        FIELD_START_TLS: start_tls: bool = "starttls",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TLS: tls: bool = "tls",
        FIELD_TYPE: r#type: String = "type",
        FIELD_USER_DISABLED_BIT_MASK: user_disabled_bit_mask: i64 = "userDisabledBitMask",
        FIELD_USER_ENABLED_ATTRIBUTE: user_enabled_attribute: String = "userEnabledAttribute",
        FIELD_USER_LOGIN_ATTRIBUTE: user_login_attribute: String = "userLoginAttribute",
        FIELD_USER_NAME_ATTRIBUTE: user_name_attribute: String = "userNameAttribute",
        FIELD_USER_OBJECT_CLASS: user_object_class: String = "userObjectClass",
        FIELD_USER_SEARCH_ATTRIBUTE: user_search_attribute: String = "userSearchAttribute",
        FIELD_USER_SEARCH_BASE: user_search_base: String = "userSearchBase",
        FIELD_USER_SEARCH_FILTER: user_search_filter: String = "userSearchFilter",
        FIELD_UUID: uuid: String = "uuid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use serde_json::json;

    #[test]
    fn test_lowercase_and_acronym_keys() {
        assert_eq!(LdapFields::FIELD_START_TLS, "starttls");
        assert_eq!(ActiveDirectoryConfig::FIELD_GROUP_DN_ATTRIBUTE, "groupDNAttribute");

        let config: ActiveDirectoryConfig = serde_json::from_value(json!({
            "servers": ["dc1.example.com", "dc2.example.com"],
            "port": 636,
            "tls": true,
            "starttls": false,
            "connectionTimeout": 5000,
            "groupDNAttribute": "distinguishedName",
            "nestedGroupMembershipEnabled": false
        }))
        .unwrap();

        assert_eq!(config.servers.len(), 2);
        assert_eq!(config.port, 636);
        assert!(config.tls);
        assert!(!config.start_tls);
        assert_eq!(config.connection_timeout, 5000);
        assert_eq!(config.nested_group_membership_enabled, Some(false));
    }

    #[test]
    fn test_ldap_variants_share_field_set() {
        let ldap: Vec<_> = LdapConfig::field_names().collect();
        let open: Vec<_> = OpenLdapConfig::field_names().collect();
        let free_ipa: Vec<_> = FreeIpaConfig::field_names().collect();
        assert_eq!(ldap, open);
        assert_eq!(ldap, free_ipa);
        assert!(LdapFields::field_names().all(|name| ldap.contains(&name)));
    }

    #[test]
    fn test_service_account_password_is_secret() {
        assert!(LdapFields::field("serviceAccountPassword").unwrap().secret);
        assert!(
            ActiveDirectoryConfig::field("serviceAccountPassword")
                .unwrap()
                .secret
        );
        assert!(!ActiveDirectoryConfig::field("serviceAccountUsername").unwrap().secret);
    }
}
