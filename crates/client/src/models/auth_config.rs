//! Authentication provider configurations.
//!
//! Every provider record repeats the base `authConfig` fields (`type`,
//! `enabled`, `accessMode`, `allowedPrincipalIds`, `status`) and the resource
//! header. The provider's own `type` field doubles as the resource type.

use std::collections::BTreeMap;

use super::OwnerReference;

record! {
    pub struct AuthConfig => "authConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct AuthConfigStatus => "authConfigStatus" {
        FIELD_CONDITIONS: conditions: Vec<AuthConfigConditions> = "conditions",
    }
}

record! {
    pub struct AuthConfigConditions => "authConfigConditions" {
        FIELD_LAST_TRANSITION_TIME: last_transition_time: String = "lastTransitionTime",
        FIELD_LAST_UPDATE_TIME: last_update_time: String = "lastUpdateTime",
        FIELD_MESSAGE: message: String = "message",
        FIELD_REASON: reason: String = "reason",
        FIELD_STATUS: status: String = "status",
        FIELD_TYPE: r#type: String = "type",
    }
}

record! {
    /// Built-in username/password provider.
    pub struct LocalConfig => "localConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct GithubConfig => "githubConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ADDITIONAL_CLIENT_IDS: additional_client_ids: BTreeMap<String, String> = "additionalClientIds",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CLIENT_ID: client_id: String = "clientId",
        FIELD_CLIENT_SECRET: client_secret: String = "clientSecret" secret,
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_HOSTNAME: hostname: String = "hostname",
        FIELD_HOSTNAME_TO_CLIENT_ID: hostname_to_client_id: BTreeMap<String, String> = "hostnameToClientId",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TLS: tls: bool = "tls",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct GoogleOauthConfig => "googleOauthConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ADMIN_EMAIL: admin_email: String = "adminEmail",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_HOSTNAME: hostname: String = "hostname",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_NESTED_GROUP_MEMBERSHIP_ENABLED: nested_group_membership_enabled: bool = "nestedGroupMembershipEnabled",
        FIELD_OAUTH_CREDENTIAL: oauth_credential: String = "oauthCredential" secret,
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SERVICE_ACCOUNT_CREDENTIAL: service_account_credential: String = "serviceAccountCredential" secret,
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_USER_INFO_ENDPOINT: user_info_endpoint: String = "userInfoEndpoint",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct AzureAdConfig => "azureADConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_APPLICATION_ID: application_id: String = "applicationId",
        FIELD_APPLICATION_SECRET: application_secret: String = "applicationSecret" secret,
        FIELD_AUTH_ENDPOINT: auth_endpoint: String = "authEndpoint",
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_ENDPOINT: endpoint: String = "endpoint",
        FIELD_GRAPH_ENDPOINT: graph_endpoint: String = "graphEndpoint",
        FIELD_ID: id: String = "id",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_RANCHER_URL: rancher_url: String = "rancherUrl",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TENANT_ID: tenant_id: String = "tenantId",
        FIELD_TOKEN_ENDPOINT: token_endpoint: String = "tokenEndpoint",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    /// Generic OpenID Connect provider. `scopes` travels as `scope`.
    pub struct OidcConfig => "oidcConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_AUTH_ENDPOINT: auth_endpoint: String = "authEndpoint",
        FIELD_CERTIFICATE: certificate: String = "certificate",
        FIELD_CLIENT_ID: client_id: String = "clientId",
        FIELD_CLIENT_SECRET: client_secret: String = "clientSecret" secret,
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_GROUP_SEARCH_ENABLED: group_search_enabled: Option<bool> = "groupSearchEnabled",
        FIELD_ID: id: String = "id",
        FIELD_ISSUER: issuer: String = "issuer",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_PRIVATE_KEY: private_key: String = "privateKey" secret,
        FIELD_RANCHER_URL: rancher_url: String = "rancherUrl",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SCOPES: scopes: String = "scope",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
    }
}

record! {
    pub struct KeyCloakOidcConfig => "keyCloakOIDCConfig" {
        FIELD_ACCESS_MODE: access_mode: String = "accessMode",
        FIELD_ACTIONS: actions: BTreeMap<String, String> = "actions",
        FIELD_ALLOWED_PRINCIPAL_IDS: allowed_principal_ids: Vec<String> = "allowedPrincipalIds",
        FIELD_ANNOTATIONS: annotations: BTreeMap<String, String> = "annotations",
        FIELD_AUTH_ENDPOINT: auth_endpoint: String = "authEndpoint",
        FIELD_CERTIFICATE: certificate: String = "certificate",
        FIELD_CLIENT_ID: client_id: String = "clientId",
        FIELD_CLIENT_SECRET: client_secret: String = "clientSecret" secret,
        FIELD_CREATED: created: String = "created",
        FIELD_CREATOR_ID: creator_id: String = "creatorId",
        FIELD_ENABLED: enabled: bool = "enabled",
        FIELD_GROUP_SEARCH_ENABLED: group_search_enabled: Option<bool> = "groupSearchEnabled",
        FIELD_ID: id: String = "id",
        FIELD_ISSUER: issuer: String = "issuer",
        FIELD_LABELS: labels: BTreeMap<String, String> = "labels",
        FIELD_LINKS: links: BTreeMap<String, String> = "links",
        FIELD_NAME: name: String = "name",
        FIELD_OWNER_REFERENCES: owner_references: Vec<OwnerReference> = "ownerReferences",
        FIELD_PRIVATE_KEY: private_key: String = "privateKey" secret,
        FIELD_RANCHER_URL: rancher_url: String = "rancherUrl",
        FIELD_REMOVED: removed: String = "removed",
        FIELD_SCOPES: scopes: String = "scope",
        FIELD_STATUS: status: Option<AuthConfigStatus> = "status",
        FIELD_TYPE: r#type: String = "type",
        FIELD_UUID: uuid: String = "uuid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redact::REDACTED;
    use crate::testing::load_fixture;
    use serde_json::json;

    #[test]
    fn test_oidc_scopes_field_uses_scope_key() {
        assert_eq!(OidcConfig::FIELD_SCOPES, "scope");
        let config = OidcConfig {
            scopes: "openid profile email".to_string(),
            group_search_enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"groupSearchEnabled": false, "scope": "openid profile email"})
        );
    }

    #[test]
    fn test_github_config_fixture() {
        let config: GithubConfig =
            serde_json::from_value(load_fixture("github_config.json")).unwrap();

        assert_eq!(config.id, "github");
        assert_eq!(config.r#type, "githubConfig");
        assert_eq!(config.access_mode, "restricted");
        assert_eq!(config.allowed_principal_ids, vec!["github_user://1234"]);
        assert_eq!(config.hostname_to_client_id["github.example.com"], "abc123");
        assert!(config.tls);

        let conditions = &config.status.as_ref().unwrap().conditions;
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].r#type, "SecretsMigrated");
    }

    #[test]
    fn test_debug_masks_client_secret() {
        let config = GithubConfig {
            client_id: "abc123".to_string(),
            client_secret: "very-secret".to_string(),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("abc123"));
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("very-secret"));
    }
}
