//! Static schema registry over every record type.
//!
//! Responsibilities:
//! - Map schema type names (`globalOpenstackOpts`, `cluster`, ...) to field tables.
//! - Provide type-erased decode/encode so callers can work from a type name.
//! - Detect keys a document carries that the record does not declare.
//!
//! Does NOT handle:
//! - Reading documents from disk (callers pass parsed values).
//! - Unknown keys below the top level; nested records are checked only by decoding.
//!
//! Invariants:
//! - `SCHEMAS` is sorted by type name; `lookup` relies on it for binary search.
//! - Type names are unique across the registry.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::*;
use crate::record::{Field, Record};
use crate::redact::Redact;
use crate::sample::Sample;

/// Options for [`Schema::normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Replace secret values with the redaction placeholder.
    pub redact: bool,
}

/// Type-erased view of one record type.
pub struct Schema {
    type_name: &'static str,
    fields: &'static [Field],
    normalize: fn(Value, NormalizeOptions) -> Result<Value>,
    sample: fn() -> Result<Value>,
}

impl Schema {
    const fn of<T>() -> Self
    where
        T: Record + Redact + Sample + Serialize + DeserializeOwned,
    {
        Self {
            type_name: T::TYPE_NAME,
            fields: T::FIELDS,
            normalize: normalize_record::<T>,
            sample: sample_record::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Find a field by wire key.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields flagged as credentials.
    pub fn secret_fields(&self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|field| field.secret)
    }

    /// Top-level keys of `document` that this record does not declare, in document order.
    pub fn unknown_fields(&self, document: &Value) -> Result<Vec<String>> {
        let object = document.as_object().ok_or(ClientError::NotAnObject {
            type_name: self.type_name,
            found: value_kind(document),
        })?;
        Ok(object
            .keys()
            .filter(|key| self.field(key).is_none())
            .cloned()
            .collect())
    }

    /// Check a document against this record.
    ///
    /// Returns the unknown keys (empty when the document is clean). Unknown keys
    /// are an error when `strict` is set. Values of the wrong type are always errors.
    pub fn validate(&self, document: &Value, strict: bool) -> Result<Vec<String>> {
        let unknown = self.unknown_fields(document)?;
        if strict && !unknown.is_empty() {
            return Err(ClientError::UnknownFields {
                type_name: self.type_name,
                fields: unknown,
            });
        }
        (self.normalize)(document.clone(), NormalizeOptions::default())?;
        Ok(unknown)
    }

    /// Decode `document` into the record and re-encode it.
    ///
    /// Empty values and undeclared keys are dropped.
    pub fn normalize(&self, document: Value, options: NormalizeOptions) -> Result<Value> {
        debug!(type_name = self.type_name, redact = options.redact, "normalizing document");
        (self.normalize)(document, options)
    }

    /// A document with every field populated.
    pub fn sample(&self) -> Result<Value> {
        (self.sample)()
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields.len())
            .finish()
    }
}

fn normalize_record<T>(document: Value, options: NormalizeOptions) -> Result<Value>
where
    T: Redact + Serialize + DeserializeOwned,
{
    let mut record: T = serde_json::from_value(document)?;
    if options.redact {
        record.redact();
    }
    Ok(serde_json::to_value(&record)?)
}

fn sample_record<T: Sample + Serialize>() -> Result<Value> {
    Ok(serde_json::to_value(T::sample())?)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

static SCHEMAS: &[Schema] = &[
    Schema::of::<AciNetworkProvider>(),
    Schema::of::<ActiveDirectoryConfig>(),
    Schema::of::<AdfsConfig>(),
    Schema::of::<AuditLog>(),
    Schema::of::<AuditLogConfig>(),
    Schema::of::<AuthConfig>(),
    Schema::of::<AuthConfigConditions>(),
    Schema::of::<AuthConfigStatus>(),
    Schema::of::<AuthWebhookConfig>(),
    Schema::of::<AuthnConfig>(),
    Schema::of::<AuthzConfig>(),
    Schema::of::<AwsCloudProvider>(),
    Schema::of::<AzureAdConfig>(),
    Schema::of::<AzureCloudProvider>(),
    Schema::of::<BackupConfig>(),
    Schema::of::<BastionHost>(),
    Schema::of::<BlockStorageOpenstackOpts>(),
    Schema::of::<CalicoNetworkProvider>(),
    Schema::of::<CanalNetworkProvider>(),
    Schema::of::<CloudProvider>(),
    Schema::of::<Cluster>(),
    Schema::of::<ClusterCondition>(),
    Schema::of::<Condition>(),
    Schema::of::<CustomConfig>(),
    Schema::of::<DiskVsphereOpts>(),
    Schema::of::<DnsConfig>(),
    Schema::of::<EnvVar>(),
    Schema::of::<EtcdBackup>(),
    Schema::of::<EtcdBackupStatus>(),
    Schema::of::<EtcdService>(),
    Schema::of::<EventRateLimit>(),
    Schema::of::<FlannelNetworkProvider>(),
    Schema::of::<FreeIpaConfig>(),
    Schema::of::<GithubConfig>(),
    Schema::of::<GlobalAwsOpts>(),
    Schema::of::<GlobalOpenstackOpts>(),
    Schema::of::<GlobalVsphereOpts>(),
    Schema::of::<GoogleOauthConfig>(),
    Schema::of::<IngressConfig>(),
    Schema::of::<KeyCloakConfig>(),
    Schema::of::<KeyCloakOidcConfig>(),
    Schema::of::<KubeApiService>(),
    Schema::of::<KubeControllerService>(),
    Schema::of::<KubeletService>(),
    Schema::of::<KubeproxyService>(),
    Schema::of::<LdapConfig>(),
    Schema::of::<LdapFields>(),
    Schema::of::<LinearAutoscalerParams>(),
    Schema::of::<LoadBalancerOpenstackOpts>(),
    Schema::of::<LocalClusterAuthEndpoint>(),
    Schema::of::<LocalConfig>(),
    Schema::of::<MetadataOpenstackOpts>(),
    Schema::of::<MonitoringConfig>(),
    Schema::of::<NetworkConfig>(),
    Schema::of::<NetworkVshpereOpts>(),
    Schema::of::<NodeDrainInput>(),
    Schema::of::<NodeDriver>(),
    Schema::of::<NodeDriverStatus>(),
    Schema::of::<NodePool>(),
    Schema::of::<NodePoolStatus>(),
    Schema::of::<NodeTemplate>(),
    Schema::of::<NodeTemplateCondition>(),
    Schema::of::<NodeTemplateStatus>(),
    Schema::of::<NodeUpgradeStrategy>(),
    Schema::of::<Nodelocal>(),
    Schema::of::<OidcConfig>(),
    Schema::of::<OktaConfig>(),
    Schema::of::<OpenLdapConfig>(),
    Schema::of::<OpenstackCloudProvider>(),
    Schema::of::<OwnerReference>(),
    Schema::of::<Pagination>(),
    Schema::of::<PingConfig>(),
    Schema::of::<PrivateRegistry>(),
    Schema::of::<RancherKubernetesEngineConfig>(),
    Schema::of::<RestoreConfig>(),
    Schema::of::<RkeConfigNode>(),
    Schema::of::<RkeConfigServices>(),
    Schema::of::<RkeSystemImages>(),
    Schema::of::<RkeTaint>(),
    Schema::of::<RotateCertificates>(),
    Schema::of::<RouteOpenstackOpts>(),
    Schema::of::<S3BackupConfig>(),
    Schema::of::<SamlConfig>(),
    Schema::of::<SchedulerService>(),
    Schema::of::<SecretsEncryptionConfig>(),
    Schema::of::<ServiceOverride>(),
    Schema::of::<ShibbolethConfig>(),
    Schema::of::<Sort>(),
    Schema::of::<Taint>(),
    Schema::of::<VirtualCenterConfig>(),
    Schema::of::<VsphereCloudProvider>(),
    Schema::of::<WeaveNetworkProvider>(),
    Schema::of::<WorkspaceVsphereOpts>(),
];

/// All registered schemas, sorted by type name.
pub fn schemas() -> &'static [Schema] {
    SCHEMAS
}

/// Find a schema by exact type name.
pub fn lookup(type_name: &str) -> Option<&'static Schema> {
    let found = SCHEMAS
        .binary_search_by(|schema| schema.type_name.cmp(type_name))
        .ok()
        .map(|index| &SCHEMAS[index]);
    debug!(type_name, found = found.is_some(), "schema lookup");
    found
}

/// Find a schema by type name, ignoring ASCII case (`GlobalOpenstackOpts` finds
/// `globalOpenstackOpts`).
pub fn lookup_ignore_case(type_name: &str) -> Option<&'static Schema> {
    lookup(type_name).or_else(|| {
        SCHEMAS
            .iter()
            .find(|schema| schema.type_name.eq_ignore_ascii_case(type_name))
    })
}

/// Like [`lookup_ignore_case`], but reports a missing type as an error.
pub fn require(type_name: &str) -> Result<&'static Schema> {
    lookup_ignore_case(type_name).ok_or_else(|| ClientError::UnknownType(type_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schemas_sorted_and_unique() {
        for pair in SCHEMAS.windows(2) {
            assert!(
                pair[0].type_name < pair[1].type_name,
                "{} must sort before {}",
                pair[0].type_name,
                pair[1].type_name
            );
        }
    }

    #[test]
    fn test_lookup_exact_and_case_insensitive() {
        assert_eq!(
            lookup("routeOpenstackOpts").map(Schema::type_name),
            Some("routeOpenstackOpts")
        );
        assert!(lookup("RouteOpenstackOpts").is_none());
        assert_eq!(
            lookup_ignore_case("RouteOpenstackOpts").map(Schema::type_name),
            Some("routeOpenstackOpts")
        );
        assert!(matches!(
            require("notARecord"),
            Err(ClientError::UnknownType(name)) if name == "notARecord"
        ));
    }

    #[test]
    fn test_unknown_fields_reports_top_level_keys_only() {
        let schema = require("routeOpenstackOpts").unwrap();
        let unknown = schema
            .unknown_fields(&json!({"router-id": "r1", "routerId": "r2"}))
            .unwrap();
        assert_eq!(unknown, vec!["routerId".to_string()]);

        let err = schema.unknown_fields(&json!(["router-id"])).unwrap_err();
        assert!(matches!(
            err,
            ClientError::NotAnObject { found: "array", .. }
        ));
    }

    #[test]
    fn test_validate_strict_rejects_unknown_fields() {
        let schema = require("metadataOpenstackOpts").unwrap();
        let document = json!({"request-timeout": 5, "requestTimeout": 5});

        let warnings = schema.validate(&document, false).unwrap();
        assert_eq!(warnings, vec!["requestTimeout".to_string()]);

        let err = schema.validate(&document, true).unwrap_err();
        assert!(matches!(err, ClientError::UnknownFields { .. }));
    }

    #[test]
    fn test_validate_reports_type_errors() {
        let schema = require("metadataOpenstackOpts").unwrap();
        let err = schema
            .validate(&json!({"request-timeout": "soon"}), false)
            .unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[test]
    fn test_normalize_drops_empty_and_unknown_and_redacts() {
        let schema = require("globalOpenstackOpts").unwrap();
        let document = json!({
            "auth-url": "https://keystone.example.com/v3",
            "username": "",
            "password": "s3cret",
            "extra": true
        });

        let normalized = schema
            .normalize(document.clone(), NormalizeOptions::default())
            .unwrap();
        assert_eq!(
            normalized,
            json!({"auth-url": "https://keystone.example.com/v3", "password": "s3cret"})
        );

        let redacted = schema
            .normalize(document, NormalizeOptions { redact: true })
            .unwrap();
        assert_eq!(redacted["password"], json!(crate::redact::REDACTED));
    }

    #[test]
    fn test_secret_fields() {
        let schema = require("githubConfig").unwrap();
        let secrets: Vec<_> = schema.secret_fields().map(|field| field.name).collect();
        assert_eq!(secrets, vec!["clientSecret"]);
    }
}
