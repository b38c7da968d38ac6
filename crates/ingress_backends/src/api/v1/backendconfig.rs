use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::errors::{Error, Result};

/// Generate the Kubernetes wrapper struct `BackendConfig` from our Spec
///
/// This provides a hook for generating the CRD yaml (in crdgen)
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[cfg_attr(test, derive(Default))]
#[kube(kind = "BackendConfig", group = "cloud.google.com", version = "v1", namespaced)]
#[kube(shortname = "bc")]
#[serde(rename_all = "camelCase")]
pub struct BackendConfigSpec {
    /// CDN settings for the backend. Leaving this unset keeps whatever the
    /// backend service currently has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn: Option<CdnConfig>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CdnConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Cache key composition. When unset the existing cache key policy of
    /// the backend service is left alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_policy: Option<CacheKeyPolicy>,
}

/// Request attributes that make up the CDN cache key.
///
/// Once a policy is present every flag is taken literally, omitted flags
/// included (as `false`).
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheKeyPolicy {
    #[serde(default)]
    pub include_host: bool,
    #[serde(default)]
    pub include_protocol: bool,
    #[serde(default)]
    pub include_query_string: bool,
}

/// Decodes a `BackendConfig` manifest.
pub fn parse_backend_config(manifest: &str) -> Result<BackendConfig> {
    serde_yaml::from_str(manifest).map_err(Error::YamlSerializationError)
}
