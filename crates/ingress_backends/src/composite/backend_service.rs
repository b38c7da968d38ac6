use serde::{Deserialize, Serialize};

use crate::util::errors::{Error, Result};

/// The CDN related part of a load balancer backend service, as returned by
/// the cloud API.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackendService {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "enableCDN", default)]
    pub enable_cdn: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn_policy: Option<BackendServiceCdnPolicy>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackendServiceCdnPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_key_policy: Option<CacheKeyPolicy>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CacheKeyPolicy {
    #[serde(default)]
    pub include_host: bool,
    #[serde(default)]
    pub include_protocol: bool,
    #[serde(default)]
    pub include_query_string: bool,
}

impl BackendService {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(Error::JsonSerializationError)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::JsonSerializationError)
    }

    /// The cache key policy currently in effect. A missing `cdnPolicy` or
    /// `cacheKeyPolicy` behaves like a policy with every flag off.
    pub fn effective_cache_key_policy(&self) -> CacheKeyPolicy {
        self.cdn_policy
            .as_ref()
            .and_then(|policy| policy.cache_key_policy)
            .unwrap_or_default()
    }
}
