use tracing::{debug, info};

use crate::api::v1::backendconfig::{self, CdnConfig};
use crate::composite::{BackendService, CacheKeyPolicy};
use crate::util::service_port::ServicePort;

/// CDN settings requested for a backend, normalized from its `BackendConfig`.
///
/// `cache_key_policy` stays `None` unless the user wrote a cache policy, in
/// which case the live policy must match it exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CdnSettings {
    pub enabled: bool,
    pub cache_key_policy: Option<CacheKeyPolicy>,
}

impl From<&backendconfig::CacheKeyPolicy> for CacheKeyPolicy {
    fn from(policy: &backendconfig::CacheKeyPolicy) -> Self {
        CacheKeyPolicy {
            include_host: policy.include_host,
            include_protocol: policy.include_protocol,
            include_query_string: policy.include_query_string,
        }
    }
}

impl From<&CdnConfig> for CdnSettings {
    fn from(config: &CdnConfig) -> Self {
        CdnSettings {
            enabled: config.enabled,
            cache_key_policy: config.cache_policy.as_ref().map(CacheKeyPolicy::from),
        }
    }
}

/// Returns the CDN settings requested for the service port, or `None` when
/// there is no `BackendConfig` or it has no `cdn` section.
pub fn extract_cdn_config(sp: &ServicePort) -> Option<CdnSettings> {
    sp.backend_config
        .as_ref()
        .and_then(|config| config.spec.cdn.as_ref())
        .map(CdnSettings::from)
}

/// Brings the CDN fields of `be` in line with `desired`.
///
/// Returns true when `be` was modified and has to be written back.
/// Without desired settings nothing is touched. Without a desired cache
/// policy only `enableCDN` is reconciled and the live cache key policy is
/// kept as is, even when CDN gets switched off.
pub fn reconcile_cdn(desired: Option<&CdnSettings>, be: &mut BackendService) -> bool {
    let Some(desired) = desired else {
        return false;
    };

    let Some(cache_key_policy) = desired.cache_key_policy else {
        if be.enable_cdn == desired.enabled {
            return false;
        }
        be.enable_cdn = desired.enabled;
        return true;
    };

    if be.enable_cdn == desired.enabled && be.effective_cache_key_policy() == cache_key_policy {
        return false;
    }

    be.enable_cdn = desired.enabled;
    be.cdn_policy.get_or_insert_with(Default::default).cache_key_policy = Some(cache_key_policy);
    true
}

/// Applies the CDN settings of the service port's `BackendConfig` to `be`.
///
/// Returns true when `be` needs to be updated in the cloud.
pub fn ensure_cdn(sp: &ServicePort, be: &mut BackendService) -> bool {
    let desired = extract_cdn_config(sp);
    if !reconcile_cdn(desired.as_ref(), be) {
        debug!("CDN settings for service {} are up to date", sp.id);
        return false;
    }

    info!(
        "Updated CDN settings for service {} on backend '{}'",
        sp.id.service, be.name
    );
    true
}
