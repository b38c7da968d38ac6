use std::fmt;
use std::str::FromStr;

use k8s_openapi::api::networking::v1::ServiceBackendPort;
use kube::ResourceExt;

use crate::api::v1::backendconfig::BackendConfig;
use crate::util::errors::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for NamespacedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(NamespacedName::new(namespace, name))
            }
            _ => Err(Error::InvalidArgument(format!(
                "expected <namespace>/<name>, got '{}'",
                s
            ))),
        }
    }
}

/// Identifies one port of a Kubernetes service that is exposed as a backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServicePortId {
    pub service: NamespacedName,
    pub port: ServiceBackendPort,
}

impl fmt::Display for ServicePortId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.port.name, self.port.number) {
            (Some(name), _) => write!(f, "{}:{}", self.service, name),
            (None, Some(number)) => write!(f, "{}:{}", self.service, number),
            (None, None) => write!(f, "{}", self.service),
        }
    }
}

/// Parses a service port reference, numeric values are port numbers and
/// everything else is a port name.
pub fn parse_backend_port(port: &str) -> ServiceBackendPort {
    match port.parse::<i32>() {
        Ok(number) => ServiceBackendPort {
            number: Some(number),
            name: None,
        },
        Err(_) => ServiceBackendPort {
            name: Some(port.to_string()),
            number: None,
        },
    }
}

/// A service port together with the `BackendConfig` attached to it, if any.
#[derive(Clone, Debug, Default)]
pub struct ServicePort {
    pub id: ServicePortId,
    pub backend_config: Option<BackendConfig>,
}

impl ServicePort {
    /// A service port with no configuration attached.
    pub fn new(id: ServicePortId) -> Self {
        ServicePort {
            id,
            backend_config: None,
        }
    }

    /// Builds the service port for `port` of the service the config belongs to.
    ///
    /// The service identity is taken from the config's own metadata.
    pub fn with_backend_config(backend_config: BackendConfig, port: ServiceBackendPort) -> Result<Self> {
        let name = backend_config
            .metadata
            .name
            .clone()
            .ok_or_else(|| Error::MetadataMissing("BackendConfig has no name".to_string()))?;
        let namespace = backend_config
            .namespace()
            .ok_or_else(|| Error::MetadataMissing(format!("BackendConfig '{}' has no namespace", name)))?;

        Ok(ServicePort {
            id: ServicePortId {
                service: NamespacedName::new(namespace, name),
                port,
            },
            backend_config: Some(backend_config),
        })
    }
}
