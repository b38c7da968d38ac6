use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::json;
use tracing::info;

use ingress_backends::api::v1::backendconfig::parse_backend_config;
use ingress_backends::composite::BackendService;
use ingress_backends::features::ensure_cdn;
use ingress_backends::util::service_port::{parse_backend_port, NamespacedName, ServicePort, ServicePortId};
use ingress_backends::util::telemetry;

/// Computes the CDN update a backend service needs to match its BackendConfig.
///
/// Nothing is sent to the cloud, the corrected backend service is printed.
#[derive(Parser)]
#[command(name = "cdn_plan")]
#[command(version)]
struct Cli {
    /// Backend service as returned by the cloud API (JSON)
    #[arg(long, env = "CDN_PLAN_BACKEND_SERVICE")]
    backend_service: PathBuf,

    /// BackendConfig manifest attached to the service (YAML)
    #[arg(long, env = "CDN_PLAN_BACKEND_CONFIG")]
    backend_config: Option<PathBuf>,

    /// Service as <namespace>/<name>, used when no BackendConfig is attached
    #[arg(long, required_unless_present = "backend_config")]
    service: Option<NamespacedName>,

    /// Service port name or number
    #[arg(long, default_value = "80")]
    port: String,
}

fn main() -> anyhow::Result<()> {
    telemetry::init()?;
    let cli = Cli::parse();

    let body = fs::read_to_string(&cli.backend_service)
        .with_context(|| format!("reading {}", cli.backend_service.display()))?;
    let mut be = BackendService::from_json(&body)?;

    let port = parse_backend_port(&cli.port);
    let sp = match (&cli.backend_config, cli.service) {
        (Some(path), _) => {
            let manifest =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ServicePort::with_backend_config(parse_backend_config(&manifest)?, port)?
        }
        (None, Some(service)) => ServicePort::new(ServicePortId { service, port }),
        (None, None) => anyhow::bail!("either --backend-config or --service is required"),
    };

    let update_needed = ensure_cdn(&sp, &mut be);
    info!("Planned CDN settings for service {}: update needed = {}", sp.id, update_needed);

    let plan = json!({
        "updateNeeded": update_needed,
        "backendService": be,
    });
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
