use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{prelude::*, EnvFilter, Registry};

/// Initialize tracing
///
/// Events go to stderr so that tools can keep stdout for their output.
pub fn init() -> Result<(), SetGlobalDefaultError> {
    let logger = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let collector = Registry::default().with(logger).with(env_filter);

    tracing::subscriber::set_global_default(collector)
}
