use crate::config::parameter;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `LOG_LEVEL` parameter
/// (default `info`) applies to the whole process.
pub fn init() {
    let fallback = parameter::get_optional("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
