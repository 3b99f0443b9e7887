use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::AppConfig;

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(app: &AppConfig) -> String {
    format!("dealership={},actix_web=info,sqlx=warn", app.log_level)
}

/// Install the global subscriber: JSON lines in production, human output otherwise
pub fn init_tracing(app: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(app)));
    let registry = tracing_subscriber::registry().with(filter);

    if app.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
