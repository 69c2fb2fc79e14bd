use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEVELOPMENT_FILTER: &str = "claimdesk=debug,tower_http=debug";
const PRODUCTION_FILTER: &str = "claimdesk=info,tower_http=info";

/// Initialize console tracing.
///
/// `RUST_LOG` overrides the default filter. Calling this more than once (for
/// example from several tests in one process) keeps the first subscriber.
pub fn init_telemetry(production: bool) {
    let default_filter = if production {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    };

    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    let initialized = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(console_fmt)
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!(filter = default_filter, "Tracing initialized");
    }
}
