//! Telemetry initialization (tracing subscriber, fmt layer).
//!
//! Log filtering is controlled via the standard `RUST_LOG` environment
//! variable and defaults to `info` when unset:
//!
//! ```bash
//! RUST_LOG=crescendo=debug,sqlx=warn crescendo
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with console output.
///
/// Sets up tracing-subscriber with an `EnvFilter` (honoring `RUST_LOG`,
/// defaulting to `info`) and a fmt layer.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");
    Ok(())
}
