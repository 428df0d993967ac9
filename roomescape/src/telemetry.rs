//! Telemetry initialization: `tracing` with an env-filtered fmt subscriber.
//!
//! The filter is read from `RUST_LOG` and defaults to `info`. Logs go to stderr so command
//! output on stdout stays machine-readable. sqlx reports statements through the `log`
//! facade; `try_init` installs the log bridge, so those records are filtered and printed
//! like any other event (target `sqlx::query`).
//!
//! ```bash
//! RUST_LOG=roomescape=debug,sqlx=warn roomescape list
//! ```

use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with console output on stderr
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    debug!("Telemetry initialized");
    Ok(())
}
