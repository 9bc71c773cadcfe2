//! # recursion-cli
//!
//! Two standalone programs illustrating recursion over 8-bit unsigned integers:
//!
//! ```sh
//! factorial   # factorial(0) .. factorial(5)
//! multiply    # multiplication as repeated addition
//! ```
//!
//! Neither takes arguments. Results go to stdout; diagnostics go to stderr and
//! are silent unless `RUST_LOG` or `RECURSION_LOG_LEVEL` raises the level.

use std::{io::IsTerminal, str::FromStr};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recursion_common::Driver;
use recursion_config::{Config, LogConfig};

/// Installs the stderr subscriber. An unparsable `config.level` falls back to
/// `warn` and is reported once the subscriber is active.
pub fn setup_logger(config: &LogConfig) -> tracing::subscriber::DefaultGuard {
    let level = LevelFilter::from_str(&config.level);
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_ref().map_or(LevelFilter::WARN, |l| *l).into())
        .from_env_lossy();

    let ansi = config.ansi.unwrap_or_else(|| std::io::stderr().is_terminal());

    let guard = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(ansi)
                .pretty()
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default();

    if let Err(err) = level {
        tracing::warn!(level = %config.level, %err, "invalid log level, using warn");
    }

    guard
}

/// Entry point shared by both binaries: load logging config, then print the
/// report for `D` to stdout. Logging misconfiguration never stops the report.
pub fn run_driver<D: Driver>() -> anyhow::Result<()> {
    let (config, config_err) = match LogConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (LogConfig::default(), Some(err)),
    };
    let _guard = setup_logger(&config);

    if let Some(err) = config_err {
        tracing::warn!(%err, "failed to load logging configuration, using defaults");
    }

    tracing::info!(driver = D::NAME, cases = D::CASES.len(), "running driver");

    let stdout = std::io::stdout();
    recursion_common::run::<D, _>(&mut stdout.lock())?;

    Ok(())
}
