use serde::Deserialize;

use super::Config;

/// Stderr logging settings for the driver binaries.
///
/// Never affects what the drivers print to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Force ANSI colors on or off. Unset means "only when stderr is a terminal".
    #[serde(default)]
    pub ansi: Option<bool>,
}

fn default_level() -> String {
    "warn".to_owned()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_level(), ansi: None }
    }
}

impl Config for LogConfig {
    const PREFIX: &'static str = "LOG";
}
