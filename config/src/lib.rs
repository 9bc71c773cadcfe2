use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

mod error;

pub mod log;

pub use error::Error;
pub use log::LogConfig;

const CARGO_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");
const CONFIG_ENV_PREFIX: &str = "RECURSION";

/// Settings read from `RECURSION_<PREFIX>_<KEY>` environment variables.
///
/// Values in `.config.env` are loaded first; variables already set in the
/// process environment take precedence over the file.
pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, Error> {
        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);

        // the file is optional.
        match dotenvy::from_path(config_env_path()) {
            Err(err) if err.not_found() => {}
            result => result?,
        }

        Ok(config::Config::builder()
            .add_source(config::Environment::with_prefix(&prefix).separator("_"))
            .build()?
            .try_deserialize()?)
    }
}

/// Optional env file beside this crate's manifest, read before the process environment.
pub fn config_env_path() -> PathBuf {
    Path::new(CARGO_MANIFEST_DIR).join(".config.env")
}
