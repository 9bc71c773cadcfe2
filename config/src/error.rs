use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to load .config.env: {0}")]
    DotEnv(#[from] dotenvy::Error),
}
