use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    // Stdout closed or otherwise unwritable
    #[error("failed to write driver output: {0}")]
    Write(#[from] std::io::Error),
}
