use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("logging initialization failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, HostError>;
