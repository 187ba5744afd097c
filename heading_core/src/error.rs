use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum EstimatorError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("transport fault: {0}")]
    TransportFault(String),
    #[error("timeout waiting for sensor")]
    Timeout,
    #[error("no consistent sample within {attempts} attempts")]
    Inconsistent { attempts: u32 },
    #[error("non-finite angular rate from sensor")]
    NonFiniteRate,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid state: {0}")]
    State(String),
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing gyroscope")]
    MissingGyro,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
