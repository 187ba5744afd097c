use thiserror::Error;

#[derive(Debug, Error)]
pub enum HwError {
    #[error("bus nack: {0}")]
    Nack(String),
    #[error("bus timeout")]
    Timeout,
    #[error("i2c error: {0}")]
    I2c(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HwError>;
