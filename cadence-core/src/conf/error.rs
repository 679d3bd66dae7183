use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("session break must be a positive number of seconds, got {value}")]
    InvalidSessionBreak { value: f64 },

    #[error("log path must not be empty")]
    EmptyLogPath,
}
