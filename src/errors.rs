use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("ConfigError::Document: {0}")]
    Document(#[from] toml::de::Error),
    #[error("ConfigError::Invalid: {0}")]
    Invalid(String),
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

#[derive(Error, Debug)]
#[error("error setting up logging: {0}")]
pub struct LoggingError(pub String);
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> LoggingError {
        LoggingError(format!("log file error: {}", e))
    }
}
impl From<anyhow::Error> for LoggingError {
    fn from(e: anyhow::Error) -> LoggingError {
        LoggingError(format!("log roller error: {}", e))
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> LoggingError {
        LoggingError(format!("log config error: {}", e))
    }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> LoggingError {
        LoggingError(format!("logger already set: {}", e))
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("StoreError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("StoreError::Document: {0}")]
    Document(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("SessionError::Store: {0}")]
    Store(#[from] StoreError),
    #[error("SessionError::Document: stored value for {key} is invalid: {msg}")]
    Document { key: String, msg: String },
    #[error("SessionError::UnknownMemo: no memo with id {0}")]
    UnknownMemo(String),
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("InitError::Store: {0}")]
    Store(#[from] StoreError),
    #[error("InitError::Session: {0}")]
    Session(#[from] SessionError),
}
