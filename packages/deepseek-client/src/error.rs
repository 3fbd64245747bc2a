use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeepSeekError>;

#[derive(Error, Debug)]
pub enum DeepSeekError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
