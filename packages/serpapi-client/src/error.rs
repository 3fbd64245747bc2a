use thiserror::Error;

pub type Result<T> = std::result::Result<T, SerpApiError>;

#[derive(Error, Debug)]
pub enum SerpApiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SerpAPI error ({status}): {message}")]
    Api { status: u16, message: String },
}
