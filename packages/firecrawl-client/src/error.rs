use thiserror::Error;

pub type Result<T> = std::result::Result<T, FirecrawlError>;

#[derive(Error, Debug)]
pub enum FirecrawlError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Firecrawl API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("extract job failed: {0}")]
    JobFailed(String),

    #[error("extract job {job_id} did not finish within {secs}s")]
    Timeout { job_id: String, secs: u64 },
}
