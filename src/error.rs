use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubBadgeError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid repository target: {0}")]
    InvalidTarget(String),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitHubBadgeError>;
