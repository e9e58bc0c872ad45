use imgur_client::ImgurError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Unknown query mode: {0:?}")]
    InvalidQueryMode(String),

    #[error("Invalid query parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Upstream(#[from] ImgurError),

    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}
