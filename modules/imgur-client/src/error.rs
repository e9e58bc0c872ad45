use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImgurError>;

/// Failures talking to the Imgur API. Every variant names the URL so callers
/// can surface which fetch went wrong.
#[derive(Debug, Error)]
pub enum ImgurError {
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("API error fetching {url} (status {status}): {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Parse error for {url}: {message}")]
    Parse { url: String, message: String },
}

impl ImgurError {
    pub fn network(url: &str, err: impl std::fmt::Display) -> Self {
        ImgurError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn parse(url: &str, err: impl std::fmt::Display) -> Self {
        ImgurError::Parse {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
