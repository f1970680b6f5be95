/// Errors returned by the ESPN client
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or the connection failed
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server answered with a non-success status code
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body was not the JSON shape we expect
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;
