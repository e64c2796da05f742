use thiserror::Error;

/// Errors surfaced by signing and dispatch.
///
/// Signing never retries and never returns a partial result; a failed
/// `sign` attaches no headers. Retry policy for dispatch belongs to the
/// transport behind the [`crate::transport::Transport`] trait.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request target could not be parsed as a URI.
    #[error("invalid request uri: {0}")]
    InvalidUri(#[from] url::ParseError),

    /// A parameter value could not be percent/form encoded.
    #[error("parameter cannot be encoded: {0}")]
    Encoding(String),

    /// The HMAC computation itself failed.
    #[error("signature computation failed: {0}")]
    Signing(String),

    /// The transport could not complete the exchange.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-200 status.
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// A response body could not be decoded into its typed output.
    #[error("cannot decode response body: {0}")]
    Decode(String),
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
