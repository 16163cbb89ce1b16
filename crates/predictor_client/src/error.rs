use thiserror::Error;

/// Failure of a single request attempt against the prediction service.
///
/// The `Display` output is the exact advisory text shown to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status. `message` carries the
    /// service-supplied `error` body when present and non-empty, otherwise a
    /// generic per-operation fallback.
    #[error("{message}")]
    Service { message: String },

    /// The request could not be completed at all, or a success body could
    /// not be decoded.
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },
}
