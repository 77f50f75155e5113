use thiserror::Error;

/// Failure to obtain a dataset snapshot.
///
/// This is the only error the system surfaces: once a dataset is loaded the
/// engine and the projection are total over any input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The dataset file could not be read.
    #[error("failed to read dataset from {location}: {message}")]
    Io { location: String, message: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request for {location} failed: {message}")]
    Http { location: String, message: String },

    /// The server answered with a non-success status code.
    #[error("request for {location} returned HTTP {status}")]
    Status { location: String, status: u16 },

    /// The payload was not valid JSON.
    #[error("dataset is not valid JSON: {message}")]
    Parse { message: String },

    /// The payload was JSON but not an array of records.
    #[error("dataset must be a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse {
            message: err.to_string(),
        }
    }
}
