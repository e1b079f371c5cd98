use std::sync::Arc;

/// Result type alias used for the fallible surface of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handing host settings to the injector.
///
/// Gate decisions are never expressed as errors: an ineligible request, missing
/// settings, or a malformed tag id all simply produce no snippet.
#[derive(thiserror::Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The host settings value is not a mapping.
    #[error("invalid raw settings value")]
    // serde_json::Error is not clonable, so we're wrapping it in an Arc.
    InvalidSettings(#[source] Arc<serde_json::Error>),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidSettings(Arc::new(value))
    }
}
