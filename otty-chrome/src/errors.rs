use thiserror::Error;

/// Errors raised by the chrome core itself.
///
/// Failures of the host window or the platform menu are not represented
/// here: commands hand them back as the host's own error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    #[error("chrome view model requires a host window")]
    MissingHost,

    #[error("unknown chrome property: {0}")]
    UnknownProperty(String),
}
