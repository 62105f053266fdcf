use thiserror::Error;

/// Errors emitted while reading or writing frame settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
    #[error("settings JSON failed")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by the iced-backed host window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum HostError {
    #[error("window is closing")]
    Closing,
}
