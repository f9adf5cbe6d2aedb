use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum TickError {
    #[error("Invalid date \"{input}\" (expected dd/mm/yyyy)")]
    InvalidDate { input: String },

    #[error("Login failed: status {0}")]
    LoginStatus(u16),

    #[error("CSRF token meta tag not found in login response")]
    TokenMissing,

    #[error("Request failed: {0}")]
    Transport(#[from] ureq::Error),
}
