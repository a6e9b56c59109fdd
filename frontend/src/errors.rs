//! Error types for the REST client and the workflow guard.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::workflow::Operation;

/// Failure of a single remote call.  Callers only ever show a fixed message
/// to the user; the variant is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API request failed: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// 2xx response whose body reports a service-level error.
    #[error("rejected by service: {0}")]
    Rejected(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(detail)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Reasons an operation is refused before any request goes out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("{0} is already in progress")]
    AlreadyRunning(Operation),

    #[error("no resume text to process")]
    NoResumeText,

    #[error("no file selected")]
    NoFileSelected,

    #[error("unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("passwords do not match")]
    PasswordMismatch,
}

impl GuardError {
    /// Message shown to the user, if this rejection warrants one.  Re-entrant
    /// triggers and missing text are silent because the view disables the
    /// control that would produce them.
    pub fn user_message(&self) -> Option<&'static str> {
        use crate::constants::{MSG_NO_FILE_SELECTED, MSG_PASSWORD_MISMATCH, MSG_UNSUPPORTED_FILE};
        match self {
            GuardError::AlreadyRunning(_) | GuardError::NoResumeText => None,
            GuardError::NoFileSelected => Some(MSG_NO_FILE_SELECTED),
            GuardError::UnsupportedFile(_) => Some(MSG_UNSUPPORTED_FILE),
            GuardError::PasswordMismatch => Some(MSG_PASSWORD_MISMATCH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = ApiError::Status { status: 500, status_text: "Internal Server Error".into() };
        assert_eq!(err.to_string(), "API request failed: 500 Internal Server Error");
    }

    #[test]
    fn serde_errors_become_decode_errors() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn only_user_facing_rejections_have_messages() {
        assert_eq!(GuardError::NoFileSelected.user_message(), Some("Please select a resume file"));
        assert_eq!(GuardError::PasswordMismatch.user_message(), Some("Passwords do not match"));
        assert_eq!(GuardError::AlreadyRunning(Operation::Score).user_message(), None);
        assert_eq!(GuardError::NoResumeText.user_message(), None);
    }
}
