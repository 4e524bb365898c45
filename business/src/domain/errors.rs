/// Failures talking to the backend product service.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend.transport: {0}")]
    Transport(String),
    #[error("backend.malformed_response: {0}")]
    MalformedResponse(String),
}

impl BackendError {
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        BackendError::Transport(detail.to_string())
    }
    pub fn malformed_response(detail: impl std::fmt::Display) -> Self {
        BackendError::MalformedResponse(detail.to_string())
    }
}
