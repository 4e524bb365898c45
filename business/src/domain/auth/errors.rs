#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_token: {0}")]
    InvalidToken(String),
    #[error("auth.verifier_unavailable: {0}")]
    VerifierUnavailable(String),
}
