use async_trait::async_trait;

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub user_id: UserId,
    pub email: Option<String>,
}

/// Server-side verification of an identity token, owned by the identity
/// provider. Callers only interpret the outcome.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
/// Returns `None` for a missing header, a different scheme, or an empty token.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
