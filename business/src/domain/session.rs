use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub user_id: UserId,
    pub email: Option<String>,
}

/// Read access to the signed-in session for anything that calls the proxy.
#[async_trait]
pub trait SessionContext: Send + Sync {
    /// Snapshot of the current user; `None` when signed out.
    fn current_user(&self) -> Option<SessionUser>;
    /// Current bearer token; `None` when signed out or the token was revoked.
    async fn get_token(&self) -> Option<String>;
}

#[derive(Debug, Clone)]
struct SessionState {
    user: SessionUser,
    token: Option<String>,
}

/// Explicit session object handed by `Arc` to whoever needs auth state.
///
/// Starts signed out. The identity provider drives it through
/// [`AuthContext::sign_in`], [`AuthContext::refresh_token`] and
/// [`AuthContext::sign_out`]; readers only ever see snapshots.
#[derive(Debug, Default)]
pub struct AuthContext {
    state: RwLock<Option<SessionState>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, user: SessionUser, token: impl Into<String>) {
        if let Ok(mut state) = self.state.write() {
            *state = Some(SessionState {
                user,
                token: Some(token.into()),
            });
        }
    }

    /// Replaces the token of the current session. Ignored when signed out.
    pub fn refresh_token(&self, token: impl Into<String>) {
        if let Ok(mut state) = self.state.write()
            && let Some(session) = state.as_mut()
        {
            session.token = Some(token.into());
        }
    }

    /// Keeps the user but drops the token, e.g. after the provider rejected a refresh.
    pub fn revoke_token(&self) {
        if let Ok(mut state) = self.state.write()
            && let Some(session) = state.as_mut()
        {
            session.token = None;
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut state) = self.state.write() {
            *state = None;
        }
    }
}

#[async_trait]
impl SessionContext for AuthContext {
    fn current_user(&self) -> Option<SessionUser> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.as_ref().map(|s| s.user.clone()))
    }

    async fn get_token(&self) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.as_ref().and_then(|s| s.token.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            user_id: UserId::new("uid-1"),
            email: Some("ana@example.com".to_string()),
        }
    }

    #[tokio::test]
    async fn should_start_signed_out() {
        let context = AuthContext::new();

        assert!(context.current_user().is_none());
        assert!(context.get_token().await.is_none());
    }

    #[tokio::test]
    async fn should_expose_user_and_token_after_sign_in() {
        let context = AuthContext::new();

        context.sign_in(user(), "token-1");

        assert_eq!(context.current_user(), Some(user()));
        assert_eq!(context.get_token().await.as_deref(), Some("token-1"));
    }

    #[tokio::test]
    async fn should_replace_token_on_refresh() {
        let context = AuthContext::new();
        context.sign_in(user(), "token-1");

        context.refresh_token("token-2");

        assert_eq!(context.get_token().await.as_deref(), Some("token-2"));
    }

    #[tokio::test]
    async fn should_ignore_refresh_when_signed_out() {
        let context = AuthContext::new();

        context.refresh_token("token-2");

        assert!(context.current_user().is_none());
        assert!(context.get_token().await.is_none());
    }

    #[tokio::test]
    async fn should_keep_user_when_token_is_revoked() {
        let context = AuthContext::new();
        context.sign_in(user(), "token-1");

        context.revoke_token();

        assert!(context.current_user().is_some());
        assert!(context.get_token().await.is_none());
    }

    #[tokio::test]
    async fn should_clear_everything_on_sign_out() {
        let context = AuthContext::new();
        context.sign_in(user(), "token-1");

        context.sign_out();

        assert!(context.current_user().is_none());
        assert!(context.get_token().await.is_none());
    }
}
