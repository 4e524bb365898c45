use std::env;

use anyhow::{Context, bail};

#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let project_id = env::var("FIREBASE_PROJECT_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())
            .context("FIREBASE_PROJECT_ID must be set when AUTH_VERIFY_TOKENS is enabled")?;

        Ok(Self { project_id })
    }
}

/// Token verification on the collection route.
///
/// Environment variables:
/// - AUTH_VERIFY_TOKENS: "true" or "false" (default: "true")
/// - FIREBASE_PROJECT_ID: required when verification is enabled
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub firebase: Option<FirebaseConfig>,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let verify = parse_flag(env::var("AUTH_VERIFY_TOKENS").ok().as_deref())?;
        let firebase = if verify {
            Some(FirebaseConfig::from_env()?)
        } else {
            None
        };

        Ok(Self { firebase })
    }
}

fn parse_flag(raw: Option<&str>) -> anyhow::Result<bool> {
    match raw.map(|value| value.trim().to_ascii_lowercase()) {
        None => Ok(true),
        Some(value) => match value.as_str() {
            "" | "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => bail!("AUTH_VERIFY_TOKENS must be true or false, got {other}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_tokens_by_default() {
        assert!(parse_flag(None).unwrap());
    }

    #[test]
    fn should_parse_flag_case_insensitively() {
        assert!(!parse_flag(Some("FALSE")).unwrap());
        assert!(parse_flag(Some(" Yes ")).unwrap());
    }

    #[test]
    fn should_reject_unknown_flag_value() {
        assert!(parse_flag(Some("maybe")).is_err());
    }
}
