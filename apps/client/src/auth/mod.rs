//! Token acquisition. The identity provider itself is an external
//! collaborator; this module only defines the capability the rest of the
//! client programs against.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// A named permission required by the remote API to authorize an
/// operation. The server is the sole authority on enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    ReadAllResumeReviews,
    UpdateAllResumeReviews,
    CreateResumeReviews,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::ReadAllResumeReviews => "read:all_resume_reviews",
            Scope::UpdateAllResumeReviews => "update:all_resume_reviews",
            Scope::CreateResumeReviews => "create:resume_reviews",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("user is not authenticated")]
    Unauthenticated,

    #[error("missing required scope: {0}")]
    MissingScope(Scope),
}

/// Asynchronously yields a bearer token scoped to a set of permissions.
/// May fail if the user is unauthenticated or lacks a requested scope.
#[async_trait]
pub trait TokenAcquirer: Send + Sync {
    async fn acquire_token(&self, scopes: &[Scope]) -> Result<String, TokenError>;
}

/// Token acquirer holding a fixed token. Development and test use.
#[derive(Debug, Clone)]
pub struct StaticTokenAcquirer {
    token: String,
}

impl StaticTokenAcquirer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenAcquirer for StaticTokenAcquirer {
    async fn acquire_token(&self, _scopes: &[Scope]) -> Result<String, TokenError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_acquirer_yields_its_token_for_any_scope_set() {
        let acquirer = StaticTokenAcquirer::new("token-123");
        let token = acquirer
            .acquire_token(&[Scope::ReadAllResumeReviews, Scope::CreateResumeReviews])
            .await
            .unwrap();
        assert_eq!(token, "token-123");
    }

    #[test]
    fn test_scope_wire_strings() {
        assert_eq!(Scope::ReadAllResumeReviews.as_str(), "read:all_resume_reviews");
        assert_eq!(
            Scope::UpdateAllResumeReviews.to_string(),
            "update:all_resume_reviews"
        );
    }
}
