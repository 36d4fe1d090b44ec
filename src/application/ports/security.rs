// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a bearer token to an actor, `Unauthorized` when unknown.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
