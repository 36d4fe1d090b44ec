// src/infrastructure/security/static_tokens.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::security::IdentityProvider,
    },
    domain::user::{Role, UserId},
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Bearer tokens mapped to fixed identities, configured as
/// `token=user-id:role` entries separated by commas.
#[derive(Clone, Default)]
pub struct StaticTokenIdentityProvider {
    tokens: HashMap<String, (UserId, Role)>,
}

impl StaticTokenIdentityProvider {
    pub fn parse(table: &str) -> ApplicationResult<Self> {
        let mut tokens = HashMap::new();
        for entry in table.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (token, identity) = entry.split_once('=').ok_or_else(|| {
                ApplicationError::validation(format!("token entry '{entry}' must look like token=user:role"))
            })?;
            let (user_id, role) = identity.split_once(':').ok_or_else(|| {
                ApplicationError::validation(format!("identity '{identity}' must look like user:role"))
            })?;
            let token = token.trim();
            if token.is_empty() {
                return Err(ApplicationError::validation("token cannot be empty"));
            }
            let user_id = UserId::new(user_id.trim())?;
            let role: Role = role.trim().parse()?;
            tokens.insert(token.to_owned(), (user_id, role));
        }
        Ok(Self { tokens })
    }

    pub fn with_token(mut self, token: impl Into<String>, user_id: UserId, role: Role) -> Self {
        self.tokens.insert(token.into(), (user_id, role));
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenIdentityProvider {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (user_id, role) = self
            .tokens
            .get(token)
            .ok_or_else(|| ApplicationError::unauthorized("unknown bearer token"))?;
        Ok(AuthenticatedUser::with_role(user_id.clone(), *role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parses_token_table_and_authenticates() {
        let provider =
            StaticTokenIdentityProvider::parse("t-admin=U0:admin, t-user=U1:regular").unwrap();
        assert_eq!(provider.len(), 2);

        let admin = provider.authenticate("t-admin").await.unwrap();
        assert_eq!(admin.id.as_str(), "U0");
        assert_eq!(admin.role, Role::Admin);
        assert!(admin.has_capability("news", "revoke"));

        let user = provider.authenticate("t-user").await.unwrap();
        assert!(!user.has_capability("news", "revoke"));

        assert!(matches!(
            provider.authenticate("nope").await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(StaticTokenIdentityProvider::parse("").unwrap().is_empty());
        assert!(StaticTokenIdentityProvider::parse("token-only").is_err());
        assert!(StaticTokenIdentityProvider::parse("t=U1").is_err());
        assert!(StaticTokenIdentityProvider::parse("t=U1:guest").is_err());
    }
}
