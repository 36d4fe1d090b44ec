use crate::domain::user::{Capability, Role, UserId};
use std::collections::HashSet;

/// Actor resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}

impl AuthenticatedUser {
    pub fn with_role(id: UserId, role: Role) -> Self {
        Self {
            id,
            role,
            capabilities: role.default_capabilities(),
        }
    }

    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}
