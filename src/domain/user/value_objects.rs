// src/domain/user/value_objects.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

pub use crate::domain::ids::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Regular,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Regular => "regular",
        }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        let mut caps = HashSet::from([
            Cap::new("drafts", "manage"),
            Cap::new("drafts", "publish"),
            Cap::new("authors", "read-default"),
            Cap::new("authors", "set-own-default"),
        ]);
        if *self == Role::Admin {
            caps.extend([
                Cap::new("drafts", "manage-any"),
                Cap::new("drafts", "delete-published"),
                Cap::new("news", "revoke"),
                Cap::new("authors", "create"),
                Cap::new("authors", "update"),
                Cap::new("authors", "delete"),
                Cap::new("authors", "set-any-default"),
            ]);
        }
        caps
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "regular" => Ok(Role::Regular),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_capabilities_are_a_superset_of_regular() {
        let admin = Role::Admin.default_capabilities();
        let regular = Role::Regular.default_capabilities();
        assert!(regular.is_subset(&admin));
        assert!(admin.contains(&Capability::new("news", "revoke")));
        assert!(!regular.contains(&Capability::new("news", "revoke")));
    }

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::Regular.to_string(), "regular");
        assert!("guest".parse::<Role>().is_err());
    }
}
