// src/domain/ids.rs
//! Opaque string identifiers shared by every aggregate.
//!
//! Ids are never assumed to be numeric; the only invariant is that they are
//! non-blank.
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;

macro_rules! opaque_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($label, " id cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

opaque_id!(ArticleId, "news article");
opaque_id!(AuthorId, "author");
opaque_id!(DraftId, "draft");
opaque_id!(UserId, "user");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(DraftId::new("  ").is_err());
        assert!(ArticleId::new("").is_err());
    }

    #[test]
    fn ids_are_opaque_strings() {
        let id = AuthorId::new("11112222-3333-4444-5555-666677778888").unwrap();
        assert_eq!(id.as_str(), "11112222-3333-4444-5555-666677778888");
        assert_eq!(UserId::new("U1").unwrap().to_string(), "U1");
    }
}
