use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;

pub use crate::domain::ids::ArticleId;

/// Maximum headline length accepted for publication.
pub const MAX_HEADLINE_LENGTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleHeadline(String);

impl ArticleHeadline {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("headline cannot be empty".into()));
        }
        if value.trim().chars().count() > MAX_HEADLINE_LENGTH {
            return Err(DomainError::Validation(format!(
                "headline cannot be longer than {MAX_HEADLINE_LENGTH} characters"
            )));
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

impl fmt::Display for ArticleHeadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText(String);

impl ArticleText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("text cannot be empty".into()));
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeReason(String);

impl RevokeReason {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("revoke reason cannot be empty".into()));
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

impl fmt::Display for RevokeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Illustration attached to an article or draft.
///
/// Drafts may hold a partially filled image; publication requires all three
/// parts to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub description: String,
    pub author: String,
}

impl Image {
    pub fn new(
        url: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
            author: author.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.url, &self.description, &self.author]
            .iter()
            .all(|part| !part.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_rejects_blank_and_overlong_values() {
        assert!(ArticleHeadline::new("   ").is_err());
        assert!(ArticleHeadline::new("x".repeat(MAX_HEADLINE_LENGTH + 1)).is_err());
        assert!(ArticleHeadline::new("x".repeat(MAX_HEADLINE_LENGTH)).is_ok());
    }

    #[test]
    fn image_completeness_requires_every_part() {
        assert!(Image::new("https://img", "cat", "Jane").is_complete());
        assert!(!Image::new("https://img", "", "Jane").is_complete());
        assert!(!Image::new("", " ", "").is_complete());
    }

    #[test]
    fn revoke_reason_must_not_be_blank() {
        assert!(RevokeReason::new("").is_err());
        assert_eq!(RevokeReason::new("legal").unwrap().as_str(), "legal");
    }
}
