// src/application/ports/util.rs
use crate::domain::{
    article::ArticleId, author::AuthorId, draft::DraftId, errors::DomainResult,
};

/// Source of fresh opaque identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_draft_id(&self) -> DomainResult<DraftId>;
    fn next_article_id(&self) -> DomainResult<ArticleId>;
    fn next_author_id(&self) -> DomainResult<AuthorId>;
}
