use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::draft::DraftId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outbound notification emitted once per committed state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    ArticleCreated {
        article_id: ArticleId,
        draft_id: DraftId,
        occurred_at: DateTime<Utc>,
    },
    ArticleUpdated {
        article_id: ArticleId,
        draft_id: DraftId,
        occurred_at: DateTime<Utc>,
    },
    ArticleRevoked {
        article_id: ArticleId,
        reason: String,
        occurred_at: DateTime<Utc>,
    },
    AuthorDeleted {
        author_id: AuthorId,
        occurred_at: DateTime<Utc>,
    },
}

impl DomainEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::ArticleCreated { .. } => "article_created",
            DomainEvent::ArticleUpdated { .. } => "article_updated",
            DomainEvent::ArticleRevoked { .. } => "article_revoked",
            DomainEvent::AuthorDeleted { .. } => "author_deleted",
        }
    }
}
