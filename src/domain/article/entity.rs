// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleHeadline, ArticleId, ArticleText, Image, RevokeReason,
};
use crate::domain::author::AuthorId;
use chrono::{DateTime, Utc};

/// A published news article. Only a draft publish creates or rewrites one;
/// the revoke reason is the single field mutated outside that workflow.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub headline: ArticleHeadline,
    pub date_published: DateTime<Utc>,
    pub author_id: AuthorId,
    pub image: Option<Image>,
    pub text: ArticleText,
    pub revoke_reason: Option<RevokeReason>,
}

/// Validated content taken from a draft at publish time.
#[derive(Debug, Clone)]
pub struct PublishedContent {
    pub headline: ArticleHeadline,
    pub date_published: DateTime<Utc>,
    pub author_id: AuthorId,
    pub image: Option<Image>,
    pub text: ArticleText,
}

impl PublishedContent {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            headline: self.headline,
            date_published: self.date_published,
            author_id: self.author_id,
            image: self.image,
            text: self.text,
            revoke_reason: None,
        }
    }
}

impl Article {
    pub fn is_revoked(&self) -> bool {
        self.revoke_reason.is_some()
    }

    /// Hides the article from public listings. Revoking twice keeps the
    /// latest reason.
    pub fn revoke(&mut self, reason: RevokeReason) {
        self.revoke_reason = Some(reason);
    }

    /// Overwrites the article in place; republishing makes it visible again.
    pub fn apply_content(&mut self, content: PublishedContent) {
        self.headline = content.headline;
        self.date_published = content.date_published;
        self.author_id = content.author_id;
        self.image = content.image;
        self.text = content.text;
        self.revoke_reason = None;
    }
}
