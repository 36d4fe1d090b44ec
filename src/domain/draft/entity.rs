// src/domain/draft/entity.rs
use crate::domain::article::{Article, ArticleHeadline, ArticleId, ArticleText, Image, PublishedContent};
use crate::domain::author::AuthorId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

pub use crate::domain::ids::DraftId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Active,
    Published,
}

/// Mutable working copy of an article. `news_article_id == None` means the
/// draft will create a brand new article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub id: DraftId,
    pub news_article_id: Option<ArticleId>,
    pub created_by: UserId,
    pub headline: String,
    pub date_published: Option<DateTime<Utc>>,
    pub author_id: Option<AuthorId>,
    pub image: Option<Image>,
    pub text: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the editable fields; partial updates are not supported.
#[derive(Debug, Clone)]
pub struct DraftContent {
    pub headline: String,
    pub date_published: Option<DateTime<Utc>>,
    pub author_id: AuthorId,
    pub image: Option<Image>,
    pub text: String,
}

impl Draft {
    pub fn from_scratch(
        id: DraftId,
        created_by: UserId,
        default_author: Option<AuthorId>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            news_article_id: None,
            created_by,
            headline: String::new(),
            date_published: None,
            author_id: default_author,
            image: None,
            text: String::new(),
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_article(
        id: DraftId,
        article: &Article,
        created_by: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            news_article_id: Some(article.id.clone()),
            created_by,
            headline: article.headline.as_str().to_owned(),
            date_published: Some(article.date_published),
            author_id: Some(article.author_id.clone()),
            image: article.image.clone(),
            text: article.text.as_str().to_owned(),
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn state(&self) -> DraftState {
        if self.is_published {
            DraftState::Published
        } else {
            DraftState::Active
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }

    pub fn replace_content(&mut self, content: DraftContent, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_active()?;
        self.headline = content.headline;
        self.date_published = content.date_published;
        self.author_id = Some(content.author_id);
        self.image = content.image;
        self.text = content.text;
        self.updated_at = now;
        Ok(())
    }

    /// Terminal transition; the draft stays around for history but no
    /// longer holds the article lock.
    pub fn mark_published(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_active()?;
        self.is_published = true;
        self.updated_at = now;
        Ok(())
    }

    /// Converts the draft fields into article content. Callers run the
    /// publish validator first; this only re-checks the typed invariants.
    pub fn published_content(&self) -> DomainResult<PublishedContent> {
        let date_published = self
            .date_published
            .ok_or_else(|| DomainError::Validation("publication date is required".into()))?;
        let author_id = self
            .author_id
            .clone()
            .ok_or_else(|| DomainError::Validation("author is required".into()))?;
        Ok(PublishedContent {
            headline: ArticleHeadline::new(self.headline.trim())?,
            date_published,
            author_id,
            image: self.image.clone(),
            text: ArticleText::new(self.text.clone())?,
        })
    }

    fn ensure_active(&self) -> DomainResult<()> {
        match self.state() {
            DraftState::Active => Ok(()),
            DraftState::Published => Err(DomainError::Conflict(
                "published draft can not be edited".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> Draft {
        Draft::from_scratch(
            DraftId::new("D1").unwrap(),
            UserId::new("U1").unwrap(),
            None,
            Utc::now(),
        )
    }

    fn content() -> DraftContent {
        DraftContent {
            headline: "Cats win".into(),
            date_published: Some(Utc::now()),
            author_id: AuthorId::new("AU1").unwrap(),
            image: None,
            text: "Full text".into(),
        }
    }

    #[test]
    fn scratch_draft_starts_active_and_empty() {
        let draft = scratch();
        assert_eq!(draft.state(), DraftState::Active);
        assert!(draft.headline.is_empty());
        assert!(draft.news_article_id.is_none());
    }

    #[test]
    fn replace_content_overwrites_every_field() {
        let mut draft = scratch();
        let later = Utc::now() + chrono::Duration::seconds(5);
        draft.replace_content(content(), later).unwrap();
        assert_eq!(draft.headline, "Cats win");
        assert_eq!(draft.author_id.as_ref().unwrap().as_str(), "AU1");
        assert_eq!(draft.updated_at, later);
    }

    #[test]
    fn published_draft_is_terminal() {
        let mut draft = scratch();
        draft.mark_published(Utc::now()).unwrap();
        assert_eq!(draft.state(), DraftState::Published);
        assert!(matches!(
            draft.replace_content(content(), Utc::now()),
            Err(DomainError::Conflict(_))
        ));
        assert!(draft.mark_published(Utc::now()).is_err());
    }

    #[test]
    fn published_content_requires_date_and_author() {
        let draft = scratch();
        assert!(draft.published_content().is_err());
        let mut draft = scratch();
        draft.replace_content(content(), Utc::now()).unwrap();
        let published = draft.published_content().unwrap();
        assert_eq!(published.headline.as_str(), "Cats win");
    }
}
