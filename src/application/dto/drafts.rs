use crate::domain::{
    article::{ArticleId, Image},
    author::Author,
    draft::{Draft, DraftId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AuthorRefDto, serde_time};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageDto {
    pub url: String,
    pub description: String,
    pub author: String,
}

impl From<Image> for ImageDto {
    fn from(image: Image) -> Self {
        Self {
            url: image.url,
            description: image.description,
            author: image.author,
        }
    }
}

impl From<ImageDto> for Image {
    fn from(dto: ImageDto) -> Self {
        Image::new(dto.url, dto.description, dto.author)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftDto {
    pub id: String,
    pub news_article_id: Option<String>,
    pub headline: String,
    #[serde(with = "serde_time::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub date_published: Option<DateTime<Utc>>,
    pub author: Option<AuthorRefDto>,
    pub image: Option<ImageDto>,
    pub text: String,
    pub created_by_user_id: String,
    pub is_published: bool,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl DraftDto {
    pub fn new(draft: Draft, author: Option<Author>) -> Self {
        Self {
            author: draft
                .author_id
                .as_ref()
                .map(|id| AuthorRefDto::resolve(id, author)),
            id: draft.id.into_inner(),
            news_article_id: draft.news_article_id.map(ArticleId::into_inner),
            headline: draft.headline,
            date_published: draft.date_published,
            image: draft.image.map(Into::into),
            text: draft.text,
            created_by_user_id: draft.created_by.into_inner(),
            is_published: draft.is_published,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftListItemDto {
    pub id: String,
    pub news_article_id: Option<String>,
    pub headline: String,
    pub created_by_user_id: String,
    pub is_published: bool,
}

impl From<Draft> for DraftListItemDto {
    fn from(draft: Draft) -> Self {
        Self {
            id: draft.id.into_inner(),
            news_article_id: draft.news_article_id.map(ArticleId::into_inner),
            headline: draft.headline,
            created_by_user_id: draft.created_by.into_inner(),
            is_published: draft.is_published,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedDraftDto {
    pub draft_id: String,
}

impl From<DraftId> for CreatedDraftDto {
    fn from(id: DraftId) -> Self {
        Self {
            draft_id: id.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishedDraftDto {
    pub news_article_id: String,
}

impl From<ArticleId> for PublishedDraftDto {
    fn from(id: ArticleId) -> Self {
        Self {
            news_article_id: id.into_inner(),
        }
    }
}
