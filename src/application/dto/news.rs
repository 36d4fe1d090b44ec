use crate::domain::{article::Article, author::Author};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{AuthorRefDto, ImageDto, serde_time};

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleDto {
    pub id: String,
    pub headline: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub date_published: DateTime<Utc>,
    pub author: AuthorRefDto,
    pub image: Option<ImageDto>,
    pub text: String,
    pub revoke_reason: Option<String>,
}

impl NewsArticleDto {
    pub fn new(article: Article, author: Option<Author>) -> Self {
        Self {
            author: AuthorRefDto::resolve(&article.author_id, author),
            id: article.id.into_inner(),
            headline: article.headline.into_inner(),
            date_published: article.date_published,
            image: article.image.map(Into::into),
            text: article.text.into_inner(),
            revoke_reason: article.revoke_reason.map(|reason| reason.into_inner()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsListItemDto {
    pub id: String,
    pub headline: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub date_published: DateTime<Utc>,
    pub author: AuthorRefDto,
    pub revoke_reason: Option<String>,
}

impl NewsListItemDto {
    pub fn new(article: Article, author: Option<Author>) -> Self {
        Self {
            author: AuthorRefDto::resolve(&article.author_id, author),
            id: article.id.into_inner(),
            headline: article.headline.into_inner(),
            date_published: article.date_published,
            revoke_reason: article.revoke_reason.map(|reason| reason.into_inner()),
        }
    }
}
