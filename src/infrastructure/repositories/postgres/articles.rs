// src/infrastructure/repositories/postgres/articles.rs
use super::{PostgresUnitOfWork, image_columns, image_from_columns, map_sqlx, to_i64};
use crate::domain::{
    article::{Article, ArticleHeadline, ArticleId, ArticleRepository, ArticleText, RevokeReason},
    author::AuthorId,
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

const ARTICLE_COLUMNS: &str = "id, headline, date_published, author_id, image_url, \
     image_description, image_author, text, revoke_reason";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    headline: String,
    date_published: DateTime<Utc>,
    author_id: String,
    image_url: Option<String>,
    image_description: Option<String>,
    image_author: Option<String>,
    text: String,
    revoke_reason: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            headline: ArticleHeadline::new(row.headline)?,
            date_published: row.date_published,
            author_id: AuthorId::new(row.author_id)?,
            image: image_from_columns(row.image_url, row.image_description, row.image_author),
            text: ArticleText::new(row.text)?,
            revoke_reason: row.revoke_reason.map(RevokeReason::new).transpose()?,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresUnitOfWork {
    async fn find_by_id(&mut self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM news_articles WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_visible(&mut self, limit: u32, offset: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM news_articles
             WHERE revoke_reason IS NULL
             ORDER BY date_published DESC, id
             LIMIT $1 OFFSET $2"
        ))
        .bind(to_i64(limit))
        .bind(to_i64(offset))
        .fetch_all(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn insert(&mut self, article: &Article) -> DomainResult<()> {
        let (image_url, image_description, image_author) = image_columns(article.image.as_ref());
        sqlx::query(
            "INSERT INTO news_articles (id, headline, date_published, author_id, image_url,
                 image_description, image_author, text, revoke_reason)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(article.id.as_str())
        .bind(article.headline.as_str())
        .bind(article.date_published)
        .bind(article.author_id.as_str())
        .bind(image_url)
        .bind(image_description)
        .bind(image_author)
        .bind(article.text.as_str())
        .bind(article.revoke_reason.as_ref().map(RevokeReason::as_str))
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn update(&mut self, article: &Article) -> DomainResult<()> {
        let (image_url, image_description, image_author) = image_columns(article.image.as_ref());
        let result = sqlx::query(
            "UPDATE news_articles
             SET headline = $2, date_published = $3, author_id = $4, image_url = $5,
                 image_description = $6, image_author = $7, text = $8, revoke_reason = $9
             WHERE id = $1",
        )
        .bind(article.id.as_str())
        .bind(article.headline.as_str())
        .bind(article.date_published)
        .bind(article.author_id.as_str())
        .bind(image_url)
        .bind(image_description)
        .bind(image_author)
        .bind(article.text.as_str())
        .bind(article.revoke_reason.as_ref().map(RevokeReason::as_str))
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("news article not found".into()));
        }
        Ok(())
    }

    async fn count_visible_for_author(&mut self, author_id: &AuthorId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM news_articles WHERE author_id = $1 AND revoke_reason IS NULL",
        )
        .bind(author_id.as_str())
        .fetch_one(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
