// src/infrastructure/repositories/postgres/drafts.rs
use super::{PostgresUnitOfWork, image_columns, image_from_columns, map_sqlx, to_i64};
use crate::domain::{
    article::ArticleId,
    author::AuthorId,
    draft::{Draft, DraftId, DraftRepository},
    errors::{DomainError, DomainResult},
    user::UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};

const DRAFT_COLUMNS: &str = "id, news_article_id, created_by, headline, date_published, \
     author_id, image_url, image_description, image_author, text, is_published, \
     created_at, updated_at";

#[derive(Debug, FromRow)]
struct DraftRow {
    id: String,
    news_article_id: Option<String>,
    created_by: String,
    headline: String,
    date_published: Option<DateTime<Utc>>,
    author_id: Option<String>,
    image_url: Option<String>,
    image_description: Option<String>,
    image_author: Option<String>,
    text: String,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DraftRow> for Draft {
    type Error = DomainError;

    fn try_from(row: DraftRow) -> Result<Self, Self::Error> {
        Ok(Draft {
            id: DraftId::new(row.id)?,
            news_article_id: row.news_article_id.map(ArticleId::new).transpose()?,
            created_by: UserId::new(row.created_by)?,
            headline: row.headline,
            date_published: row.date_published,
            author_id: row.author_id.map(AuthorId::new).transpose()?,
            image: image_from_columns(row.image_url, row.image_description, row.image_author),
            text: row.text,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl DraftRepository for PostgresUnitOfWork {
    /// Transaction-scoped advisory lock keyed on the article id. Concurrent
    /// creators for the same article queue here until the holder commits.
    async fn lock_article(&mut self, article_id: &ArticleId) -> DomainResult<()> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(article_id.as_str())
            .execute(self.conn()?)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&mut self, id: &DraftId) -> DomainResult<Option<Draft>> {
        let row = sqlx::query_as::<_, DraftRow>(&format!(
            "SELECT {DRAFT_COLUMNS} FROM drafts WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        row.map(Draft::try_from).transpose()
    }

    async fn find_by_id_for_update(&mut self, id: &DraftId) -> DomainResult<Option<Draft>> {
        let row = sqlx::query_as::<_, DraftRow>(&format!(
            "SELECT {DRAFT_COLUMNS} FROM drafts WHERE id = $1 FOR UPDATE"
        ))
        .bind(id.as_str())
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        row.map(Draft::try_from).transpose()
    }

    async fn find_active_for_article(
        &mut self,
        article_id: &ArticleId,
    ) -> DomainResult<Option<Draft>> {
        let row = sqlx::query_as::<_, DraftRow>(&format!(
            "SELECT {DRAFT_COLUMNS} FROM drafts
             WHERE news_article_id = $1 AND NOT is_published"
        ))
        .bind(article_id.as_str())
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        row.map(Draft::try_from).transpose()
    }

    async fn list(
        &mut self,
        created_by: Option<&UserId>,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Draft>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {DRAFT_COLUMNS} FROM drafts"));
        if let Some(created_by) = created_by {
            builder.push(" WHERE created_by = ");
            builder.push_bind(created_by.as_str());
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(to_i64(limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(offset));

        let rows = builder
            .build_query_as::<DraftRow>()
            .fetch_all(self.conn()?)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Draft::try_from).collect()
    }

    async fn insert(&mut self, draft: &Draft) -> DomainResult<()> {
        let (image_url, image_description, image_author) = image_columns(draft.image.as_ref());
        sqlx::query(
            "INSERT INTO drafts (id, news_article_id, created_by, headline, date_published,
                 author_id, image_url, image_description, image_author, text, is_published,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(draft.id.as_str())
        .bind(draft.news_article_id.as_ref().map(ArticleId::as_str))
        .bind(draft.created_by.as_str())
        .bind(draft.headline.as_str())
        .bind(draft.date_published)
        .bind(draft.author_id.as_ref().map(AuthorId::as_str))
        .bind(image_url)
        .bind(image_description)
        .bind(image_author)
        .bind(draft.text.as_str())
        .bind(draft.is_published)
        .bind(draft.created_at)
        .bind(draft.updated_at)
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn update(&mut self, draft: &Draft) -> DomainResult<()> {
        let (image_url, image_description, image_author) = image_columns(draft.image.as_ref());
        let result = sqlx::query(
            "UPDATE drafts
             SET headline = $2, date_published = $3, author_id = $4, image_url = $5,
                 image_description = $6, image_author = $7, text = $8, is_published = $9,
                 updated_at = $10
             WHERE id = $1 AND NOT is_published",
        )
        .bind(draft.id.as_str())
        .bind(draft.headline.as_str())
        .bind(draft.date_published)
        .bind(draft.author_id.as_ref().map(AuthorId::as_str))
        .bind(image_url)
        .bind(image_description)
        .bind(image_author)
        .bind(draft.text.as_str())
        .bind(draft.is_published)
        .bind(draft.updated_at)
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM drafts WHERE id = $1)")
                    .bind(draft.id.as_str())
                    .fetch_one(self.conn()?)
                    .await
                    .map_err(map_sqlx)?;
            return Err(if exists {
                DomainError::Conflict(format!("draft {} is already published", draft.id))
            } else {
                DomainError::NotFound("draft not found".into())
            });
        }
        Ok(())
    }

    async fn delete(&mut self, id: &DraftId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM drafts WHERE id = $1")
            .bind(id.as_str())
            .execute(self.conn()?)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("draft not found".into()));
        }
        Ok(())
    }

    async fn delete_for_author(&mut self, author_id: &AuthorId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM drafts WHERE author_id = $1")
            .bind(author_id.as_str())
            .execute(self.conn()?)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
