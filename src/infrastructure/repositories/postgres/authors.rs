// src/infrastructure/repositories/postgres/authors.rs
use super::{PostgresUnitOfWork, map_sqlx, to_i64};
use crate::domain::{
    author::{Author, AuthorId, AuthorName, AuthorRepository},
    errors::{DomainError, DomainResult},
    user::UserId,
};
use async_trait::async_trait;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: String,
    name: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            name: AuthorName::new(row.name)?,
        })
    }
}

#[async_trait]
impl AuthorRepository for PostgresUnitOfWork {
    async fn find_by_id(&mut self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>("SELECT id, name FROM authors WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(self.conn()?)
            .await
            .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_by_id_for_share(&mut self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name FROM authors WHERE id = $1 FOR SHARE",
        )
        .bind(id.as_str())
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_by_id_for_update(&mut self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name FROM authors WHERE id = $1 FOR UPDATE",
        )
        .bind(id.as_str())
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn list(&mut self, limit: u32, offset: u32) -> DomainResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name FROM authors ORDER BY name, id LIMIT $1 OFFSET $2",
        )
        .bind(to_i64(limit))
        .bind(to_i64(offset))
        .fetch_all(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }

    async fn insert(&mut self, author: &Author) -> DomainResult<()> {
        sqlx::query("INSERT INTO authors (id, name) VALUES ($1, $2)")
            .bind(author.id.as_str())
            .bind(author.name.as_str())
            .execute(self.conn()?)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn update(&mut self, author: &Author) -> DomainResult<()> {
        let result = sqlx::query("UPDATE authors SET name = $2 WHERE id = $1")
            .bind(author.id.as_str())
            .bind(author.name.as_str())
            .execute(self.conn()?)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("author not found".into()));
        }
        Ok(())
    }

    /// Default-author mappings are removed by `ON DELETE CASCADE`.
    async fn delete(&mut self, id: &AuthorId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id.as_str())
            .execute(self.conn()?)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("author not found".into()));
        }
        Ok(())
    }

    async fn default_author_for(&mut self, user_id: &UserId) -> DomainResult<Option<AuthorId>> {
        let author_id: Option<String> =
            sqlx::query_scalar("SELECT author_id FROM default_authors WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_optional(self.conn()?)
                .await
                .map_err(map_sqlx)?;

        author_id.map(AuthorId::new).transpose()
    }

    async fn set_default_author(
        &mut self,
        user_id: &UserId,
        author_id: Option<&AuthorId>,
    ) -> DomainResult<()> {
        match author_id {
            Some(author_id) => {
                sqlx::query(
                    "INSERT INTO default_authors (user_id, author_id) VALUES ($1, $2)
                     ON CONFLICT (user_id) DO UPDATE SET author_id = EXCLUDED.author_id",
                )
                .bind(user_id.as_str())
                .bind(author_id.as_str())
                .execute(self.conn()?)
                .await
                .map_err(map_sqlx)?;
            }
            None => {
                sqlx::query("DELETE FROM default_authors WHERE user_id = $1")
                    .bind(user_id.as_str())
                    .execute(self.conn()?)
                    .await
                    .map_err(map_sqlx)?;
            }
        }
        Ok(())
    }
}
