// src/infrastructure/repositories/postgres/mod.rs
//! PostgreSQL unit of work. Every repository call runs on the transaction
//! opened by [`PostgresTransactionManager::begin`].
mod articles;
mod authors;
mod drafts;

use super::map_sqlx;
use crate::domain::{
    TransactionManager, UnitOfWork,
    article::{ArticleRepository, Image},
    author::AuthorRepository,
    draft::DraftRepository,
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct PostgresTransactionManager {
    pool: PgPool,
}

impl PostgresTransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionManager for PostgresTransactionManager {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresUnitOfWork { tx: Some(tx) }))
    }
}

/// Dropping without [`UnitOfWork::commit`] rolls the transaction back.
pub struct PostgresUnitOfWork {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PostgresUnitOfWork {
    fn conn(&mut self) -> DomainResult<&mut PgConnection> {
        self.tx
            .as_deref_mut()
            .ok_or_else(|| DomainError::Persistence("unit of work already committed".into()))
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    fn drafts(&mut self) -> &mut dyn DraftRepository {
        self
    }

    fn articles(&mut self) -> &mut dyn ArticleRepository {
        self
    }

    fn authors(&mut self) -> &mut dyn AuthorRepository {
        self
    }

    async fn commit(&mut self) -> DomainResult<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| DomainError::Persistence("unit of work already committed".into()))?;
        tx.commit().await.map_err(map_sqlx)
    }
}

/// Image columns are stored flat; all three are null or none is.
fn image_from_columns(
    url: Option<String>,
    description: Option<String>,
    author: Option<String>,
) -> Option<Image> {
    match (url, description, author) {
        (Some(url), Some(description), Some(author)) => Some(Image::new(url, description, author)),
        _ => None,
    }
}

fn image_columns(image: Option<&Image>) -> (Option<&str>, Option<&str>, Option<&str>) {
    match image {
        Some(image) => (
            Some(image.url.as_str()),
            Some(image.description.as_str()),
            Some(image.author.as_str()),
        ),
        None => (None, None, None),
    }
}

fn to_i64(value: u32) -> i64 {
    i64::from(value)
}
