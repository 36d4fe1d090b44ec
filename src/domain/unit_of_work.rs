// src/domain/unit_of_work.rs
use crate::domain::article::ArticleRepository;
use crate::domain::author::AuthorRepository;
use crate::domain::draft::DraftRepository;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Repositories bound to one transaction.
///
/// Dropping a unit of work without calling [`UnitOfWork::commit`] discards
/// every write made through it.
#[async_trait]
pub trait UnitOfWork: Send {
    fn drafts(&mut self) -> &mut dyn DraftRepository;
    fn articles(&mut self) -> &mut dyn ArticleRepository;
    fn authors(&mut self) -> &mut dyn AuthorRepository;

    async fn commit(&mut self) -> DomainResult<()>;
}

#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}
