// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{events::EventPublisher, time::Clock, util::IdGenerator},
    },
    domain::{
        TransactionManager, UnitOfWork,
        author::{Author, AuthorId},
    },
};

pub struct AuthorCommandService {
    pub(super) transactions: Arc<dyn TransactionManager>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) events: Arc<dyn EventPublisher>,
}

impl AuthorCommandService {
    pub fn new(
        transactions: Arc<dyn TransactionManager>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            transactions,
            ids,
            clock,
            events,
        }
    }
}

pub(super) async fn load_author(
    uow: &mut dyn UnitOfWork,
    id: &AuthorId,
) -> ApplicationResult<Author> {
    uow.authors()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found(format!("author {id} not found")))
}
