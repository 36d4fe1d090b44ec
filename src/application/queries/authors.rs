// src/application/queries/authors.rs
use std::sync::Arc;

use crate::{
    application::{
        authorization::ensure_permission,
        dto::{AuthenticatedUser, AuthorDto, DefaultAuthorDto, PageRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{TransactionManager, author::AuthorId, policy::Operation, user::UserId},
};

pub const DEFAULT_AUTHORS_LIMIT: u32 = 50;

pub struct AuthorQueryService {
    transactions: Arc<dyn TransactionManager>,
}

impl AuthorQueryService {
    pub fn new(transactions: Arc<dyn TransactionManager>) -> Self {
        Self { transactions }
    }

    pub async fn list_authors(&self, page: PageRequest) -> ApplicationResult<Vec<AuthorDto>> {
        let (limit, offset) = page.resolve(DEFAULT_AUTHORS_LIMIT);
        let mut uow = self.transactions.begin().await?;
        let authors = uow.authors().list(limit, offset).await?;
        Ok(authors.into_iter().map(Into::into).collect())
    }

    pub async fn get_author(&self, id: String) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(id)?;
        let mut uow = self.transactions.begin().await?;
        uow.authors()
            .find_by_id(&id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("author {id} not found")))
    }

    /// `user_id == None` looks up the acting user.
    pub async fn get_default_author(
        &self,
        actor: &AuthenticatedUser,
        user_id: Option<String>,
    ) -> ApplicationResult<DefaultAuthorDto> {
        ensure_permission(actor, Operation::ReadDefaultAuthor)?;
        let user_id = match user_id {
            Some(user_id) => UserId::new(user_id)?,
            None => actor.id.clone(),
        };

        let mut uow = self.transactions.begin().await?;
        let author = match uow.authors().default_author_for(&user_id).await? {
            Some(author_id) => uow.authors().find_by_id(&author_id).await?,
            None => None,
        };
        Ok(DefaultAuthorDto::new(user_id, author))
    }
}
