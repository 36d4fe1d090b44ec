// src/application/commands/authors/create.rs
use super::AuthorCommandService;
use crate::{
    application::{
        authorization::ensure_permission, dto::AuthenticatedUser, error::ApplicationResult,
    },
    domain::{
        author::{Author, AuthorId, AuthorName},
        policy::Operation,
    },
};

pub struct CreateAuthorCommand {
    pub name: String,
}

impl AuthorCommandService {
    pub async fn create_author(
        &self,
        actor: &AuthenticatedUser,
        command: CreateAuthorCommand,
    ) -> ApplicationResult<AuthorId> {
        ensure_permission(actor, Operation::CreateAuthor)?;
        let author = Author {
            id: self.ids.next_author_id()?,
            name: AuthorName::new(command.name)?,
        };

        let mut uow = self.transactions.begin().await?;
        uow.authors().insert(&author).await?;
        uow.commit().await?;

        tracing::info!(author_id = %author.id, user_id = %actor.id, "author created");
        Ok(author.id)
    }
}
