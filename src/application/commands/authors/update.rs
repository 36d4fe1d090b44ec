// src/application/commands/authors/update.rs
use super::{AuthorCommandService, service::load_author};
use crate::{
    application::{
        authorization::ensure_permission, dto::AuthenticatedUser, error::ApplicationResult,
    },
    domain::{
        author::{AuthorId, AuthorName},
        policy::Operation,
    },
};

pub struct UpdateAuthorCommand {
    pub author_id: String,
    pub name: String,
}

impl AuthorCommandService {
    pub async fn update_author(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateAuthorCommand,
    ) -> ApplicationResult<()> {
        ensure_permission(actor, Operation::UpdateAuthor)?;
        let id = AuthorId::new(command.author_id)?;
        let name = AuthorName::new(command.name)?;

        let mut uow = self.transactions.begin().await?;
        let mut author = load_author(uow.as_mut(), &id).await?;
        author.rename(name);
        uow.authors().update(&author).await?;
        uow.commit().await?;
        Ok(())
    }
}
