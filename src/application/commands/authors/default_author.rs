// src/application/commands/authors/default_author.rs
use super::{AuthorCommandService, service::load_author};
use crate::{
    application::{
        authorization::ensure_allowed, dto::AuthenticatedUser, error::ApplicationResult,
    },
    domain::{
        author::AuthorId,
        policy::{Operation, Ownership},
        user::UserId,
    },
};

pub struct SetDefaultAuthorCommand {
    /// Defaults to the acting user.
    pub user_id: Option<String>,
    /// `None` clears the default.
    pub author_id: Option<String>,
}

impl AuthorCommandService {
    pub async fn set_default_author(
        &self,
        actor: &AuthenticatedUser,
        command: SetDefaultAuthorCommand,
    ) -> ApplicationResult<()> {
        let user_id = match command.user_id {
            Some(user_id) => UserId::new(user_id)?,
            None => actor.id.clone(),
        };
        ensure_allowed(
            actor,
            Ownership::of(user_id == actor.id),
            Operation::SetDefaultAuthor,
        )?;
        let author_id = command.author_id.map(AuthorId::new).transpose()?;

        let mut uow = self.transactions.begin().await?;
        if let Some(author_id) = &author_id {
            load_author(uow.as_mut(), author_id).await?;
        }
        uow.authors()
            .set_default_author(&user_id, author_id.as_ref())
            .await?;
        uow.commit().await?;

        tracing::debug!(user_id = %user_id, author_id = ?author_id.as_ref().map(AuthorId::as_str), "default author set");
        Ok(())
    }
}
