// src/application/commands/authors/delete.rs
use super::AuthorCommandService;
use crate::{
    application::{
        authorization::ensure_permission,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::DomainEvent, author::AuthorId, policy::Operation},
};

pub struct DeleteAuthorCommand {
    pub author_id: String,
}

impl AuthorCommandService {
    /// Refused while any non-revoked article credits the author. The
    /// author's drafts and default-author mappings go with it.
    pub async fn delete_author(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteAuthorCommand,
    ) -> ApplicationResult<()> {
        ensure_permission(actor, Operation::DeleteAuthor)?;
        let id = AuthorId::new(command.author_id)?;

        let mut uow = self.transactions.begin().await?;
        // Drafts before the author row: publish locks in the same order.
        let drafts = uow.drafts().delete_for_author(&id).await?;
        uow.authors()
            .find_by_id_for_update(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("author {id} not found")))?;
        let published = uow.articles().count_visible_for_author(&id).await?;
        if published > 0 {
            return Err(ApplicationError::conflict(format!(
                "author {id} has {published} published news articles"
            )));
        }
        uow.authors().delete(&id).await?;
        uow.commit().await?;

        tracing::info!(author_id = %id, user_id = %actor.id, drafts, "author deleted");
        self.events.publish(DomainEvent::AuthorDeleted {
            author_id: id,
            occurred_at: self.clock.now(),
        });
        Ok(())
    }
}
