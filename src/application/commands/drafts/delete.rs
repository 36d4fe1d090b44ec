// src/application/commands/drafts/delete.rs
use super::{DraftCommandService, service::load_draft_for_update};
use crate::{
    application::{
        authorization::ensure_allowed,
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::{
        draft::{DraftId, DraftState},
        policy::{Operation, Ownership},
    },
};

pub struct DeleteDraftCommand {
    pub draft_id: String,
}

impl DraftCommandService {
    /// Removing an active draft releases its article's lock.
    pub async fn delete_draft(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteDraftCommand,
    ) -> ApplicationResult<()> {
        let id = DraftId::new(command.draft_id)?;

        let mut uow = self.transactions.begin().await?;
        let draft = load_draft_for_update(uow.as_mut(), &id).await?;
        let ownership = Ownership::of(draft.is_owned_by(&actor.id));
        ensure_allowed(actor, ownership, Operation::DeleteDraft)?;
        if draft.state() == DraftState::Published {
            ensure_allowed(actor, ownership, Operation::DeletePublishedDraft)?;
        }

        uow.drafts().delete(&id).await?;
        uow.commit().await?;

        tracing::info!(
            draft_id = %id,
            user_id = %actor.id,
            owner = %draft.created_by,
            "draft deleted"
        );
        Ok(())
    }
}
