// src/application/queries/drafts.rs
use std::sync::Arc;

use crate::{
    application::{
        authorization::{ensure_allowed, ensure_permission},
        dto::{AuthenticatedUser, DraftDto, DraftListItemDto, PageRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        TransactionManager,
        draft::DraftId,
        policy::{Operation, Ownership},
    },
};

pub const DEFAULT_DRAFTS_LIMIT: u32 = 10;

pub struct DraftQueryService {
    transactions: Arc<dyn TransactionManager>,
}

impl DraftQueryService {
    pub fn new(transactions: Arc<dyn TransactionManager>) -> Self {
        Self { transactions }
    }

    /// Actors that may manage any draft see every draft, everyone else
    /// only their own.
    pub async fn list_drafts(
        &self,
        actor: &AuthenticatedUser,
        page: PageRequest,
    ) -> ApplicationResult<Vec<DraftListItemDto>> {
        ensure_permission(actor, Operation::ListDrafts)?;
        let (limit, offset) = page.resolve(DEFAULT_DRAFTS_LIMIT);
        let created_by = (!actor.has_capability("drafts", "manage-any")).then_some(&actor.id);

        let mut uow = self.transactions.begin().await?;
        let drafts = uow.drafts().list(created_by, limit, offset).await?;
        Ok(drafts.into_iter().map(Into::into).collect())
    }

    pub async fn get_draft(
        &self,
        actor: &AuthenticatedUser,
        id: String,
    ) -> ApplicationResult<DraftDto> {
        let id = DraftId::new(id)?;
        let mut uow = self.transactions.begin().await?;
        let draft = uow
            .drafts()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("draft {id} not found")))?;
        ensure_allowed(
            actor,
            Ownership::of(draft.is_owned_by(&actor.id)),
            Operation::ReadDraft,
        )?;

        let author = match &draft.author_id {
            Some(author_id) => uow.authors().find_by_id(author_id).await?,
            None => None,
        };
        Ok(DraftDto::new(draft, author))
    }
}
