// src/application/commands/drafts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{events::EventPublisher, time::Clock, util::IdGenerator},
    },
    domain::{
        TransactionManager, UnitOfWork,
        draft::{Draft, DraftId, DraftLockCoordinator, PublishValidator},
    },
};

pub struct DraftCommandService {
    pub(super) transactions: Arc<dyn TransactionManager>,
    pub(super) lock: DraftLockCoordinator,
    pub(super) validator: PublishValidator,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) events: Arc<dyn EventPublisher>,
}

impl DraftCommandService {
    pub fn new(
        transactions: Arc<dyn TransactionManager>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            transactions,
            lock: DraftLockCoordinator::new(),
            validator: PublishValidator::new(),
            ids,
            clock,
            events,
        }
    }
}

/// Loads the draft and holds its row until the unit of work ends, so the
/// caller's write cannot interleave with another command on the same draft.
pub(super) async fn load_draft_for_update(
    uow: &mut dyn UnitOfWork,
    id: &DraftId,
) -> ApplicationResult<Draft> {
    uow.drafts()
        .find_by_id_for_update(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found(format!("draft {id} not found")))
}
