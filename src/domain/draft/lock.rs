// src/domain/draft/lock.rs
//! One-active-draft-per-article locking.
//!
//! There is no lock table: an existing non-published draft for the article id
//! *is* the lock. The check runs inside the caller's unit of work after
//! `DraftRepository::lock_article`, so the check and the following insert
//! form one transactional step.
use crate::domain::article::ArticleId;
use crate::domain::draft::entity::{Draft, DraftId};
use crate::domain::draft::repository::DraftRepository;
use crate::domain::errors::DomainResult;
use crate::domain::user::{Role, UserId};

/// Who holds the lock. The draft id is only disclosed to admins so they can
/// delete a stuck draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftConflict {
    pub created_by: UserId,
    pub draft_id: Option<DraftId>,
}

impl DraftConflict {
    pub fn disclosed_to(holder: &Draft, role: Role) -> Self {
        Self {
            created_by: holder.created_by.clone(),
            draft_id: (role == Role::Admin).then(|| holder.id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    Granted,
    Conflict(DraftConflict),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DraftLockCoordinator;

impl DraftLockCoordinator {
    pub fn new() -> Self {
        Self
    }

    /// Decides whether a new draft may be created for `article_id`.
    ///
    /// From-scratch drafts are never locked. Any active draft for the article
    /// is reported as a conflict, including one the requesting actor created.
    pub async fn acquire(
        &self,
        drafts: &mut dyn DraftRepository,
        role: Role,
        article_id: Option<&ArticleId>,
    ) -> DomainResult<LockOutcome> {
        let Some(article_id) = article_id else {
            return Ok(LockOutcome::Granted);
        };

        drafts.lock_article(article_id).await?;
        match drafts.find_active_for_article(article_id).await? {
            Some(holder) => Ok(LockOutcome::Conflict(DraftConflict::disclosed_to(
                &holder, role,
            ))),
            None => Ok(LockOutcome::Granted),
        }
    }
}
