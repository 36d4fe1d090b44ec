// src/application/commands/drafts/create.rs
use super::DraftCommandService;
use crate::{
    application::{
        authorization::ensure_permission,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        draft::{Draft, DraftId, LockOutcome},
        policy::Operation,
    },
};

pub struct CreateDraftCommand {
    /// `None` starts a brand new article.
    pub news_article_id: Option<String>,
}

impl DraftCommandService {
    pub async fn create_draft(
        &self,
        actor: &AuthenticatedUser,
        command: CreateDraftCommand,
    ) -> ApplicationResult<DraftId> {
        ensure_permission(actor, Operation::CreateDraft)?;
        let article_id = command.news_article_id.map(ArticleId::new).transpose()?;

        let mut uow = self.transactions.begin().await?;
        let outcome = self
            .lock
            .acquire(uow.drafts(), actor.role, article_id.as_ref())
            .await?;
        if let LockOutcome::Conflict(conflict) = outcome {
            tracing::info!(
                user_id = %actor.id,
                news_article_id = ?article_id.as_ref().map(ArticleId::as_str),
                holder = %conflict.created_by,
                "draft lock held by another draft"
            );
            return Err(ApplicationError::DraftConflict(conflict));
        }

        let id = self.ids.next_draft_id()?;
        let now = self.clock.now();
        let draft = match &article_id {
            Some(article_id) => {
                let article = uow.articles().find_by_id(article_id).await?.ok_or_else(|| {
                    ApplicationError::not_found(format!("news article {article_id} not found"))
                })?;
                Draft::from_article(id, &article, actor.id.clone(), now)
            }
            None => {
                let default_author = uow.authors().default_author_for(&actor.id).await?;
                Draft::from_scratch(id, actor.id.clone(), default_author, now)
            }
        };

        uow.drafts().insert(&draft).await?;
        uow.commit().await?;

        tracing::info!(
            draft_id = %draft.id,
            user_id = %actor.id,
            news_article_id = ?draft.news_article_id.as_ref().map(ArticleId::as_str),
            "draft created"
        );
        Ok(draft.id)
    }
}
