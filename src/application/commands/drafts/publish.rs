// src/application/commands/drafts/publish.rs
use super::{DraftCommandService, service::load_draft_for_update};
use crate::{
    application::{
        authorization::{ensure_allowed, ensure_permission},
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, DomainEvent},
        draft::DraftId,
        policy::{Operation, Ownership},
    },
};

pub struct PublishDraftCommand {
    pub draft_id: String,
}

impl DraftCommandService {
    /// Promotes the draft into a news article and returns the article id.
    ///
    /// The article write and the draft transition share one unit of work;
    /// nothing is written when validation reports problems.
    pub async fn publish_draft(
        &self,
        actor: &AuthenticatedUser,
        command: PublishDraftCommand,
    ) -> ApplicationResult<ArticleId> {
        ensure_permission(actor, Operation::PublishDraft)?;
        let id = DraftId::new(command.draft_id)?;

        let mut uow = self.transactions.begin().await?;
        let mut draft = load_draft_for_update(uow.as_mut(), &id).await?;
        ensure_allowed(
            actor,
            Ownership::of(draft.is_owned_by(&actor.id)),
            Operation::PublishDraft,
        )?;

        let author = match &draft.author_id {
            // Held until commit so the author cannot be deleted underneath.
            Some(author_id) => uow.authors().find_by_id_for_share(author_id).await?,
            None => None,
        };
        if let Err(problems) = self.validator.validate(&draft, author.as_ref()) {
            tracing::info!(
                draft_id = %id,
                problems = problems.len(),
                "draft rejected for publication"
            );
            return Err(ApplicationError::PublishConflict(problems));
        }

        let content = draft.published_content()?;
        let now = self.clock.now();
        let (article_id, event) = match draft.news_article_id.clone() {
            None => {
                let article_id = self.ids.next_article_id()?;
                let article = content.into_article(article_id.clone());
                uow.articles().insert(&article).await?;
                let event = DomainEvent::ArticleCreated {
                    article_id: article_id.clone(),
                    draft_id: id.clone(),
                    occurred_at: now,
                };
                (article_id, event)
            }
            Some(article_id) => {
                let mut article = uow.articles().find_by_id(&article_id).await?.ok_or_else(|| {
                    ApplicationError::not_found(format!("news article {article_id} not found"))
                })?;
                article.apply_content(content);
                uow.articles().update(&article).await?;
                let event = DomainEvent::ArticleUpdated {
                    article_id: article_id.clone(),
                    draft_id: id.clone(),
                    occurred_at: now,
                };
                (article_id, event)
            }
        };

        draft.mark_published(now)?;
        uow.drafts().update(&draft).await?;
        uow.commit().await?;

        tracing::info!(
            draft_id = %id,
            news_article_id = %article_id,
            user_id = %actor.id,
            "draft published"
        );
        self.events.publish(event);
        Ok(article_id)
    }
}
