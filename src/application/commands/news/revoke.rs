// src/application/commands/news/revoke.rs
use super::NewsCommandService;
use crate::{
    application::{
        authorization::ensure_permission,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, DomainEvent, RevokeReason},
        policy::Operation,
    },
};

pub struct RevokeArticleCommand {
    pub news_article_id: String,
    pub reason: String,
}

impl NewsCommandService {
    /// Hides the article from listings. Revoking again overwrites the reason.
    pub async fn revoke_article(
        &self,
        actor: &AuthenticatedUser,
        command: RevokeArticleCommand,
    ) -> ApplicationResult<()> {
        ensure_permission(actor, Operation::RevokeArticle)?;
        let id = ArticleId::new(command.news_article_id)?;
        let reason = RevokeReason::new(command.reason)?;

        let mut uow = self.transactions.begin().await?;
        let mut article = uow
            .articles()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("news article {id} not found")))?;
        article.revoke(reason.clone());
        uow.articles().update(&article).await?;
        uow.commit().await?;

        tracing::info!(news_article_id = %id, user_id = %actor.id, reason = %reason, "news article revoked");
        self.events.publish(DomainEvent::ArticleRevoked {
            article_id: id,
            reason: reason.into_inner(),
            occurred_at: self.clock.now(),
        });
        Ok(())
    }
}
