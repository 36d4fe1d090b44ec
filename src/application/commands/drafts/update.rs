// src/application/commands/drafts/update.rs
use super::{DraftCommandService, service::load_draft_for_update};
use crate::{
    application::{
        authorization::ensure_allowed,
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::{
        article::Image,
        author::AuthorId,
        draft::{DraftContent, DraftId},
        policy::{Operation, Ownership},
    },
};
use chrono::{DateTime, Utc};

/// Full replacement of a draft's editable fields.
pub struct UpdateDraftCommand {
    pub draft_id: String,
    pub headline: String,
    pub date_published: Option<DateTime<Utc>>,
    pub author_id: String,
    pub image: Option<Image>,
    pub text: String,
}

impl UpdateDraftCommand {
    pub fn builder(draft_id: impl Into<String>) -> UpdateDraftCommandBuilder {
        UpdateDraftCommandBuilder {
            draft_id: draft_id.into(),
            ..Default::default()
        }
    }
}

#[derive(Default)]
pub struct UpdateDraftCommandBuilder {
    draft_id: String,
    headline: Option<String>,
    date_published: Option<DateTime<Utc>>,
    author_id: Option<String>,
    image: Option<Image>,
    text: Option<String>,
}

impl UpdateDraftCommandBuilder {
    pub fn headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn date_published(mut self, date_published: DateTime<Utc>) -> Self {
        self.date_published = Some(date_published);
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    pub fn image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn build(self) -> Result<UpdateDraftCommand, &'static str> {
        Ok(UpdateDraftCommand {
            draft_id: self.draft_id,
            headline: self.headline.ok_or("headline is required")?,
            date_published: self.date_published,
            author_id: self.author_id.ok_or("author id is required")?,
            image: self.image,
            text: self.text.ok_or("text is required")?,
        })
    }
}

impl DraftCommandService {
    pub async fn update_draft(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateDraftCommand,
    ) -> ApplicationResult<()> {
        let id = DraftId::new(command.draft_id)?;
        let content = DraftContent {
            headline: command.headline,
            date_published: command.date_published,
            author_id: AuthorId::new(command.author_id)?,
            image: command.image,
            text: command.text,
        };

        let mut uow = self.transactions.begin().await?;
        let mut draft = load_draft_for_update(uow.as_mut(), &id).await?;
        ensure_allowed(
            actor,
            Ownership::of(draft.is_owned_by(&actor.id)),
            Operation::UpdateDraft,
        )?;

        draft.replace_content(content, self.clock.now())?;
        uow.drafts().update(&draft).await?;
        uow.commit().await?;

        tracing::debug!(draft_id = %draft.id, user_id = %actor.id, "draft updated");
        Ok(())
    }
}
