use crate::{
    application::ports::util::IdGenerator,
    domain::{article::ArticleId, author::AuthorId, draft::DraftId, errors::DomainResult},
};
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    fn next() -> String {
        Uuid::new_v4().to_string()
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_draft_id(&self) -> DomainResult<DraftId> {
        DraftId::new(Self::next())
    }

    fn next_article_id(&self) -> DomainResult<ArticleId> {
        ArticleId::new(Self::next())
    }

    fn next_author_id(&self) -> DomainResult<AuthorId> {
        AuthorId::new(Self::next())
    }
}
