use crate::domain::article::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::draft::entity::{Draft, DraftId};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Draft store bound to a unit of work.
#[async_trait]
pub trait DraftRepository: Send {
    /// Serializes draft creation for one article id until the surrounding
    /// unit of work ends.
    async fn lock_article(&mut self, article_id: &ArticleId) -> DomainResult<()>;

    async fn find_by_id(&mut self, id: &DraftId) -> DomainResult<Option<Draft>>;

    /// Like [`DraftRepository::find_by_id`], but no other unit of work can
    /// change or delete the row until this one ends. Read-modify-write
    /// commands load through here.
    async fn find_by_id_for_update(&mut self, id: &DraftId) -> DomainResult<Option<Draft>>;

    /// The non-published draft holding the article's lock, if any.
    async fn find_active_for_article(
        &mut self,
        article_id: &ArticleId,
    ) -> DomainResult<Option<Draft>>;

    /// Drafts ordered by creation time, newest first. `created_by == None`
    /// lists every draft.
    async fn list(
        &mut self,
        created_by: Option<&UserId>,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Draft>>;

    async fn insert(&mut self, draft: &Draft) -> DomainResult<()>;

    /// Fails with a conflict when the stored draft is already published.
    async fn update(&mut self, draft: &Draft) -> DomainResult<()>;

    async fn delete(&mut self, id: &DraftId) -> DomainResult<()>;

    async fn delete_for_author(&mut self, author_id: &AuthorId) -> DomainResult<u64>;
}
