use crate::domain::author::entity::{Author, AuthorId};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Author store bound to a unit of work. Also owns the per-user default
/// author mapping.
#[async_trait]
pub trait AuthorRepository: Send {
    async fn find_by_id(&mut self, id: &AuthorId) -> DomainResult<Option<Author>>;

    /// Shared row lock: the author cannot be deleted while held.
    async fn find_by_id_for_share(&mut self, id: &AuthorId) -> DomainResult<Option<Author>>;

    /// Exclusive row lock: waits for every shared holder to finish.
    async fn find_by_id_for_update(&mut self, id: &AuthorId) -> DomainResult<Option<Author>>;

    /// Authors ordered by name.
    async fn list(&mut self, limit: u32, offset: u32) -> DomainResult<Vec<Author>>;

    async fn insert(&mut self, author: &Author) -> DomainResult<()>;

    async fn update(&mut self, author: &Author) -> DomainResult<()>;

    async fn delete(&mut self, id: &AuthorId) -> DomainResult<()>;

    async fn default_author_for(&mut self, user_id: &UserId) -> DomainResult<Option<AuthorId>>;

    /// `None` clears the mapping.
    async fn set_default_author(
        &mut self,
        user_id: &UserId,
        author_id: Option<&AuthorId>,
    ) -> DomainResult<()>;
}
