use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Article store bound to a unit of work.
#[async_trait]
pub trait ArticleRepository: Send {
    async fn find_by_id(&mut self, id: &ArticleId) -> DomainResult<Option<Article>>;

    /// Non-revoked articles, newest publication first.
    async fn list_visible(&mut self, limit: u32, offset: u32) -> DomainResult<Vec<Article>>;

    async fn insert(&mut self, article: &Article) -> DomainResult<()>;

    async fn update(&mut self, article: &Article) -> DomainResult<()>;

    /// Number of non-revoked articles attributed to the author.
    async fn count_visible_for_author(&mut self, author_id: &AuthorId) -> DomainResult<u64>;
}
