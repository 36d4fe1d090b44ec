// src/infrastructure/repositories/memory.rs
//! In-process storage backend.
//!
//! A unit of work holds the store mutex for its whole lifetime and edits a
//! private copy of the state; commit writes the copy back. Units of work are
//! therefore fully serialized, which is what makes the draft lock safe here.
use crate::domain::{
    TransactionManager, UnitOfWork,
    article::{Article, ArticleId, ArticleRepository},
    author::{Author, AuthorId, AuthorRepository},
    draft::{Draft, DraftId, DraftRepository},
    errors::{DomainError, DomainResult},
    user::UserId,
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    drafts: HashMap<DraftId, Draft>,
    articles: HashMap<ArticleId, Article>,
    authors: HashMap<AuthorId, Author>,
    default_authors: HashMap<UserId, AuthorId>,
}

#[derive(Clone, Default)]
pub struct InMemoryTransactionManager {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryTransactionManager {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionManager for InMemoryTransactionManager {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(InMemoryUnitOfWork { guard, working }))
    }
}

struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn drafts(&mut self) -> &mut dyn DraftRepository {
        self
    }

    fn articles(&mut self) -> &mut dyn ArticleRepository {
        self
    }

    fn authors(&mut self) -> &mut dyn AuthorRepository {
        self
    }

    async fn commit(&mut self) -> DomainResult<()> {
        (*self.guard).clone_from(&self.working);
        Ok(())
    }
}

fn page<T>(items: Vec<T>, limit: u32, offset: u32) -> Vec<T> {
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

#[async_trait]
impl DraftRepository for InMemoryUnitOfWork {
    async fn lock_article(&mut self, _article_id: &ArticleId) -> DomainResult<()> {
        Ok(())
    }

    async fn find_by_id(&mut self, id: &DraftId) -> DomainResult<Option<Draft>> {
        Ok(self.working.drafts.get(id).cloned())
    }

    // The store mutex already serializes whole units of work.
    async fn find_by_id_for_update(&mut self, id: &DraftId) -> DomainResult<Option<Draft>> {
        DraftRepository::find_by_id(self, id).await
    }

    async fn find_active_for_article(
        &mut self,
        article_id: &ArticleId,
    ) -> DomainResult<Option<Draft>> {
        Ok(self
            .working
            .drafts
            .values()
            .find(|draft| {
                !draft.is_published && draft.news_article_id.as_ref() == Some(article_id)
            })
            .cloned())
    }

    async fn list(
        &mut self,
        created_by: Option<&UserId>,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Draft>> {
        let mut drafts: Vec<Draft> = self
            .working
            .drafts
            .values()
            .filter(|draft| created_by.is_none_or(|user| &draft.created_by == user))
            .cloned()
            .collect();
        drafts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(page(drafts, limit, offset))
    }

    async fn insert(&mut self, draft: &Draft) -> DomainResult<()> {
        if self.working.drafts.contains_key(&draft.id) {
            return Err(DomainError::Conflict(format!("draft {} already exists", draft.id)));
        }
        let takes_lock = !draft.is_published && draft.news_article_id.is_some();
        let lock_taken = self.working.drafts.values().any(|other| {
            !other.is_published && other.news_article_id == draft.news_article_id
        });
        if takes_lock && lock_taken {
            return Err(DomainError::Conflict(
                "another draft already exists for this news article".into(),
            ));
        }
        self.working.drafts.insert(draft.id.clone(), draft.clone());
        Ok(())
    }

    async fn update(&mut self, draft: &Draft) -> DomainResult<()> {
        let stored = self
            .working
            .drafts
            .get_mut(&draft.id)
            .ok_or_else(|| DomainError::NotFound("draft not found".into()))?;
        if stored.is_published {
            return Err(DomainError::Conflict(format!(
                "draft {} is already published",
                draft.id
            )));
        }
        *stored = draft.clone();
        Ok(())
    }

    async fn delete(&mut self, id: &DraftId) -> DomainResult<()> {
        self.working
            .drafts
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("draft not found".into()))
    }

    async fn delete_for_author(&mut self, author_id: &AuthorId) -> DomainResult<u64> {
        let before = self.working.drafts.len();
        self.working
            .drafts
            .retain(|_, draft| draft.author_id.as_ref() != Some(author_id));
        Ok((before - self.working.drafts.len()) as u64)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryUnitOfWork {
    async fn find_by_id(&mut self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.working.articles.get(id).cloned())
    }

    async fn list_visible(&mut self, limit: u32, offset: u32) -> DomainResult<Vec<Article>> {
        let mut articles: Vec<Article> = self
            .working
            .articles
            .values()
            .filter(|article| !article.is_revoked())
            .cloned()
            .collect();
        articles.sort_by(|a, b| {
            b.date_published
                .cmp(&a.date_published)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(page(articles, limit, offset))
    }

    async fn insert(&mut self, article: &Article) -> DomainResult<()> {
        if self.working.articles.contains_key(&article.id) {
            return Err(DomainError::Conflict(format!(
                "news article {} already exists",
                article.id
            )));
        }
        self.working
            .articles
            .insert(article.id.clone(), article.clone());
        Ok(())
    }

    async fn update(&mut self, article: &Article) -> DomainResult<()> {
        let stored = self
            .working
            .articles
            .get_mut(&article.id)
            .ok_or_else(|| DomainError::NotFound("news article not found".into()))?;
        *stored = article.clone();
        Ok(())
    }

    async fn count_visible_for_author(&mut self, author_id: &AuthorId) -> DomainResult<u64> {
        Ok(self
            .working
            .articles
            .values()
            .filter(|article| &article.author_id == author_id && !article.is_revoked())
            .count() as u64)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryUnitOfWork {
    async fn find_by_id(&mut self, id: &AuthorId) -> DomainResult<Option<Author>> {
        Ok(self.working.authors.get(id).cloned())
    }

    async fn find_by_id_for_share(&mut self, id: &AuthorId) -> DomainResult<Option<Author>> {
        AuthorRepository::find_by_id(self, id).await
    }

    async fn find_by_id_for_update(&mut self, id: &AuthorId) -> DomainResult<Option<Author>> {
        AuthorRepository::find_by_id(self, id).await
    }

    async fn list(&mut self, limit: u32, offset: u32) -> DomainResult<Vec<Author>> {
        let mut authors: Vec<Author> = self.working.authors.values().cloned().collect();
        authors.sort_by(|a, b| {
            a.name
                .as_str()
                .cmp(b.name.as_str())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(page(authors, limit, offset))
    }

    async fn insert(&mut self, author: &Author) -> DomainResult<()> {
        if self.working.authors.contains_key(&author.id) {
            return Err(DomainError::Conflict(format!("author {} already exists", author.id)));
        }
        self.working.authors.insert(author.id.clone(), author.clone());
        Ok(())
    }

    async fn update(&mut self, author: &Author) -> DomainResult<()> {
        let stored = self
            .working
            .authors
            .get_mut(&author.id)
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;
        *stored = author.clone();
        Ok(())
    }

    async fn delete(&mut self, id: &AuthorId) -> DomainResult<()> {
        self.working
            .authors
            .remove(id)
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;
        self.working
            .default_authors
            .retain(|_, author_id| author_id != id);
        Ok(())
    }

    async fn default_author_for(&mut self, user_id: &UserId) -> DomainResult<Option<AuthorId>> {
        Ok(self.working.default_authors.get(user_id).cloned())
    }

    async fn set_default_author(
        &mut self,
        user_id: &UserId,
        author_id: Option<&AuthorId>,
    ) -> DomainResult<()> {
        match author_id {
            Some(author_id) => {
                self.working
                    .default_authors
                    .insert(user_id.clone(), author_id.clone());
            }
            None => {
                self.working.default_authors.remove(user_id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::AuthorName;
    use chrono::Utc;

    fn author(id: &str, name: &str) -> Author {
        Author {
            id: AuthorId::new(id).unwrap(),
            name: AuthorName::new(name).unwrap(),
        }
    }

    fn active_draft(id: &str, article: &str) -> Draft {
        let mut draft = Draft::from_scratch(
            DraftId::new(id).unwrap(),
            UserId::new("U1").unwrap(),
            None,
            Utc::now(),
        );
        draft.news_article_id = Some(ArticleId::new(article).unwrap());
        draft
    }

    #[tokio::test]
    async fn dropped_unit_of_work_discards_writes() {
        let manager = InMemoryTransactionManager::new();
        {
            let mut uow = manager.begin().await.unwrap();
            uow.authors().insert(&author("AU1", "Jane")).await.unwrap();
        }
        let mut uow = manager.begin().await.unwrap();
        let id = AuthorId::new("AU1").unwrap();
        assert!(uow.authors().find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn committed_writes_are_visible_to_later_units() {
        let manager = InMemoryTransactionManager::new();
        let mut uow = manager.begin().await.unwrap();
        uow.authors().insert(&author("AU1", "Jane")).await.unwrap();
        uow.commit().await.unwrap();
        drop(uow);

        let mut uow = manager.begin().await.unwrap();
        let id = AuthorId::new("AU1").unwrap();
        assert!(uow.authors().find_by_id(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn second_active_draft_for_article_is_rejected() {
        let manager = InMemoryTransactionManager::new();
        let mut uow = manager.begin().await.unwrap();
        uow.drafts().insert(&active_draft("D1", "A1")).await.unwrap();
        let err = uow
            .drafts()
            .insert(&active_draft("D2", "A1"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn stale_write_can_not_reopen_a_published_draft() {
        let manager = InMemoryTransactionManager::new();
        let mut uow = manager.begin().await.unwrap();
        let stale = active_draft("D1", "A1");
        uow.drafts().insert(&stale).await.unwrap();
        let mut published = stale.clone();
        published.mark_published(Utc::now()).unwrap();
        uow.drafts().update(&published).await.unwrap();

        let err = uow.drafts().update(&stale).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        let stored = uow.drafts().find_by_id(&stale.id).await.unwrap().unwrap();
        assert!(stored.is_published);
    }

    #[tokio::test]
    async fn deleting_author_clears_default_mappings() {
        let manager = InMemoryTransactionManager::new();
        let mut uow = manager.begin().await.unwrap();
        let user = UserId::new("U1").unwrap();
        let jane = author("AU1", "Jane");
        uow.authors().insert(&jane).await.unwrap();
        uow.authors()
            .set_default_author(&user, Some(&jane.id))
            .await
            .unwrap();
        uow.authors().delete(&jane.id).await.unwrap();
        assert!(uow.authors().default_author_for(&user).await.unwrap().is_none());
    }
}
