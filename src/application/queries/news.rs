// src/application/queries/news.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::{NewsArticleDto, NewsListItemDto, PageRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        TransactionManager,
        article::ArticleId,
        author::{Author, AuthorId},
    },
};

pub const DEFAULT_NEWS_LIMIT: u32 = 10;

/// Public read side of published articles.
pub struct NewsQueryService {
    transactions: Arc<dyn TransactionManager>,
}

impl NewsQueryService {
    pub fn new(transactions: Arc<dyn TransactionManager>) -> Self {
        Self { transactions }
    }

    /// Non-revoked articles, newest publication first.
    pub async fn list_news(&self, page: PageRequest) -> ApplicationResult<Vec<NewsListItemDto>> {
        let (limit, offset) = page.resolve(DEFAULT_NEWS_LIMIT);
        let mut uow = self.transactions.begin().await?;
        let articles = uow.articles().list_visible(limit, offset).await?;

        let mut authors: HashMap<AuthorId, Option<Author>> = HashMap::new();
        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            let author = match authors.get(&article.author_id) {
                Some(cached) => cached.clone(),
                None => {
                    let found = uow.authors().find_by_id(&article.author_id).await?;
                    authors.insert(article.author_id.clone(), found.clone());
                    found
                }
            };
            items.push(NewsListItemDto::new(article, author));
        }
        Ok(items)
    }

    /// Revoked articles stay reachable by id.
    pub async fn get_news_article(&self, id: String) -> ApplicationResult<NewsArticleDto> {
        let id = ArticleId::new(id)?;
        let mut uow = self.transactions.begin().await?;
        let article = uow
            .articles()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("news article {id} not found")))?;
        let author = uow.authors().find_by_id(&article.author_id).await?;
        Ok(NewsArticleDto::new(article, author))
    }
}
