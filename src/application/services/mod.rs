// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            authors::AuthorCommandService, drafts::DraftCommandService, news::NewsCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            events::EventPublisher, security::IdentityProvider, time::Clock, util::IdGenerator,
        },
        queries::{
            authors::AuthorQueryService, drafts::DraftQueryService, news::NewsQueryService,
        },
    },
    domain::TransactionManager,
};

pub struct ApplicationServices {
    pub draft_commands: Arc<DraftCommandService>,
    pub news_commands: Arc<NewsCommandService>,
    pub author_commands: Arc<AuthorCommandService>,
    pub draft_queries: Arc<DraftQueryService>,
    pub news_queries: Arc<NewsQueryService>,
    pub author_queries: Arc<AuthorQueryService>,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl ApplicationServices {
    pub fn new(
        transactions: Arc<dyn TransactionManager>,
        identity_provider: Arc<dyn IdentityProvider>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        let draft_commands = Arc::new(DraftCommandService::new(
            Arc::clone(&transactions),
            Arc::clone(&ids),
            Arc::clone(&clock),
            Arc::clone(&events),
        ));
        let news_commands = Arc::new(NewsCommandService::new(
            Arc::clone(&transactions),
            Arc::clone(&clock),
            Arc::clone(&events),
        ));
        let author_commands = Arc::new(AuthorCommandService::new(
            Arc::clone(&transactions),
            Arc::clone(&ids),
            Arc::clone(&clock),
            Arc::clone(&events),
        ));

        Self {
            draft_commands,
            news_commands,
            author_commands,
            draft_queries: Arc::new(DraftQueryService::new(Arc::clone(&transactions))),
            news_queries: Arc::new(NewsQueryService::new(Arc::clone(&transactions))),
            author_queries: Arc::new(AuthorQueryService::new(transactions)),
            identity_provider,
        }
    }

    /// Resolves a raw bearer token to the acting user.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.identity_provider.authenticate(token).await
    }
}
