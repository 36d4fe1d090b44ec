// tests/support/mocks.rs
use chrono::{DateTime, Utc};
use newsroom_core::application::ports::{
    events::EventPublisher, time::Clock, util::IdGenerator,
};
use newsroom_core::domain::{
    article::{ArticleId, DomainEvent},
    author::AuthorId,
    draft::DraftId,
    errors::DomainResult,
};
use once_cell::sync::Lazy;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp used by every test clock.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Hands out `D1, D2, ...`, `A1, A2, ...` and `AU1, AU2, ...`.
#[derive(Default)]
pub struct SequentialIds {
    drafts: AtomicU64,
    articles: AtomicU64,
    authors: AtomicU64,
}

fn next(counter: &AtomicU64, prefix: &str) -> String {
    format!("{prefix}{}", counter.fetch_add(1, Ordering::SeqCst) + 1)
}

impl IdGenerator for SequentialIds {
    fn next_draft_id(&self) -> DomainResult<DraftId> {
        DraftId::new(next(&self.drafts, "D"))
    }

    fn next_article_id(&self) -> DomainResult<ArticleId> {
        ArticleId::new(next(&self.articles, "A"))
    }

    fn next_author_id(&self) -> DomainResult<AuthorId> {
        AuthorId::new(next(&self.authors, "AU"))
    }
}

/// Records published events in order.
#[derive(Clone, Default)]
pub struct CapturingEvents {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl CapturingEvents {
    pub fn names(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(DomainEvent::name)
            .collect()
    }

    pub fn all(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventPublisher for CapturingEvents {
    fn publish(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}
