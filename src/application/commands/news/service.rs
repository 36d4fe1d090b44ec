// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{events::EventPublisher, time::Clock},
    domain::TransactionManager,
};

pub struct NewsCommandService {
    pub(super) transactions: Arc<dyn TransactionManager>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) events: Arc<dyn EventPublisher>,
}

impl NewsCommandService {
    pub fn new(
        transactions: Arc<dyn TransactionManager>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            transactions,
            clock,
            events,
        }
    }
}
