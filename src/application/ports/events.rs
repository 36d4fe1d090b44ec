// src/application/ports/events.rs
use crate::domain::article::DomainEvent;

/// Outbound sink for domain events. Called only after the owning unit of
/// work committed; delivery past this point is best effort.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: DomainEvent);
}
