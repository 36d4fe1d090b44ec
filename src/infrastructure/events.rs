// src/infrastructure/events.rs
use crate::{application::ports::events::EventPublisher, domain::article::DomainEvent};
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    task::JoinHandle,
};

/// Hands events to a background consumer over an unbounded channel.
#[derive(Clone)]
pub struct ChannelEventPublisher {
    sender: UnboundedSender<DomainEvent>,
}

impl ChannelEventPublisher {
    pub fn channel() -> (Self, UnboundedReceiver<DomainEvent>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl EventPublisher for ChannelEventPublisher {
    fn publish(&self, event: DomainEvent) {
        let name = event.name();
        if self.sender.send(event).is_err() {
            tracing::warn!(event = name, "event consumer is gone, dropping event");
        }
    }
}

/// Drains the channel and logs every event. Ends when all publishers are
/// dropped.
pub fn spawn_event_logger(mut receiver: UnboundedReceiver<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            match serde_json::to_string(&event) {
                Ok(payload) => tracing::info!(event = event.name(), %payload, "domain event"),
                Err(err) => tracing::warn!(event = event.name(), error = %err, "unserializable domain event"),
            }
        }
        tracing::debug!("event logger stopped");
    })
}
