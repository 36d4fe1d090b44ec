// src/application/commands/drafts/mod.rs
mod create;
mod delete;
mod publish;
mod service;
mod update;

pub use create::CreateDraftCommand;
pub use delete::DeleteDraftCommand;
pub use publish::PublishDraftCommand;
pub use service::DraftCommandService;
pub use update::{UpdateDraftCommand, UpdateDraftCommandBuilder};
