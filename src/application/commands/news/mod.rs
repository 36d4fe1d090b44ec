// src/application/commands/news/mod.rs
mod revoke;
mod service;

pub use revoke::RevokeArticleCommand;
pub use service::NewsCommandService;
