// src/application/commands/authors/mod.rs
mod create;
mod default_author;
mod delete;
mod service;
mod update;

pub use create::CreateAuthorCommand;
pub use default_author::SetDefaultAuthorCommand;
pub use delete::DeleteAuthorCommand;
pub use service::AuthorCommandService;
pub use update::UpdateAuthorCommand;
