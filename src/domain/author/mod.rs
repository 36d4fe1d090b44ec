pub mod entity;
pub mod repository;

pub use entity::{Author, AuthorId, AuthorName};
pub use repository::AuthorRepository;
