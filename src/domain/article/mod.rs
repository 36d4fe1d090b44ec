pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, PublishedContent};
pub use events::DomainEvent;
pub use repository::ArticleRepository;
pub use value_objects::{
    ArticleHeadline, ArticleId, ArticleText, Image, MAX_HEADLINE_LENGTH, RevokeReason,
};
