pub mod auth;
pub mod authors;
pub mod drafts;
pub mod news;
pub mod nullable;
pub mod pagination;
pub mod serde_time;

pub use auth::AuthenticatedUser;
pub use authors::{AuthorDto, AuthorRefDto, CreatedAuthorDto, DefaultAuthorDto};
pub use drafts::{CreatedDraftDto, DraftDto, DraftListItemDto, ImageDto, PublishedDraftDto};
pub use news::{NewsArticleDto, NewsListItemDto};
pub use pagination::PageRequest;
