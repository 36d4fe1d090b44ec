pub mod authors;
pub mod drafts;
pub mod news;
