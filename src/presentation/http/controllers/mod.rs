// src/presentation/http/controllers/mod.rs
pub mod authors;
pub mod drafts;
pub mod news;
