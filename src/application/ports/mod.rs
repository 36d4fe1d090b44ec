// src/application/ports/mod.rs
pub mod events;
pub mod security;
pub mod time;
pub mod util;
