pub mod database;
pub mod events;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
