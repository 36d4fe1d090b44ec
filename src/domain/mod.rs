pub mod article;
pub mod author;
pub mod draft;
pub mod errors;
pub mod ids;
pub mod policy;
pub mod unit_of_work;
pub mod user;

pub use unit_of_work::{TransactionManager, UnitOfWork};
