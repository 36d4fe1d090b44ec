pub mod entity;
pub mod lock;
pub mod repository;
pub mod validation;

pub use entity::{Draft, DraftContent, DraftId, DraftState};
pub use lock::{DraftConflict, DraftLockCoordinator, LockOutcome};
pub use repository::DraftRepository;
pub use validation::{PublishProblem, PublishValidator};
