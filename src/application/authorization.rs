// src/application/authorization.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::policy::{self, Operation, Ownership},
};

/// Capability-only gate, used before the target of the operation is loaded.
pub(crate) fn ensure_permission(
    actor: &AuthenticatedUser,
    operation: Operation,
) -> ApplicationResult<()> {
    if policy::has_permission(&actor.capabilities, operation) {
        return Ok(());
    }
    let rule = policy::rule_for(operation);
    tracing::debug!(user_id = %actor.id, operation = operation.as_str(), "capability missing");
    Err(ApplicationError::forbidden(format!(
        "missing capability {}:{}",
        rule.resource, rule.action
    )))
}

pub(crate) fn ensure_allowed(
    actor: &AuthenticatedUser,
    ownership: Ownership,
    operation: Operation,
) -> ApplicationResult<()> {
    policy::authorize(&actor.capabilities, ownership, operation).map_err(|denied| {
        tracing::debug!(user_id = %actor.id, %denied, "access denied");
        denied.into()
    })
}
