// src/domain/policy.rs
//! Authorization policy table.
//!
//! Every operation has exactly one rule: the capability it requires and
//! whether the actor must own the target. Ownership-scoped rules name the
//! capability that overrides ownership.
use crate::domain::user::Capability;
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateDraft,
    ListDrafts,
    ReadDraft,
    UpdateDraft,
    DeleteDraft,
    DeletePublishedDraft,
    PublishDraft,
    RevokeArticle,
    CreateAuthor,
    UpdateAuthor,
    DeleteAuthor,
    ReadDefaultAuthor,
    SetDefaultAuthor,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::CreateDraft,
        Operation::ListDrafts,
        Operation::ReadDraft,
        Operation::UpdateDraft,
        Operation::DeleteDraft,
        Operation::DeletePublishedDraft,
        Operation::PublishDraft,
        Operation::RevokeArticle,
        Operation::CreateAuthor,
        Operation::UpdateAuthor,
        Operation::DeleteAuthor,
        Operation::ReadDefaultAuthor,
        Operation::SetDefaultAuthor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::CreateDraft => "create draft",
            Operation::ListDrafts => "list drafts",
            Operation::ReadDraft => "read draft",
            Operation::UpdateDraft => "update draft",
            Operation::DeleteDraft => "delete draft",
            Operation::DeletePublishedDraft => "delete published draft",
            Operation::PublishDraft => "publish draft",
            Operation::RevokeArticle => "revoke news article",
            Operation::CreateAuthor => "create author",
            Operation::UpdateAuthor => "update author",
            Operation::DeleteAuthor => "delete author",
            Operation::ReadDefaultAuthor => "read default author",
            Operation::SetDefaultAuthor => "set default author",
        }
    }
}

/// Relationship between the actor and the target of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Owner,
    Other,
    /// The operation has no owned target (creation, listing).
    Unowned,
}

impl Ownership {
    pub fn of(is_owner: bool) -> Self {
        if is_owner {
            Ownership::Owner
        } else {
            Ownership::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Any,
    OwnerOrOverride(&'static str, &'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub resource: &'static str,
    pub action: &'static str,
    pub scope: Scope,
}

const fn rule(resource: &'static str, action: &'static str, scope: Scope) -> Rule {
    Rule {
        resource,
        action,
        scope,
    }
}

const MANAGE_ANY_DRAFT: Scope = Scope::OwnerOrOverride("drafts", "manage-any");

pub fn rule_for(operation: Operation) -> Rule {
    match operation {
        Operation::CreateDraft | Operation::ListDrafts => rule("drafts", "manage", Scope::Any),
        Operation::ReadDraft | Operation::UpdateDraft | Operation::DeleteDraft => {
            rule("drafts", "manage", MANAGE_ANY_DRAFT)
        }
        Operation::DeletePublishedDraft => rule("drafts", "delete-published", MANAGE_ANY_DRAFT),
        Operation::PublishDraft => rule("drafts", "publish", MANAGE_ANY_DRAFT),
        Operation::RevokeArticle => rule("news", "revoke", Scope::Any),
        Operation::CreateAuthor => rule("authors", "create", Scope::Any),
        Operation::UpdateAuthor => rule("authors", "update", Scope::Any),
        Operation::DeleteAuthor => rule("authors", "delete", Scope::Any),
        Operation::ReadDefaultAuthor => rule("authors", "read-default", Scope::Any),
        Operation::SetDefaultAuthor => rule(
            "authors",
            "set-own-default",
            Scope::OwnerOrOverride("authors", "set-any-default"),
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    MissingCapability {
        operation: Operation,
        resource: &'static str,
        action: &'static str,
    },
    NotOwner {
        operation: Operation,
    },
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDenied::MissingCapability {
                operation,
                resource,
                action,
            } => write!(
                f,
                "missing capability {resource}:{action} to {}",
                operation.as_str()
            ),
            AccessDenied::NotOwner { operation } => {
                write!(f, "only the owner may {}", operation.as_str())
            }
        }
    }
}

fn holds(capabilities: &HashSet<Capability>, resource: &str, action: &str) -> bool {
    capabilities.iter().any(|cap| cap.matches(resource, action))
}

/// Capability check only, for gates that run before the target is loaded.
pub fn has_permission(capabilities: &HashSet<Capability>, operation: Operation) -> bool {
    let rule = rule_for(operation);
    holds(capabilities, rule.resource, rule.action)
}

pub fn authorize(
    capabilities: &HashSet<Capability>,
    ownership: Ownership,
    operation: Operation,
) -> Result<(), AccessDenied> {
    let rule = rule_for(operation);
    if !holds(capabilities, rule.resource, rule.action) {
        return Err(AccessDenied::MissingCapability {
            operation,
            resource: rule.resource,
            action: rule.action,
        });
    }
    match (rule.scope, ownership) {
        (Scope::Any, _) | (Scope::OwnerOrOverride(..), Ownership::Owner) => Ok(()),
        (Scope::OwnerOrOverride(resource, action), _) if holds(capabilities, resource, action) => {
            Ok(())
        }
        (Scope::OwnerOrOverride(..), _) => Err(AccessDenied::NotOwner { operation }),
    }
}
