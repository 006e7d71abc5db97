//! Capability checks applied at the top of every mutating operation.
//!
//! Role gating is centralized here instead of being re-derived inline in each
//! service method; handlers re-check server-side regardless of what the UI
//! already gated.

use entity::user::{self, UserRole};

use crate::server::error::auth::AuthError;

/// Requires the caller to hold exactly the given role.
pub fn require_role(caller: &user::Model, role: UserRole) -> Result<(), AuthError> {
    if caller.role == role {
        Ok(())
    } else {
        Err(AuthError::RoleRequired(role))
    }
}

/// Requires the caller to be a mentor or an admin.
pub fn require_reviewer(caller: &user::Model) -> Result<(), AuthError> {
    match caller.role {
        UserRole::Mentor | UserRole::Admin => Ok(()),
        UserRole::Student => Err(AuthError::RoleRequired(UserRole::Mentor)),
    }
}

/// Requires the caller to own the resource identified by `owner_id`.
pub fn require_owner(caller: &user::Model, owner_id: i32) -> Result<(), AuthError> {
    if caller.id == owner_id {
        Ok(())
    } else {
        Err(AuthError::NotOwner)
    }
}
