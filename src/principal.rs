//! The authenticated caller record consumed by the access guard.
//!
//! Lifecycle (creation, role reassignment, deactivation) belongs to the
//! external user-management collaborator; this core only reads the role
//! and the active flag.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// How a caller's role is recorded.
///
/// Modern records carry an explicit role. Legacy records predate the role
/// column and carry only the deprecated superuser flag. Either shape
/// resolves to a concrete [`Role`] through [`RoleAssignment::effective_role`]
/// before any permission check runs, which keeps the checker itself free of
/// compatibility branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleAssignment {
    /// Explicit role assignment.
    Assigned {
        /// The assigned role.
        role: Role,
    },
    /// Pre-role record: only the deprecated superuser flag is known.
    Legacy {
        /// The legacy superuser flag.
        is_superuser: bool,
    },
}

impl RoleAssignment {
    /// Resolves the assignment to a concrete role.
    ///
    /// Legacy superusers act as the top role; every other legacy record
    /// acts as the base role, the same default new records are created
    /// with.
    pub fn effective_role(self) -> Role {
        match self {
            RoleAssignment::Assigned { role } => role,
            RoleAssignment::Legacy { is_superuser: true } => Role::Admin,
            RoleAssignment::Legacy {
                is_superuser: false,
            } => Role::User,
        }
    }
}

/// An authenticated caller: identity, role assignment, account state.
///
/// Resolved upstream by the token-verification collaborator on every gated
/// request; the serde shape matches what the user store persists, so both
/// modern (`"role": "admin"`) and legacy (`"is_superuser": true`) records
/// round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identity token.
    pub id: String,

    /// Role assignment, modern or legacy.
    #[serde(flatten)]
    pub assignment: RoleAssignment,

    /// Whether the account is active.
    pub is_active: bool,
}

impl Principal {
    /// Caller with an explicit role.
    pub fn new(id: impl Into<String>, role: Role, is_active: bool) -> Self {
        Self {
            id: id.into(),
            assignment: RoleAssignment::Assigned { role },
            is_active,
        }
    }

    /// Caller from a record that predates role assignments.
    pub fn legacy(id: impl Into<String>, is_superuser: bool, is_active: bool) -> Self {
        Self {
            id: id.into(),
            assignment: RoleAssignment::Legacy { is_superuser },
            is_active,
        }
    }

    /// The role this caller is treated as holding.
    pub fn effective_role(&self) -> Role {
        self.assignment.effective_role()
    }
}
