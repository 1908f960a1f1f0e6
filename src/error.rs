//! Graph-definition errors.
//!
//! These come out of the hierarchy's startup self-check only. A request
//! must never observe one; hitting one at request time means the deployed
//! table is defective.

use thiserror::Error;

use crate::role::Role;

/// Result type alias for hierarchy validation.
pub type Result<T> = std::result::Result<T, HierarchyError>;

/// A defect in the authored hierarchy table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// A catalog role has no entry in the table.
    #[error("role '{role}' is missing from the hierarchy table")]
    MissingRole {
        /// The uncovered role.
        role: Role,
    },

    /// A role inherits from itself through a non-trivial path.
    #[error("circular inheritance detected: {}", fmt_cycle(.cycle))]
    CircularInheritance {
        /// The offending path, ending at the revisited role.
        cycle: Vec<Role>,
    },
}

fn fmt_cycle(cycle: &[Role]) -> String {
    cycle
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
