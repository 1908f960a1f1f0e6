//! Role catalog: the closed set of roles known to the access control core.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for a persisted or transmitted role token outside the catalog.
///
/// Only the boundary that parses external data can hit this; inside the
/// core every `Role` is valid by construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role token: '{token}'")]
pub struct RoleParseError {
    /// The token that failed to parse.
    pub token: String,
}

/// A named membership category granting a set of permissions.
///
/// The catalog is closed: roles are defined here once and never created or
/// destroyed at runtime. Each role carries a stable lowercase token
/// (`"finance_viewer"`) used in persisted principal records and in
/// bearer-credential claims, and roles order by that token.
///
/// # Examples
///
/// ```rust
/// use rolegate::Role;
///
/// assert_eq!(Role::FinanceViewer.as_str(), "finance_viewer");
/// assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
/// assert!("owner".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular authenticated user.
    User,
    /// System administrator.
    Admin,
    /// Can create and manage courses.
    Instructor,
    /// Can enroll in courses.
    Student,
    /// Can view financial data.
    FinanceViewer,
    /// Can manage financial data.
    FinanceManager,
    /// Can moderate content.
    Moderator,
    /// Can view analytics and reports.
    Analyst,
}

impl Role {
    /// Every role in the catalog, in declaration order.
    pub const ALL: [Role; 8] = [
        Role::User,
        Role::Admin,
        Role::Instructor,
        Role::Student,
        Role::FinanceViewer,
        Role::FinanceManager,
        Role::Moderator,
        Role::Analyst,
    ];

    /// Stable lowercase token, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Instructor => "instructor",
            Role::Student => "student",
            Role::FinanceViewer => "finance_viewer",
            Role::FinanceManager => "finance_manager",
            Role::Moderator => "moderator",
            Role::Analyst => "analyst",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "instructor" => Ok(Role::Instructor),
            "student" => Ok(Role::Student),
            "finance_viewer" => Ok(Role::FinanceViewer),
            "finance_manager" => Ok(Role::FinanceManager),
            "moderator" => Ok(Role::Moderator),
            "analyst" => Ok(Role::Analyst),
            other => Err(RoleParseError {
                token: other.to_string(),
            }),
        }
    }
}

// Roles order by token name, not by declaration position.
impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
