//! # rolegate
//!
//! Role-based access control core with:
//! - A closed role catalog with stable string tokens
//! - A static inheritance hierarchy, authored as direct edges and expanded
//!   by transitive closure
//! - A pure, total permission predicate
//! - Request-time access guards producing typed allow/deny decisions
//!
//! ## Example
//!
//! ```rust
//! use rolegate::{AccessDenied, AccessGuard, Principal, Role};
//!
//! let guard = AccessGuard::new();
//! let finance = guard.require_role(Role::FinanceViewer);
//!
//! let manager = Principal::new("user:42", Role::FinanceManager, true);
//! assert!(finance.check(Some(&manager)).is_ok());
//!
//! let student = Principal::new("user:7", Role::Student, true);
//! assert_eq!(
//!     finance.check(Some(&student)),
//!     Err(AccessDenied::InsufficientRole {
//!         required: Role::FinanceViewer
//!     }),
//! );
//! ```

pub mod claims;
pub mod error;
pub mod guard;
pub mod hierarchy;
pub mod principal;
pub mod role;

pub use claims::AccessClaims;
pub use error::{HierarchyError, Result};
pub use guard::{AccessDenied, AccessGuard, RoleGuard};
pub use hierarchy::{
    can_moderate, can_view_analytics, can_view_finances, is_admin, is_finance_manager_or_higher,
    is_instructor_or_higher, RoleHierarchy,
};
pub use principal::{Principal, RoleAssignment};
pub use role::{Role, RoleParseError};
