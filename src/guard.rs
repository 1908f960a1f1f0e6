//! Request-time access gates built over the permission predicate.
//!
//! The guard consumes a caller record already resolved by the upstream
//! identity collaborator and turns a declared requirement into a typed
//! allow/deny decision. It performs no I/O of its own; whatever the
//! resolution step cost, by the time a gate runs everything is pure
//! computation.

use thiserror::Error;

use crate::hierarchy::RoleHierarchy;
use crate::principal::Principal;
use crate::role::Role;

/// Why a caller was turned away.
///
/// Decisions, not internal exceptions: the surrounding pipeline pattern-
/// matches these into its own transport representation (status codes,
/// protocol errors). Check ordering is fixed: missing credential, then
/// inactive account, then insufficient role.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    /// No credential was presented, or none resolved to a caller.
    /// Recoverable by re-authenticating.
    #[error("could not validate credentials")]
    Unauthenticated,

    /// The caller resolved but the account is disabled. Distinct from
    /// `Unauthenticated`; not retryable without administrative action.
    #[error("inactive user account")]
    InactiveAccount,

    /// The caller is active but lacks the required role.
    #[error("access denied: {required} role required")]
    InsufficientRole {
        /// The role the gate requires.
        required: Role,
    },
}

/// Entry point for gating operations on caller identity and role.
///
/// Holds the process-wide hierarchy; cheap to copy and safe to share
/// across request handlers.
///
/// # Examples
///
/// ```rust
/// use rolegate::{AccessDenied, AccessGuard, Principal, Role};
///
/// let guard = AccessGuard::new();
/// let finance = guard.require_role(Role::FinanceViewer);
///
/// let manager = Principal::new("user:42", Role::FinanceManager, true);
/// assert!(finance.check(Some(&manager)).is_ok());
///
/// let student = Principal::new("user:7", Role::Student, true);
/// assert_eq!(
///     finance.check(Some(&student)),
///     Err(AccessDenied::InsufficientRole {
///         required: Role::FinanceViewer
///     }),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AccessGuard {
    hierarchy: &'static RoleHierarchy,
}

impl AccessGuard {
    /// Guard over the process-wide hierarchy.
    pub fn new() -> Self {
        Self {
            hierarchy: RoleHierarchy::shared(),
        }
    }

    /// Gate: any authenticated, active caller.
    ///
    /// On allow the caller is returned unchanged for downstream use.
    pub fn require_active<'a>(
        &self,
        caller: Option<&'a Principal>,
    ) -> Result<&'a Principal, AccessDenied> {
        active_caller(caller)
    }

    /// Gate factory: one [`RoleGuard`] per distinct required role.
    pub fn require_role(&self, required: Role) -> RoleGuard {
        RoleGuard {
            hierarchy: self.hierarchy,
            required,
        }
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate requiring a specific role (or one that inherits it).
#[derive(Debug, Clone, Copy)]
pub struct RoleGuard {
    hierarchy: &'static RoleHierarchy,
    required: Role,
}

impl RoleGuard {
    /// The role this gate requires.
    pub fn required(&self) -> Role {
        self.required
    }

    /// Checks a caller against this gate.
    ///
    /// Layers the permission predicate on top of the active-caller checks.
    /// Legacy records resolve through their effective role here, at the
    /// adapter layer; the predicate itself never sees a superuser flag.
    pub fn check<'a>(&self, caller: Option<&'a Principal>) -> Result<&'a Principal, AccessDenied> {
        let caller = active_caller(caller)?;

        let actual = caller.effective_role();
        if !self.hierarchy.has_permission(actual, self.required) {
            tracing::warn!(
                caller = %caller.id,
                actual = %actual,
                required = %self.required,
                "permission denied"
            );
            return Err(AccessDenied::InsufficientRole {
                required: self.required,
            });
        }

        Ok(caller)
    }
}

fn active_caller(caller: Option<&Principal>) -> Result<&Principal, AccessDenied> {
    let caller = caller.ok_or(AccessDenied::Unauthenticated)?;
    if !caller.is_active {
        return Err(AccessDenied::InactiveAccount);
    }
    Ok(caller)
}
