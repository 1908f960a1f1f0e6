//! Role hierarchy and the permission predicate.
//!
//! The inheritance graph is authored as direct parent edges only; every
//! transitively reachable role is computed by closure at lookup time. The
//! graph is fixed at definition time, carries no mutation API, and after
//! construction is shared read-only across request handlers.

use indexmap::{IndexMap, IndexSet};
use std::sync::OnceLock;

use crate::error::{HierarchyError, Result};
use crate::role::Role;

/// Authored inheritance table: each role's directly declared parents.
///
/// Direct edges only. `Instructor` reaches `User` through `Student`, and
/// `Admin` reaches the whole catalog through the four branch-maximal roles
/// it lists; the closure supplies the rest.
const DIRECT_PARENTS: &[(Role, &[Role])] = &[
    (Role::User, &[]),
    (Role::Student, &[Role::User]),
    (Role::Instructor, &[Role::Student]),
    (Role::FinanceViewer, &[Role::User]),
    (Role::FinanceManager, &[Role::FinanceViewer]),
    (Role::Moderator, &[Role::User]),
    (Role::Analyst, &[Role::User]),
    (
        Role::Admin,
        &[
            Role::Instructor,
            Role::FinanceManager,
            Role::Moderator,
            Role::Analyst,
        ],
    ),
];

/// The static role inheritance graph and its permission predicate.
///
/// # Thread Safety
///
/// Immutable after construction; a single instance is safely shared
/// read-only across arbitrarily many concurrent request-handling tasks.
/// All lookups are pure computation with no I/O and no blocking.
///
/// # Examples
///
/// ```rust
/// use rolegate::{Role, RoleHierarchy};
///
/// let hierarchy = RoleHierarchy::new();
/// assert!(hierarchy.has_permission(Role::FinanceManager, Role::FinanceViewer));
/// assert!(!hierarchy.has_permission(Role::FinanceViewer, Role::FinanceManager));
/// ```
#[derive(Debug, Clone)]
pub struct RoleHierarchy {
    direct: IndexMap<Role, IndexSet<Role>>,
}

impl RoleHierarchy {
    /// Builds the hierarchy from the authored table.
    pub fn new() -> Self {
        Self::from_table(DIRECT_PARENTS)
    }

    fn from_table(table: &[(Role, &[Role])]) -> Self {
        let mut direct = IndexMap::new();
        for (role, parents) in table {
            direct.insert(*role, parents.iter().copied().collect());
        }
        Self { direct }
    }

    /// Process-wide hierarchy, validated on first access.
    ///
    /// A malformed table is a deployment defect, not a per-request error
    /// condition, so this fails loudly instead of letting requests observe
    /// it.
    pub fn shared() -> &'static RoleHierarchy {
        static SHARED: OnceLock<RoleHierarchy> = OnceLock::new();
        SHARED.get_or_init(|| {
            let hierarchy = RoleHierarchy::new();
            if let Err(err) = hierarchy.validate() {
                tracing::error!(%err, "role hierarchy failed startup validation");
                panic!("role hierarchy failed startup validation: {err}");
            }
            hierarchy
        })
    }

    /// Directly declared parents of `role`.
    ///
    /// A role absent from the table is treated as having no parents rather
    /// than as an error, so catalog growth cannot invalidate lookups.
    pub fn inherited_roles(&self, role: Role) -> IndexSet<Role> {
        self.direct.get(&role).cloned().unwrap_or_default()
    }

    /// All roles `role` holds permissions for: itself plus the transitive
    /// closure of its parents.
    ///
    /// Computed by repeated expansion to a fixpoint. The iteration cap
    /// bounds the walk at the catalog size; an acyclic graph converges
    /// inside it because each pass either grows the set or finishes.
    pub fn all_permissions(&self, role: Role) -> IndexSet<Role> {
        let mut permissions = IndexSet::new();
        permissions.insert(role);

        for _ in 0..Role::ALL.len() {
            let mut grew = false;
            for member in permissions.clone() {
                for parent in self.inherited_roles(member) {
                    grew |= permissions.insert(parent);
                }
            }
            if !grew {
                break;
            }
        }

        permissions
    }

    /// Whether `actual` grants everything `required` grants.
    ///
    /// Reflexive for every role (including those with no parents),
    /// transitive along inheritance edges, and deliberately non-symmetric.
    /// Pure and total: no I/O, no error path for catalog roles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rolegate::{Role, RoleHierarchy};
    ///
    /// let hierarchy = RoleHierarchy::new();
    /// assert!(hierarchy.has_permission(Role::Admin, Role::User));
    /// assert!(!hierarchy.has_permission(Role::User, Role::Admin));
    /// ```
    pub fn has_permission(&self, actual: Role, required: Role) -> bool {
        if actual == required {
            return true;
        }
        self.all_permissions(actual).contains(&required)
    }

    /// Startup self-check: the table must cover the whole catalog and its
    /// edges must be acyclic.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::MissingRole`] if a catalog role has no entry.
    /// - [`HierarchyError::CircularInheritance`] if a role reaches itself,
    ///   carrying the offending path.
    pub fn validate(&self) -> Result<()> {
        for role in Role::ALL {
            if !self.direct.contains_key(&role) {
                return Err(HierarchyError::MissingRole { role });
            }
        }

        let mut state: IndexMap<Role, VisitState> = IndexMap::new();
        for role in self.direct.keys().copied().collect::<Vec<_>>() {
            if state.get(&role) != Some(&VisitState::Visited) {
                self.walk(role, &mut state, &mut Vec::new())?;
            }
        }

        Ok(())
    }

    fn walk(
        &self,
        role: Role,
        state: &mut IndexMap<Role, VisitState>,
        path: &mut Vec<Role>,
    ) -> Result<()> {
        match state.get(&role) {
            Some(VisitState::Visiting) => {
                path.push(role);
                return Err(HierarchyError::CircularInheritance { cycle: path.clone() });
            }
            Some(VisitState::Visited) => return Ok(()),
            None => {}
        }

        state.insert(role, VisitState::Visiting);
        path.push(role);

        for parent in self.inherited_roles(role) {
            self.walk(parent, state, path)?;
        }

        path.pop();
        state.insert(role, VisitState::Visited);
        Ok(())
    }
}

impl Default for RoleHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Visiting,
    Visited,
}

/// Role is the top role.
pub fn is_admin(role: Role) -> bool {
    role == Role::Admin
}

/// Role holds instructor permissions, directly or by inheritance.
pub fn is_instructor_or_higher(role: Role) -> bool {
    RoleHierarchy::shared().has_permission(role, Role::Instructor)
}

/// Role holds finance manager permissions, directly or by inheritance.
pub fn is_finance_manager_or_higher(role: Role) -> bool {
    RoleHierarchy::shared().has_permission(role, Role::FinanceManager)
}

/// Role can view financial data.
pub fn can_view_finances(role: Role) -> bool {
    RoleHierarchy::shared().has_permission(role, Role::FinanceViewer)
}

/// Role can moderate content.
pub fn can_moderate(role: Role) -> bool {
    RoleHierarchy::shared().has_permission(role, Role::Moderator)
}

/// Role can view analytics.
pub fn can_view_analytics(role: Role) -> bool {
    RoleHierarchy::shared().has_permission(role, Role::Analyst)
}
