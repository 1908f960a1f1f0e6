//! End-to-end guard scenarios: resolved callers against declared
//! requirements, the way the request pipeline drives them.

use std::sync::Arc;

use rolegate::{AccessClaims, AccessDenied, AccessGuard, Principal, Role, RoleHierarchy};
use test_case::test_case;
use tokio::task::JoinSet;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn denial_taxonomy_matches_the_pipeline_contract() {
    init_tracing();
    let guard = AccessGuard::new();

    // Active regular user against an admin requirement.
    let user = Principal::new("user:1", Role::User, true);
    assert_eq!(
        guard.require_role(Role::Admin).check(Some(&user)),
        Err(AccessDenied::InsufficientRole {
            required: Role::Admin
        })
    );

    // Disabled admin against the any-active-user gate.
    let inactive_admin = Principal::new("user:2", Role::Admin, false);
    assert_eq!(
        guard.require_active(Some(&inactive_admin)),
        Err(AccessDenied::InactiveAccount)
    );

    // No caller resolved at all.
    assert_eq!(guard.require_active(None), Err(AccessDenied::Unauthenticated));
}

#[test_case(Role::Admin, Role::User => Ok(()) ; "admin passes user gate")]
#[test_case(Role::Admin, Role::FinanceManager => Ok(()) ; "admin passes manager gate")]
#[test_case(Role::Instructor, Role::Student => Ok(()) ; "instructor passes student gate")]
#[test_case(Role::Instructor, Role::User => Ok(()) ; "instructor passes user gate")]
#[test_case(Role::FinanceManager, Role::FinanceViewer => Ok(()) ; "manager passes viewer gate")]
#[test_case(Role::User, Role::Admin => Err(AccessDenied::InsufficientRole { required: Role::Admin }) ; "user denied admin gate")]
#[test_case(Role::Student, Role::Instructor => Err(AccessDenied::InsufficientRole { required: Role::Instructor }) ; "student denied instructor gate")]
#[test_case(Role::FinanceViewer, Role::FinanceManager => Err(AccessDenied::InsufficientRole { required: Role::FinanceManager }) ; "viewer denied manager gate")]
#[test_case(Role::FinanceManager, Role::Instructor => Err(AccessDenied::InsufficientRole { required: Role::Instructor }) ; "manager denied instructor gate")]
#[test_case(Role::Moderator, Role::Analyst => Err(AccessDenied::InsufficientRole { required: Role::Analyst }) ; "moderator denied analyst gate")]
fn role_gate_decisions(actual: Role, required: Role) -> Result<(), AccessDenied> {
    init_tracing();
    let guard = AccessGuard::new();
    let caller = Principal::new("user:grid", actual, true);
    guard.require_role(required).check(Some(&caller)).map(|_| ())
}

#[test]
fn legacy_records_resolve_at_the_adapter_layer() {
    init_tracing();
    let guard = AccessGuard::new();

    // Pre-role superuser row keeps its admin-equivalent access.
    let legacy_admin = Principal::legacy("user:legacy-admin", true, true);
    for required in Role::ALL {
        assert!(guard.require_role(required).check(Some(&legacy_admin)).is_ok());
    }

    // Pre-role regular row lands on the base role.
    let legacy_user = Principal::legacy("user:legacy", false, true);
    assert!(guard.require_role(Role::User).check(Some(&legacy_user)).is_ok());
    assert_eq!(
        guard.require_role(Role::Moderator).check(Some(&legacy_user)),
        Err(AccessDenied::InsufficientRole {
            required: Role::Moderator
        })
    );

    // Disabled legacy superusers are still turned away first.
    let disabled = Principal::legacy("user:disabled", true, false);
    assert_eq!(
        guard.require_role(Role::Admin).check(Some(&disabled)),
        Err(AccessDenied::InactiveAccount)
    );
}

#[test]
fn resolved_claims_flow_through_the_gate() -> anyhow::Result<()> {
    init_tracing();

    // Payload as the token collaborator would hand it over after verify.
    let payload = r#"{
        "sub": "instructor@example.com",
        "user_id": "u-9",
        "role": "instructor",
        "exp": 1767225600
    }"#;
    let claims: AccessClaims = serde_json::from_str(payload)?;
    let caller = Principal::new(claims.sub.clone(), claims.role, true);

    let guard = AccessGuard::new();
    let allowed = guard.require_role(Role::Student).check(Some(&caller))?;
    assert_eq!(allowed.id, "instructor@example.com");
    assert_eq!(allowed.effective_role(), Role::Instructor);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn guard_is_safely_shared_across_tasks() -> anyhow::Result<()> {
    init_tracing();
    let guard = Arc::new(AccessGuard::new());
    let mut tasks = JoinSet::new();

    for (index, actual) in Role::ALL.into_iter().cycle().take(64).enumerate() {
        let guard = Arc::clone(&guard);
        tasks.spawn(async move {
            let caller = Principal::new(format!("user:{index}"), actual, true);
            let expected = RoleHierarchy::shared().has_permission(actual, Role::FinanceViewer);
            let decision = guard.require_role(Role::FinanceViewer).check(Some(&caller));
            decision.is_ok() == expected
        });
    }

    while let Some(result) = tasks.join_next().await {
        assert!(result?);
    }
    Ok(())
}
