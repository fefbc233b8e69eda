//! Integration tests for configuration-driven route guarding.

mod helpers;

use reviewgate_auth::{GuardDecision, GuardState, Resolution, RoleRequirement, RouteTable};
use reviewgate_core::config::AppConfig;
use reviewgate_core::error::ErrorKind;

use helpers::{TestApp, user_with_groups, user_with_moderator};

#[test]
fn test_config_builds_table() {
    let app = TestApp::new();
    let table = app.routes.table();
    assert_eq!(table.entries().len(), 4);
    assert_eq!(table.requirement_for("/settings/profile"), Some(RoleRequirement::None));
    assert_eq!(table.requirement_for("/login"), None);
    assert_eq!(app.config.logging.level, "debug");
}

#[test]
fn test_public_paths_stay_public() {
    let app = TestApp::new();
    for path in ["/", "/login", "/preprints/123", "/search?q=x"] {
        assert_eq!(app.routes.resolve(path), Resolution::Public, "path {path}");
    }
}

#[test]
fn test_rewritten_paths_keep_their_guard() {
    let mut app = TestApp::new();
    app.store.sign_in(user_with_moderator("u1", true));

    for path in ["//admin/users", "/./admin", "/moderate/../admin"] {
        assert_eq!(
            app.routes.resolve(path),
            Resolution::Guarded {
                requirement: RoleRequirement::RequireAdmin,
                decision: GuardDecision::ShowNotFound,
            },
            "path {path}"
        );
    }
}

#[test]
fn test_signed_out_visitor_is_redirected_everywhere() {
    let app = TestApp::new();
    for path in ["/dashboard", "/admin/users", "/moderate/queue"] {
        match app.routes.resolve(path) {
            Resolution::Guarded { decision, .. } => {
                assert_eq!(decision, GuardDecision::RedirectToLogin, "path {path}")
            }
            Resolution::Public => panic!("{path} should be guarded"),
        }
    }
}

#[test]
fn test_decisions_follow_session() {
    let mut app = TestApp::new();
    app.store.sign_in(user_with_groups("u1", &["admin"]));

    let decision = |app: &TestApp, path: &str| match app.routes.resolve(path) {
        Resolution::Guarded { decision, .. } => Some(decision),
        Resolution::Public => None,
    };

    assert_eq!(decision(&app, "/admin"), Some(GuardDecision::Allow));
    assert_eq!(decision(&app, "/moderate"), Some(GuardDecision::ShowNotFound));

    app.store.sign_in(user_with_moderator("u2", true));
    assert_eq!(decision(&app, "/admin"), Some(GuardDecision::ShowNotFound));
    assert_eq!(decision(&app, "/moderate"), Some(GuardDecision::Allow));
}

#[test]
fn test_mounted_guard_tracks_store() {
    let mut app = TestApp::new();
    let mut guard = app.routes.mount("/admin/reports").unwrap();
    assert_eq!(guard.requirement(), RoleRequirement::RequireAdmin);
    assert_eq!(guard.state(), GuardState::Redirecting);

    app.store.sign_in(user_with_groups("u1", &[]));
    assert_eq!(guard.refresh().unwrap(), Some(GuardState::NotFound));

    app.store.update_user(|user| user.grant_group("admin"));
    assert_eq!(guard.refresh().unwrap(), Some(GuardState::Allowed));

    app.store.update_user(|user| user.revoke_group("admin"));
    assert_eq!(guard.refresh().unwrap(), Some(GuardState::NotFound));
}

#[test]
fn test_unknown_requirement_tag_fails_at_load() {
    let config = AppConfig::from_toml(
        r#"
        [[guard.routes]]
        path = "/admin"
        requires = "superadmin"
        "#,
    )
    .unwrap();

    let err = RouteTable::from_config(&config.guard).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[test]
fn test_duplicate_route_fails_at_load() {
    let err = AppConfig::from_toml(
        r#"
        [[guard.routes]]
        path = "/admin"
        requires = "admin"

        [[guard.routes]]
        path = "/admin/"
        requires = "moderator"
        "#,
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}
