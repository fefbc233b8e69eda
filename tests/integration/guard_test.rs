//! Integration tests for guard decisions and session reactivity.

mod helpers;

use reviewgate_auth::{
    GuardDecision, GuardOutcome, GuardState, LOGIN_PATH, Redirect, RoleRequirement, RouteGuard,
    SessionStore, classify,
};
use reviewgate_entity::session::Session;
use reviewgate_entity::user::User;

use helpers::{user_with_groups, user_with_moderator};

fn sample_users() -> Vec<User> {
    vec![
        User::new("plain"),
        user_with_groups("admin", &["admin"]),
        user_with_groups("editor", &["editors", "reviewers"]),
        user_with_groups("shouty", &["ADMIN"]),
        user_with_moderator("moderator", true),
        user_with_groups("both", &["admin"]).with_moderator(true),
        User {
            groups: None,
            moderator: None,
            ..User::new("broken")
        },
    ]
}

#[test]
fn test_absent_session_never_shows_not_found() {
    for requirement in RoleRequirement::ALL {
        assert_eq!(
            classify(&Session::Absent, requirement),
            GuardDecision::RedirectToLogin
        );
    }
}

#[test]
fn test_authenticated_with_no_requirement_always_allowed() {
    for user in sample_users() {
        assert_eq!(
            classify(&Session::authenticated(user), RoleRequirement::None),
            GuardDecision::Allow
        );
    }
}

#[test]
fn test_admin_requirement_matches_group_exactly() {
    for user in sample_users() {
        let expected = if user.groups().iter().any(|g| g == "admin") {
            GuardDecision::Allow
        } else {
            GuardDecision::ShowNotFound
        };
        assert_eq!(
            classify(&Session::authenticated(user.clone()), RoleRequirement::RequireAdmin),
            expected,
            "user {}",
            user.id
        );
    }
}

#[test]
fn test_moderator_requirement_follows_flag() {
    for user in sample_users() {
        let expected = if user.moderator == Some(true) {
            GuardDecision::Allow
        } else {
            GuardDecision::ShowNotFound
        };
        assert_eq!(
            classify(
                &Session::authenticated(user.clone()),
                RoleRequirement::RequireModerator
            ),
            expected,
            "user {}",
            user.id
        );
    }
}

#[test]
fn test_scenario_user_without_groups_requires_admin() {
    let session = Session::authenticated(user_with_groups("u1", &[]));
    assert_eq!(
        classify(&session, RoleRequirement::RequireAdmin),
        GuardDecision::ShowNotFound
    );
}

#[test]
fn test_scenario_user_with_admin_group() {
    let session = Session::authenticated(user_with_groups("u1", &["admin"]));
    assert_eq!(
        classify(&session, RoleRequirement::RequireAdmin),
        GuardDecision::Allow
    );
}

#[test]
fn test_scenario_absent_requires_moderator() {
    let store = SessionStore::new();
    let mut guard = RouteGuard::new(&store, RoleRequirement::RequireModerator);
    assert_eq!(guard.evaluate(), GuardDecision::RedirectToLogin);
    assert_eq!(
        guard.render(|| "queue"),
        GuardOutcome::Redirect(Redirect { to: LOGIN_PATH })
    );
}

#[test]
fn test_scenario_moderator_flag_allowed() {
    let mut store = SessionStore::new();
    store.sign_in(user_with_moderator("u1", true));
    let mut guard = RouteGuard::new(&store, RoleRequirement::RequireModerator);
    assert_eq!(guard.render(|| "queue"), GuardOutcome::Protected("queue"));
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let mut store = SessionStore::new();
    store.sign_in(user_with_groups("u1", &["reviewers"]));

    for requirement in RoleRequirement::ALL {
        let mut guard = RouteGuard::new(&store, requirement);
        let first = guard.evaluate();
        let first_state = guard.state();
        assert_eq!(guard.evaluate(), first);
        assert_eq!(guard.state(), first_state);
    }
}

#[test]
fn test_admin_grant_reaches_mounted_guard() {
    let mut store = SessionStore::new();
    store.sign_in(user_with_groups("u1", &[]));
    let mut guard = RouteGuard::new(&store, RoleRequirement::RequireAdmin);
    assert_eq!(guard.render(|| "admin panel"), GuardOutcome::NotFound);

    store.update_user(|user| user.grant_group("admin"));

    assert_eq!(guard.render(|| "admin panel"), GuardOutcome::Protected("admin panel"));
    assert_eq!(guard.state(), GuardState::Allowed);
}

#[test]
fn test_full_session_lifecycle() {
    let mut store = SessionStore::new();
    let mut guard = RouteGuard::new(&store, RoleRequirement::RequireModerator);
    assert_eq!(guard.state(), GuardState::Redirecting);

    store.sign_in(user_with_moderator("u1", false));
    assert_eq!(guard.refresh().unwrap(), Some(GuardState::NotFound));

    store.update_user(|user| user.moderator = Some(true));
    assert_eq!(guard.refresh().unwrap(), Some(GuardState::Allowed));

    store.sign_out();
    assert_eq!(guard.refresh().unwrap(), Some(GuardState::Redirecting));
    assert_eq!(guard.refresh().unwrap(), None);
}

#[tokio::test]
async fn test_guard_wakes_on_expiry() {
    let mut store = SessionStore::new();
    store.sign_in(user_with_groups("u1", &["admin"]));
    let mut guard = RouteGuard::new(&store, RoleRequirement::RequireAdmin);
    assert_eq!(guard.state(), GuardState::Allowed);

    let watcher = tokio::spawn(async move { guard.changed().await });
    tokio::task::yield_now().await;
    store.expire();

    let state = watcher.await.unwrap().unwrap();
    assert_eq!(state, GuardState::Redirecting);
}

#[tokio::test]
async fn test_changed_fails_once_store_is_gone() {
    let store = SessionStore::new();
    let mut guard = RouteGuard::new(&store, RoleRequirement::None);
    drop(store);

    let err = guard.changed().await.unwrap_err();
    assert_eq!(err.kind, reviewgate_core::error::ErrorKind::Session);
}
