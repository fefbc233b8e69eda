//! One-shot path check.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use reviewgate_auth::{GuardDecision, GuardedRoutes, LOGIN_PATH, Resolution, RouteTable, SessionStore};
use reviewgate_entity::user::User;

use crate::output::{self, OutputFormat};

/// Arguments for `check`
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to check, e.g. `/admin/users`
    #[arg(short, long)]
    pub path: String,

    /// JSON file with the signed-in user record; omit for no session
    #[arg(short, long)]
    pub user: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    path: String,
    user: Option<String>,
    resolution: Resolution,
}

/// Execute `check`
pub fn execute(args: &CheckArgs, table: RouteTable, format: OutputFormat) -> anyhow::Result<()> {
    let user = match &args.user {
        Some(path) => Some(super::read_json::<User>(path)?),
        None => None,
    };
    let report = build_report(table, &args.path, user);

    if format == OutputFormat::Json {
        return format.item(&report);
    }

    output::kv("Path", &report.path);
    output::kv("User", report.user.as_deref().unwrap_or("(signed out)"));
    match report.resolution {
        Resolution::Public => output::kv("Result", "public"),
        Resolution::Guarded {
            requirement,
            decision,
        } => {
            output::kv("Requires", requirement.as_str());
            output::kv("Decision", decision.as_str());
            if decision == GuardDecision::RedirectToLogin {
                output::kv("Redirect", LOGIN_PATH);
            }
        }
    }
    Ok(())
}

fn build_report(table: RouteTable, path: &str, user: Option<User>) -> CheckReport {
    let mut store = SessionStore::new();
    let label = user.as_ref().map(|u| format!("{} ({})", u.label(), u.id));
    if let Some(user) = user {
        store.sign_in(user);
    }

    CheckReport {
        path: path.to_string(),
        user: label,
        resolution: GuardedRoutes::new(table, &store).resolve(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewgate_auth::RoleRequirement;
    use reviewgate_core::config::AppConfig;

    fn table() -> RouteTable {
        let config = AppConfig::from_toml(include_str!("../../config/default.toml")).unwrap();
        super::super::load_routes(&config).unwrap()
    }

    fn demo_admin() -> User {
        serde_json::from_str(include_str!("../../demos/user-admin.json")).unwrap()
    }

    #[test]
    fn test_signed_out_is_sent_to_login() {
        let report = build_report(table(), "/admin/users", None);
        assert!(report.user.is_none());
        assert_eq!(
            report.resolution,
            Resolution::Guarded {
                requirement: RoleRequirement::RequireAdmin,
                decision: GuardDecision::RedirectToLogin,
            }
        );
    }

    #[test]
    fn test_demo_admin_report() {
        let report = build_report(table(), "/admin", Some(demo_admin()));
        assert_eq!(report.user.as_deref(), Some("Ada Reviewer (u1)"));
        assert_eq!(
            report.resolution,
            Resolution::Guarded {
                requirement: RoleRequirement::RequireAdmin,
                decision: GuardDecision::Allow,
            }
        );

        let moderate = build_report(table(), "/moderate", Some(demo_admin()));
        assert_eq!(
            moderate.resolution,
            Resolution::Guarded {
                requirement: RoleRequirement::RequireModerator,
                decision: GuardDecision::ShowNotFound,
            }
        );
    }

    #[test]
    fn test_public_path_and_json_shape() {
        let report = build_report(table(), "/preprints/42", None);
        assert_eq!(report.resolution, Resolution::Public);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["path"], "/preprints/42");
        assert_eq!(json["resolution"]["kind"], "public");
        assert!(json["user"].is_null());
    }
}
