//! End-to-end scenarios across the auth page, the stored session and the
//! admin dashboard, sharing one storage backend the way the pages share
//! the browser's.

use std::sync::Arc;
use std::time::Duration;

use crate::admin::surface::RecordingSurface;
use crate::admin::{ActionTarget, AdminController, AdminInit, TableKind};
use crate::auth::{AuthController, AuthScreen, FormKind, SubmitOutcome};
use crate::config::Config;
use crate::local_storage::{CoreLocalStorage, FileBackend, SessionLocalStorage, StorageKeys};
use crate::models::Role;
use crate::services::EmailHeuristicRoles;
use crate::store::{MockDataStore, default_dataset};
use crate::validation::{Trigger, validate_strong_password};

fn auth_page(core: &CoreLocalStorage, config: &Config) -> AuthController {
    AuthController::new(core.clone(), Arc::new(EmailHeuristicRoles), config)
}

fn open_admin(core: &CoreLocalStorage, surface: RecordingSurface) -> AdminInit<RecordingSurface> {
    AdminController::init(core.clone(), surface, &Config::default()).unwrap()
}

async fn sign_in(core: &CoreLocalStorage, email: &str) -> SubmitOutcome {
    let mut auth = auth_page(core, &Config::default());
    auth.edit(FormKind::Login, "email", email, Trigger::Change);
    auth.edit(FormKind::Login, "password", "letmein", Trigger::Change);
    auth.submit(FormKind::Login).await.unwrap()
}

#[test]
fn dashboard_without_session_redirects_to_sign_in() {
    let core = CoreLocalStorage::in_memory();

    let AdminInit::Redirected { surface, url } = open_admin(&core, RecordingSurface::default()) else {
        panic!("dashboard opened without a session");
    };
    assert_eq!(url, "auth.html?redirect=admin");
    assert_eq!(surface.redirects.len(), 1);
    assert!(!core.contains(StorageKeys::MOCK_DATA));
}

#[tokio::test(start_paused = true)]
async fn admin_sign_in_opens_the_dashboard() {
    let core = CoreLocalStorage::in_memory();

    let outcome = sign_in(&core, "admin@arabic.one").await;
    assert!(matches!(outcome, SubmitOutcome::Redirect { url: "admin.html", .. }));

    let AdminInit::Ready(admin) = open_admin(&core, RecordingSurface::default()) else {
        panic!("admin was redirected");
    };
    assert_eq!(admin.current_user().display(), "admin (admin)");
    assert_eq!(admin.surface().stat("totalUsers"), "7");
}

#[tokio::test(start_paused = true)]
async fn learner_sign_in_cannot_open_the_dashboard() {
    let core = CoreLocalStorage::in_memory();

    let outcome = sign_in(&core, "premium.learner@example.com").await;
    let SubmitOutcome::Redirect { url, session, .. } = outcome else {
        panic!("expected redirect");
    };
    assert_eq!(url, "index.html");
    assert_eq!(session.role, Some(Role::Premium));

    assert!(matches!(
        open_admin(&core, RecordingSurface::default()),
        AdminInit::Redirected { .. }
    ));
}

#[tokio::test(start_paused = true)]
async fn signup_stores_a_learner_session() {
    let core = CoreLocalStorage::in_memory();
    let mut auth = auth_page(&core, &Config::default());

    auth.show_screen("signup");
    auth.edit(FormKind::Signup, "fullName", "Layla Noor", Trigger::Change);
    auth.edit(FormKind::Signup, "email", "layla.noor@example.com", Trigger::Change);
    auth.edit(FormKind::Signup, "password", "Abc12345!", Trigger::Input);
    auth.edit(FormKind::Signup, "confirmPassword", "Abc12345!", Trigger::Input);
    assert!(!auth.form(FormKind::Signup).submit_button().disabled);

    let outcome = auth.submit(FormKind::Signup).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Screen(AuthScreen::SignupSuccess));
    assert_eq!(auth.account_name(), "Layla");

    let session = SessionLocalStorage::new(core).get_session().unwrap();
    assert!(session.logged_in);
    assert_eq!(session.role, Some(Role::User));
    assert_eq!(session.name, "Layla Noor");
}

#[tokio::test(start_paused = true)]
async fn submit_waits_out_the_simulated_latency() {
    let core = CoreLocalStorage::in_memory();
    let mut auth = auth_page(&core, &Config::default());
    auth.edit(FormKind::Forgot, "email", "learner@example.com", Trigger::Change);

    let start = tokio::time::Instant::now();
    auth.submit(FormKind::Forgot).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(900));
    assert!(!auth.form(FormKind::Forgot).submit_button().loading);
}

#[test]
fn password_strength_examples() {
    let strong = validate_strong_password("Password1!");
    assert_eq!(strong.score, 4);

    let weak = validate_strong_password("password");
    assert_eq!(weak.score, 1);

    let empty = validate_strong_password("");
    assert_eq!(empty.score, 0);
    assert!(!empty.result.is_valid);
}

#[test]
fn deleted_user_stays_deleted_until_reset() {
    let dir = tempfile::tempdir().unwrap();
    let core = CoreLocalStorage::new(Arc::new(FileBackend::new(dir.path()).unwrap()));
    SessionLocalStorage::new(core.clone())
        .save_session(&crate::models::SessionRecord::signed_in(
            Role::Admin,
            "admin@arabic.one",
            "Site Admin",
        ))
        .unwrap();

    let AdminInit::Ready(mut admin) = open_admin(&core, RecordingSurface::confirming()) else {
        panic!("admin was redirected");
    };
    admin.dispatch("deleteUser", &ActionTarget::user(5)).unwrap();
    drop(admin);

    // A fresh page load reads the same files
    let reloaded = MockDataStore::load(core.clone());
    assert!(reloaded.user(5).is_none());
    assert_eq!(reloaded.users.len(), 6);

    let AdminInit::Ready(mut admin) = open_admin(&core, RecordingSurface::confirming()) else {
        panic!("admin was redirected");
    };
    assert_eq!(admin.surface().stat("totalUsers"), "6");
    admin.dispatch("clearMockData", &ActionTarget::none()).unwrap();
    assert_eq!(MockDataStore::load(core).users, default_dataset().users);
}

#[test]
fn user_search_and_subscription_filter_from_the_dashboard() {
    let core = CoreLocalStorage::in_memory();
    SessionLocalStorage::new(core.clone())
        .save_session(&crate::models::SessionRecord::signed_in(
            Role::Admin,
            "admin@arabic.one",
            "Site Admin",
        ))
        .unwrap();

    let AdminInit::Ready(mut admin) = open_admin(&core, RecordingSurface::default()) else {
        panic!("admin was redirected");
    };

    admin.navigate("users").unwrap();
    admin.on_search("users", "premium");
    let body = admin.surface().table(TableKind::Users).to_string();
    assert_eq!(body.matches("<tr>").count(), 3);

    admin.navigate("subscriptions").unwrap();
    admin.on_filter("subscriptionStatus", "active");
    assert_eq!(admin.surface().stat("activeSubs"), "4");
    assert_eq!(admin.surface().stat("monthlyRevenue"), "$156");
}
