use std::env;
use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::{Context, bail};

use course_portal::admin::DashboardStats;
use course_portal::auth::{AuthController, FormKind, SubmitOutcome};
use course_portal::config::Config;
use course_portal::local_storage::{CoreLocalStorage, FileBackend};
use course_portal::navigation::support_for;
use course_portal::services::{AccessDecision, AccessService, EmailHeuristicRoles};
use course_portal::store::MockDataStore;
use course_portal::telemetry;
use course_portal::validation::Trigger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to read configuration")?;
    telemetry::init_tracing(&config);

    let backend = FileBackend::new(&config.storage_dir)
        .with_context(|| format!("Failed to open storage at {}", config.storage_dir.display()))?;
    let core_storage = CoreLocalStorage::new(Arc::new(backend));

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match parse_command(&args)? {
        Command::Status => status(core_storage),
        Command::Reset => {
            MockDataStore::open(core_storage).reset()?;
            tracing::info!("Mock data reset");
            Ok(())
        }
        Command::Login { email } => {
            let password = read_password().context("Failed to read password from stdin")?;
            login(core_storage, &config, email, &password).await
        }
        Command::Logout => {
            let next = AccessService::new(core_storage).logout();
            println!("Signed out, continue at {next}");
            Ok(())
        }
        Command::Support { page } => {
            let support = support_for(page).with_context(|| format!("No study support for {page}"))?;
            println!("{}", support.render());
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Status,
    Reset,
    /// The password is read from stdin, never from the arguments.
    Login { email: &'a str },
    Logout,
    Support { page: &'a str },
}

fn parse_command<'a>(args: &[&'a str]) -> anyhow::Result<Command<'a>> {
    Ok(match args {
        [] | ["status"] => Command::Status,
        ["reset"] => Command::Reset,
        ["login", email] => Command::Login { email: *email },
        ["logout"] => Command::Logout,
        ["support", page] => Command::Support { page: *page },
        other => bail!("Unknown command: {}", other.join(" ")),
    })
}

fn status(core_storage: CoreLocalStorage) -> anyhow::Result<()> {
    match AccessService::new(core_storage.clone()).require_admin("admin") {
        AccessDecision::Granted(session) => println!("Admin session: {} ({})", session.email, session.role_label()),
        AccessDecision::Redirect(url) => println!("No admin session, the dashboard would redirect to {url}"),
    }

    let store = MockDataStore::open(core_storage);
    for (key, value) in DashboardStats::from_dataset(store.data()).entries() {
        println!("{key:>20}: {value}");
    }
    Ok(())
}

/// One line from stdin, so the password never shows up in the process list.
fn read_password() -> io::Result<String> {
    eprint!("Password: ");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn login(core_storage: CoreLocalStorage, config: &Config, email: &str, password: &str) -> anyhow::Result<()> {
    let mut auth = AuthController::new(core_storage, Arc::new(EmailHeuristicRoles), config);
    auth.edit(FormKind::Login, "email", email, Trigger::Change);
    auth.edit(FormKind::Login, "password", password, Trigger::Change);

    match auth.submit(FormKind::Login).await? {
        SubmitOutcome::Redirect { url, session, .. } => {
            println!("Signed in as {}, continue at {url}", session.role_label());
            Ok(())
        }
        _ => {
            for field in auth.form(FormKind::Login).fields() {
                if field.display.aria_invalid() {
                    eprintln!("{}: {}", field.name, field.display.message());
                }
            }
            bail!("Sign-in rejected")
        }
    }
}
