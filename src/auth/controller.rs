use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::local_storage::CoreLocalStorage;
use crate::models::SessionRecord;
use crate::services::{AuthError, AuthService, RoleResolver, auth_service::DEFAULT_ACCOUNT_NAME};
use crate::validation::{PasswordMatches, StrengthMeter, Trigger};

use super::form::{AuthForm, FieldChange, FormKind};
use super::screen::{AuthScreen, ScreenMachine};

/// Shown in the reset confirmation when no email was captured.
pub const RESET_EMAIL_PLACEHOLDER: &str = "you@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

/// Inline banner above a form (`data-form-alert`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAlert {
    pub message: String,
    pub variant: AlertVariant,
}

/// What a submission led to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form was invalid; every field now shows its feedback.
    Rejected,
    /// Signed in; leave the page for `url` once `after` has passed.
    Redirect {
        url: &'static str,
        after: Duration,
        session: SessionRecord,
    },
    /// Stayed on the page and switched to this screen.
    Screen(AuthScreen),
}

/// A validated submission waiting out the simulated latency. Finish it
/// with `complete_submit` or `cancel_submit`.
#[derive(Debug)]
#[must_use = "the form stays in its loading state until the submission is completed or canceled"]
pub struct PendingSubmit {
    kind: FormKind,
    delay: Duration,
}

impl PendingSubmit {
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Clears a form's loading state when dropped.
struct LoadingGuard<'a>(&'a mut AuthForm);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

/// The auth page: screens, three forms, the strength meter and the
/// simulated submission.
pub struct AuthController {
    screens: ScreenMachine,
    login: AuthForm,
    signup: AuthForm,
    forgot: AuthForm,
    auth: AuthService,
    strength: StrengthMeter,
    hints: PasswordMatches,
    login_alert: Option<FormAlert>,
    last_reset_email: String,
    account_name: String,
    submit_delay: Duration,
    redirect_delay: Duration,
}

impl AuthController {
    pub fn new(core_storage: CoreLocalStorage, roles: Arc<dyn RoleResolver>, config: &Config) -> Self {
        Self {
            screens: ScreenMachine::new(),
            login: AuthForm::login(),
            signup: AuthForm::signup(),
            forgot: AuthForm::forgot(),
            auth: AuthService::new(core_storage, roles),
            strength: StrengthMeter::default(),
            hints: PasswordMatches::default(),
            login_alert: None,
            last_reset_email: String::new(),
            account_name: DEFAULT_ACCOUNT_NAME.to_string(),
            submit_delay: config.submit_delay(),
            redirect_delay: config.redirect_delay(),
        }
    }

    pub fn active_screen(&self) -> AuthScreen {
        self.screens.active()
    }

    pub fn screens(&self) -> &ScreenMachine {
        &self.screens
    }

    pub fn form(&self, kind: FormKind) -> &AuthForm {
        match kind {
            FormKind::Login => &self.login,
            FormKind::Signup => &self.signup,
            FormKind::Forgot => &self.forgot,
        }
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut AuthForm {
        match kind {
            FormKind::Login => &mut self.login,
            FormKind::Signup => &mut self.signup,
            FormKind::Forgot => &mut self.forgot,
        }
    }

    pub fn strength(&self) -> StrengthMeter {
        self.strength
    }

    pub fn password_hints(&self) -> PasswordMatches {
        self.hints
    }

    pub fn login_alert(&self) -> Option<&FormAlert> {
        self.login_alert.as_ref()
    }

    pub fn reset_email(&self) -> &str {
        if self.last_reset_email.is_empty() {
            RESET_EMAIL_PLACEHOLDER
        } else {
            &self.last_reset_email
        }
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Tab click or `data-auth-link`.
    pub fn show_screen(&mut self, name: &str) -> AuthScreen {
        let screen = self.screens.navigate(name);
        self.after_screen_change(screen);
        screen
    }

    fn after_screen_change(&mut self, screen: AuthScreen) {
        if screen != AuthScreen::Login {
            self.login_alert = None;
        }
    }

    /// An input, change or blur event on one of the forms.
    pub fn edit(&mut self, kind: FormKind, field: &str, value: &str, trigger: Trigger) -> FieldChange {
        let change = self.form_mut(kind).set_value(field, value, trigger);
        if let Some(report) = &change.password {
            self.strength = StrengthMeter::from_score(report.score);
            self.hints = report.matches;
        }
        change
    }

    /// Submit a form. Valid forms wait out the simulated latency with the
    /// button in its loading state before the success handler runs.
    ///
    /// Dropping the returned future mid-wait leaves the form idle again.
    pub async fn submit(&mut self, kind: FormKind) -> Result<SubmitOutcome, AuthError> {
        let Some(pending) = self.begin_submit(kind) else {
            return Ok(SubmitOutcome::Rejected);
        };

        {
            let _idle_on_drop = LoadingGuard(self.form_mut(kind));
            pending.wait().await;
        }
        self.complete_submit(pending)
    }

    /// First half of [`submit`](Self::submit): validate and, if the form
    /// passes, put its button into the loading state.
    ///
    /// `None` when the form is invalid (its errors are now revealed) or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self, kind: FormKind) -> Option<PendingSubmit> {
        if self.form(kind).is_loading() {
            tracing::debug!(form = kind.form_id(), "Submission already in flight");
            return None;
        }
        if !self.form(kind).is_valid() {
            self.form_mut(kind).reveal_invalid();
            tracing::debug!(form = kind.form_id(), "Submission rejected, form invalid");
            return None;
        }

        self.form_mut(kind).set_loading(true);
        Some(PendingSubmit {
            kind,
            delay: self.submit_delay,
        })
    }

    /// Abandon an in-flight submission without running its handler.
    pub fn cancel_submit(&mut self, pending: PendingSubmit) {
        self.form_mut(pending.kind).set_loading(false);
        tracing::debug!(form = pending.kind.form_id(), "Submission canceled");
    }

    /// Second half of [`submit`](Self::submit): leave the loading state and
    /// run the form's success handler.
    pub fn complete_submit(&mut self, pending: PendingSubmit) -> Result<SubmitOutcome, AuthError> {
        let kind = pending.kind;
        self.form_mut(kind).set_loading(false);

        let outcome = match kind {
            FormKind::Login => self.login_succeeded(),
            FormKind::Signup => self.signup_succeeded(),
            FormKind::Forgot => Ok(self.forgot_succeeded()),
        };

        if let Err(e) = &outcome {
            tracing::warn!(form = kind.form_id(), error = %e, "Submission failed");
            if kind == FormKind::Login {
                self.login_alert = Some(FormAlert {
                    message: e.to_string(),
                    variant: AlertVariant::Error,
                });
            }
        }
        outcome
    }

    fn login_succeeded(&mut self) -> Result<SubmitOutcome, AuthError> {
        let session = self.auth.sign_in(self.login.trimmed("email"))?;
        let role = session.role.unwrap_or_default();

        self.login_alert = Some(FormAlert {
            message: format!("Signed in as {role}. Redirecting..."),
            variant: AlertVariant::Success,
        });
        self.login.reset();

        Ok(SubmitOutcome::Redirect {
            url: AuthService::landing_page(role),
            after: self.redirect_delay,
            session,
        })
    }

    fn signup_succeeded(&mut self) -> Result<SubmitOutcome, AuthError> {
        let full_name = self.signup.trimmed("fullName").to_string();
        let email = self.signup.trimmed("email").to_string();

        self.account_name = full_name
            .split(' ')
            .next()
            .filter(|first| !first.is_empty())
            .unwrap_or(DEFAULT_ACCOUNT_NAME)
            .to_string();

        self.auth.sign_up(&full_name, &email)?;

        self.signup.reset();
        self.hints = PasswordMatches::default();
        self.strength = StrengthMeter::default();

        let screen = self.screens.enter(AuthScreen::SignupSuccess);
        self.after_screen_change(screen);
        Ok(SubmitOutcome::Screen(screen))
    }

    fn forgot_succeeded(&mut self) -> SubmitOutcome {
        self.last_reset_email = self.forgot.trimmed("email").to_string();
        self.forgot.reset();

        tracing::info!("Password reset requested");
        let screen = self.screens.enter(AuthScreen::ResetConfirm);
        self.after_screen_change(screen);
        SubmitOutcome::Screen(screen)
    }
}
