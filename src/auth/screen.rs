use std::fmt;

/// Screens of the auth page (`data-auth-screen`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthScreen {
    #[default]
    Login,
    Signup,
    Forgot,
    ResetConfirm,
    SignupSuccess,
}

impl AuthScreen {
    pub fn name(&self) -> &'static str {
        match self {
            AuthScreen::Login => "login",
            AuthScreen::Signup => "signup",
            AuthScreen::Forgot => "forgot",
            AuthScreen::ResetConfirm => "reset-confirm",
            AuthScreen::SignupSuccess => "signup-success",
        }
    }

    /// Lenient name lookup: `reset` aliases `reset-confirm`, anything
    /// unknown is the login screen.
    pub fn normalize(name: &str) -> Self {
        match name {
            "reset" | "reset-confirm" => AuthScreen::ResetConfirm,
            "signup-success" => AuthScreen::SignupSuccess,
            "forgot" => AuthScreen::Forgot,
            "signup" => AuthScreen::Signup,
            _ => AuthScreen::Login,
        }
    }

    /// Screens with a tab in the tab bar.
    pub fn is_tab_screen(&self) -> bool {
        matches!(self, AuthScreen::Login | AuthScreen::Signup)
    }

    /// Confirmation screens only follow a successful submission.
    pub fn is_navigable(&self) -> bool {
        !matches!(self, AuthScreen::ResetConfirm | AuthScreen::SignupSuccess)
    }
}

impl fmt::Display for AuthScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendered state of one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub active: bool,
    pub aria_selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ScreenMachine {
    active: AuthScreen,
}

impl ScreenMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> AuthScreen {
        self.active
    }

    /// Tab or in-page link. Requests for confirmation screens are ignored.
    pub fn navigate(&mut self, name: &str) -> AuthScreen {
        let target = AuthScreen::normalize(name);
        if !target.is_navigable() {
            tracing::warn!(screen = %target, "Ignoring navigation to confirmation screen");
            return self.active;
        }
        self.enter(target)
    }

    /// Transition taken after a successful submission.
    pub(crate) fn enter(&mut self, target: AuthScreen) -> AuthScreen {
        tracing::debug!(from = %self.active, to = %target, "Switching auth screen");
        self.active = target;
        target
    }

    pub fn tab_state(&self, tab: AuthScreen) -> TabState {
        let selected = tab == self.active && self.active.is_tab_screen();
        TabState {
            active: selected,
            aria_selected: selected,
        }
    }
}
