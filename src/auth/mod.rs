//! The sign-in / sign-up page.

pub mod controller;
pub mod form;
pub mod screen;

pub use controller::{AlertVariant, AuthController, FormAlert, PendingSubmit, SubmitOutcome};
pub use form::{AuthForm, FormKind, PasswordVisibility, SubmitButton};
pub use screen::{AuthScreen, ScreenMachine, TabState};
