use crate::validation::{
    FieldDisplay, PasswordReport, Rule, Trigger, ValidationResult, validate_strong_password,
};

/// Label shown on a submit button while its form is in flight, unless the
/// form sets its own.
pub const DEFAULT_LOADING_TEXT: &str = "Working...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
    Forgot,
}

impl FormKind {
    pub fn form_id(&self) -> &'static str {
        match self {
            FormKind::Login => "loginForm",
            FormKind::Signup => "signupForm",
            FormKind::Forgot => "forgotForm",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub rule: Rule,
    /// Name of the password field a confirm field mirrors
    pub confirm_target: Option<&'static str>,
    pub value: String,
    pub display: FieldDisplay,
}

impl Field {
    fn new(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule,
            confirm_target: None,
            value: String::new(),
            display: FieldDisplay::Cleared,
        }
    }

    fn confirming(mut self, target: &'static str) -> Self {
        self.confirm_target = Some(target);
        self
    }
}

/// Submit button state derived from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub loading: bool,
    pub label: String,
}

/// What changed when a field was edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldChange {
    /// Set when a strong-password field was validated
    pub password: Option<PasswordReport>,
    /// Confirm fields that were re-validated as a side effect
    pub revalidated: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    kind: FormKind,
    fields: Vec<Field>,
    submit_label: &'static str,
    loading_text: &'static str,
    loading: bool,
}

impl AuthForm {
    pub fn login() -> Self {
        Self {
            kind: FormKind::Login,
            fields: vec![
                Field::new("email", Rule::Email),
                Field::new("password", Rule::PasswordBasic),
            ],
            submit_label: "Sign in",
            loading_text: "Signing in...",
            loading: false,
        }
    }

    pub fn signup() -> Self {
        Self {
            kind: FormKind::Signup,
            fields: vec![
                Field::new("fullName", Rule::Text),
                Field::new("email", Rule::Email),
                Field::new("password", Rule::Password),
                Field::new("confirmPassword", Rule::Confirm).confirming("password"),
            ],
            submit_label: "Create account",
            loading_text: "Creating account...",
            loading: false,
        }
    }

    pub fn forgot() -> Self {
        Self {
            kind: FormKind::Forgot,
            fields: vec![Field::new("email", Rule::Email)],
            submit_label: "Send reset link",
            loading_text: DEFAULT_LOADING_TEXT,
            loading: false,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Current value of a field, or `""` for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Trimmed value, as the success handlers read it.
    pub fn trimmed(&self, name: &str) -> &str {
        self.value(name).trim()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    fn check(&self, index: usize) -> ValidationResult {
        let field = &self.fields[index];
        let paired = field.confirm_target.map(|t| self.value(t)).unwrap_or("");
        field.rule.check(&field.value, paired)
    }

    fn run_validation(&mut self, index: usize, force: bool) {
        let result = self.check(index);
        let field = &mut self.fields[index];
        field.display = FieldDisplay::for_result(&result, &field.value, force);
    }

    /// Edit a field and validate it. Unknown field names are ignored.
    pub fn set_value(&mut self, name: &str, value: &str, trigger: Trigger) -> FieldChange {
        let Some(index) = self.position(name) else {
            tracing::debug!(form = self.kind.form_id(), field = name, "Ignoring unknown field");
            return FieldChange::default();
        };

        self.fields[index].value = value.to_string();
        self.run_validation(index, trigger.force());

        let mut change = FieldChange::default();
        if self.fields[index].rule == Rule::Password {
            change.password = Some(validate_strong_password(value));

            // A non-empty confirmation follows its password
            let field_name = self.fields[index].name;
            let dependents: Vec<usize> = self
                .fields
                .iter()
                .enumerate()
                .filter(|(_, f)| f.confirm_target == Some(field_name) && !f.value.is_empty())
                .map(|(i, _)| i)
                .collect();
            for dependent in dependents {
                self.run_validation(dependent, true);
                change.revalidated.push(self.fields[dependent].name);
            }
        }
        change
    }

    /// Aggregate validity; what the browser's `checkValidity` would say.
    pub fn is_valid(&self) -> bool {
        (0..self.fields.len()).all(|i| self.check(i).is_valid)
    }

    /// Force feedback on every field, as a rejected submit does.
    pub fn reveal_invalid(&mut self) {
        for index in 0..self.fields.len() {
            self.run_validation(index, Trigger::Submit.force());
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.loading {
            return SubmitButton {
                disabled: true,
                loading: true,
                label: self.loading_text.to_string(),
            };
        }
        SubmitButton {
            disabled: !self.is_valid(),
            loading: false,
            label: self.submit_label.to_string(),
        }
    }

    /// Clear values and feedback.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.display = FieldDisplay::Cleared;
        }
    }
}

/// Show/hide toggle next to a password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordVisibility {
    visible: bool,
}

impl PasswordVisibility {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn input_type(&self) -> &'static str {
        if self.visible { "text" } else { "password" }
    }

    /// `aria-pressed` on the toggle button
    pub fn pressed(&self) -> bool {
        self.visible
    }

    pub fn button_label(&self) -> &'static str {
        if self.visible { "Hide" } else { "Show" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_signup() -> AuthForm {
        let mut form = AuthForm::signup();
        form.set_value("fullName", "Layla Noor", Trigger::Change);
        form.set_value("email", "layla@example.com", Trigger::Change);
        form.set_value("password", "Abc12345!", Trigger::Change);
        form.set_value("confirmPassword", "Abc12345!", Trigger::Change);
        form
    }

    #[test]
    fn empty_form_disables_submit() {
        let form = AuthForm::login();
        let button = form.submit_button();
        assert!(button.disabled);
        assert!(!button.loading);
        assert_eq!(button.label, "Sign in");
    }

    #[test]
    fn complete_signup_enables_submit() {
        let form = filled_signup();
        assert!(form.is_valid());
        assert!(!form.submit_button().disabled);
    }

    #[test]
    fn password_edit_revalidates_filled_confirmation() {
        let mut form = filled_signup();

        let change = form.set_value("password", "Abc12345?", Trigger::Input);
        assert_eq!(change.revalidated, vec!["confirmPassword"]);
        assert_eq!(change.password.map(|p| p.score), Some(4));
        assert_eq!(
            form.field("confirmPassword").map(|f| f.display.clone()),
            Some(FieldDisplay::Invalid("Passwords must match exactly.".to_string()))
        );
        assert!(form.submit_button().disabled);
    }

    #[test]
    fn empty_confirmation_is_left_alone() {
        let mut form = AuthForm::signup();
        let change = form.set_value("password", "abc", Trigger::Input);
        assert!(change.revalidated.is_empty());
        assert_eq!(
            form.field("confirmPassword").map(|f| f.display.clone()),
            Some(FieldDisplay::Cleared)
        );
    }

    #[test]
    fn keystroke_on_empty_field_does_not_flash_errors() {
        let mut form = AuthForm::forgot();
        form.set_value("email", "", Trigger::Input);
        assert_eq!(form.field("email").map(|f| f.display.clone()), Some(FieldDisplay::Cleared));

        form.set_value("email", "", Trigger::Blur);
        assert_eq!(
            form.field("email").map(|f| f.display.clone()),
            Some(FieldDisplay::Invalid("Email is required.".to_string()))
        );
    }

    #[test]
    fn loading_overrides_validity() {
        let mut form = filled_signup();
        form.set_loading(true);
        let button = form.submit_button();
        assert!(button.disabled);
        assert!(button.loading);
        assert_eq!(button.label, "Creating account...");

        let mut invalid = AuthForm::forgot();
        invalid.set_loading(true);
        assert_eq!(invalid.submit_button().label, DEFAULT_LOADING_TEXT);
    }

    #[test]
    fn reveal_marks_every_empty_field() {
        let mut form = AuthForm::login();
        form.reveal_invalid();
        assert!(form.fields().iter().all(|f| f.display.aria_invalid()));

        form.reset();
        assert!(form.fields().iter().all(|f| f.display == FieldDisplay::Cleared));
    }

    #[test]
    fn password_visibility_toggle() {
        let mut toggle = PasswordVisibility::default();
        assert_eq!(toggle.input_type(), "password");
        toggle.toggle();
        assert_eq!(toggle.input_type(), "text");
        assert!(toggle.pressed());
        assert_eq!(toggle.button_label(), "Hide");
    }
}
