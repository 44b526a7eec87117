//! Contact modal: form state, validation and the dialog's focus handling
//!
//! Submitting never reaches the network; a valid payload is handed back to
//! the page, which logs it and closes the dialog.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::focus::{cycle, FocusChange, FocusTarget, KeyPress, NavKey};

/// `local@domain.tld`, no whitespace and a single `@`
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

/// Fields of the contact form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First name",
            ContactField::LastName => "Last name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// Widget id of the matching text input
    pub fn input_id(self) -> &'static str {
        match self {
            ContactField::FirstName => "contact.first-name",
            ContactField::LastName => "contact.last-name",
            ContactField::Email => "contact.email",
            ContactField::Message => "contact.message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(ContactField),
    #[error("{field} must contain at least {min} characters")]
    TooShort { field: ContactField, min: usize },
    #[error("{0} is not valid")]
    InvalidEmail(ContactField),
}

/// A validated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// Raw form values as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Check a single field against its rule
    pub fn check(&self, field: ContactField) -> Result<(), FieldError> {
        let value = self.value(field).trim();
        if value.is_empty() {
            return Err(FieldError::Required(field));
        }

        match field {
            ContactField::FirstName | ContactField::LastName => min_len(field, value, MIN_NAME_LEN),
            ContactField::Message => min_len(field, value, MIN_MESSAGE_LEN),
            ContactField::Email => {
                if EMAIL_PATTERN.is_match(value) {
                    Ok(())
                } else {
                    Err(FieldError::InvalidEmail(field))
                }
            }
        }
    }

    /// Validate every field, returning all errors keyed by field
    pub fn validate(&self) -> Result<ContactPayload, BTreeMap<ContactField, FieldError>> {
        let errors: BTreeMap<_, _> = ContactField::ALL
            .iter()
            .filter_map(|field| self.check(*field).err().map(|e| (*field, e)))
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

fn min_len(field: ContactField, value: &str, min: usize) -> Result<(), FieldError> {
    if value.chars().count() < min {
        Err(FieldError::TooShort { field, min })
    } else {
        Ok(())
    }
}

/// What a submit attempt produced
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form was valid; the modal is closed and reset
    Sent {
        payload: ContactPayload,
        focus: FocusChange,
    },
    /// Errors are displayed and focus goes to the first invalid field
    Invalid { focus: FocusChange },
}

/// Result of a key press inside the dialog
#[derive(Debug, Clone, PartialEq)]
pub enum ContactKeyOutcome {
    Focus(FocusChange),
    Submitted(SubmitOutcome),
}

/// The contact dialog
#[derive(Debug, Clone, Default)]
pub struct ContactModal {
    open: bool,
    recipient: String,
    form: ContactForm,
    errors: BTreeMap<ContactField, FieldError>,
    return_focus: Option<FocusTarget>,
}

impl ContactModal {
    /// Dialog addressed to a photographer
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Name shown in the dialog title
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn error(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Focus ring of the dialog: close button, fields, submit
    pub fn focus_ring() -> Vec<FocusTarget> {
        std::iter::once(FocusTarget::ContactClose)
            .chain(ContactField::ALL.iter().map(|f| FocusTarget::ContactField(*f)))
            .chain(std::iter::once(FocusTarget::ContactSubmit))
            .collect()
    }

    /// Show the dialog and focus the first field
    pub fn open(&mut self, focused: Option<FocusTarget>) -> FocusChange {
        if self.open {
            return FocusChange::Keep;
        }
        self.open = true;
        self.return_focus = focused;
        FocusChange::Move(FocusTarget::ContactField(ContactField::FirstName))
    }

    /// Hide the dialog, reset the form and restore prior focus
    pub fn close(&mut self) -> FocusChange {
        if !self.open {
            return FocusChange::Keep;
        }
        self.open = false;
        self.form = ContactForm::default();
        self.errors.clear();
        FocusChange::restore(self.return_focus.take())
    }

    pub fn input(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    /// A field lost focus: drop its error once it has content
    pub fn blur(&mut self, field: ContactField) {
        if !self.form.value(field).trim().is_empty() {
            self.errors.remove(&field);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        match self.form.validate() {
            Ok(payload) => SubmitOutcome::Sent {
                payload,
                focus: self.close(),
            },
            Err(errors) => {
                let first = errors.keys().next().copied();
                self.errors = errors;
                SubmitOutcome::Invalid {
                    focus: first
                        .map(|f| FocusChange::Move(FocusTarget::ContactField(f)))
                        .unwrap_or(FocusChange::Keep),
                }
            }
        }
    }

    /// Escape closes, Tab is trapped, Enter/Space activate the buttons;
    /// `None` leaves the key to the focused text input
    pub fn handle_key(&mut self, press: KeyPress, focused: Option<FocusTarget>) -> Option<ContactKeyOutcome> {
        if !self.open {
            return None;
        }

        match press.key {
            NavKey::Escape => Some(ContactKeyOutcome::Focus(self.close())),
            NavKey::Tab => {
                let next = cycle(&Self::focus_ring(), focused, press.shift);
                Some(ContactKeyOutcome::Focus(
                    next.map(FocusChange::Move).unwrap_or(FocusChange::Keep),
                ))
            }
            key if key.is_activation() => match focused {
                Some(FocusTarget::ContactClose) => Some(ContactKeyOutcome::Focus(self.close())),
                Some(FocusTarget::ContactSubmit) => Some(ContactKeyOutcome::Submitted(self.submit())),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "I would love a portrait session.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_trimmed_payload() {
        let mut form = filled();
        form.first_name = "  Ada ".to_string();

        let payload = form.validate().unwrap();
        assert_eq!(payload.first_name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
    }

    #[test]
    fn test_email_format() {
        let mut form = filled();

        form.email = "foo@bar".to_string();
        assert_eq!(
            form.check(ContactField::Email),
            Err(FieldError::InvalidEmail(ContactField::Email))
        );

        form.email = "foo@bar.com".to_string();
        assert_eq!(form.check(ContactField::Email), Ok(()));

        form.email = "foo bar@baz.com".to_string();
        assert!(form.check(ContactField::Email).is_err());
    }

    #[test]
    fn test_required_and_min_lengths() {
        let form = ContactForm {
            first_name: "   ".to_string(),
            last_name: "L".to_string(),
            email: String::new(),
            message: "Too short".to_string(),
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors[&ContactField::FirstName], FieldError::Required(ContactField::FirstName));
        assert_eq!(
            errors[&ContactField::LastName],
            FieldError::TooShort { field: ContactField::LastName, min: 2 }
        );
        assert_eq!(errors[&ContactField::Email], FieldError::Required(ContactField::Email));
        assert_eq!(
            errors[&ContactField::Message],
            FieldError::TooShort { field: ContactField::Message, min: 10 }
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut form = filled();
        form.first_name = "É".to_string();
        assert!(form.check(ContactField::FirstName).is_err());
        form.first_name = "Éa".to_string();
        assert!(form.check(ContactField::FirstName).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::Required(ContactField::FirstName).to_string(),
            "First name is required"
        );
        assert_eq!(
            FieldError::TooShort { field: ContactField::Message, min: 10 }.to_string(),
            "Message must contain at least 10 characters"
        );
        assert_eq!(
            FieldError::InvalidEmail(ContactField::Email).to_string(),
            "Email is not valid"
        );
    }

    #[test]
    fn test_invalid_submit_focuses_first_error() {
        let mut modal = ContactModal::new("Mimi Keel");
        modal.open(Some(FocusTarget::ContactButton));
        modal.input(ContactField::FirstName, "Ada".to_string());
        modal.input(ContactField::LastName, "Lovelace".to_string());
        modal.input(ContactField::Email, "foo@bar".to_string());

        let outcome = modal.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                focus: FocusChange::Move(FocusTarget::ContactField(ContactField::Email)),
            }
        );
        assert!(modal.is_open());
        assert!(modal.error(ContactField::Email).is_some());
        assert!(modal.error(ContactField::Message).is_some());
        assert!(modal.error(ContactField::FirstName).is_none());
    }

    #[test]
    fn test_blur_clears_error_only_with_content() {
        let mut modal = ContactModal::new("Mimi Keel");
        modal.open(None);
        modal.submit();
        assert!(modal.error(ContactField::FirstName).is_some());

        modal.blur(ContactField::FirstName);
        assert!(modal.error(ContactField::FirstName).is_some());

        modal.input(ContactField::FirstName, "A".to_string());
        modal.blur(ContactField::FirstName);
        assert!(modal.error(ContactField::FirstName).is_none());
    }

    #[test]
    fn test_valid_submit_closes_and_resets() {
        let mut modal = ContactModal::new("Mimi Keel");
        modal.open(Some(FocusTarget::ContactButton));
        let form = filled();
        for field in ContactField::ALL {
            modal.input(field, form.value(field).to_string());
        }

        match modal.submit() {
            SubmitOutcome::Sent { payload, focus } => {
                assert_eq!(payload.last_name, "Lovelace");
                assert_eq!(focus, FocusChange::Move(FocusTarget::ContactButton));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(!modal.is_open());
        assert_eq!(modal.form(), &ContactForm::default());
    }

    #[test]
    fn test_escape_restores_focus_and_resets() {
        let mut modal = ContactModal::new("Mimi Keel");
        assert_eq!(
            modal.open(Some(FocusTarget::ContactButton)),
            FocusChange::Move(FocusTarget::ContactField(ContactField::FirstName))
        );
        modal.input(ContactField::Message, "half written".to_string());

        let outcome = modal.handle_key(KeyPress::new(NavKey::Escape), None);
        assert_eq!(
            outcome,
            Some(ContactKeyOutcome::Focus(FocusChange::Move(FocusTarget::ContactButton)))
        );
        assert_eq!(modal.form().message, "");
    }

    #[test]
    fn test_tab_wraps_between_first_and_last() {
        let mut modal = ContactModal::new("Mimi Keel");
        modal.open(None);

        assert_eq!(
            modal.handle_key(KeyPress::new(NavKey::Tab), Some(FocusTarget::ContactSubmit)),
            Some(ContactKeyOutcome::Focus(FocusChange::Move(FocusTarget::ContactClose)))
        );
        assert_eq!(
            modal.handle_key(KeyPress::shifted(NavKey::Tab), Some(FocusTarget::ContactClose)),
            Some(ContactKeyOutcome::Focus(FocusChange::Move(FocusTarget::ContactSubmit)))
        );
        assert_eq!(
            modal.handle_key(
                KeyPress::new(NavKey::Tab),
                Some(FocusTarget::ContactField(ContactField::Email))
            ),
            Some(ContactKeyOutcome::Focus(FocusChange::Move(FocusTarget::ContactField(
                ContactField::Message
            ))))
        );
    }

    #[test]
    fn test_space_in_a_field_is_left_to_the_input() {
        let mut modal = ContactModal::new("Mimi Keel");
        modal.open(None);
        assert_eq!(
            modal.handle_key(
                KeyPress::new(NavKey::Space),
                Some(FocusTarget::ContactField(ContactField::Message))
            ),
            None
        );
    }
}
