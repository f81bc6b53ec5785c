//! Contact form state and validation
//!
//! The error map is recomputed wholesale on every submit attempt. A clean
//! submit resets every field; a failed one keeps what was typed.

mod text_input;

pub use text_input::TextInput;

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;

/// `local@domain.tld`, no whitespace and a single `@`
const EMAIL_SHAPE: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const FAILURE_ANNOUNCEMENT: &str = "Please fix the highlighted fields before submitting.";

/// Validated text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form key
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Message => "contact-message",
        }
    }

    /// Id of the inline error text linked through `aria-describedby`
    pub fn error_id(self) -> String {
        format!("{}-error", self.input_id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

/// Snapshot of the form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subscribe: bool,
}

/// Field -> human-readable message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, &'static str>);

impl ErrorMap {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Field rules. Pure: no I/O, no async checks.
#[derive(Debug, Clone)]
pub struct FormValidator {
    email_shape: Regex,
}

impl FormValidator {
    pub fn new() -> Result<Self> {
        let email_shape = Regex::new(EMAIL_SHAPE).context("Invalid email shape pattern")?;
        Ok(Self { email_shape })
    }

    pub fn is_email_shaped(&self, email: &str) -> bool {
        self.email_shape.is_match(email)
    }

    pub fn validate(&self, data: &FormData) -> ErrorMap {
        let mut errors = ErrorMap::default();

        if data.name.trim().is_empty() {
            errors.insert(Field::Name, "Please share your name.");
        }

        if data.email.trim().is_empty() {
            errors.insert(Field::Email, "An email address is required.");
        } else if !self.is_email_shaped(&data.email) {
            errors.insert(Field::Email, "Enter a valid email address.");
        }

        if data.message.trim().is_empty() {
            errors.insert(Field::Message, "Give us a short note so we can help.");
        }

        errors
    }
}

/// Result of a submit attempt, ready for the live region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent { announcement: String },
    Rejected { announcement: String },
}

impl SubmitOutcome {
    pub fn announcement(&self) -> &str {
        match self {
            SubmitOutcome::Sent { announcement } | SubmitOutcome::Rejected { announcement } => {
                announcement
            }
        }
    }

    #[cfg(test)]
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

/// The contact form: editable fields plus the last error map
#[derive(Debug)]
pub struct ContactForm {
    pub name: TextInput,
    pub email: TextInput,
    pub message: TextInput,
    pub subscribe: bool,
    errors: ErrorMap,
    validator: FormValidator,
}

impl ContactForm {
    pub fn new() -> Result<Self> {
        Ok(Self {
            name: TextInput::single_line(),
            email: TextInput::single_line(),
            message: TextInput::multi_line(),
            subscribe: false,
            errors: ErrorMap::default(),
            validator: FormValidator::new()?,
        })
    }

    pub fn input(&self, field: Field) -> &TextInput {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn input_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn toggle_subscribe(&mut self) {
        self.subscribe = !self.subscribe;
    }

    pub fn data(&self) -> FormData {
        FormData {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            message: self.message.value().to_string(),
            subscribe: self.subscribe,
        }
    }

    /// Validate and either reset (clean) or keep values and report errors.
    /// `topic_label` is the currently selected topic.
    pub fn submit(&mut self, topic_label: &str) -> SubmitOutcome {
        let data = self.data();
        self.errors = self.validator.validate(&data);

        if self.errors.is_empty() {
            let name = if data.name.is_empty() {
                "there"
            } else {
                data.name.as_str()
            };
            let announcement = format!(
                "Thanks {}! We will send more on {}.",
                name,
                topic_label.to_lowercase()
            );
            tracing::info!(subscribe = data.subscribe, "contact form submitted");
            self.reset();
            SubmitOutcome::Sent { announcement }
        } else {
            let invalid: Vec<&str> = self.errors.iter().map(|(f, _)| f.key()).collect();
            tracing::debug!(?invalid, "contact form rejected");
            SubmitOutcome::Rejected {
                announcement: FAILURE_ANNOUNCEMENT.to_string(),
            }
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.subscribe = false;
    }
}
