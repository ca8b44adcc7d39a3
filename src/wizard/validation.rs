//! Field validation shared by the booking and partner forms.

use serde::{Deserialize, Serialize};

/// A single problem with a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Who to get back to about a booking or application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    /// Validate all contact fields; `prefix` namespaces the field names.
    pub fn validate(&self, errors: &mut Vec<FieldError>, prefix: ContactFields) {
        require(errors, prefix.name, &self.name);
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new(prefix.email, "Enter a valid e-mail address"));
        }
        if !is_valid_phone(&self.phone) {
            errors.push(FieldError::new(prefix.phone, "Enter a valid phone number"));
        }
    }
}

/// Field names reported for a [`ContactDetails`] block.
#[derive(Debug, Clone, Copy)]
pub struct ContactFields {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "Required"));
    }
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.starts_with('.') && tld.len() >= 2,
        None => false,
    }
}

/// Digits with optional spaces, dashes, parentheses and a leading `+`;
/// between 7 and 15 digits in total.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    let body = value.strip_prefix('+').unwrap_or(value);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
}

/// Swedish organisation number: `NNNNNN-NNNN` or ten digits.
pub fn is_valid_org_number(value: &str) -> bool {
    let value = value.trim();
    let digits: String = match value.split_once('-') {
        Some((head, tail)) if head.len() == 6 && tail.len() == 4 => format!("{head}{tail}"),
        Some(_) => return false,
        None => value.to_string(),
    };
    digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
}
