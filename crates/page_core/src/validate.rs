//! Pure per-field validation rules for the contact form. No rendering, no
//! state: one field id and one raw value in, one verdict out.

use shared::domain::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(&'static str),
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(message) => Some(message),
        }
    }
}

/// Validates one field. The raw value is trimmed first; rules run in
/// order (empty check, then length/pattern) and only the first failing
/// rule's message is reported.
pub fn validate(field: FieldId, raw: &str) -> Verdict {
    let value = raw.trim();
    match field {
        FieldId::Name => {
            if value.is_empty() {
                Verdict::Invalid("Full name is required")
            } else if value.chars().count() < 2 {
                Verdict::Invalid("Name must be at least 2 characters long")
            } else if !value
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            {
                Verdict::Invalid("Name can only contain letters and spaces")
            } else {
                Verdict::Valid
            }
        }
        FieldId::Email => {
            if value.is_empty() {
                Verdict::Invalid("Email address is required")
            } else if !is_email(value) {
                Verdict::Invalid("Please enter a valid email address")
            } else {
                Verdict::Valid
            }
        }
        FieldId::Phone => {
            if !value.is_empty() && !value.chars().all(is_phone_char) {
                Verdict::Invalid("Please enter a valid phone number")
            } else {
                Verdict::Valid
            }
        }
        FieldId::Subject => {
            if value.is_empty() {
                Verdict::Invalid("Please select a subject")
            } else {
                Verdict::Valid
            }
        }
        FieldId::Message => {
            if value.is_empty() {
                Verdict::Invalid("Message is required")
            } else if value.chars().count() < 10 {
                Verdict::Invalid("Message must be at least 10 characters long")
            } else {
                Verdict::Valid
            }
        }
    }
}

/// Shape check only: something@something.something, with no whitespace and
/// no second '@'. The runs around the dot may themselves contain dots, so
/// any dot with at least one character on each side qualifies; only a dot
/// at the very start or end of the domain part fails.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, rest)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || rest.contains('@') {
        return false;
    }
    let bytes = rest.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < bytes.len())
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')')
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
