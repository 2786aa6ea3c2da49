use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};
use validator::Validate;

use crate::ValidationError;

// Not RFC 5322: a non-blank local part, one '@', and a dotted domain.
// Whitespace is the browser's set: Unicode White_Space without U+0085, plus U+FEFF.
const EMAIL_PART: &str = r"[^@\x{FEFF}[\s--\x{85}]]+";

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{p}@{p}\.{p}$", p = EMAIL_PART)).unwrap()
});

const CODE_MISSING: &str = "missing";

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// The four inputs of the contact form, as typed by the visitor.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactFormData {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        regex(path = *RE_EMAIL)
    )]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };

        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }

    /// Runs the client-side checks in the order the form reports them:
    /// a blank field wins over a malformed email.
    pub fn check(&self) -> Result<(), ValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .any(|e| e.code == CODE_MISSING);

        if missing {
            return Err(ValidationError::MissingFields);
        }

        Err(ValidationError::InvalidEmail)
    }
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.chars().all(is_form_whitespace) {
        return Err(validator::ValidationError::new(CODE_MISSING));
    }

    Ok(())
}

fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}
