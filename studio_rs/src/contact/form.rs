use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
    Service,
}

impl Field {
    /// All fields, in payload order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Message,
        Field::Service,
    ];

    /// Fields that must be non-empty before a submission is allowed.
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Input `name` attribute and JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
            Field::Service => "service",
        }
    }

    /// Human label used next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::Message => "Project Details",
            Field::Service => "Service Needed",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Field::from_str`] for a name outside the five fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Something that keeps the form from being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormIssue {
    Missing(Field),
    InvalidEmail,
}

impl fmt::Display for FormIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormIssue::Missing(field) => write!(f, "`{}` is required", field),
            FormIssue::InvalidEmail => f.write_str("email address is not valid"),
        }
    }
}

/// The record behind the contact form inputs.
///
/// Serializes to exactly `{"name","email","company","message","service"}`;
/// optional fields the visitor left blank go out as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub service: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
            Field::Service => &self.service,
        }
    }

    /// Set one field. No validation happens here.
    ///
    /// Email is stored without surrounding whitespace, matching the value
    /// sanitization of an `<input type="email">`; every other field is kept
    /// verbatim.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value.trim().to_string(),
            Field::Company => self.company = value,
            Field::Message => self.message = value,
            Field::Service => self.service = value,
        }
    }

    /// Builder-style [`update_field`](Self::update_field).
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.update_field(field, value);
        self
    }

    /// Boundary checks the page applies before allowing a submit:
    /// required fields present (whitespace counts as empty) and an email of
    /// the `local@domain` shape.
    pub fn validate(&self) -> Vec<FormIssue> {
        let mut issues: Vec<FormIssue> = Field::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .map(FormIssue::Missing)
            .collect();

        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            issues.push(FormIssue::InvalidEmail);
        }
        issues
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    /// Back to the all-empty initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// Mirrors the browser's `type="email"` shape check, not RFC 5322.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}
