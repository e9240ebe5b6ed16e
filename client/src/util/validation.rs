//! Declarative form validation.
//!
//! DESIGN
//! ======
//! A schema is a static table of fields, each with an ordered list of rules
//! and the message shown when the rule fails. Validation runs synchronously
//! before any request is built; a form that fails never reaches the network.
//! Only the first failing rule of each field is reported.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::borrow::Cow;

use time::macros::format_description;

/// A single check applied to a field's raw text value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming whitespace.
    Required,
    /// A calendar date in `YYYY-MM-DD` form, as produced by `<input type="date">`.
    CalendarDate,
    /// Digits, optionally grouped with spaces or `-` and prefixed with `+`.
    PhoneNumber,
}

impl Rule {
    fn accepts(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Self::Required => !value.is_empty(),
            Self::CalendarDate => time::Date::parse(value, format_description!("[year]-[month]-[day]")).is_ok(),
            Self::PhoneNumber => {
                let body = value.strip_prefix('+').unwrap_or(value);
                body.chars().any(|c| c.is_ascii_digit())
                    && body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: &'static str,
    pub rules: &'static [(Rule, &'static str)],
}

/// Read access to a form's fields by name.
pub trait FormFields {
    /// Raw text of `field`; unknown or unset fields read as empty.
    fn value(&self, field: &str) -> Cow<'_, str>;
}

/// A failed rule attached to the field it annotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldIssue>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldIssue> {
        self.0.iter()
    }

    /// The message to show under `field`, if it failed.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|issue| issue.field == field).map(|issue| issue.message)
    }
}

/// Check `form` against `schema`.
///
/// # Errors
///
/// Returns every field whose value breaks one of its rules.
pub fn validate<F: FormFields + ?Sized>(schema: &[FieldSpec], form: &F) -> Result<(), FieldErrors> {
    let issues: Vec<FieldIssue> = schema
        .iter()
        .filter_map(|spec| {
            let value = form.value(spec.field);
            spec.rules
                .iter()
                .find(|(rule, _)| !rule.accepts(&value))
                .map(|&(_, message)| FieldIssue { field: spec.field, message })
        })
        .collect();
    if issues.is_empty() { Ok(()) } else { Err(FieldErrors(issues)) }
}

// =============================================================================
// SCHEMAS
// =============================================================================

pub const FIELD_NAME: &str = "name";
pub const FIELD_PHONE_NUMBER: &str = "phone_number";
pub const FIELD_STARTED_AT: &str = "started_at";
pub const FIELD_OFFICE_SPACE_ID: &str = "office_space_id";
pub const FIELD_BOOKING_TRX_ID: &str = "booking_trx_id";

pub const BOOKING_SCHEMA: &[FieldSpec] = &[
    FieldSpec { field: FIELD_NAME, rules: &[(Rule::Required, "*Name is required")] },
    FieldSpec {
        field: FIELD_PHONE_NUMBER,
        rules: &[
            (Rule::Required, "*Phone number is required"),
            (Rule::PhoneNumber, "*Phone number is invalid"),
        ],
    },
    FieldSpec {
        field: FIELD_STARTED_AT,
        rules: &[
            (Rule::Required, "*Date is required"),
            (Rule::CalendarDate, "*Date must be a valid date"),
        ],
    },
    FieldSpec { field: FIELD_OFFICE_SPACE_ID, rules: &[(Rule::Required, "*Office is not available")] },
];

pub const CHECK_BOOKING_SCHEMA: &[FieldSpec] = &[
    FieldSpec { field: FIELD_BOOKING_TRX_ID, rules: &[(Rule::Required, "Code booking is required")] },
    FieldSpec {
        field: FIELD_PHONE_NUMBER,
        rules: &[
            (Rule::Required, "Phone Number is required"),
            (Rule::PhoneNumber, "Phone Number is invalid"),
        ],
    },
];
