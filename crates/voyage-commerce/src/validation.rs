//! Required-field validation shared by the checkout and contact forms.

use std::fmt;

/// Message shown whenever a form is missing required input.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// One or more required fields were blank.
///
/// Displays as the single coarse form message; `missing` lists the fields
/// for callers that want to highlight them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Names of the blank fields, in form order.
    pub missing: Vec<&'static str>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REQUIRED_FIELDS_MESSAGE)
    }
}

impl std::error::Error for ValidationError {}

/// Check that every `(name, value)` pair is non-blank after trimming.
///
/// No format checks are applied: any non-empty string is accepted.
pub fn require_fields(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}
