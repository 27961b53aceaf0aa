use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::shared::types::FieldError;

lazy_static! {
    /// Regex for Indian mobile numbers without country code
    /// Must be 10 ASCII digits, starting with 6, 7, 8 or 9
    /// - Valid: "9876543210", "6000000000"
    /// - Invalid: "1234567890", "98765", "+919876543210", "98765 43210"
    pub static ref MOBILE_PHONE_REGEX: Regex = Regex::new(r"^[6-9][0-9]{9}$").unwrap();
}

/// Build a `ValidationError` carrying a human readable message
pub fn field_error(
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Flatten validator output into one entry per invalid field.
///
/// Fields are reported in `field_order`; any field not listed there follows in
/// name order so nothing is dropped.
pub fn to_field_errors(errors: &ValidationErrors, field_order: &[&str]) -> Vec<FieldError> {
    let field_errors = errors.field_errors();

    let mut names: Vec<&str> = field_order
        .iter()
        .copied()
        .filter(|name| field_errors.contains_key(*name))
        .collect();

    let mut rest: Vec<&str> = field_errors
        .keys()
        .map(|name| &**name)
        .filter(|name| !field_order.contains(name))
        .collect();
    rest.sort_unstable();
    names.extend(rest);

    names
        .into_iter()
        .filter_map(|name| {
            let first = field_errors.get(name)?.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", name));
            Some(FieldError::new(name, message))
        })
        .collect()
}
