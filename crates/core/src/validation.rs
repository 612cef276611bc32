//! Field validation rules for employee payloads.
//!
//! Violations are collected in one pass into [`ValidationErrors`] so a
//! response can report every failing field at once, grouped by field name.
//! Each rule runs unconditionally, so an empty field collects both its
//! "required" and its range/format message.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::date_format;

/// Maximum length of an employee id, in characters.
pub const MAX_EMPLOYEE_ID_LENGTH: usize = 10;

/// Maximum length of an employee full name, in characters.
pub const MAX_FULL_NAME_LENGTH: usize = 50;

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn check_employee_id(errors: &mut ValidationErrors, value: &str) {
    if value.is_empty() {
        errors.add("EmployeeId", violation("required", "EmployeeId is required."));
    }
    let length = value.chars().count();
    if length < 1 || length > MAX_EMPLOYEE_ID_LENGTH {
        errors.add(
            "EmployeeId",
            violation("length", "EmployeeId must be between 1 and 10 characters."),
        );
    }
}

fn check_full_name(errors: &mut ValidationErrors, value: &str) {
    if value.is_empty() {
        errors.add("FullName", violation("required", "FullName is required."));
    }
    let length = value.chars().count();
    if length < 1 || length > MAX_FULL_NAME_LENGTH {
        errors.add(
            "FullName",
            violation("length", "FullName must be between 1 and 50 characters."),
        );
    }
}

fn check_birth_date(errors: &mut ValidationErrors, value: &str) {
    if value.is_empty() {
        errors.add("BirthDate", violation("required", "BirthDate is required."));
    }
    if !date_format::is_valid(value) {
        errors.add(
            "BirthDate",
            violation("format", "Invalid date format. Please use 'dd-MMM-yyyy'."),
        );
    }
}

/// Validate a create payload: id, name, and birth date all have rules.
pub fn validate_create(
    employee_id: &str,
    full_name: &str,
    birth_date: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_employee_id(&mut errors, employee_id);
    check_full_name(&mut errors, full_name);
    check_birth_date(&mut errors, birth_date);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate an update payload: the id comes from the request path, so only
/// name and birth date are checked.
pub fn validate_update(full_name: &str, birth_date: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_full_name(&mut errors, full_name);
    check_birth_date(&mut errors, birth_date);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
