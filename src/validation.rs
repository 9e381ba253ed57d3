//! Input checks for a scheduling run.
//!
//! Detects duplicate employee names and a zero day cap before allocation.
//! Malformed preferences are deliberately not errors — they normalize to
//! empty lists at the model boundary and the employee falls back to
//! whatever shift is open.

use std::collections::HashSet;

use crate::models::Employee;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share a name.
    DuplicateName,
    /// The weekly day cap is zero.
    ZeroDayCap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates run inputs.
///
/// Checks:
/// 1. The weekly day cap is positive
/// 2. No two employees share a name
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(employees: &[Employee], max_days_per_week: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if max_days_per_week == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroDayCap,
            "max days per week must be positive",
        ));
    }

    let mut seen = HashSet::new();
    for employee in employees {
        if !seen.insert(employee.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", employee.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
