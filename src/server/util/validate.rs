use crate::server::error::validation::ValidationError;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

/// Checks a display name's length in characters (not bytes).
pub fn check_name(errors: &mut ValidationError, field: &str, name: &str) {
    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        errors.push(
            field,
            format!(
                "must be between {} and {} characters",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            ),
        );
    }
}

/// Checks `0 < value <= max`. NaN and infinities are rejected.
pub fn check_positive(errors: &mut ValidationError, field: &str, value: f64, max: f64) {
    if !value.is_finite() || value <= 0.0 || value > max {
        errors.push(
            field,
            format!("must be greater than 0 and at most {}", max),
        );
    }
}

/// Checks `min <= value <= max`.
pub fn check_range(errors: &mut ValidationError, field: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        errors.push(field, format!("must be between {} and {}", min, max));
    }
}

/// Checks an optional lower bound used as a filter.
pub fn check_non_negative(errors: &mut ValidationError, field: &str, value: Option<f64>) {
    if let Some(value) = value {
        if !value.is_finite() || value < 0.0 {
            errors.push(field, "must be a non-negative number");
        }
    }
}
