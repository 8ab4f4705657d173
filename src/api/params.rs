//! Query parameter validation

use std::str::FromStr;

use crate::GatewayError;

pub fn required_text<'a>(name: &str, raw: Option<&'a str>) -> crate::Result<&'a str> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(GatewayError::validation(format!("{name} is required"))),
    }
}

pub fn required_number<T: FromStr>(name: &str, raw: Option<&str>) -> crate::Result<T> {
    let value = required_text(name, raw)?;
    parse(name, value)
}

/// Like `required_number`, but NaN and infinities are rejected
pub fn required_coordinate(name: &str, raw: Option<&str>) -> crate::Result<f64> {
    let value: f64 = required_number(name, raw)?;
    if !value.is_finite() {
        return Err(GatewayError::validation(format!("{name} must be a finite number")));
    }
    Ok(value)
}

/// Absent or blank parameters are `None`; present ones must parse
pub fn optional_number<T: FromStr>(name: &str, raw: Option<&str>) -> crate::Result<Option<T>> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => parse(name, value).map(Some),
        _ => Ok(None),
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> crate::Result<T> {
    value
        .parse::<T>()
        .map_err(|_| GatewayError::validation(format!("{name} '{value}' is not a valid number")))
}
