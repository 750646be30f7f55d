use std::ops::RangeInclusive;

use crate::error::{FormField, ValidationError};

/// Bounds suggested by the form for the start month.
pub const START_MONTH_BOUNDS: RangeInclusive<i64> = 1..=12;
/// Bounds suggested by the form for the forecast length.
pub const FORECAST_LENGTH_BOUNDS: RangeInclusive<i64> = 1..=36;
/// Hard ceiling on the number of requested periods, applied even without
/// strict bounds. The request body holds one month per period.
pub const MAX_FORECAST_LENGTH: u32 = 10_000;

/// Parses the start month as typed into the form or passed on the CLI.
///
/// # Errors
///
/// Returns an error when the value is empty or not an `i32`.
pub fn parse_start_month(input: &str) -> Result<i32, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField {
            field: FormField::StartMonth,
        });
    }
    value
        .parse::<i32>()
        .map_err(|err| ValidationError::InvalidNumber {
            field: FormField::StartMonth,
            value: value.to_owned(),
            source: err,
        })
}

/// Parses the forecast length, rejecting negative values.
///
/// # Errors
///
/// Returns an error when the value is empty, not a number, negative, or
/// above [`MAX_FORECAST_LENGTH`].
pub fn parse_forecast_length(input: &str) -> Result<u32, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField {
            field: FormField::ForecastLength,
        });
    }
    let parsed = value
        .parse::<i64>()
        .map_err(|err| ValidationError::InvalidNumber {
            field: FormField::ForecastLength,
            value: value.to_owned(),
            source: err,
        })?;
    if parsed < 0 {
        return Err(ValidationError::NegativeLength { value: parsed });
    }
    match u32::try_from(parsed) {
        Ok(length) => check_length_cap(length),
        Err(_) => Err(length_cap_error(parsed)),
    }
}

/// Rejects lengths above [`MAX_FORECAST_LENGTH`].
///
/// # Errors
///
/// Returns `OutOfRange` for the forecast length field.
pub fn check_length_cap(length: u32) -> Result<u32, ValidationError> {
    if length > MAX_FORECAST_LENGTH {
        return Err(length_cap_error(i64::from(length)));
    }
    Ok(length)
}

fn length_cap_error(value: i64) -> ValidationError {
    ValidationError::OutOfRange {
        field: FormField::ForecastLength,
        value,
        min: 0,
        max: i64::from(MAX_FORECAST_LENGTH),
    }
}

/// Enforces the form's advisory bounds.
///
/// Only called when strict bounds are requested; by default out-of-range
/// values are submitted as-is.
///
/// # Errors
///
/// Returns `OutOfRange` naming the first offending field.
pub fn validate_bounds(start_month: i32, forecast_length: u32) -> Result<(), ValidationError> {
    check_range(
        FormField::StartMonth,
        i64::from(start_month),
        &START_MONTH_BOUNDS,
    )?;
    check_range(
        FormField::ForecastLength,
        i64::from(forecast_length),
        &FORECAST_LENGTH_BOUNDS,
    )
}

fn check_range(
    field: FormField,
    value: i64,
    bounds: &RangeInclusive<i64>,
) -> Result<(), ValidationError> {
    if bounds.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::OutOfRange {
        field,
        value,
        min: *bounds.start(),
        max: *bounds.end(),
    })
}
