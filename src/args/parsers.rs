use crate::domain::{parse_forecast_length, parse_start_month};
use crate::error::ValidationError;

pub(super) fn parse_start_month_arg(s: &str) -> Result<i32, ValidationError> {
    parse_start_month(s)
}

pub(super) fn parse_forecast_length_arg(s: &str) -> Result<u32, ValidationError> {
    parse_forecast_length(s)
}

pub(super) fn parse_pixels(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|err| format!("Invalid pixel size '{}': {}", s, err))?;
    if value == 0 {
        return Err("Pixel size must be >= 1.".to_owned());
    }
    Ok(value)
}
