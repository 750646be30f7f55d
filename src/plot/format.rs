/// Consumption values are always shown with two decimals.
#[must_use]
pub fn format_consumption(value: f64) -> String {
    format!("{:.2}", value)
}

#[must_use]
pub fn format_month(month: i64) -> String {
    month.to_string()
}
