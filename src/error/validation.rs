use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    #[error("start month")]
    StartMonth,
    #[error("forecast length")]
    ForecastLength,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("The {field} must not be empty.")]
    EmptyField { field: FormField },
    #[error("Invalid {field} '{value}': {source}")]
    InvalidNumber {
        field: FormField,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Forecast length must not be negative (got {value}).")]
    NegativeLength { value: i64 },
    #[error("The {field} must be between {min} and {max} (got {value}).")]
    OutOfRange {
        field: FormField,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("Chart padding {padding} must be smaller than half of {width}x{height}.")]
    CanvasPaddingTooLarge { width: u32, height: u32, padding: u32 },
    #[error("Chart dimensions must be >= 1.")]
    CanvasEmpty,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
