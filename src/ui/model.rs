use crate::domain::{
    ForecastRequest, build_request, parse_forecast_length, parse_start_month, validate_bounds,
};
use crate::error::{FormField, ValidationError};
use crate::orchestrator::RequestState;
use crate::plot::Canvas;

/// Editable form contents. Fields hold raw text so partial input such as a
/// lone `-` can be typed before it parses.
#[derive(Debug, Clone)]
pub struct FormState {
    pub focus: FormField,
    pub start_month: String,
    pub forecast_length: String,
    pub strict_bounds: bool,
    /// Validation problem from the last submit attempt.
    pub message: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn new(start_month: i32, forecast_length: u32, strict_bounds: bool) -> Self {
        Self {
            focus: FormField::StartMonth,
            start_month: start_month.to_string(),
            forecast_length: forecast_length.to_string(),
            strict_bounds,
            message: None,
        }
    }

    pub const fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::StartMonth => FormField::ForecastLength,
            FormField::ForecastLength => FormField::StartMonth,
        };
    }

    /// With two fields, moving back is the same as moving forward.
    pub const fn focus_prev(&mut self) {
        self.focus_next();
    }

    pub fn push_char(&mut self, ch: char) {
        if ch.is_ascii_digit() || ch == '-' {
            self.focused_mut().push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::StartMonth => &self.start_month,
            FormField::ForecastLength => &self.forecast_length,
        }
    }

    const fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::StartMonth => &mut self.start_month,
            FormField::ForecastLength => &mut self.forecast_length,
        }
    }

    /// Parses both fields and expands them into a request.
    ///
    /// # Errors
    ///
    /// Returns an error when a field does not parse, the length is negative,
    /// or strict bounds are enabled and a value is out of range.
    pub fn to_request(&self) -> Result<ForecastRequest, ValidationError> {
        let start_month = parse_start_month(&self.start_month)?;
        let forecast_length = parse_forecast_length(&self.forecast_length)?;
        if self.strict_bounds {
            validate_bounds(start_month, forecast_length)?;
        }
        Ok(build_request(start_month, forecast_length))
    }
}

/// Snapshot drawn by one frame.
#[derive(Debug, Clone)]
pub struct UiRenderData {
    pub form: FormState,
    pub state: RequestState,
    pub canvas: Canvas,
    pub endpoint: String,
    pub no_color: bool,
}
