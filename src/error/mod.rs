mod app;
mod config;
mod request;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use request::{RequestError, RequestErrorKind};
pub use validation::{FormField, ValidationError};
