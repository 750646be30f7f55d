//! Configuration loading and resolution.
mod apply;
mod loader;
pub mod types;


pub use apply::{Settings, resolve_settings};
pub use loader::load_config;
