mod export;
mod headless;
mod interactive;


pub(crate) use headless::run_headless;
pub(crate) use interactive::run_interactive;
