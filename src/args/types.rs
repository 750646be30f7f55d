use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How headless mode prints the forecast.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
