use serde::Deserialize;

use crate::args::OutputFormat;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub start_month: Option<i32>,
    pub forecast_length: Option<u32>,
    pub strict_bounds: Option<bool>,
    pub no_color: Option<bool>,
    pub format: Option<OutputFormat>,
    pub chart: Option<ChartConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub padding: Option<u32>,
    #[serde(alias = "path")]
    pub out: Option<String>,
}
