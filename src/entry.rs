use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches};
use tracing::debug;

use crate::app::{run_headless, run_interactive};
use crate::args::ForecastArgs;
use crate::config::{Settings, load_config, resolve_settings};
use crate::error::AppResult;
use crate::http::HttpPredictionClient;
use crate::orchestrator::Orchestrator;

pub(crate) fn run() -> AppResult<()> {
    let args = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color, !args.no_ui);

    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&args, config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(settings))
}

fn parse_args() -> AppResult<ForecastArgs> {
    let matches = ForecastArgs::command().get_matches();
    Ok(ForecastArgs::from_arg_matches(&matches)?)
}

async fn run_async(settings: Settings) -> AppResult<()> {
    let client = HttpPredictionClient::new(settings.endpoint.clone())?;
    let orchestrator = Arc::new(Orchestrator::new(Arc::new(client)));

    if settings.no_ui {
        debug!("Running headless");
        run_headless(&settings, &orchestrator).await
    } else {
        run_interactive(&settings, orchestrator).await
    }
}
