use std::io::Write;
use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::args::OutputFormat;
use crate::domain::ForecastPoint;
use crate::error::AppResult;
use crate::http::render_forecast_json;
use crate::plot::{Canvas, format_table, plot, render_svg};

/// Prints the result in the requested format. An empty result prints no
/// table lines; JSON always prints the envelope.
pub(crate) fn write_result<W: Write>(
    out: &mut W,
    points: &[ForecastPoint],
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Table => {
            for line in format_table(points) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", render_forecast_json(points)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes the chart as SVG. Returns `false` without touching `path` when
/// there is nothing to draw.
pub(crate) async fn export_svg(
    path: &Path,
    points: &[ForecastPoint],
    canvas: Canvas,
) -> AppResult<bool> {
    let Some(geometry) = plot(points, canvas) else {
        return Ok(false);
    };
    let svg = render_svg(&geometry, canvas)?;
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(svg.as_bytes()).await?;
    writer.flush().await?;
    Ok(true)
}
