use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::types::ProgressItem;

#[derive(Parser)]
#[command(name = "progress-board", version, about)]
pub struct Cli {
    /// Progress items as `id=percent` pairs or bare percent values
    pub items: Vec<String>,
    /// Read items from a JSON file: [{"id": "build", "percent": 45}, ...]
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Print the datasets as JSON instead of drawing them
    #[arg(long)]
    pub json: bool,
    /// Pass out-of-range percents through to the sink instead of clamping
    #[arg(long)]
    pub no_clamp: bool,
}

/// Parse one positional item: `id=percent`, or a bare percent which gets a
/// generated `task-N` id from its position.
pub fn parse_item(arg: &str, index: usize) -> Result<ProgressItem, String> {
    let (id, raw) = match arg.split_once('=') {
        Some((id, raw)) => (id.to_string(), raw),
        None => (format!("task-{}", index + 1), arg),
    };
    let percent: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid percent '{}' in item '{}'", raw, arg))?;
    Ok(ProgressItem { id, percent })
}

/// How a bar sits within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarAlign {
    Center,
}

/// Fixed display options shared by every bar on the board. Built once at
/// startup and read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderConfig {
    /// Upper x-axis bound; the axis itself is never drawn.
    pub x_max: f64,
    /// Upper y-axis bound; the axis itself is never drawn.
    pub y_max: f64,
    pub show_axes: bool,
    pub horizontal: bool,
    pub align: BarAlign,
    /// Terminal rows each bar occupies, outline included.
    pub row_height: u16,
    /// Thin outline around each bar.
    pub outline: bool,
    /// Round the outline corners (the cosmetic corner-radius pass).
    pub rounded_corners: bool,
    /// Extra margin between the board and the bars; suppressed by default.
    pub grid_margin: u16,
    /// Clamp incoming percents into [0, x_max] before building datasets.
    pub clamp: bool,
}

impl RenderConfig {
    pub fn new(clamp: bool) -> Self {
        RenderConfig {
            x_max: 100.0,
            y_max: 1.0,
            show_axes: false,
            horizontal: true,
            align: BarAlign::Center,
            row_height: 3,
            outline: true,
            rounded_corners: true,
            grid_margin: 0,
            clamp,
        }
    }
}
