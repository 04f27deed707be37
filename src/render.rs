use log::warn;
use ratatui::layout::Rect;
use thiserror::Error;

use crate::config::RenderConfig;
use crate::dataset;
use crate::types::{ProgressDataset, ProgressItem};

/// Errors a rendering sink can report for a single bar.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("target area too small: {0}x{1}")]
    AreaTooSmall(u16, u16),
    #[error("unsupported display option: {0}")]
    Unsupported(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The charting dependency behind a seam: draws one bar from a target area,
/// a single-series slice, and the shared display options.
pub trait ProgressSink {
    fn render(
        &mut self,
        target: Rect,
        series: &[ProgressDataset],
        options: &RenderConfig,
    ) -> Result<(), RenderError>;
}

/// Render every item in supplied order, one sink call per item, each with a
/// freshly built single-series dataset. A bar that fails to render is logged
/// and skipped so the rest still draw. Returns the number of bars drawn.
pub fn render_all(
    sink: &mut dyn ProgressSink,
    items: &[ProgressItem],
    areas: &[Rect],
    config: &RenderConfig,
) -> usize {
    let mut rendered = 0;
    for (item, area) in items.iter().zip(areas) {
        let series = [dataset::build(&item.id, item.percent, config)];
        match sink.render(*area, &series, config) {
            Ok(()) => rendered += 1,
            Err(e) => warn!("{}: render failed: {}", item.id, e),
        }
    }
    rendered
}
