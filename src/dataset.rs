use log::warn;

use crate::config::RenderConfig;
use crate::types::ProgressDataset;

/// Fill color shared by every bar (RGB).
pub const FILL_COLOR: (u8, u8, u8) = (0, 180, 255);

/// Build the two-segment series for one bar: the empty origin point and the
/// filled region ending at `percent` on the hidden x axis.
pub fn build(id: &str, percent: f64, config: &RenderConfig) -> ProgressDataset {
    // Non-finite values become 0 even with clamping disabled; the sink
    // cannot draw them.
    let percent = if !percent.is_finite() {
        warn!("{}: non-finite percent, treating as 0", id);
        0.0
    } else if config.clamp {
        clamp_percent(id, percent, config.x_max)
    } else {
        percent
    };
    ProgressDataset {
        id: id.to_string(),
        empty_segment: (0.0, 0.0),
        filled_segment: (percent, 0.0),
        color_hint: FILL_COLOR,
        label: format_percent(percent),
    }
}

fn clamp_percent(id: &str, percent: f64, max: f64) -> f64 {
    if !(0.0..=max).contains(&percent) {
        warn!("{}: percent {} outside 0..{}, clamping", id, percent, max);
    }
    percent.clamp(0.0, max)
}

/// Format a percent for display: whole values without a decimal point,
/// fractional values as-is, always with a trailing '%'.
pub fn format_percent(percent: f64) -> String {
    // The equality also catches -0.0, which would otherwise print as "-0%".
    if percent == 0.0 {
        return "0%".to_string();
    }
    format!("{}%", percent)
}
