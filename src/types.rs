use serde::{Deserialize, Serialize};

/// One progress indicator supplied by the caller: a stable identifier and how
/// much of the task is complete, in percent of the x-axis range (normally
/// 0 to 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub id: String,
    pub percent: f64,
}

impl ProgressItem {
    pub fn new(id: impl Into<String>, percent: f64) -> Self {
        ProgressItem {
            id: id.into(),
            percent,
        }
    }
}

/// The two-segment series handed to the rendering sink for one bar. Built
/// from a `ProgressItem` immediately before rendering and discarded after the
/// sink returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressDataset {
    pub id: String,
    /// Start of the bar, always (0, 0).
    pub empty_segment: (f64, f64),
    /// End of the filled region: (percent, 0).
    pub filled_segment: (f64, f64),
    /// RGB fill color for the bar; every bar shares the same hint.
    pub color_hint: (u8, u8, u8),
    /// Percent formatted for display, e.g. "45%".
    pub label: String,
}
