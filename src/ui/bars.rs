use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Gauge},
};

use crate::config::RenderConfig;
use crate::render::{ProgressSink, RenderError};
use crate::types::ProgressDataset;

/// Ratatui-backed rendering sink: one horizontal `Gauge` per bar, styled from
/// the dataset's color hint and the shared display options.
pub struct GaugeSink<'a, 'f> {
    pub frame: &'a mut Frame<'f>,
}

impl ProgressSink for GaugeSink<'_, '_> {
    fn render(
        &mut self,
        target: Rect,
        series: &[ProgressDataset],
        options: &RenderConfig,
    ) -> Result<(), RenderError> {
        // The gauge sink implements exactly the fixed option set: horizontal
        // bars, hidden axes.
        if options.show_axes {
            return Err(RenderError::Unsupported("visible axes"));
        }
        if !options.horizontal {
            return Err(RenderError::Unsupported("vertical bars"));
        }
        if target.width < 4 || target.height < 1 {
            return Err(RenderError::AreaTooSmall(target.width, target.height));
        }
        for dataset in series {
            // The gauge is the filled segment normalized against the hidden
            // x axis; the remainder of the row is the empty segment. NaN
            // survives clamp, and Gauge::ratio asserts on it mid-draw.
            let ratio = dataset.filled_segment.0 / options.x_max;
            let ratio = if ratio.is_finite() {
                ratio.clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (r, g, b) = dataset.color_hint;

            let mut block = Block::default();
            if options.outline {
                block = block.borders(Borders::ALL).title(dataset.id.clone());
                if options.rounded_corners {
                    block = block.border_type(BorderType::Rounded);
                }
            }

            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(Color::Rgb(r, g, b)).bg(Color::Black))
                .ratio(ratio)
                .label(dataset.label.clone());
            self.frame.render_widget(gauge, target);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::dataset;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_label_and_title_into_the_buffer() {
        let config = RenderConfig::new(true);
        let series = [dataset::build("build", 45.0, &config)];
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

        terminal
            .draw(|f| {
                let mut sink = GaugeSink { frame: f };
                sink.render(Rect::new(0, 0, 40, 3), &series, &config).unwrap();
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("45%"));
        assert!(text.contains("build"));
    }

    #[test]
    fn rejects_degenerate_target_areas() {
        let config = RenderConfig::new(true);
        let series = [dataset::build("a", 10.0, &config)];
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

        terminal
            .draw(|f| {
                let mut sink = GaugeSink { frame: f };
                let err = sink.render(Rect::new(0, 0, 2, 0), &series, &config);
                assert!(matches!(err, Err(RenderError::AreaTooSmall(2, 0))));
            })
            .unwrap();
    }

    #[test]
    fn overfull_dataset_saturates_the_gauge() {
        // With clamping disabled upstream, the sink itself must not panic on
        // a filled segment past the axis bound.
        let config = RenderConfig::new(false);
        let series = [dataset::build("a", 140.0, &config)];
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

        terminal
            .draw(|f| {
                let mut sink = GaugeSink { frame: f };
                sink.render(Rect::new(0, 0, 40, 3), &series, &config).unwrap();
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("140%"));
    }

    #[test]
    fn non_finite_dataset_renders_as_empty_bar() {
        // A NaN filled segment must not abort the draw: with raw mode and
        // the alternate screen active a panic here wedges the terminal.
        let config = RenderConfig::new(false);
        let series = [ProgressDataset {
            id: "a".to_string(),
            empty_segment: (0.0, 0.0),
            filled_segment: (f64::NAN, 0.0),
            color_hint: dataset::FILL_COLOR,
            label: "0%".to_string(),
        }];
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

        terminal
            .draw(|f| {
                let mut sink = GaugeSink { frame: f };
                sink.render(Rect::new(0, 0, 40, 3), &series, &config).unwrap();
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("0%"));
    }
}
