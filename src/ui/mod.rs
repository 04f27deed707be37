pub mod bars;
pub mod input;
pub mod terminal;

use std::io;

use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::RenderConfig;
use crate::render;
use crate::types::ProgressItem;

// Re-export the main public functions
pub use terminal::{restore_terminal, setup_terminal};

/// Draw one full frame: title, one row per item in supplied order, footer
/// reporting how many bars drew.
pub fn render_ui<B: Backend>(
    items: &[ProgressItem],
    config: &RenderConfig,
    terminal: &mut Terminal<B>,
) -> Result<(), io::Error> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(config.grid_margin)
            .constraints(
                [
                    Constraint::Length(3), // Title
                    Constraint::Min(0),    // Bars
                    Constraint::Length(3), // Footer
                ]
                .as_ref(),
            )
            .split(f.size());

        let title = Block::default().title("Progress Board").borders(Borders::ALL);
        f.render_widget(title, chunks[0]);

        let areas = bar_areas(chunks[1], items.len(), config);
        let rendered = {
            let mut sink = bars::GaugeSink { frame: &mut *f };
            render::render_all(&mut sink, items, &areas, config)
        };

        let footer = Paragraph::new(footer_text(rendered, items.len()))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, chunks[2]);
    })?;
    Ok(())
}

fn footer_text(rendered: usize, total: usize) -> String {
    format!("{}/{} bars rendered | Press 'q' to quit", rendered, total)
}

/// One fixed-height row per bar, stacked top to bottom in item order.
pub fn bar_areas(area: Rect, count: usize, config: &RenderConfig) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(config.row_height); count];
    constraints.push(Constraint::Min(0)); // leftover space below the bars
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .iter()
        .take(count)
        .copied()
        .collect()
}
