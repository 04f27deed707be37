mod config;
mod dataset;
mod render;
mod types;
mod ui;

use std::io;
use std::process::exit;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use config::{Cli, RenderConfig, parse_item};
use types::ProgressItem;

fn load_items(cli: &Cli) -> Result<Vec<ProgressItem>, String> {
    if let Some(path) = &cli.file {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        let items: Vec<ProgressItem> = serde_json::from_str(&raw)
            .map_err(|e| format!("cannot parse {}: {}", path.display(), e))?;
        return Ok(items);
    }
    cli.items
        .iter()
        .enumerate()
        .map(|(i, arg)| parse_item(arg, i))
        .collect()
}

fn show_usage_help() {
    eprintln!("❌ No progress items specified!");
    eprintln!();
    eprintln!("💡 Usage examples:");
    eprintln!("   progress-board build=45 tests=80 docs=10     # Named bars");
    eprintln!("   progress-board 25 50 75                      # Bare percents");
    eprintln!("   progress-board --file progress.json          # Items from a JSON file");
    eprintln!("   progress-board --json build=45               # Print datasets instead of drawing");
    eprintln!();
    eprintln!("📖 Use --help for more options");
}

fn main() -> Result<(), io::Error> {
    env_logger::init();
    let cli = Cli::parse();

    let items = match load_items(&cli) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("❌ {}", e);
            exit(2);
        }
    };

    let config = RenderConfig::new(!cli.no_clamp);

    if cli.json {
        let datasets: Vec<_> = items
            .iter()
            .map(|item| dataset::build(&item.id, item.percent, &config))
            .collect();
        // Same pair the sink receives: the series plus the shared options.
        let out = serde_json::json!({
            "series": datasets,
            "options": config,
        });
        match serde_json::to_string_pretty(&out) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("❌ Error serializing datasets: {}", e);
                exit(1);
            }
        }
        return Ok(());
    }

    if items.is_empty() {
        show_usage_help();
        return Ok(());
    }

    let mut terminal = ui::setup_terminal()?;

    loop {
        ui::render_ui(&items, &config, &mut terminal)?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && ui::input::handle_key_event(key.code) {
                    break;
                }
            }
        }
    }

    ui::restore_terminal(&mut terminal)?;
    Ok(())
}
