use anyhow::{Context, Result};
use clap::Parser;

use gridsheet::cli::CliArgs;
use gridsheet::clipboard::SystemClipboard;
use gridsheet::grid::{detect_delimiter, parse_grid, CellFlags};
use gridsheet::script::{grid_to_tsv, parse_script, ClipboardBackend, ScriptHost};
use gridsheet::{Props, SheetConfig};

fn main() -> Result<()> {
    gridsheet::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => SheetConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SheetConfig::load(),
    };

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let delimiter = args
        .resolve_delimiter()
        .unwrap_or_else(|| detect_delimiter(&content));
    let mut grid = parse_grid(&content, delimiter)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    if args.read_only_header || config.read_only_header {
        if let Some(header) = grid.first_mut() {
            for cell in header.iter_mut() {
                cell.read_only = true;
            }
        }
    }
    tracing::info!(
        rows = grid.len(),
        read_only = grid.iter().flatten().filter(|c| c.read_only()).count(),
        "Loaded {}",
        args.file.display()
    );

    let props = Props::for_cells()
        .key_classes(config.key_classes.clone())
        .build()?;

    let clipboard = if args.system_clipboard || config.system_clipboard {
        ClipboardBackend::System(SystemClipboard::new())
    } else {
        ClipboardBackend::Memory(None)
    };

    let mut host = ScriptHost::new(grid, props, clipboard);

    if let Some(script_path) = &args.script {
        let script = std::fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read script {}", script_path.display()))?;
        let events = parse_script(&script)
            .with_context(|| format!("Failed to parse script {}", script_path.display()))?;
        host.run(&events)?;
    }

    println!("{}", grid_to_tsv(host.grid()));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&host.report())?);
    }

    Ok(())
}
