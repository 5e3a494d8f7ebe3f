use anyhow::{Context, Result};
use clap::Parser;
use rasterboard::Config;
use rasterboard::export::{self, ExportFormat};
use rasterboard::input::InputState;
use rasterboard::script::Script;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("RASTERBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "rasterboard")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Raster whiteboard engine with snapshot undo/redo"
)]
struct Cli {
    /// Gesture script to replay (TOML with [[step]] entries)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Where to write the image (defaults to the configured save directory)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Export format: png, jpeg, or svg (defaults to the configured format)
    #[arg(long, short = 'f', value_name = "FORMAT")]
    format: Option<ExportFormat>,

    /// Use this config file instead of ~/.config/rasterboard/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        // No script: show usage
        println!("rasterboard: Raster whiteboard engine with snapshot undo/redo");
        println!();
        println!("Usage:");
        println!("  rasterboard --script board.toml              Replay a gesture script");
        println!("  rasterboard --script board.toml -o out.png   Write the result to a file");
        println!("  rasterboard --help                           Show help");
        println!();
        println!("Scripts are TOML files made of [[step]] tables, for example:");
        println!("  [[step]]");
        println!("  action = \"tool\"");
        println!("  tool = \"line\"");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;

    let mut state = InputState::from_config(&config);
    state.resize(cli.width, cli.height);

    let summary = script.run(&mut state).context("Script replay failed")?;
    log::info!(
        "Replayed {} steps ({} rejected undo/redo)",
        summary.steps,
        summary.rejected
    );

    // A script that ends mid-gesture behaves as if the pointer left the board
    state.on_pointer_leave();
    state.blur_text();

    let format = cli.format.unwrap_or(config.export.default_format);
    let bytes = export::export_image(&state.surface, format, config.export.jpeg_quality)
        .with_context(|| format!("Failed to export {format} image"))?;

    let path = match cli.output {
        Some(path) => {
            export::write_export(&bytes, &path)?;
            path
        }
        None => export::save_export(&bytes, format, &config.export)?,
    };

    println!("Saved {}", path.display());
    Ok(())
}
