use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_channel::TryRecvError;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use booxi_theme_editor::config::{self, EditorConfig};
use booxi_theme_editor::editor::{
    EventOutcome, FsHost, RecordingHost, StyleMap, ThemeController,
};
use booxi_theme_editor::scheduler::SystemClock;
use booxi_theme_editor::theme::{find_preset, PRESETS};
use booxi_theme_editor::{import_reader, logging, stdin_commands};

/// Selector used when printing the preview's properties
const WIDGET_SELECTOR: &str = ".booking-widget";

/// How long the session loop sleeps when no input is waiting
const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Parser)]
#[command(name = "booxi-theme-editor", about = "Booking widget theme editor", version)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in presets
    Presets,
    /// Write a theme document
    Export {
        /// Preset to export instead of the default
        #[arg(long)]
        preset: Option<String>,
        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import a theme file and print the resulting style properties
    Apply { file: PathBuf },
    /// Drive an editor from JSONL events on stdin
    Session {
        /// Where exported themes are written
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let _guard = logging::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    match cli.command {
        Command::Presets => list_presets(&config),
        Command::Export { preset, out } => export(config, preset, out),
        Command::Apply { file } => apply(config, &file),
        Command::Session { out } => session(config, out),
    }
}

fn list_presets(config: &EditorConfig) -> Result<()> {
    for preset in PRESETS.iter() {
        println!(
            "{:<8} {} {} {}  {:<8} {:>2}px  radius {:>2}px  padding {:>2}px",
            preset.name,
            preset.primary,
            preset.secondary,
            preset.accent,
            preset.font_family,
            preset.font_size,
            preset.border_radius,
            preset.padding,
        );
    }

    let export = config.export_shortcut()?;
    let reset = config.reset_shortcut()?;
    println!();
    println!("Export: {}  Reset: {}", export.display(), reset.display());
    Ok(())
}

fn export(config: EditorConfig, preset: Option<String>, out: Option<PathBuf>) -> Result<()> {
    let dir = out.unwrap_or_else(|| config.resolved_export_dir());
    let mut controller = ThemeController::new(
        config,
        StyleMap::new(),
        FsHost::new(dir),
        Box::new(SystemClock),
    );

    if let Some(name) = preset {
        if find_preset(&name).is_none() {
            let known: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
            bail!("Unknown preset '{}' (expected one of: {})", name, known.join(", "));
        }
        controller.apply_preset(&name);
    }

    if controller.export_theme().is_none() {
        bail!("Failed to write theme file to {}", controller.host().dir().display());
    }
    if let Some(path) = controller.host().saved().last() {
        println!("{}", path.display());
    }
    Ok(())
}

fn apply(config: EditorConfig, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut controller = ThemeController::new(
        config,
        StyleMap::new(),
        RecordingHost::new(),
        Box::new(SystemClock),
    );
    if !controller.import_text(&text) {
        let message = controller
            .host()
            .alerts
            .first()
            .cloned()
            .unwrap_or_default();
        bail!("{}: {}", file.display(), message);
    }

    println!("{}", controller.preview().to_css_rule(WIDGET_SELECTOR));
    Ok(())
}

fn session(config: EditorConfig, out: Option<PathBuf>) -> Result<()> {
    let dir = out.unwrap_or_else(|| config.resolved_export_dir());
    let mut controller = ThemeController::new(
        config,
        StyleMap::new(),
        FsHost::new(&dir),
        Box::new(SystemClock),
    );
    info!(
        dir = %dir.display(),
        export = %controller.export_shortcut(),
        reset = %controller.reset_shortcut(),
        "Starting stdin session"
    );
    let events = stdin_commands::start_stdin_listener();
    let (read_tx, read_rx) = import_reader::read_channel();
    let mut stdin_open = true;

    loop {
        let mut idle = true;

        if stdin_open {
            match events.try_recv() {
                Ok(event) => {
                    idle = false;
                    if let EventOutcome::ImportStarted(pending) = controller.handle(event) {
                        import_reader::spawn_read(pending, read_tx.clone());
                    }
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    debug!("Stdin closed");
                    stdin_open = false;
                }
            }
        }

        if let Ok(read) = read_rx.try_recv() {
            idle = false;
            controller.complete_import(read.ticket, read.result);
        }

        controller.tick();

        // Let an in-flight import land before exiting
        if !stdin_open && !controller.is_import_in_progress() {
            break;
        }
        if idle {
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    info!(exports = controller.host().saved().len(), "Session finished");
    println!("{}", controller.preview().to_css_rule(WIDGET_SELECTOR));
    Ok(())
}
