//! Outline Stepper CLI.
//!
//! Liest eine Outline (JSON-Befehlsliste) und optional eine Optionen-Datei (TOML),
//! lässt den konfigurierten Effekt laufen und gibt das Ergebnis aus.

use anyhow::{Context, Result};
use clap::Parser;
use outline_stepper::{step_outline, Outline, StepOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();
    run(&args)
}

/// Kommandozeilen-Argumente.
#[derive(Debug, Parser)]
#[command(version, about = "Läuft eine Outline in Steps ab und zeichnet einen Effekt")]
struct CliArgs {
    /// Outline als JSON-Befehlsliste
    outline: PathBuf,

    /// Optionen-Datei (TOML); fehlt sie, gelten die Standardwerte
    options: Option<PathBuf>,

    /// Ergebnis als JSON statt als SVG-Pfaddaten ausgeben
    #[arg(long)]
    json: bool,
}

fn run(args: &CliArgs) -> Result<()> {
    log::info!("Outline Stepper v{} startet...", env!("CARGO_PKG_VERSION"));

    let content = std::fs::read_to_string(&args.outline)
        .with_context(|| format!("Outline nicht lesbar: {}", args.outline.display()))?;
    let outline = Outline::from_json_str(&content)?;

    let options = match &args.options {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
            StepOptions::from_toml_str(&content)?
        }
        None => StepOptions::default(),
    };
    let visitor = options.build_visitor()?;

    log::info!(
        "{} Befehle, {} Konturen, Effekt '{}', Pacing {:?}",
        outline.len(),
        outline.contour_count(),
        options.effect.kind(),
        options.pacing
    );

    let result = step_outline(&outline, options.pacing, visitor)?;
    log::info!("Ergebnis: {} Befehle", result.len());

    if args.json {
        println!("{}", result.to_json_string()?);
    } else {
        println!("{}", result.to_svg_path_data());
    }
    Ok(())
}
