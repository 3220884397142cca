use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::RenderOverrides;
use crate::config::{RenderConfig, resolve_config_path};
use crate::core::renderer::Renderer;

/// Resolve config + overrides, run the sweep, write the image.
pub fn render_pipeline(cli_config: &Option<PathBuf>, overrides: &RenderOverrides) -> Result<()> {
    let cfg = load_effective_config(cli_config, overrides)?;
    let renderer = Renderer::new(&cfg);

    // Truncate by default; --append (or the config field) restores the
    // historic accumulate-in-place behavior, which concatenates whole
    // images, headers included, into one file.
    let mut open = OpenOptions::new();
    open.create(true).write(true);
    if cfg.append {
        open.append(true);
    } else {
        open.truncate(true);
    }
    if let Some(parent) = cfg.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    let file = open
        .open(&cfg.output_path)
        .with_context(|| format!("open output '{}'", cfg.output_path.display()))?;
    let mut out = BufWriter::new(file);

    let quiet = overrides.quiet;
    let begin = Instant::now();
    // Stream errors surface here instead of passing unnoticed; a
    // partial file always comes with a diagnostic.
    let pixels = renderer
        .render(&mut out, |p| {
            if !quiet {
                println!("Completed row #{}. {:.2}% done with image.", p.row, p.percent);
            }
        })
        .with_context(|| format!("write image '{}'", cfg.output_path.display()))?;
    let elapsed = begin.elapsed().as_secs_f64();

    println!("Computed {} pixels in {:.3} seconds (CPU time)!", pixels, elapsed);
    println!(
        "{} {}",
        "ok:".green().bold(),
        format!("Wrote Julia set image to '{}'.", cfg.output_path.display())
    );
    Ok(())
}

/// File config (warning + defaults when absent) with CLI flags layered
/// on top, validated.
pub fn load_effective_config(
    cli_config: &Option<PathBuf>,
    overrides: &RenderOverrides,
) -> Result<RenderConfig> {
    let cfg_path = resolve_config_path(cli_config);
    if let (Some(p), Some(explicit)) = (&cfg_path, cli_config) {
        if !p.exists() {
            eprintln!(
                "{} Could not read '{}', using default parameters.",
                "warn:".yellow().bold(),
                explicit.display()
            );
        }
    }
    let mut cfg = RenderConfig::load(cfg_path.as_deref())?;
    cfg.apply_overrides(overrides);
    cfg.validate()?;
    Ok(cfg)
}
