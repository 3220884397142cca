mod cli;
mod commands;
mod config;
mod core;

use clap::Parser; // trait import enables JuliaCli::parse()

use crate::cli::{Command, JuliaCli, RenderOverrides};

fn main() -> anyhow::Result<()> {
    let args = JuliaCli::parse();

    match args.cmd {
        Some(Command::Render { overrides }) => {
            commands::render::render_pipeline(&args.config, &overrides)
        }
        Some(Command::Params { overrides }) => commands::params::main(&args.config, &overrides),
        // No subcommand: render with the effective config.
        None => commands::render::render_pipeline(&args.config, &RenderOverrides::default()),
    }
}
