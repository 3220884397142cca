use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "juliaset",
    about = "juliaset — render Julia set escape-time images as plain-text PGM",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct JuliaCli {
    /// Global: path to config (TOML); default: ~/.juliaset/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sweep the configured plane region and write the image
    ///
    /// Examples:
    ///   juliaset render -o julia.pgm
    ///   juliaset render --width 512 --height 512 --c-re -0.8 --c-im 0.156
    Render {
        #[command(flatten)]
        overrides: RenderOverrides,
    },

    /// Print the effective configuration (file + overrides) as TOML
    Params {
        #[command(flatten)]
        overrides: RenderOverrides,
    },
}

/// Per-field overrides layered over the config file. Any flag left
/// unset keeps the file (or default) value.
#[derive(Debug, Default, Args)]
pub struct RenderOverrides {
    /// Image width in pixels
    #[arg(long = "width", value_name = "PX")]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long = "height", value_name = "PX")]
    pub height: Option<u32>,

    /// Real value of the left edge of the image
    #[arg(long = "re-min", value_name = "RE", allow_hyphen_values = true)]
    pub re_min: Option<f64>,

    /// Real value of the right edge of the image
    #[arg(long = "re-max", value_name = "RE", allow_hyphen_values = true)]
    pub re_max: Option<f64>,

    /// Imaginary value of the bottom edge of the image
    #[arg(long = "im-min", value_name = "IM", allow_hyphen_values = true)]
    pub im_min: Option<f64>,

    /// Imaginary value of the top edge of the image
    #[arg(long = "im-max", value_name = "IM", allow_hyphen_values = true)]
    pub im_max: Option<f64>,

    /// Iterations before a point is assumed bounded
    #[arg(long = "iterations", value_name = "N")]
    pub iterations: Option<u32>,

    /// Escape radius; iteration halts once |z|^2 exceeds its square
    #[arg(long = "radius", value_name = "R")]
    pub radius: Option<f64>,

    /// Real part of the Julia constant c
    #[arg(long = "c-re", value_name = "RE", allow_hyphen_values = true)]
    pub c_re: Option<f64>,

    /// Imaginary part of the Julia constant c
    #[arg(long = "c-im", value_name = "IM", allow_hyphen_values = true)]
    pub c_im: Option<f64>,

    /// Output file path (.pgm)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Append to the output file instead of truncating it.
    /// Repeated runs accumulate concatenated images in one file.
    #[arg(long = "append", action = ArgAction::SetTrue)]
    pub append: bool,

    /// Suppress per-row progress lines
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    pub quiet: bool,
}
