use anyhow::{ensure, Context, Result};
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::RenderOverrides;

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.juliaset\config.toml on Windows; ~/.juliaset/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".juliaset").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// All knobs for one rendering run. Deserialized from TOML; any field
/// missing from the file keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub julia_re: f64,
    pub julia_im: f64,
    pub output_path: PathBuf,
    pub append: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 2048,
            height: 2048,
            re_min: -2.0,
            re_max: 2.0,
            im_min: -2.0,
            im_max: 2.0,
            max_iterations: 255,
            escape_radius: 2.0,
            julia_re: 0.3,
            julia_im: 0.575,
            output_path: PathBuf::from("juliaset.pgm"),
            append: false,
        }
    }
}

impl RenderConfig {
    /// Load from a TOML file; `None` (or a nonexistent path) yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(RenderConfig::default());
        };
        if !path.exists() {
            return Ok(RenderConfig::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: RenderConfig = toml::from_str(&text)
            .with_context(|| format!("parse config '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Layer CLI flags over the file-derived values.
    pub fn apply_overrides(&mut self, ov: &RenderOverrides) {
        if let Some(v) = ov.width {
            self.width = v;
        }
        if let Some(v) = ov.height {
            self.height = v;
        }
        if let Some(v) = ov.re_min {
            self.re_min = v;
        }
        if let Some(v) = ov.re_max {
            self.re_max = v;
        }
        if let Some(v) = ov.im_min {
            self.im_min = v;
        }
        if let Some(v) = ov.im_max {
            self.im_max = v;
        }
        if let Some(v) = ov.iterations {
            self.max_iterations = v;
        }
        if let Some(v) = ov.radius {
            self.escape_radius = v;
        }
        if let Some(v) = ov.c_re {
            self.julia_re = v;
        }
        if let Some(v) = ov.c_im {
            self.julia_im = v;
        }
        if let Some(v) = &ov.out {
            self.output_path = v.clone();
        }
        if ov.append {
            self.append = true;
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0, "width must be positive");
        ensure!(self.height > 0, "height must be positive");
        ensure!(
            self.re_max > self.re_min,
            "re_max ({}) must exceed re_min ({})",
            self.re_max,
            self.re_min
        );
        ensure!(
            self.im_max > self.im_min,
            "im_max ({}) must exceed im_min ({})",
            self.im_max,
            self.im_min
        );
        ensure!(self.max_iterations > 0, "max_iterations must be positive");
        ensure!(self.escape_radius > 0.0, "escape_radius must be positive");
        Ok(())
    }

    pub fn julia_constant(&self) -> Complex<f64> {
        Complex::new(self.julia_re, self.julia_im)
    }
}
