use num_complex::Complex;
use std::io::{self, Write};

use crate::config::RenderConfig;
use crate::core::escape::{shade, to_intensity};
use crate::core::pgm;

/// Progress report handed to the caller every 100 rows.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    /// 1-based row number just completed.
    pub row: u32,
    /// Percentage of the vertical extent swept so far.
    pub percent: f64,
}

/// Single-pass, single-threaded sweep of a rectangular plane region.
/// Everything is derived up front from the config; no state survives
/// a run.
pub struct Renderer {
    width: u32,
    height: u32,
    re_min: f64,
    im_min: f64,
    im_max: f64,
    x_delta: f64,
    y_delta: f64,
    radius_squared: f64,
    color_decrement: f64,
    c: Complex<f64>,
}

impl Renderer {
    pub fn new(cfg: &RenderConfig) -> Self {
        Renderer {
            width: cfg.width,
            height: cfg.height,
            re_min: cfg.re_min,
            im_min: cfg.im_min,
            im_max: cfg.im_max,
            x_delta: (cfg.re_max - cfg.re_min) / cfg.width as f64,
            y_delta: (cfg.im_max - cfg.im_min) / cfg.height as f64,
            radius_squared: cfg.escape_radius * cfg.escape_radius,
            color_decrement: 250.0 / cfg.max_iterations as f64,
            c: cfg.julia_constant(),
        }
    }

    /// Shade one row of pixels. Coordinates come from
    /// `base + index * delta` rather than a running sum, so every row
    /// is reproducible independent of sweep order.
    pub fn shade_row(&self, row: u32) -> Vec<u8> {
        let y = self.im_min + row as f64 * self.y_delta;
        (0..self.width)
            .map(|col| {
                let x = self.re_min + col as f64 * self.x_delta;
                let n = shade(
                    Complex::new(x, y),
                    self.c,
                    self.radius_squared,
                    self.color_decrement,
                );
                to_intensity(n)
            })
            .collect()
    }

    /// Sweep all rows into `out`, invoking `progress` every 100 rows.
    /// Returns the number of pixels written.
    pub fn render<W: Write, F: FnMut(Progress)>(
        &self,
        out: &mut W,
        mut progress: F,
    ) -> io::Result<u64> {
        pgm::write_header(out, self.width, self.height)?;
        for row in 0..self.height {
            if (row + 1) % 100 == 0 {
                let y = self.im_min + row as f64 * self.y_delta;
                progress(Progress {
                    row: row + 1,
                    percent: 100.0 * (y - self.im_min) / (self.im_max - self.im_min),
                });
            }
            let pixels = self.shade_row(row);
            pgm::write_row(out, &pixels)?;
        }
        out.flush()?;
        Ok(self.width as u64 * self.height as u64)
    }
}
