//! Pixel renderer: one black pixel per term on a white PNG.
//!
//! Writes two images:
//!
//! | File            | Size                         | Pixels |
//! |-----------------|------------------------------|--------|
//! | `fibonacci.png` | len × (max + 10), capped     | `(i, max - term)` |
//! | `primes.png`    | len × 10                     | `(i, 5)` for each prime index |
//!
//! When `max + 10` exceeds the height cap, rows are scaled linearly into the
//! capped image.

use crate::engine::report::SequenceReport;
use crate::error::{FibPrimeError, Result};
use crate::render_traits::{ensure_drawable, Renderer};
use crate::types::RenderBackend;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SEQUENCE_FILE: &str = "fibonacci.png";
pub const PRIMES_FILE: &str = "primes.png";

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Headroom above the largest term in an unscaled image
const HEADROOM: u64 = 10;
const PRIME_STRIP_HEIGHT: u32 = 10;
const PRIME_ROW: u32 = 5;

/// PNG pixel renderer
#[derive(Debug, Clone)]
pub struct PixelRenderer {
    max_height: u32,
}

impl PixelRenderer {
    pub fn new(max_height: u32) -> Self {
        Self {
            max_height: max_height.max(1),
        }
    }

    /// Draw the sequence image.
    pub fn sequence_image(&self, sequence: &[u64]) -> Result<RgbImage> {
        let width = image_width(sequence)?;
        let max = sequence.iter().copied().max().unwrap_or(0);
        let natural = max.saturating_add(HEADROOM);
        let scaled = natural > u64::from(self.max_height);
        let height = if scaled {
            self.max_height
        } else {
            natural as u32
        };

        debug!(width, height, scaled, "Drawing sequence image");

        let mut img = RgbImage::from_pixel(width, height, WHITE);
        for (index, &term) in sequence.iter().enumerate() {
            let row = if scaled {
                let span = f64::from(height - 1);
                ((1.0 - term as f64 / max as f64) * span).round() as u32
            } else {
                (max - term) as u32
            };
            img.put_pixel(index as u32, row, BLACK);
        }

        Ok(img)
    }

    /// Draw the prime strip image.
    pub fn primes_image(&self, sequence: &[u64], prime_positions: &[usize]) -> Result<RgbImage> {
        let width = image_width(sequence)?;
        let mut img = RgbImage::from_pixel(width, PRIME_STRIP_HEIGHT, WHITE);
        for &index in prime_positions {
            match u32::try_from(index) {
                Ok(x) if x < width => img.put_pixel(x, PRIME_ROW, BLACK),
                _ => debug!(index, width, "Skipping prime index outside the sequence"),
            }
        }
        Ok(img)
    }
}

impl Renderer for PixelRenderer {
    fn backend(&self) -> RenderBackend {
        RenderBackend::Pixel
    }

    fn render(&self, report: &SequenceReport, output_dir: &Path) -> Result<Vec<PathBuf>> {
        ensure_drawable(report, self.backend())?;

        let sequence_path = output_dir.join(SEQUENCE_FILE);
        save(&self.sequence_image(&report.sequence)?, &sequence_path)?;

        let primes_path = output_dir.join(PRIMES_FILE);
        save(
            &self.primes_image(&report.sequence, &report.prime_positions)?,
            &primes_path,
        )?;

        Ok(vec![sequence_path, primes_path])
    }
}

fn image_width(sequence: &[u64]) -> Result<u32> {
    match u32::try_from(sequence.len()) {
        Ok(0) => Err(FibPrimeError::render("cannot draw an empty sequence")),
        Ok(width) => Ok(width),
        Err(_) => Err(FibPrimeError::render("sequence too long for an image row")),
    }
}

fn save(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)
        .map_err(|e| FibPrimeError::render(format!("Failed to write {}: {}", path.display(), e)))
}
