//! 3D plot renderer (SVG).
//!
//! Plots `(index, term, index / 10)` as a single projected curve.

use crate::engine::report::SequenceReport;
use crate::error::{FibPrimeError, Result};
use crate::render_traits::{ensure_drawable, Renderer};
use crate::renderers::axis_max;
use crate::types::RenderBackend;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

pub const PLOT3D_FILE: &str = "fibonacci_3d.svg";

/// Height coordinate of the term at `index`
pub fn height_of(index: usize) -> f64 {
    index as f64 / 10.0
}

/// 3D curve renderer
#[derive(Debug, Clone)]
pub struct Plot3dRenderer {
    width: u32,
    height: u32,
}

impl Plot3dRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Renderer for Plot3dRenderer {
    fn backend(&self) -> RenderBackend {
        RenderBackend::Plot3d
    }

    fn render(&self, report: &SequenceReport, output_dir: &Path) -> Result<Vec<PathBuf>> {
        ensure_drawable(report, self.backend())?;

        let path = output_dir.join(PLOT3D_FILE);
        draw_plot3d(report, &path, (self.width, self.height)).map_err(|e| {
            FibPrimeError::render(format!("Failed to draw {}: {}", path.display(), e))
        })?;

        Ok(vec![path])
    }
}

fn draw_plot3d(
    report: &SequenceReport,
    out_path: &Path,
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn Error>> {
    let sequence = &report.sequence;
    let last_index = sequence.len().saturating_sub(1);
    let x_max = axis_max(last_index as f64);
    let y_max = axis_max(report.max_value().unwrap_or(0) as f64);
    let z_max = axis_max(height_of(last_index));

    let root = SVGBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Fibonacci Sequence 3D Plot", ("sans-serif", 20))
        .margin(20)
        .build_cartesian_3d(0.0f64..x_max, 0.0f64..y_max, 0.0f64..z_max)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.3;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart.configure_axes().draw()?;

    let curve = sequence
        .iter()
        .enumerate()
        .map(|(index, &term)| (index as f64, term as f64, height_of(index)));
    chart.draw_series(LineSeries::new(curve, BLUE.stroke_width(2)))?;

    root.present()?;
    Ok(())
}
