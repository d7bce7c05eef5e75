//! Line chart renderer (SVG).
//!
//! Draws the sequence as a line over its index, with prime terms circled.

use crate::engine::report::SequenceReport;
use crate::error::{FibPrimeError, Result};
use crate::render_traits::{ensure_drawable, Renderer};
use crate::renderers::axis_max;
use crate::types::RenderBackend;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

pub const CHART_FILE: &str = "fibonacci_chart.svg";

/// 2D chart renderer
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl ChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Renderer for ChartRenderer {
    fn backend(&self) -> RenderBackend {
        RenderBackend::Chart
    }

    fn render(&self, report: &SequenceReport, output_dir: &Path) -> Result<Vec<PathBuf>> {
        ensure_drawable(report, self.backend())?;

        let path = output_dir.join(CHART_FILE);
        draw_chart(report, &path, (self.width, self.height)).map_err(|e| {
            FibPrimeError::render(format!("Failed to draw {}: {}", path.display(), e))
        })?;

        Ok(vec![path])
    }
}

fn draw_chart(
    report: &SequenceReport,
    out_path: &Path,
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn Error>> {
    let sequence = &report.sequence;
    let x_max = axis_max(sequence.len().saturating_sub(1) as f64);
    let y_max = axis_max(report.max_value().unwrap_or(0) as f64) * 1.05;

    let root = SVGBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Fibonacci Sequence", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0f64..x_max, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Index")
        .y_desc("Fibonacci Number")
        .draw()?;

    let line = sequence
        .iter()
        .enumerate()
        .map(|(index, &term)| (index as f64, term as f64));
    chart
        .draw_series(LineSeries::new(line, BLUE))?
        .label("sequence")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    let primes = report
        .prime_positions
        .iter()
        .filter_map(|&index| sequence.get(index).map(|&term| (index, term)))
        .map(|(index, term)| Circle::new((index as f64, term as f64), 4, RED.filled()));
    chart
        .draw_series(primes)?
        .label("primes")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
