//! Pluggable renderer contract.
//!
//! Every output format implements `Renderer`. The engine hands over a finished
//! `SequenceReport`; a renderer only decides how to draw it and which files to
//! write.
//!
//! # Contract
//!
//! - `render()` writes into `output_dir` and returns every path it wrote.
//! - An empty report is refused with `FibPrimeError::Render`; no zero-sized
//!   artifacts are produced.
//!
//! # Example
//!
//! ```ignore
//! use fibprime::engine::report::SequenceReport;
//! use fibprime::renderers::pixel::PixelRenderer;
//! use fibprime::render_traits::Renderer;
//!
//! let report = SequenceReport::build(10)?;
//! let written = PixelRenderer::new(1024).render(&report, Path::new("out"))?;
//! // ["out/fibonacci.png", "out/primes.png"]
//! ```

use crate::engine::report::SequenceReport;
use crate::error::{FibPrimeError, Result};
use crate::types::RenderBackend;
use std::path::{Path, PathBuf};

/// Trait for sequence renderers.
pub trait Renderer {
    /// Which backend this renderer implements.
    fn backend(&self) -> RenderBackend;

    /// Draw `report` into `output_dir`.
    fn render(&self, report: &SequenceReport, output_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Reject reports with nothing to draw.
pub fn ensure_drawable(report: &SequenceReport, backend: RenderBackend) -> Result<()> {
    if report.is_empty() {
        return Err(FibPrimeError::render(format!(
            "{} renderer needs at least one term (got {} requested)",
            backend, report.terms_requested
        )));
    }
    Ok(())
}
