//! Renderer dispatch.
//!
//! `render_all` is the single entry point the CLI uses to turn a
//! `SequenceReport` into files. It builds one renderer per configured backend
//! and runs them in order, stopping at the first failure.

use crate::config_file::RunConfig;
use crate::engine::report::SequenceReport;
use crate::error::Result;
use crate::render_traits::Renderer;
use crate::renderers::chart::ChartRenderer;
use crate::renderers::pixel::PixelRenderer;
use crate::renderers::plot3d::Plot3dRenderer;
use crate::types::RenderBackend;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Build the renderer for `backend` with sizes taken from `config`.
pub fn build_renderer(backend: RenderBackend, config: &RunConfig) -> Box<dyn Renderer> {
    match backend {
        RenderBackend::Pixel => Box::new(PixelRenderer::new(config.max_height)),
        RenderBackend::Chart => {
            Box::new(ChartRenderer::new(config.chart_width, config.chart_height))
        }
        RenderBackend::Plot3d => {
            Box::new(Plot3dRenderer::new(config.chart_width, config.chart_height))
        }
    }
}

/// Run every configured renderer and return the files written.
///
/// The output directory is created if missing. With no backends configured
/// nothing is written and the result is empty.
pub fn render_all(report: &SequenceReport, config: &RunConfig) -> Result<Vec<PathBuf>> {
    if config.backends.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::new();
    for &backend in &config.backends {
        let renderer = build_renderer(backend, config);
        info!(
            "Rendering {} terms with {} backend into {}",
            report.sequence.len(),
            backend,
            config.output_dir.display()
        );
        let paths = renderer.render(report, &config.output_dir)?;
        written.extend(paths);
    }

    Ok(written)
}
