//! Renderer implementations, one module per output backend.
//!
//! - `pixel`: PNG pixel plot and prime strip
//! - `chart`: SVG line chart
//! - `plot3d`: SVG 3D curve

pub mod chart;
pub mod pixel;
pub mod plot3d;

/// Upper bound for a plot axis; degenerate ranges widen to `0..1`.
pub(crate) fn axis_max(value: f64) -> f64 {
    if value > 0.0 { value } else { 1.0 }
}
