//! Type-safe selection types for fibprime
//!
//! Renderer choices are proper Rust enums rather than strings, so config
//! files and CLI flags are validated at parse time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Output adapter used to draw a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RenderBackend {
    /// One pixel per term in a PNG image, plus a prime strip
    #[default]
    #[strum(serialize = "pixel")]
    Pixel,
    /// Line chart of the sequence with primes highlighted (SVG)
    #[strum(serialize = "chart")]
    Chart,
    /// Index/value/height curve in a 3D projection (SVG)
    #[strum(serialize = "plot3d")]
    Plot3d,
}
