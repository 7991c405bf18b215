// error.rs - Failure modes of a conversion
//
// Every variant is fatal: a conversion either produces the whole box list
// or nothing at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    /// The source raster could not be opened or decoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image has no cells ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Classification produced NaN or infinity. Equality against NaN is always
    /// false, so letting it through would silently disable merging.
    #[error("non-finite height {value} at ({x}, {y})")]
    NonFiniteHeight { x: u32, y: u32, value: f64 },

    #[error("cluster #{index} is {w}x{h}, exceeds cap {cap}")]
    CapExceeded { index: usize, w: u32, h: u32, cap: u32 },

    #[error("clusters #{a} and #{b} overlap")]
    Overlap { a: usize, b: usize },

    #[error("cell ({x}, {y}) covered differently before and after merging")]
    CoverageMismatch { x: u32, y: u32 },

    #[error("cluster #{index} does not match the grid at ({x}, {y})")]
    NonUniform { index: usize, x: u32, y: u32 },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

pub type Result<T> = std::result::Result<T, ClusterError>;
