//! Error types for engine construction, seeding and pattern loading.

use crate::Topology;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("grid side must be positive")]
    EmptyGrid,

    #[error("grid side {side} exceeds the maximum of {max}")]
    GridTooLarge { side: usize, max: usize },

    #[error("pattern of {width}x{height} cells does not fit the {side}x{side} grid")]
    PatternTooLarge { width: i64, height: i64, side: usize },

    #[error("topology {0:?} is not supported by a fixed-size grid")]
    UnsupportedTopology(Topology),

    #[error("cell ({x}, {y}) lies outside the {side}x{side} grid")]
    OutOfBounds { x: i64, y: i64, side: usize },

    #[error("RLE error on line {line}: {reason}")]
    Rle { line: usize, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
