mod cell;
mod config;
mod error;
mod parse_rle;
mod pattern;
pub mod patterns;
mod seed;
mod topology;
mod traits;

pub use cell::{Cell, NEIGHBOR_OFFSETS};
pub use config::WorldConfig;
pub use error::{Error, Result};
pub use parse_rle::{load_rle_file, parse_rle};
pub use pattern::Pattern;
pub use seed::Seed;
pub use topology::Topology;
pub use traits::{next_state, Engine};
