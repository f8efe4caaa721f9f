#![warn(clippy::all)]

mod engines;
mod gui;
mod utils;

pub use engines::{blank_engine, new_engine, DenseEngine, SparseEngine};
pub use gui::{App, Camera, Config, TickScheduler};
pub use utils::{
    load_rle_file, next_state, parse_rle, patterns, Cell, Engine, Error, Pattern, Result, Seed,
    Topology, WorldConfig, NEIGHBOR_OFFSETS,
};
