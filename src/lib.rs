//! Bounded Game of Life simulation with an RGBA render adapter.

pub mod config;
pub mod engine;
pub mod pos;
pub mod render;

pub use config::Config;
pub use engine::{Grid, GridView};
pub use pos::Pos2;
pub use render::{PixelBuffer, draw};
