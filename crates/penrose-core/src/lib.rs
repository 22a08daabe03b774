//! Sliding Penrose triangle of cubes.
//!
//! A chain of isometric cubes is laid along the three edges of an
//! equilateral triangle. Each frame every cube slides a fraction of one slot
//! along its edge; after `loop_frames` frames the chain has moved exactly one
//! slot and the animation wraps without a visible jump.

pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod render;
pub mod surface;
pub mod update;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use geometry::*;
pub use render::*;
pub use surface::*;
pub use update::*;
