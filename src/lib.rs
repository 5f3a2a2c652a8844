//! # `hologram-cross`
//!
//! Compose a single subject image into the four-view "cross" layout used by
//! smartphone pyramid hologram projectors.
//!
//! Four copies of the subject are rotated to face outward (0°, 270°, 180°,
//! 90°) around a blank square that lines up with the pyramid's opening. An
//! optional pass renders the result in a blue, scan-lined hologram style.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use hologram_cross::{Config, Pipeline};
//!
//! # fn main() -> hologram_cross::Result<()> {
//! let pipeline = Pipeline::new(Config::default())?;
//!
//! pipeline.process("subject.png", "cross.png", Some(Path::new("cross_blue.png")))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{Config, HologramStyle, Outputs, Pipeline};
