//! Cross layout composition and hologram stylization.

mod cross;
mod hologram;
mod layout;

pub use cross::{Config, Outputs, Pipeline, MAX_CANVAS_SIZE};
pub use hologram::{draw_scan_lines, luminance, stylize, HologramStyle};
pub use layout::{Arm, CrossLayout, Direction, Placement, Rotation, CROSS_LAYOUT};
