//! Grid-based skin-color scanning for webcam frames.
//!
//! A skin-color range is calibrated once from a user-selected patch of the
//! first frame (per-channel mean plus/minus one standard deviation). Each
//! later frame is tiled with fixed-size non-overlapping boxes, skin pixels
//! are counted per box, and boxes above a threshold are highlighted.
//!
//! The computational core (frame model, calibration, grid counting, overlay)
//! is pure Rust; webcam capture and the display window live behind the
//! `live` cargo feature.

pub mod calibration;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod overlay;

#[cfg(feature = "live")]
pub mod capture;

// Re-export main types for convenience
pub use crate::calibration::{ColorRange, calibrate};
pub use crate::error::{Error, Result};
pub use crate::frame::{Frame, TestPattern};
pub use crate::geometry::{BoxSpec, Rect, Region};
pub use crate::grid::{BoxResult, count_boxes, count_in_range, hot_boxes};
pub use crate::overlay::{DEFAULT_THRESHOLD, draw_hot_boxes};
