//! Grid partitioning and per-box skin-pixel counting
//!
//! Frames are tiled with non-overlapping boxes in row-major order; remainder
//! strips that do not fit a whole box are dropped. The counting pass is a
//! pure, stateless transformation invoked once per frame.

use ndarray::{ArrayView3, Axis, s};
use serde::{Deserialize, Serialize};

use crate::calibration::ColorRange;
use crate::frame::Frame;
use crate::geometry::BoxSpec;

/// Skin-pixel count for the box whose top-left corner is `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxResult {
    pub x: u32,
    pub y: u32,
    pub count: u32,
}

/// Count the pixels of `view` whose channels all lie inside `range`.
///
/// Equivalent to an in-range mask followed by a non-zero count.
pub fn count_in_range(view: ArrayView3<'_, u8>, range: &ColorRange) -> u32 {
    view.lanes(Axis(2))
        .into_iter()
        .filter(|pixel| range.contains(pixel))
        .count() as u32
}

/// Tile `frame` with `spec`-sized boxes and count skin pixels in each.
///
/// Results come back in row-major order: increasing y, then increasing x
/// within a row. Always yields `floor(H / bh) * floor(W / bw)` entries, so a
/// box larger than the frame in either dimension yields none.
pub fn count_boxes(frame: &Frame, spec: BoxSpec, range: &ColorRange) -> Vec<BoxResult> {
    let rows = frame.height() / spec.height();
    let cols = frame.width() / spec.width();
    let view = frame.view();

    let mut results = Vec::with_capacity(rows as usize * cols as usize);
    for by in 0..rows {
        let y = by * spec.height();
        for bx in 0..cols {
            let x = bx * spec.width();
            let sub = view.slice(s![
                y as usize..(y + spec.height()) as usize,
                x as usize..(x + spec.width()) as usize,
                ..
            ]);
            results.push(BoxResult {
                x,
                y,
                count: count_in_range(sub, range),
            });
        }
    }
    results
}

/// Boxes whose skin-pixel count strictly exceeds `threshold`.
pub fn hot_boxes(results: &[BoxResult], threshold: u32) -> Vec<BoxResult> {
    results
        .iter()
        .copied()
        .filter(|b| b.count > threshold)
        .collect()
}
