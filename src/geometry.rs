//! Rectangles, calibration regions, and grid box dimensions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Axis-aligned rectangle in frame-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from a top-left and bottom-right corner pair.
    ///
    /// Corners on the wrong side of each other collapse to a zero dimension,
    /// which [`Region::new`] then rejects.
    pub fn from_corners(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2.saturating_sub(x1),
            height: y2.saturating_sub(y1),
        }
    }

    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }
}

/// Calibration rectangle, validated against the frame it samples.
///
/// Construction guarantees the rectangle is non-empty and lies fully inside
/// the frame, so the calibrator never has to bounds-check.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    rect: Rect,
}

impl Region {
    pub fn new(rect: Rect, frame_width: u32, frame_height: u32) -> Result<Self> {
        if rect.width == 0 || rect.height == 0 {
            return Err(Error::EmptyRegion {
                width: rect.width,
                height: rect.height,
            });
        }
        if rect.right() > frame_width as u64 || rect.bottom() > frame_height as u64 {
            return Err(Error::RegionOutOfBounds {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                frame_width,
                frame_height,
            });
        }
        Ok(Self { rect })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Number of pixels the region covers.
    pub fn pixel_count(&self) -> u64 {
        self.rect.width as u64 * self.rect.height as u64
    }
}

/// Dimensions of one grid cell. Width and height may differ and need not
/// divide the frame dimensions evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSpec {
    width: u32,
    height: u32,
}

impl BoxSpec {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBoxSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
