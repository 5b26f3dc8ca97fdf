//! Skin-color range calibration
//!
//! The range is derived once, from a user-selected patch of the first frame,
//! and then threaded through the capture loop as a plain immutable value.

use log::debug;
use ndarray::Axis;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::geometry::Region;

/// Per-channel closed interval `[lower[c], upper[c]]` of 8-bit samples.
///
/// Deserialization goes through [`ColorRange::new`], so a decoded range
/// carries the same guarantees as a calibrated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColorRange")]
pub struct ColorRange {
    lower: Vec<u8>,
    upper: Vec<u8>,
}

/// Unvalidated wire form of [`ColorRange`].
#[derive(Deserialize)]
struct RawColorRange {
    lower: Vec<u8>,
    upper: Vec<u8>,
}

impl TryFrom<RawColorRange> for ColorRange {
    type Error = Error;

    fn try_from(raw: RawColorRange) -> Result<Self> {
        ColorRange::new(raw.lower, raw.upper)
    }
}

impl ColorRange {
    /// Build a range from explicit bounds. Fails when the channel counts
    /// differ or any lower bound exceeds its upper bound.
    pub fn new(lower: Vec<u8>, upper: Vec<u8>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(Error::InvalidRange(format!(
                "channel count mismatch: {} lower vs {} upper",
                lower.len(),
                upper.len()
            )));
        }
        for (c, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if lo > hi {
                return Err(Error::InvalidRange(format!(
                    "lower {} exceeds upper {} on channel {}",
                    lo, hi, c
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &[u8] {
        &self.lower
    }

    pub fn upper(&self) -> &[u8] {
        &self.upper
    }

    pub fn channels(&self) -> usize {
        self.lower.len()
    }

    /// Closed-interval membership per channel, AND across channels.
    ///
    /// A pixel with a different channel count than the range never matches.
    pub fn contains<'a, I>(&self, pixel: I) -> bool
    where
        I: IntoIterator<Item = &'a u8>,
    {
        let mut seen = 0;
        for (c, &value) in pixel.into_iter().enumerate() {
            if c >= self.lower.len() {
                return false;
            }
            if value < self.lower[c] || value > self.upper[c] {
                return false;
            }
            seen += 1;
        }
        seen == self.lower.len()
    }
}

/// Compute a [`ColorRange`] from the pixels inside `region`.
///
/// Per channel: mean and population standard deviation over the region, then
/// `lower = trunc(clamp(mean - std, 0, 255))` and
/// `upper = trunc(clamp(mean + std, 0, 255))`. Since the deviation is
/// non-negative, `lower <= upper` always holds.
pub fn calibrate(frame: &Frame, region: Region) -> ColorRange {
    let view = frame.region_view(region);
    let n = region.pixel_count() as f64;
    let channels = frame.channels() as usize;

    let mut lower = Vec::with_capacity(channels);
    let mut upper = Vec::with_capacity(channels);
    for c in 0..channels {
        let samples = view.index_axis(Axis(2), c);
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for &v in samples.iter() {
            let v = v as f64;
            sum += v;
            sum_sq += v * v;
        }
        let mean = sum / n;
        let variance = (sum_sq / n - mean * mean).max(0.0);
        let std_dev = variance.sqrt();
        lower.push((mean - std_dev).clamp(0.0, 255.0) as u8);
        upper.push((mean + std_dev).clamp(0.0, 255.0) as u8);
    }

    debug!(
        "calibrated {}x{} region at ({}, {}): lower={:?} upper={:?}",
        region.rect().width,
        region.rect().height,
        region.rect().x,
        region.rect().y,
        lower,
        upper
    );
    ColorRange { lower, upper }
}
