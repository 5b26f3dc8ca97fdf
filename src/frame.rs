//! Frame model: an owned H x W x C grid of 8-bit samples
//!
//! A `Frame` is produced once per capture call, processed, and replaced
//! wholesale on the next iteration. The channel layout is whatever the
//! capture source delivers (BGR for webcams); the calibrator and counter
//! only ever see the same representation, so no conversion happens here.

use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};
use ndarray::{Array3, ArrayView1, ArrayView3, s};

use crate::error::{Error, Result};
use crate::geometry::Region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    data: Array3<u8>,
}

impl Frame {
    /// Wrap a raw interleaved buffer of `height * width * channels` bytes.
    pub fn from_raw(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        let expected = height as usize * width as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::InvalidFrameData {
                expected,
                actual: data.len(),
            });
        }
        let data = Array3::from_shape_vec(
            (height as usize, width as usize, channels as usize),
            data,
        )
        .map_err(|_| Error::InvalidFrameData {
            expected,
            actual: expected,
        })?;
        Ok(Self { data })
    }

    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        Self::from_raw(img.width(), img.height(), 3, img.as_raw().clone())
    }

    pub fn from_gray_image(img: &GrayImage) -> Result<Self> {
        Self::from_raw(img.width(), img.height(), 1, img.as_raw().clone())
    }

    /// Create a synthetic frame (useful for testing the grid counter).
    pub fn test_pattern(width: u32, height: u32, channels: u32, pattern: TestPattern) -> Self {
        let data = Array3::from_shape_fn(
            (height as usize, width as usize, channels as usize),
            |(y, x, _)| match pattern {
                TestPattern::Uniform(value) => value,
                TestPattern::Gradient => ((x + y) % 256) as u8,
                TestPattern::Checkerboard { cell } => {
                    let cell = cell.max(1) as usize;
                    if (x / cell + y / cell) % 2 == 0 { 255 } else { 0 }
                }
            },
        );
        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.shape()[1] as u32
    }

    pub fn height(&self) -> u32 {
        self.data.shape()[0] as u32
    }

    pub fn channels(&self) -> u32 {
        self.data.shape()[2] as u32
    }

    /// Per-channel samples of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> ArrayView1<'_, u8> {
        self.data.slice(s![y as usize, x as usize, ..])
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// View of the pixels inside a validated calibration region.
    pub fn region_view(&self, region: Region) -> ArrayView3<'_, u8> {
        let r = region.rect();
        self.data.slice(s![
            r.y as usize..(r.y + r.height) as usize,
            r.x as usize..(r.x + r.width) as usize,
            ..
        ])
    }

    /// Raw interleaved bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        // Owned frames are always in standard layout.
        self.data.as_slice().unwrap_or(&[])
    }

    /// Bilinear resize, supported for 1- and 3-channel frames.
    pub fn resized(&self, width: u32, height: u32) -> Result<Self> {
        match self.channels() {
            1 => {
                let img = self.to_gray_image()?;
                let resized = imageops::resize(&img, width, height, FilterType::Triangle);
                Self::from_gray_image(&resized)
            }
            3 => {
                let img = self.to_rgb_image()?;
                let resized = imageops::resize(&img, width, height, FilterType::Triangle);
                Self::from_rgb_image(&resized)
            }
            channels => Err(Error::UnsupportedChannels { channels }),
        }
    }

    /// Copy the frame into an [`image::RgbImage`] container. The bytes keep
    /// the source channel order; "Rgb" is only the container type.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        if self.channels() != 3 {
            return Err(Error::UnsupportedChannels {
                channels: self.channels(),
            });
        }
        let expected = self.as_bytes().len();
        RgbImage::from_raw(self.width(), self.height(), self.as_bytes().to_vec()).ok_or(
            Error::InvalidFrameData {
                expected,
                actual: expected,
            },
        )
    }

    pub fn to_gray_image(&self) -> Result<GrayImage> {
        if self.channels() != 1 {
            return Err(Error::UnsupportedChannels {
                channels: self.channels(),
            });
        }
        let expected = self.as_bytes().len();
        GrayImage::from_raw(self.width(), self.height(), self.as_bytes().to_vec()).ok_or(
            Error::InvalidFrameData {
                expected,
                actual: expected,
            },
        )
    }
}

/// Synthetic frame contents for tests and demos.
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Every sample set to the given value.
    Uniform(u8),
    /// `(x + y) % 256` on every channel.
    Gradient,
    /// Alternating `cell`-sized squares of 255 and 0.
    Checkerboard { cell: u32 },
}
