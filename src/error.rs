//! Error handling for skingrid

use std::fmt;

/// Result type for skingrid operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while calibrating or scanning frames
#[derive(Debug)]
pub enum Error {
    /// Camera device could not be opened
    CameraUnavailable(String),
    /// A capture call failed
    FrameReadFailed(String),
    /// Capture or display backend call failed
    Backend(String),
    /// Calibration rectangle has zero width or height
    EmptyRegion { width: u32, height: u32 },
    /// Calibration rectangle extends past the frame bounds
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        frame_width: u32,
        frame_height: u32,
    },
    /// Grid box has a zero dimension
    InvalidBoxSize { width: u32, height: u32 },
    /// Lower/upper bounds are inconsistent
    InvalidRange(String),
    /// Raw buffer length does not match the frame dimensions
    InvalidFrameData { expected: usize, actual: usize },
    /// Operation only supports 1- or 3-channel frames
    UnsupportedChannels { channels: u32 },
    /// Image decode/encode error
    Image(image::ImageError),
}

impl Error {
    /// Whether a failed capture call mid-stream means the stream is over.
    ///
    /// Read failures after the first frame end the capture loop gracefully;
    /// every other error stays fatal.
    pub fn ends_stream(&self) -> bool {
        matches!(self, Error::FrameReadFailed(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CameraUnavailable(msg) => write!(f, "camera unavailable: {}", msg),
            Error::FrameReadFailed(msg) => write!(f, "frame read failed: {}", msg),
            Error::Backend(msg) => write!(f, "backend call failed: {}", msg),
            Error::EmptyRegion { width, height } => {
                write!(f, "calibration region is empty ({}x{})", width, height)
            }
            Error::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                frame_width,
                frame_height,
            } => write!(
                f,
                "region {}x{} at ({}, {}) exceeds frame bounds {}x{}",
                width, height, x, y, frame_width, frame_height
            ),
            Error::InvalidBoxSize { width, height } => {
                write!(f, "box dimensions must be positive, got {}x{}", width, height)
            }
            Error::InvalidRange(msg) => write!(f, "invalid color range: {}", msg),
            Error::InvalidFrameData { expected, actual } => write!(
                f,
                "frame buffer length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            Error::UnsupportedChannels { channels } => {
                write!(f, "unsupported channel count: {}", channels)
            }
            Error::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_read_failures_end_the_stream() {
        assert!(Error::FrameReadFailed("disconnected".into()).ends_stream());
        assert!(!Error::CameraUnavailable("no device".into()).ends_stream());
        assert!(!Error::Backend("window closed".into()).ends_stream());
        assert!(!Error::UnsupportedChannels { channels: 4 }.ends_stream());
    }
}
