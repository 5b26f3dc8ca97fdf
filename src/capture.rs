//! Webcam capture and on-screen display, wrapping OpenCV
//!
//! The camera and window are scoped resources: acquired once, released by
//! `Drop` on every exit path. Frames cross the boundary as [`Frame`] values
//! in the source's native BGR channel order.

use opencv::core::Mat;
use opencv::prelude::*;
use opencv::{highgui, videoio};

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::geometry::Rect;

/// Sequential frame source backed by a capture device.
pub struct Camera {
    inner: videoio::VideoCapture,
}

impl Camera {
    /// Open the capture device at `index` (0 is the system default camera).
    pub fn open(index: i32) -> Result<Self> {
        let inner = videoio::VideoCapture::new(index, videoio::CAP_ANY)
            .map_err(|e| Error::CameraUnavailable(e.to_string()))?;
        let opened = inner
            .is_opened()
            .map_err(|e| Error::CameraUnavailable(e.to_string()))?;
        if !opened {
            return Err(Error::CameraUnavailable(format!(
                "device {} could not be opened",
                index
            )));
        }
        Ok(Self { inner })
    }

    /// Pull the next frame. `Ok(None)` signals end-of-stream or a failed
    /// grab; the caller decides whether that is fatal.
    pub fn read(&mut self) -> Result<Option<Frame>> {
        let mut mat = Mat::default();
        let grabbed = self
            .inner
            .read(&mut mat)
            .map_err(|e| Error::FrameReadFailed(e.to_string()))?;
        if !grabbed || mat.empty() {
            return Ok(None);
        }
        mat_to_frame(&mat).map(Some)
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        let _ = self.inner.release();
    }
}

/// Copy an interleaved 8-bit `Mat` into a [`Frame`].
pub fn mat_to_frame(mat: &Mat) -> Result<Frame> {
    let owned;
    let src = if mat.is_continuous() {
        mat
    } else {
        owned = mat.try_clone().map_err(|e| Error::Backend(e.to_string()))?;
        &owned
    };
    let bytes = src
        .data_bytes()
        .map_err(|e| Error::Backend(e.to_string()))?
        .to_vec();
    Frame::from_raw(src.cols() as u32, src.rows() as u32, src.channels() as u32, bytes)
}

/// Copy a [`Frame`] into an owned `Mat` for display.
pub fn frame_to_mat(frame: &Frame) -> Result<Mat> {
    let flat = Mat::from_slice(frame.as_bytes()).map_err(|e| Error::Backend(e.to_string()))?;
    let shaped = flat
        .reshape(frame.channels() as i32, frame.height() as i32)
        .map_err(|e| Error::Backend(e.to_string()))?;
    shaped.try_clone().map_err(|e| Error::Backend(e.to_string()))
}

/// Run the interactive drag-select gesture on `frame` and return the chosen
/// rectangle in frame-pixel coordinates. The selection window is closed
/// before returning.
pub fn select_region(window: &str, frame: &Frame) -> Result<Rect> {
    let mat = frame_to_mat(frame)?;
    let roi = highgui::select_roi(window, &mat, true, false, false)
        .map_err(|e| Error::Backend(e.to_string()))?;
    highgui::destroy_window(window).map_err(|e| Error::Backend(e.to_string()))?;
    Ok(Rect::new(
        roi.x.max(0) as u32,
        roi.y.max(0) as u32,
        roi.width.max(0) as u32,
        roi.height.max(0) as u32,
    ))
}

/// Named display window, destroyed on drop.
pub struct Display {
    window: String,
}

impl Display {
    pub fn new(window: &str) -> Result<Self> {
        highgui::named_window(window, highgui::WINDOW_AUTOSIZE)
            .map_err(|e| Error::Backend(e.to_string()))?;
        Ok(Self {
            window: window.to_string(),
        })
    }

    /// Show an annotated frame. The image buffer is interpreted in the
    /// camera's native channel order.
    pub fn show(&self, image: &image::RgbImage) -> Result<()> {
        let flat =
            Mat::from_slice(image.as_raw()).map_err(|e| Error::Backend(e.to_string()))?;
        let shaped = flat
            .reshape(3, image.height() as i32)
            .map_err(|e| Error::Backend(e.to_string()))?;
        highgui::imshow(&self.window, &shaped).map_err(|e| Error::Backend(e.to_string()))
    }

    /// Pump the event loop for 1 ms and report whether 'q' was pressed.
    pub fn quit_requested(&self) -> Result<bool> {
        let key = highgui::wait_key(1).map_err(|e| Error::Backend(e.to_string()))?;
        Ok(key == 'q' as i32)
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        let _ = highgui::destroy_window(&self.window);
    }
}
