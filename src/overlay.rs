//! Highlight overlay for boxes above the skin-pixel threshold

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect as DrawRect;

use crate::error::Result;
use crate::frame::Frame;
use crate::geometry::BoxSpec;
use crate::grid::{BoxResult, hot_boxes};

/// Marker color. Green regardless of RGB/BGR channel order.
pub const HIGHLIGHT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Marker border thickness in pixels.
pub const BORDER_WIDTH: u32 = 2;

/// Default skin-pixel count a box must exceed to be highlighted.
pub const DEFAULT_THRESHOLD: u32 = 100;

/// Render `frame` with a hollow rectangle over every box whose count
/// strictly exceeds `threshold`.
pub fn draw_hot_boxes(
    frame: &Frame,
    results: &[BoxResult],
    spec: BoxSpec,
    threshold: u32,
) -> Result<RgbImage> {
    let mut img = frame.to_rgb_image()?;
    for b in hot_boxes(results, threshold) {
        draw_marker(&mut img, b.x, b.y, spec.width(), spec.height());
    }
    Ok(img)
}

fn draw_marker(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32) {
    // One 1-px rect per border ring, nested inward.
    for inset in 0..BORDER_WIDTH {
        let w = width.saturating_sub(2 * inset);
        let h = height.saturating_sub(2 * inset);
        if w == 0 || h == 0 {
            break;
        }
        let rect = DrawRect::at((x + inset) as i32, (y + inset) as i32).of_size(w, h);
        draw_hollow_rect_mut(img, rect, HIGHLIGHT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::TestPattern;

    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn one_box(count: u32) -> Vec<BoxResult> {
        vec![BoxResult { x: 10, y: 10, count }]
    }

    #[test]
    fn hot_box_gets_a_two_pixel_border() {
        let frame = Frame::test_pattern(40, 40, 3, TestPattern::Uniform(0));
        let spec = BoxSpec::new(10, 10).unwrap();
        let img = draw_hot_boxes(&frame, &one_box(101), spec, 100).unwrap();

        // outer and inner border ring pixels
        assert_eq!(*img.get_pixel(10, 10), GREEN);
        assert_eq!(*img.get_pixel(11, 11), GREEN);
        assert_eq!(*img.get_pixel(19, 19), GREEN);
        assert_eq!(*img.get_pixel(18, 18), GREEN);
        // interior and exterior stay untouched
        assert_eq!(*img.get_pixel(12, 12), BLACK);
        assert_eq!(*img.get_pixel(15, 15), BLACK);
        assert_eq!(*img.get_pixel(9, 9), BLACK);
        assert_eq!(*img.get_pixel(20, 20), BLACK);
    }

    #[test]
    fn box_at_threshold_is_not_highlighted() {
        let frame = Frame::test_pattern(40, 40, 3, TestPattern::Uniform(0));
        let spec = BoxSpec::new(10, 10).unwrap();
        let img = draw_hot_boxes(&frame, &one_box(100), spec, 100).unwrap();
        assert!(img.pixels().all(|&p| p == BLACK));
    }

    #[test]
    fn marker_stays_inside_the_box_bounds() {
        let frame = Frame::test_pattern(30, 30, 3, TestPattern::Uniform(0));
        let spec = BoxSpec::new(10, 10).unwrap();
        let results = vec![BoxResult { x: 20, y: 20, count: 200 }];
        let img = draw_hot_boxes(&frame, &results, spec, 100).unwrap();
        for (x, y, &p) in img.enumerate_pixels() {
            if x < 20 || y < 20 {
                assert_eq!(p, BLACK, "pixel outside the box changed at ({x}, {y})");
            }
        }
        assert_eq!(*img.get_pixel(29, 29), GREEN);
    }
}
