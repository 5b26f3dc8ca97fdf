//! End-to-end flow: calibrate on the first frame, then count and highlight.

use skingrid::{
    BoxSpec, Frame, Rect, Region, TestPattern, calibrate, count_boxes, draw_hot_boxes, hot_boxes,
};

/// 3-channel frame with a uniform "skin" patch on a darker background.
fn frame_with_patch(
    width: u32,
    height: u32,
    patch: Rect,
    patch_value: u8,
    background: u8,
) -> Frame {
    let mut data = vec![background; (width * height * 3) as usize];
    for y in patch.y..patch.y + patch.height {
        for x in patch.x..patch.x + patch.width {
            let base = ((y * width + x) * 3) as usize;
            data[base..base + 3].fill(patch_value);
        }
    }
    Frame::from_raw(width, height, 3, data).unwrap()
}

#[test]
fn calibrate_then_count_localizes_the_patch() {
    // 40x40 skin patch aligned to the 10x10 grid
    let patch = Rect::new(20, 20, 40, 40);
    let frame = frame_with_patch(100, 100, patch, 120, 10);

    let sample = Region::new(Rect::new(25, 25, 10, 10), 100, 100).unwrap();
    let range = calibrate(&frame, sample);
    // uniform sample: the range collapses to the patch value
    assert_eq!(range.lower(), &[120, 120, 120]);
    assert_eq!(range.upper(), &[120, 120, 120]);

    let spec = BoxSpec::new(10, 10).unwrap();
    let results = count_boxes(&frame, spec, &range);
    assert_eq!(results.len(), 100);

    for b in &results {
        let inside = b.x >= 20 && b.x < 60 && b.y >= 20 && b.y < 60;
        let expected = if inside { 100 } else { 0 };
        assert_eq!(b.count, expected, "box at ({}, {})", b.x, b.y);
    }

    let hot = hot_boxes(&results, 99);
    assert_eq!(hot.len(), 16);
}

#[test]
fn highlighted_output_marks_only_patch_boxes() {
    let patch = Rect::new(10, 10, 20, 20);
    let frame = frame_with_patch(60, 60, patch, 200, 0);

    let sample = Region::new(Rect::new(12, 12, 5, 5), 60, 60).unwrap();
    let range = calibrate(&frame, sample);
    let spec = BoxSpec::new(10, 10).unwrap();
    let results = count_boxes(&frame, spec, &range);

    let img = draw_hot_boxes(&frame, &results, spec, 99).unwrap();
    let green = image::Rgb([0u8, 255, 0]);
    // corner of a hot box is part of its marker
    assert_eq!(*img.get_pixel(10, 10), green);
    // a cold box far from the patch keeps its original value
    assert_eq!(*img.get_pixel(45, 45), image::Rgb([0, 0, 0]));
}

#[test]
fn resize_then_count_keeps_the_grid_shape() {
    let frame = Frame::test_pattern(200, 200, 3, TestPattern::Uniform(50));
    let small = frame.resized(100, 100).unwrap();

    let sample = Region::new(Rect::new(0, 0, 10, 10), 100, 100).unwrap();
    let range = calibrate(&small, sample);
    let spec = BoxSpec::new(10, 10).unwrap();
    let results = count_boxes(&small, spec, &range);

    assert_eq!(results.len(), 100);
    assert!(results.iter().all(|b| b.count == 100));
}

#[test]
fn calibration_region_must_fit_the_resized_frame() {
    // a rectangle valid on the raw frame can be invalid after the resize
    let rect = Rect::new(150, 150, 20, 20);
    assert!(Region::new(rect, 200, 200).is_ok());
    assert!(Region::new(rect, 100, 100).is_err());
}
