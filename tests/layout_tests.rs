//! Frame-to-device mapping through the configured hardware layout.

use wled_raycaster::matrix::{build_pixel_array, MatrixLayout};
use wled_raycaster::render::PixelBuffer;
use wled_raycaster::types::{Rgb, MATRIX_HEIGHT, MATRIX_WIDTH};

#[test]
fn configured_layouts_are_bijective() {
    MatrixLayout::native_2d(MATRIX_WIDTH, MATRIX_HEIGHT)
        .unwrap()
        .verify_bijection()
        .unwrap();
    MatrixLayout::two_panel_serpentine()
        .unwrap()
        .verify_bijection()
        .unwrap();
}

#[test]
fn corner_pixels_land_on_the_wired_leds() {
    let layout = MatrixLayout::two_panel_serpentine().unwrap();
    let mut frame = PixelBuffer::new(MATRIX_WIDTH, MATRIX_HEIGHT);
    frame.set(0, 0, Rgb::new(1, 0, 0));
    frame.set(15, 0, Rgb::new(2, 0, 0));
    frame.set(0, 7, Rgb::new(3, 0, 0));
    frame.set(15, 7, Rgb::new(4, 0, 0));

    let pixels = build_pixel_array(&frame, &layout);
    // Left panel starts at its top-left; its bottom row is the last flipped
    // scan row. Right panel is wired from the bottom-right corner upward.
    assert_eq!(pixels[0], [1, 0, 0]);
    assert_eq!(pixels[63], [3, 0, 0]);
    assert_eq!(pixels[64], [4, 0, 0]);
    assert_eq!(pixels[127], [2, 0, 0]);
}

#[test]
fn same_frame_orders_differently_per_regime() {
    let mut frame = PixelBuffer::new(MATRIX_WIDTH, MATRIX_HEIGHT);
    frame.set(0, 1, Rgb::new(9, 9, 9));

    let native = build_pixel_array(
        &frame,
        &MatrixLayout::native_2d(MATRIX_WIDTH, MATRIX_HEIGHT).unwrap(),
    );
    let panels = build_pixel_array(&frame, &MatrixLayout::two_panel_serpentine().unwrap());

    assert_eq!(native[MATRIX_WIDTH], [9, 9, 9]);
    assert_eq!(panels[15], [9, 9, 9]);
    assert_eq!(panels[MATRIX_WIDTH], [0, 0, 0]);
}
