#![allow(dead_code)]

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use bbgt::common::BbBox;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn get_class_colour(class: usize) -> Rgb<u8> {
    match class {
        0 => Rgb([128, 0, 128]),     // purple (people)
        1..=8 => Rgb([0, 255, 0]),   // green (vehicles)
        14..=23 => Rgb([255, 0, 0]), // red (animals)
        _ => Rgb([0, 0, 255])        // blue (everything else)
    }
}

/// A black image with each box painted in its class colour.
pub(crate) fn painted_image(width: u32, height: u32, boxes: &[(BbBox, usize)]) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for (bb, class) in boxes {
        let (x, y, w, h) = bb.as_xy_wh_i32();
        draw_filled_rect_mut(&mut img, Rect::at(x, y).of_size(w as u32, h as u32), get_class_colour(*class));
    }
    img
}
