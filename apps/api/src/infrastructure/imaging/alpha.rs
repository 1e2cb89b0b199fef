use image::{RgbaImage, imageops::FilterType};

/// Multiplies every alpha value of `layer` by `opacity`. Colour channels are untouched, so fully
/// transparent regions stay transparent.
pub fn scale_alpha(layer: &mut RgbaImage, opacity: f64) {
    let factor = opacity.clamp(0.0, 1.0);
    if factor >= 1.0 {
        return;
    }
    for pixel in layer.pixels_mut() {
        pixel[3] = (f64::from(pixel[3]) * factor).round() as u8;
    }
}

/// Resizes a straight-alpha image without pulling the colour of transparent pixels into its
/// edges. Filtering happens on premultiplied values and the result is converted back.
pub fn resize_premultiplied(
    image: &RgbaImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> RgbaImage {
    let mut premultiplied = image.clone();
    premultiply_in_place(&mut premultiplied);
    let mut resized = image::imageops::resize(&premultiplied, width, height, filter);
    unpremultiply_in_place(&mut resized);
    resized
}

fn premultiply_in_place(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        let a = u16::from(px[3]);
        for c in 0..3 {
            px[c] = ((u16::from(px[c]) * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply_in_place(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in 0..3 {
            px[c] = ((u16::from(px[c]) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
