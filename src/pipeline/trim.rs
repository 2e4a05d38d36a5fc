//! Border trimming: crop uniform-colour margins from a rendered page.
//!
//! ## How background is decided
//!
//! Every pixel is compared against a reference background colour. The
//! 3-channel absolute difference is reduced to a single intensity with the
//! ITU-R 601-2 luminance weights (`0.299 R + 0.587 G + 0.114 B`), and any
//! pixel whose intensity exceeds the tolerance counts as foreground. The crop
//! is the minimal bounding box over foreground pixels.
//!
//! ## Why a tolerance?
//!
//! Scanner and renderer margins are rarely an exact colour: anti-aliasing and
//! JPEG history leave near-background pixels at the page edge. A small
//! tolerance (the default is 10 of 255) removes those fringes while genuine
//! content stays well above the threshold.

use image::DynamicImage;

/// Crop uniform borders close to `background` from `frame`.
///
/// Frames that are not already 3- or 4-channel colour are converted to RGB
/// before comparison; the returned frame is a crop of that working copy. A
/// frame that is entirely within `tolerance` of `background` is returned
/// unchanged rather than collapsed to a zero-area crop.
///
/// The input is never mutated, and re-applying the same parameters to the
/// result is a no-op once content touches the crop edges.
pub fn trim_border(frame: &DynamicImage, background: [u8; 3], tolerance: u8) -> DynamicImage {
    let working = match frame {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => frame.clone(),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    };

    match content_bbox(&working, background, tolerance) {
        Some((left, top, right, bottom)) => {
            working.crop_imm(left, top, right - left + 1, bottom - top + 1)
        }
        None => working,
    }
}

/// Minimal bounding box `(left, top, right, bottom)` (inclusive) over pixels
/// whose luminance-weighted distance from `background` exceeds `tolerance`.
/// `None` when every pixel is within tolerance.
fn content_bbox(
    frame: &DynamicImage,
    background: [u8; 3],
    tolerance: u8,
) -> Option<(u32, u32, u32, u32)> {
    let rgb = frame.to_rgb8();
    let tolerance = u32::from(tolerance);

    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in rgb.enumerate_pixels() {
        let dr = u32::from(px[0].abs_diff(background[0]));
        let dg = u32::from(px[1].abs_diff(background[1]));
        let db = u32::from(px[2].abs_diff(background[2]));
        // ITU-R 601-2 luma reduction of the channel differences.
        let intensity = (dr * 299 + dg * 587 + db * 114) / 1000;
        if intensity > tolerance {
            bbox = Some(match bbox {
                None => (x, y, x, y),
                Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
            });
        }
    }
    bbox
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    /// Black canvas with a solid `color` rectangle at (x, y, w, h).
    fn canvas_with_rect(
        canvas: (u32, u32),
        bg: [u8; 3],
        rect: (u32, u32, u32, u32),
        color: [u8; 3],
    ) -> DynamicImage {
        let mut img = RgbImage::from_pixel(canvas.0, canvas.1, Rgb(bg));
        let (x, y, w, h) = rect;
        for yy in y..y + h {
            for xx in x..x + w {
                img.put_pixel(xx, yy, Rgb(color));
            }
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn uniform_page_is_returned_unchanged() {
        let frame = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, Rgb([0, 0, 0])));
        let trimmed = trim_border(&frame, [0, 0, 0], 10);
        assert_eq!(trimmed.dimensions(), (40, 30));
        assert_eq!(trimmed.to_rgb8(), frame.to_rgb8());
    }

    #[test]
    fn near_background_page_is_returned_unchanged() {
        // All pixels within tolerance of the background: nothing to keep,
        // so nothing is trimmed either.
        let frame = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 20, Rgb([8, 8, 8])));
        let trimmed = trim_border(&frame, [0, 0, 0], 10);
        assert_eq!(trimmed.dimensions(), (20, 20));
    }

    #[test]
    fn crop_matches_inner_rectangle() {
        let frame = canvas_with_rect((100, 80), [0, 0, 0], (10, 20, 30, 40), [255, 255, 255]);
        let trimmed = trim_border(&frame, [0, 0, 0], 10);
        assert_eq!(trimmed.dimensions(), (30, 40));
        // Every remaining pixel is the rectangle's colour.
        assert!(trimmed
            .to_rgb8()
            .pixels()
            .all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn single_foreground_pixel_yields_one_by_one() {
        let frame = canvas_with_rect((16, 16), [0, 0, 0], (5, 7, 1, 1), [200, 200, 200]);
        let trimmed = trim_border(&frame, [0, 0, 0], 10);
        assert_eq!(trimmed.dimensions(), (1, 1));
    }

    #[test]
    fn trim_is_idempotent() {
        let frame = canvas_with_rect((64, 64), [0, 0, 0], (8, 8, 20, 12), [255, 0, 0]);
        let once = trim_border(&frame, [0, 0, 0], 10);
        let twice = trim_border(&once, [0, 0, 0], 10);
        assert_eq!(once.dimensions(), twice.dimensions());
        assert_eq!(once.to_rgb8(), twice.to_rgb8());
    }

    #[test]
    fn higher_tolerance_never_grows_the_crop() {
        // A faint outer block around a bright core: low tolerance keeps both,
        // high tolerance keeps only the core.
        let mut img = RgbImage::from_pixel(60, 60, Rgb([0, 0, 0]));
        for yy in 10..50 {
            for xx in 10..50 {
                img.put_pixel(xx, yy, Rgb([30, 30, 30]));
            }
        }
        for yy in 20..40 {
            for xx in 20..40 {
                img.put_pixel(xx, yy, Rgb([255, 255, 255]));
            }
        }
        let frame = DynamicImage::ImageRgb8(img);

        let mut prev_area = u64::MAX;
        for tolerance in [0u8, 20, 40, 100, 200] {
            let trimmed = trim_border(&frame, [0, 0, 0], tolerance);
            let (w, h) = trimmed.dimensions();
            let area = u64::from(w) * u64::from(h);
            assert!(
                area <= prev_area,
                "tolerance {tolerance} grew the crop: {area} > {prev_area}"
            );
            prev_area = area;
        }

        // Spot-check the two regimes.
        assert_eq!(trim_border(&frame, [0, 0, 0], 10).dimensions(), (40, 40));
        assert_eq!(trim_border(&frame, [0, 0, 0], 40).dimensions(), (20, 20));
    }

    #[test]
    fn non_black_background_is_supported() {
        let frame = canvas_with_rect((50, 50), [255, 255, 255], (5, 5, 10, 10), [0, 0, 0]);
        let trimmed = trim_border(&frame, [255, 255, 255], 10);
        assert_eq!(trimmed.dimensions(), (10, 10));
    }

    #[test]
    fn rgba_input_keeps_alpha_channel() {
        let mut img = RgbaImage::from_pixel(30, 30, Rgba([0, 0, 0, 255]));
        img.put_pixel(10, 10, Rgba([255, 255, 255, 255]));
        img.put_pixel(19, 14, Rgba([255, 255, 255, 255]));
        let trimmed = trim_border(&DynamicImage::ImageRgba8(img), [0, 0, 0], 10);
        assert_eq!(trimmed.dimensions(), (10, 5));
        assert!(matches!(trimmed, DynamicImage::ImageRgba8(_)));
    }

    #[test]
    fn grayscale_input_is_converted_before_comparison() {
        let mut img = GrayImage::from_pixel(20, 20, Luma([0]));
        img.put_pixel(4, 4, Luma([255]));
        img.put_pixel(9, 9, Luma([255]));
        let trimmed = trim_border(&DynamicImage::ImageLuma8(img), [0, 0, 0], 10);
        assert_eq!(trimmed.dimensions(), (6, 6));
        assert!(matches!(trimmed, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn content_touching_the_edge_is_kept() {
        let frame = canvas_with_rect((40, 40), [0, 0, 0], (0, 0, 40, 5), [255, 255, 255]);
        let trimmed = trim_border(&frame, [0, 0, 0], 10);
        assert_eq!(trimmed.dimensions(), (40, 5));
    }
}
