//! Procedural traffic-scene drawing.
//!
//! Stands in for a real frame extraction: a fixed-size canvas with a
//! gradient sky, a road band with lane markers, a vehicle with a plate,
//! overlay labels, and a signal disc for red-light records.

use image::{Rgb, RgbImage};

use tscope_models::{format_timestamp, ViolationType};

use crate::font;

/// Gradient start color (top-left).
const GRADIENT_TOP: Rgb<u8> = Rgb([0x1e, 0x29, 0x3b]);

/// Gradient end color (bottom-right).
const GRADIENT_BOTTOM: Rgb<u8> = Rgb([0x33, 0x41, 0x55]);

/// Road band fill.
const ROAD: Rgb<u8> = Rgb([0x4b, 0x56, 0x63]);

/// Lane markers, plate and label color.
const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Violating vehicle fill.
const VEHICLE: Rgb<u8> = Rgb([0xef, 0x44, 0x44]);

/// Red traffic signal fill.
const SIGNAL: Rgb<u8> = Rgb([0xdc, 0x26, 0x26]);

/// Road band height in pixels.
const ROAD_HEIGHT: u32 = 60;

/// Radius of the red-light signal disc.
const SIGNAL_RADIUS: i64 = 15;

/// Canvas geometry and encoding settings.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            jpeg_quality: 80,
        }
    }
}

/// Center of the signal disc for the given canvas.
pub(crate) fn signal_center(config: &FrameConfig) -> (u32, u32) {
    (config.width.saturating_sub(50), 80)
}

/// Render the traffic scene.
///
/// With an annotation, the canvas carries the violation-type label, the
/// formatted timestamp, and (for red-light records) the signal disc.
/// Without one, the generic unlabeled scene is drawn.
pub fn render_scene(
    config: &FrameConfig,
    annotation: Option<(ViolationType, f64)>,
) -> RgbImage {
    let (w, h) = (config.width, config.height);
    let mut canvas = RgbImage::new(w, h);

    // Diagonal gradient background
    for y in 0..h {
        for x in 0..w {
            let t = (x + y) as f32 / (w + h).max(1) as f32;
            canvas.put_pixel(x, y, lerp(GRADIENT_TOP, GRADIENT_BOTTOM, t));
        }
    }

    // Road band
    fill_rect(&mut canvas, 0, h.saturating_sub(ROAD_HEIGHT), w, ROAD_HEIGHT, ROAD);

    // Lane markers
    let marker_y = h.saturating_sub(35);
    let mut marker_x = 50;
    while marker_x < w {
        fill_rect(&mut canvas, marker_x, marker_y, 40, 5, WHITE);
        marker_x += 100;
    }

    // Violating vehicle with its plate
    fill_rect(&mut canvas, (w / 2).saturating_sub(40), h.saturating_sub(120), 80, 50, VEHICLE);
    fill_rect(&mut canvas, (w / 2).saturating_sub(25), h.saturating_sub(85), 50, 15, WHITE);

    if let Some((violation_type, timestamp_secs)) = annotation {
        let title = format!("{} VIOLATION", violation_type.label().to_uppercase());
        font::draw_label(&mut canvas, &title, 20, 16, 2, WHITE);
        font::draw_label(&mut canvas, &format_timestamp(timestamp_secs), 20, 44, 2, WHITE);

        if violation_type == ViolationType::RedLight {
            let (cx, cy) = signal_center(config);
            fill_circle(&mut canvas, cx, cy, SIGNAL_RADIUS, SIGNAL);
        }
    }

    canvas
}

/// Linear interpolation between two colors.
fn lerp(a: Rgb<u8>, b: Rgb<u8>, t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |from: u8, to: u8| (from as f32 + (to as f32 - from as f32) * t).round() as u8;
    Rgb([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])])
}

/// Fill an axis-aligned rectangle, clipped to the canvas.
fn fill_rect(canvas: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = (x + width).min(canvas.width());
    let y_end = (y + height).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}

/// Fill a disc, clipped to the canvas.
fn fill_circle(canvas: &mut RgbImage, cx: u32, cy: u32, radius: i64, color: Rgb<u8>) {
    let (cx, cy) = (cx as i64, cy as i64);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let (px, py) = (cx + dx, cy + dy);
            if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height()
            {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_dimensions() {
        let config = FrameConfig::default();
        let canvas = render_scene(&config, None);
        assert_eq!(canvas.dimensions(), (640, 360));
    }

    #[test]
    fn test_red_light_scene_has_signal_disc() {
        let config = FrameConfig::default();
        let (cx, cy) = signal_center(&config);

        let red_light = render_scene(&config, Some((ViolationType::RedLight, 10.0)));
        assert_eq!(*red_light.get_pixel(cx, cy), SIGNAL);

        let speeding = render_scene(&config, Some((ViolationType::Speeding, 10.0)));
        assert_ne!(*speeding.get_pixel(cx, cy), SIGNAL);
    }

    #[test]
    fn test_road_band_present() {
        let config = FrameConfig::default();
        let canvas = render_scene(&config, None);
        assert_eq!(*canvas.get_pixel(5, 359), ROAD);
    }

    #[test]
    fn test_annotation_draws_labels() {
        let config = FrameConfig::default();
        let plain = render_scene(&config, None);
        let labeled = render_scene(&config, Some((ViolationType::WrongLane, 125.0)));

        // Label area differs between the annotated and generic scenes
        let differs = (16..60).any(|y| (20..200).any(|x| plain.get_pixel(x, y) != labeled.get_pixel(x, y)));
        assert!(differs);
    }

    #[test]
    fn test_small_canvas_does_not_panic() {
        let config = FrameConfig {
            width: 32,
            height: 24,
            jpeg_quality: 80,
        };
        render_scene(&config, Some((ViolationType::RedLight, 0.0)));
    }
}
