//! Color mixing and HSV conversion helpers.

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use rgb::RGBA8;

use crate::angles::FULL_ANGLE;
use crate::path::Float;

fn mix_channel(left: u8, right: u8, ratio: Float) -> u8 {
    (left as Float * (1.0 - ratio) + right as Float * ratio).round() as u8
}

/// Blends two colors channel-wise, `ratio` being the share of `right`.
pub fn mix_colors(left: RGBA8, right: RGBA8, ratio: Float) -> RGBA8 {
    RGBA8::new(
        mix_channel(left.r, right.r, ratio),
        mix_channel(left.g, right.g, ratio),
        mix_channel(left.b, right.b, ratio),
        mix_channel(left.a, right.a, ratio),
    )
}

fn channel(unit: Float) -> u8 {
    (unit * 255.0).round() as u8
}

/// An opaque color from hue (degrees, wrapped into a full turn),
/// saturation and value (both in `0.0..=1.0`).
pub fn hsv_color(hue: Float, saturation: Float, value: Float) -> RGBA8 {
    let hue = hue % FULL_ANGLE;
    let chroma = value * saturation;
    let hue6 = hue / 60.0;
    let x = chroma * (1.0 - (hue6 % 2.0 - 1.0).abs());
    let (r, g, b) = match hue6 as i32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let min = value - chroma;
    RGBA8::new(channel(r + min), channel(g + min), channel(b + min), u8::MAX)
}

// hue, saturation, value; the scratch stays on the stack
fn to_hsv(color: RGBA8) -> [Float; 3] {
    let r = color.r as Float / 255.0;
    let g = color.g as Float / 255.0;
    let b = color.b as Float / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let hue = if hue < 0.0 { hue + FULL_ANGLE } else { hue };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    [hue, saturation, max]
}

/// The hue of a color, in degrees (`0.0..360.0`).
pub fn hue(color: RGBA8) -> Float {
    to_hsv(color)[0]
}

/// The saturation of a color, in `0.0..=1.0`.
pub fn saturation(color: RGBA8) -> Float {
    to_hsv(color)[1]
}

/// The value (brightness) of a color, in `0.0..=1.0`.
pub fn value(color: RGBA8) -> Float {
    to_hsv(color)[2]
}
