//! Color helpers and the named colors used by the patterns.
//!
//! HSV (Hue, Saturation, Value) is the natural space for hue sweeps like the
//! rainbow pattern; everything is converted to `palette::Srgb` before it lands
//! in a [`PixelBuffer`](crate::frame::PixelBuffer).

use palette::{FromColor, Hsv, Srgb};

/// Pure black. Pixels equal to this are considered off.
pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const ORANGE: Srgb = Srgb::new(1.0, 0.647_058_8, 0.0);
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 0.501_960_8, 0.0);
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);
pub const INDIGO: Srgb = Srgb::new(0.294_117_6, 0.0, 0.509_803_9);
pub const VIOLET: Srgb = Srgb::new(0.933_333_3, 0.509_803_9, 0.933_333_3);

/// Colors drawn from on every activation.
pub const PALETTE: [Srgb; 7] = [RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, VIOLET];

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees, saturation and value in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

/// Scales each component by `brightness`, truncated to 8-bit steps the way
/// the strip driver will see it.
pub fn scaled(color: Srgb, brightness: f32) -> Srgb {
    let brightness = brightness.clamp(0.0, 1.0);
    Srgb::new(
        quantize(color.red * brightness),
        quantize(color.green * brightness),
        quantize(color.blue * brightness),
    )
}

#[inline]
fn quantize(component: f32) -> f32 {
    let level = (component * 255.0) as u8;
    level as f32 / 255.0
}

/// Returns true if the color is exactly black.
#[inline]
pub fn is_off(color: Srgb) -> bool {
    color == BLACK
}
