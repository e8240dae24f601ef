use super::constants::HUE_PERIOD;
use super::projection::Viewport;

/// Colour in CSS `hsl()` terms: hue in degrees, saturation and lightness in
/// percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Reduce any finite hue into `[0, 360)`, negatives included.
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let h = hue.rem_euclid(HUE_PERIOD);
    // rem_euclid rounds tiny negatives up to exactly 360
    if h >= HUE_PERIOD {
        0.0
    } else {
        h
    }
}

/// Drawing backend for one frame.
pub trait Painter {
    /// Erase the whole surface to transparent.
    fn clear(&mut self, viewport: Viewport);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Hsl);
}
