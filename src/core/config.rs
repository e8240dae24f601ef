use super::constants::MAX_PARTICLE_COUNT;

/// User-adjustable settings, read every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Radians per frame of auto-rotation.
    pub speed: f32,
    /// Scale multiplier applied after the perspective divide.
    pub size: f32,
    /// Hue offset in degrees.
    pub base_hue: f32,
    pub particle_count: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            speed: 0.01,
            size: 1.0,
            base_hue: 0.0,
            particle_count: 800,
        }
    }
}

/// Parse a float control value. `None` for anything that is not a number.
#[inline]
pub fn parse_float_input(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Parse a particle count the way a number input's integer prefix reads:
/// `"12abc"` is 12, negatives clamp to 0, no digits at all is `None`.
/// Counts above [`MAX_PARTICLE_COUNT`] are capped.
pub fn parse_count_input(value: &str) -> Option<usize> {
    let s = value.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }
    let count = digits[..end]
        .parse::<usize>()
        .unwrap_or(MAX_PARTICLE_COUNT);
    Some(count.min(MAX_PARTICLE_COUNT))
}
