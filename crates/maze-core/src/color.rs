//! Color: packed RGB with HSV construction, and the solution progress
//! mapping.

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Construct from hue (degrees), saturation and value (both 0.0–1.0).
    pub fn from_hsv(hue: f64, sat: f64, val: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = val * sat;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = val - c;
        Self::from_rgb(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Color of a revealed solution cell, as a function of its distance to the
/// end and the total path length.
///
/// The hue runs from 120 (green) at the start, where `dist_to_end`
/// equals `path_len`, to 270 (violet) at the end. The division is integer
/// division on purpose: consecutive cells of a long path may share a hue.
pub fn progress_color(dist_to_end: u32, path_len: u32) -> Color {
    if path_len == 0 {
        return Color::from_hsv(270.0, 1.0, 1.0);
    }
    let hue = 270 - (150 * dist_to_end / path_len) as i32;
    Color::from_hsv(hue as f64, 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_round_trip() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!(c.r(), 0xAB);
        assert_eq!(c.g(), 0xCD);
        assert_eq!(c.b(), 0xEF);
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::from_rgb(255, 0, 0));
        assert_eq!(Color::from_hsv(120.0, 1.0, 1.0), Color::from_rgb(0, 255, 0));
        assert_eq!(Color::from_hsv(240.0, 1.0, 1.0), Color::from_rgb(0, 0, 255));
    }

    #[test]
    fn hsv_zero_value_is_black() {
        assert_eq!(Color::from_hsv(200.0, 1.0, 0.0), Color::from_rgb(0, 0, 0));
    }

    #[test]
    fn progress_endpoints() {
        // Start of the walk: green.
        assert_eq!(progress_color(10, 10), Color::from_hsv(120.0, 1.0, 1.0));
        // End of the walk: violet.
        assert_eq!(progress_color(0, 10), Color::from_hsv(270.0, 1.0, 1.0));
        // Degenerate single-cell path: violet too.
        assert_eq!(progress_color(0, 0), Color::from_hsv(270.0, 1.0, 1.0));
    }

    #[test]
    fn progress_hue_is_monotone() {
        let len = 7;
        for d in 1..=len {
            let nearer = progress_color(d - 1, len);
            let farther = progress_color(d, len);
            // Violet has more red and no less blue than green.
            assert!(nearer.r() >= farther.r());
        }
    }
}
