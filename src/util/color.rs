//! Color type re-export and RGBA helpers.
//!
//! Colors are stored as `glam::Vec4` in `[r, g, b, a]` order, channels in
//! the `0.0..=1.0` range.

pub use glam::Vec4;

/// Four-component color, `x = r`, `y = g`, `z = b`, `w = a`.
pub type Rgba = Vec4;

/// Build a color from its four channels.
#[inline]
pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Rgba {
    Vec4::new(r, g, b, a)
}

/// True if any of the red, green or blue channels is non-zero.
#[inline]
pub fn has_rgb(color: Rgba) -> bool {
    color.x != 0.0 || color.y != 0.0 || color.z != 0.0
}

/// Same color with alpha replaced.
#[inline]
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    Vec4::new(color.x, color.y, color.z, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_rgb() {
        assert!(has_rgb(rgba(0.0, 0.0, 0.1, 0.0)));
        assert!(!has_rgb(rgba(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_with_alpha() {
        let c = with_alpha(rgba(0.8, 0.6, 0.4, 0.0), 1.0);
        assert_eq!(c, rgba(0.8, 0.6, 0.4, 1.0));
    }
}
