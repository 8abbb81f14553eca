//! RGBA colors, the palette used by the built-in widgets, and contrast helpers.

/// An 8-bit-per-channel sRGB color with alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
    /// Off-white used for window backgrounds and informational labels.
    pub const RAY_WHITE: Color = Color::rgb(245, 245, 245);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with alpha scaled to `alpha` (clamped to `[0, 1]`).
    pub fn fade(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self {
            a: (255.0 * alpha).round() as u8,
            ..self
        }
    }

    /// Perceived brightness on the YIQ scale, `0..=255`.
    pub fn yiq(self) -> u32 {
        (299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000
    }

    /// Black or white, whichever reads better on top of `self`.
    pub fn yiq_contrast(self) -> Color {
        if self.yiq() >= 128 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Composite `self` over `below` using `self`'s alpha.
    pub fn over(self, below: Color) -> Color {
        let a = self.a as u32;
        let mix = |top: u8, bottom: u8| ((top as u32 * a + bottom as u32 * (255 - a)) / 255) as u8;
        Color::rgb(mix(self.r, below.r), mix(self.g, below.g), mix(self.b, below.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_picks_black_on_light_backgrounds() {
        assert_eq!(Color::WHITE.yiq_contrast(), Color::BLACK);
        assert_eq!(Color::LIGHT_GRAY.yiq_contrast(), Color::BLACK);
        assert_eq!(Color::GRAY.yiq_contrast(), Color::BLACK);
    }

    #[test]
    fn contrast_picks_white_on_dark_backgrounds() {
        assert_eq!(Color::BLACK.yiq_contrast(), Color::WHITE);
        assert_eq!(Color::rgb(0, 0, 200).yiq_contrast(), Color::WHITE);
    }

    #[test]
    fn yiq_threshold() {
        // 128 exactly is treated as light.
        assert_eq!(Color::rgb(128, 128, 128).yiq(), 128);
        assert_eq!(Color::rgb(128, 128, 128).yiq_contrast(), Color::BLACK);
        assert_eq!(Color::rgb(127, 127, 127).yiq_contrast(), Color::WHITE);
    }

    #[test]
    fn fade_scales_alpha() {
        assert_eq!(Color::BLACK.fade(0.25).a, 64);
        assert_eq!(Color::BLACK.fade(2.0).a, 255);
        assert_eq!(Color::BLACK.fade(-1.0).a, 0);
    }

    #[test]
    fn over_blends_by_alpha() {
        assert_eq!(Color::BLACK.over(Color::WHITE), Color::BLACK);
        assert_eq!(Color::TRANSPARENT.over(Color::WHITE), Color::WHITE);
        let half = Color::BLACK.fade(0.5).over(Color::WHITE);
        assert!(half.r > 100 && half.r < 150);
    }
}
