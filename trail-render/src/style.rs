use image::Rgb;
use tiny_skia::{Color, Paint};

/// Pure black, for maximum contrast.
pub const BACKGROUND: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
/// Cyan neon used for the glow pass.
pub const NEON: Rgb<u8> = Rgb([0x00, 0xFF, 0xFF]);
/// Near-white cyan used for the bright core of each trail.
pub const NEON_CORE: Rgb<u8> = Rgb([0xE0, 0xFF, 0xFF]);

/// How one pass of trail segments is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Rgb<u8>,
    /// Stroke width in points (1/72 inch).
    pub width_pt: f32,
    /// Opacity of a fully covered pixel, in `[0, 1]`.
    pub alpha: f32,
}

impl LineStyle {
    /// Wide, faint halo drawn first.
    pub const GLOW: Self = Self {
        color: NEON,
        width_pt: 2.5,
        alpha: 0.1,
    };

    /// Narrow, bright stroke drawn over the glow.
    pub const CORE: Self = Self {
        color: NEON_CORE,
        width_pt: 0.6,
        alpha: 0.6,
    };

    pub fn width_px(&self, dpi: f32) -> f32 {
        self.width_pt * dpi / 72.0
    }

    /// Anti-aliased solid paint in this style's colour and opacity.
    pub fn paint(&self) -> Paint<'static> {
        let [r, g, b] = self.color.0;
        let mut color = Color::from_rgba8(r, g, b, 255);
        color.set_alpha(self.alpha);

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        paint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_dpi() {
        assert_eq!(LineStyle::GLOW.width_px(72.0), 2.5);
        assert_eq!(LineStyle::GLOW.width_px(144.0), 5.0);
        assert!((LineStyle::CORE.width_px(300.0) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn paint_carries_style_opacity() {
        let paint = LineStyle::CORE.paint();
        assert!(paint.anti_alias);
        match paint.shader {
            tiny_skia::Shader::SolidColor(c) => {
                assert!((c.alpha() - 0.6).abs() < 1e-6);
                assert!((c.red() - 224.0 / 255.0).abs() < 1e-6);
            }
            _ => panic!("expected a solid colour"),
        }
    }

    #[test]
    fn glow_is_wider_and_fainter_than_core() {
        assert!(LineStyle::GLOW.width_pt > LineStyle::CORE.width_pt);
        assert!(LineStyle::GLOW.alpha < LineStyle::CORE.alpha);
    }
}
