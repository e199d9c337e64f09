//! Raster canvas that trail segments are stroked onto.
//!
//! The canvas maps a fixed world-space window onto a pixel grid (y up in
//! world space, y down in pixel space) surrounded by a uniform padding
//! border. Strokes are rasterised by `tiny-skia` with anti-aliasing and
//! butt caps, each segment composited on its own; `image` encodes the
//! final RGBA buffer as PNG.

use crate::{error::RenderError, segments::Segment, style::LineStyle};
use glam::Vec2;
use image::{ImageFormat, Rgb, Rgba, RgbaImage};
use log::{debug, info};
use std::path::Path;
use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Fixed geometry of the output image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Pixels per inch.
    pub dpi: f32,
    /// Size of the plotting area in inches, `(width, height)`.
    pub plot_inches: (f32, f32),
    /// Border around the plotting area in inches.
    pub pad_inches: f32,
    /// Visible world-space x range, `(min, max)`.
    pub x_range: (f32, f32),
    /// Visible world-space y range, `(min, max)`.
    pub y_range: (f32, f32),
    pub background: Rgb<u8>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            plot_inches: (6.2, 6.16),
            pad_inches: 0.1,
            x_range: (-3.0, 3.5),
            y_range: (-2.5, 2.5),
            background: crate::style::BACKGROUND,
        }
    }
}

impl CanvasConfig {
    fn plot_px(&self) -> Vec2 {
        Vec2::new(self.plot_inches.0, self.plot_inches.1) * self.dpi
    }

    fn pad_px(&self) -> f32 {
        self.pad_inches * self.dpi
    }

    /// Output image size in whole pixels, `(width, height)`.
    pub fn pixel_size(&self) -> (u32, u32) {
        let full = self.plot_px() + Vec2::splat(2.0 * self.pad_px());
        (full.x.round().max(0.0) as u32, full.y.round().max(0.0) as u32)
    }
}

pub struct Canvas {
    pixmap: Pixmap,
    cfg: CanvasConfig,
}

impl Canvas {
    /// Creates a canvas filled with the background colour.
    ///
    /// ### Errors
    /// [`RenderError::EmptyCanvas`] if the configuration yields a zero
    /// width or height.
    pub fn new(cfg: CanvasConfig) -> Result<Self, RenderError> {
        let (width, height) = cfg.pixel_size();
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::EmptyCanvas { width, height })?;

        let [r, g, b] = cfg.background.0;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));
        debug!("canvas {width}x{height} px at {} dpi", cfg.dpi);

        Ok(Self { pixmap, cfg })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Converts a world-space position to continuous pixel coordinates.
    ///
    /// The world window given by `x_range`/`y_range` fills the plot area
    /// inside the padding. The y-axis is flipped so that positive y goes up
    /// in world space.
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        let (x0, x1) = self.cfg.x_range;
        let (y0, y1) = self.cfg.y_range;
        let plot = self.cfg.plot_px();
        let pad = self.cfg.pad_px();

        Vec2::new(
            pad + (p.x - x0) / (x1 - x0) * plot.x,
            pad + (y1 - p.y) / (y1 - y0) * plot.y,
        )
    }

    fn stroke_for(&self, style: &LineStyle) -> Stroke {
        Stroke {
            width: style.width_px(self.cfg.dpi),
            line_cap: LineCap::Butt,
            ..Stroke::default()
        }
    }

    /// Strokes a single segment; zero-length segments leave no mark.
    fn stroke_segment(&mut self, seg: &Segment, paint: &Paint, stroke: &Stroke) {
        let a = self.world_to_screen(seg.from);
        let b = self.world_to_screen(seg.to);

        let mut pb = PathBuilder::new();
        pb.move_to(a.x, a.y);
        pb.line_to(b.x, b.y);
        let Some(path) = pb.finish() else {
            return;
        };

        self.pixmap
            .stroke_path(&path, paint, stroke, Transform::identity(), None);
    }

    /// Strokes one segment with anti-aliased edges and butt ends.
    ///
    /// Covered pixels are blended source-over with `style.color` at
    /// `style.alpha`. Parts outside the canvas are clipped.
    pub fn draw_segment(&mut self, seg: &Segment, style: &LineStyle) {
        let paint = style.paint();
        let stroke = self.stroke_for(style);
        self.stroke_segment(seg, &paint, &stroke);
    }

    /// Strokes every segment in order with the same style.
    ///
    /// Each segment is its own path, so overlapping trails build up
    /// brightness while abutting segments of one trail do not.
    pub fn draw_segments(&mut self, segments: &[Segment], style: &LineStyle) {
        let paint = style.paint();
        let stroke = self.stroke_for(style);
        for seg in segments {
            self.stroke_segment(seg, &paint, &stroke);
        }
        debug!(
            "drew {} segments at {:.2} px, alpha {}",
            segments.len(),
            stroke.width,
            style.alpha
        );
    }

    /// Copies the canvas into an 8-bit straight-alpha RGBA image.
    pub fn to_rgba8(&self) -> RgbaImage {
        let width = self.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    /// Writes the canvas to `path` as a PNG.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        self.to_rgba8()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| RenderError::Save(path.to_path_buf(), e))?;
        info!(
            "wrote {}x{} image to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
impl Canvas {
    fn pixel_at_screen(&self, x: u32, y: u32) -> [u8; 3] {
        let c = self.pixmap.pixel(x, y).unwrap().demultiply();
        [c.red(), c.green(), c.blue()]
    }

    fn pixel_at_world(&self, p: Vec2) -> [u8; 3] {
        let s = self.world_to_screen(p);
        self.pixel_at_screen(s.x as u32, s.y as u32)
    }

    fn is_blank(&self) -> bool {
        let [r, g, b] = self.cfg.background.0;
        self.pixmap
            .pixels()
            .iter()
            .all(|p| (p.red(), p.green(), p.blue()) == (r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(CanvasConfig::default()).unwrap()
    }

    fn close(a: [u8; 3], b: [u8; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 2)
    }

    fn seg(from: (f32, f32), to: (f32, f32)) -> Segment {
        Segment {
            from: Vec2::new(from.0, from.1),
            to: Vec2::new(to.0, to.1),
        }
    }

    #[test]
    fn default_size_includes_padding() {
        assert_eq!(CanvasConfig::default().pixel_size(), (1920, 1908));
        let c = canvas();
        assert_eq!((c.width(), c.height()), (1920, 1908));
    }

    #[test]
    fn new_canvas_is_background() {
        assert!(canvas().is_blank());
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let cfg = CanvasConfig {
            plot_inches: (0.0, 2.0),
            pad_inches: 0.0,
            ..CanvasConfig::default()
        };
        assert!(matches!(
            Canvas::new(cfg),
            Err(RenderError::EmptyCanvas { width: 0, .. })
        ));
    }

    #[test]
    fn world_corners_map_to_plot_corners() {
        let c = canvas();
        let top_left = c.world_to_screen(Vec2::new(-3.0, 2.5));
        let bottom_right = c.world_to_screen(Vec2::new(3.5, -2.5));

        assert!(top_left.distance(Vec2::new(30.0, 30.0)) < 1e-3);
        assert!(bottom_right.distance(Vec2::new(1890.0, 1878.0)) < 1e-2);
    }

    #[test]
    fn stroke_lights_pixels_along_segment() {
        let mut c = canvas();
        c.draw_segment(&seg((-1.0, 0.0), (1.0, 0.0)), &LineStyle::CORE);

        // 0.6 of 0xE0 and 0xFF over black.
        let on = c.pixel_at_world(Vec2::new(0.0, 0.0));
        assert!(close(on, [134, 153, 153]), "{on:?}");

        let off = c.pixel_at_world(Vec2::new(0.0, 1.0));
        assert_eq!(off, [0, 0, 0]);
    }

    #[test]
    fn overlapping_strokes_accumulate() {
        let mut c = canvas();
        let s = seg((-1.0, 0.0), (1.0, 0.0));

        c.draw_segment(&s, &LineStyle::GLOW);
        let once = c.pixel_at_world(Vec2::ZERO)[2];
        c.draw_segment(&s, &LineStyle::GLOW);
        let twice = c.pixel_at_world(Vec2::ZERO)[2];

        // 10% of full blue, then another 10% of what is left.
        assert!(once.abs_diff(26) <= 2, "{once}");
        assert!(twice.abs_diff(48) <= 3, "{twice}");
    }

    #[test]
    fn abutting_segments_do_not_double_up_at_the_joint() {
        let mut c = canvas();
        c.draw_segments(
            &[seg((-1.0, 0.0), (0.0, 0.0)), seg((0.0, 0.0), (1.0, 0.0))],
            &LineStyle::GLOW,
        );

        let joint = c.pixel_at_world(Vec2::ZERO)[2];
        let mid = c.pixel_at_world(Vec2::new(-0.5, 0.0))[2];
        assert!(mid.abs_diff(26) <= 2, "{mid}");
        assert!(joint.abs_diff(mid) <= 3, "joint {joint} vs mid {mid}");
    }

    #[test]
    fn butt_ends_stop_at_the_endpoint() {
        let mut c = canvas();
        c.draw_segment(&seg((-1.0, 0.0), (0.0, 0.0)), &LineStyle::GLOW);

        // Half the glow width past the end, still on the line's axis.
        let end = c.world_to_screen(Vec2::ZERO);
        let past = (end.x + 4.0) as u32;
        assert_eq!(c.pixel_at_screen(past, end.y as u32), [0, 0, 0]);
    }

    #[test]
    fn strokes_outside_the_window_are_clipped() {
        let mut c = canvas();
        c.draw_segments(
            &[seg((10.0, 10.0), (12.0, 10.0)), seg((-20.0, -9.0), (-8.0, -9.0))],
            &LineStyle::GLOW,
        );
        assert!(c.is_blank());
    }

    #[test]
    fn strokes_crossing_the_border_do_not_panic() {
        let mut c = canvas();
        c.draw_segment(&seg((-10.0, 0.0), (10.0, 0.0)), &LineStyle::CORE);
        assert!(!c.is_blank());
    }

    #[test]
    fn save_writes_a_png_of_canvas_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trails.png");

        let mut c = canvas();
        c.draw_segment(&seg((-1.0, 0.0), (1.0, 0.0)), &LineStyle::CORE);
        c.save(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (1920, 1908));
        let s = c.world_to_screen(Vec2::ZERO);
        let px = img.get_pixel(s.x as u32, s.y as u32).0;
        assert_eq!(px[3], 255);
        assert_eq!([px[0], px[1], px[2]], c.pixel_at_world(Vec2::ZERO));
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("trails.png");

        let err = canvas().save(&path).unwrap_err();
        assert!(matches!(err, RenderError::Save(p, _) if p == path));
    }
}
