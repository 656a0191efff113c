use std::ops::Range;

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::paint::{Paint, PaintStyle, TextAlign};

/// Software canvas over an RGBA8 frame buffer.
///
/// Coordinates passed in are logical pixels and are multiplied by `scale`
/// before rasterizing. Text is only drawn once a font is attached.
pub struct PixelCanvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    scale: f32,
    font: Option<&'a Font<'a>>,
}

impl<'a> PixelCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
            scale: 1.0,
            font: None,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_font(mut self, font: &'a Font<'a>) -> Self {
        self.font = Some(font);
        self
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Reads back one pixel as `[r, g, b, a]`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(self.frame.get(idx..idx + 4)?);
        Some(out)
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color, coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 4;
        if idx + 4 > self.frame.len() {
            return;
        }
        let a = (coverage * color.alpha()).clamp(0.0, 1.0);
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (channel, value) in src.iter().enumerate() {
            let dst = self.frame[idx + channel] as f32;
            self.frame[idx + channel] = (value * a + dst * (1.0 - a)).round() as u8;
        }
        let dst_alpha = self.frame[idx + 3] as f32 / 255.0;
        self.frame[idx + 3] = ((a + dst_alpha * (1.0 - a)) * 255.0).round() as u8;
    }

    fn plot(&mut self, x: usize, y: usize, paint: &Paint, coverage: f32) {
        let coverage = if paint.anti_alias {
            coverage.clamp(0.0, 1.0)
        } else if coverage >= 0.5 {
            1.0
        } else {
            0.0
        };
        if coverage > 0.01 {
            self.set_pixel(x, y, paint.color, coverage);
        }
    }

    /// Pixel indices whose centers may fall in `[min, max]`.
    fn span(min: f32, max: f32, limit: usize) -> Range<usize> {
        let start = (min.floor() - 1.0).max(0.0) as usize;
        let end = ((max.ceil() + 1.0).max(0.0) as usize).min(limit);
        start.min(end)..end
    }

    fn scaled(&self, value: f32) -> f32 {
        value * self.scale
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

impl Canvas for PixelCanvas<'_> {
    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let (cx, cy) = (self.scaled(center.x), self.scaled(center.y));
        let radius = self.scaled(radius);
        let half = self.scaled(paint.stroke_width) / 2.0;
        let reach = match paint.style {
            PaintStyle::Fill => radius,
            PaintStyle::Stroke => radius + half,
        };
        if !(reach > 0.0) {
            return;
        }

        for y in Self::span(cy - reach, cy + reach, self.height) {
            for x in Self::span(cx - reach, cx + reach, self.width) {
                let dist = (x as f32 + 0.5 - cx).hypot(y as f32 + 0.5 - cy);
                let coverage = match paint.style {
                    PaintStyle::Fill => radius + 0.5 - dist,
                    PaintStyle::Stroke => half + 0.5 - (dist - radius).abs(),
                };
                self.plot(x, y, paint, coverage);
            }
        }
    }

    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: &Paint,
    ) {
        let center = oval.center();
        let (cx, cy) = (self.scaled(center.x), self.scaled(center.y));
        let rx = self.scaled(oval.width()) / 2.0;
        let ry = self.scaled(oval.height()) / 2.0;
        let half = match paint.style {
            PaintStyle::Fill => 0.0,
            PaintStyle::Stroke => self.scaled(paint.stroke_width) / 2.0,
        };
        if !(rx > 0.0 && ry > 0.0) || sweep_angle == 0.0 || !sweep_angle.is_finite() {
            return;
        }
        let filled = use_center || paint.style == PaintStyle::Fill;

        for y in Self::span(cy - ry - half, cy + ry + half, self.height) {
            for x in Self::span(cx - rx - half, cx + rx + half, self.width) {
                let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
                if !in_sweep(dy.atan2(dx).to_degrees(), start_angle, sweep_angle) {
                    continue;
                }
                let dist = dx.hypot(dy);
                let normalized = (dx / rx).hypot(dy / ry);
                // Radius of the ellipse along this pixel's direction.
                let boundary = if normalized > 0.0 {
                    dist / normalized
                } else {
                    rx.min(ry)
                };
                let coverage = if filled {
                    boundary + half + 0.5 - dist
                } else {
                    half + 0.5 - (dist - boundary).abs()
                };
                self.plot(x, y, paint, coverage);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        let Some(font) = self.font else {
            return;
        };
        let text_size = self.scaled(paint.text_size);
        // glyph layout overflows far before text this large could be seen
        let max_text_size = self.width.max(self.height) as f32 * 4.0;
        if text.is_empty() || !(text_size > 0.0 && text_size <= max_text_size) {
            return;
        }
        let scale = Scale::uniform(text_size);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .collect();

        let (min_x, max_x, min_y, max_y) = glyphs
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .fold(
                (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
                |(min_x, max_x, min_y, max_y), bb| {
                    (
                        min_x.min(bb.min.x),
                        max_x.max(bb.max.x),
                        min_y.min(bb.min.y),
                        max_y.max(bb.max.y),
                    )
                },
            );
        if min_x >= max_x || min_y >= max_y {
            return;
        }
        let width_px = max_x - min_x;
        let height_px = max_y - min_y;

        let anchor_x = self.scaled(x).round() as i32;
        let offset_x = match paint.text_align {
            TextAlign::Left => anchor_x,
            TextAlign::Center => anchor_x - width_px / 2,
            TextAlign::Right => anchor_x - width_px,
        };
        let offset_y = self.scaled(y).round() as i32 - height_px / 2;

        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = offset_x + gx as i32 + bb.min.x - min_x;
                    let py = offset_y + gy as i32 + bb.min.y - min_y;
                    if px >= 0 && py >= 0 {
                        self.plot(px as usize, py as usize, paint, v);
                    }
                });
            }
        }
    }
}

/// Whether `angle` lies on the sweep from `start` (both in degrees, any
/// range). Negative sweeps run counter-clockwise.
fn in_sweep(angle: f32, start: f32, sweep: f32) -> bool {
    if sweep.abs() >= 360.0 {
        return true;
    }
    if sweep > 0.0 {
        (angle - start).rem_euclid(360.0) <= sweep
    } else {
        (start - angle).rem_euclid(360.0) <= -sweep
    }
}
