use bon::Builder;

use crate::color::Color;
use crate::config::ProgressOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Horizontal anchoring of text relative to the x coordinate it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Typeface {
    #[default]
    Default,
    Monospace,
}

/// How a primitive is drawn: fill or stroke, color, and text parameters.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Paint {
    #[builder(default)]
    pub style: PaintStyle,
    #[builder(default = 0.0)]
    pub stroke_width: f32,
    #[builder(default = Color::BLACK)]
    pub color: Color,
    #[builder(default = false)]
    pub anti_alias: bool,
    #[builder(default = false)]
    pub dither: bool,
    #[builder(default)]
    pub text_align: TextAlign,
    #[builder(default = 12.0)]
    pub text_size: f32,
    #[builder(default)]
    pub typeface: Typeface,
}

impl Default for Paint {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The four paints the ring is drawn with, built once per configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStyle {
    pub label: Paint,
    pub inner: Paint,
    pub outer: Paint,
    pub progress: Paint,
}

impl CompiledStyle {
    pub fn compile(options: &ProgressOptions) -> Self {
        Self {
            label: Paint::builder()
                .anti_alias(true)
                .text_align(TextAlign::Center)
                .typeface(Typeface::Monospace)
                .text_size(options.text_size)
                .color(options.text_color)
                .build(),
            inner: Paint::builder()
                .anti_alias(true)
                .dither(true)
                .style(PaintStyle::Fill)
                .color(options.inner_color)
                .build(),
            outer: Paint::builder()
                .anti_alias(true)
                .style(PaintStyle::Stroke)
                .stroke_width(options.stroke_width)
                .color(options.outer_color)
                .build(),
            progress: Paint::builder()
                .anti_alias(true)
                .style(PaintStyle::Stroke)
                .stroke_width(options.stroke_width)
                .color(options.progress_color)
                .build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_style_follows_options() {
        let options = ProgressOptions::builder()
            .stroke_width(6.0)
            .text_size(18.0)
            .outer_color(Color::RED)
            .build();
        let style = CompiledStyle::compile(&options);

        assert_eq!(style.label.text_align, TextAlign::Center);
        assert_eq!(style.label.typeface, Typeface::Monospace);
        assert_eq!(style.label.text_size, 18.0);
        assert_eq!(style.label.color, Color::WHITE);

        assert_eq!(style.inner.style, PaintStyle::Fill);
        assert!(style.inner.dither);
        assert_eq!(style.inner.color, Color::GREEN);

        assert_eq!(style.outer.style, PaintStyle::Stroke);
        assert_eq!(style.outer.stroke_width, 6.0);
        assert_eq!(style.outer.color, Color::RED);

        assert_eq!(style.progress.style, PaintStyle::Stroke);
        assert_eq!(style.progress.stroke_width, 6.0);
        assert!(style.progress.anti_alias);
    }
}
