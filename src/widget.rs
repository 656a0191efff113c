use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::ProgressOptions;
use crate::error::{ConfigurationError, DegenerateState};
use crate::geometry::{MeasureSpec, Rect, RingLayout, Size};
use crate::paint::CompiledStyle;

/// Circular progress indicator: an outer ring, an inner disc, a progress arc
/// sweeping clockwise from 12 o'clock, and a centered label.
///
/// The widget owns its options and the paints compiled from them. Paints are
/// rebuilt on every accepted [`configure`](Self::configure) and reused by
/// every [`draw`](Self::draw) in between.
#[derive(Debug, Clone)]
pub struct RingProgress {
    options: ProgressOptions,
    style: CompiledStyle,
    style_generation: u64,
    repaint_requested: bool,
}

impl Default for RingProgress {
    fn default() -> Self {
        let options = ProgressOptions::default();
        Self {
            style: CompiledStyle::compile(&options),
            options,
            style_generation: 0,
            repaint_requested: true,
        }
    }
}

impl RingProgress {
    pub fn new(options: ProgressOptions) -> Result<Self, ConfigurationError> {
        let mut widget = Self::default();
        widget.configure(options)?;
        Ok(widget)
    }

    /// Replaces the options after validating them. On error nothing changes.
    pub fn configure(&mut self, options: ProgressOptions) -> Result<(), ConfigurationError> {
        if let Err(err) = options.validate() {
            warn!(error = %err, "rejected ring progress configuration");
            return Err(err);
        }

        self.style = CompiledStyle::compile(&options);
        self.style_generation += 1;
        self.options = options;
        self.repaint_requested = true;
        debug!(generation = self.style_generation, "compiled ring progress style");

        if let Some(state) = self.degenerate_state() {
            warn!("{state}");
        }
        Ok(())
    }

    pub fn options(&self) -> &ProgressOptions {
        &self.options
    }

    pub fn style(&self) -> &CompiledStyle {
        &self.style
    }

    /// Incremented each time the compiled style is rebuilt.
    pub fn style_generation(&self) -> u64 {
        self.style_generation
    }

    pub fn repaint_requested(&self) -> bool {
        self.repaint_requested
    }

    /// Returns whether a repaint was requested since the last call, and
    /// resets the request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    pub fn degenerate_state(&self) -> Option<DegenerateState> {
        let ProgressOptions {
            current_progress,
            max_progress,
            ..
        } = self.options;
        (current_progress > max_progress).then_some(DegenerateState::ProgressExceedsMax {
            current: current_progress,
            max: max_progress,
        })
    }

    // ========================================================================
    // SETTERS
    // ========================================================================

    fn update(
        &mut self,
        change: impl FnOnce(&mut ProgressOptions),
    ) -> Result<(), ConfigurationError> {
        let mut options = self.options.clone();
        change(&mut options);
        self.configure(options)
    }

    pub fn set_progress(&mut self, current_progress: i32) -> Result<(), ConfigurationError> {
        self.update(|options| options.current_progress = current_progress)
    }

    pub fn set_max_progress(&mut self, max_progress: i32) -> Result<(), ConfigurationError> {
        self.update(|options| options.max_progress = max_progress)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ConfigurationError> {
        let text = text.into();
        self.update(|options| options.text = text)
    }

    pub fn set_text_size(&mut self, text_size: f32) -> Result<(), ConfigurationError> {
        self.update(|options| options.text_size = text_size)
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<(), ConfigurationError> {
        self.update(|options| options.radius = radius)
    }

    pub fn set_stroke_width(&mut self, stroke_width: f32) -> Result<(), ConfigurationError> {
        self.update(|options| options.stroke_width = stroke_width)
    }

    /// Sets text, inner disc, outer ring and progress arc colors in one go.
    pub fn set_colors(
        &mut self,
        text: Color,
        inner: Color,
        outer: Color,
        progress: Color,
    ) -> Result<(), ConfigurationError> {
        self.update(|options| {
            options.text_color = text;
            options.inner_color = inner;
            options.outer_color = outer;
            options.progress_color = progress;
        })
    }

    // ========================================================================
    // LAYOUT AND DRAWING
    // ========================================================================

    /// Size the widget wants under the host's constraints. Exact constraints
    /// are honored as is; otherwise the ring plus padding is requested.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let ProgressOptions {
            radius,
            stroke_width,
            padding,
            ..
        } = self.options;
        let ring = radius * 2.0 + stroke_width * 2.0;
        Size::new(
            width.resolve(padding.horizontal() + ring),
            height.resolve(padding.vertical() + ring),
        )
    }

    pub fn layout(&self, bounds: Rect) -> RingLayout {
        RingLayout::new(
            bounds,
            &self.options.padding,
            self.options.radius,
            self.options.stroke_width,
            self.options.current_progress,
            self.options.max_progress,
        )
    }

    /// Paints ring, disc, arc and label, back to front.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, bounds: Rect) {
        let layout = self.layout(bounds);

        canvas.draw_circle(layout.center, layout.outer_radius, &self.style.outer);
        canvas.draw_circle(layout.center, layout.inner_radius, &self.style.inner);
        canvas.draw_arc(
            layout.arc_oval,
            layout.start_angle,
            layout.sweep,
            false,
            &self.style.progress,
        );
        canvas.draw_text(
            &self.options.text,
            layout.center.x,
            layout.center.y,
            &self.style.label,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, Scene};
    use crate::config::Padding;
    use crate::geometry::Point;

    fn ring(radius: f32, stroke_width: f32) -> RingProgress {
        RingProgress::new(
            ProgressOptions::builder()
                .radius(radius)
                .stroke_width(stroke_width)
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn exact_constraints_win() {
        let widget = ring(33.0, 7.0);
        assert_eq!(
            widget.measure(MeasureSpec::Exact(120.0), MeasureSpec::Exact(80.0)),
            Size::new(120.0, 80.0)
        );
    }

    #[test]
    fn intrinsic_size_includes_stroke_and_padding() {
        let widget = RingProgress::new(
            ProgressOptions::builder()
                .radius(20.0)
                .stroke_width(10.0)
                .padding(Padding::new(1.0, 2.0, 3.0, 4.0))
                .build(),
        )
        .unwrap();

        assert_eq!(
            widget.measure(MeasureSpec::Unconstrained, MeasureSpec::AtMost(10.0)),
            Size::new(64.0, 66.0)
        );
        assert_eq!(
            widget.measure(MeasureSpec::Exact(100.0), MeasureSpec::Unconstrained),
            Size::new(100.0, 66.0)
        );
    }

    #[test]
    fn draws_ring_disc_arc_and_label_in_order() {
        let mut widget = ring(20.0, 10.0);
        widget.set_text("25%").unwrap();
        widget.set_progress(25).unwrap();

        let mut scene = Scene::new();
        widget.draw(&mut scene, Rect::new(0.0, 0.0, 200.0, 200.0));

        let center = Point::new(100.0, 100.0);
        assert_eq!(
            scene.commands(),
            &[
                DrawCommand::Circle {
                    center,
                    radius: 25.0,
                    paint: widget.style().outer.clone(),
                },
                DrawCommand::Circle {
                    center,
                    radius: 20.0,
                    paint: widget.style().inner.clone(),
                },
                DrawCommand::Arc {
                    oval: Rect::new(5.0, 5.0, 55.0, 55.0),
                    start_angle: -90.0,
                    sweep_angle: 90.0,
                    use_center: false,
                    paint: widget.style().progress.clone(),
                },
                DrawCommand::Text {
                    text: "25%".to_string(),
                    x: 100.0,
                    y: 100.0,
                    paint: widget.style().label.clone(),
                },
            ]
        );
    }

    #[test]
    fn rejected_configuration_keeps_last_good_state() {
        let mut widget = ring(20.0, 10.0);
        widget.set_progress(40).unwrap();
        let generation = widget.style_generation();
        let before = widget.options().clone();

        let err = widget.set_max_progress(0).unwrap_err();
        assert_eq!(err, ConfigurationError::NonPositiveMaxProgress(0));
        assert_eq!(widget.options(), &before);
        assert_eq!(widget.style_generation(), generation);

        let err = widget.set_radius(-5.0).unwrap_err();
        assert_eq!(err, ConfigurationError::NonPositiveRadius(-5.0));
        assert_eq!(widget.options().radius, 20.0);
    }

    #[test]
    fn overshooting_progress_is_kept_but_clamped_when_drawn() {
        let mut widget = RingProgress::default();
        widget.set_progress(130).unwrap();

        assert_eq!(widget.options().current_progress, 130);
        assert_eq!(
            widget.degenerate_state(),
            Some(DegenerateState::ProgressExceedsMax {
                current: 130,
                max: 100
            })
        );
        assert_eq!(widget.layout(Rect::new(0.0, 0.0, 60.0, 60.0)).sweep, 360.0);
    }

    #[test]
    fn draw_is_pure_and_never_recompiles_style() {
        let widget = ring(20.0, 10.0);
        let generation = widget.style_generation();
        let bounds = Rect::new(0.0, 0.0, 60.0, 60.0);

        let mut first = Scene::new();
        let mut second = Scene::new();
        widget.draw(&mut first, bounds);
        widget.draw(&mut second, bounds);

        assert_eq!(first, second);
        assert_eq!(widget.style_generation(), generation);
    }

    #[test]
    fn mutations_request_repaint() {
        let mut widget = ring(20.0, 10.0);
        assert!(widget.take_repaint_request());
        assert!(!widget.take_repaint_request());

        widget.set_progress(10).unwrap();
        assert!(widget.take_repaint_request());

        assert!(widget.set_text_size(0.0).is_err());
        assert!(!widget.take_repaint_request());
    }

    #[test]
    fn set_colors_rebuilds_paints() {
        let mut widget = RingProgress::default();
        widget
            .set_colors(Color::BLACK, Color::RED, Color::WHITE, Color::BLUE)
            .unwrap();
        let style = widget.style();
        assert_eq!(style.label.color, Color::BLACK);
        assert_eq!(style.inner.color, Color::RED);
        assert_eq!(style.outer.color, Color::WHITE);
        assert_eq!(style.progress.color, Color::BLUE);
    }
}
