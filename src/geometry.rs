use crate::config::Padding;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Resolved size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, edges in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn from_origin_size(origin: Point, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Shrinks the rectangle by `padding` on each side.
    pub fn inset(&self, padding: &Padding) -> Self {
        Self::new(
            self.left + padding.left,
            self.top + padding.top,
            self.right - padding.right,
            self.bottom - padding.bottom,
        )
    }
}

/// Constraint handed down by the host for one axis during measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    Exact(f32),
    AtMost(f32),
    Unconstrained,
}

impl MeasureSpec {
    /// Resolves one axis: an exact constraint wins, anything else takes the
    /// intrinsic size.
    pub fn resolve(self, intrinsic: f32) -> f32 {
        match self {
            MeasureSpec::Exact(size) => size,
            MeasureSpec::AtMost(_) | MeasureSpec::Unconstrained => intrinsic,
        }
    }
}

/// Sweep of the progress arc in degrees. Not clamped.
pub fn sweep_angle(current_progress: i32, max_progress: i32) -> f32 {
    current_progress as f32 / max_progress as f32 * 360.0
}

/// Geometry for one frame, derived from the options and the host bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub center: Point,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub arc_oval: Rect,
    pub start_angle: f32,
    pub sweep: f32,
}

impl RingLayout {
    /// 12 o'clock, with 0 degrees at 3 o'clock and angles growing clockwise.
    pub const START_ANGLE: f32 = -90.0;

    pub fn new(
        bounds: Rect,
        padding: &Padding,
        radius: f32,
        stroke_width: f32,
        current_progress: i32,
        max_progress: i32,
    ) -> Self {
        let content = bounds.inset(padding);
        let half_stroke = stroke_width / 2.0;
        let oval_size = radius * 2.0 + stroke_width;
        let oval_origin = Point::new(content.left + half_stroke, content.top + half_stroke);

        Self {
            center: content.center(),
            outer_radius: radius + half_stroke,
            inner_radius: radius,
            arc_oval: Rect::from_origin_size(oval_origin, oval_size, oval_size),
            start_angle: Self::START_ANGLE,
            sweep: sweep_angle(current_progress, max_progress).clamp(0.0, 360.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_angle_is_proportional() {
        assert_eq!(sweep_angle(25, 100), 90.0);
        assert_eq!(sweep_angle(100, 100), 360.0);
        assert_eq!(sweep_angle(0, 100), 0.0);
        assert_eq!(sweep_angle(150, 100), 540.0);
    }

    #[test]
    fn exact_spec_overrides_intrinsic() {
        assert_eq!(MeasureSpec::Exact(320.0).resolve(60.0), 320.0);
        assert_eq!(MeasureSpec::AtMost(10.0).resolve(60.0), 60.0);
        assert_eq!(MeasureSpec::Unconstrained.resolve(60.0), 60.0);
    }

    #[test]
    fn layout_centers_on_content_region() {
        let padding = Padding::new(10.0, 20.0, 30.0, 40.0);
        let layout = RingLayout::new(
            Rect::new(0.0, 0.0, 200.0, 200.0),
            &padding,
            20.0,
            10.0,
            50,
            100,
        );
        assert_eq!(layout.center, Point::new(90.0, 90.0));
        assert_eq!(layout.arc_oval, Rect::new(15.0, 25.0, 65.0, 75.0));
        assert_eq!(layout.sweep, 180.0);
    }

    #[test]
    fn layout_clamps_overshooting_sweep() {
        let layout = RingLayout::new(
            Rect::new(0.0, 0.0, 60.0, 60.0),
            &Padding::default(),
            20.0,
            10.0,
            250,
            100,
        );
        assert_eq!(layout.sweep, 360.0);
    }
}
