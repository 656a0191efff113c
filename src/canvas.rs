use crate::geometry::{Point, Rect};
use crate::paint::Paint;

/// Drawing surface the widget paints onto.
///
/// Angles are in degrees, 0 at 3 o'clock, growing clockwise.
pub trait Canvas {
    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint);

    /// Draws the part of the ellipse inscribed in `oval` between
    /// `start_angle` and `start_angle + sweep_angle`. With `use_center` the
    /// wedge down to the center is included.
    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: &Paint,
    );

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint);
}

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    Arc {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: Paint,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        paint: Paint,
    },
}

/// Canvas that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Replays the recorded commands, in order, onto another canvas.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match command {
                DrawCommand::Circle {
                    center,
                    radius,
                    paint,
                } => canvas.draw_circle(*center, *radius, paint),
                DrawCommand::Arc {
                    oval,
                    start_angle,
                    sweep_angle,
                    use_center,
                    paint,
                } => canvas.draw_arc(*oval, *start_angle, *sweep_angle, *use_center, paint),
                DrawCommand::Text { text, x, y, paint } => canvas.draw_text(text, *x, *y, paint),
            }
        }
    }
}

impl Canvas for Scene {
    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.add_command(DrawCommand::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: &Paint,
    ) {
        self.add_command(DrawCommand::Arc {
            oval,
            start_angle,
            sweep_angle,
            use_center,
            paint: paint.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        self.add_command(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            paint: paint.clone(),
        });
    }
}
