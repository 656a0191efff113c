use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bon::Builder;
use pixels::{Pixels, SurfaceTexture};
use rusttype::Font;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::color::Color;
use crate::config::ProgressOptions;
use crate::geometry::{MeasureSpec, Rect};
use crate::raster::PixelCanvas;
use crate::widget::RingProgress;

/// Updates another thread can push to a widget shown in a window.
#[derive(Debug, Clone)]
pub enum ProgressCommand {
    SetProgress(i32),
    SetMaxProgress(i32),
    SetText(String),
    Configure(ProgressOptions),
}

#[derive(Debug, Clone, Builder)]
pub struct WindowConfig {
    #[builder(default = "Ring Progress".to_string(), into)]
    pub title: String,
    /// Logical width; the widget's measured width when unset.
    pub width: Option<f32>,
    /// Logical height; the widget's measured height when unset.
    pub height: Option<f32>,
    #[builder(default = 60.0)]
    pub max_framerate: f64,
    #[builder(default = Color::BLACK)]
    pub background_color: Color,
    /// TrueType/OpenType bytes used for the label. No label without it.
    pub font_data: Option<Vec<u8>>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WindowConfig {
    /// Minimum time between two redraws.
    pub fn frame_duration(&self) -> Result<Duration, WindowError> {
        let invalid = WindowError::InvalidFramerate(self.max_framerate);
        if !(self.max_framerate.is_finite() && self.max_framerate > 0.0) {
            return Err(invalid);
        }
        Duration::try_from_secs_f64(1.0 / self.max_framerate).map_err(|_| invalid)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("font data could not be parsed")]
    InvalidFont,
    #[error("max framerate must be a positive finite value, got {0}")]
    InvalidFramerate(f64),
    #[error(transparent)]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error(transparent)]
    Os(#[from] winit::error::OsError),
    #[error(transparent)]
    Pixels(#[from] pixels::Error),
}

/// Applies one command, logging and dropping it if the widget rejects it.
pub fn apply_command(widget: &mut RingProgress, command: ProgressCommand) {
    let result = match command {
        ProgressCommand::SetProgress(value) => widget.set_progress(value),
        ProgressCommand::SetMaxProgress(value) => widget.set_max_progress(value),
        ProgressCommand::SetText(text) => widget.set_text(text),
        ProgressCommand::Configure(options) => widget.configure(options),
    };
    if let Err(err) = result {
        warn!(error = %err, "ignoring ring progress command");
    }
}

/// How long the event loop may sleep after handling pending work.
///
/// A deferred repaint wakes the loop when the frame budget allows it. An idle
/// widget fed by a channel is polled once per frame; without a channel only
/// window events can change anything.
fn next_control_flow(
    now: Instant,
    last_frame: Instant,
    frame_duration: Duration,
    repaint_pending: bool,
    polling_commands: bool,
) -> ControlFlow {
    if repaint_pending {
        ControlFlow::WaitUntil((last_frame + frame_duration).max(now))
    } else if polling_commands {
        ControlFlow::WaitUntil(now + frame_duration)
    } else {
        ControlFlow::Wait
    }
}

/// Drains pending commands without blocking.
pub fn apply_pending(widget: &mut RingProgress, receiver: &Receiver<ProgressCommand>) {
    while let Ok(command) = receiver.try_recv() {
        apply_command(widget, command);
    }
}

pub fn show(widget: RingProgress, config: WindowConfig) -> Result<(), WindowError> {
    run_window(widget, config, None)
}

pub fn show_with_commands(
    widget: RingProgress,
    config: WindowConfig,
    receiver: Receiver<ProgressCommand>,
) -> Result<(), WindowError> {
    run_window(widget, config, Some(receiver))
}

fn run_window(
    mut widget: RingProgress,
    config: WindowConfig,
    receiver: Option<Receiver<ProgressCommand>>,
) -> Result<(), WindowError> {
    let frame_duration = config.frame_duration()?;
    let font = match config.font_data {
        Some(ref data) => {
            Some(Font::try_from_vec(data.clone()).ok_or(WindowError::InvalidFont)?)
        }
        None => None,
    };
    if font.is_none() {
        warn!("no font configured, the label will not be drawn");
    }

    let intrinsic = widget.measure(MeasureSpec::Unconstrained, MeasureSpec::Unconstrained);
    let logical_width = config.width.unwrap_or(intrinsic.width);
    let logical_height = config.height.unwrap_or(intrinsic.height);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(
            logical_width as f64,
            logical_height as f64,
        ))
        .build(&event_loop)?;

    let window = Arc::new(window);
    let window_clone = window.clone();

    let size = window.inner_size();
    let mut fb_width = size.width as usize;
    let mut fb_height = size.height as usize;
    let mut scale = window.scale_factor() as f32;
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

    info!(
        width = logical_width,
        height = logical_height,
        scale,
        "showing ring progress window"
    );

    let mut last_frame = Instant::now();

    event_loop.run(move |event, window_target| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    fb_width = new_size.width as usize;
                    fb_height = new_size.height as usize;
                    if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                        warn!(error = %err, "failed to resize frame buffer");
                    }
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        warn!(error = %err, "failed to resize surface");
                    }
                    window_clone.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    scale = scale_factor as f32;
                    window_clone.request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    widget.take_repaint_request();

                    let bounds = Rect::new(
                        0.0,
                        0.0,
                        fb_width as f32 / scale,
                        fb_height as f32 / scale,
                    );
                    let mut canvas =
                        PixelCanvas::new(pixels.frame_mut(), fb_width, fb_height).with_scale(scale);
                    if let Some(ref font) = font {
                        canvas = canvas.with_font(font);
                    }
                    canvas.clear(config.background_color);
                    widget.draw(&mut canvas, bounds);

                    if let Err(err) = pixels.render() {
                        warn!(error = %err, "failed to present frame");
                        window_target.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if let Some(ref receiver) = receiver {
                    apply_pending(&mut widget, receiver);
                }
                // the request stays pending until the frame budget allows a redraw
                let now = Instant::now();
                if now.duration_since(last_frame) >= frame_duration
                    && widget.take_repaint_request()
                {
                    window_clone.request_redraw();
                    last_frame = now;
                }
                window_target.set_control_flow(next_control_flow(
                    now,
                    last_frame,
                    frame_duration,
                    widget.repaint_requested(),
                    receiver.is_some(),
                ));
            }
            _ => {}
        }
    })?;

    Ok(())
}
