//! A circular progress indicator: outer ring, inner disc, progress arc and a
//! centered label.
//!
//! [`RingProgress`] holds the options and the paints compiled from them and
//! draws onto anything implementing [`Canvas`]. [`PixelCanvas`] rasterizes into
//! an RGBA buffer, [`Scene`] records the calls, and [`window`] puts the widget
//! on screen.
//!
//! ```
//! use ringprogress::{MeasureSpec, ProgressOptions, Rect, RingProgress, Scene};
//!
//! let mut ring = RingProgress::new(
//!     ProgressOptions::builder().text("25%").current_progress(25).build(),
//! )?;
//! let size = ring.measure(MeasureSpec::Unconstrained, MeasureSpec::Unconstrained);
//! assert_eq!((size.width, size.height), (60.0, 60.0));
//!
//! let mut scene = Scene::new();
//! ring.draw(&mut scene, Rect::from_size(size));
//! assert_eq!(scene.commands().len(), 4);
//!
//! ring.set_progress(50)?;
//! # Ok::<(), ringprogress::ConfigurationError>(())
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod paint;
pub mod raster;
pub mod widget;
pub mod window;

pub use canvas::{Canvas, DrawCommand, Scene};
pub use color::Color;
pub use config::{Padding, ProgressOptions};
pub use error::{ConfigurationError, DegenerateState};
pub use geometry::{sweep_angle, MeasureSpec, Point, Rect, RingLayout, Size};
pub use paint::{CompiledStyle, Paint, PaintStyle, TextAlign, Typeface};
pub use raster::PixelCanvas;
pub use widget::RingProgress;
pub use window::{show, show_with_commands, ProgressCommand, WindowConfig, WindowError};
