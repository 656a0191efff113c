use std::env;
use std::fs;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rand::Rng;
use ringprogress::{ProgressCommand, ProgressOptions, RingProgress, WindowConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Opens a window with a ring that fills up, empties and starts over.
///
/// Usage: `ringprogress [FONT_FILE]`. Without a font the label is not drawn.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let font_data = match env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading label font");
            Some(fs::read(path)?)
        }
        None => None,
    };

    let max_progress = 100;
    let widget = RingProgress::new(
        ProgressOptions::builder()
            .text("0%")
            .text_size(24.0)
            .radius(80.0)
            .stroke_width(16.0)
            .max_progress(max_progress)
            .build(),
    )?;

    let config = WindowConfig::builder()
        .width(300.0)
        .height(300.0)
        .maybe_font_data(font_data)
        .build();

    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let mut rng = rand::rng();
        let mut progress = 0;
        loop {
            progress = (progress + rng.random_range(0..4)) % (max_progress + 1);
            let commands = [
                ProgressCommand::SetProgress(progress),
                ProgressCommand::SetText(format!("{progress}%")),
            ];
            if commands.into_iter().any(|cmd| sender.send(cmd).is_err()) {
                break;
            }
            thread::sleep(Duration::from_millis(50));
        }
    });

    info!("showing ring progress, close the window to exit");
    ringprogress::show_with_commands(widget, config, receiver)?;
    Ok(())
}
