//! Display shell: shows a rendered canvas in a window until it is closed.
//!
//! The window system is modelled as a blocking source of events. The event
//! loop handles one event at a time and copies the frame into the window on
//! every repaint request; the frame is never modified while displayed.

use crate::canvas::Canvas;
use crate::error::Result;
use log::{debug, info};
use minifb::{Window, WindowOptions};
use std::time::Duration;

/// Delay between repaints of the production window.
const REPAINT_INTERVAL: Duration = Duration::from_millis(33);

/// Events the display shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window contents need to be redrawn.
    Expose,
    /// The user closed the window.
    Close,
}

/// A window that can report events and receive pixel data.
pub trait WindowSystem {
    /// Blocks until the next event is available.
    fn next_event(&mut self) -> WindowEvent;

    /// Copies `frame` into the window.
    fn blit(&mut self, frame: &Frame) -> Result<()>;
}

/// Canvas pixels packed as `0x00RRGGBB`, ready to be copied to a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Frame {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let pixels = canvas
            .as_image()
            .pixels()
            .map(|p| {
                let [r, g, b] = p.0;
                (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
            })
            .collect();

        Frame {
            pixels,
            width: canvas.width() as usize,
            height: canvas.height() as usize,
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Services window events until the window is closed.
///
/// Returns the number of repaints performed. A failed blit ends the loop
/// with that error.
pub fn run_event_loop<W: WindowSystem>(window: &mut W, frame: &Frame) -> Result<usize> {
    let mut repaints = 0;

    loop {
        match window.next_event() {
            WindowEvent::Expose => {
                window.blit(frame)?;
                repaints += 1;
            }
            WindowEvent::Close => {
                debug!("Window closed after {} repaints", repaints);
                return Ok(repaints);
            }
        }
    }
}

/// On-screen window backed by `minifb`.
///
/// minifb has no expose notification, so every paced tick while the window
/// is open counts as a repaint request.
pub struct MinifbWindow {
    window: Window,
}

impl MinifbWindow {
    /// Opens a fixed-size window.
    pub fn open(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        window.limit_update_rate(Some(REPAINT_INTERVAL));
        info!("Opened {}x{} window \"{}\"", width, height, title);
        Ok(MinifbWindow { window })
    }
}

impl WindowSystem for MinifbWindow {
    fn next_event(&mut self) -> WindowEvent {
        if self.window.is_open() {
            WindowEvent::Expose
        } else {
            WindowEvent::Close
        }
    }

    fn blit(&mut self, frame: &Frame) -> Result<()> {
        self.window
            .update_with_buffer(frame.pixels(), frame.width(), frame.height())?;
        Ok(())
    }
}
