//! # Polyplot
//!
//! Reads polylines from a CSV file, scales them by a zoom factor and shows
//! them as black strokes in a fixed 1800x1000 window.
//!
//! ## Pipeline
//!
//! - **Arguments**: [`Invocation`] resolves the file path and zoom factor
//! - **Loading**: [`LineLoader`] turns each CSV row into a scaled [`Polyline`]
//! - **Rendering**: [`render`] strokes every polyline onto an off-screen [`Canvas`]
//! - **Display**: [`run_event_loop`] copies the canvas into a window on each
//!   repaint until the window is closed
//!
//! ## Example
//!
//! ```
//! use polyplot::{render, LineLoader, ZoomFactor};
//! use std::io::Cursor;
//!
//! let lines = LineLoader::new(ZoomFactor::new(2.0))
//!     .load_reader(Cursor::new("0,0,5,5\n1,1,2,8\n"))
//!     .unwrap();
//! assert_eq!(lines[1].values(), &[2.0, 2.0, 4.0, 16.0]);
//!
//! let canvas = render(&lines);
//! assert_eq!((canvas.width(), canvas.height()), (1800, 1000));
//! ```

pub mod args;
pub mod canvas;
pub mod display;
pub mod error;
pub mod loader;
pub mod polyline;
pub mod render;
pub mod zoom;

pub use args::{Invocation, USAGE_MESSAGE};
pub use canvas::{Canvas, Pen};
pub use display::{run_event_loop, Frame, MinifbWindow, WindowEvent, WindowSystem};
pub use error::{PlotError, Result};
pub use loader::LineLoader;
pub use polyline::{LineSet, Polyline};
pub use render::{render, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use zoom::ZoomFactor;
