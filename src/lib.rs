//! Escape-time Mandelbrot rendering to 16-bit binary PPM images.

pub mod buffer;
pub mod cli;
pub mod colour;
pub mod compute;
pub mod error;
pub mod pixel;
pub mod ppm;
pub mod render;
pub mod screen;
pub mod timer;
pub mod viewport;

pub use error::{Error, Result};
