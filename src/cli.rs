use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::{error::Result, screen::Resolution, viewport::Viewport};

/// Render the Mandelbrot set to a 16-bit binary PPM image.
#[derive(Parser, Debug)]
#[command(
    name = "cpu-mandelbrot",
    version,
    after_help = "Example: cpu-mandelbrot 0.27085 0.27100 0.004640 0.004810 1000 1024 pic.ppm"
)]
pub struct Args {
    /// Left edge of the window.
    #[arg(allow_negative_numbers = true)]
    pub xmin: f64,

    /// Right edge of the window.
    #[arg(allow_negative_numbers = true)]
    pub xmax: f64,

    /// Bottom edge of the window.
    #[arg(allow_negative_numbers = true)]
    pub ymin: f64,

    /// Top edge of the window.
    #[arg(allow_negative_numbers = true)]
    pub ymax: f64,

    /// Maximum iterations per pixel (1..=65535).
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub maxiter: u16,

    /// Image width in pixels; the height follows the window's aspect ratio.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub xres: u32,

    /// Output PPM path.
    pub output: PathBuf,

    /// Worker threads [default: number of logical CPUs].
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Everything a render needs, validated.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub max_iter: u16,
    pub workers: usize,
    pub output: PathBuf,
}

impl Args {
    pub fn into_config(self) -> Result<RenderConfig> {
        let viewport = Viewport::new(self.xmin, self.xmax, self.ymin, self.ymax)?;
        let resolution = Resolution::for_viewport(&viewport, self.xres)?;
        let workers = self.threads.unwrap_or_else(num_cpus::get);

        let config = RenderConfig {
            viewport,
            resolution,
            max_iter: self.maxiter,
            workers,
            output: self.output,
        };
        debug!("{:?}", config);
        Ok(config)
    }
}
