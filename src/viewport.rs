//! Mapping from pixel grid coordinates to points in the complex plane.

use crate::{
    error::{Error, Result},
    pixel::Complex,
    screen::Resolution,
};

/// The rectangle of the complex plane being rasterized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        if ![xmin, xmax, ymin, ymax].iter().all(|bound| bound.is_finite()) {
            return Err(Error::viewport(format!(
                "bounds must be finite, got x {}..{} y {}..{}",
                xmin, xmax, ymin, ymax
            )));
        }
        if xmax <= xmin {
            return Err(Error::viewport(format!(
                "xmax ({}) must be greater than xmin ({})",
                xmax, xmin
            )));
        }
        if ymax <= ymin {
            return Err(Error::viewport(format!(
                "ymax ({}) must be greater than ymin ({})",
                ymax, ymin
            )));
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn mapper(&self, resolution: Resolution) -> Mapper {
        Mapper {
            xmin: self.xmin,
            ymax: self.ymax,
            dx: self.width() / resolution.width as f64,
            dy: self.height() / resolution.height as f64,
        }
    }
}

/// Precomputed pixel pitch for one viewport and resolution.
///
/// Row 0 is `ymax`; increasing `j` moves down the image and down the plane.
#[derive(Clone, Copy, Debug)]
pub struct Mapper {
    xmin: f64,
    ymax: f64,
    dx: f64,
    dy: f64,
}

impl Mapper {
    pub fn map(&self, i: u32, j: u32) -> Complex {
        Complex::new(self.row_x(i), self.row_y(j))
    }

    /// Imaginary part shared by every pixel of row `j`.
    pub fn row_y(&self, j: u32) -> f64 {
        self.ymax - j as f64 * self.dy
    }

    fn row_x(&self, i: u32) -> f64 {
        self.xmin + i as f64 * self.dx
    }
}
