use crate::{
    error::{Error, Result},
    viewport::Viewport,
};

/// Output image size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::resolution(format!(
                "{}x{} has no pixels",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Derive the height from `width` so that pixels stay square:
    /// `round(width * (ymax - ymin) / (xmax - xmin))`.
    pub fn for_viewport(viewport: &Viewport, width: u32) -> Result<Self> {
        let height = (width as f64 * viewport.height() / viewport.width()).round();
        if !height.is_finite() || height > u32::MAX as f64 {
            return Err(Error::resolution(format!(
                "derived height {} for width {} is out of range",
                height, width
            )));
        }
        Self::new(width, height as u32)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_follows_aspect_ratio() {
        let viewport = Viewport::new(0.27085, 0.27100, 0.004640, 0.004810).unwrap();
        let resolution = Resolution::for_viewport(&viewport, 1024).unwrap();
        assert_eq!(resolution.width, 1024);
        assert_eq!(resolution.height, 1161);
    }

    #[test]
    fn square_viewport_is_square() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let resolution = Resolution::for_viewport(&viewport, 37).unwrap();
        assert_eq!(resolution, Resolution::new(37, 37).unwrap());
        assert_eq!(resolution.pixel_count(), 37 * 37);
    }

    #[test]
    fn zero_sized_is_rejected() {
        assert!(matches!(
            Resolution::new(0, 10),
            Err(Error::InvalidResolution(_))
        ));

        // A very wide, very short window rounds to zero rows.
        let viewport = Viewport::new(0.0, 1000.0, 0.0, 1.0).unwrap();
        assert!(matches!(
            Resolution::for_viewport(&viewport, 10),
            Err(Error::InvalidResolution(_))
        ));
    }
}
