//! Colouring: orbit results to pixels, and a summary of a rendered image.

use fnv::FnvHashMap;
use log::trace;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::{compute::OrbitResult, pixel::EncodedPixel};

/// Grayscale ramp: interior points are black, escaped points have the
/// escape step as their brightness.
pub fn encode(result: OrbitResult) -> EncodedPixel {
    match result {
        OrbitResult::Bounded => EncodedPixel::BLACK,
        OrbitResult::Escaped(k) => EncodedPixel::gray(k),
    }
}

/// Number of pixels per escape step, plus the interior pixel count.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EscapeHistogram {
    pub interior: usize,
    pub escaped: FnvHashMap<u16, usize>,
}

impl EscapeHistogram {
    pub fn from_pixels(pixels: &[EncodedPixel]) -> Self {
        trace!("begin escape histogram");

        let histogram = pixels
            .par_iter()
            .fold(Self::default, |mut histogram, pixel| {
                histogram.insert(pixel.value());
                histogram
            })
            .reduce(Self::default, Self::merge);

        trace!("end escape histogram");
        histogram
    }

    fn insert(&mut self, value: u16) {
        // Escape steps start at 1, so 0 is only ever written for interior points.
        if value == 0 {
            self.interior += 1;
        } else {
            *self.escaped.entry(value).or_insert(0) += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.interior += other.interior;
        for (value, count) in other.escaped {
            *self.escaped.entry(value).or_insert(0) += count;
        }
        self
    }

    pub fn total(&self) -> usize {
        self.interior + self.escaped.values().sum::<usize>()
    }

    /// Smallest and largest escape step seen, if anything escaped.
    pub fn escape_range(&self) -> Option<(u16, u16)> {
        let min = self.escaped.keys().copied().min()?;
        let max = self.escaped.keys().copied().max()?;
        Some((min, max))
    }
}
