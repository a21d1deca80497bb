/*!
A flat, row-major pixel buffer.

Rows are stored back to back in one allocation and indexed `y * width + x`.
Handing out rows as disjoint `&mut` slices is what lets the renderer write
from many threads without locks.
*/

use std::ops::{Deref, DerefMut};

use bytemuck::{Pod, Zeroable};
use rayon::{
    prelude::IndexedParallelIterator,
    slice::{ChunksMut, ParallelSliceMut},
};

use crate::screen::Resolution;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer<A> {
    resolution: Resolution,
    pixels: Vec<A>,
}

impl<A: Pod + Zeroable + Send> ImageBuffer<A> {
    pub fn zeroed(resolution: Resolution) -> Self {
        Self {
            resolution,
            pixels: vec![A::zeroed(); resolution.pixel_count()],
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&A> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixels.get(y as usize * self.width() as usize + x as usize)
    }

    pub fn row(&self, y: u32) -> &[A] {
        let width = self.width() as usize;
        let start = y as usize * width;
        &self.pixels[start..start + width]
    }

    /// Rows in scan order, each paired with its index.
    pub fn par_rows_mut(&mut self) -> rayon::iter::Enumerate<ChunksMut<'_, A>> {
        let width = self.width() as usize;
        self.pixels.par_chunks_mut(width).enumerate()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl<A> Deref for ImageBuffer<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.pixels
    }
}

impl<A> DerefMut for ImageBuffer<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.pixels
    }
}
