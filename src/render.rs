//! Parallel grid renderer.

use log::{debug, trace};
use rayon::prelude::ParallelIterator;

use crate::{
    buffer::ImageBuffer,
    colour,
    compute,
    error::{Error, Result},
    pixel::EncodedPixel,
    screen::Resolution,
    viewport::Viewport,
};

pub type Image = ImageBuffer<EncodedPixel>;

/// Render `viewport` at `resolution` on a pool of exactly `workers` threads.
///
/// Each row is one task. A task reads only the shared immutable mapper and
/// `max_iter` and writes only its own row, so the result does not depend on
/// `workers` or on scheduling.
pub fn render(
    viewport: &Viewport,
    resolution: Resolution,
    max_iter: u16,
    workers: usize,
) -> Result<Image> {
    if workers == 0 {
        return Err(Error::InvalidWorkers(workers));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("mandelbrot-{}", index))
        .build()?;

    debug!(
        "rendering {}x{} with max_iter {} on {} workers",
        resolution.width, resolution.height, max_iter, workers
    );

    let mut image = Image::zeroed(resolution);
    let mapper = viewport.mapper(resolution);

    trace!("begin render");
    pool.install(|| {
        image.par_rows_mut().for_each(|(j, row)| {
            let j = j as u32;
            for (i, pixel) in row.iter_mut().enumerate() {
                let point = mapper.map(i as u32, j);
                *pixel = colour::encode(compute::evaluate(point, max_iter));
            }
        });
    });
    trace!("end render");

    Ok(image)
}
