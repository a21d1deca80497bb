use anyhow::Context as _;
use clap::Parser;
use log::{debug, info};

use cpu_mandelbrot::{cli::Args, colour::EscapeHistogram, ppm, render, timer};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // `--help` and `--version` exit successfully, anything else is a usage error.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let config = args.into_config().context("invalid arguments")?;

    let (image, elapsed) = timer::timed("render", || {
        render::render(
            &config.viewport,
            config.resolution,
            config.max_iter,
            config.workers,
        )
    });
    let image = image.context("render failed")?;
    println!("Elapsed time: {:.6}", elapsed.as_secs_f64());

    if log::log_enabled!(log::Level::Info) {
        let histogram = EscapeHistogram::from_pixels(&image);
        info!(
            "{} interior pixels, {} distinct escape steps, range {:?}",
            histogram.interior,
            histogram.escaped.len(),
            histogram.escape_range()
        );
        debug_assert_eq!(histogram.total(), config.resolution.pixel_count());
    }

    ppm::write_file(&image, &config.viewport, config.max_iter, &config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    debug!("done");

    Ok(())
}
