use std::time::{Duration, Instant};

use log::info;

/// Wall-clock timer for one stage. Logs the elapsed time when stopped or
/// dropped, whichever comes first.
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
    stopped: bool,
}

impl ScopedTimer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            stopped: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn stop(mut self) -> Duration {
        self.stopped = true;
        let elapsed = self.elapsed();
        info!("{} took {:.6}s", self.label, elapsed.as_secs_f64());
        elapsed
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !self.stopped {
            info!(
                "{} took {:.6}s",
                self.label,
                self.elapsed().as_secs_f64()
            );
        }
    }
}

/// Run `function` inside a [`ScopedTimer`].
pub fn timed<A>(label: &'static str, function: impl FnOnce() -> A) -> (A, Duration) {
    let timer = ScopedTimer::start(label);
    let result = function();
    (result, timer.stop())
}
