use std::time::{Duration, Instant};

/// Wall-clock timer for a single demo run.
pub struct DemoTimer {
    start: Instant,
}

impl DemoTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

pub fn format_duration(elapsed: Duration) -> String {
    if elapsed >= Duration::from_millis(1) {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{}µs", elapsed.as_micros())
    }
}
