use crate::core::demos::registry;
use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, RunConfig, Sink};
use crate::utils::error::{Result, TourError};
use crate::utils::monitor::{format_duration, DemoTimer};

/// Runs the registered demos in their fixed order, writing each emitted
/// line to the sink.
pub struct TourEngine<S: Sink, C: RunConfig> {
    sink: S,
    config: C,
    demos: Vec<Box<dyn Demo>>,
}

impl<S: Sink, C: RunConfig> TourEngine<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self {
            sink,
            config,
            demos: registry(),
        }
    }

    pub fn run(&mut self) -> Result<Vec<DemoReport>> {
        let only = self.config.selected().to_vec();

        // Reject unknown names before any demo runs.
        for name in &only {
            if !self.demos.iter().any(|demo| demo.name() == name) {
                return Err(TourError::UnknownDemo { name: name.clone() });
            }
        }

        let mut reports = Vec::new();

        for demo in &self.demos {
            if !only.is_empty() && !only.iter().any(|name| name == demo.name()) {
                continue;
            }

            tracing::info!("Running demo: {}", demo.name());
            let timer = DemoTimer::start();

            let report = demo.run(&self.config)?;

            if self.config.timings() {
                tracing::info!(
                    "{} finished in {}",
                    demo.name(),
                    format_duration(timer.elapsed())
                );
            }

            if report.lines.is_empty() {
                tracing::debug!("{} emitted no output", demo.name());
            }

            for line in &report.lines {
                self.sink.write_line(line)?;
            }

            reports.push(report);
        }

        Ok(reports)
    }
}
