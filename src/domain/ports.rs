use crate::domain::model::DemoReport;
use crate::utils::error::Result;

/// Destination for the human-readable lines a demo produces. The binary
/// writes to stdout; tests capture lines in memory.
pub trait Sink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait RunConfig {
    /// Demo names the run is restricted to. Empty means "run everything".
    fn selected(&self) -> &[String];
    /// Name of the invoking user, resolved from the ambient environment.
    fn user_name(&self) -> String;
    fn timings(&self) -> bool;
}

/// One self-contained syntax demonstration.
pub trait Demo {
    fn name(&self) -> &'static str;
    fn summary(&self) -> &'static str;
    fn run(&self, config: &dyn RunConfig) -> Result<DemoReport>;
}
