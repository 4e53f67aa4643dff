pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::StdoutSink, CliConfig};
pub use crate::core::demos;
pub use crate::core::tour::TourEngine;
pub use crate::domain::model::{DemoReport, Point};
pub use crate::domain::ports::{Demo, RunConfig, Sink};
pub use crate::utils::error::{Result, TourError};
