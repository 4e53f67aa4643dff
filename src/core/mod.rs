pub mod demos;
pub mod tour;

pub use crate::domain::model::{DemoReport, Point};
pub use crate::domain::ports::{Demo, RunConfig, Sink};
pub use crate::utils::error::Result;
