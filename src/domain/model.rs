use serde::{Deserialize, Serialize};

/// The lines a single demonstration emitted, keyed by its registry name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoReport {
    pub demo: String,
    pub lines: Vec<String>,
}

impl DemoReport {
    pub fn new(demo: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            demo: demo.into(),
            lines,
        }
    }
}

/// Two-field coordinate record compared by its fields, never by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}
