//! Value-equality record demo: coordinates compare by their fields.

use crate::domain::model::{DemoReport, Point};
use crate::domain::ports::{Demo, RunConfig};
use crate::utils::error::Result;

pub struct PointEquality;

impl Demo for PointEquality {
    fn name(&self) -> &'static str {
        "point-equality"
    }

    fn summary(&self) -> &'static str {
        "records with equal fields are interchangeable"
    }

    fn run(&self, _config: &dyn RunConfig) -> Result<DemoReport> {
        let first = Point { x: 1, y: 2 };
        let second = Point { x: 1, y: 2 };
        let other = Point { x: 3, y: 4 };

        let mut lines = Vec::new();
        lines.push(describe(first, second));
        lines.push(describe(first, other));

        Ok(DemoReport::new(self.name(), lines))
    }
}

fn describe(left: Point, right: Point) -> String {
    if left == right {
        format!("{:?} and {:?} are the same point", left, right)
    } else {
        format!("{:?} and {:?} differ", left, right)
    }
}
