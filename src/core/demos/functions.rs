//! Function-value demos: callables of arity 0/1/2, staged application, and
//! the ambient user-name greeting.

use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, RunConfig};
use crate::utils::error::Result;

pub fn answer() -> i64 {
    42
}

pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

pub fn triple(n: i64) -> i64 {
    n * 3
}

/// Staged application: the first stage fixes the operands, the second
/// supplies the multiplier. `sum_then_scale(1, 2)(3)` is 9.
pub fn sum_then_scale(x: i64, y: i64) -> impl Fn(i64) -> i64 {
    move |multiplier| (x + y) * multiplier
}

pub struct FunctionValues;

impl Demo for FunctionValues {
    fn name(&self) -> &'static str {
        "function-values"
    }

    fn summary(&self) -> &'static str {
        "callables of arity zero, one, and two"
    }

    fn run(&self, _config: &dyn RunConfig) -> Result<DemoReport> {
        let zero_arg = answer;
        let one_arg = |n: i64| triple(n);
        let two_arg = |x: i64, y: i64| add(x, y);

        let lines = vec![
            format!("zero-arg() = {}", zero_arg()),
            format!("one-arg(7) = {}", one_arg(7)),
            format!("two-arg(1, 2) = {}", two_arg(1, 2)),
            // A function value is printable in its own right; this one is
            // shown, not invoked.
            format!(
                "uninvoked callable: {}",
                std::any::type_name_of_val(&two_arg)
            ),
        ];

        Ok(DemoReport::new(self.name(), lines))
    }
}

pub struct CurriedMultiplier;

impl Demo for CurriedMultiplier {
    fn name(&self) -> &'static str {
        "curried-multiplier"
    }

    fn summary(&self) -> &'static str {
        "two-stage invocation computing (x + y) * multiplier"
    }

    fn run(&self, _config: &dyn RunConfig) -> Result<DemoReport> {
        let scale = sum_then_scale(1, 2);
        let lines = vec![format!("(1 + 2) * 3 = {}", scale(3))];
        Ok(DemoReport::new(self.name(), lines))
    }
}

pub struct Greeting;

impl Demo for Greeting {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn summary(&self) -> &'static str {
        "greets the invoking user by their ambient name"
    }

    fn run(&self, config: &dyn RunConfig) -> Result<DemoReport> {
        let lines = vec![format!("Good day, {}!", config.user_name())];
        Ok(DemoReport::new(self.name(), lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullConfig;

    impl RunConfig for NullConfig {
        fn selected(&self) -> &[String] {
            &[]
        }

        fn user_name(&self) -> String {
            "tester".to_string()
        }

        fn timings(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_answer_is_forty_two() {
        assert_eq!(answer(), 42);
    }

    #[test]
    fn test_add_is_the_sum() {
        assert_eq!(add(1, 2), 3);
        for x in -5..=5 {
            for y in -5..=5 {
                assert_eq!(add(x, y), x + y);
            }
        }
    }

    #[test]
    fn test_sum_then_scale_product_law() {
        assert_eq!(sum_then_scale(1, 2)(3), 9);
        for x in -3..=3 {
            for y in -3..=3 {
                let scale = sum_then_scale(x, y);
                for m in -3..=3 {
                    assert_eq!(scale(m), (x + y) * m);
                }
            }
        }
    }

    #[test]
    fn test_function_values_lines() {
        let report = FunctionValues.run(&NullConfig).unwrap();
        assert_eq!(report.lines.len(), 4);
        assert_eq!(report.lines[0], "zero-arg() = 42");
        assert_eq!(report.lines[1], "one-arg(7) = 21");
        assert_eq!(report.lines[2], "two-arg(1, 2) = 3");
        assert!(report.lines[3].starts_with("uninvoked callable: "));
    }

    #[test]
    fn test_curried_multiplier_line() {
        let report = CurriedMultiplier.run(&NullConfig).unwrap();
        assert_eq!(report.lines, vec!["(1 + 2) * 3 = 9"]);
    }

    #[test]
    fn test_greeting_uses_configured_name() {
        let report = Greeting.run(&NullConfig).unwrap();
        assert_eq!(report.lines, vec!["Good day, tester!"]);
    }
}
