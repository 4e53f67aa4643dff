//! Binding demos: immutable bindings, reassignment, and block scoping.

use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, RunConfig};
use crate::utils::error::Result;

pub struct ImmutableBinding;

impl Demo for ImmutableBinding {
    fn name(&self) -> &'static str {
        "immutable-binding"
    }

    fn summary(&self) -> &'static str {
        "a sum bound immutably and printed"
    }

    fn run(&self, _config: &dyn RunConfig) -> Result<DemoReport> {
        let sum = 1 + 1;
        // `sum = 3;` here would be rejected at compile time: the binding
        // has no `mut`.
        Ok(DemoReport::new(self.name(), vec![sum.to_string()]))
    }
}

pub struct MutableBinding;

impl Demo for MutableBinding {
    fn name(&self) -> &'static str {
        "mutable-binding"
    }

    fn summary(&self) -> &'static str {
        "a reassignable binding, mutated once and never printed"
    }

    fn run(&self, _config: &dyn RunConfig) -> Result<DemoReport> {
        let mut scratch = 1;
        tracing::debug!("scratch starts at {}", scratch);
        scratch = 2;
        tracing::debug!("scratch reassigned to {}", scratch);
        // State mutation only: this demo emits no output lines.
        Ok(DemoReport::new(self.name(), Vec::new()))
    }
}

pub struct ScopedBlock;

impl Demo for ScopedBlock {
    fn name(&self) -> &'static str {
        "scoped-block"
    }

    fn summary(&self) -> &'static str {
        "a nested block whose tail expression is its value"
    }

    fn run(&self, _config: &dyn RunConfig) -> Result<DemoReport> {
        let result = {
            let inner = 1;
            inner + 2
        };
        // `inner` is out of scope here; only `result` survives the block.
        Ok(DemoReport::new(self.name(), vec![result.to_string()]))
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
    fn test_immutable_binding_prints_two() {
        let report = ImmutableBinding.run(&NullConfig).unwrap();
        assert_eq!(report.demo, "immutable-binding");
        assert_eq!(report.lines, vec!["2"]);
    }

    #[test]
    fn test_mutable_binding_emits_nothing() {
        let report = MutableBinding.run(&NullConfig).unwrap();
        assert_eq!(report.demo, "mutable-binding");
        assert!(report.lines.is_empty());
    }

    #[test]
    fn test_scoped_block_yields_three() {
        let report = ScopedBlock.run(&NullConfig).unwrap();
        assert_eq!(report.lines, vec!["3"]);
    }
}
