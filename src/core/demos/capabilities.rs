//! Capability traits: one required operation, one with a default body that
//! implementers may override.

use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, RunConfig};
use crate::utils::error::Result;

/// Required capability: every implementer supplies its own body.
pub trait Speak {
    fn speak(&self) -> String;
}

/// Optional capability: implementers inherit the stock greeting unless they
/// override it.
pub trait Greet {
    fn greet(&self) -> String {
        "Hello, Scala developer!".to_string()
    }
}

/// Accepts the default greeting.
pub struct Newcomer;

impl Greet for Newcomer {}

impl Speak for Newcomer {
    fn speak(&self) -> String {
        "I just joined the team.".to_string()
    }
}

/// Overrides the default greeting with its own phrasing.
pub struct Veteran;

impl Greet for Veteran {
    fn greet(&self) -> String {
        "How are you, Scala developer?".to_string()
    }
}

impl Speak for Veteran {
    fn speak(&self) -> String {
        "I have seen every compiler error there is.".to_string()
    }
}

/// Supplies only the required capability.
pub struct Lurker;

impl Speak for Lurker {
    fn speak(&self) -> String {
        "...".to_string()
    }
}

pub struct Capabilities;

impl Demo for Capabilities {
    fn name(&self) -> &'static str {
        "capabilities"
    }

    fn summary(&self) -> &'static str {
        "trait dispatch with default and overridden behavior"
    }

    fn run(&self, _config: &dyn RunConfig) -> Result<DemoReport> {
        let greeters: Vec<Box<dyn Greet>> = vec![Box::new(Newcomer), Box::new(Veteran)];
        let speakers: Vec<Box<dyn Speak>> = vec![
            Box::new(Newcomer),
            Box::new(Veteran),
            Box::new(Lurker),
        ];

        let mut lines = Vec::new();
        for greeter in &greeters {
            lines.push(greeter.greet());
        }
        for speaker in &speakers {
            lines.push(speaker.speak());
        }

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
    fn test_default_greeting() {
        assert_eq!(Newcomer.greet(), "Hello, Scala developer!");
    }

    #[test]
    fn test_override_wins_over_default() {
        assert_eq!(Veteran.greet(), "How are you, Scala developer?");
    }

    #[test]
    fn test_required_capability_is_supplied() {
        assert_eq!(Lurker.speak(), "...");
    }

    #[test]
    fn test_dispatch_through_trait_objects() {
        let report = Capabilities.run(&NullConfig).unwrap();
        assert_eq!(report.lines[0], "Hello, Scala developer!");
        assert_eq!(report.lines[1], "How are you, Scala developer?");
        assert_eq!(report.lines.len(), 5);
    }
}
