pub mod cli;

use crate::domain::ports::RunConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_duplicates, validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "syntax-tour")]
#[command(about = "A guided tour of basic language constructs")]
pub struct CliConfig {
    /// Run only the named demos, still in tour order
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    #[arg(long, help = "List the available demos and exit")]
    pub list: bool,

    #[arg(long, help = "Log how long each demo took")]
    pub timings: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl RunConfig for CliConfig {
    fn selected(&self) -> &[String] {
        &self.only
    }

    fn user_name(&self) -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "stranger".to_string())
    }

    fn timings(&self) -> bool {
        self.timings
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for name in &self.only {
            validate_non_empty_string("only", name)?;
        }
        validate_no_duplicates("only", &self.only)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            only: vec![],
            list: false,
            timings: false,
            verbose: false,
        }
    }

    #[test]
    fn test_empty_selection_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_blank_selection_entry_is_rejected() {
        let mut config = base_config();
        config.only = vec!["".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_selection_is_rejected() {
        let mut config = base_config();
        config.only = vec!["greeting".to_string(), "greeting".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_user_name_is_never_empty() {
        assert!(!base_config().user_name().is_empty());
    }
}
