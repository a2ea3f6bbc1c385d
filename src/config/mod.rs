pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::Strategy;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "digit-enum")]
#[command(about = "Print every base-10 digit string of a given length")]
pub struct CliConfig {
    #[arg(long, default_value_t = String::new(), help = "String every line starts with")]
    pub prefix: String,

    #[arg(short = 'n', long, default_value_t = 1, help = "Number of digit positions")]
    pub depth: u32,

    #[arg(long, value_enum, default_value_t = Strategy::default())]
    pub strategy: Strategy,

    #[arg(short, long, help = "Write lines to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Refuse to run if more lines than this would be written")]
    pub max_lines: Option<u64>,

    #[arg(long, help = "Write a JSON run summary to this file")]
    pub metrics_file: Option<String>,

    #[arg(long, help = "Print the expected line count and exit")]
    pub dry_run: bool,

    #[arg(long, help = "Log CPU and memory usage")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn depth(&self) -> u32 {
        self.depth
    }

    fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn max_lines(&self) -> Option<u64> {
        self.max_lines
    }

    fn metrics_file(&self) -> Option<&str> {
        self.metrics_file.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_prefix("prefix", &self.prefix)?;
        validation::validate_depth("depth", self.depth)?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        if let Some(max_lines) = self.max_lines {
            validation::validate_positive_number("max_lines", max_lines, 1)?;
        }
        if let Some(metrics_file) = &self.metrics_file {
            validation::validate_path("metrics_file", metrics_file)?;
        }
        Ok(())
    }
}
