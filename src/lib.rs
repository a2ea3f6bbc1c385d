pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::sink::{MemorySink, WriterSink};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    engine::EnumerationEngine,
    enumerator::{enumerate, DigitEnumerator},
};
pub use crate::domain::model::{expected_line_count, EnumerationRequest, RunSummary, Strategy};
pub use crate::utils::error::{EnumError, Result};
