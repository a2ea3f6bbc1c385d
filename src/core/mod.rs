pub mod engine;
pub mod enumerator;

pub use crate::domain::model::{EnumerationRequest, RunSummary, Strategy};
pub use crate::domain::ports::{ConfigProvider, LineSink};
pub use crate::utils::error::Result;
