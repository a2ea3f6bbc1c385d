use crate::domain::model::{EnumerationRequest, Strategy};
use crate::utils::error::Result;

/// Destination for emitted lines. `line` never includes the terminator.
pub trait LineSink {
    fn emit(&mut self, line: &[u8]) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit(&mut self, line: &[u8]) -> Result<()> {
        (**self).emit(line)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn prefix(&self) -> &str;
    fn depth(&self) -> u32;
    fn strategy(&self) -> Strategy;
    /// `None` writes to stdout.
    fn output_path(&self) -> Option<&str>;
    fn max_lines(&self) -> Option<u64>;
    fn metrics_file(&self) -> Option<&str>;

    fn request(&self) -> EnumerationRequest {
        EnumerationRequest::new(self.prefix(), self.depth()).with_strategy(self.strategy())
    }
}
