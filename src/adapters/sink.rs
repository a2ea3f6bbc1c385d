use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::Path;

/// Line sink over any `Write`, newline-terminating each line.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    lines: u64,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<BufWriter<StdoutLock<'static>>> {
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout().lock()))
    }
}

impl WriterSink<BufWriter<File>> {
    /// Creates (or truncates) `path`, creating parent directories as needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &[u8]) -> Result<()> {
        self.writer.write_all(line)?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LineSink for MemorySink {
    fn emit(&mut self, line: &[u8]) -> Result<()> {
        self.lines.push(String::from_utf8_lossy(line).into_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit(b"12").unwrap();
        sink.emit(b"13").unwrap();
        sink.finish().unwrap();

        assert_eq!(sink.lines_written(), 2);
        assert_eq!(sink.into_inner(), b"12\n13\n");
    }

    #[test]
    fn test_file_sink_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/out.txt");

        let mut sink = WriterSink::create(&path).unwrap();
        sink.emit(b"0").unwrap();
        sink.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\n");
    }

    #[test]
    fn test_memory_sink_collects() {
        let mut sink = MemorySink::new();
        sink.emit(b"a").unwrap();
        assert_eq!(sink.lines(), &["a".to_string()]);
    }
}
