//! Logger setup.
//!
//! Lines go to stdout and are appended to a log file, in the form
//! `<timestamp>, <LEVEL>, <message>, <target>`. `RUST_LOG` overrides the
//! default `debug` filter.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Writer that duplicates everything into stdout and a file.
#[derive(Debug)]
pub struct TeeWriter<W> {
    file: W,
}

impl<W: Write> TeeWriter<W> {
    /// Wraps `file`; stdout is always the second sink.
    pub fn new(file: W) -> Self {
        Self { file }
    }
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        io::stdout().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stdout().flush()
    }
}

/// Opens `path` for appending, creating it if needed.
fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))
}

/// Installs the global logger.
pub fn init(log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(TeeWriter::new(file))))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}, {}, {}, {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args(),
                record.target()
            )
        })
        .try_init()
        .context("Logger already initialised")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_tee_writes_to_file() {
        let mut sink = Vec::new();
        {
            let mut tee = TeeWriter::new(&mut sink);
            tee.write_all(b"line\n").unwrap();
            tee.flush().unwrap();
        }
        assert_eq!(sink, b"line\n");
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("program.log");
        std::fs::write(&path, "first\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"second\n").unwrap();
        drop(file);

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_in_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/program.log");
        assert!(open_log_file(&path).is_err());
    }
}
