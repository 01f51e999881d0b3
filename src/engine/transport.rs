//! Output transports.
//!
//! A transport receives an already formatted line. It owns no filtering and
//! no formatting; delivery concerns (rotation, batching, retries) belong to
//! whatever sits behind the stream it writes to.

use std::fmt;
use std::io::{self, Write};

use crate::record::RenderedRecord;

/// Target used for lines re-emitted as tracing events.
pub const LINE_TARGET: &str = "log_facade::line";

/// Destination for rendered lines.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Write one rendered line. `record` is the source of `line`.
    fn write_line(&self, record: &RenderedRecord, line: &str) -> io::Result<()>;
}

/// Standard stream selector for [`ConsoleTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes each line, newline-terminated, to stdout or stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTransport {
    stream: ConsoleStream,
}

impl ConsoleTransport {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Transport for ConsoleTransport {
    fn write_line(&self, _record: &RenderedRecord, line: &str) -> io::Result<()> {
        // One write_all per line so concurrent callers never interleave.
        let mut buffer = Vec::with_capacity(line.len() + 1);
        buffer.extend_from_slice(line.as_bytes());
        buffer.push(b'\n');

        match self.stream {
            ConsoleStream::Stdout => io::stdout().lock().write_all(&buffer),
            ConsoleStream::Stderr => io::stderr().lock().write_all(&buffer),
        }
    }
}

/// Re-emits each line as a `tracing` event so an installed subscriber hosts the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTransport;

impl Transport for TracingTransport {
    fn write_line(&self, record: &RenderedRecord, line: &str) -> io::Result<()> {
        let category = record.category.map_or("", |c| c.as_str());

        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(target: LINE_TARGET, $level, category, "{}", line)
            };
        }

        match record.level.as_tracing_level() {
            tracing::Level::ERROR => emit!(tracing::Level::ERROR),
            tracing::Level::WARN => emit!(tracing::Level::WARN),
            tracing::Level::INFO => emit!(tracing::Level::INFO),
            tracing::Level::DEBUG => emit!(tracing::Level::DEBUG),
            _ => emit!(tracing::Level::TRACE),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{LogCategory, LogLevel};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_defaults_to_stdout() {
        assert_eq!(ConsoleTransport::default().stream(), ConsoleStream::Stdout);
        assert_eq!(ConsoleTransport::stderr().stream(), ConsoleStream::Stderr);
    }

    #[test]
    fn test_console_write_succeeds() {
        let record = RenderedRecord::new(LogLevel::Info);
        assert!(ConsoleTransport::stderr().write_line(&record, "[INFO]").is_ok());
    }

    #[test]
    fn test_tracing_transport_emits_event() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let record = RenderedRecord {
            category: Some(LogCategory::Request),
            ..RenderedRecord::new(LogLevel::Http)
        };
        tracing::subscriber::with_default(subscriber, || {
            TracingTransport
                .write_line(&record, "[HTTP] | [REQUEST]")
                .unwrap();
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("DEBUG"), "unexpected output: {output}");
        assert!(output.contains(LINE_TARGET));
        assert!(output.contains("[HTTP] | [REQUEST]"));
        assert!(output.contains("category=\"REQUEST\""));
    }
}
