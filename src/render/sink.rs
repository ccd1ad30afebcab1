//! Line sinks — where rendered text goes.

use std::io::Write;

use crate::types::GraphResult;

/// Consumer of rendered output, one line at a time.
pub trait LineSink {
    /// Accept one line of output (without a trailing newline).
    fn emit_line(&mut self, line: &str) -> GraphResult<()>;
}

impl LineSink for Vec<String> {
    fn emit_line(&mut self, line: &str) -> GraphResult<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str)> LineSink for FnSink<F> {
    fn emit_line(&mut self, line: &str) -> GraphResult<()> {
        (self.0)(line);
        Ok(())
    }
}

/// Sends every line to the `log` facade at info level.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: String,
}

impl LogSink {
    /// Log under the given target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The log target lines are written under.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new("edge_graph::render")
    }
}

impl LineSink for LogSink {
    fn emit_line(&mut self, line: &str) -> GraphResult<()> {
        log::info!(target: &self.target, "{}", line);
        Ok(())
    }
}

/// Writes each line followed by `\n` to an `io::Write`.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn emit_line(&mut self, line: &str) -> GraphResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
