use std::io::{self, Write};

use serde_json::Value;

use super::TermEmitter;

/// Pretty-printed JSON emitter.
///
/// Strict JSON has no comment syntax, so unlike the YAML form the persisted
/// file carries no autogenerated banner.
pub struct JsonEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl<W: Write> TermEmitter for JsonEmitter<W> {
    fn emit_document(&mut self, doc: &Value) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, doc).map_err(io::Error::other)?;
        writeln!(self.writer)?;
        self.count += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn document_count(&self) -> u64 {
        self.count
    }
}
