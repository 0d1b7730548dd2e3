use std::io::{self, Write};

use serde_json::Value;

use super::TermEmitter;

/// Marker line prepended to every persisted document. Generated term files
/// are committed for review; the banner keeps hand edits out of them.
pub const BANNER: &str = "# AUTOGENERATED - DO NOT EDIT";

/// YAML emitter. The default persisted form of a term graph document:
/// a banner comment followed by the document as a YAML mapping.
///
/// Key order follows the document's own map order (lexicographic, since the
/// generator builds `serde_json` maps), so output is byte-deterministic.
pub struct YamlEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> YamlEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl<W: Write> TermEmitter for YamlEmitter<W> {
    fn emit_document(&mut self, doc: &Value) -> io::Result<()> {
        writeln!(self.writer, "{BANNER}")?;
        serde_yaml::to_writer(&mut self.writer, doc).map_err(io::Error::other)?;
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
