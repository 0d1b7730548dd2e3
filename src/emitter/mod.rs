//! Term graph document emitters.

pub mod json;
pub mod yaml;

pub use json::JsonEmitter;
pub use yaml::YamlEmitter;

use std::io;

use serde_json::Value;

/// Serialization format for persisted term graph documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// File extension for documents persisted in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }

    /// Resolve a user-supplied format name.
    pub fn from_name(name: &str) -> Option<Format> {
        match name.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Writes term graph documents in one serialization format.
pub trait TermEmitter {
    /// Emit one document.
    fn emit_document(&mut self, doc: &Value) -> io::Result<()>;
    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
    /// Number of documents emitted so far.
    fn document_count(&self) -> u64;
}
