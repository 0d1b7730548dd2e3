//! Term graph generation: project a [`RecordType`] into a JSON-LD document.
//!
//! [`model_to_graph`] builds one class node from the record's documentation
//! and `ldmeta` block, then one property node per field in ascending
//! field-name order. Node maps are `serde_json` objects, which serialize with
//! lexicographically sorted keys; that ordering makes generated files
//! diffable and is relied on by downstream review tooling.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use crate::emitter::{Format, JsonEmitter, TermEmitter, YamlEmitter};
use crate::model::descriptor::RecordType;
use crate::model::label::split_name;
use crate::model::ontology::{keyword, nskey, term, CONTEXT_BASE};

/// A field descriptor lacked the required namespace-prefix annotation.
///
/// This is a defect in the record type declaration, surfaced to the schema
/// author; the generation call fails before producing any output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingNamespaceError {
    pub record: String,
    pub field: String,
}

impl std::fmt::Display for MissingNamespaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field {}.{} has no namespace prefix (nskey)",
            self.record, self.field
        )
    }
}

impl std::error::Error for MissingNamespaceError {}

/// Errors from generating and persisting a term graph document.
#[derive(Debug)]
pub enum GenerateError {
    MissingNamespace(MissingNamespaceError),
    Io(io::Error),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::MissingNamespace(e) => write!(f, "{e}"),
            GenerateError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<MissingNamespaceError> for GenerateError {
    fn from(e: MissingNamespaceError) -> Self {
        GenerateError::MissingNamespace(e)
    }
}

impl From<io::Error> for GenerateError {
    fn from(e: io::Error) -> Self {
        GenerateError::Io(e)
    }
}

/// Convert a record type description to a JSON-LD term graph document.
///
/// Pure with respect to its input; persistence is layered on top by
/// [`write_term_file`].
pub fn model_to_graph(record: &RecordType) -> Result<Value, MissingNamespaceError> {
    let class_id = format!("{}:{}", record.ldmeta.nskey, record.name);

    let mut class = Map::new();
    class.insert(term::RDFS_COMMENT.into(), json!(record.doc));
    class.insert(term::RDFS_LABEL.into(), json!(split_name(record.name)));
    class.insert(term::RDF_TYPE.into(), json!(term::RDFS_CLASS));
    class.insert(keyword::ID.into(), json!(class_id));
    if !record.ldmeta.subclass_of.is_empty() {
        class.insert(term::RDFS_SUBCLASS_OF.into(), json!(record.ldmeta.subclass_of));
    }
    // ldmeta overrides win over the defaults derived above.
    if let Some(label) = record.ldmeta.label {
        class.insert(term::RDFS_LABEL.into(), json!(label));
    }
    if let Some(comment) = record.ldmeta.comment {
        class.insert(term::RDFS_COMMENT.into(), json!(comment));
    }

    let mut graph = Vec::with_capacity(record.fields.len() + 1);
    graph.push(Value::Object(class));

    for (field, descriptor) in &record.fields {
        let prefix = descriptor.nskey.ok_or_else(|| MissingNamespaceError {
            record: record.name.to_string(),
            field: field.to_string(),
        })?;

        let mut prop = Map::new();
        prop.insert(keyword::ID.into(), json!(format!("{prefix}:{field}")));
        prop.insert(term::SCHEMA_DOMAIN_INCLUDES.into(), json!(class_id));
        // A field under the generic content vocabulary reuses an externally
        // defined term verbatim; only domain-specific fields declare a
        // property of their own.
        if prefix != nskey::SCHEMA {
            prop.insert(keyword::TYPE.into(), json!(term::RDF_PROPERTY));
            let label = descriptor
                .title
                .map(str::to_string)
                .unwrap_or_else(|| split_name(field));
            prop.insert(term::RDFS_LABEL.into(), json!(label));
            if let Some(description) = descriptor.description {
                prop.insert(term::RDFS_COMMENT.into(), json!(description));
            }
            if let Some(range) = descriptor.range_includes {
                prop.insert(term::SCHEMA_RANGE_INCLUDES.into(), json!(range));
            }
        }
        graph.push(Value::Object(prop));
    }

    let mut doc = Map::new();
    doc.insert(keyword::CONTEXT.into(), json!(CONTEXT_BASE));
    doc.insert(keyword::GRAPH.into(), Value::Array(graph));
    Ok(Value::Object(doc))
}

/// Generate a record type's term graph and persist it under `dir` as
/// `{Name}.{ext}`. Returns the written path.
///
/// The document is built in full before the file is created, so a failed
/// generation leaves nothing behind.
pub fn write_term_file(
    record: &RecordType,
    dir: &Path,
    format: Format,
) -> Result<PathBuf, GenerateError> {
    let doc = model_to_graph(record)?;
    let path = dir.join(format!("{}.{}", record.name, format.extension()));
    let writer = BufWriter::new(File::create(&path)?);
    match format {
        Format::Yaml => {
            let mut emitter = YamlEmitter::new(writer);
            emitter.emit_document(&doc)?;
            emitter.flush()?;
        }
        Format::Json => {
            let mut emitter = JsonEmitter::new(writer);
            emitter.emit_document(&doc)?;
            emitter.flush()?;
        }
    }
    Ok(path)
}
