//! Build in-memory enumerations from JSON-LD vocabulary documents.
//!
//! A vocabulary document is a `@graph` holding exactly one `rdfs:Class` node
//! (the enumeration's name and documentation) and one or more item nodes (its
//! members). [`create_enum`] projects that graph into an [`Enumeration`]
//! mapping symbolic member keys to the items' verbatim compact identifiers.

use serde::Deserialize;

use crate::model::ontology::term;

/// Errors that can make a vocabulary document unusable.
#[derive(Debug)]
pub enum MalformedVocabularyError {
    /// No node in the graph is typed `rdfs:Class`.
    MissingClass,
    /// More than one node is typed `rdfs:Class`.
    DuplicateClass { first: String, second: String },
    /// The class node carries no `rdfs:comment`.
    MissingClassComment { id: String },
    /// The graph holds a class node but no item nodes.
    NoItems { class: String },
}

impl std::fmt::Display for MalformedVocabularyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedVocabularyError::MissingClass => {
                write!(f, "vocabulary document has no rdfs:Class node")
            }
            MalformedVocabularyError::DuplicateClass { first, second } => write!(
                f,
                "vocabulary document has more than one rdfs:Class node: {first} and {second}"
            ),
            MalformedVocabularyError::MissingClassComment { id } => {
                write!(f, "class node {id} has no rdfs:comment")
            }
            MalformedVocabularyError::NoItems { class } => {
                write!(f, "vocabulary for {class} has no item nodes")
            }
        }
    }
}

impl std::error::Error for MalformedVocabularyError {}

/// A JSON-LD vocabulary document: an ordered graph of nodes.
#[derive(Debug, Deserialize)]
pub struct VocabularyDocument {
    #[serde(rename = "@graph")]
    pub graph: Vec<VocabularyNode>,
}

/// One node of a vocabulary graph. Distinguished by `@type`: the single
/// `rdfs:Class` node names the enumeration, every other node is a member.
#[derive(Debug, Deserialize)]
pub struct VocabularyNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type", default)]
    pub node_type: Option<String>,
    #[serde(rename = "rdfs:comment", default)]
    pub comment: Option<String>,
}

impl VocabularyDocument {
    /// Parse a vocabulary document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// An immutable name -> compact-identifier enumeration.
///
/// Built once from a [`VocabularyDocument`]; members keep first-seen document
/// order. Safe to share across threads once constructed.
#[derive(Debug, Clone)]
pub struct Enumeration {
    name: String,
    doc: String,
    members: Vec<(String, String)>,
}

impl Enumeration {
    /// Type name, taken from the class node's identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documentation, taken from the class node's `rdfs:comment`.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Canonical compact identifier for a member key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Members as `(key, compact identifier)` pairs, in first-seen order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &str)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Build an [`Enumeration`] from a vocabulary document.
///
/// Member keys are derived from each item's local name (text after the last
/// `:`, or the whole identifier). The first item to claim a key keeps it;
/// a later item whose local name collides falls back to its full identifier
/// with `:` replaced by `_`. Hyphens are normalized to underscores last.
/// The long-form fallback key is itself not checked for uniqueness; when it
/// clashes with an existing key the later item replaces the earlier value in
/// place. That matches the published vocabularies' historical behavior and
/// is deliberately not tightened here.
pub fn create_enum(document: &VocabularyDocument) -> Result<Enumeration, MalformedVocabularyError> {
    let mut class: Option<String> = None;
    let mut doc = String::new();
    let mut members: Vec<(String, String)> = Vec::new();

    for node in &document.graph {
        if node.node_type.as_deref() == Some(term::RDFS_CLASS) {
            if let Some(first) = &class {
                return Err(MalformedVocabularyError::DuplicateClass {
                    first: first.clone(),
                    second: node.id.clone(),
                });
            }
            class = Some(node.id.replace("dandi:", ""));
            doc = node
                .comment
                .clone()
                .ok_or_else(|| MalformedVocabularyError::MissingClassComment {
                    id: node.id.clone(),
                })?;
        } else {
            let mut key = match node.id.rsplit_once(':') {
                Some((_, local)) => local.to_string(),
                None => node.id.clone(),
            };
            // Collision on the short key forces the long form. The check runs
            // against the normalized keys already collected, before this
            // candidate is itself normalized.
            if members.iter().any(|(k, _)| *k == key) {
                key = node.id.replace(':', "_");
            }
            let key = key.replace('-', "_");
            match members.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = node.id.clone(),
                None => members.push((key, node.id.clone())),
            }
        }
    }

    let name = class.ok_or(MalformedVocabularyError::MissingClass)?;
    if members.is_empty() {
        return Err(MalformedVocabularyError::NoItems { class: name });
    }

    Ok(Enumeration { name, doc, members })
}
