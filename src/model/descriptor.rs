//! Static descriptions of archive record types.
//!
//! A [`RecordType`] is a declarative snapshot of one record type: its name,
//! documentation string, class-level JSON-LD annotations ([`LdMeta`]), and an
//! ordered-by-name map of [`FieldDescriptor`]s. The catalog declares these at
//! init time; the generator consumes them without mutation.

use std::collections::BTreeMap;

use crate::vocab::Enumeration;

/// Per-field metadata supplied by a record type declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldDescriptor {
    /// Namespace prefix the field's RDF property lives under. Required for
    /// generation; a missing prefix is a configuration defect.
    pub nskey: Option<&'static str>,
    /// Display title. Falls back to the humanized field name.
    pub title: Option<&'static str>,
    /// Documentation emitted as the property's `rdfs:comment`.
    pub description: Option<&'static str>,
    /// Compact reference to the semantic type of the field's values,
    /// emitted as `schema:rangeIncludes`.
    pub range_includes: Option<&'static str>,
    /// Fixed value domain, for fields constrained to a bundled enumeration.
    pub domain: Option<&'static Enumeration>,
}

impl FieldDescriptor {
    pub fn new(nskey: &'static str) -> Self {
        Self {
            nskey: Some(nskey),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn range(mut self, range: &'static str) -> Self {
        self.range_includes = Some(range);
        self
    }

    pub fn domain(mut self, domain: &'static Enumeration) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Class-level JSON-LD annotations attached to a record type.
///
/// `label` and `comment`, when set, override the generator's defaults
/// (humanized name and docstring respectively).
#[derive(Debug, Clone, Copy)]
pub struct LdMeta {
    /// Namespace prefix the record's RDF class lives under.
    pub nskey: &'static str,
    /// Parent classes emitted as `rdfs:subClassOf` (omitted when empty).
    pub subclass_of: &'static [&'static str],
    pub label: Option<&'static str>,
    pub comment: Option<&'static str>,
}

impl LdMeta {
    pub fn new(nskey: &'static str) -> Self {
        Self {
            nskey,
            subclass_of: &[],
            label: None,
            comment: None,
        }
    }

    pub fn subclass_of(mut self, parents: &'static [&'static str]) -> Self {
        self.subclass_of = parents;
        self
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// One record type of the archive schema.
#[derive(Debug, Clone)]
pub struct RecordType {
    pub name: &'static str,
    /// Documentation string, emitted as the class's `rdfs:comment`.
    pub doc: &'static str,
    pub ldmeta: LdMeta,
    /// Fields keyed by name; `BTreeMap` keeps them in ascending name order,
    /// which is the order property nodes are generated in.
    pub fields: BTreeMap<&'static str, FieldDescriptor>,
}

impl RecordType {
    pub fn new(name: &'static str, doc: &'static str, ldmeta: LdMeta) -> Self {
        Self {
            name,
            doc,
            ldmeta,
            fields: BTreeMap::new(),
        }
    }

    /// Add (or override) a single field.
    pub fn field(mut self, name: &'static str, descriptor: FieldDescriptor) -> Self {
        self.fields.insert(name, descriptor);
        self
    }

    /// Add (or override) a batch of fields. Used by the catalog to fold a
    /// shared base field set into a concrete record type.
    pub fn with_fields(
        mut self,
        fields: impl IntoIterator<Item = (&'static str, FieldDescriptor)>,
    ) -> Self {
        self.fields.extend(fields);
        self
    }
}
