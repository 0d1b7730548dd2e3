//! Compact JSON-LD terms shared by the vocabulary loader and the generator.
//!
//! - `keyword` -- JSON-LD keywords used as document/node keys
//! - `term` -- prefixed RDF/RDFS/schema.org terms
//! - `nskey` -- namespace prefixes record types and fields are declared under

/// JSON-LD keywords.
pub mod keyword {
    pub const CONTEXT: &str = "@context";
    pub const GRAPH: &str = "@graph";
    pub const ID: &str = "@id";
    pub const TYPE: &str = "@type";
}

/// Prefixed RDF/RDFS/schema.org terms used in term graph nodes.
pub mod term {
    pub const RDF_TYPE: &str = "rdf:type";
    pub const RDF_PROPERTY: &str = "rdf:Property";
    pub const RDFS_CLASS: &str = "rdfs:Class";
    pub const RDFS_COMMENT: &str = "rdfs:comment";
    pub const RDFS_LABEL: &str = "rdfs:label";
    pub const RDFS_SUBCLASS_OF: &str = "rdfs:subClassOf";
    pub const SCHEMA_DOMAIN_INCLUDES: &str = "schema:domainIncludes";
    pub const SCHEMA_RANGE_INCLUDES: &str = "schema:rangeIncludes";
}

/// Namespace prefixes (`nskey`) used by the record-type catalog.
pub mod nskey {
    /// Generic content vocabulary (schema.org). Fields under this prefix
    /// reuse externally defined terms and declare no property of their own.
    pub const SCHEMA: &str = "schema";
    /// Archive-specific terms.
    pub const DANDI: &str = "dandi";
    /// W3C provenance vocabulary.
    pub const PROV: &str = "prov";
    /// DataCite contributor-role and relation terms.
    pub const DCITE: &str = "dcite";
    /// SPDX license identifiers.
    pub const SPDX: &str = "spdx";
}

/// Context reference written into every generated term graph document.
pub const CONTEXT_BASE: &str = "../context/base.json";
