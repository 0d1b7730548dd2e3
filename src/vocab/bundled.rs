//! Enumerations materialized from the vocabulary documents bundled with the
//! crate.
//!
//! Each document under `terms/` is parsed and projected into an
//! [`Enumeration`] on first access and shared read-only afterwards. The
//! documents are part of the crate source, so a failure to load one is a
//! programmer error and panics with the document name.

use once_cell::sync::Lazy;

use super::enumeration::{create_enum, Enumeration, VocabularyDocument};

fn load(name: &str, json: &str) -> Enumeration {
    let document = VocabularyDocument::from_json(json)
        .unwrap_or_else(|e| panic!("bundled vocabulary {name} is not valid JSON-LD: {e}"));
    create_enum(&document)
        .unwrap_or_else(|e| panic!("bundled vocabulary {name} is malformed: {e}"))
}

static ACCESS_TYPE: Lazy<Enumeration> =
    Lazy::new(|| load("access_type", include_str!("terms/access_type.json")));
static ROLE_TYPE: Lazy<Enumeration> =
    Lazy::new(|| load("role_type", include_str!("terms/role_type.json")));
static RELATION_TYPE: Lazy<Enumeration> =
    Lazy::new(|| load("relation_type", include_str!("terms/relation_type.json")));
static PARTICIPANT_RELATION_TYPE: Lazy<Enumeration> = Lazy::new(|| {
    load(
        "participant_relation_type",
        include_str!("terms/participant_relation_type.json"),
    )
});
static LICENSE_TYPE: Lazy<Enumeration> =
    Lazy::new(|| load("license_type", include_str!("terms/license_type.json")));
static IDENTIFIER_TYPE: Lazy<Enumeration> =
    Lazy::new(|| load("identifier_type", include_str!("terms/identifier_type.json")));
static DIGEST_TYPE: Lazy<Enumeration> =
    Lazy::new(|| load("digest_type", include_str!("terms/digest_type.json")));

/// Access status options (open, embargoed, restricted).
pub fn access_type() -> &'static Enumeration {
    &ACCESS_TYPE
}

/// Contributor roles (DataCite vocabulary).
pub fn role_type() -> &'static Enumeration {
    &ROLE_TYPE
}

/// Relations between a dandiset and another resource (DataCite vocabulary).
pub fn relation_type() -> &'static Enumeration {
    &RELATION_TYPE
}

/// Kinship relations between study participants.
pub fn participant_relation_type() -> &'static Enumeration {
    &PARTICIPANT_RELATION_TYPE
}

/// Supported licenses (SPDX identifiers).
pub fn license_type() -> &'static Enumeration {
    &LICENSE_TYPE
}

/// Identifier schemes used across resources.
pub fn identifier_type() -> &'static Enumeration {
    &IDENTIFIER_TYPE
}

/// Checksum types for asset digests.
pub fn digest_type() -> &'static Enumeration {
    &DIGEST_TYPE
}
