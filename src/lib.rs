//! schema2ld: project dataset archive record types to JSON-LD term graphs.
//!
//! The crate has three layers:
//!
//! - [`model`] — record-type descriptions ([`model::descriptor::RecordType`]),
//!   the label formatter, and the shared compact-term constants.
//! - [`vocab`] — the JSON-LD vocabulary loader ([`vocab::create_enum`]) and
//!   the bundled enumerations it materializes at first use.
//! - [`generator`] / [`emitter`] — the term graph generator
//!   ([`generator::model_to_graph`]) and the YAML/JSON document emitters.
//!
//! The [`catalog`] module holds the static record-type declarations for one
//! schema-version snapshot of the archive.

pub mod catalog;
pub mod emitter;
pub mod generator;
pub mod model;
pub mod vocab;
