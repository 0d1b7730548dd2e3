//! JSON-LD vocabulary documents and the enumerations built from them.

pub mod bundled;
pub mod enumeration;

pub use enumeration::{
    create_enum, Enumeration, MalformedVocabularyError, VocabularyDocument, VocabularyNode,
};
