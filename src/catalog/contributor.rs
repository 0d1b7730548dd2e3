//! Contributor record types: people, organizations, and software.

use crate::model::descriptor::{FieldDescriptor, LdMeta, RecordType};
use crate::model::ontology::nskey;

use super::common::contributor_fields;

pub(super) fn contact_point() -> RecordType {
    RecordType::new(
        "ContactPoint",
        "Contact information for an entity",
        LdMeta::new(nskey::SCHEMA),
    )
    .field("email", FieldDescriptor::new(nskey::SCHEMA))
    .field("url", FieldDescriptor::new(nskey::SCHEMA))
}

pub(super) fn person() -> RecordType {
    RecordType::new(
        "Person",
        "A person that has contributed to an item",
        LdMeta::new(nskey::DANDI).subclass_of(&["schema:Person", "prov:Person"]),
    )
    .with_fields(contributor_fields())
    .field(
        "identifier",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("An ORCID Identifier")
            .description("An ORCID (orcid.org) identifier for an individual"),
    )
    .field(
        "name",
        FieldDescriptor::new(nskey::SCHEMA)
            .description("Use the format: lastname, firstname ..."),
    )
    .field(
        "affiliation",
        FieldDescriptor::new(nskey::SCHEMA)
            .description("An organization that this person is affiliated with."),
    )
}

pub(super) fn organization() -> RecordType {
    RecordType::new(
        "Organization",
        "An organization that has contributed to an item",
        LdMeta::new(nskey::DANDI).subclass_of(&["schema:Organization", "prov:Organization"]),
    )
    .with_fields(contributor_fields())
    .field(
        "identifier",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("A ror.org identifier")
            .description("Use an ror.org identifier for institutions"),
    )
    .field(
        "contactPoint",
        FieldDescriptor::new(nskey::SCHEMA).description("Contact for the organization"),
    )
}

pub(super) fn software() -> RecordType {
    RecordType::new(
        "Software",
        "Software used to generate an item",
        LdMeta::new(nskey::DANDI).subclass_of(&["schema:SoftwareApplication", "prov:Software"]),
    )
    .field(
        "identifier",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("Research Resource Identifier")
            .description("RRID of the software from scicrunch.org."),
    )
    .field("name", FieldDescriptor::new(nskey::SCHEMA))
    .field("version", FieldDescriptor::new(nskey::SCHEMA))
    .field("url", FieldDescriptor::new(nskey::SCHEMA))
}
