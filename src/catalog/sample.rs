//! Biological sample and participant record types.
//!
//! `BioSample` and `RelatedParticipant` are self-referential in the archive:
//! a sample derived from another sample, a participant related to another
//! participant. The declarations store collections of identifiers referencing
//! other records rather than embedding them, so the descriptions stay acyclic.

use crate::model::descriptor::{FieldDescriptor, LdMeta, RecordType};
use crate::model::ontology::nskey;
use crate::vocab::bundled;

pub(super) fn property_value() -> RecordType {
    RecordType::new(
        "PropertyValue",
        "A value and its characteristics, such as a unit",
        LdMeta::new(nskey::SCHEMA),
    )
    .field("maxValue", FieldDescriptor::new(nskey::SCHEMA))
    .field("minValue", FieldDescriptor::new(nskey::SCHEMA))
    .field("unitText", FieldDescriptor::new(nskey::SCHEMA))
    .field("value", FieldDescriptor::new(nskey::SCHEMA))
    .field("valueReference", FieldDescriptor::new(nskey::SCHEMA))
    .field(
        "propertyID",
        FieldDescriptor::new(nskey::SCHEMA)
            .description(
                "A commonly used identifier for the characteristic represented by the property.",
            )
            .domain(bundled::identifier_type()),
    )
}

pub(super) fn bio_sample() -> RecordType {
    RecordType::new(
        "BioSample",
        "Description about the sample that was studied",
        LdMeta::new(nskey::DANDI)
            .subclass_of(&["schema:Thing", "prov:Entity"])
            .label("Information about the biosample."),
    )
    .field("identifier", FieldDescriptor::new(nskey::SCHEMA))
    .field(
        "sampleType",
        FieldDescriptor::new(nskey::DANDI)
            .description("OBI based identifier for the sample used"),
    )
    .field(
        "assayType",
        FieldDescriptor::new(nskey::DANDI)
            .description("OBI based identifier for the assay(s) used"),
    )
    .field(
        "anatomy",
        FieldDescriptor::new(nskey::DANDI).description(
            "UBERON based identifier for what organ the sample belongs to. \
             Use the most specific descriptor.",
        ),
    )
    .field("wasDerivedFrom", FieldDescriptor::new(nskey::PROV))
    .field("sameAs", FieldDescriptor::new(nskey::SCHEMA))
    .field("hasMember", FieldDescriptor::new(nskey::PROV))
}

pub(super) fn related_participant() -> RecordType {
    RecordType::new(
        "RelatedParticipant",
        "A participant related to another participant",
        LdMeta::new(nskey::DANDI)
            .subclass_of(&["schema:CreativeWork", "prov:Entity"])
            .comment(
                "Another participant related to the participant (e.g., another \
                 parent, sibling, child)",
            ),
    )
    .field("identifier", FieldDescriptor::new(nskey::SCHEMA))
    .field(
        "name",
        FieldDescriptor::new(nskey::SCHEMA).title("A title of the resource"),
    )
    .field(
        "url",
        FieldDescriptor::new(nskey::SCHEMA).title("URL of the resource"),
    )
    .field(
        "relation",
        FieldDescriptor::new(nskey::DANDI)
            .title("Choose a relation satisfying: Participant <relation> relatedParticipant")
            .description(
                "Indicates how the current participant is related to the other participant \
                 This relation should satisfy: Participant <relation> relatedParticipant",
            )
            .domain(bundled::participant_relation_type()),
    )
}

pub(super) fn participant() -> RecordType {
    RecordType::new(
        "Participant",
        "Description about the participant that was studied",
        LdMeta::new(nskey::DANDI)
            .subclass_of(&["schema:Thing", "prov:Entity"])
            .label("Information about the participant."),
    )
    .field("identifier", FieldDescriptor::new(nskey::SCHEMA))
    .field("source_id", FieldDescriptor::new(nskey::DANDI))
    .field(
        "strain",
        FieldDescriptor::new(nskey::DANDI)
            .description("Identifier for the strain of the sample"),
    )
    .field(
        "cellLine",
        FieldDescriptor::new(nskey::DANDI).description("Cell line associated with the sample"),
    )
    .field("vendor", FieldDescriptor::new(nskey::DANDI))
    .field(
        "age",
        FieldDescriptor::new(nskey::DANDI)
            .description(
                "A representation of age using ISO 8601 duration. This should include \
                 a valueReference if anything other than date of birth is used.",
            )
            .range("schema:Duration"),
    )
    .field(
        "sex",
        FieldDescriptor::new(nskey::DANDI)
            .description("OBI based identifier for sex of the sample if available"),
    )
    .field(
        "genotype",
        FieldDescriptor::new(nskey::DANDI)
            .description("Genotype descriptor of biosample if available"),
    )
    .field(
        "species",
        FieldDescriptor::new(nskey::DANDI).description(
            "An identifier indicating the taxonomic classification of the biosample",
        ),
    )
    .field(
        "disorder",
        FieldDescriptor::new(nskey::DANDI).description(
            "Any current diagnosed disease or disorder associated with the sample",
        ),
    )
    .field("relatedParticipant", FieldDescriptor::new(nskey::DANDI))
}
