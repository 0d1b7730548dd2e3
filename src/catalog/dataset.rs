//! Dataset-level record types, including the dandiset descriptors.

use crate::model::descriptor::{FieldDescriptor, LdMeta, RecordType};
use crate::model::ontology::nskey;
use crate::vocab::bundled;

use super::common::common_fields;

pub(super) fn access_requirements() -> RecordType {
    RecordType::new(
        "AccessRequirements",
        "Information about access options for the dataset",
        LdMeta::new(nskey::DANDI).subclass_of(&["schema:Thing", "prov:Entity"]),
    )
    .field(
        "status",
        FieldDescriptor::new(nskey::DANDI)
            .title("Access status")
            .description("The access status of the item")
            .domain(bundled::access_type()),
    )
    .field(
        "contactPoint",
        FieldDescriptor::new(nskey::SCHEMA)
            .description("Who or where to look for information about access"),
    )
    .field(
        "description",
        FieldDescriptor::new(nskey::SCHEMA)
            .description("Information about access requirements when embargoed or restricted"),
    )
    .field(
        "embargoedUntil",
        FieldDescriptor::new(nskey::DANDI)
            .title("Embargo end date")
            .description("Date on which embargo ends")
            .range("schema:Date"),
    )
}

pub(super) fn assets_summary() -> RecordType {
    RecordType::new(
        "AssetsSummary",
        "Summary over assets contained in a dandiset (published or not)",
        LdMeta::new(nskey::DANDI).subclass_of(&["schema:CreativeWork", "prov:Entity"]),
    )
    .field("numberOfBytes", FieldDescriptor::new(nskey::DANDI))
    .field("numberOfFiles", FieldDescriptor::new(nskey::DANDI))
    .field("numberOfSubjects", FieldDescriptor::new(nskey::DANDI))
    .field("numberOfSamples", FieldDescriptor::new(nskey::DANDI))
    .field("numberOfCells", FieldDescriptor::new(nskey::DANDI))
    .field("dataStandard", FieldDescriptor::new(nskey::DANDI))
    .field("approach", FieldDescriptor::new(nskey::DANDI))
    .field("measurementTechnique", FieldDescriptor::new(nskey::DANDI))
    .field("variableMeasured", FieldDescriptor::new(nskey::DANDI))
    .field("species", FieldDescriptor::new(nskey::DANDI))
}

pub(super) fn digest() -> RecordType {
    RecordType::new(
        "Digest",
        "Information about the crytographic checksum of the item.",
        LdMeta::new(nskey::DANDI)
            .subclass_of(&["schema:Thing", "prov:Entity"])
            .label("Cryptographic checksum information"),
    )
    .field("value", FieldDescriptor::new(nskey::SCHEMA))
    .field(
        "cryptoType",
        FieldDescriptor::new(nskey::DANDI)
            .title("Cryptographic method used")
            .description("Which cryptographic checksum is used")
            .domain(bundled::digest_type()),
    )
}

pub(super) fn resource() -> RecordType {
    RecordType::new(
        "Resource",
        "A resource related to the project",
        LdMeta::new(nskey::DANDI)
            .subclass_of(&["schema:CreativeWork", "prov:Entity"])
            .comment(
                "A resource related to the project (e.g., another dataset, \
                 publication, Webpage)",
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
        "repository",
        FieldDescriptor::new(nskey::DANDI)
            .title("Name of the repository")
            .description("Name of the repository in which the resource is housed"),
    )
    .field(
        "relation",
        FieldDescriptor::new(nskey::DANDI)
            .title("Choose a relation satisfying: Dandiset <relation> Resource")
            .description(
                "Indicates how the resource is related to the dataset. This relation \
                 should satisfy: dandiset <relation> resource",
            )
            .domain(bundled::relation_type()),
    )
}

pub(super) fn dandiset_meta() -> RecordType {
    RecordType::new(
        "DandisetMeta",
        "A body of structured information describing a DANDI dataset.",
        LdMeta::new(nskey::DANDI)
            .subclass_of(&["schema:Dataset", "prov:Entity"])
            .label("Information about the dataset"),
    )
    .with_fields(common_fields())
    .field(
        "identifier",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("Dandiset identifier")
            .description("A Dandiset identifier that can be resolved by identifiers.org"),
    )
    .field(
        "name",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("Dandiset Title")
            .description("A title associated with the Dandiset."),
    )
    .field(
        "description",
        FieldDescriptor::new(nskey::SCHEMA).description("A description of the Dandiset"),
    )
    .field(
        "contributor",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("Dandiset contributors")
            .description("People or Organizations that have contributed to this Dandiset."),
    )
    .field("citation", FieldDescriptor::new(nskey::SCHEMA))
    .field("assetsSummary", FieldDescriptor::new(nskey::DANDI))
    .field("manifestLocation", FieldDescriptor::new(nskey::DANDI))
    .field("version", FieldDescriptor::new(nskey::SCHEMA))
    .field("doi", FieldDescriptor::new(nskey::DANDI).title("DOI"))
    .field(
        "wasGeneratedBy",
        FieldDescriptor::new(nskey::PROV)
            .title("Name of the project")
            .description("Describe the project(s) that generated this Dandiset"),
    )
}

pub(super) fn published_dandiset_meta() -> RecordType {
    let base = dandiset_meta();
    RecordType::new(
        "PublishedDandisetMeta",
        "A published version of a DANDI dataset.",
        base.ldmeta,
    )
    .with_fields(base.fields)
    .field(
        "publishedBy",
        FieldDescriptor::new(nskey::DANDI)
            .description("The URL should contain the provenance of the publishing process."),
    )
    .field("datePublished", FieldDescriptor::new(nskey::SCHEMA))
}
