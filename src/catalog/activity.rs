//! Activity record types: the provenance activities that produce datasets
//! and assets.

use crate::model::descriptor::{FieldDescriptor, LdMeta, RecordType};
use crate::model::ontology::nskey;

fn activity_fields() -> Vec<(&'static str, FieldDescriptor)> {
    vec![
        ("identifier", FieldDescriptor::new(nskey::SCHEMA)),
        (
            "name",
            FieldDescriptor::new(nskey::SCHEMA)
                .title("Title")
                .description("The name of the item."),
        ),
        (
            "description",
            FieldDescriptor::new(nskey::SCHEMA).description("A description of the item."),
        ),
        ("startDate", FieldDescriptor::new(nskey::SCHEMA)),
        ("endDate", FieldDescriptor::new(nskey::SCHEMA)),
        ("wasAssociatedWith", FieldDescriptor::new(nskey::PROV)),
    ]
}

pub(super) fn activity() -> RecordType {
    RecordType::new(
        "Activity",
        "Information about the Project activity",
        LdMeta::new(nskey::DANDI).subclass_of(&["prov:Activity", "schema:Thing"]),
    )
    .with_fields(activity_fields())
}

pub(super) fn project() -> RecordType {
    RecordType::new(
        "Project",
        "A project that generated a dandiset or asset",
        LdMeta::new(nskey::DANDI).subclass_of(&["prov:Activity", "schema:Thing"]),
    )
    .with_fields(activity_fields())
    .field(
        "name",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("Title")
            .description("The name of the project that generated this Dandiset or asset."),
    )
    .field(
        "description",
        FieldDescriptor::new(nskey::SCHEMA).description("A brief description of the project."),
    )
}

pub(super) fn session() -> RecordType {
    RecordType::new(
        "Session",
        "A logical session during which an asset was acquired",
        LdMeta::new(nskey::DANDI).subclass_of(&["prov:Activity", "schema:Thing"]),
    )
    .with_fields(activity_fields())
    .field(
        "name",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("Title")
            .description("The name of the logical session associated with the asset."),
    )
    .field(
        "description",
        FieldDescriptor::new(nskey::SCHEMA).description("A brief description of the session."),
    )
}

pub(super) fn ethics_approval() -> RecordType {
    RecordType::new(
        "EthicsApproval",
        "Information about ethics committee approval for project",
        LdMeta::new(nskey::DANDI).subclass_of(&["schema:Thing", "prov:Entity"]),
    )
    .field(
        "identifier",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("Approved protocol identifier")
            .description(
                "Approved Protocol identifier, often a number or alpha-numeric string.",
            ),
    )
    .field(
        "contactPoint",
        FieldDescriptor::new(nskey::SCHEMA)
            .description("Information about the ethics approval committee."),
    )
}
