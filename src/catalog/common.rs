//! Shared field sets folded into concrete record types.

use crate::model::descriptor::FieldDescriptor;
use crate::model::ontology::nskey;
use crate::vocab::bundled;

/// Fields shared by every enumerated-identifier type (assay, anatomy,
/// species and friends).
pub(super) fn type_model_fields() -> Vec<(&'static str, FieldDescriptor)> {
    vec![
        ("identifier", FieldDescriptor::new(nskey::SCHEMA)),
        (
            "name",
            FieldDescriptor::new(nskey::SCHEMA).description("The name of the item."),
        ),
    ]
}

/// Fields shared by every contributor kind.
pub(super) fn contributor_fields() -> Vec<(&'static str, FieldDescriptor)> {
    vec![
        (
            "identifier",
            FieldDescriptor::new(nskey::SCHEMA)
                .title("A Common Identifier")
                .description(
                    "Use a common identifier such as ORCID for people or ROR for institutions",
                )
                .domain(bundled::identifier_type()),
        ),
        ("name", FieldDescriptor::new(nskey::SCHEMA)),
        ("email", FieldDescriptor::new(nskey::SCHEMA)),
        ("url", FieldDescriptor::new(nskey::SCHEMA)),
        (
            "roleName",
            FieldDescriptor::new(nskey::SCHEMA)
                .title("Role")
                .description("Role of the contributor")
                .domain(bundled::role_type()),
        ),
        (
            "includeInCitation",
            FieldDescriptor::new(nskey::DANDI)
                .title("Include Contributor in Citation")
                .description(
                    "A flag to indicate whether a contributor should be included \
                     when generating a citation for the item",
                ),
        ),
        (
            "awardNumber",
            FieldDescriptor::new(nskey::DANDI)
                .title("Identifier for an award")
                .description("Identifier associated with a sponsored or gift award"),
        ),
    ]
}

/// Fields shared by dataset- and asset-level records.
pub(super) fn common_fields() -> Vec<(&'static str, FieldDescriptor)> {
    vec![
        ("schemaVersion", FieldDescriptor::new(nskey::SCHEMA)),
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
        (
            "contributor",
            FieldDescriptor::new(nskey::SCHEMA)
                .title("Contributors")
                .description("Contributors to this item."),
        ),
        (
            "about",
            FieldDescriptor::new(nskey::SCHEMA)
                .title("Subject Matter")
                .description(
                    "The subject matter of the content, such as disorders, brain anatomy.",
                ),
        ),
        (
            "studyTarget",
            FieldDescriptor::new(nskey::DANDI).description("What the study is related to"),
        ),
        (
            "license",
            FieldDescriptor::new(nskey::SCHEMA)
                .description("License of item.")
                .domain(bundled::license_type()),
        ),
        (
            "protocol",
            FieldDescriptor::new(nskey::DANDI).description("A list of protocol.io URLs"),
        ),
        ("ethicsApproval", FieldDescriptor::new(nskey::DANDI)),
        (
            "keywords",
            FieldDescriptor::new(nskey::SCHEMA).description(
                "Keywords or tags used to describe this content. Multiple entries in a \
                 keywords list are typically delimited by commas.",
            ),
        ),
        ("acknowledgement", FieldDescriptor::new(nskey::DANDI)),
        (
            "access",
            FieldDescriptor::new(nskey::DANDI).title("Access Type"),
        ),
        (
            "url",
            FieldDescriptor::new(nskey::SCHEMA).description("permalink to the item"),
        ),
        (
            "repository",
            FieldDescriptor::new(nskey::DANDI).description("location of the item"),
        ),
        ("relatedResource", FieldDescriptor::new(nskey::DANDI)),
        ("wasGeneratedBy", FieldDescriptor::new(nskey::PROV)),
    ]
}
