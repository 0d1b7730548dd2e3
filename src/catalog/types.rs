//! Enumerated-identifier record types: small wrappers around controlled
//! vocabulary terms (OBI, UBERON, taxonomies) used as field values elsewhere
//! in the schema.

use crate::model::descriptor::{FieldDescriptor, LdMeta, RecordType};
use crate::model::ontology::nskey;

use super::common::type_model_fields;

fn type_model(name: &'static str, doc: &'static str) -> RecordType {
    RecordType::new(
        name,
        doc,
        LdMeta::new(nskey::DANDI).subclass_of(&["prov:Entity", "schema:Thing"]),
    )
    .with_fields(type_model_fields())
}

pub(super) fn assay_type() -> RecordType {
    type_model("AssayType", "OBI based identifier for the assay(s) used")
}

pub(super) fn sample_type() -> RecordType {
    type_model("SampleType", "OBI based identifier for the sample type used")
}

pub(super) fn anatomy() -> RecordType {
    type_model(
        "Anatomy",
        "UBERON or other identifier for anatomical part studied",
    )
}

pub(super) fn strain_type() -> RecordType {
    type_model("StrainType", "Identifier for the strain of the sample")
}

pub(super) fn sex_type() -> RecordType {
    type_model("SexType", "Identifier for the sex of the sample")
}

pub(super) fn species_type() -> RecordType {
    type_model("SpeciesType", "Identifier for species of the sample")
}

pub(super) fn disorder() -> RecordType {
    type_model(
        "Disorder",
        "Biolink, SNOMED, or other identifier for disorder studied",
    )
    .field(
        "dxdate",
        FieldDescriptor::new(nskey::DANDI)
            .title("Dates of diagnosis")
            .description("Dates of diagnosis")
            .range("schema:Date"),
    )
}

pub(super) fn approach_type() -> RecordType {
    type_model("ApproachType", "Identifier for approach used")
}

pub(super) fn measurement_technique_type() -> RecordType {
    type_model(
        "MeasurementTechniqueType",
        "Identifier for measurement technique used",
    )
}

pub(super) fn standards_type() -> RecordType {
    type_model("StandardsType", "Identifier for data standard used")
}
