//! Static record-type catalog for one schema-version snapshot of the
//! archive.
//!
//! Each function returns the declarative description of one concrete record
//! type. Abstract bases of the schema (the common dataset/asset field set,
//! the contributor field set, the enumerated-identifier base) exist only as
//! shared field-set helpers in [`common`]; they are folded into the concrete
//! types and are not published as classes of their own.

mod activity;
mod asset;
mod common;
mod contributor;
mod dataset;
mod sample;
mod types;

use crate::model::descriptor::RecordType;

/// Every record type of the schema, in publication order.
pub fn all() -> Vec<RecordType> {
    vec![
        types::assay_type(),
        types::sample_type(),
        types::anatomy(),
        types::strain_type(),
        types::sex_type(),
        types::species_type(),
        types::disorder(),
        types::approach_type(),
        types::measurement_technique_type(),
        types::standards_type(),
        contributor::contact_point(),
        contributor::person(),
        contributor::organization(),
        contributor::software(),
        activity::activity(),
        activity::project(),
        activity::session(),
        activity::ethics_approval(),
        sample::property_value(),
        sample::bio_sample(),
        sample::related_participant(),
        sample::participant(),
        dataset::access_requirements(),
        dataset::assets_summary(),
        dataset::digest(),
        dataset::resource(),
        dataset::dandiset_meta(),
        dataset::published_dandiset_meta(),
        asset::bare_asset_meta(),
        asset::asset_meta(),
        asset::published_asset_meta(),
    ]
}

/// Look up a record type by name.
pub fn find(name: &str) -> Option<RecordType> {
    all().into_iter().find(|r| r.name == name)
}
