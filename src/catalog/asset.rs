//! Asset-level record types: files described locally or on the server.

use crate::model::descriptor::{FieldDescriptor, LdMeta, RecordType};
use crate::model::ontology::nskey;
use crate::vocab::bundled;

use super::common::common_fields;

pub(super) fn bare_asset_meta() -> RecordType {
    RecordType::new(
        "BareAssetMeta",
        "Metadata used to describe an asset anywhere (local or server).",
        LdMeta::new(nskey::DANDI)
            .subclass_of(&["schema:CreativeWork", "prov:Entity"])
            .label("Information about the asset"),
    )
    .with_fields(common_fields())
    .field(
        "license",
        FieldDescriptor::new(nskey::SCHEMA)
            .description("License of item")
            .domain(bundled::license_type()),
    )
    .field("contentSize", FieldDescriptor::new(nskey::SCHEMA))
    .field(
        "encodingFormat",
        FieldDescriptor::new(nskey::SCHEMA).title("File Encoding Format"),
    )
    .field("digest", FieldDescriptor::new(nskey::DANDI))
    .field(
        "dateModified",
        FieldDescriptor::new(nskey::SCHEMA)
            .title("Asset (file or metadata) modification date and time"),
    )
    .field(
        "blobDateModified",
        FieldDescriptor::new(nskey::DANDI).title("Asset file modification date and time"),
    )
    .field("path", FieldDescriptor::new(nskey::DANDI))
    .field("dataType", FieldDescriptor::new(nskey::DANDI))
    .field("sameAs", FieldDescriptor::new(nskey::SCHEMA))
    .field("approach", FieldDescriptor::new(nskey::DANDI))
    .field("measurementTechnique", FieldDescriptor::new(nskey::SCHEMA))
    .field("variableMeasured", FieldDescriptor::new(nskey::SCHEMA))
    .field("wasDerivedFrom", FieldDescriptor::new(nskey::PROV))
    .field(
        "wasAttributedTo",
        FieldDescriptor::new(nskey::PROV)
            .description("Participant(s) to which this file belongs to"),
    )
    .field(
        "wasGeneratedBy",
        FieldDescriptor::new(nskey::PROV)
            .title("Name of the session, project or activity.")
            .description(
                "Describe the session, project or activity that generated this asset",
            ),
    )
}

pub(super) fn asset_meta() -> RecordType {
    let base = bare_asset_meta();
    RecordType::new(
        "AssetMeta",
        "Metadata used to describe an asset on the server.",
        base.ldmeta,
    )
    .with_fields(base.fields)
    .field("identifier", FieldDescriptor::new(nskey::SCHEMA))
    .field("contentUrl", FieldDescriptor::new(nskey::SCHEMA))
}

pub(super) fn published_asset_meta() -> RecordType {
    let base = asset_meta();
    RecordType::new(
        "PublishedAssetMeta",
        "Metadata used to describe a published asset.",
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
