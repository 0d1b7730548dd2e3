//! Checks over the static record-type catalog.

use schema2ld::catalog;
use schema2ld::generator::model_to_graph;

#[test]
fn catalog_is_nonempty_with_unique_names() {
    let records = catalog::all();
    assert!(records.len() >= 30, "expected the full catalog, got {}", records.len());
    let mut names: Vec<_> = records.iter().map(|r| r.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), records.len(), "duplicate record type names");
}

#[test]
fn every_record_type_generates() {
    for record in catalog::all() {
        let doc = model_to_graph(&record)
            .unwrap_or_else(|e| panic!("{} failed to generate: {e}", record.name));
        let graph = doc["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), record.fields.len() + 1);
    }
}

#[test]
fn every_field_declares_a_namespace() {
    for record in catalog::all() {
        for (name, field) in &record.fields {
            assert!(
                field.nskey.is_some(),
                "{}.{name} has no nskey",
                record.name
            );
        }
    }
}

#[test]
fn find_looks_up_by_name() {
    let dandiset = catalog::find("DandisetMeta").expect("DandisetMeta is cataloged");
    assert!(dandiset.fields.contains_key("contributor"));
    assert!(dandiset.fields.contains_key("assetsSummary"));
    assert!(catalog::find("NoSuchType").is_none());
}

#[test]
fn enumerated_fields_reference_bundled_vocabularies() {
    let access = catalog::find("AccessRequirements").unwrap();
    let status = access.fields["status"];
    let domain = status.domain.expect("status has a value domain");
    assert!(domain.contains("Open"));

    let digest = catalog::find("Digest").unwrap();
    let crypto = digest.fields["cryptoType"];
    assert_eq!(crypto.domain.unwrap().name(), "DigestType");
}

#[test]
fn subtype_overrides_replace_base_fields() {
    let person = catalog::find("Person").unwrap();
    assert_eq!(
        person.fields["identifier"].title,
        Some("An ORCID Identifier")
    );
    // Inherited contributor field survives alongside the override.
    assert!(person.fields.contains_key("roleName"));

    let organization = catalog::find("Organization").unwrap();
    assert_eq!(
        organization.fields["identifier"].title,
        Some("A ror.org identifier")
    );
}

#[test]
fn published_variants_extend_their_base() {
    let base = catalog::find("DandisetMeta").unwrap();
    let published = catalog::find("PublishedDandisetMeta").unwrap();
    assert_eq!(published.fields.len(), base.fields.len() + 2);
    assert!(published.fields.contains_key("publishedBy"));
    assert!(published.fields.contains_key("datePublished"));
}

#[test]
fn dandiset_class_node_matches_declarations() {
    let doc = model_to_graph(&catalog::find("DandisetMeta").unwrap()).unwrap();
    let class = &doc["@graph"][0];
    assert_eq!(class["@id"], "dandi:DandisetMeta");
    assert_eq!(class["rdfs:label"], "Information about the dataset");
    assert_eq!(
        class["rdfs:subClassOf"],
        serde_json::json!(["schema:Dataset", "prov:Entity"])
    );
}
