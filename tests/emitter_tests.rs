use schema2ld::emitter::{Format, JsonEmitter, TermEmitter, YamlEmitter};
use serde_json::json;

#[test]
fn yaml_banner_and_document() {
    let mut buf = Vec::new();
    let mut em = YamlEmitter::new(&mut buf);
    em.emit_document(&json!({"@context": "../context/base.json"}))
        .unwrap();
    em.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with("# AUTOGENERATED - DO NOT EDIT\n"));
    assert!(out.contains("@context"), "unexpected YAML: {out}");
    assert!(out.contains("../context/base.json"), "unexpected YAML: {out}");
}

#[test]
fn yaml_document_count() {
    let mut buf = Vec::new();
    let mut em = YamlEmitter::new(&mut buf);
    assert_eq!(em.document_count(), 0);
    em.emit_document(&json!({"a": 1})).unwrap();
    assert_eq!(em.document_count(), 1);
}

#[test]
fn json_output_is_strict_json() {
    let mut buf = Vec::new();
    let mut em = JsonEmitter::new(&mut buf);
    em.emit_document(&json!({"@context": "../context/base.json", "@graph": []}))
        .unwrap();
    em.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    // No banner: strict JSON has no comment syntax.
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["@context"], "../context/base.json");
    assert!(out.ends_with('\n'));
}

#[test]
fn json_document_count() {
    let mut buf = Vec::new();
    let mut em = JsonEmitter::new(&mut buf);
    em.emit_document(&json!({"a": 1})).unwrap();
    em.emit_document(&json!({"b": 2})).unwrap();
    assert_eq!(em.document_count(), 2);
}

#[test]
fn format_names() {
    assert_eq!(Format::from_name("yaml"), Some(Format::Yaml));
    assert_eq!(Format::from_name("YML"), Some(Format::Yaml));
    assert_eq!(Format::from_name("json"), Some(Format::Json));
    assert_eq!(Format::from_name("turtle"), None);
    assert_eq!(Format::Yaml.extension(), "yaml");
    assert_eq!(Format::Json.extension(), "json");
}
