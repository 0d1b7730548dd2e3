use schema2ld::model::label::split_name;

#[test]
fn camel_case_type_name() {
    assert_eq!(split_name("AssayType"), "Assay type");
}

#[test]
fn camel_case_field_name() {
    assert_eq!(split_name("numberOfBytes"), "Number of bytes");
}

#[test]
fn single_word_lowercase() {
    assert_eq!(split_name("identifier"), "Identifier");
}

#[test]
fn single_word_capitalized() {
    assert_eq!(split_name("Digest"), "Digest");
}

#[test]
fn single_character() {
    assert_eq!(split_name("a"), "A");
    assert_eq!(split_name("A"), "A");
}

#[test]
fn empty_input() {
    assert_eq!(split_name(""), "");
}

#[test]
fn whitespace_only_input() {
    assert_eq!(split_name("   "), "");
}

#[test]
fn consecutive_capitals_split_into_single_letters() {
    // Acronym runs get one separator per capital. Accepted quirk: published
    // labels depend on it, so it must not be "fixed".
    assert_eq!(split_name("RRID"), "R r i d");
    assert_eq!(split_name("contentURL"), "Content u r l");
}

#[test]
fn idempotent_on_already_formatted_input() {
    for input in ["AssayType", "numberOfBytes", "wasGeneratedBy", "doi"] {
        let once = split_name(input);
        assert_eq!(
            split_name(&once),
            once,
            "split_name not idempotent for {input}"
        );
    }
}

#[test]
fn existing_separators_are_preserved() {
    assert_eq!(split_name("Assay type"), "Assay type");
}

#[test]
fn later_words_are_fully_lowercased() {
    assert_eq!(split_name("wasGeneratedBy"), "Was generated by");
}
