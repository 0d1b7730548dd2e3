//! Humanize camelCase identifiers into display labels.

/// Turn a camelCase identifier into a space-separated phrase with the first
/// word capitalized and every later word lowercased.
///
/// A separator is inserted before every character that has no lowercase form
/// (uppercase letters, but also digits and punctuation), so runs of capitals
/// split into single letters: `"RRID"` becomes `"R r i d"`. That quirk is
/// load-bearing for existing published term labels and is left as is.
///
/// ```
/// use schema2ld::model::label::split_name;
/// assert_eq!(split_name("AssayType"), "Assay type");
/// assert_eq!(split_name("numberOfBytes"), "Number of bytes");
/// ```
pub fn split_name(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() * 2);
    for c in name.chars() {
        if !c.is_lowercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut words = spaced.split_whitespace();
    let first = match words.next() {
        Some(w) => w,
        None => return String::new(),
    };

    let mut label = String::with_capacity(name.len() + 8);
    // Only the first character's case is forced; the rest of the first
    // word passes through untouched.
    let mut chars = first.chars();
    if let Some(c) = chars.next() {
        label.extend(c.to_uppercase());
        label.push_str(chars.as_str());
    }
    for word in words {
        label.push(' ');
        label.push_str(&word.to_lowercase());
    }
    label
}
