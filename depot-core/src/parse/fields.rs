//! Label normalisation shared by the report parsers.

/// Converts a report label to a lower camel case field key.
///
/// The label is lower-cased and trimmed; runs of spaces, tabs, `-` or `_`
/// are removed and the character following them is upper-cased.
///
/// ```rust
/// use depot_core::parse::field_key;
///
/// assert_eq!(field_key("Client root"), "clientRoot");
/// assert_eq!(field_key("  Server   address "), "serverAddress");
/// ```
pub fn field_key(label: &str) -> String {
    let lowered = label.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    let mut upper_next = false;

    for c in lowered.trim().chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            key.extend(c.to_uppercase());
            upper_next = false;
        } else {
            key.push(c);
        }
    }
    key
}

/// Splits `text` at its first colon into `(label, value)`, trimming the
/// value. Text without a colon is used whole as both label and value.
pub fn split_field(text: &str) -> (&str, &str) {
    match text.split_once(':') {
        Some((label, value)) => (label, value.trim()),
        None => (text, text.trim()),
    }
}
