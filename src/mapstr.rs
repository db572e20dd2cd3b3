//! Mapping a string function over a sequence of strings.

/// Make a new vector of strings by applying a string function to every
/// element of a slice of some other strings.
///
/// The output has the same length and order as the input: `transform` is
/// called exactly once per element, from the first to the last. If
/// `transform` panics, the panic propagates and the remaining elements are
/// not mapped.
pub fn mapstr<S, F>(items: &[S], mut transform: F) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut(&str) -> String,
{
    let mut result = Vec::with_capacity(items.len());
    for (i, s) in items.iter().enumerate() {
        let s = s.as_ref();
        log::trace!("mapstr: [{}] {:?}", i, s);
        result.push(transform(s));
    }
    result
}

/// Fallible version of [mapstr].
///
/// Stops at the first error, which is returned as is: `transform` is not
/// called on the remaining elements, and there is no partial result.
pub fn try_mapstr<S, F, E>(items: &[S], mut transform: F) -> Result<Vec<String>, E>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Result<String, E>,
{
    items.iter().map(|s| transform(s.as_ref())).collect()
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else if c.is_alphanumeric() {
        false
    } else {
        c.is_whitespace()
    }
}

/// Returns a copy of `s` with the first letter of each word capitalized.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = ' ';
    for c in s.chars() {
        if is_separator(prev) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}
