//! Identifier-convention filters
//!
//! `camelize` and `functify` convert between `snake_case` and `CamelCase`.
//! They are inverses on well-formed lowercase snake names:
//! `functify(camelize(s)) == s`.

/// Split on `_`, uppercase the first character of each non-empty segment and
/// join without a separator. The first character follows Unicode case mapping,
/// so `ß` becomes `SS`.
pub fn camelize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in input.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Insert `_` before every uppercase ASCII letter except a leading one, then
/// lowercase the whole result.
pub fn functify(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 2);
    for (i, c) in input.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
