//! Letter-case filters

pub fn upper(input: &str) -> String {
    input.to_ascii_uppercase()
}

pub fn lower(input: &str) -> String {
    input.to_ascii_lowercase()
}

pub fn capitalize(input: &str) -> String {
    map_first(input, |c| c.to_uppercase().collect())
}

pub fn decapitalize(input: &str) -> String {
    map_first(input, |c| c.to_lowercase().collect())
}

fn map_first(input: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut out = f(first);
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
