//! Miscellaneous text filters

pub fn html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Same width, all blanks. Used to align continuation lines under a name.
pub fn space(input: &str) -> String {
    " ".repeat(input.chars().count())
}

pub fn stripsuffix(input: &str) -> String {
    match input.rfind('.') {
        Some(idx) => input[..idx].to_string(),
        None => input.to_string(),
    }
}
