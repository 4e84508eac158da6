//! `--bind TOKEN=VALUE` argument handling

use snip_engine::ExpansionContext;

/// Split `1=abcd` or `$1=abcd` into a token and its value.
///
/// Only the first `=` separates; the value may contain more.
pub fn parse_binding(raw: &str) -> Result<(String, String), String> {
    let (token, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid binding '{raw}': expected TOKEN=VALUE"))?;
    let digits = token.strip_prefix('$').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "invalid binding '{raw}': token must be $ followed by digits"
        ));
    }
    Ok((format!("${digits}"), value.to_string()))
}

pub fn bind_all<'a>(
    ctx: &mut ExpansionContext,
    raw: impl IntoIterator<Item = &'a String>,
) -> Result<(), String> {
    for arg in raw {
        let (token, value) = parse_binding(arg)?;
        ctx.bind(&token, value);
    }
    Ok(())
}
