//! Placeholder expansion
//!
//! A placeholder spec is a head followed by an optional filter chain:
//!
//!     $1 $2|functify|upper
//!     ^^^^^ ^^^^^^^^ ^^^^^
//!     head  filter   filter
//!
//! The head is scanned once, left to right:
//!
//! - `\c` emits `c` literally. This is how a literal `$` or `|` is written.
//! - `$` followed by digits is a token. The digit run is greedy, so `$123`
//!   is one token and never `$1` followed by `23`.
//! - Everything else is copied.
//!
//! The expanded head is then fed through each filter in order. Filter names are
//! taken verbatim; only the head is escape-processed.
//!
//! Bound values are inserted as-is and never scanned again.

use crate::error::{Result, SnippetError};
use crate::registry::FilterRegistry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

const ESCAPE: char = '\\';
const PIPE: char = '|';
const SIGIL: char = '$';

/// What to do with a token that has no binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unresolved {
    /// Emit the token text unchanged (`$9` stays `$9`)
    #[default]
    PassThrough,
    /// Fail the expansion with [`SnippetError::UndefinedVariable`]
    Strict,
}

/// Bindings and filters for one expansion session
///
/// Create one per snippet insertion, bind every known value, then expand each
/// placeholder chunk against it. Expansion takes `&self`, so a populated
/// context is read-only for the rest of the session.
#[derive(Debug, Clone)]
pub struct ExpansionContext {
    bindings: HashMap<String, String>,
    policy: Unresolved,
    filters: Arc<FilterRegistry>,
}

impl ExpansionContext {
    /// Context with the built-in filters and pass-through policy
    pub fn new() -> Self {
        Self::with_registry(Arc::new(FilterRegistry::with_defaults()))
    }

    /// Context sharing a registry owned by the host
    pub fn with_registry(filters: Arc<FilterRegistry>) -> Self {
        ExpansionContext {
            bindings: HashMap::new(),
            policy: Unresolved::default(),
            filters,
        }
    }

    pub fn with_policy(mut self, policy: Unresolved) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> Unresolved {
        self.policy
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    /// Bind a token to a value. `"1"` and `"$1"` name the same token.
    ///
    /// Rebinding replaces the previous value.
    pub fn bind(&mut self, token: &str, value: impl Into<String>) -> &mut Self {
        self.bindings.insert(normalize_token(token), value.into());
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.bindings
            .get(&normalize_token(token))
            .map(String::as_str)
    }

    /// All bindings, ordered numerically by token
    pub fn bindings(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self
            .bindings
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(b.0)));
        pairs
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Expand a placeholder spec into its final text
    pub fn expand(&self, spec: &str) -> Result<String> {
        let (head, filters) = split_filters(spec);
        let mut text = self.expand_head(head)?;
        for name in filters {
            text = self.filters.apply(name, &text)?;
        }
        trace!(spec = spec, result = %text, "expanded placeholder");
        Ok(text)
    }

    fn expand_head(&self, head: &str) -> Result<String> {
        let mut out = String::with_capacity(head.len());
        let mut chars = head.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            match c {
                ESCAPE => match chars.next() {
                    Some((_, escaped)) => out.push(escaped),
                    None => out.push(ESCAPE),
                },
                SIGIL => {
                    let start = idx + c.len_utf8();
                    let mut end = start;
                    while let Some(&(i, d)) = chars.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        end = i + d.len_utf8();
                        chars.next();
                    }
                    if end == start {
                        out.push(SIGIL);
                    } else {
                        out.push_str(&self.resolve(&head[idx..end])?);
                    }
                }
                _ => out.push(c),
            }
        }

        Ok(out)
    }

    fn resolve(&self, token: &str) -> Result<String> {
        match self.bindings.get(token) {
            Some(value) => Ok(value.clone()),
            None => match self.policy {
                Unresolved::PassThrough => Ok(token.to_string()),
                Unresolved::Strict => Err(SnippetError::UndefinedVariable(token.to_string())),
            },
        }
    }
}

impl Default for ExpansionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse escape pairs without resolving tokens. Used for literal chunks.
pub(crate) fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            out.push(chars.next().unwrap_or(ESCAPE));
        } else {
            out.push(c);
        }
    }
    out
}

fn normalize_token(token: &str) -> String {
    if token.starts_with(SIGIL) {
        token.to_string()
    } else {
        format!("{SIGIL}{token}")
    }
}

/// Split a spec into its head and filter names.
///
/// The head ends at the first `|` that is not part of an escape pair. The
/// remainder splits on every `|` not directly preceded by `\`.
fn split_filters(spec: &str) -> (&str, Vec<&str>) {
    let mut chars = spec.char_indices();
    let mut head_end = None;
    while let Some((idx, c)) = chars.next() {
        match c {
            ESCAPE => {
                chars.next();
            }
            PIPE => {
                head_end = Some(idx);
                break;
            }
            _ => {}
        }
    }

    let Some(end) = head_end else {
        return (spec, Vec::new());
    };

    let rest = &spec[end + PIPE.len_utf8()..];
    let mut names = Vec::new();
    let mut start = 0;
    let mut prev = None;
    for (idx, c) in rest.char_indices() {
        if c == PIPE && prev != Some(ESCAPE) {
            names.push(&rest[start..idx]);
            start = idx + PIPE.len_utf8();
        }
        prev = Some(c);
    }
    names.push(&rest[start..]);

    (&spec[..end], names)
}
