//! Snippet definition parser
//!
//! Definition sources are line oriented:
//!
//!     # comments and blank lines between blocks are ignored
//!     snippet gobj "GObject boilerplate"
//!     - scope c
//!     - desc GObject boilerplate
//!     ${1:$1|camelize} *${1:$1|functify}_new (void);
//!     endsnippet
//!
//! A block opens with `snippet <trigger> ["description"]`, may carry metadata
//! lines (`- scope <language>`, `- desc <text>`) right after the header, and
//! closes with `endsnippet`. Everything in between is body text.
//!
//! Body segmentation:
//!
//! - `${N:expr}` and `${expr}` are placeholders. The chunk spec is `expr`,
//!   byte-for-byte. A placeholder closes at the first `}` not preceded by `\`;
//!   placeholders do not nest and cannot span lines.
//! - A bare `$N` is a placeholder with spec `$N` and tab stop `N`. Digit runs
//!   too long for a tab stop still form the placeholder, without a tab stop.
//! - Literal text is split into maximal runs of whitespace and of
//!   non-whitespace, one chunk per run.
//! - Body lines are joined by a `"\n"` literal chunk.
//!
//! Escape pairs (`\$`, `\}`, `\\`) only matter for finding delimiters here and
//! are kept in the chunk text; they are resolved at expansion time.
//!
//! A body line that should read `snippet ...` or `endsnippet` is written as
//! `\snippet ...` or `\endsnippet`. Unescaped, it would open or close a block.
//!
//! Errors are collected per block. A malformed block is skipped and parsing
//! resumes with the next one.

use crate::chunk::Chunk;
use crate::error::SnippetError;
use crate::snippet::Snippet;
use std::collections::HashSet;
use tracing::{debug, warn};

const HEADER: &str = "snippet";
const FOOTER: &str = "endsnippet";
const COMMENT: char = '#';
const META_PREFIX: &str = "- ";

/// Result of parsing one definition source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Well-formed snippets, in source order
    pub snippets: Vec<Snippet>,
    /// One entry per rejected block or stray line
    pub errors: Vec<SnippetError>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a definition source with no default language
pub fn parse(source: &str) -> ParseReport {
    Parser::new().parse(source)
}

/// Definition parser
///
/// Holds only the language assigned to blocks without a `- scope` line.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    default_language: String,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    pub fn parse(&self, source: &str) -> ParseReport {
        let mut report = ParseReport::default();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut block: Option<Block> = None;

        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;

            if let Some(mut open) = block.take() {
                if line.trim_end() == FOOTER {
                    self.finish(open, &mut seen, &mut report);
                } else if let Some(header) = parse_header(line) {
                    report_unterminated(&mut report, &open);
                    block = Some(self.open(header, line_no, &mut report));
                } else {
                    open.push_line(line_no, line);
                    block = Some(open);
                }
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                continue;
            }
            if let Some(header) = parse_header(line) {
                block = Some(self.open(header, line_no, &mut report));
            } else if trimmed == FOOTER {
                report_error(
                    &mut report,
                    SnippetError::malformed(line_no, "", "endsnippet without a snippet header"),
                );
            } else {
                report_error(
                    &mut report,
                    SnippetError::malformed(line_no, "", "text outside of a snippet block"),
                );
            }
        }

        if let Some(open) = block {
            report_unterminated(&mut report, &open);
        }

        report
    }

    fn open(&self, header: Header<'_>, line_no: usize, report: &mut ParseReport) -> Block {
        if header.trigger.is_empty() {
            report_error(
                report,
                SnippetError::malformed(line_no, "", "snippet header without a trigger"),
            );
        }
        Block {
            line: line_no,
            trigger: header.trigger.to_string(),
            description: header.description.map(str::to_string),
            language: None,
            in_meta: true,
            body: Vec::new(),
        }
    }

    fn finish(
        &self,
        block: Block,
        seen: &mut HashSet<(String, String)>,
        report: &mut ParseReport,
    ) {
        // already reported when the header was read
        if block.trigger.is_empty() {
            return;
        }

        let language = block
            .language
            .clone()
            .unwrap_or_else(|| self.default_language.clone());

        let chunks = match block.chunks() {
            Ok(chunks) => chunks,
            Err(err) => {
                report_error(report, err);
                return;
            }
        };

        if !seen.insert((language.clone(), block.trigger.clone())) {
            report_error(
                report,
                SnippetError::malformed(
                    block.line,
                    &block.trigger,
                    format!("duplicate trigger for language '{language}'"),
                ),
            );
            return;
        }

        debug!(
            trigger = %block.trigger,
            language = %language,
            chunks = chunks.len(),
            "parsed snippet"
        );
        report.snippets.push(Snippet::new(
            block.trigger,
            language,
            block.description,
            chunks,
        ));
    }
}

fn report_error(report: &mut ParseReport, err: SnippetError) {
    warn!(%err, "skipping malformed snippet definition");
    report.errors.push(err);
}

/// A block without a trigger was already reported at its header.
fn report_unterminated(report: &mut ParseReport, block: &Block) {
    if block.trigger.is_empty() {
        return;
    }
    report_error(
        report,
        SnippetError::malformed(
            block.line,
            &block.trigger,
            "unterminated block (missing endsnippet)",
        ),
    );
}

struct Header<'a> {
    trigger: &'a str,
    description: Option<&'a str>,
}

/// Recognise `snippet <trigger> [description]`. Returns `None` for any other line.
fn parse_header(line: &str) -> Option<Header<'_>> {
    let rest = line.strip_prefix(HEADER)?;
    if !(rest.is_empty() || rest.starts_with(char::is_whitespace)) {
        return None;
    }
    let rest = rest.trim();
    let (trigger, tail) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim()),
        None => (rest, ""),
    };
    let description = if tail.is_empty() {
        None
    } else if tail.len() >= 2 && tail.starts_with('"') && tail.ends_with('"') {
        Some(&tail[1..tail.len() - 1])
    } else {
        Some(tail)
    };
    Some(Header {
        trigger,
        description,
    })
}

struct Block {
    line: usize,
    trigger: String,
    description: Option<String>,
    language: Option<String>,
    in_meta: bool,
    body: Vec<(usize, String)>,
}

impl Block {
    fn push_line(&mut self, line_no: usize, line: &str) {
        if self.in_meta {
            if let Some(meta) = line.strip_prefix(META_PREFIX) {
                let meta = meta.trim();
                let (key, value) = match meta.find(char::is_whitespace) {
                    Some(idx) => (&meta[..idx], meta[idx..].trim()),
                    None => (meta, ""),
                };
                match key {
                    "scope" => {
                        self.language = Some(value.to_string());
                        return;
                    }
                    "desc" => {
                        self.description = Some(value.to_string());
                        return;
                    }
                    _ => {}
                }
            }
            self.in_meta = false;
        }
        self.body.push((line_no, line.to_string()));
    }

    fn chunks(&self) -> Result<Vec<Chunk>, SnippetError> {
        let mut chunks = Vec::new();
        for (i, (line_no, line)) in self.body.iter().enumerate() {
            if i > 0 {
                chunks.push(Chunk::literal("\n"));
            }
            segment_line(line, *line_no, &self.trigger, &mut chunks)?;
        }
        Ok(chunks)
    }
}

/// Split one body line into literal and placeholder chunks.
fn segment_line(
    line: &str,
    line_no: usize,
    trigger: &str,
    chunks: &mut Vec<Chunk>,
) -> Result<(), SnippetError> {
    let bytes = line.as_bytes();
    let mut literal_start = 0;
    let mut i = 0;

    // Delimiters are all ASCII, so byte indexing never splits a character.
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 1 + line[i + 1..].chars().next().map_or(0, char::len_utf8);
            }
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                push_literal_runs(&line[literal_start..i], chunks);
                let inner_start = i + 2;
                let close = find_close(&line[inner_start..]).ok_or_else(|| {
                    SnippetError::malformed(line_no, trigger, "unterminated placeholder")
                })?;
                let inner = &line[inner_start..inner_start + close];
                chunks.push(placeholder(inner));
                i = inner_start + close + 1;
                literal_start = i;
            }
            b'$' if bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => {
                push_literal_runs(&line[literal_start..i], chunks);
                let digits = bytes[i + 1..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                let token = &line[i..i + 1 + digits];
                chunks.push(Chunk::placeholder(token, parse_tab_stop(&token[1..])));
                i += 1 + digits;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    push_literal_runs(&line[literal_start..], chunks);
    Ok(())
}

/// Offset of the first `}` not consumed by an escape pair.
fn find_close(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '}' => return Some(idx),
            _ => {}
        }
    }
    None
}

/// `N:expr` carries a tab stop; anything else is the whole spec.
fn placeholder(inner: &str) -> Chunk {
    let digits = inner.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && inner.as_bytes().get(digits) == Some(&b':') {
        return Chunk::placeholder(&inner[digits + 1..], parse_tab_stop(&inner[..digits]));
    }
    Chunk::placeholder(inner, None)
}

/// `None` when the digits overflow a `u32`.
fn parse_tab_stop(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

/// Push `text` as alternating whitespace / non-whitespace literal chunks.
///
/// The character after a `\` stays in the run of the backslash.
fn push_literal_runs(text: &str, chunks: &mut Vec<Chunk>) {
    let mut run_start = 0;
    let mut run_is_space = None;
    let mut escaped = false;

    for (idx, c) in text.char_indices() {
        let is_space = !escaped && c.is_whitespace();
        escaped = !escaped && c == '\\';
        match run_is_space {
            Some(current) if current != is_space => {
                chunks.push(Chunk::literal(&text[run_start..idx]));
                run_start = idx;
            }
            _ => {}
        }
        run_is_space = Some(is_space);
    }

    if run_start < text.len() {
        chunks.push(Chunk::literal(&text[run_start..]));
    }
}
