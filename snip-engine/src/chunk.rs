//! Snippet body segments

use serde::Serialize;

/// What a chunk holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// Text inserted as written
    Literal,
    /// An expression expanded against an [`ExpansionContext`](crate::ExpansionContext)
    Placeholder,
}

/// One literal or placeholder segment of a snippet body
///
/// `spec` is the raw source text, kept byte-for-byte: escapes are not
/// processed until expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    kind: ChunkKind,
    spec: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tab_stop: Option<u32>,
}

impl Chunk {
    pub fn literal(text: impl Into<String>) -> Self {
        Chunk {
            kind: ChunkKind::Literal,
            spec: text.into(),
            tab_stop: None,
        }
    }

    pub fn placeholder(spec: impl Into<String>, tab_stop: Option<u32>) -> Self {
        Chunk {
            kind: ChunkKind::Placeholder,
            spec: spec.into(),
            tab_stop,
        }
    }

    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Number written in `${N:...}`, if any
    pub fn tab_stop(&self) -> Option<u32> {
        self.tab_stop
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == ChunkKind::Placeholder
    }
}
