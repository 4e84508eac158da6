//! Parsed snippet definitions

use crate::chunk::{Chunk, ChunkKind};
use crate::context::{unescape, ExpansionContext};
use crate::error::Result;
use serde::Serialize;

/// A trigger plus an ordered body of chunks, scoped to one language
///
/// Built by the [`Parser`](crate::Parser) and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    trigger: String,
    language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    chunks: Vec<Chunk>,
}

impl Snippet {
    pub fn new(
        trigger: impl Into<String>,
        language: impl Into<String>,
        description: Option<String>,
        chunks: Vec<Chunk>,
    ) -> Self {
        Snippet {
            trigger: trigger.into(),
            language: language.into(),
            description,
            chunks,
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Lookup scope; an empty string means "any language"
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(|c| c.is_placeholder())
    }

    /// Render the whole body: literals with escapes collapsed, placeholders
    /// expanded.
    ///
    /// Every placeholder goes through the same context, so a token used in
    /// several chunks resolves to the same value everywhere.
    pub fn expand(&self, ctx: &ExpansionContext) -> Result<String> {
        let mut out = String::new();
        for chunk in &self.chunks {
            match chunk.kind() {
                ChunkKind::Literal => out.push_str(&unescape(chunk.spec())),
                ChunkKind::Placeholder => out.push_str(&ctx.expand(chunk.spec())?),
            }
        }
        Ok(out)
    }
}
