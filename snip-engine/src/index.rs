//! Snippet lookup by language
//!
//! Snippets with an empty language are global: every language lookup falls
//! back to them after its own snippets.

use crate::error::{Result, SnippetError};
use crate::parser::ParseReport;
use crate::snippet::Snippet;
use std::collections::BTreeMap;

const GLOBAL: &str = "";

#[derive(Debug, Clone, Default)]
pub struct SnippetIndex {
    by_language: BTreeMap<String, Vec<Snippet>>,
}

impl SnippetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snippet. A second snippet with the same language and trigger is
    /// rejected and the first one kept.
    pub fn insert(&mut self, snippet: Snippet) -> Result<()> {
        let bucket = self
            .by_language
            .entry(snippet.language().to_string())
            .or_default();
        if bucket.iter().any(|s| s.trigger() == snippet.trigger()) {
            return Err(SnippetError::DuplicateTrigger {
                language: snippet.language().to_string(),
                trigger: snippet.trigger().to_string(),
            });
        }
        bucket.push(snippet);
        Ok(())
    }

    /// Insert every snippet of a parse report, returning the rejected ones'
    /// errors. Parse errors already in the report are not repeated.
    pub fn extend(&mut self, report: ParseReport) -> Vec<SnippetError> {
        report
            .snippets
            .into_iter()
            .filter_map(|snippet| self.insert(snippet).err())
            .collect()
    }

    /// Snippets for `language`, followed by the global ones
    pub fn for_language<'a>(&'a self, language: &str) -> Vec<&'a Snippet> {
        let own = self.by_language.get(language).into_iter().flatten();
        let global = if language == GLOBAL {
            None
        } else {
            self.by_language.get(GLOBAL)
        };
        own.chain(global.into_iter().flatten()).collect()
    }

    /// Find a trigger, preferring the language-specific definition
    pub fn find(&self, language: &str, trigger: &str) -> Option<&Snippet> {
        self.for_language(language)
            .into_iter()
            .find(|s| s.trigger() == trigger)
    }

    /// Languages with at least one snippet (sorted, global shown as "")
    pub fn languages(&self) -> Vec<&str> {
        self.by_language.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.by_language.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
