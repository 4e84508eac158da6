//! Filter registry for filter lookup by name
//!
//! The registry is built once by the host (usually via [`FilterRegistry::with_defaults`]),
//! optionally extended with custom filters, then shared read-only between
//! expansion contexts behind an `Arc`.

use crate::error::{Result, SnippetError};
use crate::filter::Filter;
use crate::filters::BUILTIN;
use std::collections::HashMap;
use std::fmt;

/// Registry of placeholder filters
///
/// # Examples
///
/// ```ignore
/// let mut registry = FilterRegistry::with_defaults();
/// registry.register(MyFilter);
///
/// let out = registry.apply("upper", "abc")?;
/// ```
pub struct FilterRegistry {
    filters: HashMap<String, Box<dyn Filter>>,
}

impl FilterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FilterRegistry {
            filters: HashMap::new(),
        }
    }

    /// Register a filter
    ///
    /// If a filter with the same name already exists, it will be replaced.
    pub fn register<F: Filter + 'static>(&mut self, filter: F) {
        self.filters
            .insert(filter.name().to_string(), Box::new(filter));
    }

    /// Get a filter by name
    pub fn get(&self, name: &str) -> Result<&dyn Filter> {
        self.filters
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| SnippetError::UnknownFilter(name.to_string()))
    }

    /// Check if a filter exists
    pub fn has(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// List all available filter names (sorted)
    pub fn list_filters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.filters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Run the named filter over `input`
    pub fn apply(&self, name: &str, input: &str) -> Result<String> {
        Ok(self.get(name)?.apply(input))
    }

    /// Create a registry with the built-in filters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for filter in BUILTIN {
            registry.register(*filter);
        }
        registry
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.list_filters())
            .finish()
    }
}
