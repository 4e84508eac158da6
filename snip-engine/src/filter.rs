//! Filter trait definition
//!
//! A filter is a named, pure text transform. Placeholders apply them with the
//! `|name` suffix syntax, e.g. `$1|functify|upper`.

/// Trait for placeholder filters
///
/// Implementors must be pure and total: the same input always yields the same
/// output and no input panics.
///
/// # Examples
///
/// ```ignore
/// struct Reverse;
///
/// impl Filter for Reverse {
///     fn name(&self) -> &str {
///         "reverse"
///     }
///
///     fn apply(&self, input: &str) -> String {
///         input.chars().rev().collect()
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// The name used after `|` in a placeholder (e.g. "upper")
    fn name(&self) -> &str;

    /// Optional one-line description, shown by `snip filters`
    fn description(&self) -> &str {
        ""
    }

    /// Transform the input text
    fn apply(&self, input: &str) -> String;
}

/// Adapter turning a plain function into a [`Filter`]
///
/// The built-in filters are all stateless functions, so they are registered
/// through this wrapper rather than one struct each.
#[derive(Clone, Copy)]
pub struct FnFilter {
    name: &'static str,
    description: &'static str,
    transform: fn(&str) -> String,
}

impl FnFilter {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        transform: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            description,
            transform,
        }
    }
}

impl Filter for FnFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn apply(&self, input: &str) -> String {
        (self.transform)(input)
    }
}
