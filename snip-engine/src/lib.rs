//! Snippet definitions and placeholder expansion
//!
//!     This crate turns snippet definition text into structured snippets and expands their
//!     placeholders into final text. It is a pure lib: it never reads files, prints, or looks
//!     at the environment. Hosts (the `snip` cli, an editor plugin) own I/O, cursor handling
//!     and tab-stop navigation.
//!
//! Data Flow
//!
//!     definition text -> Parser -> Snippet (ordered Chunks) -> host picks a chunk
//!         -> ExpansionContext::expand(spec) -> final text -> host inserts it
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # SnippetError and Result
//!     ├── filter.rs           # Filter trait
//!     ├── registry.rs         # FilterRegistry: name -> filter lookup
//!     ├── filters             # Built-in filters (upper, lower, camelize, functify, ...)
//!     ├── chunk.rs            # Literal / placeholder segments
//!     ├── snippet.rs          # Trigger + language + chunks
//!     ├── context.rs          # ExpansionContext: bindings, escapes, filter chains
//!     ├── parser.rs           # Definition grammar
//!     └── index.rs            # SnippetIndex: lookup by language
//!
//! Placeholders
//!
//!     A placeholder spec is a head plus an optional filter chain, `$1 $2|functify|upper`.
//!     `$` + digits in the head is a token looked up in the context bindings (greedy on the
//!     digit run). `\` escapes the next character, which is how a literal `$` or `|` is
//!     written. Unbound tokens pass through unchanged unless the context is strict. Details
//!     in ./context.rs.
//!
//! Sharing
//!
//!     Nothing here is global. The host builds a FilterRegistry (usually with_defaults),
//!     wraps it in an Arc and hands it to every ExpansionContext it creates. Contexts are
//!     per session; a registry is read-only once shared.
//!
pub mod chunk;
pub mod context;
pub mod error;
pub mod filter;
pub mod filters;
pub mod index;
pub mod parser;
pub mod registry;
pub mod snippet;

pub use chunk::{Chunk, ChunkKind};
pub use context::{ExpansionContext, Unresolved};
pub use error::{Result, SnippetError};
pub use filter::{Filter, FnFilter};
pub use index::SnippetIndex;
pub use parser::{parse, ParseReport, Parser};
pub use registry::FilterRegistry;
pub use snippet::Snippet;
