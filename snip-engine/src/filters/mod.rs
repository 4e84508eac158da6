//! Built-in filters
//!
//! Every built-in is a plain `fn(&str) -> String` wrapped in a
//! [`FnFilter`](crate::filter::FnFilter). [`BUILTIN`] is the table the default
//! registry is seeded from.

pub mod case;
pub mod naming;
pub mod text;

use crate::filter::FnFilter;

pub use case::{capitalize, decapitalize, lower, upper};
pub use naming::{camelize, functify};
pub use text::{html, space, stripsuffix};

/// All built-in filters, in registration order
pub const BUILTIN: &[FnFilter] = &[
    FnFilter::new("upper", "Uppercase ASCII letters", upper),
    FnFilter::new("lower", "Lowercase ASCII letters", lower),
    FnFilter::new(
        "camelize",
        "snake_case to CamelCase (some_func -> SomeFunc)",
        camelize,
    ),
    FnFilter::new(
        "functify",
        "CamelCase to snake_case (SomeFunc -> some_func)",
        functify,
    ),
    FnFilter::new("capitalize", "Uppercase the first character", capitalize),
    FnFilter::new(
        "decapitalize",
        "Lowercase the first character",
        decapitalize,
    ),
    FnFilter::new("html", "Escape HTML special characters", html),
    FnFilter::new("space", "Replace every character with a space", space),
    FnFilter::new(
        "stripsuffix",
        "Drop the last '.' and what follows (foo.h -> foo)",
        stripsuffix,
    ),
];
