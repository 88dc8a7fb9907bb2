//! Acronym-aware conversion between identifier naming conventions
//!
//! Converts strings such as `user_name`, `userName` or `XMLHttpRequest`
//! between camel, pascal, snake, kebab, macro, train, dot, lower, upper,
//! title, path, ada, cobol and sentence case.
//!
//! # Architecture
//!
//! Conversion is a two-stage pipeline:
//! - **Domain layer**: the segmenter decomposes any input into a canonical
//!   sequence of words, isolating acronym runs and embedded digits
//! - **Format layer**: a static registry of format descriptors, each rendered
//!   by one generic joiner driven by the descriptor's casing policy
//! - **API layer**: `convert`, per-format shortcuts, a fluent handle and
//!   introspection helpers over the two layers above
//!
//! All functions are pure and the registry is read-only, so everything is
//! safe to call from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use recase_core::{convert, to_camel, to_snake, FormatId};
//!
//! assert_eq!(to_snake("XMLHttpRequest"), "xml_http_request");
//! assert_eq!(to_camel("XMLHttpRequest"), "XMLHttpRequest");
//! assert_eq!(convert("user_name", "pascal").unwrap(), "UserName");
//! assert_eq!(convert("user_name", FormatId::Cobol).unwrap(), "USER-NAME");
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod format;

pub use api::{
    convert, format_info, from, is_format_supported, list_formats, supported_aliases,
    supported_formats, to_ada, to_camel, to_cobol, to_dot, to_kebab, to_lower, to_macro,
    to_pascal, to_path, to_sentence, to_snake, to_title, to_train, to_upper, AsFormat,
    Converter, FormatInfo,
};
pub use domain::{is_acronym, segment, WordSequence};
pub use error::{Error, Result};
pub use format::{render, resolve, Casing, FormatDescriptor, FormatId};
