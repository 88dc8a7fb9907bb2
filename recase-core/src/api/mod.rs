//! Public conversion API
//!
//! This module ties the registry and the segmenter together: resolve the
//! format, segment the input, render. Everything here is a thin layer over
//! [`crate::domain`] and [`crate::format`].

mod convert;
mod fluent;
mod info;


pub use convert::{
    convert, to_ada, to_camel, to_cobol, to_dot, to_kebab, to_lower, to_macro, to_pascal,
    to_path, to_sentence, to_snake, to_title, to_train, to_upper, AsFormat,
};
pub use fluent::{from, Converter};
pub use info::{
    format_info, is_format_supported, list_formats, supported_aliases, supported_formats,
    FormatInfo,
};
