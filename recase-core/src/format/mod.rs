//! Format registry and joiners
//!
//! Each naming convention is a static [`FormatDescriptor`]: a delimiter, a
//! [`Casing`] policy, its aliases and display metadata. A single generic
//! [`render`] consumes the descriptor, so adding a format means adding a row
//! to the registry table.

pub mod descriptor;
pub mod registry;
pub mod render;

pub use descriptor::{Casing, FormatDescriptor, FormatId};
pub use registry::{all, is_supported, resolve, supported_aliases};
pub use render::render;
