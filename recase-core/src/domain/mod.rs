//! Word segmentation layer
//!
//! Pure text analysis with no knowledge of output formats: the segmenter
//! turns arbitrary input into a [`WordSequence`], the acronym classifier
//! decides which words keep their case, and the casing helpers provide the
//! Unicode-aware transforms the joiners apply.

pub mod acronym;
pub mod casing;
pub mod segmenter;

pub use acronym::is_acronym;
pub use segmenter::{segment, WordSequence, CANONICAL_DELIMITER, SEPARATORS};
