//! Freeze Arabic script letters in their contextual forms.
//!
//! Arabic letters normally pick their isolated, initial, medial or final
//! glyph from their neighbours at render time. This crate pins that choice in
//! the text itself by inserting invisible markers: a word joiner between
//! adjacent Arabic characters and zero width joiners around letters that must
//! stay connected. The result renders the same shapes even when letters are
//! later inspected one at a time, which is what character inventory tools
//! need.

pub mod io;
pub mod reshape;
pub mod tables;

// Re-export key types for easier usage
pub use io::*;
pub use reshape::*;
pub use tables::*;
