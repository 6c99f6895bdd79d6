//! The résumé side of the conversion: load text, split it into sections,
//! classify each line, and assemble the result into a [Story].
//!
//! Nothing in here knows about pages or fonts. A [Story] is an ordered list
//! of classified lines and section breaks that a renderer turns into a PDF.

mod assemble;
mod classify;
mod loader;
mod section;
mod style;

pub use assemble::*;
pub use classify::*;
pub use loader::*;
pub use section::*;
pub use style::*;
