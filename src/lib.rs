//! Convert plain-text résumés into styled PDF documents.
//!
//! The input is split into blank-line separated sections and every line is
//! classified by a few textual cues: the first line is the candidate's name,
//! all-caps lines are section headers, and lines starting with `-` are
//! bullets. Each classification maps onto a paragraph style, and the result is
//! flowed onto letter-sized pages by a small layout layer built on
//! [pdf_writer].
//!
//! ```no_run
//! use resume_pdf::{convert_file, ConvertOptions};
//!
//! convert_file("resume.txt", "resume.pdf", &ConvertOptions::default()).unwrap();
//! ```

mod colour;
pub use colour::*;

mod content;

mod convert;
pub use convert::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay out text on pages
pub mod layout;

/// Inline markup understood by paragraphs
pub mod markup;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

/// Reading, splitting, and classifying résumé text
pub mod resume;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
