//! Text layout: wrapping styled text into lines and flowing paragraphs
//! down the pages of a document.
//!
//! [`wrap_runs`](crate::layout::wrap_runs) breaks styled runs into lines that fit a width,
//! and [`PageTemplate::build`](crate::layout::PageTemplate::build) stacks paragraphs and
//! spacers top to bottom, starting new pages as they fill up.
//!
//! # Example
//!
//! ```
//! use resume_pdf::{Document, FontFamily, Pt};
//! use resume_pdf::layout::{Flowable, Margins, PageTemplate, Paragraph, ParagraphStyle};
//! use resume_pdf::pagesize;
//!
//! let mut doc = Document::default();
//! let style = ParagraphStyle::new("Body", Pt(10.0))
//!     .font_family(FontFamily::Helvetica)
//!     .space_after(Pt(6.0));
//! let story = vec![
//!     Flowable::Paragraph(Paragraph::from_markup("Hello, <b>world</b>!", style).unwrap()),
//!     Flowable::Spacer(Pt(12.0)),
//! ];
//!
//! let template = PageTemplate::new(pagesize::LETTER, Margins::all(Pt(72.0)));
//! assert_eq!(template.build(&mut doc, story), 1);
//!
//! let mut pdf = Vec::new();
//! doc.write(&mut pdf).unwrap();
//! ```

mod flow;
mod margins;
mod text;

pub use flow::*;
pub use margins::*;
pub use text::*;
