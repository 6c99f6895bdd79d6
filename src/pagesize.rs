//! Paper sizes a résumé is commonly printed on, in portrait orientation.
//!
//! ```
//! use resume_pdf::pagesize::{PageSize, LETTER};
//!
//! let size: PageSize = LETTER;
//! assert_eq!(*size.0, 612.0);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
