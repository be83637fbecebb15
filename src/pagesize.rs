//! Pre-defined page sizes for the paper formats legal documents are printed on.
//!
//! All sizes are provided in portrait orientation (width, height).
//!
//! # Example
//!
//! ```
//! use pdf_paginate::pagesize::{A4, LETTER};
//! use pdf_paginate::Pt;
//!
//! assert_eq!(LETTER, (Pt(612.0), Pt(792.0)));
//! assert!(A4.1 > A4.0);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
