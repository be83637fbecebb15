//! Paginated text layout.
//!
//! The [`PaginatedTextWriter`](crate::layout::PaginatedTextWriter) owns a vertical
//! cursor and a growing list of [`Page`](crate::layout::Page)s. Titles, sections and
//! raw lines are written top to bottom; bodies are word wrapped with
//! [`wrap_text`](crate::layout::wrap_text) and a new page is started whenever the next
//! line would run past the bottom threshold.
//!
//! Text is measured through the [`TextMeasure`](crate::layout::TextMeasure) trait, so
//! layout can be done against real font metrics ([`FontFamily`](crate::FontFamily)) or
//! in plain character units ([`FixedAdvance`](crate::layout::FixedAdvance)).
//!
//! # Example
//!
//! ```
//! use pdf_paginate::layout::{PaginatedTextWriter, Section, WriterConfig};
//! use pdf_paginate::{FontFamily, Pt};
//!
//! let sections = vec![
//!     Section::new("1. Premises", "The landlord leases the premises to the tenant."),
//!     Section::untitled("Signed on the date written below."),
//! ];
//!
//! let mut writer = PaginatedTextWriter::new(WriterConfig::legal_a4(), FontFamily::Helvetica)
//!     .expect("valid configuration");
//! writer.write_title("RESIDENTIAL LEASE AGREEMENT", Pt(16.0), true, true);
//! writer.write_sections(&sections);
//!
//! let pages = writer.into_pages();
//! assert_eq!(pages.len(), 1);
//! ```

mod margins;
mod measure;
mod wrap;
mod writer;

pub use margins::*;
pub use measure::*;
pub use wrap::*;
pub use writer::*;
