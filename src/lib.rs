//! Lay out legal-document templates onto pages and export them as PDF.
//!
//! A document is an ordered list of sections (an optional heading and a body). The
//! [`layout::PaginatedTextWriter`] wraps each body to the text column, tracks a
//! vertical cursor and starts a new page whenever the next line would pass the
//! bottom threshold. [`template`] turns `{field}` templates and collected answers into
//! those sections, and [`Document`] writes the finished pages out as a PDF.

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Measuring, wrapping and paginating text
pub mod layout;

pub mod pagesize;

pub(crate) mod refs;

pub mod template;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
