use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum DocError {
    #[error("invalid writer configuration: {0}")]
    /// The [`WriterConfig`](crate::layout::WriterConfig) cannot lay out a page safely
    InvalidConfig(#[from] ConfigError),

    #[error("template error at byte {offset}: {reason}")]
    /// A section template has malformed placeholder syntax
    Template { offset: usize, reason: String },

    #[error("the document has no pages to write")]
    /// [`Document::write`](crate::Document::write) was called without any pages
    NoPages,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),
}

/// Reasons a writer configuration is rejected at construction time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not a finite number")]
    NotFinite { name: &'static str },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: Pt },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: Pt },

    #[error("bottom threshold {threshold} must be less than the page height {page_height}")]
    ThresholdExceedsPage { threshold: Pt, page_height: Pt },

    #[error("margins leave no room for text: column width is {0}")]
    NoColumn(Pt),

    #[error("a {line_height} line starting at {start} would pass the page limit {limit}")]
    LineDoesNotFit {
        start: Pt,
        line_height: Pt,
        limit: Pt,
    },

    #[error("first line position {first_line_y} is above the top margin {top}")]
    AboveTopMargin { first_line_y: Pt, top: Pt },

    #[error("title position {title_y} is outside the writable band {top}..={limit}")]
    TitleOutsideBand { title_y: Pt, top: Pt, limit: Pt },
}
