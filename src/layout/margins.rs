use crate::units::Pt;

/// Margins used by the [`PaginatedTextWriter`](crate::layout::PaginatedTextWriter).
///
/// `left` and `right` bound the text column. `top` is where the cursor is reset to
/// after a page break, and `bottom` is the break threshold: a line is only placed
/// if it ends at or above `page_height - bottom`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl<T, R, B, L>(top: T, right: R, bottom: B, left: L) -> Margins
    where
        T: Into<Pt>,
        R: Into<Pt>,
        B: Into<Pt>,
        L: Into<Pt>,
    {
        Margins {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<V: Into<Pt>, H: Into<Pt>>(vertical: V, horizontal: H) -> Margins {
        let vertical: Pt = vertical.into();
        let horizontal: Pt = horizontal.into();
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Width left for text on a page of the given width
    pub fn column_width(&self, page_width: Pt) -> Pt {
        page_width - self.left - self.right
    }
}
