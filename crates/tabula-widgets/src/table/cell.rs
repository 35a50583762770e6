#![forbid(unsafe_code)]

//! The laid-out cell grid.

use std::sync::Arc;

use tabula_style::TextStyle;
use tabula_text::{TextAlign, VerticalAlign};

use crate::Widget;
use crate::borders::Borders;

/// Border declarations on the four edges of a grid slot.
///
/// `Some(true)` draws a line, `Some(false)` draws a space where a
/// neighbouring cell has no line either, and `None` draws nothing at all,
/// which is how the inside of a spanning cell stays open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Edges {
    pub left: Option<bool>,
    pub top: Option<bool>,
    pub right: Option<bool>,
    pub bottom: Option<bool>,
}

impl Edges {
    pub const NONE: Self = Self {
        left: Some(false),
        top: Some(false),
        right: Some(false),
        bottom: Some(false),
    };

    pub fn from_borders(borders: Borders) -> Self {
        Self {
            left: Some(borders.left()),
            top: Some(borders.top()),
            right: Some(borders.right()),
            bottom: Some(borders.bottom()),
        }
    }
}

/// A cell that owns content; it is stored once, at the top-left slot of
/// its span.
#[derive(Debug, Clone)]
pub(crate) struct ContentCell {
    pub widget: Arc<dyn Widget>,
    pub row_span: usize,
    pub column_span: usize,
    pub edges: Edges,
    pub style: Option<TextStyle>,
    pub align: TextAlign,
    pub valign: VerticalAlign,
}

#[derive(Debug, Clone)]
pub(crate) enum Cell {
    /// Nothing here. Fills ragged rows and the holes between spans.
    Empty,
    Content(ContentCell),
    /// A slot covered by the spanning cell stored at `origin` (row, column).
    SpanRef { origin: (usize, usize), edges: Edges },
}

impl Cell {
    #[inline]
    pub fn edges(&self) -> Edges {
        match self {
            Self::Empty => Edges::NONE,
            Self::Content(cell) => cell.edges,
            Self::SpanRef { edges, .. } => *edges,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Edge lookups that treat a missing cell like one with no border.
pub(crate) trait CellEdges {
    fn l(self) -> bool;
    fn t(self) -> bool;
    fn r(self) -> bool;
    fn b(self) -> bool;
}

impl CellEdges for Option<&Cell> {
    fn l(self) -> bool {
        self.and_then(|c| c.edges().left) == Some(true)
    }

    fn t(self) -> bool {
        self.and_then(|c| c.edges().top) == Some(true)
    }

    fn r(self) -> bool {
        self.and_then(|c| c.edges().right) == Some(true)
    }

    fn b(self) -> bool {
        self.and_then(|c| c.edges().bottom) == Some(true)
    }
}

impl CellEdges for Option<Borders> {
    fn l(self) -> bool {
        self.is_some_and(Borders::left)
    }

    fn t(self) -> bool {
        self.is_some_and(Borders::top)
    }

    fn r(self) -> bool {
        self.is_some_and(Borders::right)
    }

    fn b(self) -> bool {
        self.is_some_and(Borders::bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_declare_blank_edges() {
        let edges = Cell::Empty.edges();
        assert_eq!(edges.left, Some(false));
        assert_eq!(edges.bottom, Some(false));
        assert!(Cell::Empty.is_empty());
    }

    #[test]
    fn missing_cells_have_no_borders() {
        let missing: Option<&Cell> = None;
        assert!(!missing.l() && !missing.t() && !missing.r() && !missing.b());
    }

    #[test]
    fn span_refs_report_their_own_edges() {
        let cell = Cell::SpanRef {
            origin: (0, 0),
            edges: Edges {
                left: None,
                top: None,
                right: Some(true),
                bottom: None,
            },
        };
        assert!(Some(&cell).r());
        assert!(!Some(&cell).l());
        assert!(!cell.is_empty());
    }

    #[test]
    fn table_border_lookups() {
        let borders = Some(Borders::LEFT_TOP);
        assert!(borders.l() && borders.t());
        assert!(!borders.r() && !borders.b());
        assert!(!None::<Borders>.l());
    }
}
