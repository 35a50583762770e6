#![forbid(unsafe_code)]

//! Bordered tables with row and column spans.
//!
//! A [`TableBuilder`] collects sections, rows and cells along with style
//! settings at every level. [`TableBuilder::build`] resolves the style
//! cascade, places cells into a grid and returns an immutable [`Table`].
//!
//! # Example
//! ```
//! use tabula_widgets::{RenderContext, TableBuilder, Widget};
//!
//! let table = TableBuilder::new()
//!     .row(["1", "2"])
//!     .row(["3", "4"])
//!     .build()
//!     .expect("no overlapping spans");
//! let lines = table.render(&RenderContext::default(), 79);
//! assert_eq!(
//!     lines.to_plain_text(),
//!     "┌───┬───┐\n│ 1 │ 2 │\n├───┼───┤\n│ 3 │ 4 │\n└───┴───┘"
//! );
//! ```

mod builder;
mod cell;
mod csv;
mod render;
mod widths;

use std::sync::Arc;

use tabula_core::WidthRange;
use tabula_style::TextStyle;
use tabula_text::Lines;

use crate::borders::{BorderType, Borders};
use crate::caption::render_with_captions;
use crate::empty::EmptyWidget;
use crate::{RenderContext, Widget};

pub(crate) use builder::cascade;
pub use builder::{
    CellBuilder, CellContent, CellStyle, CellStyleBuilder, ColumnBuilder, RowBuilder,
    SectionBuilder, TableBuilder, grid,
};
pub use csv::{CsvOptions, CsvQuoting};

use cell::{Cell, CellEdges, ContentCell, Edges};

/// How a column's width is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColumnWidth {
    /// As wide as the widest cell, shrunk only when the table does not fit.
    #[default]
    Auto,
    /// Exactly this many cells wide, unless the table does not fit.
    Fixed(usize),
    /// Share the space left over by other columns, in proportion to the weight.
    Expand(f32),
}

impl ColumnWidth {
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn fixed(width: usize) -> Self {
        assert!(width > 0, "width must be greater than zero");
        Self::Fixed(width)
    }

    /// # Panics
    ///
    /// Panics if `weight` is not a positive number.
    pub fn expand(weight: f32) -> Self {
        assert!(weight > 0.0, "weight must be greater than zero");
        Self::Expand(weight)
    }
}

/// The cell grid and the settings needed to draw it.
#[derive(Debug)]
pub(crate) struct TableGrid {
    /// Rows of header, body and footer in order. Rows may be ragged.
    pub rows: Vec<Vec<Cell>>,
    pub border_type: BorderType,
    pub border_style: TextStyle,
    pub header_rows: usize,
    pub footer_rows: usize,
    pub column_widths: Vec<ColumnWidth>,
    pub table_borders: Option<Borders>,
    /// Whether a border line runs above row `y`; the last entry is the bottom edge.
    pub row_borders: Vec<bool>,
    /// Whether a border line runs left of column `x`; the last entry is the right edge.
    pub column_borders: Vec<bool>,
}

impl TableGrid {
    pub fn new(
        rows: Vec<Vec<Cell>>,
        border_type: BorderType,
        border_style: TextStyle,
        header_rows: usize,
        footer_rows: usize,
        column_widths: Vec<ColumnWidth>,
        table_borders: Option<Borders>,
    ) -> Self {
        let mut grid = Self {
            rows,
            border_type,
            border_style,
            header_rows,
            footer_rows,
            column_widths,
            table_borders,
            row_borders: Vec::new(),
            column_borders: Vec::new(),
        };
        grid.row_borders = (0..=grid.rows.len()).map(|y| grid.has_row_border(y)).collect();
        grid.column_borders = (0..=grid.column_count())
            .map(|x| grid.has_column_border(x))
            .collect();
        grid
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The cell at column `x`, row `y`. Negative or out of range lookups are `None`.
    pub fn cell_at(&self, x: isize, y: isize) -> Option<&Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.get(x)
    }

    /// The content cell at `(row, column)`.
    pub fn content_at(&self, (row, column): (usize, usize)) -> Option<&ContentCell> {
        match self.rows.get(row)?.get(column)? {
            Cell::Content(cell) => Some(cell),
            Cell::Empty | Cell::SpanRef { .. } => None,
        }
    }

    pub fn border_width(&self) -> usize {
        self.column_borders.iter().filter(|&&b| b).count()
    }

    fn has_row_border(&self, y: usize) -> bool {
        match self.table_borders {
            Some(b) if y == 0 => return b.top(),
            Some(b) if y == self.row_count() => return b.bottom(),
            _ => {}
        }
        let y = y as isize;
        (0..self.column_count() as isize)
            .any(|x| self.cell_at(x, y).t() || self.cell_at(x, y - 1).b())
    }

    fn has_column_border(&self, x: usize) -> bool {
        match self.table_borders {
            Some(b) if x == 0 => return b.left(),
            Some(b) if x == self.column_count() => return b.right(),
            _ => {}
        }
        let x = x as isize;
        (0..self.row_count() as isize)
            .any(|y| self.cell_at(x, y).l() || self.cell_at(x - 1, y).r())
    }

    fn has_expanding_column(&self) -> bool {
        self.column_widths
            .iter()
            .any(|w| matches!(w, ColumnWidth::Expand(_)))
    }
}

impl Widget for TableGrid {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        if self.has_expanding_column() {
            return WidthRange::exact(width);
        }
        let border_width = self.border_width();
        let remaining = width.saturating_sub(border_width);
        (0..self.column_count())
            .map(|x| self.measure_column(cx, x, remaining))
            .sum::<WidthRange>()
            + border_width
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        let widths = self.allocate_widths(cx, width);
        render::TableRenderer::new(self, cx, widths).render()
    }
}

/// A laid-out table, optionally with captions above and below it.
///
/// Built with [`TableBuilder`] or [`grid`].
#[derive(Debug, Clone)]
pub struct Table {
    grid: Arc<TableGrid>,
    caption_top: Option<Arc<dyn Widget>>,
    caption_bottom: Option<Arc<dyn Widget>>,
}

impl Table {
    pub(crate) fn new(
        grid: TableGrid,
        caption_top: Option<Arc<dyn Widget>>,
        caption_bottom: Option<Arc<dyn Widget>>,
    ) -> Self {
        Self {
            grid: Arc::new(grid),
            caption_top,
            caption_bottom,
        }
    }

    /// Number of columns, including columns that only ragged rows reach.
    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    /// Number of rows across header, body and footer.
    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }
}

impl Widget for Table {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        self.grid.measure(cx, width)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Table",
            width,
            rows = self.grid.row_count(),
            columns = self.grid.column_count()
        )
        .entered();

        if self.caption_top.is_none() && self.caption_bottom.is_none() {
            return self.grid.render(cx, width);
        }
        let empty: Arc<dyn Widget> = Arc::new(EmptyWidget);
        render_with_captions(
            cx,
            width,
            &*self.grid,
            &**self.caption_top.as_ref().unwrap_or(&empty),
            &**self.caption_bottom.as_ref().unwrap_or(&empty),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{plain, rows};
    use crate::text::Text;
    use tabula_core::Sides;

    #[test]
    fn column_width_constructors() {
        assert_eq!(ColumnWidth::fixed(3), ColumnWidth::Fixed(3));
        assert_eq!(ColumnWidth::expand(2.0), ColumnWidth::Expand(2.0));
        assert_eq!(ColumnWidth::default(), ColumnWidth::Auto);
    }

    #[test]
    #[should_panic(expected = "width must be greater than zero")]
    fn zero_fixed_width_panics() {
        let _ = ColumnWidth::fixed(0);
    }

    #[test]
    #[should_panic(expected = "weight must be greater than zero")]
    fn zero_weight_panics() {
        let _ = ColumnWidth::expand(0.0);
    }

    #[test]
    fn single_cell() {
        let table = TableBuilder::new().row(["×"]).build().unwrap();
        assert_eq!(rows(&table, 79), vec!["┌───┐", "│ × │", "└───┘"]);
    }

    #[test]
    fn measure_sums_columns_and_borders() {
        let table = TableBuilder::new().row(["1", "22"]).build().unwrap();
        let cx = RenderContext::default();
        assert_eq!(table.measure(&cx, 79), WidthRange::exact(10));
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn expanding_tables_measure_full_width() {
        let table = TableBuilder::new()
            .column(0, ColumnBuilder::new().width(ColumnWidth::expand(1.0)))
            .row(["1"])
            .build()
            .unwrap();
        let cx = RenderContext::default();
        assert_eq!(table.measure(&cx, 12), WidthRange::exact(12));
        assert_eq!(plain(&table, 7), "┌─────┐\n│ 1   │\n└─────┘");
    }

    #[test]
    fn empty_table_is_one_blank_cell() {
        let table = TableBuilder::new().build().unwrap();
        assert_eq!(rows(&table, 10), vec!["┌┐", "││", "└┘"]);
    }

    #[test]
    fn multiline_widget_cells() {
        let table = TableBuilder::new()
            .padding(Sides::ZERO)
            .row(RowBuilder::new().cell(CellBuilder::widget(Text::new("a\nbb"))))
            .build()
            .unwrap();
        assert_eq!(rows(&table, 10), vec!["┌──┐", "│a │", "│bb│", "└──┘"]);
    }

    #[test]
    fn zero_width_keeps_only_borders() {
        let table = TableBuilder::new().row(["a", "b"]).build().unwrap();
        assert_eq!(rows(&table, 0), vec!["┌┬┐", "│││", "└┴┘"]);
    }
}
