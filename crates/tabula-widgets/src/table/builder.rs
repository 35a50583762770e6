#![forbid(unsafe_code)]

//! Table construction.
//!
//! Style settings can be given on the table, a section, a column (of the
//! table or of one section), a row or a single cell. Each cell takes every
//! setting from the most specific level that sets it:
//! cell, row, section column, table column, section, table.

use std::collections::BTreeMap;
use std::sync::Arc;

use tabula_core::{Error, Result, Sides};
use tabula_style::{TextStyle, fold_styles};
use tabula_text::{OverflowWrap, TextAlign, VerticalAlign, Whitespace};

use super::{Cell, ColumnWidth, ContentCell, Edges, Table, TableGrid};
use crate::Widget;
use crate::borders::{BorderType, Borders};
use crate::caption::caption_text;
use crate::empty::EmptyWidget;
use crate::padded::Padded;
use crate::text::Text;

// ============================================================================
// Cell styles
// ============================================================================

/// Optional layout and style settings for table cells. Unset fields fall
/// through to the next, less specific level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub padding: Option<Sides>,
    /// Overlay applied to the rendered content.
    pub style: Option<TextStyle>,
    pub borders: Option<Borders>,
    /// Only affects text cells.
    pub whitespace: Option<Whitespace>,
    pub align: Option<TextAlign>,
    pub valign: Option<VerticalAlign>,
    /// Only affects text cells.
    pub overflow: Option<OverflowWrap>,
}

/// Builder methods shared by every level of the style cascade.
pub trait CellStyleBuilder: Sized {
    fn cell_style_mut(&mut self) -> &mut CellStyle;

    /// Space between the cell content and its borders.
    #[must_use]
    fn padding(mut self, padding: Sides) -> Self {
        self.cell_style_mut().padding = Some(padding);
        self
    }

    #[must_use]
    fn style(mut self, style: TextStyle) -> Self {
        self.cell_style_mut().style = Some(style);
        self
    }

    /// Which edges of each cell draw a border.
    #[must_use]
    fn borders(mut self, borders: Borders) -> Self {
        self.cell_style_mut().borders = Some(borders);
        self
    }

    #[must_use]
    fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.cell_style_mut().whitespace = Some(whitespace);
        self
    }

    #[must_use]
    fn align(mut self, align: TextAlign) -> Self {
        self.cell_style_mut().align = Some(align);
        self
    }

    #[must_use]
    fn valign(mut self, valign: VerticalAlign) -> Self {
        self.cell_style_mut().valign = Some(valign);
        self
    }

    #[must_use]
    fn overflow(mut self, overflow: OverflowWrap) -> Self {
        self.cell_style_mut().overflow = Some(overflow);
        self
    }
}

impl CellStyleBuilder for CellStyle {
    fn cell_style_mut(&mut self) -> &mut CellStyle {
        self
    }
}

macro_rules! impl_cell_style_builder {
    ($($ty:ty),*) => {
        $(impl CellStyleBuilder for $ty {
            fn cell_style_mut(&mut self) -> &mut CellStyle {
                &mut self.style
            }
        })*
    };
}

impl_cell_style_builder!(CellBuilder, RowBuilder, SectionBuilder, ColumnBuilder, TableBuilder);

/// First value set along `levels`, most specific first.
pub(crate) fn cascade<T>(levels: &[Option<&CellStyle>], get: impl Fn(&CellStyle) -> Option<T>) -> Option<T> {
    levels.iter().flatten().find_map(|s| get(s))
}

// ============================================================================
// Cells, rows and sections
// ============================================================================

/// What a cell shows.
#[derive(Debug, Clone)]
pub enum CellContent {
    /// Text laid out with the cell's whitespace, alignment and overflow.
    Text(String),
    /// A widget rendered as is.
    Widget(Arc<dyn Widget>),
}

#[derive(Debug, Clone)]
pub struct CellBuilder {
    pub(crate) content: CellContent,
    row_span: usize,
    column_span: usize,
    pub(crate) style: CellStyle,
}

impl CellBuilder {
    fn with_content(content: CellContent) -> Self {
        Self {
            content,
            row_span: 1,
            column_span: 1,
            style: CellStyle::default(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(CellContent::Text(text.into()))
    }

    pub fn widget(widget: impl Widget + 'static) -> Self {
        Self::shared(Arc::new(widget))
    }

    pub fn shared(widget: Arc<dyn Widget>) -> Self {
        Self::with_content(CellContent::Widget(widget))
    }

    /// Number of rows this cell covers. Spans past the end of the section
    /// are cut short.
    ///
    /// # Panics
    ///
    /// Panics if `span` is zero.
    #[must_use]
    pub fn row_span(mut self, span: usize) -> Self {
        assert!(span > 0, "Row span must be greater than 0");
        self.row_span = span;
        self
    }

    /// Number of columns this cell covers. Spans that would widen the table
    /// are cut short.
    ///
    /// # Panics
    ///
    /// Panics if `span` is zero.
    #[must_use]
    pub fn column_span(mut self, span: usize) -> Self {
        assert!(span > 0, "Column span must be greater than 0");
        self.column_span = span;
        self
    }
}

impl From<&str> for CellBuilder {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for CellBuilder {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<Text> for CellBuilder {
    fn from(text: Text) -> Self {
        Self::widget(text)
    }
}

impl From<Arc<dyn Widget>> for CellBuilder {
    fn from(widget: Arc<dyn Widget>) -> Self {
        Self::shared(widget)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RowBuilder {
    cells: Vec<CellBuilder>,
    style: CellStyle,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cell(mut self, cell: impl Into<CellBuilder>) -> Self {
        self.cells.push(cell.into());
        self
    }

    #[must_use]
    pub fn cells<C: Into<CellBuilder>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.cells.extend(cells.into_iter().map(Into::into));
        self
    }
}

impl<C: Into<CellBuilder>, const N: usize> From<[C; N]> for RowBuilder {
    fn from(cells: [C; N]) -> Self {
        Self::new().cells(cells)
    }
}

impl<C: Into<CellBuilder>> From<Vec<C>> for RowBuilder {
    fn from(cells: Vec<C>) -> Self {
        Self::new().cells(cells)
    }
}

/// A header, body or footer.
#[derive(Debug, Clone, Default)]
pub struct SectionBuilder {
    rows: Vec<RowBuilder>,
    columns: BTreeMap<usize, CellStyle>,
    row_styles: Vec<TextStyle>,
    style: CellStyle,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn row(mut self, row: impl Into<RowBuilder>) -> Self {
        self.rows.push(row.into());
        self
    }

    #[must_use]
    pub fn rows<R: Into<RowBuilder>>(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.rows.extend(rows.into_iter().map(Into::into));
        self
    }

    /// Settings for the cells of column `i` in this section only.
    #[must_use]
    pub fn column(mut self, i: usize, style: CellStyle) -> Self {
        self.columns.insert(i, style);
        self
    }

    /// Styles applied to rows in rotation, for striped tables.
    #[must_use]
    pub fn row_styles(mut self, styles: impl IntoIterator<Item = TextStyle>) -> Self {
        self.row_styles = styles.into_iter().collect();
        self
    }
}

/// Width policy and cell settings for one column of the whole table.
#[derive(Debug, Clone, Default)]
pub struct ColumnBuilder {
    width: ColumnWidth,
    style: CellStyle,
}

impl ColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }
}

// ============================================================================
// Table
// ============================================================================

#[derive(Debug, Clone)]
pub struct TableBuilder {
    border_type: BorderType,
    border_style: TextStyle,
    table_borders: Option<Borders>,
    columns: BTreeMap<usize, ColumnBuilder>,
    header: SectionBuilder,
    body: SectionBuilder,
    footer: SectionBuilder,
    caption_top: Option<Arc<dyn Widget>>,
    caption_bottom: Option<Arc<dyn Widget>>,
    style: CellStyle,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            border_type: BorderType::SQUARE,
            border_style: TextStyle::default(),
            table_borders: None,
            columns: BTreeMap::new(),
            header: SectionBuilder::new(),
            body: SectionBuilder::new(),
            footer: SectionBuilder::new(),
            caption_top: None,
            caption_bottom: None,
            style: CellStyle::default(),
        }
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Style of the border glyphs.
    #[must_use]
    pub fn border_style(mut self, style: TextStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Whether the table's outside edges are drawn. When off, cell borders
    /// on the outside are ignored.
    #[must_use]
    pub fn outer_border(mut self, outer: bool) -> Self {
        self.table_borders = if outer { None } else { Some(Borders::NONE) };
        self
    }

    /// Force the outside edges of the table on or off, regardless of the
    /// borders of the cells along them.
    #[must_use]
    pub fn table_borders(mut self, borders: Borders) -> Self {
        self.table_borders = Some(borders);
        self
    }

    #[must_use]
    pub fn column(mut self, i: usize, column: ColumnBuilder) -> Self {
        self.columns.insert(i, column);
        self
    }

    #[must_use]
    pub fn header(mut self, section: SectionBuilder) -> Self {
        self.header = section;
        self
    }

    #[must_use]
    pub fn body(mut self, section: SectionBuilder) -> Self {
        self.body = section;
        self
    }

    #[must_use]
    pub fn footer(mut self, section: SectionBuilder) -> Self {
        self.footer = section;
        self
    }

    /// Append a row to the body.
    #[must_use]
    pub fn row(mut self, row: impl Into<RowBuilder>) -> Self {
        self.body.rows.push(row.into());
        self
    }

    #[must_use]
    pub fn caption_top(mut self, caption: impl Widget + 'static) -> Self {
        self.caption_top = Some(Arc::new(caption));
        self
    }

    #[must_use]
    pub fn caption_bottom(mut self, caption: impl Widget + 'static) -> Self {
        self.caption_bottom = Some(Arc::new(caption));
        self
    }

    #[must_use]
    pub fn caption_top_text(self, text: &str, align: TextAlign) -> Self {
        self.caption_top(caption_text(text, align))
    }

    #[must_use]
    pub fn caption_bottom_text(self, text: &str, align: TextAlign) -> Self {
        self.caption_bottom(caption_text(text, align))
    }

    /// Lay out the cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverlappingSpans`] when a row or column span runs
    /// into a slot another cell already occupies.
    pub fn build(self) -> Result<Table> {
        let builder_width = [&self.header, &self.body, &self.footer]
            .iter()
            .flat_map(|s| &s.rows)
            .map(|r| r.cells.len())
            .max()
            .unwrap_or(0);

        let header = self.build_section(&self.header, builder_width, 0)?;
        let body = self.build_section(&self.body, builder_width, header.len())?;
        let footer = self.build_section(&self.footer, builder_width, header.len() + body.len())?;
        let (header_rows, footer_rows) = (header.len(), footer.len());

        let mut rows: Vec<Vec<Cell>> = header.into_iter().chain(body).chain(footer).collect();
        if rows.is_empty() {
            let borders = self.table_borders.unwrap_or(Borders::ALL);
            rows.push(vec![Cell::Content(ContentCell {
                widget: Arc::new(EmptyWidget),
                row_span: 1,
                column_span: 1,
                edges: Edges::from_borders(borders),
                style: None,
                align: TextAlign::Left,
                valign: VerticalAlign::Top,
            })]);
        }

        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        let column_widths = (0..column_count)
            .map(|i| self.columns.get(&i).map_or(ColumnWidth::Auto, |c| c.width))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = rows.len(), columns = column_count, header_rows, footer_rows, "table built");

        let grid = TableGrid::new(
            rows,
            self.border_type,
            self.border_style,
            header_rows,
            footer_rows,
            column_widths,
            self.table_borders,
        );
        Ok(Table::new(grid, self.caption_top, self.caption_bottom))
    }

    /// Place a section's cells. `first_row` is the section's offset in the
    /// whole table, used for span origins.
    fn build_section(
        &self,
        section: &SectionBuilder,
        builder_width: usize,
        first_row: usize,
    ) -> Result<Vec<Vec<Cell>>> {
        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); section.rows.len()];
        for (y, row) in section.rows.iter().enumerate() {
            let mut x = 0;
            for cell in &row.cells {
                x = find_empty_column(&mut rows[y], x);
                let placement = Placement {
                    x,
                    y,
                    first_row,
                    builder_width,
                };
                self.insert_cell(cell, row, section, &mut rows, placement)?;
                x += 1;
            }
        }
        Ok(rows)
    }

    fn insert_cell(
        &self,
        cell: &CellBuilder,
        row: &RowBuilder,
        section: &SectionBuilder,
        rows: &mut [Vec<Cell>],
        at: Placement,
    ) -> Result<()> {
        let Placement { x, y, .. } = at;
        let table_column = self.columns.get(&x).map(|c| &c.style);
        let section_column = section.columns.get(&x);

        // Spans are cut short rather than growing the table.
        let widest_spanned_row = (y..y + cell.row_span)
            .map(|i| section.rows.get(i).map_or(0, |r| r.cells.len()))
            .max()
            .unwrap_or(0);
        let column_span = cell
            .column_span
            .min((at.builder_width + 1).saturating_sub(widest_spanned_row))
            .max(1);
        let row_span = cell.row_span.min(rows.len() - y);

        let levels = [
            Some(&cell.style),
            Some(&row.style),
            section_column,
            table_column,
            Some(&section.style),
            Some(&self.style),
        ];
        let borders = cascade(&levels, |s| s.borders).unwrap_or(Borders::ALL);
        let padding = cascade(&levels, |s| s.padding).unwrap_or(Sides::horizontal(1));
        let whitespace = cascade(&levels, |s| s.whitespace).unwrap_or(Whitespace::PRE);
        let align = cascade(&levels, |s| s.align).unwrap_or(TextAlign::None);
        let valign = cascade(&levels, |s| s.valign).unwrap_or(VerticalAlign::Top);
        let overflow = cascade(&levels, |s| s.overflow).unwrap_or(OverflowWrap::Ellipses);

        let stripe = (!section.row_styles.is_empty())
            .then(|| &section.row_styles[y % section.row_styles.len()]);
        let style = fold_styles(&[
            cell.style.style.as_ref(),
            row.style.style.as_ref(),
            stripe,
            section_column.and_then(|c| c.style.as_ref()),
            table_column.and_then(|c| c.style.as_ref()),
            section.style.style.as_ref(),
            self.style.style.as_ref(),
        ]);

        let content: Arc<dyn Widget> = match &cell.content {
            CellContent::Widget(widget) => Arc::clone(widget),
            CellContent::Text(text) => Arc::new(
                Text::new(text)
                    .whitespace(whitespace)
                    .align(align)
                    .overflow(overflow),
            ),
        };
        let content: Arc<dyn Widget> = if padding.is_empty() {
            content
        } else {
            Arc::new(Padded::shared(content, padding))
        };

        let origin = Cell::Content(ContentCell {
            widget: content,
            row_span,
            column_span,
            edges: Edges {
                left: Some(borders.left()),
                top: Some(borders.top()),
                right: (column_span == 1).then_some(borders.right()),
                bottom: (row_span == 1).then_some(borders.bottom()),
            },
            style,
            align,
            valign,
        });

        let last_x = x + column_span - 1;
        let last_y = y + row_span - 1;
        for cx in x..=last_x {
            for cy in y..=last_y {
                let placed = if cx == x && cy == y {
                    origin.clone()
                } else {
                    Cell::SpanRef {
                        origin: (at.first_row + y, x),
                        edges: Edges {
                            left: (cx == x).then_some(borders.left()),
                            top: (cy == y).then_some(borders.top()),
                            right: (cx == last_x).then_some(borders.right()),
                            bottom: (cy == last_y).then_some(borders.bottom()),
                        },
                    }
                };
                let slots = &mut rows[cy];
                if slots.len() <= cx {
                    slots.resize_with(cx + 1, || Cell::Empty);
                }
                if !slots[cx].is_empty() {
                    return Err(Error::OverlappingSpans { row: cy, column: cx });
                }
                slots[cx] = placed;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    x: usize,
    y: usize,
    first_row: usize,
    builder_width: usize,
}

/// The first free slot at or after `x`, growing the row if needed.
fn find_empty_column(row: &mut Vec<Cell>, x: usize) -> usize {
    if x >= row.len() {
        row.resize_with(x + 1, || Cell::Empty);
        return x;
    }
    if let Some(i) = (x..row.len()).find(|&i| row[i].is_empty()) {
        return i;
    }
    row.push(Cell::Empty);
    row.len() - 1
}

/// A borderless table for arranging widgets in columns.
///
/// Cells have no padding and are separated by a single blank column.
///
/// ```
/// use tabula_widgets::{ColumnBuilder, ColumnWidth, RenderContext, Widget, grid};
///
/// let layout = grid()
///     .column(0, ColumnBuilder::new().width(ColumnWidth::fixed(3)))
///     .row(["1", ".2.", "3"])
///     .row(["4", "5", "6"])
///     .build()
///     .unwrap();
/// let lines = layout.render(&RenderContext::default(), 79);
/// assert_eq!(lines.to_plain_text(), "1   .2. 3\n4   5   6");
/// ```
pub fn grid() -> TableBuilder {
    TableBuilder::new()
        .borders(Borders::LEFT_RIGHT)
        .outer_border(false)
        .border_type(BorderType::BLANK)
        .padding(Sides::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderContext;
    use crate::test_support::{ansi, rows};
    use tabula_style::Ansi16;

    fn placed(table: &Table) -> Vec<String> {
        table
            .grid
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Content(_) => 'C',
                        Cell::SpanRef { .. } => 's',
                    })
                    .collect()
            })
            .collect()
    }

    // ========================================================================
    // Placement
    // ========================================================================

    #[test]
    fn cells_flow_around_row_spans() {
        let table = TableBuilder::new()
            .row(RowBuilder::new().cell(CellBuilder::text("A").row_span(2)).cell("B"))
            .row(["C"])
            .build()
            .unwrap();
        assert_eq!(placed(&table), vec!["CC", "sC"]);
    }

    #[test]
    fn spans_are_truncated_to_the_table() {
        let table = TableBuilder::new()
            .row(RowBuilder::new().cell(CellBuilder::text("A").row_span(2).column_span(3)))
            .build()
            .unwrap();
        assert_eq!(placed(&table), vec!["C"]);

        let table = TableBuilder::new()
            .row(["A", "B", "C"])
            .row(RowBuilder::new().cell(CellBuilder::text("F").column_span(9)))
            .build()
            .unwrap();
        assert_eq!(placed(&table), vec!["CCC", "Css"]);
    }

    #[test]
    fn span_refs_point_at_their_origin() {
        let table = TableBuilder::new()
            .header(SectionBuilder::new().row(["h"]))
            .row(RowBuilder::new().cell(CellBuilder::text("A").row_span(2)))
            .row(RowBuilder::new())
            .build()
            .unwrap();
        match &table.grid.rows[2][0] {
            Cell::SpanRef { origin, edges } => {
                assert_eq!(*origin, (1, 0));
                assert_eq!(edges.top, None);
                assert_eq!(edges.bottom, Some(true));
                assert_eq!(edges.left, Some(true));
            }
            other => panic!("expected a span reference, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_spans_are_an_error() {
        let err = TableBuilder::new()
            .row(RowBuilder::new().cell("A").cell(CellBuilder::text("B").row_span(2)))
            .row(RowBuilder::new().cell(CellBuilder::text("C").column_span(2)))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::OverlappingSpans { row: 1, column: 1 });
        assert!(err.to_string().contains("cell spans cannot overlap"));
    }

    #[test]
    #[should_panic(expected = "Row span must be greater than 0")]
    fn zero_row_span_panics() {
        let _ = CellBuilder::text("x").row_span(0);
    }

    // ========================================================================
    // Style cascade
    // ========================================================================

    #[test]
    fn most_specific_setting_wins() {
        let table = TableBuilder::new()
            .column(0, ColumnBuilder::new().align(TextAlign::Right))
            .header(
                SectionBuilder::new()
                    .column(1, CellStyle::default().align(TextAlign::Center))
                    .row(["1", "2"]),
            )
            .body(
                SectionBuilder::new()
                    .column(1, CellStyle::default().align(TextAlign::Right))
                    .row(["3", "4"]),
            )
            .footer(
                SectionBuilder::new()
                    .column(0, CellStyle::default().align(TextAlign::Left))
                    .column(1, CellStyle::default().align(TextAlign::Center))
                    .row(["5", "6"])
                    .row(["...", "..."]),
            )
            .build()
            .unwrap();
        assert_eq!(
            rows(&table, 79),
            vec![
                "┌─────┬─────┐",
                "│   1 │  2  │",
                "├─────┼─────┤",
                "│   3 │   4 │",
                "├─────┼─────┤",
                "│ 5   │  6  │",
                "├─────┼─────┤",
                "│ ... │ ... │",
                "└─────┴─────┘",
            ]
        );
    }

    #[test]
    fn row_styles_stripe_rows() {
        let red = TextStyle::new().fg(Ansi16::Red);
        let blue = TextStyle::new().fg(Ansi16::Blue);
        let table = TableBuilder::new()
            .border_type(BorderType::ASCII)
            .padding(Sides::ZERO)
            .body(
                SectionBuilder::new()
                    .row_styles([red, blue])
                    .rows([["a"], ["b"], ["c"]]),
            )
            .build()
            .unwrap();
        let out = ansi(&table, &RenderContext::default(), 79);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "|\x1b[31ma\x1b[39m|");
        assert_eq!(lines[3], "|\x1b[34mb\x1b[39m|");
        assert_eq!(lines[5], "|\x1b[31mc\x1b[39m|");
    }

    #[test]
    fn cell_style_overrides_row_style() {
        let table = TableBuilder::new()
            .border_type(BorderType::ASCII)
            .padding(Sides::ZERO)
            .row(
                RowBuilder::new()
                    .style(TextStyle::new().fg(Ansi16::Red))
                    .cell(CellBuilder::text("a").style(TextStyle::new().fg(Ansi16::Green)))
                    .cell("b"),
            )
            .build()
            .unwrap();
        let out = ansi(&table, &RenderContext::default(), 79);
        assert_eq!(
            out.lines().nth(1),
            Some("|\x1b[32ma\x1b[39m|\x1b[31mb\x1b[39m|")
        );
    }

    #[test]
    fn text_cells_use_cascaded_whitespace() {
        let table = TableBuilder::new()
            .padding(Sides::ZERO)
            .whitespace(Whitespace::NORMAL)
            .column(0, ColumnBuilder::new().width(ColumnWidth::fixed(3)))
            .row(["aa bb"])
            .build()
            .unwrap();
        assert_eq!(rows(&table, 79), vec!["┌───┐", "│aa │", "│bb │", "└───┘"]);
    }

    #[test]
    fn long_words_get_ellipses_by_default() {
        let table = TableBuilder::new()
            .padding(Sides::ZERO)
            .column(0, ColumnBuilder::new().width(ColumnWidth::fixed(3)))
            .row(["abcdef"])
            .build()
            .unwrap();
        assert_eq!(rows(&table, 79), vec!["┌───┐", "│ab…│", "└───┘"]);
    }

    // ========================================================================
    // Grid
    // ========================================================================

    #[test]
    fn grid_has_no_visible_borders() {
        let layout = grid()
            .column(0, ColumnBuilder::new().width(ColumnWidth::fixed(3)))
            .row(["1", ".2.", "3"])
            .row(["4", "5", "6"])
            .build()
            .unwrap();
        assert_eq!(rows(&layout, 79), vec!["1   .2. 3", "4   5   6"]);
    }
}
