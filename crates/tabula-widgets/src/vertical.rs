#![forbid(unsafe_code)]

//! Widgets stacked top to bottom.

use std::sync::Arc;

use tabula_core::{Sides, WidthRange};
use tabula_style::TextStyle;
use tabula_text::{Line, Lines, OverflowWrap, Span, TextAlign, Whitespace};

use crate::padded::Padded;
use crate::table::{CellBuilder, CellContent, CellStyle, CellStyleBuilder, ColumnWidth, cascade};
use crate::text::Text;
use crate::{RenderContext, Widget, max_width_range};

#[derive(Debug, Clone)]
struct VerticalCell {
    widget: Arc<dyn Widget>,
    style: Option<TextStyle>,
    align: TextAlign,
}

/// A single column of cells with optional blank lines between them.
///
/// Cells are rendered at the full width given, unless any cell is aligned,
/// in which case all of them are rendered at the widest cell's width so they
/// align against each other.
#[derive(Debug, Clone)]
pub struct VerticalLayout {
    cells: Vec<VerticalCell>,
    widgets: Vec<Arc<dyn Widget>>,
    spacing: usize,
    column_width: ColumnWidth,
    align: TextAlign,
    has_aligned_cells: bool,
}

impl VerticalLayout {
    pub fn builder() -> VerticalLayoutBuilder {
        VerticalLayoutBuilder::new()
    }
}

impl Widget for VerticalLayout {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        max_width_range(&self.widgets, cx, width, 0)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "VerticalLayout",
            width,
            cells = self.cells.len()
        )
        .entered();

        let render_width = match self.column_width {
            ColumnWidth::Expand(_) => width,
            _ if self.has_aligned_cells => self.measure(cx, width).max,
            _ => width,
        };
        let spacing_line = if self.align == TextAlign::None || render_width == 0 {
            Line::default()
        } else {
            Line::new(vec![Span::space(render_width, TextStyle::default())])
        };

        let mut lines = Vec::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                lines.extend(std::iter::repeat_n(spacing_line.clone(), self.spacing));
            }
            let rendered = cell.widget.render(cx, render_width).with_style(cell.style.as_ref());
            let rendered = match self.column_width {
                ColumnWidth::Expand(_) => rendered.set_width(width, cell.align),
                ColumnWidth::Fixed(w) => rendered.set_width(w, cell.align),
                ColumnWidth::Auto => rendered,
            };
            // An empty cell still takes a line.
            if rendered.is_empty() {
                lines.push(Line::default());
            } else {
                lines.extend(rendered.into_lines());
            }
        }
        Lines::from(lines)
    }
}

/// Builder for [`VerticalLayout`].
///
/// Settings made through [`CellStyleBuilder`] apply to every cell that does
/// not set its own. Borders have no effect.
#[derive(Debug, Clone, Default)]
pub struct VerticalLayoutBuilder {
    cells: Vec<CellBuilder>,
    spacing: usize,
    column_width: ColumnWidth,
    style: CellStyle,
}

impl CellStyleBuilder for VerticalLayoutBuilder {
    fn cell_style_mut(&mut self) -> &mut CellStyle {
        &mut self.style
    }
}

impl VerticalLayoutBuilder {
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

    /// Blank lines between cells.
    #[must_use]
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// `Fixed` sets every cell to that width, `Expand` to the full render
    /// width. `Auto` leaves cells at their natural width.
    #[must_use]
    pub fn column_width(mut self, width: ColumnWidth) -> Self {
        self.column_width = width;
        self
    }

    pub fn build(self) -> VerticalLayout {
        let layout = self.style;
        let cells: Vec<VerticalCell> = self
            .cells
            .into_iter()
            .map(|cell| {
                let levels = [Some(&cell.style), Some(&layout)];
                let align = cascade(&levels, |s| s.align).unwrap_or(TextAlign::None);
                let padding = cascade(&levels, |s| s.padding).unwrap_or(Sides::ZERO);
                let widget: Arc<dyn Widget> = match cell.content {
                    CellContent::Widget(widget) => widget,
                    CellContent::Text(text) => Arc::new(
                        Text::new(&text)
                            .whitespace(cascade(&levels, |s| s.whitespace).unwrap_or(Whitespace::PRE))
                            .align(align)
                            .overflow(cascade(&levels, |s| s.overflow).unwrap_or(OverflowWrap::Ellipses)),
                    ),
                };
                let widget: Arc<dyn Widget> = if padding.is_empty() {
                    widget
                } else {
                    Arc::new(Padded::shared(widget, padding))
                };
                VerticalCell {
                    widget,
                    style: cascade(&levels, |s| s.style.clone()),
                    align,
                }
            })
            .collect();

        VerticalLayout {
            widgets: cells.iter().map(|c| Arc::clone(&c.widget)).collect(),
            has_aligned_cells: cells.iter().any(|c| c.align != TextAlign::None),
            cells,
            spacing: self.spacing,
            column_width: self.column_width,
            align: layout.align.unwrap_or(TextAlign::None),
        }
    }
}
