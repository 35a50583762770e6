#![forbid(unsafe_code)]

//! Fixed-size windows onto another widget.

use std::sync::Arc;

use tabula_core::WidthRange;
use tabula_style::TextStyle;
use tabula_text::{Line, Lines, Span, TextAlign, VerticalAlign, str_width};
use unicode_segmentation::UnicodeSegmentation;

use crate::{RenderContext, Widget};

/// Crop or pad a widget to a fixed size and scroll the visible part.
///
/// Positive `scroll_right` hides cells on the left of the content, negative
/// values shift the content right. `scroll_down` does the same with lines.
/// Space not covered by content is filled with blanks.
///
/// ```text
/// content   scroll (1, 1), size 2x2
/// 123
/// 456       56
/// 7890      89
/// ```
#[derive(Debug, Clone)]
pub struct Viewport {
    content: Arc<dyn Widget>,
    width: Option<usize>,
    height: Option<usize>,
    scroll_right: isize,
    scroll_down: isize,
}

impl Viewport {
    pub fn new(content: impl Widget + 'static) -> Self {
        Self::shared(Arc::new(content))
    }

    pub fn shared(content: Arc<dyn Widget>) -> Self {
        Self {
            content,
            width: None,
            height: None,
            scroll_right: 0,
            scroll_down: 0,
        }
    }

    /// Visible width; defaults to the content's widest line.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Visible height; defaults to the content's height.
    #[must_use]
    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn scroll_right(mut self, cells: isize) -> Self {
        self.scroll_right = cells;
        self
    }

    #[must_use]
    pub fn scroll_down(mut self, lines: isize) -> Self {
        self.scroll_down = lines;
        self
    }
}

impl Widget for Viewport {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        match self.width {
            Some(w) => WidthRange::exact(w),
            None => self.content.measure(cx, width),
        }
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        let lines = self.content.render(cx, width);
        let target_width = self.width.unwrap_or_else(|| lines.width());
        let target_height = self.height.unwrap_or_else(|| lines.height());

        let down = self.scroll_down.unsigned_abs();
        let mut rows: Vec<Line> = if self.scroll_down >= 0 {
            lines.into_iter().skip(down).collect()
        } else {
            std::iter::repeat_n(Line::default(), down).chain(lines).collect()
        };

        let right = self.scroll_right.unsigned_abs();
        if right > 0 {
            rows = rows
                .into_iter()
                .map(|line| {
                    if self.scroll_right > 0 {
                        drop_leading_cells(line, right)
                    } else {
                        indent(line, right)
                    }
                })
                .collect();
        }

        Lines::from(rows).set_size(Some(target_width), target_height, VerticalAlign::Top, TextAlign::None)
    }
}

/// Crop or pad a widget to a fixed size without scrolling.
///
/// Unlike [`Viewport`], an unset width leaves every line at its own width.
#[derive(Debug, Clone)]
pub struct Crop {
    content: Arc<dyn Widget>,
    width: Option<usize>,
    height: Option<usize>,
}

impl Crop {
    pub fn new(content: impl Widget + 'static) -> Self {
        Self {
            content: Arc::new(content),
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }
}

impl Widget for Crop {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        match self.width {
            Some(w) => WidthRange::exact(w),
            None => self.content.measure(cx, width),
        }
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        let lines = self.content.render(cx, width);
        let height = self.height.unwrap_or_else(|| lines.height());
        lines.set_size(self.width, height, VerticalAlign::Top, TextAlign::None)
    }
}

/// Remove `cells` columns from the start of `line`. A wide cluster cut in half
/// leaves blanks for its visible part.
fn drop_leading_cells(line: Line, mut cells: usize) -> Line {
    let end_style = line.end_style().clone();
    let mut spans = Vec::with_capacity(line.len() + 1);
    for span in line.into_spans() {
        if cells == 0 {
            spans.push(span);
            continue;
        }
        let w = span.width();
        if w <= cells {
            cells -= w;
            continue;
        }
        let (head, tail) = span.split_at_cell(cells);
        let overlap = cells - head.map_or(0, |h| h.width());
        cells = 0;
        let Some(tail) = tail else { continue };
        if overlap == 0 {
            spans.push(tail);
            continue;
        }
        let text = tail.text();
        let first = text.graphemes(true).next().unwrap_or_default();
        let visible = str_width(first).saturating_sub(overlap);
        if visible > 0 {
            spans.push(Span::space(visible, tail.style().clone()));
        }
        let rest = &text[first.len()..];
        if !rest.is_empty() {
            spans.push(Span::word(rest, tail.style().clone()));
        }
    }
    Line::with_end_style(spans, end_style)
}

fn indent(line: Line, cells: usize) -> Line {
    let end_style = line.end_style().clone();
    let mut spans = Vec::with_capacity(line.len() + 1);
    spans.push(Span::space(cells, TextStyle::default()));
    spans.extend(line.into_spans());
    Line::with_end_style(spans, end_style)
}
