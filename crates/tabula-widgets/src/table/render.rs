#![forbid(unsafe_code)]

//! Drawing a table grid once its column widths are known.
//!
//! Output is assembled column by column. Each column first draws its whole
//! left border, so a cell spanning several rows can append all of its lines
//! at once: everything to its left is already in place.

use tabula_style::TextStyle;
use tabula_text::{Line, Lines, Span};

use super::{Cell, CellEdges, Edges, TableGrid};
use crate::RenderContext;
use crate::borders::BorderGlyphSet;

static EMPTY: Cell = Cell::Empty;

pub(crate) struct TableRenderer<'a> {
    grid: &'a TableGrid,
    widths: Vec<usize>,
    row_heights: Vec<usize>,
    /// Content of every content cell, rendered at its full cell width.
    rendered: Vec<Vec<Option<Lines>>>,
    lines: Vec<Vec<Span>>,
}

impl<'a> TableRenderer<'a> {
    pub fn new(grid: &'a TableGrid, cx: &RenderContext, widths: Vec<usize>) -> Self {
        let mut renderer = Self {
            grid,
            widths,
            row_heights: Vec::new(),
            rendered: Vec::new(),
            lines: Vec::new(),
        };

        renderer.rendered = grid
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| match cell {
                        Cell::Content(cell) => {
                            let w = renderer.cell_width(x, cell.column_span);
                            Some(if w == 0 {
                                Lines::empty()
                            } else {
                                cell.widget.render(cx, w).with_style(cell.style.as_ref())
                            })
                        }
                        Cell::Empty | Cell::SpanRef { .. } => None,
                    })
                    .collect()
            })
            .collect();

        renderer.row_heights = grid
            .rows
            .iter()
            .zip(&renderer.rendered)
            .map(|(row, rendered)| {
                row.iter()
                    .zip(rendered)
                    .filter_map(|(cell, lines)| match (cell, lines) {
                        (Cell::Content(cell), Some(lines)) => Some(lines.height() / cell.row_span),
                        _ => None,
                    })
                    .max()
                    .unwrap_or(1)
                    .max(1)
            })
            .collect();

        let height = renderer.row_heights.iter().sum::<usize>()
            + grid.row_borders.iter().filter(|&&b| b).count();
        renderer.lines = vec![Vec::new(); height];
        renderer
    }

    pub fn render(mut self) -> Lines {
        let grid = self.grid;
        for x in 0..self.widths.len() {
            self.draw_left_border(x);

            let column_width = self.widths[x];
            let mut line_y = 0;
            for y in 0..grid.row_count() {
                let cell = grid.cell_at(x as isize, y as isize).unwrap_or(&EMPTY);
                line_y += self.draw_top_border(line_y, x, y, column_width, cell.edges().top);
                self.draw_content(line_y, cell, x, y);
                line_y += self.row_heights[y];
            }
        }

        self.draw_left_border(grid.column_count());
        self.draw_bottom_border();

        self.lines
            .into_iter()
            .map(|spans| Line::with_end_style(spans, TextStyle::default()))
            .collect()
    }

    /// Width of a cell starting at column `x`, including the borders between
    /// the columns it spans.
    fn cell_width(&self, x: usize, span: usize) -> usize {
        let end = (x + span).min(self.widths.len());
        let interior = (x + 1..end)
            .filter(|&i| self.grid.column_borders[i])
            .count();
        self.widths[x..end].iter().sum::<usize>() + interior
    }

    /// Height of a cell starting at row `y`, including the borders between
    /// the rows it spans.
    fn cell_height(&self, y: usize, span: usize) -> usize {
        let end = (y + span).min(self.row_heights.len());
        let interior = (y + 1..end).filter(|&i| self.grid.row_borders[i]).count();
        self.row_heights[y..end].iter().sum::<usize>() + interior
    }

    fn draw_content(&mut self, line_y: usize, cell: &Cell, x: usize, y: usize) {
        match cell {
            Cell::SpanRef { .. } => {}
            Cell::Empty => {
                let width = self.widths[x];
                if width == 0 {
                    return;
                }
                let blank = Span::space(width, TextStyle::default());
                for line in &mut self.lines[line_y..line_y + self.row_heights[y]] {
                    line.push(blank.clone());
                }
            }
            Cell::Content(content) => {
                let Some(rendered) = self.rendered[y][x].as_ref() else {
                    return;
                };
                let width = self.cell_width(x, content.column_span);
                let height = self.cell_height(y, content.row_span);
                let sized = rendered.set_size(Some(width), height, content.valign, content.align);
                for (i, line) in sized.into_iter().enumerate() {
                    self.lines[line_y + i].extend(line.into_spans());
                }
            }
        }
    }

    /// Draw the border above the cell at `(x, y)`. Returns the number of
    /// lines the border row takes, whether or not anything was drawn.
    fn draw_top_border(
        &mut self,
        line_y: usize,
        x: usize,
        y: usize,
        column_width: usize,
        top: Option<bool>,
    ) -> usize {
        if !self.grid.row_borders[y] {
            return 0;
        }
        let Some(top) = top else { return 1 };
        if column_width == 0 {
            return 1;
        }

        let grid = self.grid;
        let tb = grid.table_borders;
        let drawn = top
            || y == 0 && tb.t()
            || y == grid.row_count() && tb.b()
            || grid.cell_at(x as isize, y as isize - 1).b();
        let style = grid.border_style.clone();
        let span = if drawn {
            let glyph = self.section(y, true).ew();
            Span::word(glyph.to_string().repeat(column_width), style)
        } else {
            Span::space(column_width, style)
        };
        self.lines[line_y].push(span);
        1
    }

    fn draw_left_border(&mut self, x: usize) {
        let grid = self.grid;
        if !grid.column_borders[x] {
            return;
        }
        let tb = grid.table_borders;
        let mut line_y = 0;
        for y in 0..grid.row_count() {
            let cell = grid.cell_at(x as isize, y as isize).unwrap_or(&EMPTY);
            let top_height = usize::from(grid.row_borders[y]);
            if top_height == 1
                && let Some(corner) = self.corner(x, y)
            {
                self.lines[line_y].push(corner);
            }

            if let Some(left) = cell.edges().left {
                let drawn = x == 0 && tb.l()
                    || x == grid.column_count() && tb.r()
                    || left
                    || grid.cell_at(x as isize - 1, y as isize).r();
                let span = if drawn {
                    let glyph = self.section(y, false).ns();
                    Span::word(glyph.to_string(), grid.border_style.clone())
                } else {
                    Span::space(1, TextStyle::default())
                };
                let start = line_y + top_height;
                for line in &mut self.lines[start..start + self.row_heights[y]] {
                    line.push(span.clone());
                }
            }
            line_y += self.row_heights[y] + top_height;
        }
    }

    fn draw_bottom_border(&mut self) {
        let grid = self.grid;
        let rows = grid.row_count();
        if !grid.row_borders[rows] {
            return;
        }
        let Some(last) = self.lines.len().checked_sub(1) else {
            return;
        };
        for x in 0..grid.column_count() {
            if grid.column_borders[x]
                && let Some(corner) = self.corner(x, rows)
            {
                self.lines[last].push(corner);
            }
            self.draw_top_border(last, x, rows, self.widths[x], Some(false));
        }
        let columns = grid.column_count();
        if grid.column_borders[columns]
            && let Some(corner) = self.corner(columns, rows)
        {
            self.lines[last].push(corner);
        }
    }

    /// The junction glyph at the top-left corner of `(x, y)`, or `None` inside
    /// a spanning cell where no surrounding cell declares any border.
    fn corner(&self, x: usize, y: usize) -> Option<Span> {
        let grid = self.grid;
        let (xi, yi) = (x as isize, y as isize);
        let tl = grid.cell_at(xi - 1, yi - 1);
        let tr = grid.cell_at(xi, yi - 1);
        let bl = grid.cell_at(xi - 1, yi);
        let br = grid.cell_at(xi, yi);

        let declared =
            |cell: Option<&Cell>, side: fn(Edges) -> Option<bool>| cell.is_some_and(|c| side(c.edges()).is_some());
        let any_cell = tl.is_some() || tr.is_some() || bl.is_some() || br.is_some();
        let any_edge = declared(tl, |e| e.right)
            || declared(tr, |e| e.left)
            || declared(tr, |e| e.bottom)
            || declared(br, |e| e.top)
            || declared(bl, |e| e.right)
            || declared(br, |e| e.left)
            || declared(tl, |e| e.bottom)
            || declared(bl, |e| e.top);
        if any_cell && !any_edge {
            return None;
        }

        let tb = grid.table_borders;
        let (columns, rows) = (grid.column_count(), grid.row_count());
        let vertical_edge = x == 0 && tb.l() || x == columns && tb.r();
        let horizontal_edge = y == 0 && tb.t() || y == rows && tb.b();
        let n = tl.r() || tr.l() || y > 0 && vertical_edge;
        let e = tr.b() || br.t() || x < columns && horizontal_edge;
        let s = bl.r() || br.l() || y < rows && vertical_edge;
        let w = tl.b() || bl.t() || x > 0 && horizontal_edge;
        Some(self.section(y, true).corner_span(n, e, s, w, &grid.border_style))
    }

    /// Glyphs for row `y`. Border rows directly under the header or above
    /// the footer use the separator sets when `allow_bottom` is set.
    fn section(&self, y: usize, allow_bottom: bool) -> &BorderGlyphSet {
        let grid = self.grid;
        let border = &grid.border_type;
        let rows = grid.row_count();
        let (head, foot) = (grid.header_rows, grid.footer_rows);
        if y < head {
            &border.head
        } else if allow_bottom && head > 0 && y == head {
            &border.head_bottom
        } else if allow_bottom && foot > 0 && y == rows - foot {
            &border.body_bottom
        } else if foot == 0 || y < rows - foot {
            &border.body
        } else {
            &border.foot
        }
    }
}
