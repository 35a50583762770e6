#![forbid(unsafe_code)]

//! Geometry operations on rendered [`Lines`]: exact sizing, padding, joining
//! and flattening.

use tabula_core::Sides;
use tabula_style::TextStyle;

use crate::align::{TextAlign, VerticalAlign};
use crate::span::{Line, Lines, Span};

fn space_or_nothing(width: usize, style: &TextStyle) -> Option<Span> {
    (width > 0).then(|| Span::space(width, style.clone()))
}

impl Line {
    /// Crop or pad to exactly `width` cells.
    ///
    /// Cropping keeps grapheme clusters whole; a wide cluster cut by the edge is
    /// dropped and its cell filled with a space.
    #[must_use]
    pub fn fit_width(&self, width: usize, align: TextAlign) -> Line {
        if width == 0 {
            return Line::empty(self.end_style().clone());
        }
        let mut used = 0;
        let mut kept = Vec::with_capacity(self.len() + 2);
        for span in self {
            let w = span.width();
            if used + w <= width {
                used += w;
                kept.push(span.clone());
                continue;
            }
            if let Some(part) = span.take(width - used) {
                used += part.width();
                kept.push(part);
            }
            if let Some(fill) = space_or_nothing(width - used, span.style()) {
                kept.push(fill);
            }
            return Line::new(kept);
        }

        let remaining = width - used;
        if remaining == 0 {
            return self.clone();
        }
        let begin_style = self
            .spans()
            .first()
            .map_or_else(|| self.end_style().clone(), |s| s.style().clone());
        let end_style = self.end_style();
        match align {
            TextAlign::Center | TextAlign::Justify => {
                let mut spans = Vec::with_capacity(kept.len() + 2);
                spans.extend(space_or_nothing(remaining / 2, &begin_style));
                spans.extend(kept);
                spans.extend(space_or_nothing(remaining / 2 + remaining % 2, end_style));
                Line::new(spans)
            }
            TextAlign::Left => {
                kept.push(Span::space(remaining, end_style.clone()));
                Line::new(kept)
            }
            TextAlign::None => {
                kept.push(Span::space(remaining, TextStyle::default()));
                Line::new(kept)
            }
            TextAlign::Right => {
                kept.insert(0, Span::space(remaining, begin_style));
                Line::new(kept)
            }
        }
    }

    /// Merge neighbouring spans that share a style and whitespace class.
    #[must_use]
    pub fn flattened(&self) -> Line {
        let mut spans: Vec<Span> = Vec::with_capacity(self.len());
        for span in self {
            match spans.last_mut() {
                Some(prev)
                    if prev.style() == span.style() && prev.is_whitespace() == span.is_whitespace() =>
                {
                    *prev = prev.concat(span);
                }
                _ => spans.push(span.clone()),
            }
        }
        Line::with_end_style(spans, self.end_style().clone())
    }
}

impl Lines {
    /// Pad or crop every line to exactly `width` cells and add or drop lines
    /// until there are exactly `height`.
    ///
    /// With `width` of `None` only the height changes; added lines are empty.
    #[must_use]
    pub fn set_size(
        &self,
        width: Option<usize>,
        height: usize,
        valign: VerticalAlign,
        align: TextAlign,
    ) -> Lines {
        if height == 0 {
            return Lines::empty();
        }
        let Some(width) = width else {
            let mut lines: Vec<Line> = self.iter().take(height).cloned().collect();
            lines.resize(height, Line::default());
            return Lines::from(lines);
        };
        if width == 0 {
            return Lines::from(vec![Line::default(); height]);
        }

        let blank = Line::new(vec![Span::space(width, TextStyle::default())]);
        let extra = height.saturating_sub(self.height());
        let top = match valign {
            VerticalAlign::Top => 0,
            VerticalAlign::Middle => extra / 2 + extra % 2,
            VerticalAlign::Bottom => extra,
        };

        let mut lines = Vec::with_capacity(height);
        lines.extend(std::iter::repeat_n(blank.clone(), top));
        lines.extend(self.iter().take(height).map(|l| l.fit_width(width, align)));
        lines.truncate(height);
        lines.resize(height, blank);
        Lines::from(lines)
    }

    /// Shorthand for [`set_size`](Self::set_size) at the current height.
    #[must_use]
    pub fn set_width(&self, width: usize, align: TextAlign) -> Lines {
        self.set_size(Some(width), self.height(), VerticalAlign::Top, align)
    }

    /// Surround with blank lines and unstyled spaces.
    ///
    /// When `pad_empty_lines` is false, lines with no spans stay empty instead
    /// of receiving left and right padding.
    #[must_use]
    pub fn pad(&self, padding: Sides, pad_empty_lines: bool) -> Lines {
        if padding.is_empty() {
            return self.clone();
        }
        let left = space_or_nothing(padding.left, &TextStyle::default());
        let right = space_or_nothing(padding.right, &TextStyle::default());

        let mut out = Vec::with_capacity(padding.vertical_sum() + self.height());
        out.extend(std::iter::repeat_n(Line::default(), padding.top));
        for line in self {
            if !pad_empty_lines && line.is_empty() {
                out.push(Line::default());
                continue;
            }
            let mut spans = Vec::with_capacity(line.len() + 2);
            spans.extend(left.clone());
            spans.extend(line.iter().cloned());
            spans.extend(right.clone());
            out.push(Line::new(spans));
        }
        out.extend(std::iter::repeat_n(Line::default(), padding.bottom));
        Lines::from(out)
    }

    /// Place `other` to the right of these lines.
    ///
    /// Lines on the left are padded to the left block's width wherever a right
    /// line follows, so the right block starts in a single column. The shorter
    /// block is extended with empty lines.
    #[must_use]
    pub fn concat_horizontal(&self, other: &Lines) -> Lines {
        let left_width = self.width();
        let height = self.height().max(other.height());
        let empty = Line::default();
        (0..height)
            .map(|i| {
                let left = self.lines().get(i).unwrap_or(&empty);
                let Some(right) = other.lines().get(i).filter(|l| !l.is_empty()) else {
                    return left.clone();
                };
                let mut spans = Vec::with_capacity(left.len() + right.len() + 1);
                spans.extend(left.iter().cloned());
                spans.extend(space_or_nothing(
                    left_width - left.width(),
                    &TextStyle::default(),
                ));
                spans.extend(right.iter().cloned());
                Line::with_end_style(spans, right.end_style().clone())
            })
            .collect()
    }

    /// Stack `other` below these lines.
    ///
    /// With `fold`, the last line here and the first line of `other` become one
    /// line, which joins a paragraph split across two renders.
    #[must_use]
    pub fn concat_vertical(&self, other: &Lines, fold: bool) -> Lines {
        let mut lines = self.lines().to_vec();
        let mut rest = other.iter();
        if fold
            && let (Some(last), Some(first)) = (lines.last_mut(), other.lines().first())
        {
            rest.next();
            let spans = last.iter().chain(first).cloned().collect();
            *last = Line::with_end_style(spans, first.end_style().clone());
        }
        lines.extend(rest.cloned());
        Lines::from(lines)
    }

    /// [`Line::flattened`] applied to every line.
    #[must_use]
    pub fn flattened(&self) -> Lines {
        self.iter().map(Line::flattened).collect()
    }
}
