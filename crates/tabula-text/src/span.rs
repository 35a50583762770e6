#![forbid(unsafe_code)]

//! Styled text runs and the lines built from them.
//!
//! A [`Span`] is the atomic unit of rendered output: one style, and text that
//! is either entirely whitespace or contains none. A [`Line`] is one terminal
//! row of spans, and [`Lines`] is what every widget renders to.
//!
//! # Example
//! ```
//! use tabula_style::TextStyle;
//! use tabula_text::{Line, Lines, Span};
//!
//! let bold = TextStyle::new().bold();
//! let line = Line::new(vec![
//!     Span::word("Hello,", bold.clone()),
//!     Span::space(1, TextStyle::default()),
//!     Span::word("世界", TextStyle::default()),
//! ]);
//! assert_eq!(line.width(), 11);
//!
//! let lines = Lines::from(vec![line, Line::default()]);
//! assert_eq!(lines.height(), 2);
//! assert_eq!(lines.to_plain_text(), "Hello, 世界\n");
//! ```

use std::fmt;
use std::sync::OnceLock;

use tabula_style::TextStyle;
use tabula_style::ansi::ESC;
use unicode_segmentation::UnicodeSegmentation;

use crate::cell_width::str_width;

/// An immutable run of text with a single style.
///
/// # Invariants
///
/// The text is non-empty, is either all whitespace or has no whitespace, and
/// contains neither `\n` nor `ESC`. Constructors panic when these are violated,
/// since spans are only built from already tokenized text.
#[derive(Clone)]
pub struct Span {
    text: String,
    style: TextStyle,
    width: OnceLock<usize>,
}

impl Span {
    /// A word or whitespace run.
    ///
    /// # Panics
    ///
    /// Panics if the invariants above do not hold.
    #[must_use]
    pub fn word(text: impl Into<String>, style: TextStyle) -> Self {
        let text = text.into();
        assert!(!text.is_empty(), "Span text cannot be empty");
        let spaces = text.chars().filter(|c| c.is_whitespace()).count();
        assert!(
            spaces == 0 || spaces == text.chars().count(),
            "Spans must contain either all whitespace or no whitespace: {text:?}"
        );
        assert!(!text.contains('\n'), "Spans cannot contain newlines");
        assert!(!text.contains(ESC), "Spans cannot contain escape sequences");
        Self::unchecked(text, style)
    }

    /// `width` spaces.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[must_use]
    pub fn space(width: usize, style: TextStyle) -> Self {
        assert!(width > 0, "Span text cannot be empty");
        let span = Self::unchecked(" ".repeat(width), style);
        let _ = span.width.set(width);
        span
    }

    fn unchecked(text: String, style: TextStyle) -> Self {
        Self {
            text,
            style,
            width: OnceLock::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Width in cells, computed on first use.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        *self.width.get_or_init(|| str_width(&self.text))
    }

    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_whitespace)
    }

    #[must_use]
    pub fn is_tab(&self) -> bool {
        self.text.starts_with('\t')
    }

    /// Split at a cell position without breaking a grapheme cluster.
    ///
    /// A cluster that straddles `cells` goes to the right half, so the left
    /// half is never wider than `cells`.
    #[must_use]
    pub fn split_at_cell(&self, cells: usize) -> (Option<Span>, Option<Span>) {
        if cells >= self.width() {
            return (Some(self.clone()), None);
        }
        let mut used = 0;
        let mut split = 0;
        for (idx, grapheme) in self.text.grapheme_indices(true) {
            let w = str_width(grapheme);
            if used + w > cells {
                split = idx;
                break;
            }
            used += w;
            split = idx + grapheme.len();
        }
        let (left, right) = self.text.split_at(split);
        let piece = |s: &str| (!s.is_empty()).then(|| Self::unchecked(s.to_owned(), self.style.clone()));
        (piece(left), piece(right))
    }

    /// The longest prefix that fits in `cells`, if any.
    #[must_use]
    pub fn take(&self, cells: usize) -> Option<Span> {
        self.split_at_cell(cells).0
    }

    /// Same text with `overlay` merged on top of the current style.
    #[must_use]
    pub fn with_style(&self, overlay: &TextStyle) -> Span {
        Span {
            text: self.text.clone(),
            style: overlay.merge(&self.style),
            width: self.width.clone(),
        }
    }

    /// Same text with the style replaced.
    #[must_use]
    pub fn replace_style(&self, style: TextStyle) -> Span {
        Span {
            text: self.text.clone(),
            style,
            width: self.width.clone(),
        }
    }

    pub(crate) fn concat(&self, other: &Span) -> Span {
        Self::unchecked(format!("{}{}", self.text, other.text), self.style.clone())
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.style == other.style
    }
}

impl Eq for Span {}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("text", &self.text)
            .field("style", &self.style)
            .finish()
    }
}

/// One terminal row.
///
/// `end_style` is the style used when the row is padded on the right. It
/// defaults to the style of the last span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
    end_style: TextStyle,
}

impl Line {
    /// A line whose end style is its last span's style.
    #[must_use]
    pub fn new(spans: Vec<Span>) -> Self {
        let end_style = spans.last().map(|s| s.style.clone()).unwrap_or_default();
        Self { spans, end_style }
    }

    #[must_use]
    pub fn with_end_style(spans: Vec<Span>, end_style: TextStyle) -> Self {
        Self { spans, end_style }
    }

    /// An empty line with the given end style.
    #[must_use]
    pub fn empty(end_style: TextStyle) -> Self {
        Self {
            spans: Vec::new(),
            end_style,
        }
    }

    #[inline]
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    #[inline]
    #[must_use]
    pub fn end_style(&self) -> &TextStyle {
        &self.end_style
    }

    #[must_use]
    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

impl From<Vec<Span>> for Line {
    fn from(spans: Vec<Span>) -> Self {
        Self::new(spans)
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Rendered output: rows top to bottom with implicit breaks between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lines {
    lines: Vec<Line>,
}

impl Lines {
    /// No rows at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Merge `overlay` on top of every span and end style.
    #[must_use]
    pub fn with_style(self, overlay: Option<&TextStyle>) -> Lines {
        let Some(overlay) = overlay.filter(|s| !s.is_empty()) else {
            return self;
        };
        self.lines
            .into_iter()
            .map(|line| Line {
                spans: line.spans.iter().map(|s| s.with_style(overlay)).collect(),
                end_style: overlay.merge(&line.end_style),
            })
            .collect()
    }

    /// Replace every span's style with `style`.
    #[must_use]
    pub fn replace_style(self, style: Option<&TextStyle>) -> Lines {
        let Some(style) = style.filter(|s| !s.is_empty()) else {
            return self;
        };
        self.lines
            .into_iter()
            .map(|line| Line {
                spans: line
                    .spans
                    .iter()
                    .map(|s| s.replace_style(style.clone()))
                    .collect(),
                end_style: style.clone(),
            })
            .collect()
    }

    /// All text with rows joined by `\n`, without styles.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for span in line {
                out.push_str(span.text());
            }
        }
        out
    }

    pub(crate) fn push(&mut self, line: Line) {
        self.lines.push(line);
    }
}

impl From<Vec<Line>> for Lines {
    fn from(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

impl FromIterator<Line> for Lines {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Lines {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lines {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
