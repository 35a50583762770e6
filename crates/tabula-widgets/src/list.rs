#![forbid(unsafe_code)]

//! Bulleted and numbered lists.

use std::sync::Arc;

use tabula_core::WidthRange;
use tabula_style::{TextStyle, ThemeValue};
use tabula_text::{Line, Lines, Span, Whitespace, parse_text};

use crate::text::Text;
use crate::{RenderContext, Widget, max_width_range};

fn entries_from_text<'a>(entries: impl IntoIterator<Item = &'a str>) -> Vec<Arc<dyn Widget>> {
    entries
        .into_iter()
        .map(|e| Arc::new(Text::new(e).whitespace(Whitespace::NORMAL)) as Arc<dyn Widget>)
        .collect()
}

/// First line of `text` parsed in `style`.
fn single_line(text: &str, style: &TextStyle) -> Vec<Span> {
    parse_text(text, style)
        .into_lines()
        .into_iter()
        .next()
        .map(Line::into_spans)
        .unwrap_or_default()
}

fn prefixed(lines: &mut Vec<Line>, prefix: &[Span], line: Line) {
    let mut spans = Vec::with_capacity(prefix.len() + line.len());
    spans.extend_from_slice(prefix);
    let end_style = line.end_style().clone();
    spans.extend(line.into_spans());
    lines.push(Line::with_end_style(spans, end_style));
}

// ============================================================================
// UnorderedList
// ============================================================================

/// A list with a bullet before each entry.
///
/// ```text
///  • one
///  • two
/// ```
#[derive(Debug, Clone)]
pub struct UnorderedList {
    entries: Vec<Arc<dyn Widget>>,
    bullet_text: ThemeValue<String>,
    bullet_style: ThemeValue<TextStyle>,
}

impl UnorderedList {
    pub fn new(entries: Vec<Arc<dyn Widget>>) -> Self {
        Self {
            entries,
            bullet_text: ThemeValue::Default("list.bullet.text"),
            bullet_style: ThemeValue::Default("list.bullet"),
        }
    }

    /// One wrapped text entry per string.
    pub fn from_text<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(entries_from_text(entries))
    }

    /// # Panics
    ///
    /// Panics if `text` contains a line break.
    #[must_use]
    pub fn bullet_text(mut self, text: &str) -> Self {
        assert!(!text.contains('\n'), "bullet text cannot contain newlines");
        self.bullet_text = ThemeValue::Explicit(text.to_owned());
        self
    }

    #[must_use]
    pub fn bullet_style(mut self, style: TextStyle) -> Self {
        self.bullet_style = ThemeValue::Explicit(style);
        self
    }

    fn bullet(&self, cx: &RenderContext) -> Vec<Span> {
        let text = self.bullet_text.resolve(cx.theme());
        if text.is_empty() {
            return Vec::new();
        }
        let style = self.bullet_style.resolve(cx.theme());
        let mut spans = vec![Span::space(1, TextStyle::default())];
        spans.extend(single_line(&text, &style));
        spans.push(Span::space(1, TextStyle::default()));
        spans
    }
}

impl Widget for UnorderedList {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        let bullet_width = self.bullet(cx).iter().map(Span::width).sum();
        max_width_range(&self.entries, cx, width, bullet_width)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        let bullet = self.bullet(cx);
        let bullet_width: usize = bullet.iter().map(Span::width).sum();
        let content_width = width.saturating_sub(bullet_width);
        let continuation: Vec<Span> = if bullet_width > 0 {
            vec![Span::space(bullet_width, self.bullet_style.resolve(cx.theme()))]
        } else {
            Vec::new()
        };

        let mut lines = Vec::new();
        for entry in &self.entries {
            for (i, line) in entry.render(cx, content_width).into_iter().enumerate() {
                let prefix = if i == 0 { &bullet } else { &continuation };
                prefixed(&mut lines, prefix, line);
            }
        }
        Lines::from(lines)
    }
}

// ============================================================================
// OrderedList
// ============================================================================

/// A numbered list. Numbers are right-aligned so entries start in one column.
///
/// ```text
///   9. nine
///  10. ten
/// ```
#[derive(Debug, Clone)]
pub struct OrderedList {
    entries: Vec<Arc<dyn Widget>>,
    number_style: ThemeValue<TextStyle>,
    separator: ThemeValue<String>,
}

impl OrderedList {
    pub fn new(entries: Vec<Arc<dyn Widget>>) -> Self {
        Self {
            entries,
            number_style: ThemeValue::Default("list.number"),
            separator: ThemeValue::Default("list.number.separator"),
        }
    }

    pub fn from_text<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(entries_from_text(entries))
    }

    #[must_use]
    pub fn number_style(mut self, style: TextStyle) -> Self {
        self.number_style = ThemeValue::Explicit(style);
        self
    }

    /// Text between each number and its entry.
    ///
    /// # Panics
    ///
    /// Panics if `separator` contains a line break.
    #[must_use]
    pub fn separator(mut self, separator: &str) -> Self {
        assert!(!separator.contains('\n'), "number separator cannot contain newlines");
        self.separator = ThemeValue::Explicit(separator.to_owned());
        self
    }

    fn number_digits(&self) -> usize {
        self.entries.len().max(1).ilog10() as usize + 1
    }

    fn separator_spans(&self, cx: &RenderContext) -> Vec<Span> {
        let style = self.number_style.resolve(cx.theme());
        single_line(&self.separator.resolve(cx.theme()), &style)
    }

    /// One leading space, the number, the separator and one trailing space.
    fn bullet_width(&self, separator: &[Span]) -> usize {
        self.number_digits() + 2 + separator.iter().map(Span::width).sum::<usize>()
    }
}

impl Widget for OrderedList {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        let bullet_width = self.bullet_width(&self.separator_spans(cx));
        max_width_range(&self.entries, cx, width, bullet_width)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        let style = self.number_style.resolve(cx.theme());
        let separator = self.separator_spans(cx);
        let bullet_width = self.bullet_width(&separator);
        let digits = self.number_digits();
        let content_width = width.saturating_sub(bullet_width);
        let continuation = [Span::space(bullet_width, TextStyle::default())];

        let mut lines = Vec::new();
        for (n, entry) in self.entries.iter().enumerate() {
            let number = (n + 1).to_string();
            let mut bullet = vec![Span::space(1 + digits - number.len(), TextStyle::default())];
            bullet.push(Span::word(number, style.clone()));
            bullet.extend(separator.iter().cloned());
            bullet.push(Span::space(1, TextStyle::default()));

            for (i, line) in entry.render(cx, content_width).into_iter().enumerate() {
                let prefix: &[Span] = if i == 0 { &bullet } else { &continuation };
                prefixed(&mut lines, prefix, line);
            }
        }
        Lines::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ansi, plain, rows};
    use tabula_style::{Ansi16, Theme};

    #[test]
    fn unordered_bullets() {
        let list = UnorderedList::from_text(["one", "two", "three"]);
        assert_eq!(rows(&list, 20), vec![" • one", " • two", " • three"]);
    }

    #[test]
    fn unordered_continuation_lines_indent() {
        let list = UnorderedList::from_text(["aaa bbb"]);
        assert_eq!(rows(&list, 6), vec![" • aaa", "   bbb"]);
    }

    #[test]
    fn custom_and_empty_bullets() {
        let list = UnorderedList::from_text(["a"]).bullet_text("->");
        assert_eq!(plain(&list, 10), " -> a");
        let list = UnorderedList::from_text(["a"]).bullet_text("");
        assert_eq!(plain(&list, 10), "a");
    }

    #[test]
    fn ascii_theme_bullet() {
        let cx = RenderContext::new(Theme::plain_ascii());
        let list = UnorderedList::from_text(["a"]);
        assert_eq!(list.render(&cx, 10).to_plain_text(), " * a");
    }

    #[test]
    fn ordered_numbers() {
        let list = OrderedList::from_text(["one", "two", "three"]);
        assert_eq!(rows(&list, 20), vec![" 1. one", " 2. two", " 3. three"]);
    }

    #[test]
    fn ordered_numbers_right_align() {
        let entries: Vec<String> = (1..=10).map(|n| format!("e{n}")).collect();
        let list = OrderedList::from_text(entries.iter().map(String::as_str));
        let out = rows(&list, 20);
        assert_eq!(out[0], "  1. e1");
        assert_eq!(out[9], " 10. e10");
    }

    #[test]
    fn ordered_continuation_and_separator() {
        let list = OrderedList::from_text(["aaa bbb"]).separator(")");
        assert_eq!(rows(&list, 7), vec![" 1) aaa", "    bbb"]);
    }

    #[test]
    fn number_style_applies_to_separator() {
        let list = OrderedList::from_text(["x"]).number_style(TextStyle::new().fg(Ansi16::Green));
        let cx = RenderContext::default();
        assert_eq!(ansi(&list, &cx, 10), " \x1b[32m1.\x1b[39m x");
    }

    #[test]
    fn empty_lists_render_nothing() {
        assert_eq!(plain(&OrderedList::new(Vec::new()), 10), "");
        assert_eq!(plain(&UnorderedList::new(Vec::new()), 10), "");
        let cx = RenderContext::default();
        assert_eq!(UnorderedList::new(Vec::new()).measure(&cx, 10), WidthRange::new(3, 3));
    }

    #[test]
    fn measure_includes_bullet() {
        let cx = RenderContext::default();
        let list = OrderedList::from_text(["abc", "de fgh"]);
        assert_eq!(list.measure(&cx, 20), WidthRange::new(7, 10));
    }
}
