#![forbid(unsafe_code)]

//! Horizontal rule (divider) widget.
//!
//! Draws a line across the full width, optionally with a title set into the
//! line at the given alignment.

use std::sync::Arc;

use tabula_core::WidthRange;
use tabula_style::{TextStyle, ThemeValue};
use tabula_text::{Line, Lines, Span, TextAlign, Whitespace, parse_text, str_width};
use unicode_segmentation::UnicodeSegmentation;

use crate::empty::EmptyWidget;
use crate::text::Text;
use crate::{RenderContext, Widget};

/// A line drawn across the available width.
///
/// # Examples
///
/// ```
/// use tabula_text::TextAlign;
/// use tabula_widgets::{HorizontalRule, RenderContext, Widget};
///
/// let rule = HorizontalRule::titled("Section").title_align(TextAlign::Left);
/// let lines = rule.render(&RenderContext::default(), 16);
/// assert_eq!(lines.to_plain_text(), "─ Section ──────");
/// ```
#[derive(Debug, Clone)]
pub struct HorizontalRule {
    title: Arc<dyn Widget>,
    rule: ThemeValue<String>,
    rule_style: ThemeValue<TextStyle>,
    title_align: TextAlign,
    title_padding: ThemeValue<usize>,
    title_overflow_top: bool,
}

impl Default for HorizontalRule {
    fn default() -> Self {
        Self {
            title: Arc::new(EmptyWidget),
            rule: ThemeValue::Default("hr.rule"),
            rule_style: ThemeValue::Default("hr.rule"),
            title_align: TextAlign::Center,
            title_padding: ThemeValue::Default("hr.title.padding"),
            title_overflow_top: true,
        }
    }
}

impl HorizontalRule {
    /// A plain rule with no title.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule with a text title. An empty title draws a plain rule.
    pub fn titled(title: &str) -> Self {
        if title.is_empty() {
            return Self::new();
        }
        Self::new().title(Text::new(title).whitespace(Whitespace::NORMAL))
    }

    #[must_use]
    pub fn title(mut self, title: impl Widget + 'static) -> Self {
        self.title = Arc::new(title);
        self
    }

    /// Draw the rule with `rule`, repeated as often as it fits.
    ///
    /// # Panics
    ///
    /// Panics if `rule` is empty or contains a line break.
    #[must_use]
    pub fn rule_character(mut self, rule: &str) -> Self {
        assert!(!rule.is_empty(), "Rule characters cannot be empty");
        assert!(!rule.contains('\n'), "Rule characters cannot contain line breaks");
        self.rule = ThemeValue::Explicit(rule.to_owned());
        self
    }

    #[must_use]
    pub fn rule_style(mut self, style: TextStyle) -> Self {
        self.rule_style = ThemeValue::Explicit(style);
        self
    }

    #[must_use]
    pub fn title_align(mut self, align: TextAlign) -> Self {
        self.title_align = align;
        self
    }

    /// Blank cells between the title and the rule on each side.
    #[must_use]
    pub fn title_padding(mut self, padding: usize) -> Self {
        self.title_padding = ThemeValue::Explicit(padding);
        self
    }

    /// Whether the extra lines of a multi-line title go above the rule.
    #[must_use]
    pub fn title_overflow_top(mut self, top: bool) -> Self {
        self.title_overflow_top = top;
        self
    }

    pub(crate) fn with_theme_values(
        mut self,
        rule_style: ThemeValue<TextStyle>,
        title_padding: ThemeValue<usize>,
    ) -> Self {
        self.rule_style = rule_style;
        self.title_padding = title_padding;
        self
    }

    /// `width` cells of the rule string in the rule style.
    fn rule_line(&self, cx: &RenderContext, width: usize) -> Line {
        if width == 0 {
            return Line::default();
        }
        let style = self.rule_style.resolve(cx.theme());
        let mut rule = self.rule.resolve(cx.theme());
        if rule.is_empty() {
            rule = " ".to_owned();
        }

        let mut text = String::with_capacity(width);
        let mut used = 0;
        'fill: loop {
            let before = used;
            for grapheme in rule.graphemes(true) {
                let w = str_width(grapheme);
                if used + w > width {
                    break 'fill;
                }
                used += w;
                text.push_str(grapheme);
            }
            if used == before {
                break;
            }
        }

        let mut spans = parse_text(&text, &style)
            .into_lines()
            .into_iter()
            .next()
            .map(Line::into_spans)
            .unwrap_or_default();
        if used < width {
            spans.push(Span::space(width - used, style));
        }
        Line::new(spans)
    }
}

impl Widget for HorizontalRule {
    fn measure(&self, _cx: &RenderContext, width: usize) -> WidthRange {
        WidthRange::exact(width)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        let padding = self.title_padding.resolve(cx.theme());
        let total_padding = 2 * padding;
        let min_bar_width = 4 + total_padding;
        let title = self.title.render(cx, width.saturating_sub(min_bar_width));

        let (rule_title, extra): (&Line, &[Line]) = match title.lines() {
            [] => return Lines::from(vec![self.rule_line(cx, width)]),
            [.., last] if self.title_overflow_top => (last, &title.lines()[..title.height() - 1]),
            [first, rest @ ..] => (first, rest),
        };

        let rule_width = width
            .saturating_sub(rule_title.width())
            .saturating_sub(total_padding);
        let left_width = match self.title_align {
            TextAlign::Left => rule_width.min(1),
            TextAlign::Right => rule_width.saturating_sub(1),
            TextAlign::Center | TextAlign::Justify | TextAlign::None => rule_width / 2,
        };
        let style = self.rule_style.resolve(cx.theme());
        let space = (padding > 0).then(|| Span::space(padding, style));

        let mut spans = self.rule_line(cx, left_width).into_spans();
        spans.extend(space.clone());
        spans.extend(rule_title.iter().cloned());
        spans.extend(space);
        spans.extend(self.rule_line(cx, rule_width - left_width).into_spans());
        let rule = Lines::from(vec![Line::new(spans)]);

        let extra = Lines::from(extra.to_vec()).set_width(width, TextAlign::Center);
        if self.title_overflow_top {
            extra.concat_vertical(&rule, false)
        } else {
            rule.concat_vertical(&extra, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ansi, plain, rows};
    use tabula_style::{Ansi16, Theme};

    #[test]
    fn plain_rule_fills_width() {
        assert_eq!(plain(&HorizontalRule::new(), 10), "──────────");
        assert_eq!(plain(&HorizontalRule::titled(""), 3), "───");
    }

    #[test]
    fn multi_character_rules_repeat() {
        let rule = HorizontalRule::titled("title").rule_character("1234");
        assert_eq!(plain(&rule, 20), "123412 title 1234123");
        let rule = HorizontalRule::new().rule_character("- -");
        assert_eq!(plain(&rule, 6), "- -- -");
    }

    #[test]
    fn wide_rule_characters_pad_the_last_cell() {
        let rule = HorizontalRule::new().rule_character("媒");
        assert_eq!(plain(&rule, 5), "媒媒 ");
    }

    #[test]
    fn title_alignment() {
        let left = HorizontalRule::titled("title").title_align(TextAlign::Left);
        assert_eq!(plain(&left, 12), "─ title ────");
        let right = HorizontalRule::titled("title").title_align(TextAlign::Right);
        assert_eq!(plain(&right, 12), "──── title ─");
        let center = HorizontalRule::titled("title");
        assert_eq!(plain(&center, 12), "── title ───");
    }

    #[test]
    fn title_padding_is_configurable() {
        let rule = HorizontalRule::titled("title").title_padding(2);
        assert_eq!(plain(&rule, 13), "──  title  ──");
        let rule = HorizontalRule::titled("title").title_padding(0);
        assert_eq!(plain(&rule, 9), "──title──");
    }

    #[test]
    fn multiline_title_overflows_top() {
        let title = Text::new("Multiline Header Text").whitespace(Whitespace::PRE_WRAP);
        let rule = HorizontalRule::new().title(title);
        assert_eq!(rows(&rule, 19), vec!["     Multiline     ", "─── Header Text ───"]);
    }

    #[test]
    fn multiline_title_overflows_bottom() {
        let title = Text::new("Multiline Header Text").whitespace(Whitespace::PRE_WRAP);
        let rule = HorizontalRule::new().title(title).title_overflow_top(false);
        assert_eq!(rows(&rule, 19), vec!["──── Multiline ────", "    Header Text    "]);
    }

    #[test]
    fn measure_is_always_full_width() {
        let cx = RenderContext::default();
        assert_eq!(HorizontalRule::titled("x").measure(&cx, 7), WidthRange::exact(7));
    }

    #[test]
    fn rule_style_comes_from_theme() {
        let theme = Theme::default()
            .derive()
            .style("hr.rule", TextStyle::new().fg(Ansi16::Red))
            .string("hr.rule", "=")
            .build();
        let cx = RenderContext::new(theme);
        assert_eq!(ansi(&HorizontalRule::new(), &cx, 3), "\x1b[31m===\x1b[39m");
    }

    #[test]
    fn empty_theme_rule_falls_back_to_spaces() {
        let theme = Theme::default().derive().string("hr.rule", "").build();
        let cx = RenderContext::new(theme);
        assert_eq!(HorizontalRule::new().render(&cx, 3).to_plain_text(), "   ");
    }

    #[test]
    fn zero_width_renders_empty_line() {
        assert_eq!(rows(&HorizontalRule::new(), 0), vec![""]);
    }

    #[test]
    #[should_panic(expected = "cannot be empty")]
    fn empty_rule_character_panics() {
        let _ = HorizontalRule::new().rule_character("");
    }
}
