#![forbid(unsafe_code)]

//! Wrapped, aligned text.

use tabula_core::WidthRange;
use tabula_style::TextStyle;
use tabula_text::wrap::{self, WrapOptions};
use tabula_text::{Lines, OverflowWrap, TextAlign, Whitespace, parse_text};

use crate::{RenderContext, Widget};

/// A block of styled text that wraps to the width it is given.
///
/// Escape sequences in the source string are parsed into styles, so colored
/// output from other programs can be embedded directly.
#[derive(Debug, Clone)]
pub struct Text {
    lines: Lines,
    whitespace: Whitespace,
    align: TextAlign,
    overflow: OverflowWrap,
    width: Option<usize>,
    tab_width: Option<usize>,
}

impl Text {
    /// Text in the default style, kept exactly as written.
    pub fn new(text: &str) -> Self {
        Self::styled(text, TextStyle::default())
    }

    /// Text whose unstyled parts use `style`.
    pub fn styled(text: &str, style: TextStyle) -> Self {
        Self::from_lines(parse_text(text, &style))
    }

    /// Already parsed lines.
    pub fn from_lines(lines: Lines) -> Self {
        Self {
            lines,
            whitespace: Whitespace::PRE,
            align: TextAlign::None,
            overflow: OverflowWrap::Normal,
            width: None,
            tab_width: None,
        }
    }

    #[must_use]
    pub fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    #[must_use]
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn overflow(mut self, overflow: OverflowWrap) -> Self {
        self.overflow = overflow;
        self
    }

    /// Wrap at `width` regardless of the width offered by the parent.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the context's tab width.
    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = Some(tab_width);
        self
    }

    fn options(&self, cx: &RenderContext, width: usize) -> WrapOptions {
        WrapOptions::new(self.width.unwrap_or(width))
            .whitespace(self.whitespace)
            .align(self.align)
            .overflow(self.overflow)
            .tab_width(self.tab_width.unwrap_or(cx.tab_width))
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl Widget for Text {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        wrap::measure(&self.lines, &self.options(cx, width))
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Text",
            width,
            source_lines = self.lines.height()
        )
        .entered();

        wrap::wrap(&self.lines, &self.options(cx, width))
    }

    fn plain_text(&self, cx: &RenderContext) -> Option<String> {
        let options = self.options(cx, usize::MAX).align(TextAlign::None);
        Some(wrap::wrap(&self.lines, &options).to_plain_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ansi, plain};
    use tabula_style::Ansi16;

    #[test]
    fn pre_keeps_text_as_written() {
        let text = Text::new("a  b\nc");
        assert_eq!(plain(&text, 2), "a  b\nc");
    }

    #[test]
    fn normal_wraps_and_collapses() {
        let text = Text::new("one   two three").whitespace(Whitespace::NORMAL);
        assert_eq!(plain(&text, 9), "one two\nthree");
    }

    #[test]
    fn alignment_pads_to_width() {
        let text = Text::new("ab").align(TextAlign::Right);
        assert_eq!(plain(&text, 5), "   ab");
    }

    #[test]
    fn ellipses_cut_long_words() {
        let text = Text::new("abcdef")
            .whitespace(Whitespace::NOWRAP)
            .overflow(OverflowWrap::Ellipses);
        assert_eq!(plain(&text, 4), "abc…");
    }

    #[test]
    fn fixed_width_ignores_parent() {
        let text = Text::new("aa bb").whitespace(Whitespace::NORMAL).width(2);
        assert_eq!(plain(&text, 20), "aa\nbb");
    }

    #[test]
    fn measure_reports_word_and_line() {
        let cx = RenderContext::default();
        let text = Text::new("aaa bb\nc").whitespace(Whitespace::NORMAL);
        assert_eq!(text.measure(&cx, 80), WidthRange::new(3, 8));
    }

    #[test]
    fn tab_width_comes_from_context() {
        let text = Text::new("a\tb");
        let cx = RenderContext::default().with_tab_width(4);
        assert_eq!(text.render(&cx, 20).to_plain_text(), "a   b");
        let own = Text::new("a\tb").tab_width(2);
        assert_eq!(own.render(&cx, 20).to_plain_text(), "a b");
    }

    #[test]
    fn styled_text_keeps_style() {
        let text = Text::styled("hi", TextStyle::new().fg(Ansi16::Red));
        let cx = RenderContext::default();
        assert_eq!(ansi(&text, &cx, 10), "\x1b[31mhi\x1b[39m");
    }
}
