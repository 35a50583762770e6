#![forbid(unsafe_code)]

//! A box drawn around another widget.

use std::sync::Arc;

use tabula_core::{Sides, WidthRange};
use tabula_style::{TextStyle, ThemeValue};
use tabula_text::{Line, Lines, OverflowWrap, Span, TextAlign, Whitespace};

use crate::borders::BorderType;
use crate::empty::EmptyWidget;
use crate::padded::Padded;
use crate::rule::HorizontalRule;
use crate::text::Text;
use crate::{RenderContext, Widget};

/// A border around a widget, with optional titles set into the top and
/// bottom edges.
///
/// ```text
/// ╭─ title ────────╮
/// │my panel content│
/// ╰───── subtitle ─╯
/// ```
#[derive(Debug, Clone)]
pub struct Panel {
    content: Arc<dyn Widget>,
    padding: Sides,
    title: Option<Arc<dyn Widget>>,
    bottom_title: Option<Arc<dyn Widget>>,
    expand: bool,
    border_type: Option<BorderType>,
    title_align: TextAlign,
    bottom_title_align: Option<TextAlign>,
    border_style: ThemeValue<TextStyle>,
    title_padding: ThemeValue<usize>,
}

fn title_text(title: &str) -> Arc<dyn Widget> {
    Arc::new(
        Text::new(title)
            .whitespace(Whitespace::NOWRAP)
            .overflow(OverflowWrap::Ellipses),
    )
}

impl Panel {
    pub fn new(content: impl Widget + 'static) -> Self {
        Self::shared(Arc::new(content))
    }

    pub fn shared(content: Arc<dyn Widget>) -> Self {
        Self {
            content,
            padding: Sides::ZERO,
            title: None,
            bottom_title: None,
            expand: false,
            border_type: Some(BorderType::ROUNDED),
            title_align: TextAlign::Center,
            bottom_title_align: None,
            border_style: ThemeValue::Default("panel.border"),
            title_padding: ThemeValue::Default("panel.title.padding"),
        }
    }

    /// A single-line title, cut with an ellipsis when too long.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title_text(title));
        self
    }

    #[must_use]
    pub fn title_widget(mut self, title: impl Widget + 'static) -> Self {
        self.title = Some(Arc::new(title));
        self
    }

    #[must_use]
    pub fn bottom_title(mut self, title: &str) -> Self {
        self.bottom_title = Some(title_text(title));
        self
    }

    #[must_use]
    pub fn bottom_title_widget(mut self, title: impl Widget + 'static) -> Self {
        self.bottom_title = Some(Arc::new(title));
        self
    }

    /// Fill the whole width instead of shrinking to the content.
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Space between the content and the border.
    #[must_use]
    pub fn padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    /// `None` draws no border; titles then take lines of their own.
    #[must_use]
    pub fn border_type(mut self, border_type: Option<BorderType>) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn title_align(mut self, align: TextAlign) -> Self {
        self.title_align = align;
        self
    }

    /// Defaults to the top title's alignment.
    #[must_use]
    pub fn bottom_title_align(mut self, align: TextAlign) -> Self {
        self.bottom_title_align = Some(align);
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: TextStyle) -> Self {
        self.border_style = ThemeValue::Explicit(style);
        self
    }

    #[must_use]
    pub fn title_padding(mut self, padding: usize) -> Self {
        self.title_padding = ThemeValue::Explicit(padding);
        self
    }

    fn border_width(&self) -> usize {
        if self.border_type.is_some() { 2 } else { 0 }
    }

    fn content(&self) -> Arc<dyn Widget> {
        if self.padding.is_empty() {
            Arc::clone(&self.content)
        } else {
            Arc::new(Padded::shared(Arc::clone(&self.content), self.padding))
        }
    }

    fn edge(&self, title: Option<&Arc<dyn Widget>>, align: TextAlign, overflow_top: bool) -> HorizontalRule {
        let rule = self.border_type.map_or(' ', |b| b.body.ew());
        let mut edge = HorizontalRule::new()
            .rule_character(&rule.to_string())
            .title_align(align)
            .title_overflow_top(overflow_top);
        edge = match title {
            Some(title) => edge.title(Arc::clone(title)),
            None => edge.title(EmptyWidget),
        };
        edge.with_theme_values(self.border_style.clone(), self.title_padding.clone())
    }
}

impl Widget for Panel {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        let bw = self.border_width();
        let max_content = width.saturating_sub(bw);
        let title_padding = 2 * self.title_padding.resolve(cx.theme());
        let max_title = max_content.saturating_sub(title_padding);

        let content = self.content().measure(cx, max_content) + bw;
        let content = if self.expand { content.pinned_to_max() } else { content };
        let title = self
            .title
            .as_ref()
            .map(|t| t.measure(cx, max_title) + (bw + title_padding));
        WidthRange::max_of([Some(content), title], 0)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Panel",
            width,
            bordered = self.border_type.is_some()
        )
        .entered();

        let bw = self.border_width();
        let max_content = width.saturating_sub(bw);
        let content_width = if self.expand {
            max_content
        } else {
            self.measure(cx, width).max.saturating_sub(bw).min(max_content)
        };

        let content = self
            .content()
            .render(cx, max_content)
            .set_width(content_width, TextAlign::Left);
        let top = self
            .edge(self.title.as_ref(), self.title_align, true)
            .render(cx, content_width);
        let bottom_align = self.bottom_title_align.unwrap_or(self.title_align);
        let bottom = self
            .edge(self.bottom_title.as_ref(), bottom_align, false)
            .render(cx, content_width);

        let Some(border) = self.border_type else {
            let mut lines = Vec::with_capacity(top.height() + content.height() + bottom.height());
            if self.title.is_some() {
                lines.extend(top);
            }
            lines.extend(content);
            if self.bottom_title.is_some() {
                lines.extend(bottom);
            }
            return Lines::from(lines);
        };

        let style = self.border_style.resolve(cx.theme());
        let glyphs = border.body;
        let glyph = |c: char| Span::word(c.to_string(), style.clone());
        let space = || Span::space(1, TextStyle::default());
        let framed = |left: Span, line: Line, right: Span| {
            let mut spans = Vec::with_capacity(line.len() + 2);
            spans.push(left);
            spans.extend(line.into_spans());
            spans.push(right);
            Line::new(spans)
        };

        let mut lines = Vec::with_capacity(top.height() + content.height() + bottom.height());
        let top_last = top.height().saturating_sub(1);
        for (i, line) in top.into_iter().enumerate() {
            lines.push(if i < top_last {
                framed(space(), line, space())
            } else {
                framed(glyph(glyphs.es()), line, glyph(glyphs.sw()))
            });
        }
        for line in content {
            lines.push(framed(glyph(glyphs.ns()), line, glyph(glyphs.ns())));
        }
        for (i, line) in bottom.into_iter().enumerate() {
            lines.push(if i > 0 {
                framed(space(), line, space())
            } else {
                framed(glyph(glyphs.ne()), line, glyph(glyphs.nw()))
            });
        }
        Lines::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ansi, rows};
    use tabula_style::{Ansi16, Theme};

    // ========================================================================
    // Layout
    // ========================================================================

    #[test]
    fn shrinks_to_content() {
        let panel = Panel::new(Text::new("text"));
        assert_eq!(rows(&panel, 20), vec!["╭────╮", "│text│", "╰────╯"]);
    }

    #[test]
    fn expands_to_width() {
        let panel = Panel::new(Text::new("text").align(TextAlign::Center)).expand(true);
        assert_eq!(
            rows(&panel, 20),
            vec![
                "╭──────────────────╮",
                "│       text       │",
                "╰──────────────────╯",
            ]
        );
    }

    #[test]
    fn no_border() {
        let panel = Panel::new(Text::new("text\nline 2")).border_type(None);
        assert_eq!(rows(&panel, 20), vec!["text  ", "line 2"]);
    }

    #[test]
    fn padding_inside_border() {
        let panel = Panel::new(Text::new("x")).padding(Sides::horizontal(1));
        assert_eq!(rows(&panel, 20), vec!["╭───╮", "│ x │", "╰───╯"]);
    }

    // ========================================================================
    // Titles
    // ========================================================================

    #[test]
    fn centered_title() {
        let panel = Panel::new(Text::new("text content")).title("title");
        assert_eq!(
            rows(&panel, 20),
            vec!["╭── title ───╮", "│text content│", "╰────────────╯"]
        );
    }

    #[test]
    fn long_title_widens_panel() {
        let panel = Panel::new(Text::new("content")).title("title title");
        assert_eq!(
            rows(&panel, 20),
            vec!["╭ title title ╮", "│content      │", "╰─────────────╯"]
        );
    }

    #[test]
    fn aligned_titles() {
        let left = Panel::new(Text::new("text content"))
            .title("title")
            .title_align(TextAlign::Left);
        assert_eq!(rows(&left, 20)[0], "╭─ title ────╮");
        let right = Panel::new(Text::new("text content"))
            .title("title")
            .title_align(TextAlign::Right);
        assert_eq!(rows(&right, 20)[0], "╭──── title ─╮");
    }

    #[test]
    fn bottom_title_inherits_alignment() {
        let panel = Panel::new(Text::new("text content")).bottom_title("title");
        assert_eq!(rows(&panel, 20)[2], "╰── title ───╯");
    }

    #[test]
    fn separate_bottom_alignment() {
        let panel = Panel::new(Text::new("my panel content"))
            .title("title")
            .bottom_title("subtitle")
            .title_align(TextAlign::Left)
            .bottom_title_align(TextAlign::Right);
        assert_eq!(
            rows(&panel, 20),
            vec!["╭─ title ────────╮", "│my panel content│", "╰───── subtitle ─╯"]
        );
    }

    #[test]
    fn multiline_title_widgets() {
        let panel = Panel::new(Text::new("text content"))
            .title_widget(Text::new("foo\nbar"))
            .bottom_title_widget(Text::new("foo\nbar"));
        assert_eq!(
            rows(&panel, 20),
            vec![
                "     foo      ",
                "╭─── bar ────╮",
                "│text content│",
                "╰─── foo ────╯",
                "     bar      ",
            ]
        );
    }

    #[test]
    fn unbordered_titles_take_their_own_lines() {
        let panel = Panel::new(Text::new("text content"))
            .title("t")
            .border_type(None)
            .title_padding(0);
        assert_eq!(rows(&panel, 20), vec!["     t      ", "text content"]);
    }

    // ========================================================================
    // Styling
    // ========================================================================

    #[test]
    fn border_style_from_theme() {
        let theme = Theme::default()
            .derive()
            .style("panel.border", TextStyle::new().fg(Ansi16::Blue))
            .build();
        let cx = RenderContext::new(theme);
        let panel = Panel::new(Text::new("x")).border_type(Some(BorderType::ASCII));
        assert_eq!(
            ansi(&panel, &cx, 10),
            "\x1b[34m+-+\x1b[39m\n\x1b[34m|\x1b[39mx\x1b[34m|\x1b[39m\n\x1b[34m+-+\x1b[39m"
        );
    }

    #[test]
    fn measure_never_exceeds_min_over_max() {
        let cx = RenderContext::default();
        let panel = Panel::new(Text::new("a b c").whitespace(Whitespace::NORMAL)).title("long title");
        for width in 0..30 {
            let range = panel.measure(&cx, width);
            assert!(range.min <= range.max, "width {width}: {range:?}");
        }
    }
}
