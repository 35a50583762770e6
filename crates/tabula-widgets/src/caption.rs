#![forbid(unsafe_code)]

//! Titles above and below a widget.

use std::sync::Arc;

use tabula_core::WidthRange;
use tabula_text::{Lines, TextAlign, Whitespace};

use crate::empty::EmptyWidget;
use crate::text::Text;
use crate::{RenderContext, Widget};

/// A widget with captions drawn above and below it.
///
/// Captions are laid out at the content's natural width, so a centered
/// caption sits over the middle of the content rather than the whole line.
#[derive(Debug, Clone)]
pub struct Caption {
    content: Arc<dyn Widget>,
    top: Arc<dyn Widget>,
    bottom: Arc<dyn Widget>,
}

impl Caption {
    pub fn new(content: impl Widget + 'static) -> Self {
        Self::shared(Arc::new(content))
    }

    pub fn shared(content: Arc<dyn Widget>) -> Self {
        Self {
            content,
            top: Arc::new(EmptyWidget),
            bottom: Arc::new(EmptyWidget),
        }
    }

    #[must_use]
    pub fn top(mut self, caption: impl Widget + 'static) -> Self {
        self.top = Arc::new(caption);
        self
    }

    #[must_use]
    pub fn bottom(mut self, caption: impl Widget + 'static) -> Self {
        self.bottom = Arc::new(caption);
        self
    }

    #[must_use]
    pub fn top_text(self, text: &str, align: TextAlign) -> Self {
        self.top(caption_text(text, align))
    }

    #[must_use]
    pub fn bottom_text(self, text: &str, align: TextAlign) -> Self {
        self.bottom(caption_text(text, align))
    }
}

pub(crate) fn caption_text(text: &str, align: TextAlign) -> Text {
    Text::new(text).whitespace(Whitespace::NORMAL).align(align)
}

/// Render `content` between `top` and `bottom`.
pub(crate) fn render_with_captions(
    cx: &RenderContext,
    width: usize,
    content: &dyn Widget,
    top: &dyn Widget,
    bottom: &dyn Widget,
) -> Lines {
    let caption_width = content.measure(cx, width).max.min(width);
    let body = content.render(cx, width);
    top.render(cx, caption_width)
        .concat_vertical(&body, false)
        .concat_vertical(&bottom.render(cx, caption_width), false)
}

impl Widget for Caption {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        self.content.measure(cx, width)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        render_with_captions(cx, width, &*self.content, &*self.top, &*self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rows;

    #[test]
    fn captions_center_over_content() {
        let caption = Caption::new(Text::new("content"))
            .top_text("top", TextAlign::Center)
            .bottom_text("b", TextAlign::Right);
        assert_eq!(rows(&caption, 20), vec!["  top  ", "content", "      b"]);
    }

    #[test]
    fn missing_captions_render_only_content() {
        let caption = Caption::new(Text::new("x"));
        assert_eq!(rows(&caption, 20), vec!["x"]);
    }

    #[test]
    fn long_captions_wrap_to_content() {
        let caption = Caption::new(Text::new("abcd")).top_text("aa bb", TextAlign::Left);
        assert_eq!(rows(&caption, 20), vec!["aa  ", "bb  ", "abcd"]);
    }
}
