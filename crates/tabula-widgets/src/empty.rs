#![forbid(unsafe_code)]

//! Widgets that draw nothing.

use std::sync::Arc;

use tabula_core::WidthRange;
use tabula_style::TextStyle;
use tabula_text::{Line, Lines, Span};

use crate::{RenderContext, Widget};

/// Takes no space and renders no lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyWidget;

impl Widget for EmptyWidget {
    fn measure(&self, _cx: &RenderContext, _width: usize) -> WidthRange {
        WidthRange::ZERO
    }

    fn render(&self, _cx: &RenderContext, _width: usize) -> Lines {
        Lines::empty()
    }

    fn plain_text(&self, _cx: &RenderContext) -> Option<String> {
        Some(String::new())
    }
}

/// Occupies the same space as another widget, filled with blanks.
#[derive(Debug, Clone)]
pub struct BlankWidgetWrapper {
    content: Arc<dyn Widget>,
}

impl BlankWidgetWrapper {
    pub fn new(content: impl Widget + 'static) -> Self {
        Self::shared(Arc::new(content))
    }

    pub fn shared(content: Arc<dyn Widget>) -> Self {
        Self { content }
    }
}

impl Widget for BlankWidgetWrapper {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        self.content.measure(cx, width)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        self.content
            .render(cx, width)
            .iter()
            .map(|line| match line.width() {
                0 => Line::default(),
                w => Line::new(vec![Span::space(w, TextStyle::default())]),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rows;
    use crate::text::Text;

    #[test]
    fn empty_widget_is_empty() {
        let cx = RenderContext::default();
        assert_eq!(EmptyWidget.measure(&cx, 10), WidthRange::ZERO);
        assert!(EmptyWidget.render(&cx, 10).is_empty());
    }

    #[test]
    fn blank_wrapper_keeps_shape() {
        let blank = BlankWidgetWrapper::new(Text::new("abc\n\nde"));
        assert_eq!(rows(&blank, 10), vec!["   ", "", "  "]);
        let cx = RenderContext::default();
        assert_eq!(blank.measure(&cx, 10), WidthRange::new(3, 3));
    }
}
