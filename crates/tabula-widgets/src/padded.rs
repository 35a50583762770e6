#![forbid(unsafe_code)]

//! Blank space around a widget.

use std::any::Any;
use std::sync::Arc;

use tabula_core::{Sides, WidthRange};
use tabula_text::Lines;

use crate::{RenderContext, Widget};

/// A widget surrounded by padding.
#[derive(Debug, Clone)]
pub struct Padded {
    content: Arc<dyn Widget>,
    padding: Sides,
    pad_empty_lines: bool,
}

impl Padded {
    /// Pad `content`. Padding a `Padded` merges the two paddings.
    pub fn new<W: Widget + 'static>(content: W, padding: Sides) -> Self {
        if let Some(inner) = (&content as &dyn Any).downcast_ref::<Padded>() {
            return Self {
                content: Arc::clone(&inner.content),
                padding: inner.padding + padding,
                pad_empty_lines: inner.pad_empty_lines,
            };
        }
        Self {
            content: Arc::new(content),
            padding,
            pad_empty_lines: true,
        }
    }

    /// Pad an already shared widget.
    pub fn shared(content: Arc<dyn Widget>, padding: Sides) -> Self {
        Self {
            content,
            padding,
            pad_empty_lines: true,
        }
    }

    /// Whether lines with no content still get left and right padding.
    #[must_use]
    pub fn pad_empty_lines(mut self, pad: bool) -> Self {
        self.pad_empty_lines = pad;
        self
    }

    pub fn padding(&self) -> Sides {
        self.padding
    }
}

impl Widget for Padded {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        let pw = self.padding.horizontal_sum();
        self.content.measure(cx, width.saturating_sub(pw)) + pw
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        let pw = self.padding.horizontal_sum();
        self.content
            .render(cx, width.saturating_sub(pw))
            .pad(self.padding, self.pad_empty_lines)
    }

    fn plain_text(&self, cx: &RenderContext) -> Option<String> {
        self.content.plain_text(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WidgetExt;
    use crate::test_support::rows;
    use crate::text::Text;

    #[test]
    fn uniform_padding() {
        let padded = Text::new("x").with_padding(Sides::all(1));
        assert_eq!(rows(&padded, 10), vec!["", " x ", ""]);
    }

    #[test]
    fn uneven_padding() {
        let padded = Text::new("x").with_padding(Sides::new(1, 2, 3, 4));
        assert_eq!(rows(&padded, 10), vec!["", "    x  ", "", "", ""]);
    }

    #[test]
    fn empty_lines_padded_by_default() {
        let padded = Text::new("x\n\ny").with_padding(Sides::all(1));
        assert_eq!(rows(&padded, 10), vec!["", " x ", "  ", " y ", ""]);
    }

    #[test]
    fn empty_lines_left_alone_on_request() {
        let padded = Text::new("x\n\ny")
            .with_padding(Sides::all(1))
            .pad_empty_lines(false);
        assert_eq!(rows(&padded, 10), vec!["", " x ", "", " y ", ""]);
    }

    #[test]
    fn nested_padding_merges() {
        let padded = Text::new("x")
            .with_padding(Sides::horizontal(1))
            .with_padding(Sides::new(0, 2, 0, 0));
        assert_eq!(padded.padding(), Sides::new(0, 3, 0, 1));
        assert_eq!(rows(&padded, 10), vec![" x   "]);
    }

    #[test]
    fn measure_adds_padding() {
        let cx = RenderContext::default();
        let padded = Text::new("abc").with_padding(Sides::horizontal(2));
        assert_eq!(padded.measure(&cx, 20), WidthRange::new(7, 7));
    }
}
