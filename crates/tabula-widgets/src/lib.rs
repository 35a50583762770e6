#![forbid(unsafe_code)]

//! Widgets for tabula.
//!
//! Every layout node implements [`Widget`]: a two-pass contract where the
//! parent first asks how wide the child wants to be ([`Widget::measure`]) and
//! then asks it to draw itself at a chosen width ([`Widget::render`]). Both
//! calls are pure, so a widget tree can be rendered any number of times, from
//! any thread.
//!
//! # Example
//! ```
//! use tabula_widgets::{Panel, RenderContext, Text, Widget};
//!
//! let panel = Panel::new(Text::new("hello"));
//! let cx = RenderContext::default();
//! let lines = panel.render(&cx, 20);
//! assert_eq!(lines.to_plain_text(), "╭─────╮\n│hello│\n╰─────╯");
//! ```

pub mod borders;
pub mod caption;
pub mod empty;
pub mod list;
pub mod padded;
pub mod panel;
pub mod rule;
pub mod table;
pub mod text;
pub mod vertical;
pub mod viewport;

use std::fmt;
use std::sync::Arc;

use tabula_core::{Sides, WidthRange};
use tabula_style::Theme;
use tabula_text::{DEFAULT_TAB_WIDTH, Lines};

pub use borders::{BorderGlyphSet, BorderType, Borders};
pub use caption::Caption;
pub use empty::{BlankWidgetWrapper, EmptyWidget};
pub use list::{OrderedList, UnorderedList};
pub use padded::Padded;
pub use panel::Panel;
pub use rule::HorizontalRule;
pub use table::{
    CellBuilder, CellContent, CellStyle, CellStyleBuilder, ColumnBuilder, ColumnWidth, CsvOptions,
    CsvQuoting, RowBuilder, SectionBuilder, Table, TableBuilder, grid,
};
pub use text::Text;
pub use vertical::{VerticalLayout, VerticalLayoutBuilder};
pub use viewport::{Crop, Viewport};

/// Settings shared by every widget in a render pass.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Source of default styles, strings and dimensions.
    pub theme: Arc<Theme>,
    /// Distance between tab stops for text that does not set its own.
    pub tab_width: usize,
}

impl RenderContext {
    pub fn new(theme: impl Into<Arc<Theme>>) -> Self {
        Self {
            theme: theme.into(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// A node in a layout tree.
///
/// Implementations must not render wider than the width they are given, and
/// `measure(cx, w).min <= measure(cx, w).max` must hold for every `w`.
pub trait Widget: Send + Sync + fmt::Debug {
    /// The narrowest width this widget can use without loss, and the width it
    /// would use if unconstrained, both bounded by `width`.
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange;

    /// Lay out at `width` cells.
    fn render(&self, cx: &RenderContext, width: usize) -> Lines;

    /// The unwrapped, unaligned text this widget shows, if it is purely text.
    ///
    /// Used for exporting content; widgets without a textual form return `None`.
    fn plain_text(&self, _cx: &RenderContext) -> Option<String> {
        None
    }
}

impl<W: Widget + ?Sized> Widget for Arc<W> {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        (**self).measure(cx, width)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        (**self).render(cx, width)
    }

    fn plain_text(&self, cx: &RenderContext) -> Option<String> {
        (**self).plain_text(cx)
    }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn measure(&self, cx: &RenderContext, width: usize) -> WidthRange {
        (**self).measure(cx, width)
    }

    fn render(&self, cx: &RenderContext, width: usize) -> Lines {
        (**self).render(cx, width)
    }

    fn plain_text(&self, cx: &RenderContext) -> Option<String> {
        (**self).plain_text(cx)
    }
}

/// Convenience adapters available on every sized widget.
pub trait WidgetExt: Widget + Sized + 'static {
    /// Surround with blank space. Padding an already padded widget adds the
    /// paddings together instead of nesting.
    fn with_padding(self, padding: Sides) -> Padded {
        Padded::new(self, padding)
    }

    /// Share this widget behind an `Arc`.
    fn into_shared(self) -> Arc<dyn Widget> {
        Arc::new(self)
    }
}

impl<W: Widget + Sized + 'static> WidgetExt for W {}

/// Widest range over `widgets` measured at `width - padding`, plus `padding`.
pub(crate) fn max_width_range<'a, I>(
    widgets: I,
    cx: &RenderContext,
    width: usize,
    padding: usize,
) -> WidthRange
where
    I: IntoIterator<Item = &'a Arc<dyn Widget>>,
{
    let inner = width.saturating_sub(padding);
    WidthRange::max_of(widgets.into_iter().map(|w| Some(w.measure(cx, inner))), padding)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tabula_style::ColorProfile;

    pub fn plain(widget: &dyn Widget, width: usize) -> String {
        widget.render(&RenderContext::default(), width).to_plain_text()
    }

    pub fn ansi(widget: &dyn Widget, cx: &RenderContext, width: usize) -> String {
        tabula_text::render_ansi(&widget.render(cx, width), ColorProfile::TrueColor, true)
    }

    pub fn rows(widget: &dyn Widget, width: usize) -> Vec<String> {
        widget
            .render(&RenderContext::default(), width)
            .iter()
            .map(|l| l.to_plain_text())
            .collect()
    }
}
