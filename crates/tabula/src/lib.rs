#![forbid(unsafe_code)]

//! Tabula public facade crate.
//!
//! Re-exports the styling, text and widget layers and adds a [`Renderer`]
//! that turns any widget into a printable string.
//!
//! # Example
//! ```
//! use tabula::prelude::*;
//!
//! let table = TableBuilder::new()
//!     .header(SectionBuilder::new().row(["name", "size"]))
//!     .row(["a.txt", "12"])
//!     .build()
//!     .expect("no overlapping spans");
//! let out = Renderer::new(RenderConfig::default().width(40)).render_plain(&table);
//! assert_eq!(
//!     out,
//!     "┌───────┬──────┐\n│ name  │ size │\n├───────┼──────┤\n│ a.txt │ 12   │\n└───────┴──────┘"
//! );
//! ```

mod renderer;

pub use renderer::{DEFAULT_WIDTH, RenderConfig, Renderer};

// --- Core re-exports -------------------------------------------------------

pub use tabula_core::{Error, Result, Sides, WidthRange};

// --- Style re-exports ------------------------------------------------------

pub use tabula_style::{
    Ansi16, Color, ColorProfile, Hyperlink, Rgb, StyleFlags, TextStyle, Theme, ThemeBuilder,
    ThemeValue, fold_styles,
};

// --- Text re-exports -------------------------------------------------------

pub use tabula_text::{
    Line, Lines, OverflowWrap, Span, TextAlign, VerticalAlign, Whitespace, parse_text, render_ansi,
    render_plain, str_width,
};

// --- Widget re-exports -----------------------------------------------------

pub use tabula_widgets::{
    BlankWidgetWrapper, BorderType, Borders, Caption, CellBuilder, CellContent, CellStyle,
    CellStyleBuilder, ColumnBuilder, ColumnWidth, Crop, CsvOptions, CsvQuoting, EmptyWidget,
    HorizontalRule, OrderedList, Padded, Panel, RenderContext, RowBuilder, SectionBuilder, Table,
    TableBuilder, Text, UnorderedList, VerticalLayout, VerticalLayoutBuilder, Viewport, Widget,
    WidgetExt, grid,
};

/// Internal crates, for APIs not re-exported above.
pub mod crates {
    pub use tabula_core as core;
    pub use tabula_style as style;
    pub use tabula_text as text;
    pub use tabula_widgets as widgets;
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Borders, BorderType, CellBuilder, CellStyleBuilder, ColorProfile, ColumnBuilder,
        ColumnWidth, HorizontalRule, Panel, RenderConfig, RenderContext, Renderer, RowBuilder,
        SectionBuilder, Sides, Table, TableBuilder, Text, TextAlign, TextStyle, Theme,
        VerticalAlign, Whitespace, Widget, WidgetExt,
    };
}
