#![forbid(unsafe_code)]

//! Text handling for tabula.
//!
//! This crate provides the text layer between raw strings and widgets:
//! - [`cell_width`] - terminal cell widths, including emoji sequences
//! - [`Span`], [`Line`], [`Lines`] - styled text runs and the rows built from them
//! - [`parse_text`] - ANSI-aware splitting of strings into styled words
//! - [`wrap`](mod@wrap) - whitespace modes, overflow policies and alignment
//! - geometry on [`Lines`]: `set_size`, `pad`, `concat_horizontal`, `concat_vertical`
//! - [`render_ansi`] - serialization back to a terminal string
//!
//! # Example
//! ```
//! use tabula_style::{ColorProfile, TextStyle};
//! use tabula_text::wrap::{wrap, WrapOptions};
//! use tabula_text::{TextAlign, Whitespace, parse_text, render_ansi};
//!
//! let text = parse_text("two words", &TextStyle::default());
//! let lines = wrap(
//!     &text,
//!     &WrapOptions::new(11)
//!         .whitespace(Whitespace::NORMAL)
//!         .align(TextAlign::Center),
//! );
//! assert_eq!(render_ansi(&lines, ColorProfile::Mono, false), " two words ");
//! ```

pub mod align;
pub mod cell_width;
mod compositor;
pub mod parse;
pub mod render;
pub mod span;
pub mod wrap;

pub use align::{OverflowWrap, TextAlign, VerticalAlign, Whitespace};
pub use cell_width::{char_width, str_width};
pub use parse::parse_text;
pub use render::{render_ansi, render_plain};
pub use span::{Line, Lines, Span};
pub use wrap::{DEFAULT_TAB_WIDTH, WrapOptions};
