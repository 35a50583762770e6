#![forbid(unsafe_code)]

//! Style: colors, text attributes, the ANSI codec, and themes.

pub mod ansi;
pub mod color;
pub mod style;
pub mod theme;

pub use color::{Ansi16, Color, ColorProfile, Rgb};
pub use style::{Hyperlink, StyleFlags, TextStyle, fold_styles};
pub use theme::{Theme, ThemeBuilder, ThemeLookup, ThemeValue};
