#![forbid(unsafe_code)]

//! Named styles, strings, flags and dimensions that widgets resolve their
//! defaults from.
//!
//! Widgets never hardcode their look. A list bullet, for example, asks the
//! theme for `list.bullet.text` unless the caller set one explicitly. Swapping
//! the theme restyles every widget at once.
//!
//! # Example
//! ```
//! use tabula_style::theme::{Theme, ThemeValue};
//!
//! let ascii = Theme::plain_ascii();
//! assert_eq!(ascii.string("list.bullet.text"), Some("*"));
//!
//! let custom = Theme::default().derive().string("hr.rule", "=").build();
//! let rule: ThemeValue<String> = ThemeValue::of("hr.rule", None);
//! assert_eq!(rule.resolve(&custom), "=");
//! ```

use std::collections::HashMap;

use crate::color::{Color, Rgb};
use crate::style::TextStyle;

const GREEN: Color = Color::Rgb(Rgb::new(0x98, 0xc3, 0x79));
const RED: Color = Color::Rgb(Rgb::new(0xe0, 0x6c, 0x75));
const YELLOW: Color = Color::Rgb(Rgb::new(0xe5, 0xc0, 0x7b));
const BLUE: Color = Color::Rgb(Rgb::new(0x61, 0xaf, 0xef));

/// A set of keyed rendering defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    styles: HashMap<String, TextStyle>,
    strings: HashMap<String, String>,
    flags: HashMap<String, bool>,
    dimensions: HashMap<String, usize>,
}

impl Default for Theme {
    fn default() -> Self {
        let styles = [
            ("success", TextStyle::new().fg(GREEN)),
            ("danger", TextStyle::new().fg(RED)),
            ("warning", TextStyle::new().fg(YELLOW)),
            ("info", TextStyle::new().fg(BLUE)),
            ("muted", TextStyle::new().dim()),
            ("list.number", TextStyle::new()),
            ("list.bullet", TextStyle::new()),
            ("hr.rule", TextStyle::new()),
            ("panel.border", TextStyle::new()),
        ];
        let strings = [
            ("list.number.separator", "."),
            ("list.bullet.text", "•"),
            ("hr.rule", "─"),
        ];
        let dimensions = [("hr.title.padding", 1), ("panel.title.padding", 1)];

        Self {
            styles: styles
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
            strings: strings
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
            flags: HashMap::new(),
            dimensions: dimensions
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        }
    }
}

impl Theme {
    /// The default theme's characters with no colors or text attributes.
    #[must_use]
    pub fn plain() -> Self {
        let mut theme = Self::default();
        theme.styles.clear();
        theme
    }

    /// Like [`plain`](Self::plain), restricted to ASCII characters.
    #[must_use]
    pub fn plain_ascii() -> Self {
        Self::plain()
            .derive()
            .string("list.number.separator", ".")
            .string("list.bullet.text", "*")
            .string("hr.rule", "-")
            .build()
    }

    /// Start a new theme from a copy of this one.
    #[must_use]
    pub fn derive(&self) -> ThemeBuilder {
        ThemeBuilder {
            theme: self.clone(),
        }
    }

    /// Look up a named style.
    #[must_use]
    pub fn style(&self, key: &str) -> Option<&TextStyle> {
        self.styles.get(key)
    }

    /// Look up a named style, falling back to the empty style.
    #[must_use]
    pub fn style_or_default(&self, key: &str) -> TextStyle {
        self.style(key).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    #[must_use]
    pub fn dimension(&self, key: &str) -> Option<usize> {
        self.dimensions.get(key).copied()
    }

    pub fn success(&self) -> TextStyle {
        self.style_or_default("success")
    }

    pub fn danger(&self) -> TextStyle {
        self.style_or_default("danger")
    }

    pub fn warning(&self) -> TextStyle {
        self.style_or_default("warning")
    }

    pub fn info(&self) -> TextStyle {
        self.style_or_default("info")
    }

    pub fn muted(&self) -> TextStyle {
        self.style_or_default("muted")
    }
}

/// Builder returned by [`Theme::derive`].
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    #[must_use]
    pub fn style(mut self, key: impl Into<String>, style: TextStyle) -> Self {
        self.theme.styles.insert(key.into(), style);
        self
    }

    #[must_use]
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.theme.strings.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.theme.flags.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn dimension(mut self, key: impl Into<String>, value: usize) -> Self {
        self.theme.dimensions.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}

/// A value type that can be stored in a [`Theme`].
pub trait ThemeLookup: Clone + Default {
    /// Fetch `key` from the map for this type.
    fn lookup(theme: &Theme, key: &str) -> Option<Self>;
}

impl ThemeLookup for TextStyle {
    fn lookup(theme: &Theme, key: &str) -> Option<Self> {
        theme.style(key).cloned()
    }
}

impl ThemeLookup for String {
    fn lookup(theme: &Theme, key: &str) -> Option<Self> {
        theme.string(key).map(str::to_owned)
    }
}

impl ThemeLookup for bool {
    fn lookup(theme: &Theme, key: &str) -> Option<Self> {
        theme.flag(key)
    }
}

impl ThemeLookup for usize {
    fn lookup(theme: &Theme, key: &str) -> Option<Self> {
        theme.dimension(key)
    }
}

/// A widget setting that is either explicit or read from the theme.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValue<T> {
    /// Read `key` from the theme at render time; missing keys yield `T::default()`.
    Default(&'static str),
    /// A caller-provided value that ignores the theme.
    Explicit(T),
}

impl<T: ThemeLookup> ThemeValue<T> {
    /// `Explicit(v)` when `explicit` is set, otherwise `Default(key)`.
    pub fn of(key: &'static str, explicit: Option<T>) -> Self {
        match explicit {
            Some(value) => Self::Explicit(value),
            None => Self::Default(key),
        }
    }

    /// Resolve against `theme`.
    #[must_use]
    pub fn resolve(&self, theme: &Theme) -> T {
        match self {
            Self::Default(key) => T::lookup(theme, key).unwrap_or_default(),
            Self::Explicit(value) => value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleFlags;

    #[test]
    fn default_theme_keys() {
        let theme = Theme::default();
        assert_eq!(theme.string("list.number.separator"), Some("."));
        assert_eq!(theme.string("list.bullet.text"), Some("•"));
        assert_eq!(theme.string("hr.rule"), Some("─"));
        assert_eq!(theme.dimension("hr.title.padding"), Some(1));
        assert_eq!(theme.dimension("panel.title.padding"), Some(1));
        assert_eq!(theme.success().fg, Some(GREEN));
        assert_eq!(theme.danger().fg, Some(RED));
        assert!(theme.muted().has(StyleFlags::DIM));
        assert_eq!(theme.style("panel.border"), Some(&TextStyle::new()));
    }

    #[test]
    fn plain_has_no_styles_but_keeps_strings() {
        let theme = Theme::plain();
        assert_eq!(theme.style("success"), None);
        assert!(theme.success().is_empty());
        assert_eq!(theme.string("list.bullet.text"), Some("•"));
    }

    #[test]
    fn plain_ascii_swaps_glyphs() {
        let theme = Theme::plain_ascii();
        assert_eq!(theme.string("list.bullet.text"), Some("*"));
        assert_eq!(theme.string("hr.rule"), Some("-"));
        assert_eq!(theme.style("info"), None);
    }

    #[test]
    fn derive_overrides_without_touching_source() {
        let base = Theme::default();
        let derived = base.derive().dimension("hr.title.padding", 3).flag("x", true).build();
        assert_eq!(derived.dimension("hr.title.padding"), Some(3));
        assert_eq!(derived.flag("x"), Some(true));
        assert_eq!(base.dimension("hr.title.padding"), Some(1));
        assert_eq!(base.flag("x"), None);
    }

    #[test]
    fn theme_value_resolution() {
        let theme = Theme::default();
        let explicit = ThemeValue::of("list.bullet.text", Some("-".to_owned()));
        assert_eq!(explicit.resolve(&theme), "-");
        let themed: ThemeValue<String> = ThemeValue::of("list.bullet.text", None);
        assert_eq!(themed.resolve(&theme), "•");
        let missing: ThemeValue<usize> = ThemeValue::Default("no.such.key");
        assert_eq!(missing.resolve(&theme), 0);
    }
}
