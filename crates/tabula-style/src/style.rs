#![forbid(unsafe_code)]

//! Text style attributes with overlay composition.
//!
//! Every attribute of a [`TextStyle`] is optional. An unset attribute inherits
//! from whatever style it is merged over, so the default style is the identity
//! of [`TextStyle::merge`].
//!
//! # Example
//! ```
//! use tabula_style::{Ansi16, Color, StyleFlags, TextStyle};
//!
//! let base = TextStyle::new().fg(Color::Ansi16(Ansi16::Red)).bold();
//! let emphasis = TextStyle::new().fg(Color::Ansi16(Ansi16::Green)).italic();
//!
//! let merged = emphasis.merge(&base);
//! assert_eq!(merged.fg, Some(Color::Ansi16(Ansi16::Green)));
//! assert_eq!(merged.attr(StyleFlags::BOLD), Some(true));
//! assert_eq!(merged.attr(StyleFlags::ITALIC), Some(true));
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::{Color, ColorProfile};

bitflags::bitflags! {
    /// Boolean text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 0b0000_0001;
        const DIM           = 0b0000_0010;
        const ITALIC        = 0b0000_0100;
        const UNDERLINE     = 0b0000_1000;
        const INVERSE       = 0b0001_0000;
        const STRIKETHROUGH = 0b0010_0000;
    }
}

static NEXT_HYPERLINK_ID: AtomicU64 = AtomicU64::new(1);

/// An OSC 8 hyperlink target.
///
/// Terminals use the id to join separated regions of the same link (e.g. a
/// link wrapped across two lines) when highlighting on hover.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hyperlink {
    url: Arc<str>,
    id: Option<Arc<str>>,
}

impl Hyperlink {
    /// A link with a fresh id, unique within this process.
    #[must_use]
    pub fn new(url: impl Into<Arc<str>>) -> Self {
        let id = NEXT_HYPERLINK_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            url: url.into(),
            id: Some(id.to_string().into()),
        }
    }

    /// A link with an explicit id, or none.
    #[must_use]
    pub fn with_id(url: impl Into<Arc<str>>, id: Option<&str>) -> Self {
        Self {
            url: url.into(),
            id: id.map(Arc::from),
        }
    }

    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// An immutable set of optional text attributes.
///
/// Boolean attributes are tri-state: unset, explicitly on, or explicitly off.
/// Only `flags & mask` is meaningful; bits outside `mask` are always clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    /// Foreground color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Link target.
    pub hyperlink: Option<Hyperlink>,
    pub(crate) flags: StyleFlags,
    pub(crate) mask: StyleFlags,
}

impl TextStyle {
    /// The empty style.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            hyperlink: None,
            flags: StyleFlags::empty(),
            mask: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Use `other`'s foreground as this style's background.
    #[must_use]
    pub fn on(mut self, other: &TextStyle) -> Self {
        self.bg = other.fg;
        self
    }

    /// Move the foreground color to the background.
    #[must_use]
    pub fn as_background(mut self) -> Self {
        self.bg = self.fg.take();
        self
    }

    /// Link this style to `url` with a fresh id.
    #[must_use]
    pub fn hyperlink(mut self, url: impl Into<Arc<str>>) -> Self {
        self.hyperlink = Some(Hyperlink::new(url));
        self
    }

    /// Explicitly set (`true`) or clear (`false`) the given attributes.
    #[must_use]
    pub fn set(mut self, attrs: StyleFlags, on: bool) -> Self {
        self.flags.set(attrs, on);
        self.mask |= attrs;
        self
    }

    /// Return the given attribute to the unset state.
    #[must_use]
    pub fn unset(mut self, attrs: StyleFlags) -> Self {
        self.flags.remove(attrs);
        self.mask.remove(attrs);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.set(StyleFlags::BOLD, true)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.set(StyleFlags::DIM, true)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.set(StyleFlags::ITALIC, true)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.set(StyleFlags::UNDERLINE, true)
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        self.set(StyleFlags::INVERSE, true)
    }

    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.set(StyleFlags::STRIKETHROUGH, true)
    }

    /// Tri-state value of a single attribute.
    #[inline]
    #[must_use]
    pub fn attr(&self, attr: StyleFlags) -> Option<bool> {
        self.mask.contains(attr).then(|| self.flags.contains(attr))
    }

    /// Whether an attribute is on. Unset counts as off.
    #[inline]
    #[must_use]
    pub fn has(&self, attr: StyleFlags) -> bool {
        self.flags.contains(attr)
    }

    /// The attributes that are explicitly on.
    #[inline]
    #[must_use]
    pub const fn flags(&self) -> StyleFlags {
        self.flags
    }

    /// The attributes that are explicitly set, on or off.
    #[inline]
    #[must_use]
    pub const fn explicit_flags(&self) -> StyleFlags {
        self.mask
    }

    /// True when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.hyperlink.is_none() && self.mask.is_empty()
    }

    /// Combine with a parent style. Attributes set on `self` win; unset ones
    /// inherit from `parent`.
    #[must_use]
    pub fn merge(&self, parent: &TextStyle) -> TextStyle {
        if self.is_empty() {
            return parent.clone();
        }
        if parent.is_empty() {
            return self.clone();
        }
        let inherited = parent.mask - self.mask;
        TextStyle {
            fg: self.fg.or(parent.fg),
            bg: self.bg.or(parent.bg),
            hyperlink: self.hyperlink.clone().or_else(|| parent.hyperlink.clone()),
            flags: self.flags | (parent.flags & inherited),
            mask: self.mask | parent.mask,
        }
    }

    /// Reduce colors and drop what the terminal cannot show.
    ///
    /// [`ColorProfile::Mono`] yields the empty style.
    #[must_use]
    pub fn downsample(&self, profile: ColorProfile, hyperlinks: bool) -> TextStyle {
        if profile == ColorProfile::Mono {
            return TextStyle::new();
        }
        TextStyle {
            fg: self.fg.and_then(|c| c.downgrade(profile)),
            bg: self.bg.and_then(|c| c.downgrade(profile)),
            hyperlink: if hyperlinks {
                self.hyperlink.clone()
            } else {
                None
            },
            flags: self.flags,
            mask: self.mask,
        }
    }

    /// Wrap `text` in the escape sequences for this style.
    ///
    /// Escape sequences already inside `text` are re-emitted relative to this
    /// style; leading and trailing ones are absorbed.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        crate::ansi::apply_style(self, text)
    }
}

impl fmt::Display for StyleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Fold styles from most to least specific.
///
/// `None` entries are skipped. Returns `None` when every entry is `None`.
#[must_use]
pub fn fold_styles(styles: &[Option<&TextStyle>]) -> Option<TextStyle> {
    styles
        .iter()
        .flatten()
        .fold(None, |acc: Option<TextStyle>, next| match acc {
            None => Some((*next).clone()),
            Some(specific) => Some(specific.merge(next)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Ansi16;

    fn red() -> Color {
        Color::Ansi16(Ansi16::Red)
    }

    fn blue() -> Color {
        Color::Ansi16(Ansi16::Blue)
    }

    fn green() -> Color {
        Color::Ansi16(Ansi16::Green)
    }

    // ====================================================================
    // Attributes
    // ====================================================================

    #[test]
    fn default_style_has_nothing_set() {
        let s = TextStyle::default();
        assert!(s.is_empty());
        assert_eq!(s.attr(StyleFlags::BOLD), None);
        assert!(!s.has(StyleFlags::BOLD));
    }

    #[test]
    fn tri_state_flags() {
        let s = TextStyle::new().bold().set(StyleFlags::ITALIC, false);
        assert_eq!(s.attr(StyleFlags::BOLD), Some(true));
        assert_eq!(s.attr(StyleFlags::ITALIC), Some(false));
        assert_eq!(s.attr(StyleFlags::UNDERLINE), None);
        assert_eq!(s.explicit_flags(), StyleFlags::BOLD | StyleFlags::ITALIC);
        assert_eq!(s.flags(), StyleFlags::BOLD);
    }

    #[test]
    fn unset_clears_both_value_and_mask() {
        let s = TextStyle::new().bold().unset(StyleFlags::BOLD);
        assert_eq!(s, TextStyle::new());
    }

    #[test]
    fn on_and_as_background() {
        let s = TextStyle::new().fg(red()).on(&TextStyle::new().fg(blue()));
        assert_eq!(s.fg, Some(red()));
        assert_eq!(s.bg, Some(blue()));

        let bg = TextStyle::new().fg(red()).as_background();
        assert_eq!(bg.fg, None);
        assert_eq!(bg.bg, Some(red()));
    }

    // ====================================================================
    // Merge
    // ====================================================================

    #[test]
    fn merge_prefers_self_for_set_attributes() {
        let parent = TextStyle::new().fg(red()).bg(blue()).bold().italic();
        let child = TextStyle::new()
            .fg(green())
            .set(StyleFlags::ITALIC, false)
            .dim();
        let merged = child.merge(&parent);
        assert_eq!(merged.fg, Some(green()));
        assert_eq!(merged.bg, Some(blue()));
        assert_eq!(merged.attr(StyleFlags::BOLD), Some(true));
        assert_eq!(merged.attr(StyleFlags::ITALIC), Some(false));
        assert_eq!(merged.attr(StyleFlags::DIM), Some(true));
        assert_eq!(merged.attr(StyleFlags::UNDERLINE), None);
    }

    #[test]
    fn default_is_merge_identity() {
        let s = TextStyle::new().fg(red()).underline().hyperlink("https://example.com");
        assert_eq!(TextStyle::default().merge(&s), s);
        assert_eq!(s.merge(&TextStyle::default()), s);
    }

    #[test]
    fn merge_inherits_hyperlink() {
        let parent = TextStyle::new().hyperlink("https://a.example");
        let merged = TextStyle::new().bold().merge(&parent);
        assert_eq!(
            merged.hyperlink.as_ref().map(Hyperlink::url),
            Some("https://a.example")
        );
    }

    #[test]
    fn fold_styles_first_is_most_specific() {
        let cell = TextStyle::new().fg(red());
        let row = TextStyle::new().fg(blue()).bold();
        let table = TextStyle::new().bg(green());
        let folded = fold_styles(&[Some(&cell), None, Some(&row), Some(&table)])
            .expect("some styles");
        assert_eq!(folded.fg, Some(red()));
        assert_eq!(folded.bg, Some(green()));
        assert!(folded.has(StyleFlags::BOLD));
        assert_eq!(fold_styles(&[None, None]), None);
    }

    // ====================================================================
    // Hyperlinks and downsampling
    // ====================================================================

    #[test]
    fn hyperlink_ids_are_unique() {
        let a = Hyperlink::new("https://example.com");
        let b = Hyperlink::new("https://example.com");
        assert!(a.id().is_some());
        assert_ne!(a.id(), b.id());
        assert_eq!(Hyperlink::with_id("x", None).id(), None);
    }

    #[test]
    fn downsample_mono_is_empty() {
        let s = TextStyle::new().fg(Color::rgb(1, 2, 3)).bold();
        assert!(s.downsample(ColorProfile::Mono, true).is_empty());
    }

    #[test]
    fn downsample_drops_hyperlink_when_unsupported() {
        let s = TextStyle::new().fg(Color::rgb(255, 0, 0)).hyperlink("https://x.example");
        let d = s.downsample(ColorProfile::Ansi256, false);
        assert_eq!(d.fg, Some(Color::Ansi256(196)));
        assert_eq!(d.hyperlink, None);
        assert_eq!(s.downsample(ColorProfile::TrueColor, true), s);
    }

    #[test]
    fn flags_display() {
        let text = (StyleFlags::BOLD | StyleFlags::ITALIC).to_string();
        assert_eq!(text, "BOLD | ITALIC");
    }
}
