#![forbid(unsafe_code)]

//! Alignment, whitespace and overflow settings shared by text and widgets.

/// Horizontal placement of content narrower than its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    /// Flush left, padded with trailing spaces in the line's end style.
    Left,
    /// Flush right.
    Right,
    /// Centered; an odd remainder goes to the right.
    Center,
    /// Stretch words to fill the line. Treated as `Center` outside of text.
    Justify,
    /// Flush left, with trailing padding left unstyled.
    #[default]
    None,
}

/// Vertical placement of content shorter than its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    /// Centered; an odd remainder goes to the top.
    Middle,
    Bottom,
}

/// How whitespace and line breaks in the source text are treated.
///
/// The presets mirror the CSS `white-space` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Whitespace {
    /// Replace line breaks with spaces.
    pub collapse_newlines: bool,
    /// Replace runs of whitespace with a single space.
    pub collapse_spaces: bool,
    /// Break lines at whitespace to fit the width.
    pub wrap: bool,
    /// Remove whitespace at the end of each line.
    pub trim_eol: bool,
}

impl Whitespace {
    /// Collapse everything and wrap.
    pub const NORMAL: Self = Self::new(true, true, true, true);
    /// Collapse everything onto a single line.
    pub const NOWRAP: Self = Self::new(true, true, false, true);
    /// Leave the text exactly as written.
    pub const PRE: Self = Self::new(false, false, false, false);
    /// Like `PRE`, but break long lines.
    pub const PRE_WRAP: Self = Self::new(false, false, true, true);
    /// Like `NORMAL`, but keep the source line breaks.
    pub const PRE_LINE: Self = Self::new(false, true, true, true);

    pub const fn new(collapse_newlines: bool, collapse_spaces: bool, wrap: bool, trim_eol: bool) -> Self {
        Self {
            collapse_newlines,
            collapse_spaces,
            wrap,
            trim_eol,
        }
    }
}

impl Default for Whitespace {
    fn default() -> Self {
        Self::PRE
    }
}

/// What to do with a single word wider than the line.
///
/// The variants mirror the CSS `overflow-wrap` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowWrap {
    /// Leave the word overflowing.
    #[default]
    Normal,
    /// Split the word across as many lines as it needs.
    BreakWord,
    /// Cut the word at the line width.
    Truncate,
    /// Cut the word one cell short and append `…`.
    Ellipses,
}
