#![forbid(unsafe_code)]

//! ANSI SGR and OSC 8 style codec.
//!
//! Decoding turns escape sequences embedded in text into [`TextStyle`]
//! changes. Encoding emits the minimal sequence that moves a terminal from
//! one style to the next, so runs of spans that share an attribute never
//! close and reopen it.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Effect |
//! |----------|----------|--------|
//! | CSI | `ESC [ n ; n m` | SGR: colors and attributes |
//! | CSI | `ESC [ ... X` (other final byte) | ignored |
//! | OSC | `ESC ] 8 ; params ; url ST` | hyperlink (ST is `ESC \` or BEL) |
//! | OSC | any other | ignored |
//! | ESC | `ESC X` (DCS, APC, ...) | ignored |
//!
//! # Example
//! ```
//! use tabula_style::ansi::{self, Segment};
//! use tabula_style::{StyleFlags, TextStyle};
//!
//! let default = TextStyle::default();
//! let mut style = default.clone();
//! let mut plain = String::new();
//! for segment in ansi::segments("\x1b[1;31mhot\x1b[0m cold") {
//!     match segment {
//!         Segment::Text(text) => plain.push_str(text),
//!         Segment::Escape(seq) => style = ansi::update_style(&style, &default, seq),
//!     }
//! }
//! assert_eq!(plain, "hot cold");
//! assert!(!style.has(StyleFlags::BOLD));
//! ```

use std::fmt::{self, Write};

use smallvec::SmallVec;

use crate::color::{Ansi16, Color, ColorProfile, Rgb};
use crate::style::{Hyperlink, StyleFlags, TextStyle};

// =============================================================================
// Constants
// =============================================================================

/// The escape character.
pub const ESC: char = '\x1b';
/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Operating System Command.
pub const OSC: &str = "\x1b]";
/// String Terminator.
pub const ST: &str = "\x1b\\";
/// Alternate OSC terminator.
pub const BEL: char = '\x07';

/// SGR on/off pair for a boolean attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrCodes {
    pub on: u8,
    pub off: u8,
}

pub const SGR_BOLD: SgrCodes = SgrCodes { on: 1, off: 22 };
pub const SGR_DIM: SgrCodes = SgrCodes { on: 2, off: 22 };
pub const SGR_ITALIC: SgrCodes = SgrCodes { on: 3, off: 23 };
pub const SGR_UNDERLINE: SgrCodes = SgrCodes { on: 4, off: 24 };
pub const SGR_INVERSE: SgrCodes = SgrCodes { on: 7, off: 27 };
pub const SGR_STRIKETHROUGH: SgrCodes = SgrCodes { on: 9, off: 29 };

/// Legacy close code for bold alone.
const SGR_BOLD_OFF_ONLY: i64 = 21;
const SGR_RESET: i64 = 0;
const FG_SELECT: u8 = 38;
const BG_SELECT: u8 = 48;
const FG_DEFAULT: u8 = 39;
const BG_DEFAULT: u8 = 49;
const UNDERLINE_COLOR_SELECT: i64 = 58;
const SELECT_256: i64 = 5;
const SELECT_RGB: i64 = 2;
const BG_OFFSET: u8 = 10;

/// Attributes whose open and close codes are independent.
const SIMPLE_FLAGS: [(StyleFlags, SgrCodes); 4] = [
    (StyleFlags::ITALIC, SGR_ITALIC),
    (StyleFlags::UNDERLINE, SGR_UNDERLINE),
    (StyleFlags::INVERSE, SGR_INVERSE),
    (StyleFlags::STRIKETHROUGH, SGR_STRIKETHROUGH),
];

// =============================================================================
// Scanning
// =============================================================================

/// A piece of text split at escape sequence boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Printable text with no escape characters.
    Text(&'a str),
    /// One complete escape sequence, including the leading `ESC`.
    Escape(&'a str),
}

/// Split `text` into plain text and escape sequences.
///
/// An `ESC` that does not begin a recognizable sequence is returned as a
/// one-byte [`Segment::Escape`], so text segments never contain `ESC`.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        if rest.is_empty() {
            return None;
        }
        match memchr::memchr(0x1b, rest.as_bytes()) {
            Some(0) => {
                let len = sequence_len(rest.as_bytes());
                self.pos += len;
                Some(Segment::Escape(&rest[..len]))
            }
            Some(idx) => {
                self.pos += idx;
                Some(Segment::Text(&rest[..idx]))
            }
            None => {
                self.pos = self.text.len();
                Some(Segment::Text(rest))
            }
        }
    }
}

/// Byte length of the sequence at the start of `bytes`, which begins with ESC.
fn sequence_len(bytes: &[u8]) -> usize {
    match bytes.get(1) {
        Some(b']') => osc_len(bytes).unwrap_or(2),
        Some(b'[') => csi_len(bytes).unwrap_or(1),
        Some(0x40..=0x5a | 0x5c..=0x5f) => 2,
        _ => 1,
    }
}

fn osc_len(bytes: &[u8]) -> Option<usize> {
    let body = &bytes[2..];
    let end = memchr::memchr2(0x1b, 0x07, body)?;
    match body[end] {
        0x07 => Some(2 + end + 1),
        _ if body.get(end + 1) == Some(&b'\\') => Some(2 + end + 2),
        _ => None,
    }
}

fn csi_len(bytes: &[u8]) -> Option<usize> {
    let mut i = 2;
    while matches!(bytes.get(i), Some(0x30..=0x3f)) {
        i += 1;
    }
    while matches!(bytes.get(i), Some(0x20..=0x2f)) {
        i += 1;
    }
    match bytes.get(i) {
        Some(0x40..=0x7e) => Some(i + 1),
        _ => None,
    }
}

/// Remove every escape sequence from `text`.
#[must_use]
pub fn strip(text: &str) -> String {
    segments(text)
        .filter_map(|segment| match segment {
            Segment::Text(t) => Some(t),
            Segment::Escape(_) => None,
        })
        .collect()
}

// =============================================================================
// Decoding
// =============================================================================

/// Apply one escape sequence to `existing`.
///
/// Resets restore attributes from `default`. Sequences other than SGR and
/// OSC 8 return `existing` unchanged. A malformed SGR tail stops parsing and
/// keeps what was resolved before it.
#[must_use]
pub fn update_style(existing: &TextStyle, default: &TextStyle, seq: &str) -> TextStyle {
    if let Some(body) = seq.strip_prefix(OSC) {
        update_from_osc(body, existing, default)
    } else if let Some(body) = seq.strip_prefix(CSI) {
        update_from_sgr(body, existing, default)
    } else {
        existing.clone()
    }
}

fn update_from_osc(body: &str, existing: &TextStyle, default: &TextStyle) -> TextStyle {
    let body = body
        .strip_suffix(ST)
        .or_else(|| body.strip_suffix(BEL))
        .unwrap_or(body);
    let Some(params) = body.strip_prefix('8') else {
        return existing.clone();
    };
    let params: SmallVec<[&str; 4]> = params.split(';').collect();
    let url = params.last().copied().unwrap_or_default();

    let mut style = existing.clone();
    style.hyperlink = if url.trim().is_empty() {
        default.hyperlink.clone()
    } else {
        let id = params.iter().find_map(|p| p.strip_prefix("id="));
        Some(Hyperlink::with_id(url, id))
    };
    style
}

fn update_from_sgr(body: &str, existing: &TextStyle, default: &TextStyle) -> TextStyle {
    let Some(params) = body.strip_suffix('m') else {
        return existing.clone();
    };
    let codes: SmallVec<[i64; 8]> = params
        .split(';')
        .filter_map(|p| if p.is_empty() { Some(0) } else { p.parse().ok() })
        .collect();
    if codes.is_empty() {
        return default.clone();
    }

    let restore = |style: TextStyle, attrs: StyleFlags| {
        attrs.iter().fold(style, |s, attr| {
            s.set(attr, default.attr(attr).unwrap_or(false))
        })
    };

    let mut style = existing.clone();
    let mut i = 0;
    while i < codes.len() {
        let code = codes[i];
        match code {
            SGR_RESET => {
                let link = style.hyperlink.take();
                style = default.clone();
                style.hyperlink = link;
            }
            SGR_BOLD_OFF_ONLY => style = restore(style, StyleFlags::BOLD),
            22 => style = restore(style, StyleFlags::BOLD | StyleFlags::DIM),
            23 => style = restore(style, StyleFlags::ITALIC),
            24 => style = restore(style, StyleFlags::UNDERLINE),
            27 => style = restore(style, StyleFlags::INVERSE),
            29 => style = restore(style, StyleFlags::STRIKETHROUGH),
            39 => style.fg = default.fg,
            49 => style.bg = default.bg,
            30..=37 | 90..=97 => style.fg = Some(Color::Ansi16(ansi16_from_code(code))),
            40..=47 | 100..=107 => style.bg = Some(Color::Ansi16(ansi16_from_code(code - 10))),
            38 | 48 => {
                let Some((color, consumed)) = extended_color(&codes[i + 1..]) else {
                    tracing::trace!(code, "malformed extended color; ignoring rest of sequence");
                    break;
                };
                if code == 38 {
                    style.fg = Some(color);
                } else {
                    style.bg = Some(color);
                }
                i += consumed;
            }
            1 => style = style.bold(),
            2 => style = style.dim(),
            3 => style = style.italic(),
            4 => style = style.underline(),
            7 => style = style.inverse(),
            9 => style = style.strikethrough(),
            UNDERLINE_COLOR_SELECT => match codes.get(i + 1) {
                None => {}
                Some(&SELECT_256) => i += 2,
                Some(&SELECT_RGB) => i += 4,
                Some(_) => {
                    tracing::trace!(code, "unknown underline color selector");
                    break;
                }
            },
            _ => {}
        }
        i += 1;
    }
    style
}

fn ansi16_from_code(code: i64) -> Ansi16 {
    let index = match code {
        30..=37 => code - 30,
        90..=97 => code - 90 + 8,
        _ => 0,
    };
    u8::try_from(index)
        .ok()
        .and_then(Ansi16::from_index)
        .unwrap_or(Ansi16::Black)
}

/// Parse the parameters after a 38/48 selector. Returns the color and the
/// number of parameters consumed.
fn extended_color(params: &[i64]) -> Option<(Color, usize)> {
    let channel = |i: usize| params.get(i).and_then(|&v| u8::try_from(v).ok());
    match params.first()? {
        &SELECT_256 => Some((Color::Ansi256(channel(1)?), 2)),
        &SELECT_RGB => Some((Color::Rgb(Rgb::new(channel(1)?, channel(2)?, channel(3)?)), 4)),
        _ => None,
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Write the sequences that change the terminal from `old` to `new`.
///
/// Only attributes that differ are emitted. Unset flags count as off.
pub fn write_transition<W: Write>(w: &mut W, old: &TextStyle, new: &TextStyle) -> fmt::Result {
    if old == new {
        return Ok(());
    }
    let mut codes: SmallVec<[u8; 16]> = SmallVec::new();

    if old.fg != new.fg {
        push_color(&mut codes, new.fg, FG_SELECT, FG_DEFAULT, 0);
    }
    if old.bg != new.bg {
        push_color(&mut codes, new.bg, BG_SELECT, BG_DEFAULT, BG_OFFSET);
    }

    // Bold and dim share a close code, so closing either one closes both.
    let (old_bold, new_bold) = (old.has(StyleFlags::BOLD), new.has(StyleFlags::BOLD));
    let (old_dim, new_dim) = (old.has(StyleFlags::DIM), new.has(StyleFlags::DIM));
    if (old_bold && !new_bold) || (old_dim && !new_dim) {
        codes.push(SGR_BOLD.off);
        if new_bold {
            codes.push(SGR_BOLD.on);
        }
        if new_dim {
            codes.push(SGR_DIM.on);
        }
    } else {
        if new_bold && !old_bold {
            codes.push(SGR_BOLD.on);
        }
        if new_dim && !old_dim {
            codes.push(SGR_DIM.on);
        }
    }

    for (attr, sgr) in SIMPLE_FLAGS {
        match (old.has(attr), new.has(attr)) {
            (false, true) => codes.push(sgr.on),
            (true, false) => codes.push(sgr.off),
            _ => {}
        }
    }

    if !codes.is_empty() {
        w.write_str(CSI)?;
        for (i, code) in codes.iter().enumerate() {
            if i > 0 {
                w.write_char(';')?;
            }
            write!(w, "{code}")?;
        }
        w.write_char('m')?;
    }

    if link_key(old) != link_key(new) {
        match &new.hyperlink {
            Some(link) => hyperlink_start(w, link)?,
            None => hyperlink_end(w)?,
        }
    }
    Ok(())
}

fn link_key(style: &TextStyle) -> Option<(&str, Option<&str>)> {
    style.hyperlink.as_ref().map(|link| (link.url(), link.id()))
}

/// [`write_transition`] into a new string.
#[must_use]
pub fn transition(old: &TextStyle, new: &TextStyle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_transition(&mut out, old, new);
    out
}

/// Sequences that open `style` from the default state, after downsampling
/// colors to `profile`.
#[must_use]
pub fn encode(style: &TextStyle, profile: ColorProfile) -> String {
    transition(&TextStyle::default(), &style.downsample(profile, true))
}

fn push_color(codes: &mut SmallVec<[u8; 16]>, color: Option<Color>, select: u8, reset: u8, offset: u8) {
    match color {
        None => codes.push(reset),
        Some(Color::Ansi16(c)) if c.is_bright() => codes.push(90 + offset + c.index() - 8),
        Some(Color::Ansi16(c)) => codes.push(30 + offset + c.index()),
        Some(Color::Ansi256(idx)) => codes.extend([select, SELECT_256 as u8, idx]),
        Some(Color::Rgb(rgb)) => codes.extend([select, SELECT_RGB as u8, rgb.r, rgb.g, rgb.b]),
    }
}

/// Open an OSC 8 hyperlink: `OSC 8 ; id=ID ; url ST`.
pub fn hyperlink_start<W: Write>(w: &mut W, link: &Hyperlink) -> fmt::Result {
    match link.id() {
        Some(id) => write!(w, "{OSC}8;id={id};{}{ST}", link.url()),
        None => write!(w, "{OSC}8;;{}{ST}", link.url()),
    }
}

/// Close an OSC 8 hyperlink: `OSC 8 ; ; ST`.
pub fn hyperlink_end<W: Write>(w: &mut W) -> fmt::Result {
    write!(w, "{OSC}8;;{ST}")
}

/// Wrap already-styled `text` in `style`.
///
/// A sequence at the very start of `text` is folded into the opening tag and
/// one at the very end is dropped, since the closing tag resets everything.
pub(crate) fn apply_style(style: &TextStyle, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let default = TextStyle::default();
    let mut open = style.clone();
    let mut current = style.clone();
    let mut inner = String::with_capacity(text.len());
    let mut pos = 0;
    for segment in segments(text) {
        let start = pos;
        match segment {
            Segment::Text(t) => {
                pos += t.len();
                inner.push_str(t);
            }
            Segment::Escape(seq) => {
                pos += seq.len();
                if pos == text.len() {
                    continue;
                }
                let next = update_style(&current, style, seq);
                if start == 0 {
                    open = next.clone();
                } else {
                    // Writing into a String cannot fail.
                    let _ = write_transition(&mut inner, &current, &next);
                }
                current = next;
            }
        }
    }
    let mut out = transition(&default, &open);
    out.push_str(&inner);
    // Writing into a String cannot fail.
    let _ = write_transition(&mut out, &current, &default);
    out
}
