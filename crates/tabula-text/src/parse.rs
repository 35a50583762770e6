#![forbid(unsafe_code)]

//! Turning a string that may contain ANSI escape sequences into [`Lines`].
//!
//! Escape sequences are removed and folded into each span's [`TextStyle`].
//! Text is split into words, whitespace runs and line breaks so every span
//! satisfies the [`Span`] invariants.
//!
//! # Example
//! ```
//! use tabula_style::{StyleFlags, TextStyle};
//! use tabula_text::parse_text;
//!
//! let lines = parse_text("plain \x1b[1mbold\x1b[22m\nnext", &TextStyle::default());
//! assert_eq!(lines.height(), 2);
//! let bold = &lines.lines()[0].spans()[2];
//! assert_eq!(bold.text(), "bold");
//! assert!(bold.style().has(StyleFlags::BOLD));
//! ```

use tabula_style::TextStyle;
use tabula_style::ansi::{Segment, segments, update_style};
use tracing::trace;

use crate::span::{Line, Lines, Span};

pub(crate) const NEL: char = '\u{85}';
pub(crate) const LS: char = '\u{2028}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkKind {
    /// Carriage returns, which have no effect on layout.
    Return,
    /// A character that always forms a chunk of its own.
    Break,
    Space,
    Word,
}

impl ChunkKind {
    fn of(c: char) -> Self {
        match c {
            '\r' => Self::Return,
            '\n' | '\t' | NEL | LS => Self::Break,
            c if c.is_whitespace() => Self::Space,
            _ => Self::Word,
        }
    }
}

#[derive(Debug)]
struct Chunk<'a> {
    text: &'a str,
    kind: ChunkKind,
    style: TextStyle,
}

/// Split `text` into styled lines.
///
/// Every span starts from `default_style`; SGR and OSC 8 sequences update the
/// style from there and resets return to it. Other escape sequences are
/// dropped. Each line's end style is the style in effect at its line break, and
/// a trailing `\n` produces a final empty line.
#[must_use]
pub fn parse_text(text: &str, default_style: &TextStyle) -> Lines {
    let mut chunks = Vec::new();
    let mut style = default_style.clone();
    for segment in segments(text) {
        match segment {
            Segment::Text(t) => split_words(t, &style, &mut chunks),
            Segment::Escape(seq) => {
                let next = update_style(&style, default_style, seq);
                if next == style {
                    trace!(sequence = ?seq, "escape sequence has no style effect");
                }
                style = next;
            }
        }
    }
    let lines = split_lines(chunks);
    trace!(bytes = text.len(), lines = lines.height(), "parsed text");
    lines
}

fn split_words<'a>(text: &'a str, style: &TextStyle, out: &mut Vec<Chunk<'a>>) {
    let mut start = 0;
    let mut current: Option<ChunkKind> = None;
    for (idx, c) in text.char_indices() {
        let kind = ChunkKind::of(c);
        match current {
            None => current = Some(kind),
            Some(prev) if kind == ChunkKind::Break || prev != kind => {
                push_chunk(&text[start..idx], prev, style, out);
                start = idx;
                current = Some(kind);
            }
            Some(_) => {}
        }
    }
    if let Some(kind) = current {
        push_chunk(&text[start..], kind, style, out);
    }
}

fn push_chunk<'a>(text: &'a str, kind: ChunkKind, style: &TextStyle, out: &mut Vec<Chunk<'a>>) {
    if kind != ChunkKind::Return {
        out.push(Chunk {
            text,
            kind,
            style: style.clone(),
        });
    }
}

fn split_lines(chunks: Vec<Chunk<'_>>) -> Lines {
    let mut lines = Lines::empty();
    let mut line = Vec::new();
    let mut trailing_break = None;

    for chunk in chunks {
        if chunk.kind == ChunkKind::Break && chunk.text == "\n" {
            lines.push(Line::with_end_style(std::mem::take(&mut line), chunk.style.clone()));
            trailing_break = Some(chunk.style);
        } else {
            line.push(Span::word(chunk.text, chunk.style));
            trailing_break = None;
        }
    }

    if !line.is_empty() {
        lines.push(Line::new(line));
    }
    if let Some(style) = trailing_break {
        lines.push(Line::empty(style));
    }
    lines
}
