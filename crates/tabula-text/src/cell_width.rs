#![forbid(unsafe_code)]

//! Terminal cell width of codepoints and strings.
//!
//! Widths come from a range table generated from the Unicode East Asian Width
//! and General Category data. Strings additionally recognize multi-codepoint
//! emoji sequences (skin tones, ZWJ families, ...) which terminals draw as a
//! single two-cell glyph.
//!
//! # Example
//! ```
//! use tabula_text::cell_width::{char_width, str_width};
//!
//! assert_eq!(char_width('a'), 1);
//! assert_eq!(char_width('一'), 2);
//! assert_eq!(char_width('\u{7}'), 0);
//! assert_eq!(char_width('\u{7f}'), -1);
//!
//! assert_eq!(str_width("媒人"), 4);
//! assert_eq!(str_width("👍🏿"), 2);
//! ```

mod emoji_sequences;
mod table;

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use emoji_sequences::EMOJI_SEQUENCES;
use table::CELL_WIDTH_TABLE;

/// Width of a single codepoint: -1, 0, 1 or 2.
///
/// Backspace and delete are -1 because they move the cursor back a cell.
/// Every other control character is 0.
#[inline]
#[must_use]
pub fn char_width(c: char) -> i8 {
    match c {
        '\x20'..='\x7e' => 1,
        '\x08' | '\x7f' => -1,
        _ => lookup(c as u32),
    }
}

fn lookup(cp: u32) -> i8 {
    let (Some(first), Some(last)) = (CELL_WIDTH_TABLE.first(), CELL_WIDTH_TABLE.last()) else {
        return 1;
    };
    if cp < first.0 || cp > last.1 {
        return 1;
    }
    CELL_WIDTH_TABLE
        .binary_search_by(|&(low, high, _)| {
            if cp < low {
                std::cmp::Ordering::Greater
            } else if cp > high {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .map_or(1, |idx| CELL_WIDTH_TABLE[idx].2)
}

/// Width of a string in terminal cells.
///
/// Known emoji sequences count as 2. Backspace and delete subtract a cell; the
/// total never goes below zero.
#[must_use]
pub fn str_width(s: &str) -> usize {
    if s.is_ascii() {
        let total: i64 = s.chars().map(|c| i64::from(char_width(c))).sum();
        return clamp_width(total);
    }

    let chars: SmallVec<[char; 32]> = s.chars().collect();
    let mut total: i64 = 0;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if could_start_sequence(c)
            && let Some(len) = longest_sequence(&chars[i..])
        {
            total += 2;
            i += len;
            continue;
        }
        total += i64::from(char_width(c));
        i += 1;
    }
    clamp_width(total)
}

fn clamp_width(total: i64) -> usize {
    usize::try_from(total).unwrap_or(0)
}

#[inline]
fn could_start_sequence(c: char) -> bool {
    matches!(c as u32, 0x261d..=0x2764 | 0x1f385..=0x1faf6)
}

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<u32, TrieNode>,
    terminal: bool,
}

static EMOJI_TRIE: LazyLock<TrieNode> = LazyLock::new(|| {
    let mut root = TrieNode::default();
    for seq in EMOJI_SEQUENCES {
        let node = seq
            .iter()
            .fold(&mut root, |node, cp| node.children.entry(*cp).or_default());
        node.terminal = true;
    }
    root
});

/// Length in codepoints of the longest known sequence at the start of `chars`.
fn longest_sequence(chars: &[char]) -> Option<usize> {
    let mut node = &*EMOJI_TRIE;
    let mut longest = None;
    for (i, c) in chars.iter().enumerate() {
        match node.children.get(&(*c as u32)) {
            Some(child) => node = child,
            None => break,
        }
        if node.terminal {
            longest = Some(i + 1);
        }
    }
    longest
}
