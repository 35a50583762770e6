#![forbid(unsafe_code)]

//! Flowing styled words into lines of a given width.
//!
//! Wrapping works on already parsed [`Lines`]: every source line is a run of
//! word and whitespace spans. [`Whitespace`] decides whether source line breaks
//! survive, whether whitespace runs collapse, and whether long lines break.
//! [`OverflowWrap`] handles single words wider than the line, and
//! [`TextAlign`] pads each finished line out to the width.
//!
//! # Example
//! ```
//! use tabula_style::TextStyle;
//! use tabula_text::wrap::{wrap, WrapOptions};
//! use tabula_text::{Whitespace, parse_text};
//!
//! let text = parse_text("Lorem ipsum dolor sit amet", &TextStyle::default());
//! let lines = wrap(&text, &WrapOptions::new(12).whitespace(Whitespace::PRE_WRAP));
//! let rows: Vec<String> = lines.iter().map(|l| l.to_plain_text()).collect();
//! assert_eq!(rows, vec!["Lorem ipsum", "dolor sit", "amet"]);
//! ```

use tabula_core::WidthRange;
use tabula_style::TextStyle;
use tracing::{debug, trace};

use crate::align::{OverflowWrap, TextAlign, Whitespace};
use crate::parse::{LS, NEL};
use crate::span::{Line, Lines, Span};

/// Default distance between tab stops.
pub const DEFAULT_TAB_WIDTH: usize = 8;

const ELLIPSIS: &str = "…";

/// Options for [`wrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Target width in cells.
    pub width: usize,
    pub whitespace: Whitespace,
    pub align: TextAlign,
    pub overflow: OverflowWrap,
    /// Distance between tab stops. Zero removes tabs.
    pub tab_width: usize,
}

impl WrapOptions {
    /// Options for `width` that keep the text as written.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            whitespace: Whitespace::PRE,
            align: TextAlign::None,
            overflow: OverflowWrap::Normal,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    #[must_use]
    pub fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    #[must_use]
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn overflow(mut self, overflow: OverflowWrap) -> Self {
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    fn trims_trailing(&self) -> bool {
        self.whitespace.trim_eol || self.align == TextAlign::Justify
    }
}

/// Wrap `lines` according to `options`.
///
/// A zero width yields no lines unless the overflow policy is
/// [`OverflowWrap::Normal`], which lets every word overflow.
#[must_use]
pub fn wrap(lines: &Lines, options: &WrapOptions) -> Lines {
    if options.width == 0 && options.overflow != OverflowWrap::Normal {
        return Lines::empty();
    }
    let mut flow = Flow::new(options);
    for line in lines {
        flow.push_source_line(line);
    }
    let out = flow.finish();
    debug!(
        width = options.width,
        source_lines = lines.height(),
        lines = out.height(),
        "wrapped text"
    );
    out
}

/// Width range of `lines` wrapped with `options`, ignoring its alignment and
/// overflow policy.
///
/// The minimum is the widest single span, the maximum the widest line.
#[must_use]
pub fn measure(lines: &Lines, options: &WrapOptions) -> WidthRange {
    let unaligned = WrapOptions {
        align: TextAlign::None,
        overflow: OverflowWrap::Normal,
        ..*options
    };
    let wrapped = wrap(lines, &unaligned);
    let min = wrapped
        .iter()
        .flat_map(Line::iter)
        .map(Span::width)
        .max()
        .unwrap_or(0);
    WidthRange::new(min, wrapped.width())
}

struct Flow<'o> {
    options: &'o WrapOptions,
    out: Vec<Line>,
    line: Vec<Span>,
    end_style: TextStyle,
    width: usize,
    last_was_whitespace: bool,
}

impl<'o> Flow<'o> {
    fn new(options: &'o WrapOptions) -> Self {
        Self {
            options,
            out: Vec::new(),
            line: Vec::new(),
            end_style: TextStyle::default(),
            width: 0,
            last_was_whitespace: true,
        }
    }

    fn push_source_line(&mut self, source: &Line) {
        let opts = self.options;
        let last_word = if opts.trims_trailing() {
            source.iter().rposition(|s| !s.is_whitespace())
        } else {
            None
        };
        self.end_style = source.end_style().clone();

        for (i, piece) in source.iter().enumerate() {
            if piece.text().starts_with([NEL, LS]) {
                self.break_line();
                continue;
            }
            // Keep scanning past trailing whitespace in case a separator follows.
            if last_word.is_some_and(|last| last < i) {
                continue;
            }

            if i == 0
                && !self.last_was_whitespace
                && let Some(prev) = self.line.last()
            {
                let style = if source.spans().first().map(Span::style) == Some(prev.style()) {
                    prev.style().clone()
                } else {
                    TextStyle::default()
                };
                self.line.push(Span::space(1, style));
                self.width += 1;
                self.last_was_whitespace = true;
            }

            let is_whitespace = piece.is_whitespace();
            if is_whitespace && self.last_was_whitespace && opts.whitespace.collapse_spaces {
                continue;
            }
            let span = if is_whitespace && opts.whitespace.collapse_spaces {
                Span::space(1, piece.style().clone())
            } else if piece.is_tab() {
                if opts.tab_width == 0 {
                    continue;
                }
                let stop = opts.tab_width - self.width % opts.tab_width;
                Span::space(stop, piece.style().clone())
            } else {
                piece.clone()
            };

            let width = span.width();
            if opts.whitespace.wrap && self.width > 0 && self.width + width > opts.width {
                self.break_line();
                if is_whitespace {
                    continue;
                }
            }

            let Some(span) = self.overflow(span, is_whitespace) else {
                continue;
            };
            self.width += span.width();
            self.line.push(span);
            self.last_was_whitespace = is_whitespace;
        }

        if !opts.whitespace.collapse_newlines {
            self.break_line();
        }
    }

    /// Apply the overflow policy to a span wider than the line.
    fn overflow(&mut self, span: Span, is_whitespace: bool) -> Option<Span> {
        let limit = self.options.width;
        if span.width() <= limit {
            return Some(span);
        }
        trace!(
            policy = ?self.options.overflow,
            span_width = span.width(),
            width = limit,
            "span overflows line"
        );
        match self.options.overflow {
            OverflowWrap::Normal => Some(span),
            OverflowWrap::Truncate => span.take(limit),
            OverflowWrap::Ellipses if is_whitespace => span.take(limit),
            OverflowWrap::Ellipses => {
                let head = span.take(limit - 1);
                let text = format!("{}{ELLIPSIS}", head.as_ref().map_or("", Span::text));
                Some(Span::word(text, span.style().clone()))
            }
            OverflowWrap::BreakWord => {
                if !self.line.is_empty() {
                    self.break_line();
                }
                let mut rest = span;
                while rest.width() > limit {
                    let (head, tail) = rest.split_at_cell(limit);
                    let (Some(head), Some(tail)) = (head, tail) else {
                        break;
                    };
                    self.width = head.width();
                    self.line.push(head);
                    self.break_line();
                    rest = tail;
                }
                Some(rest)
            }
        }
    }

    fn break_line(&mut self) {
        if self.options.trims_trailing()
            && let Some(last) = self.line.iter().rposition(|s| !s.is_whitespace())
        {
            self.line.truncate(last + 1);
            self.width = self.line.iter().map(Span::width).sum();
        }

        let mut line = std::mem::take(&mut self.line);
        if self.width < self.options.width {
            line = align_line(line, self.options.width - self.width, self.options.align, &self.end_style);
        }
        let end_style = line
            .last()
            .map_or_else(|| self.end_style.clone(), |s| s.style().clone());
        self.out.push(Line::with_end_style(line, end_style));
        self.width = 0;
        self.last_was_whitespace = true;
    }

    fn finish(mut self) -> Lines {
        if !self.line.is_empty() {
            self.break_line();
        }
        Lines::from(self.out)
    }
}

fn align_line(mut line: Vec<Span>, extra: usize, align: TextAlign, end_style: &TextStyle) -> Vec<Span> {
    match align {
        TextAlign::None => {}
        TextAlign::Left => pad_right(&mut line, extra, end_style),
        TextAlign::Right => pad_left(&mut line, extra, end_style),
        TextAlign::Center => center(&mut line, extra, end_style),
        TextAlign::Justify => return justify(line, extra, end_style),
    }
    line
}

fn pad_right(line: &mut Vec<Span>, extra: usize, end_style: &TextStyle) {
    let style = line.last().map_or(end_style, Span::style).clone();
    line.push(Span::space(extra, style));
}

fn pad_left(line: &mut Vec<Span>, extra: usize, end_style: &TextStyle) {
    let style = line.first().map_or(end_style, Span::style).clone();
    line.insert(0, Span::space(extra, style));
}

fn center(line: &mut Vec<Span>, extra: usize, end_style: &TextStyle) {
    let half = extra / 2;
    pad_right(line, half + extra % 2, end_style);
    if half > 0 {
        pad_left(line, half, end_style);
    }
}

/// Widen every whitespace span so the line fills its width. The remainder of
/// an uneven split goes to the leftmost gaps.
fn justify(mut line: Vec<Span>, extra: usize, end_style: &TextStyle) -> Vec<Span> {
    let gaps = line.iter().filter(|s| s.is_whitespace()).count();
    if gaps == 0 {
        center(&mut line, extra, end_style);
        return line;
    }
    let each = extra / gaps;
    let remainder = extra % gaps;
    let mut justified = Vec::with_capacity(line.len() + gaps);
    let mut gap = 0;
    for span in line {
        if !span.is_whitespace() {
            justified.push(span);
            continue;
        }
        let add = each + usize::from(gap < remainder);
        gap += 1;
        let style = span.style().clone();
        justified.push(span);
        if add > 0 {
            justified.push(Span::space(add, style));
        }
    }
    justified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_text;
    use proptest::prelude::*;

    fn rows(text: &str, options: &WrapOptions) -> Vec<String> {
        let lines = parse_text(text, &TextStyle::default());
        wrap(&lines, options).iter().map(Line::to_plain_text).collect()
    }

    // ==========================================================================
    // Whitespace modes
    // ==========================================================================

    const LOREM: &str =
        "Lorem ipsum dolor \n\nsit amet, consectetur \n\tadipiscing        \nelit,   sed";

    fn lorem(whitespace: Whitespace, width: usize) -> Vec<String> {
        rows(LOREM, &WrapOptions::new(width).whitespace(whitespace).tab_width(4))
    }

    #[test]
    fn whitespace_normal() {
        assert_eq!(
            lorem(Whitespace::NORMAL, 18),
            vec!["Lorem ipsum dolor", "sit amet,", "consectetur", "adipiscing elit,", "sed"]
        );
    }

    #[test]
    fn whitespace_nowrap() {
        assert_eq!(
            lorem(Whitespace::NOWRAP, 18),
            vec!["Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed"]
        );
    }

    #[test]
    fn whitespace_pre() {
        assert_eq!(
            lorem(Whitespace::PRE, 19),
            vec![
                "Lorem ipsum dolor ",
                "",
                "sit amet, consectetur ",
                "    adipiscing        ",
                "elit,   sed",
            ]
        );
    }

    #[test]
    fn whitespace_pre_wrap() {
        assert_eq!(
            lorem(Whitespace::PRE_WRAP, 19),
            vec![
                "Lorem ipsum dolor",
                "",
                "sit amet,",
                "consectetur",
                "    adipiscing",
                "elit,   sed",
            ]
        );
    }

    #[test]
    fn whitespace_pre_line() {
        assert_eq!(
            lorem(Whitespace::PRE_LINE, 19),
            vec!["Lorem ipsum dolor", "", "sit amet,", "consectetur", "adipiscing", "elit, sed"]
        );
    }

    #[test]
    fn consecutive_whitespace_spans() {
        let style = TextStyle::default();
        let word = |t: &str| Span::word(t, style.clone());
        let lines = Lines::from(vec![
            Line::new(vec![word("a"), word("   "), word(" ")]),
            Line::new(vec![word(" "), word("b")]),
        ]);
        let out = wrap(&lines, &WrapOptions::new(2).whitespace(Whitespace::PRE_WRAP));
        let out: Vec<String> = out.iter().map(Line::to_plain_text).collect();
        assert_eq!(out, vec!["a", " b"]);
    }

    #[test]
    fn separators_break_lines() {
        let out = rows("a\u{85}b\u{2028}c", &WrapOptions::new(10));
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn tabs_expand_to_next_stop() {
        assert_eq!(rows("ab\tc", &WrapOptions::new(20).tab_width(4)), vec!["ab  c"]);
        assert_eq!(rows("ab\tc", &WrapOptions::new(20).tab_width(0)), vec!["abc"]);
    }

    // ==========================================================================
    // Overflow
    // ==========================================================================

    const WELSH: &str = "The weather today is 21°C in\n\
        Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch";

    fn welsh(overflow: OverflowWrap) -> Vec<String> {
        rows(
            WELSH,
            &WrapOptions::new(23)
                .whitespace(Whitespace::PRE_WRAP)
                .overflow(overflow),
        )
    }

    #[test]
    fn overflow_normal() {
        assert_eq!(
            welsh(OverflowWrap::Normal),
            vec![
                "The weather today is",
                "21°C in",
                "Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch",
            ]
        );
    }

    #[test]
    fn overflow_break_word() {
        assert_eq!(
            welsh(OverflowWrap::BreakWord),
            vec![
                "The weather today is",
                "21°C in",
                "Llanfairpwllgwyngyllgog",
                "erychwyrndrobwllllantys",
                "iliogogogoch",
            ]
        );
    }

    #[test]
    fn overflow_truncate() {
        assert_eq!(
            welsh(OverflowWrap::Truncate),
            vec!["The weather today is", "21°C in", "Llanfairpwllgwyngyllgog"]
        );
    }

    #[test]
    fn overflow_ellipses() {
        assert_eq!(
            welsh(OverflowWrap::Ellipses),
            vec!["The weather today is", "21°C in", "Llanfairpwllgwyngyllgo…"]
        );
    }

    #[test]
    fn break_word_keeps_wide_chars_whole() {
        let out = rows("媒人媒", &WrapOptions::new(3).overflow(OverflowWrap::BreakWord));
        assert_eq!(out, vec!["媒", "人", "媒"]);
    }

    #[test]
    fn broken_hyperlink_renders_as_two_regions() {
        let lines = parse_text(
            "\x1b]8;id=1;https://x.io\x1b\\abcdefgh\x1b]8;;\x1b\\",
            &TextStyle::default(),
        );
        let out = wrap(&lines, &WrapOptions::new(4).overflow(OverflowWrap::BreakWord));
        assert_eq!(out.lines().len(), 2);
        for line in out.lines() {
            let link = line.spans()[0].style().hyperlink.as_ref();
            assert_eq!(link.map(|l| (l.url(), l.id())), Some(("https://x.io", Some("1"))));
        }
        let open = "\x1b]8;id=1;https://x.io\x1b\\";
        let close = "\x1b]8;;\x1b\\";
        assert_eq!(
            crate::render::render_ansi(&out, tabula_style::ColorProfile::TrueColor, true),
            format!("{open}abcd{close}\n{open}efgh{close}")
        );
    }

    #[test]
    fn zero_width_with_cutting_policy_is_empty() {
        assert!(rows("abc", &WrapOptions::new(0).overflow(OverflowWrap::Truncate)).is_empty());
        assert_eq!(rows("abc", &WrapOptions::new(0)), vec!["abc"]);
    }

    #[test]
    #[tracing_test::traced_test]
    fn overflow_is_traced() {
        let _ = rows("abcdef", &WrapOptions::new(3).overflow(OverflowWrap::Truncate));
        assert!(logs_contain("span overflows line"));
        assert!(logs_contain("wrapped text"));
    }

    // ==========================================================================
    // Alignment
    // ==========================================================================

    const WORDS: &str = "one_word\n\ntwo words\n3 whole words\nfour words 4 4\n5 5 5 5 5";

    fn aligned(align: TextAlign, width: usize) -> Vec<String> {
        rows(
            WORDS,
            &WrapOptions::new(width).whitespace(Whitespace::PRE_WRAP).align(align),
        )
    }

    #[test]
    fn align_none() {
        assert_eq!(
            aligned(TextAlign::None, 79),
            vec!["one_word", "", "two words", "3 whole words", "four words 4 4", "5 5 5 5 5"]
        );
    }

    #[test]
    fn align_left() {
        assert_eq!(
            aligned(TextAlign::Left, 15),
            vec![
                "one_word       ",
                "               ",
                "two words      ",
                "3 whole words  ",
                "four words 4 4 ",
                "5 5 5 5 5      ",
            ]
        );
    }

    #[test]
    fn align_right() {
        assert_eq!(
            aligned(TextAlign::Right, 15),
            vec![
                "       one_word",
                "               ",
                "      two words",
                "  3 whole words",
                " four words 4 4",
                "      5 5 5 5 5",
            ]
        );
    }

    #[test]
    fn align_center() {
        assert_eq!(
            aligned(TextAlign::Center, 15),
            vec![
                "   one_word    ",
                "               ",
                "   two words   ",
                " 3 whole words ",
                "four words 4 4 ",
                "   5 5 5 5 5   ",
            ]
        );
    }

    #[test]
    fn align_justify() {
        assert_eq!(
            aligned(TextAlign::Justify, 15),
            vec![
                "   one_word    ",
                "               ",
                "two       words",
                "3  whole  words",
                "four  words 4 4",
                "5   5   5  5  5",
            ]
        );
    }

    #[test]
    fn align_justify_wide() {
        assert_eq!(
            aligned(TextAlign::Justify, 21),
            vec![
                "      one_word       ",
                "                     ",
                "two             words",
                "3     whole     words",
                "four    words   4   4",
                "5    5    5    5    5",
            ]
        );
    }

    #[test]
    fn trailing_whitespace_does_not_count_toward_alignment() {
        let out = rows(
            "aaaa bbbb",
            &WrapOptions::new(7).whitespace(Whitespace::PRE_WRAP).align(TextAlign::Right),
        );
        assert_eq!(out, vec!["   aaaa", "   bbbb"]);
    }

    #[test]
    fn alignment_padding_uses_neighbouring_style() {
        let lines = parse_text("\x1b[1mab\x1b[0m", &TextStyle::default());
        let out = wrap(&lines, &WrapOptions::new(4).align(TextAlign::Left));
        let spans = out.lines()[0].spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].style(), spans[0].style());
    }

    // ==========================================================================
    // Measure
    // ==========================================================================

    #[test]
    fn measure_reports_longest_word_and_line() {
        let lines = parse_text("aa bbbb\nc", &TextStyle::default());
        let range = measure(&lines, &WrapOptions::new(80));
        assert_eq!(range, WidthRange::new(4, 7));
        let wrapped = measure(&lines, &WrapOptions::new(5).whitespace(Whitespace::NORMAL));
        assert_eq!(wrapped, WidthRange::new(4, 4));
    }

    proptest! {
        #[test]
        fn wrapped_lines_fit(s in "[a-z]{1,6}( [a-z]{1,6}){0,20}", width in 6usize..40) {
            let lines = parse_text(&s, &TextStyle::default());
            let out = wrap(&lines, &WrapOptions::new(width).whitespace(Whitespace::NORMAL));
            for line in &out {
                prop_assert!(line.width() <= width);
            }
        }

        #[test]
        fn wrapping_keeps_every_word(s in "[a-z]{1,6}( [a-z]{1,6}){0,20}", width in 6usize..40) {
            let lines = parse_text(&s, &TextStyle::default());
            let out = wrap(&lines, &WrapOptions::new(width).whitespace(Whitespace::NORMAL));
            let rejoined: Vec<String> = out
                .iter()
                .flat_map(|l| l.to_plain_text().split(' ').map(str::to_owned).collect::<Vec<_>>())
                .filter(|w| !w.is_empty())
                .collect();
            let original: Vec<&str> = s.split(' ').collect();
            prop_assert_eq!(rejoined, original);
        }

        #[test]
        fn measure_min_never_exceeds_max(s in "[a-z \n]{0,60}", width in 0usize..30) {
            let lines = parse_text(&s, &TextStyle::default());
            let range = measure(&lines, &WrapOptions::new(width).whitespace(Whitespace::NORMAL));
            prop_assert!(range.min <= range.max);
        }
    }
}
