//! Cell width corpus.
//!
//! Known inputs with the width a terminal gives them. Where the `unicode-width`
//! crate agrees (ASCII, CJK, fullwidth forms, combining marks) it is checked
//! as a second oracle; emoji sequences are where the two deliberately differ.

use tabula_style::TextStyle;
use tabula_text::{Span, char_width, parse_text, str_width};
use unicode_width::UnicodeWidthStr;

// =============================================================================
// Test Corpus Data Structures
// =============================================================================

#[derive(Debug, Clone)]
struct WidthTestCase {
    input: &'static str,
    description: &'static str,
    expected: usize,
    /// Whether `unicode-width` is expected to report the same value.
    matches_oracle: bool,
}

impl WidthTestCase {
    const fn new(input: &'static str, description: &'static str, expected: usize) -> Self {
        Self {
            input,
            description,
            expected,
            matches_oracle: true,
        }
    }

    const fn terminal_only(input: &'static str, description: &'static str, expected: usize) -> Self {
        Self {
            input,
            description,
            expected,
            matches_oracle: false,
        }
    }
}

fn check(category: &str, cases: &[WidthTestCase]) {
    for case in cases {
        let width = str_width(case.input);
        assert_eq!(
            width, case.expected,
            "{category} '{}' ({}) - expected {}, got {}",
            case.input, case.description, case.expected, width
        );
        if case.matches_oracle {
            assert_eq!(
                width,
                case.input.width(),
                "{category} '{}' ({}) disagrees with unicode-width",
                case.input,
                case.description
            );
        }
    }
}

// =============================================================================
// Category 1: Basic ASCII
// =============================================================================

const ASCII_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("a", "lowercase letter", 1),
    WidthTestCase::new("Z", "uppercase letter", 1),
    WidthTestCase::new(" ", "space", 1),
    WidthTestCase::new("~", "tilde", 1),
    WidthTestCase::new("Hello, World!", "sentence", 13),
    WidthTestCase::new("{}[]()<>", "brackets", 8),
    WidthTestCase::new("hello world foo bar", "multi-word", 19),
];

#[test]
fn ascii_width_tests() {
    check("ASCII", ASCII_TESTS);
}

// =============================================================================
// Category 2: CJK and fullwidth forms
// =============================================================================

const CJK_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("\u{4E00}", "CJK U+4E00 (one)", 2),
    WidthTestCase::new("\u{4E2D}\u{6587}", "zhongwen", 4),
    WidthTestCase::new("\u{65E5}\u{672C}", "nihon (Japan)", 4),
    WidthTestCase::new("\u{D55C}\u{AE00}", "hangul", 4),
    WidthTestCase::new("\u{4E2D}\u{65E5}\u{D55C}", "Chinese+Japanese+Korean", 6),
    WidthTestCase::new("\u{20000}", "CJK Extension B", 2),
    WidthTestCase::new("\u{FF01}\u{FF21}", "fullwidth punctuation and letter", 4),
    WidthTestCase::new("\u{FF76}", "halfwidth katakana", 1),
    WidthTestCase::new("a\u{4E00}b", "mixed ASCII and CJK", 4),
];

#[test]
fn cjk_width_tests() {
    check("CJK", CJK_TESTS);
}

// =============================================================================
// Category 3: Zero-width characters
// =============================================================================

const ZERO_WIDTH_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("e\u{0301}", "e + combining acute", 1),
    WidthTestCase::new("a\u{0300}\u{0308}", "stacked combining marks", 1),
    WidthTestCase::new("a\u{200B}b", "zero width space", 2),
    WidthTestCase::terminal_only("a\u{7}b", "bell", 2),
];

#[test]
fn zero_width_tests() {
    check("zero-width", ZERO_WIDTH_TESTS);
}

// =============================================================================
// Category 4: Emoji
// =============================================================================

const EMOJI_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("\u{1F600}", "grinning face", 2),
    WidthTestCase::new("\u{1F64A}\u{1F649}\u{1F648}", "three monkeys", 6),
    WidthTestCase::terminal_only("\u{1F44D}\u{1F3FF}", "thumbs up, dark skin tone", 2),
    WidthTestCase::terminal_only(
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}",
        "family ZWJ sequence",
        2,
    ),
    WidthTestCase::terminal_only(
        "\u{1F468}\u{1F3FD}\u{200D}\u{1F9B1}",
        "man, medium skin tone, curly hair",
        2,
    ),
];

#[test]
fn emoji_width_tests() {
    check("emoji", EMOJI_TESTS);
}

// =============================================================================
// Category 5: Cursor-retracting controls
// =============================================================================

#[test]
fn backspace_and_delete_subtract() {
    assert_eq!(char_width('\u{8}'), -1);
    assert_eq!(str_width("ab\u{8}"), 1);
    assert_eq!(str_width("\u{7f}"), 0);
}

// =============================================================================
// Spans use the same measure
// =============================================================================

#[test]
fn span_width_matches_string_width() {
    for case in CJK_TESTS.iter().chain(EMOJI_TESTS) {
        if case.input.chars().any(char::is_whitespace) {
            continue;
        }
        let span = Span::word(case.input, TextStyle::default());
        assert_eq!(span.width(), case.expected, "{}", case.description);
    }
}

#[test]
fn parsed_line_width_ignores_escape_sequences() {
    let lines = parse_text("\x1b[1m\u{4E2D}\u{6587}\x1b[0m ok", &TextStyle::default());
    assert_eq!(lines.width(), 7);
}
