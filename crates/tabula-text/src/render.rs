#![forbid(unsafe_code)]

//! Serializing [`Lines`] to a string with ANSI escape sequences.

use tabula_style::ColorProfile;
use tabula_style::TextStyle;
use tabula_style::ansi::write_transition;

use crate::span::{Line, Lines};

/// Render `lines` for a terminal with the given capabilities.
///
/// Each line starts and ends in the default style, so a hyperlink or color
/// spanning several lines is closed and reopened at every line break. Between
/// spans only the attributes that change are emitted. Lines are joined with
/// `\n` and there is no trailing newline.
#[must_use]
pub fn render_ansi(lines: &Lines, profile: ColorProfile, hyperlinks: bool) -> String {
    let capacity = lines
        .iter()
        .map(|l| l.iter().map(|s| s.text().len()).sum::<usize>() + 1)
        .sum();
    let mut out = String::with_capacity(capacity);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_line(&mut out, line, profile, hyperlinks);
    }
    out
}

fn write_line(out: &mut String, line: &Line, profile: ColorProfile, hyperlinks: bool) {
    let default = TextStyle::default();
    let mut current = default.clone();
    for span in line {
        let style = span.style().downsample(profile, hyperlinks);
        // Writing into a String cannot fail.
        let _ = write_transition(out, &current, &style);
        out.push_str(span.text());
        current = style;
    }
    let _ = write_transition(out, &current, &default);
}

/// Plain text of `lines` with every style dropped.
#[must_use]
pub fn render_plain(lines: &Lines) -> String {
    lines.to_plain_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;
    use tabula_style::Ansi16;

    fn styled(words: &[(&str, TextStyle)]) -> Lines {
        Lines::from(vec![Line::new(
            words
                .iter()
                .map(|(t, s)| Span::word(*t, s.clone()))
                .collect(),
        )])
    }

    #[test]
    fn unstyled_lines_render_verbatim() {
        let lines = Lines::from(vec![
            Line::new(vec![Span::word("a", TextStyle::default())]),
            Line::default(),
            Line::new(vec![Span::word("b", TextStyle::default())]),
        ]);
        assert_eq!(render_ansi(&lines, ColorProfile::TrueColor, true), "a\n\nb");
    }

    #[test]
    fn shared_attributes_are_not_reopened() {
        let red = TextStyle::new().fg(Ansi16::Red);
        let red_bold = red.clone().bold();
        let lines = styled(&[("a", red.clone()), (" ", red), ("b", red_bold)]);
        assert_eq!(
            render_ansi(&lines, ColorProfile::TrueColor, true),
            "\x1b[31ma \x1b[1mb\x1b[39;22m"
        );
    }

    #[test]
    fn mono_drops_styles() {
        let lines = styled(&[("a", TextStyle::new().fg(Ansi16::Red).bold())]);
        assert_eq!(render_ansi(&lines, ColorProfile::Mono, true), "a");
    }

    #[test]
    fn hyperlinks_close_at_line_end() {
        let link = TextStyle::new().hyperlink("https://example.com");
        let id = link.hyperlink.as_ref().and_then(|h| h.id()).unwrap_or_default().to_owned();
        let lines = Lines::from(vec![
            Line::new(vec![Span::word("a", link.clone())]),
            Line::new(vec![Span::word("b", link)]),
        ]);
        let open = format!("\x1b]8;id={id};https://example.com\x1b\\");
        let close = "\x1b]8;;\x1b\\";
        assert_eq!(
            render_ansi(&lines, ColorProfile::TrueColor, true),
            format!("{open}a{close}\n{open}b{close}")
        );
        assert_eq!(render_ansi(&lines, ColorProfile::TrueColor, false), "a\nb");
    }

    #[test]
    fn plain_rendering() {
        let lines = styled(&[("x", TextStyle::new().italic())]);
        assert_eq!(render_plain(&lines), "x");
    }
}
