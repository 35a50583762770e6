#![forbid(unsafe_code)]

//! Exporting table content as CSV.

use tabula_core::{Error, Result};

use super::Table;
use super::cell::Cell;
use crate::RenderContext;

/// Which fields are surrounded by the quote character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvQuoting {
    /// Every field.
    All,
    /// Only fields containing the delimiter, a line terminator character, or
    /// a quote that is not escaped.
    #[default]
    Minimal,
    /// Every field with a character other than an ASCII digit.
    NonNumeric,
    /// No field. Special characters are preceded by the escape character.
    None,
}

/// Settings for [`Table::content_to_csv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    delimiter: char,
    quote_char: char,
    escape_char: Option<char>,
    double_quote: bool,
    line_terminator: String,
    quoting: CsvQuoting,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote_char: '"',
            escape_char: None,
            double_quote: false,
            line_terminator: "\n".to_owned(),
            quoting: CsvQuoting::Minimal,
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    /// Placed before quote characters that are not doubled, and before every
    /// special character under [`CsvQuoting::None`]. Occurrences of the escape
    /// character itself are doubled.
    #[must_use]
    pub fn escape_char(mut self, escape_char: Option<char>) -> Self {
        self.escape_char = escape_char;
        self
    }

    /// Write a quote inside a quoted field as two quotes.
    #[must_use]
    pub fn double_quote(mut self, double_quote: bool) -> Self {
        self.double_quote = double_quote;
        self
    }

    /// Written after every row, including the last.
    #[must_use]
    pub fn line_terminator(mut self, line_terminator: impl Into<String>) -> Self {
        self.line_terminator = line_terminator.into();
        self
    }

    #[must_use]
    pub fn quoting(mut self, quoting: CsvQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    fn is_special(&self, c: char) -> bool {
        c == self.delimiter || self.line_terminator.contains(c)
    }

    /// Append one escaped and possibly quoted field. `None` when the field
    /// needs an escape character that is not set.
    fn write_field(&self, out: &mut String, field: &str) -> Option<()> {
        let double = self.double_quote && self.quoting != CsvQuoting::None;
        let mut escaped = String::with_capacity(field.len());
        for c in field.chars() {
            if Some(c) == self.escape_char {
                escaped.push(c);
                escaped.push(c);
            } else if c == self.quote_char && double {
                escaped.push(c);
                escaped.push(c);
            } else if c == self.quote_char
                || (self.quoting == CsvQuoting::None && self.is_special(c))
            {
                escaped.push(self.escape_char?);
                escaped.push(c);
            } else {
                escaped.push(c);
            }
        }

        let quoted = match self.quoting {
            CsvQuoting::All => true,
            CsvQuoting::Minimal => {
                (double && field.contains(self.quote_char))
                    || field.chars().any(|c| self.is_special(c))
            }
            CsvQuoting::NonNumeric => field.chars().any(|c| !c.is_ascii_digit()),
            CsvQuoting::None => false,
        };
        if quoted {
            out.push(self.quote_char);
            out.push_str(&escaped);
            out.push(self.quote_char);
        } else {
            out.push_str(&escaped);
        }
        Some(())
    }
}

impl Table {
    /// The text of every cell as CSV, one line per row across header, body
    /// and footer. Slots covered by a spanning cell are empty fields.
    /// Captions are not included.
    ///
    /// # Errors
    ///
    /// [`Error::CsvUnsupportedCell`] if a cell holds a widget other than text,
    /// and [`Error::CsvEscapeRequired`] if a field needs an escape character
    /// that `options` does not set.
    ///
    /// # Example
    /// ```
    /// use tabula_widgets::{CsvOptions, TableBuilder};
    ///
    /// let table = TableBuilder::new().row(["a", "b,c"]).build().expect("no overlapping spans");
    /// let csv = table.content_to_csv(&CsvOptions::default()).expect("text cells");
    /// assert_eq!(csv, "a,\"b,c\"\n");
    /// ```
    pub fn content_to_csv(&self, options: &CsvOptions) -> Result<String> {
        let cx = RenderContext::default();
        let mut out = String::new();
        for (row, cells) in self.grid.rows.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if column > 0 {
                    out.push(options.delimiter);
                }
                let text = match cell {
                    Cell::Empty | Cell::SpanRef { .. } => String::new(),
                    Cell::Content(content) => content
                        .widget
                        .plain_text(&cx)
                        .ok_or(Error::CsvUnsupportedCell { row, column })?,
                };
                options
                    .write_field(&mut out, &text)
                    .ok_or(Error::CsvEscapeRequired { row, column })?;
            }
            out.push_str(&options.line_terminator);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Panel;
    use crate::table::{CellBuilder, RowBuilder, SectionBuilder, TableBuilder};
    use crate::text::Text;
    use tabula_text::{TextAlign, Whitespace};

    fn csv(cells: &[&str], options: &CsvOptions) -> Result<String> {
        TableBuilder::new()
            .row(cells.to_vec())
            .build()
            .unwrap()
            .content_to_csv(options)
    }

    fn escaping(escape: char, double_quote: bool, quoting: CsvQuoting) -> CsvOptions {
        CsvOptions::new()
            .escape_char(Some(escape))
            .double_quote(double_quote)
            .quoting(quoting)
    }

    // ========================================================================
    // Table shapes
    // ========================================================================

    #[test]
    fn empty_table_is_one_empty_row() {
        let table = TableBuilder::new().build().unwrap();
        assert_eq!(table.content_to_csv(&CsvOptions::default()).unwrap(), "\n");
    }

    #[test]
    fn single_cell() {
        assert_eq!(csv(&["1"], &CsvOptions::default()).unwrap(), "1\n");
    }

    #[test]
    fn column_span_leaves_empty_fields() {
        let table = TableBuilder::new()
            .row(RowBuilder::new().cell(CellBuilder::text("1").column_span(2)).cell("2"))
            .row(["3", "4", "5"])
            .build()
            .unwrap();
        assert_eq!(table.content_to_csv(&CsvOptions::default()).unwrap(), "1,,2\n3,4,5\n");
    }

    #[test]
    fn row_span_leaves_empty_fields() {
        let table = TableBuilder::new()
            .row(RowBuilder::new().cell(CellBuilder::text("1").row_span(2)).cell("2"))
            .row(["3"])
            .build()
            .unwrap();
        assert_eq!(table.content_to_csv(&CsvOptions::default()).unwrap(), "1,2\n,3\n");
    }

    #[test]
    fn sections_are_exported_in_order() {
        let table = TableBuilder::new()
            .header(SectionBuilder::new().row(["h"]))
            .row(["b"])
            .footer(SectionBuilder::new().row(["f"]))
            .caption_top_text("not exported", TextAlign::Center)
            .build()
            .unwrap();
        assert_eq!(table.content_to_csv(&CsvOptions::default()).unwrap(), "h\nb\nf\n");
    }

    #[test]
    fn text_is_exported_unwrapped_and_unaligned() {
        let table = TableBuilder::new()
            .row([CellBuilder::from(
                Text::new("one two").whitespace(Whitespace::NORMAL),
            )])
            .build()
            .unwrap();
        let options = CsvOptions::new().quoting(CsvQuoting::None).delimiter(';');
        assert_eq!(table.content_to_csv(&options).unwrap(), "one two\n");
    }

    #[test]
    fn custom_delimiter_and_terminator() {
        let options = CsvOptions::new().delimiter(';').line_terminator("\r\n");
        assert_eq!(csv(&["a", "b c", "d;e"], &options).unwrap(), "a;b c;\"d;e\"\r\n");
    }

    #[test]
    fn non_text_cells_are_rejected() {
        let table = TableBuilder::new()
            .row([CellBuilder::from("a"), CellBuilder::widget(Panel::new(Text::new("b")))])
            .build()
            .unwrap();
        assert_eq!(
            table.content_to_csv(&CsvOptions::default()),
            Err(Error::CsvUnsupportedCell { row: 0, column: 1 })
        );
    }

    // ========================================================================
    // Quoting modes
    // ========================================================================

    #[test]
    fn quoting_minimal() {
        let options = CsvOptions::new().quoting(CsvQuoting::Minimal);
        assert_eq!(csv(&["a", "1", "p,q"], &options).unwrap(), "a,1,\"p,q\"\n");
    }

    #[test]
    fn quoting_non_numeric() {
        let options = CsvOptions::new().quoting(CsvQuoting::NonNumeric);
        assert_eq!(csv(&["a", "1", "p,q"], &options).unwrap(), "\"a\",1,\"p,q\"\n");
    }

    #[test]
    fn quoting_all() {
        let options = CsvOptions::new().quoting(CsvQuoting::All);
        assert_eq!(csv(&["a", "1", "p,q"], &options).unwrap(), "\"a\",\"1\",\"p,q\"\n");
        assert_eq!(csv(&["a\nb", "1"], &options).unwrap(), "\"a\nb\",\"1\"\n");
    }

    #[test]
    fn quoting_none_escapes_special_characters() {
        let options = escaping('\\', true, CsvQuoting::None);
        assert_eq!(csv(&["a", "1", "p,q"], &options).unwrap(), "a,1,p\\,q\n");
        assert_eq!(csv(&["\""], &options).unwrap(), "\\\"\n");
    }

    #[test]
    fn quoting_none_without_escape_is_an_error() {
        let options = CsvOptions::new().quoting(CsvQuoting::None);
        assert_eq!(
            csv(&["a", "1", "p,q"], &options),
            Err(Error::CsvEscapeRequired { row: 0, column: 2 })
        );
    }

    // ========================================================================
    // Escaping
    // ========================================================================

    #[test]
    fn doubled_quotes_are_quoted() {
        let options = escaping('\\', true, CsvQuoting::Minimal);
        assert_eq!(csv(&["a", "1", "p,q"], &options).unwrap(), "a,1,\"p,q\"\n");
        assert_eq!(csv(&["\""], &options).unwrap(), "\"\"\"\"\n");
    }

    #[test]
    fn escaped_quotes_need_no_quoting() {
        let options = escaping('\\', false, CsvQuoting::Minimal);
        assert_eq!(csv(&["\""], &options).unwrap(), "\\\"\n");
        assert_eq!(
            csv(&["a", "1", "p,\"q\""], &options).unwrap(),
            "a,1,\"p,\\\"q\\\"\"\n"
        );
    }

    #[test]
    fn escape_character_is_doubled() {
        let options = escaping('\\', false, CsvQuoting::Minimal);
        assert_eq!(csv(&["a\\b"], &options).unwrap(), "a\\\\b\n");
    }

    #[test]
    fn quote_without_escape_or_doubling_is_an_error() {
        let options = CsvOptions::new().double_quote(false);
        assert_eq!(
            csv(&["a", "1", "p,\"q\""], &options),
            Err(Error::CsvEscapeRequired { row: 0, column: 2 })
        );
    }

    #[test]
    fn custom_quote_character() {
        let options = CsvOptions::new().quote_char('\'').double_quote(true);
        assert_eq!(csv(&["it's", "x,y"], &options).unwrap(), "'it''s','x,y'\n");
    }
}
