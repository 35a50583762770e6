#![forbid(unsafe_code)]

//! Rendering composed widget trees through the facade.

use tabula::prelude::*;
use tabula::{Error, OrderedList};

fn plain(width: usize, widget: &dyn Widget) -> String {
    Renderer::new(RenderConfig::default().width(width)).render_plain(widget)
}

#[test]
fn panel_around_text() {
    let panel = Panel::new(Text::new("hello"));
    assert_eq!(plain(20, &panel), "╭─────╮\n│hello│\n╰─────╯");
}

#[test]
fn table_inside_vertical_layout() {
    let table = TableBuilder::new().row(["1", "2"]).build().unwrap();
    let layout = tabula::VerticalLayoutBuilder::new()
        .cell("title")
        .cell(CellBuilder::widget(table))
        .build();
    assert_eq!(
        plain(79, &layout),
        "title\n┌───┬───┐\n│ 1 │ 2 │\n└───┴───┘"
    );
}

#[test]
fn ascii_theme_is_plain_text() {
    let renderer = Renderer::new(
        RenderConfig::default()
            .width(10)
            .theme(Theme::plain_ascii())
            .color_profile(ColorProfile::Mono),
    );
    let list = OrderedList::from_text(["a", "b"]);
    let out = renderer.render(&list);
    assert!(out.is_ascii(), "{out:?}");
    assert!(!out.contains('\x1b'));
}

#[test]
fn build_errors_surface_through_the_facade() {
    let result = TableBuilder::new()
        .row(RowBuilder::new().cell("A").cell(CellBuilder::text("B").row_span(2)))
        .row(RowBuilder::new().cell(CellBuilder::text("C").column_span(2)))
        .build();
    let err = result.unwrap_err();
    assert!(matches!(err, Error::OverlappingSpans { row: 1, column: 1 }));
    let source: &dyn std::error::Error = &err;
    assert!(source.to_string().starts_with("invalid table"));
}

#[test]
fn renders_are_repeatable() {
    let table = TableBuilder::new()
        .whitespace(Whitespace::NORMAL)
        .row(["some longer text", "x"])
        .build()
        .unwrap();
    let renderer = Renderer::new(RenderConfig::default().width(12));
    assert_eq!(renderer.render(&table), renderer.render(&table));
    assert!(renderer.render_lines(&table).iter().all(|l| l.width() <= 12));
}

#[test]
fn styled_table_exports_plain_csv() {
    let table = TableBuilder::new()
        .header(SectionBuilder::new().row(["name", "note"]))
        .row(["\x1b[1ma.txt\x1b[0m", "big, old"])
        .build()
        .unwrap();
    let csv = table
        .content_to_csv(&tabula::CsvOptions::new().quoting(tabula::CsvQuoting::NonNumeric))
        .unwrap();
    assert_eq!(csv, "\"name\",\"note\"\n\"a.txt\",\"big, old\"\n");
}
