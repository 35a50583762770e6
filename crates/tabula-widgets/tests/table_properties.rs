#![forbid(unsafe_code)]

//! Property tests for table layout.

use proptest::prelude::*;
use tabula_text::Whitespace;
use tabula_widgets::{
    CellBuilder, CellStyleBuilder, ColumnBuilder, ColumnWidth, RenderContext, RowBuilder,
    TableBuilder, Widget,
};

fn cell_text() -> impl Strategy<Value = String> {
    "[a-z]{1,6}( [a-z]{1,6}){0,3}"
}

fn table_rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(cell_text(), 1..4), 1..5)
}

fn build(rows: &[Vec<String>], expand_last: bool) -> tabula_widgets::Table {
    let mut table = TableBuilder::new().whitespace(Whitespace::NORMAL);
    if expand_last {
        table = table.column(2, ColumnBuilder::new().width(ColumnWidth::expand(1.0)));
    }
    for row in rows {
        table = table.row(RowBuilder::new().cells(row.iter().map(|s| CellBuilder::text(s.as_str()))));
    }
    table.build().unwrap()
}

proptest! {
    #[test]
    fn rendered_lines_share_one_width(rows in table_rows(), width in 0usize..60, expand in any::<bool>()) {
        let table = build(&rows, expand);
        let lines = table.render(&RenderContext::default(), width);
        let widths: Vec<usize> = lines.iter().map(|l| l.width()).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged output: {widths:?}");
    }

    #[test]
    fn measure_is_ordered(rows in table_rows(), width in 0usize..80) {
        let table = build(&rows, false);
        let range = table.measure(&RenderContext::default(), width);
        prop_assert!(range.min <= range.max);
    }

    #[test]
    fn natural_width_fits_the_measure(rows in table_rows()) {
        let table = build(&rows, false);
        let cx = RenderContext::default();
        let natural = table.measure(&cx, 200).max;
        let lines = table.render(&cx, natural);
        prop_assert!(lines.iter().all(|l| l.width() == natural));
    }
}
