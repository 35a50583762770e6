//! Benchmarks for table layout and rendering.
//!
//! Run with: cargo bench -p tabula-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tabula_text::{TextAlign, Whitespace};
use tabula_widgets::{
    CellBuilder, CellStyleBuilder, ColumnBuilder, ColumnWidth, RenderContext, RowBuilder,
    SectionBuilder, TableBuilder, Widget,
};

// =============================================================================
// Test Data
// =============================================================================

fn table_builder(rows: usize) -> TableBuilder {
    let body = (0..rows).fold(SectionBuilder::new(), |section, i| {
        section.row([
            format!("{i}"),
            format!("name {i}"),
            "The quick brown fox jumps over the lazy dog".to_string(),
        ])
    });
    TableBuilder::new()
        .whitespace(Whitespace::NORMAL)
        .column(0, ColumnBuilder::new().align(TextAlign::Right))
        .column(2, ColumnBuilder::new().width(ColumnWidth::expand(1.0)))
        .header(SectionBuilder::new().row(["#", "Name", "Description"]))
        .body(body)
}

fn spanning_builder(rows: usize) -> TableBuilder {
    (0..rows).fold(TableBuilder::new(), |table, i| {
        if i % 3 == 0 {
            table.row(
                RowBuilder::new()
                    .cell(CellBuilder::text(format!("span {i}")).row_span(2))
                    .cell(CellBuilder::text("wide").column_span(2)),
            )
        } else {
            table.row(["a", "b", "c"])
        }
    })
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/build");
    for rows in [10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| black_box(table_builder(rows).build()))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let cx = RenderContext::default();
    let mut group = c.benchmark_group("table/render");
    for rows in [10, 100] {
        let Ok(table) = table_builder(rows).build() else {
            continue;
        };
        for width in [40, 120] {
            group.bench_with_input(
                BenchmarkId::new(format!("{rows}_rows"), width),
                &width,
                |b, &width| b.iter(|| black_box(table.render(&cx, width))),
            );
        }
    }
    group.finish();
}

fn bench_spans(c: &mut Criterion) {
    let cx = RenderContext::default();
    let Ok(table) = spanning_builder(60).build() else {
        return;
    };
    c.bench_function("table/render_spans", |b| {
        b.iter(|| black_box(table.render(&cx, 80)))
    });
}

criterion_group!(benches, bench_build, bench_render, bench_spans);
criterion_main!(benches);
