#![forbid(unsafe_code)]

//! Column measurement and width allocation.
//!
//! Available width (the render width minus border columns) is handed out in
//! priority order: fixed columns first, then auto columns, with expanding
//! columns taking whatever is left. Auto columns give up width only when the
//! expanding columns could not otherwise reach their minimum.

use tabula_core::WidthRange;

use super::{Cell, ColumnWidth, TableGrid};
use crate::RenderContext;

impl TableGrid {
    /// Width range of column `x`. A spanning cell contributes an equal share
    /// of its own range to every column it covers.
    pub(crate) fn measure_column(&self, cx: &RenderContext, x: usize, width: usize) -> WidthRange {
        if let Some(ColumnWidth::Fixed(w)) = self.column_widths.get(x) {
            return WidthRange::exact(*w);
        }
        let ranges = self.rows.iter().map(|row| {
            let cell = match row.get(x)? {
                Cell::Empty => return Some(WidthRange::ZERO),
                Cell::Content(cell) => cell,
                Cell::SpanRef { origin, .. } => self.content_at(*origin)?,
            };
            Some(cell.widget.measure(cx, width) / cell.column_span)
        });
        WidthRange::max_of(ranges, 0)
    }

    /// Final width of every column when the table is rendered at `width`.
    pub(crate) fn allocate_widths(&self, cx: &RenderContext, width: usize) -> Vec<usize> {
        let count = self.column_count();
        let available = width.saturating_sub(self.border_width());
        if available == 0 {
            return vec![0; count];
        }

        let measurements: Vec<WidthRange> = (0..count)
            .map(|x| self.measure_column(cx, x, available))
            .collect();
        let mut widths: Vec<usize> = measurements.iter().map(|m| m.max).collect();

        let mut fixed = Vec::new();
        let mut expand = Vec::new();
        let mut auto = Vec::new();
        for (i, policy) in self.column_widths.iter().enumerate() {
            match policy {
                ColumnWidth::Fixed(_) => fixed.push(i),
                ColumnWidth::Expand(weight) => expand.push((i, *weight)),
                ColumnWidth::Auto => auto.push(i),
            }
        }

        let max_auto: usize = auto.iter().map(|&i| measurements[i].max).sum();
        let min_auto: usize = auto.iter().map(|&i| measurements[i].min).sum();
        let max_fixed: usize = fixed.iter().map(|&i| measurements[i].max).sum();
        let min_expand: usize = expand.iter().map(|&(i, _)| measurements[i].min).sum();

        let allocated_fixed = max_fixed.min(available);
        let after_fixed = available - allocated_fixed;
        let allocated_auto = after_fixed
            .saturating_sub(min_expand)
            .clamp(min_auto, max_auto)
            .min(after_fixed);
        let allocated_expand = after_fixed - allocated_auto;

        let fixed_weights = vec![1.0; fixed.len()];
        set_widths(&mut widths, &fixed, &fixed_weights, allocated_fixed, Some(max_fixed));

        let (expand_idxs, expand_weights): (Vec<usize>, Vec<f64>) = expand
            .iter()
            .map(|&(i, w)| (i, f64::from(w)))
            .unzip();
        set_widths(&mut widths, &expand_idxs, &expand_weights, allocated_expand, None);

        if allocated_auto > min_auto {
            // Everyone gets their minimum, and the rest goes to the columns
            // that can use it.
            let flex: Vec<f64> = auto
                .iter()
                .map(|&i| (measurements[i].max - measurements[i].min) as f64)
                .collect();
            set_widths(&mut widths, &auto, &flex, allocated_auto - min_auto, Some(max_auto - min_auto));
            if allocated_auto - min_auto == max_auto - min_auto {
                for &i in &auto {
                    widths[i] = measurements[i].max;
                }
            } else {
                for &i in &auto {
                    widths[i] += measurements[i].min;
                }
            }
        } else {
            // Shrinking in proportion to the natural widths keeps their ratios.
            let natural: Vec<f64> = auto.iter().map(|&i| widths[i] as f64).collect();
            set_widths(&mut widths, &auto, &natural, allocated_auto, Some(max_auto));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(width, available, ?widths, "table column widths");

        widths
    }
}

/// Overwrite `widths[idxs]` with `total` split by `weights`, unless `total`
/// already equals `natural`.
fn set_widths(widths: &mut [usize], idxs: &[usize], weights: &[f64], total: usize, natural: Option<usize>) {
    if weights.is_empty() || natural == Some(total) {
        return;
    }
    for (&i, w) in idxs.iter().zip(distribute(weights, total)) {
        widths[i] = w;
    }
}

/// Split `total` cells by `weights`, rounding down and handing the
/// remainder out one cell at a time from the first column.
pub(crate) fn distribute(weights: &[f64], total: usize) -> Vec<usize> {
    let total_weight: f64 = weights.iter().sum();
    if total == 0 || total_weight <= 0.0 {
        return vec![0; weights.len()];
    }
    let mut out: Vec<usize> = weights
        .iter()
        .map(|w| (w / total_weight * total as f64) as usize)
        .collect();
    let remainder = total.saturating_sub(out.iter().sum());
    for slot in out.iter_mut().take(remainder) {
        *slot += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ColumnBuilder, TableBuilder};
    use crate::{CellStyleBuilder, Table, Widget};
    use crate::borders::{BorderType, Borders};
    use crate::test_support::rows;
    use tabula_core::Sides;
    use tabula_text::{OverflowWrap, Whitespace};

    #[test]
    fn distribute_rounds_down_then_fills_from_the_left() {
        assert_eq!(distribute(&[1.0, 2.0], 4), vec![2, 2]);
        assert_eq!(distribute(&[1.0, 1.0, 1.0], 5), vec![2, 2, 1]);
        assert_eq!(distribute(&[1.0, 2.0], 0), vec![0, 0]);
        assert_eq!(distribute(&[0.0, 0.0], 3), vec![0, 0]);
    }

    fn policy_table(borders: Borders) -> Table {
        TableBuilder::new()
            .border_type(BorderType::ASCII)
            .padding(Sides::ZERO)
            .whitespace(Whitespace::NORMAL)
            .overflow(OverflowWrap::Truncate)
            .column(0, ColumnBuilder::new().width(ColumnWidth::fixed(3)))
            .column(2, ColumnBuilder::new().width(ColumnWidth::expand(1.0)))
            .column(3, ColumnBuilder::new().width(ColumnWidth::expand(2.0)))
            .borders(borders)
            .row(["11", "22 foo", "33", "44"])
            .build()
            .unwrap()
    }

    #[test]
    fn every_policy_at_its_natural_width() {
        assert_eq!(rows(&policy_table(Borders::LEFT_RIGHT), 18), vec!["|11 |22 foo|33|44|"]);
    }

    #[test]
    fn expanding_columns_share_the_rest_by_weight() {
        let table = policy_table(Borders::LEFT_RIGHT);
        assert_eq!(rows(&table, 26), vec!["|11 |22 foo|33  |44      |"]);
        assert_eq!(rows(&table, 27), vec!["|11 |22 foo|33   |44      |"]);
        assert_eq!(rows(&table, 28), vec!["|11 |22 foo|33   |44       |"]);
    }

    #[test]
    fn auto_columns_shrink_before_expanding_minimums() {
        let table = policy_table(Borders::LEFT_RIGHT);
        assert_eq!(rows(&table, 16), vec!["|11 |22  |33|44|", "|   |foo |  |  |"]);
        assert_eq!(rows(&table, 15), vec!["|11 |22 |33|44|", "|   |foo|  |  |"]);
    }

    #[test]
    fn expanding_columns_shrink_past_their_minimum() {
        let table = policy_table(Borders::LEFT_RIGHT);
        assert_eq!(rows(&table, 13), vec!["|11 |22 |3|4|", "|   |foo| | |"]);
        assert_eq!(rows(&table, 11), vec!["|11 |22 |||", "|   |foo|||"]);
    }

    #[test]
    fn fixed_columns_shrink_last() {
        let table = policy_table(Borders::LEFT_RIGHT);
        assert_eq!(rows(&table, 9), vec!["|11 |2|||", "|   |f|||"]);
        assert_eq!(rows(&table, 8), vec!["|11 ||||"]);
        assert_eq!(rows(&table, 6), vec!["|1||||"]);
        assert_eq!(rows(&table, 0), vec!["|||||"]);
    }

    #[test]
    fn zero_width_keeps_row_borders() {
        assert_eq!(rows(&policy_table(Borders::ALL), 0), vec!["+++++", "|||||", "+++++"]);
    }

    #[test]
    fn column_measure_splits_spanning_cells() {
        let table = TableBuilder::new()
            .padding(Sides::ZERO)
            .row(crate::table::RowBuilder::new().cell(crate::table::CellBuilder::from("abcdef").column_span(2)))
            .row(["a", "b"])
            .build()
            .unwrap();
        let cx = RenderContext::default();
        // 3 + 3 for the columns, 3 border columns
        assert_eq!(table.measure(&cx, 79), WidthRange::exact(9));
    }
}
