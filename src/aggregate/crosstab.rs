use std::hash::Hash;

use serde::Serialize;

use super::counter::OrderedCounter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTabCell<R, C> {
    pub row: R,
    pub col: C,
    pub count: usize,
}

/// Two-way contingency table. `cells` is the full row × column product in
/// row-major order, zero cells included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTab<R, C> {
    pub rows: Vec<R>,
    pub cols: Vec<C>,
    pub cells: Vec<CrossTabCell<R, C>>,
}

impl<R: PartialEq, C: PartialEq> CrossTab<R, C> {
    pub fn count(&self, row: &R, col: &C) -> usize {
        self.cells
            .iter()
            .find(|cell| &cell.row == row && &cell.col == col)
            .map_or(0, |cell| cell.count)
    }

    pub fn total(&self) -> usize {
        self.cells.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Cross-tabulates `items`. Both axes are derived from the data in first-seen order.
pub fn cross_tabulate<T, R, C, FR, FC>(items: &[T], row_fn: FR, col_fn: FC) -> CrossTab<R, C>
where
    R: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    FR: Fn(&T) -> R,
    FC: Fn(&T) -> C,
{
    let mut rows = OrderedCounter::new();
    let mut cols = OrderedCounter::new();
    let positions: Vec<(usize, usize)> = items
        .iter()
        .map(|item| (rows.add(row_fn(item)), cols.add(col_fn(item))))
        .collect();

    let width = cols.len();
    let mut matrix = vec![0usize; rows.len() * width];
    for (r, c) in positions {
        matrix[r * width + c] += 1;
    }

    let row_keys: Vec<R> = rows.keys().cloned().collect();
    let col_keys: Vec<C> = cols.keys().cloned().collect();

    let mut cells = Vec::with_capacity(matrix.len());
    for (r, row) in row_keys.iter().enumerate() {
        for (c, col) in col_keys.iter().enumerate() {
            cells.push(CrossTabCell {
                row: row.clone(),
                col: col.clone(),
                count: matrix[r * width + c],
            });
        }
    }

    CrossTab {
        rows: row_keys,
        cols: col_keys,
        cells,
    }
}
