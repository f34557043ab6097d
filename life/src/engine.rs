// engine.rs - Generation transition for Conway's Game of Life

use crate::grid::Grid;

/// Compute the next generation of `grid` under the standard rules.
///
/// Allocates a fresh grid of identical dimensions; the input is never
/// mutated. Total over any well-formed grid, including empty and 1x1
/// grids (a lone cell has 0 neighbours and always dies).
pub fn next_generation(grid: &Grid) -> Grid {
    let rows = grid.rows();
    let mut next = Vec::with_capacity(rows.len());

    for (x, row) in rows.iter().enumerate() {
        let mut next_row = Vec::with_capacity(row.len());
        for (y, &alive) in row.iter().enumerate() {
            let count = live_neighbours(rows, x, y);
            let next_state = match (alive, count) {
                (true, 2) | (true, 3) => true,  // Survival
                (false, 3)            => true,  // Birth
                _                     => false, // Death or stays dead
            };
            next_row.push(next_state);
        }
        next.push(next_row);
    }

    Grid::from_rows_unchecked(next)
}

/// Count live cells in the Moore neighbourhood of (x, y) that exist within
/// grid bounds. The scan clamps at the edges (no wraparound, no virtual
/// dead padding), and the column bound is taken per scanned row, so the
/// count stays correct even when row lengths differ.
fn live_neighbours(rows: &[Vec<bool>], x: usize, y: usize) -> usize {
    let mut count = 0;
    for i in x.saturating_sub(1)..=usize::min(rows.len() - 1, x + 1) {
        let row = &rows[i];
        if row.is_empty() {
            continue;
        }
        for j in y.saturating_sub(1)..=usize::min(row.len() - 1, y + 1) {
            if (i != x || j != y) && row[j] {
                count += 1;
            }
        }
    }
    count
}
