//! Parallel grid classification.

use pentacle_core::{Grid, GridError, Pentagram};
use rayon::prelude::*;

/// Same result as [`Grid::classify`], with cells classified across the rayon pool.
pub fn classify_parallel(side: usize, pentagram: &Pentagram) -> Result<Grid, GridError> {
    let cells: Vec<u8> = (0..Grid::cell_count(side)?)
        .into_par_iter()
        .map(|idx| pentagram.classify(&Grid::cell_point(side, idx)))
        .collect();
    Grid::from_cells(side, cells)
}
