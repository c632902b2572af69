//! Square grid of classification codes, one per cell, row-major.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    circle::Circle,
    error::{ConstructionError, GridError},
    pentagram::{Pentagram, POINTS},
    r2::R2,
};

/// Gap (in cells) between the base circle and the outermost cell centers.
pub const MARGIN: f64 = 3.;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    side: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Circle centered on the grid, `MARGIN` cells in from the outermost cell centers.
    pub fn base_circle(side: usize) -> Result<Circle, ConstructionError> {
        let center = (side as f64 - 1.) / 2.;
        let radius = center - MARGIN;
        Circle::new(R2 { x: center, y: center }, radius)
    }

    pub fn pentagram(side: usize) -> Result<Pentagram, ConstructionError> {
        Pentagram::new(Self::base_circle(side)?)
    }

    /// Number of cells in a grid of the given side, if it can be allocated.
    pub fn cell_count(side: usize) -> Result<usize, GridError> {
        side.checked_mul(side)
            .filter(|&count| count <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { side })
    }

    /// Coordinates of cell `idx` (row-major) in a grid of the given side.
    pub fn cell_point(side: usize, idx: usize) -> R2<f64> {
        let y = idx / side;
        let x = idx - side * y;
        R2 { x: x as f64, y: y as f64 }
    }

    pub fn classify(side: usize, pentagram: &Pentagram) -> Result<Self, GridError> {
        let cells: Vec<u8> = (0..Self::cell_count(side)?)
            .map(|idx| pentagram.classify(&Self::cell_point(side, idx)))
            .collect();
        let grid = Grid { side, cells };
        debug!("Classified {}x{} grid: {:?}", side, side, grid.counts());
        Ok(grid)
    }

    /// Build the pentagram for a grid of this side and classify every cell.
    pub fn for_side(side: usize) -> Result<(Pentagram, Self), GridError> {
        let pentagram = Self::pentagram(side)?;
        info!("Pentagram for {}x{} grid: {}", side, side, pentagram.base());
        let grid = Self::classify(side, &pentagram)?;
        Ok((pentagram, grid))
    }

    pub fn from_cells(side: usize, cells: Vec<u8>) -> Result<Self, GridError> {
        let expected = Self::cell_count(side)?;
        if cells.len() != expected {
            return Err(GridError::CellCount { side, expected, actual: cells.len() });
        }
        Ok(Grid { side, cells })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.cells.chunks(self.side.max(1))
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.side || y >= self.side {
            return None;
        }
        self.cells.get(y * self.side + x).copied()
    }

    /// Number of cells per code, `0..=POINTS`. Codes above `POINTS` are not counted.
    pub fn counts(&self) -> [usize; POINTS + 1] {
        let mut counts = [0; POINTS + 1];
        for &cell in &self.cells {
            if let Some(count) = counts.get_mut(cell as usize) {
                *count += 1;
            }
        }
        counts
    }
}
