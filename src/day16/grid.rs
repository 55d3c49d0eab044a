use itertools::Itertools;

use crate::cube::FaceId;
use crate::error::{CubeError, Result};
use crate::instruction::Scope;

pub const MIN_CELL: u8 = 1;
pub const MAX_CELL: u8 = 100;

/// One face of the cube: a square grid of cells, each kept in `1..=100`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceGrid {
    id: FaceId,
    size: usize,
    row_data: Vec<Vec<u8>>,
}

/// Adds `delta` to a cell value, wrapping around so the result stays in `1..=100`.
pub fn wrap_value(cell: u8, delta: i64) -> u8 {
    let span = i64::from(MAX_CELL);
    let delta = delta.rem_euclid(span);
    ((i64::from(cell) + delta - 1).rem_euclid(span) + 1) as u8
}

impl FaceGrid {
    pub fn new(id: FaceId, size: usize) -> FaceGrid {
        FaceGrid {
            id,
            size,
            row_data: vec![vec![MIN_CELL; size]; size],
        }
    }

    #[cfg(test)]
    pub fn from_rows(id: FaceId, rows: Vec<Vec<u8>>) -> Result<FaceGrid> {
        let size = rows.len();
        if !rows.iter().all(|row| row.len() == size) {
            return Err(CubeError::Parse("rows are not all the same length".to_string()));
        }
        if rows.iter().flatten().any(|&v| !(MIN_CELL..=MAX_CELL).contains(&v)) {
            return Err(CubeError::Parse("cell value outside 1..=100".to_string()));
        }
        Ok(FaceGrid {
            id,
            size,
            row_data: rows,
        })
    }

    pub fn id(&self) -> FaceId {
        self.id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.row_data
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(CubeError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Shifts every cell selected by `scope` by `magnitude`, with wraparound.
    pub fn apply_delta(&mut self, scope: Scope, magnitude: i64) -> Result<()> {
        match scope {
            Scope::Face => {
                for value in self.row_data.iter_mut().flatten() {
                    *value = wrap_value(*value, magnitude);
                }
            }
            Scope::Row(row) => {
                self.check_index(row)?;
                for value in self.row_data[row].iter_mut() {
                    *value = wrap_value(*value, magnitude);
                }
            }
            Scope::Column(col) => {
                self.check_index(col)?;
                for row in self.row_data.iter_mut() {
                    row[col] = wrap_value(row[col], magnitude);
                }
            }
        }
        Ok(())
    }

    /// Rebuilds the grid so that cell `(row, col)` takes the old value at `source(row, col)`.
    fn remap<F>(&mut self, source: F)
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let row_data = (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| {
                        let (src_row, src_col) = source(row, col);
                        self.row_data[src_row][src_col]
                    })
                    .collect()
            })
            .collect();
        self.row_data = row_data;
    }

    pub fn rotate_clockwise(&mut self) {
        let last = self.size - 1;
        self.remap(|row, col| (last - col, row));
    }

    pub fn rotate_counter_clockwise(&mut self) {
        let last = self.size - 1;
        self.remap(|row, col| (col, last - row));
    }

    pub fn rotate_half_turn(&mut self) {
        self.rotate_clockwise();
        self.rotate_clockwise();
    }

    fn row_sums(&self) -> impl Iterator<Item = u64> + '_ {
        self.row_data
            .iter()
            .map(|row| row.iter().map(|&v| u64::from(v)).sum())
    }

    fn column_sums(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.size).map(move |col| self.row_data.iter().map(|row| u64::from(row[col])).sum())
    }

    /// Largest sum over all rows and columns.
    pub fn dominant_sum(&self) -> u64 {
        self.row_sums().chain(self.column_sums()).max().unwrap_or(0)
    }

    pub fn show(&self) -> String {
        self.row_data
            .iter()
            .map(|row| row.iter().join("\t"))
            .join("\n")
    }
}
