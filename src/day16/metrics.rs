use itertools::Itertools;

use crate::cube::CubeState;
use crate::error::{CubeError, Result};

impl CubeState {
    /// Product of the two largest absorption totals.
    pub fn top_two_absorption_product(&self) -> Result<u128> {
        self.absorptions()
            .iter()
            .sorted()
            .rev()
            .take(2)
            .try_fold(1u128, |acc, &x| acc.checked_mul(x))
            .ok_or(CubeError::Overflow("top two absorption product"))
    }

    /// Product of every face's dominant sum.
    pub fn dominant_product(&self) -> u128 {
        self.faces()
            .iter()
            .map(|face| u128::from(face.dominant_sum()))
            .product()
    }
}
