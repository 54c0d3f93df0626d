//! Row-major matrices and axis helpers.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Dense row-major matrix.
///
/// Rows follow permeability, columns follow gross height.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Reshape a flat column into `rows x cols`, in the order given.
    pub fn reshape(values: Vec<f64>, rows: usize, cols: usize) -> Result<Grid, GridError> {
        if values.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                records: values.len(),
                rows,
                cols,
            });
        }
        Ok(Grid { rows, cols, values })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// Nested rows, the shape contour renderers take as `z`.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.values.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.values)
    }
}

/// Observed minimum and maximum of a value set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// `None` for an empty slice. NaN values are ignored.
    pub fn of(values: &[f64]) -> Option<Bounds> {
        values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some(Bounds { min: v, max: v }),
                Some(b) => Some(Bounds {
                    min: b.min.min(v),
                    max: b.max.max(v),
                }),
            })
    }
}

/// Sorted distinct values, the grid axes.
pub fn unique_sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted
}
