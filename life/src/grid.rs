// grid.rs - Grid types for Conway's Game of Life

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Rectangular 2D boolean grid holding one generation.
/// `true` = alive, `false` = dead, addressed as (row, column).
///
/// Row lengths are checked at construction, so a value of this type is
/// always a well-formed grid. Empty grids and 1x1 grids are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl Grid {
    /// Build a grid from row-major cell states, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            for (row, cells) in rows.iter().enumerate() {
                if cells.len() != expected {
                    return Err(GridError::Ragged {
                        row,
                        len: cells.len(),
                        expected,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    // Output of the engine is rectangular by construction
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

// Deserialized through the validating constructor, so a ragged body is a
// deserialization error at the boundary, before the engine ever runs.
impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<bool>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
