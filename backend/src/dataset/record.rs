//! One row of the sensitivity table.

use crate::error::TableError;
use crate::parser::{parse_cell, RawRow};
use crate::models::{Metric, MetricGroup};

use super::schema::{COST_COLUMNS, EUR_COLUMNS, HEIGHT_COLUMN, PERM_COLUMN};

/// Magnitude limit of the vertical-minus-horizontal cost delta.
pub const DELTA_LIMIT: f64 = 10.0;

/// Clamp a cost difference into `[-DELTA_LIMIT, DELTA_LIMIT]`.
///
/// An undefined difference (`inf - inf`) lands on the lower bound.
pub fn clamp_delta(vertical: f64, horizontal: f64) -> f64 {
    let delta = vertical - horizontal;
    if delta.is_nan() {
        return -DELTA_LIMIT;
    }
    delta.clamp(-DELTA_LIMIT, DELTA_LIMIT)
}

/// Numeric view of a table row with missing values zero-filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub perm: f64,
    pub height: f64,
    /// vert/no-cutoff, vert/cutoff, hz/no-cutoff, hz/cutoff
    pub eur: [f64; 4],
    /// Same order as `eur`.
    pub cost: [f64; 4],
}

impl Record {
    /// Read the positional columns of `row`.
    ///
    /// `headers` only names the column in error messages.
    pub fn from_row(row: &RawRow, headers: &[String]) -> Result<Record, TableError> {
        let number = |column: usize| -> Result<f64, TableError> {
            let raw = row.cell(column);
            parse_cell(raw)
                .map(|v| v.unwrap_or(0.0))
                .map_err(|_| TableError::InvalidNumber {
                    line: row.line,
                    column: headers
                        .get(column)
                        .cloned()
                        .unwrap_or_else(|| format!("#{}", column)),
                    value: raw.to_string(),
                })
        };

        let mut eur = [0.0; 4];
        let mut cost = [0.0; 4];
        for slot in 0..4 {
            eur[slot] = number(EUR_COLUMNS[slot])?;
            cost[slot] = number(COST_COLUMNS[slot])?;
        }

        Ok(Record {
            perm: number(PERM_COLUMN)?,
            height: number(HEIGHT_COLUMN)?,
            eur,
            cost,
        })
    }

    /// Clamped vertical minus horizontal cost.
    pub fn delta(&self, cutoff: bool) -> f64 {
        if cutoff {
            clamp_delta(self.cost[1], self.cost[3])
        } else {
            clamp_delta(self.cost[0], self.cost[2])
        }
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match (metric.group(), metric.slot()) {
            (MetricGroup::Eur, Some(slot)) => self.eur[slot],
            (MetricGroup::Cost, Some(slot)) => self.cost[slot],
            _ => self.delta(metric.cutoff()),
        }
    }
}
