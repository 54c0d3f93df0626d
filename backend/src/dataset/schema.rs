//! Positional column layout of the sensitivity table.
//!
//! | index | content |
//! |-------|---------|
//! | 0     | permeability (`Perm (mD)`) |
//! | 1     | gross height (`Gross_Height (m)`) |
//! | 2-6   | ignored |
//! | 7-10  | EUR vert/no-cutoff, vert/cutoff, hz/no-cutoff, hz/cutoff |
//! | 11-14 | cost, same order |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SchemaError;
use crate::models::{Metric, MetricGroup};

pub const PERM_COLUMN: usize = 0;
pub const HEIGHT_COLUMN: usize = 1;
pub const EUR_COLUMNS: [usize; 4] = [7, 8, 9, 10];
pub const COST_COLUMNS: [usize; 4] = [11, 12, 13, 14];
pub const REQUIRED_COLUMNS: usize = 15;

/// Header labels of the two derived delta columns.
pub const DELTA_NO_CUTOFF_HEADER: &str = "Delta_Vert_Hz_NoCutoff";
pub const DELTA_CUTOFF_HEADER: &str = "Delta_Vert_Hz_Cutoff";

static UNIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").expect("valid unit regex"));

/// Text inside the first pair of parentheses, trimmed.
///
/// `"Cost_Hz_Cutoff (kUSD)"` gives `"kUSD"`.
pub fn unit_label(header: &str) -> Option<String> {
    UNIT_RE
        .captures(header)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|unit| !unit.is_empty())
}

/// Validated header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    headers: Vec<String>,
    eur_unit: String,
    cost_unit: String,
}

impl Schema {
    /// Check the header row against the fixed layout.
    pub fn from_headers(headers: &[String]) -> Result<Schema, SchemaError> {
        if headers.len() < REQUIRED_COLUMNS {
            return Err(SchemaError::TooFewColumns {
                found: headers.len(),
                required: REQUIRED_COLUMNS,
            });
        }

        let unit_of = |column: usize| {
            unit_label(&headers[column]).ok_or_else(|| SchemaError::MissingUnit {
                column,
                header: headers[column].clone(),
            })
        };
        let eur_unit = unit_of(EUR_COLUMNS[0])?;
        let cost_unit = unit_of(COST_COLUMNS[0])?;

        Ok(Schema {
            headers: headers.to_vec(),
            eur_unit,
            cost_unit,
        })
    }

    /// Unit shown on the color bar. Deltas are cost differences.
    pub fn unit_for(&self, metric: Metric) -> &str {
        match metric.group() {
            MetricGroup::Eur => &self.eur_unit,
            MetricGroup::Cost | MetricGroup::Delta => &self.cost_unit,
        }
    }

    pub fn perm_header(&self) -> &str {
        &self.headers[PERM_COLUMN]
    }

    pub fn height_header(&self) -> &str {
        &self.headers[HEIGHT_COLUMN]
    }

    /// Header label of a metric, used as the graph title.
    pub fn header_for(&self, metric: Metric) -> &str {
        match metric {
            Metric::DeltaNoCutoff => DELTA_NO_CUTOFF_HEADER,
            Metric::DeltaCutoff => DELTA_CUTOFF_HEADER,
            _ => &self.headers[source_column(metric).unwrap_or(PERM_COLUMN)],
        }
    }

    /// Titles for metrics 1-10; index is `id - 1`.
    pub fn metric_columns(&self) -> Vec<String> {
        Metric::ALL
            .iter()
            .map(|m| self.header_for(*m).to_string())
            .collect()
    }
}

/// Source column of a stored metric; `None` for derived deltas.
pub fn source_column(metric: Metric) -> Option<usize> {
    let slot = metric.slot()?;
    match metric.group() {
        MetricGroup::Eur => Some(EUR_COLUMNS[slot]),
        MetricGroup::Cost => Some(COST_COLUMNS[slot]),
        MetricGroup::Delta => None,
    }
}

#[cfg(test)]
pub(crate) fn sample_headers() -> Vec<String> {
    [
        "Perm (mD)",
        "Gross_Height (m)",
        "Porosity (%)",
        "Sw (%)",
        "Pressure (bar)",
        "Depth (m)",
        "Case",
        "EUR_Vert_NoCutoff (MMbbl)",
        "EUR_Vert_Cutoff (MMbbl)",
        "EUR_Hz_NoCutoff (MMbbl)",
        "EUR_Hz_Cutoff (MMbbl)",
        "Cost_Vert_NoCutoff (kUSD)",
        "Cost_Vert_Cutoff (kUSD)",
        "Cost_Hz_NoCutoff (kUSD)",
        "Cost_Hz_Cutoff (kUSD)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
