//! Sensitivity dataset: load a table and reshape every metric into a grid.
//!
//! # Example
//!
//! ```rust,ignore
//! use wellmap::{load_dataset, Metric};
//!
//! let data = load_dataset("sensitivity.csv", ';')?;
//! let delta = &data.grids[&Metric::DeltaNoCutoff];
//! println!("{}x{} grid in {}", delta.grid.rows(), delta.grid.cols(), delta.unit);
//! ```

pub mod grid;
pub mod record;
pub mod schema;

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::api::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::error::{DatasetResult, GridError};
use crate::models::{Metric, MetricGroup};
use crate::parser::{parse_table_file, RawTable};

pub use grid::{unique_sorted, Bounds, Grid};
pub use record::{clamp_delta, Record, DELTA_LIMIT};
pub use schema::{unit_label, Schema};

/// A metric's matrix with its color-bar unit.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricGrid {
    pub grid: Grid,
    pub unit: String,
}

/// Everything the view layer needs from one load.
#[derive(Debug, Clone)]
pub struct TransformedData {
    pub grids: BTreeMap<Metric, MetricGrid>,
    /// Sorted distinct gross heights (x axis).
    pub heights: Vec<f64>,
    /// Sorted distinct permeabilities (y axis).
    pub perms: Vec<f64>,
    /// Metric titles; index is `id - 1`.
    pub columns: Vec<String>,
    /// Observed range of each EUR metric, for slider auto-ranging.
    pub eur_bounds: BTreeMap<Metric, Bounds>,
    pub record_count: usize,
    pub perm_header: String,
    pub height_header: String,
}

impl TransformedData {
    pub fn grid(&self, metric: Metric) -> Option<&MetricGrid> {
        self.grids.get(&metric)
    }

    pub fn title(&self, metric: Metric) -> &str {
        &self.columns[usize::from(metric.id()) - 1]
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            record_count: self.record_count,
            rows: self.perms.len(),
            cols: self.heights.len(),
            perm_header: self.perm_header.clone(),
            height_header: self.height_header.clone(),
            perms: self.perms.clone(),
            heights: self.heights.clone(),
            units: self
                .grids
                .iter()
                .map(|(m, g)| (m.id(), g.unit.clone()))
                .collect(),
            eur_bounds: self
                .eur_bounds
                .iter()
                .map(|(m, b)| (m.id(), *b))
                .collect(),
        }
    }
}

/// Printable description of a loaded dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub record_count: usize,
    pub rows: usize,
    pub cols: usize,
    pub perm_header: String,
    pub height_header: String,
    pub perms: Vec<f64>,
    pub heights: Vec<f64>,
    pub units: BTreeMap<u8, String>,
    pub eur_bounds: BTreeMap<u8, Bounds>,
}

/// Read the file at `path` and transform it.
pub fn load_dataset<P: AsRef<Path>>(path: P, delimiter: char) -> DatasetResult<TransformedData> {
    let path = path.as_ref();
    log_info(format!("📖 Reading {}", path.display()));

    let parsed = parse_table_file(path, delimiter)?;
    log_success(format!("Read {} rows", parsed.table.rows.len()));
    log_info_indent(format!("Encoding: {}", parsed.encoding), 1);
    log_info_indent(format!("Delimiter: {:?}", parsed.delimiter), 1);

    transform_table(&parsed.table)
}

/// Transform a parsed table into per-metric grids.
///
/// Rows are reshaped in file order, so the table must be a dense factorial
/// sorted by permeability then gross height.
pub fn transform_table(table: &RawTable) -> DatasetResult<TransformedData> {
    let schema = Schema::from_headers(&table.headers)?;

    let records = table
        .rows
        .iter()
        .map(|row| Record::from_row(row, &table.headers))
        .collect::<Result<Vec<_>, _>>()?;

    let perm_values: Vec<f64> = records.iter().map(|r| r.perm).collect();
    let height_values: Vec<f64> = records.iter().map(|r| r.height).collect();
    let perms = unique_sorted(&perm_values);
    let heights = unique_sorted(&height_values);

    if perms.is_empty() {
        return Err(GridError::EmptyAxis("permeability").into());
    }
    if heights.is_empty() {
        return Err(GridError::EmptyAxis("gross height").into());
    }

    let (rows, cols) = (perms.len(), heights.len());
    let mut grids = BTreeMap::new();
    let mut eur_bounds = BTreeMap::new();

    for metric in Metric::ALL {
        let column: Vec<f64> = records.iter().map(|r| r.value(metric)).collect();
        let grid = Grid::reshape(column, rows, cols)?;

        if metric.group() == MetricGroup::Eur {
            if let Some(bounds) = grid.bounds() {
                eur_bounds.insert(metric, bounds);
            }
        }
        grids.insert(
            metric,
            MetricGrid {
                grid,
                unit: schema.unit_for(metric).to_string(),
            },
        );
    }

    let clamped = records
        .iter()
        .flat_map(|r| [r.cost[0] - r.cost[2], r.cost[1] - r.cost[3]])
        .filter(|d| d.is_nan() || d.abs() > DELTA_LIMIT)
        .count();
    if clamped > 0 {
        log_warning(format!(
            "{} cost deltas clamped to ±{}",
            clamped, DELTA_LIMIT
        ));
    }

    log_success(format!(
        "Reshaped {} records into {}x{} grids",
        records.len(),
        rows,
        cols
    ));

    Ok(TransformedData {
        grids,
        heights,
        perms,
        columns: schema.metric_columns(),
        eur_bounds,
        record_count: records.len(),
        perm_header: schema.perm_header().to_string(),
        height_header: schema.height_header().to_string(),
    })
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_csv;
    use super::*;
    use crate::error::{DatasetError, SchemaError, TableError};
    use crate::parser::parse_table;
    use std::io::Write;

    fn transform(csv: &str) -> DatasetResult<TransformedData> {
        let table = parse_table(csv, ';').map_err(DatasetError::from)?;
        transform_table(&table)
    }

    #[test]
    fn test_every_grid_matches_record_count() {
        let data = transform(&sample_csv()).unwrap();

        assert_eq!(data.grids.len(), 10);
        for metric in Metric::ALL {
            let g = &data.grid(metric).unwrap().grid;
            assert_eq!(g.rows() * g.cols(), data.record_count);
            assert_eq!((g.rows(), g.cols()), (2, 2));
        }
    }

    #[test]
    fn test_axes_sorted_distinct() {
        let data = transform(&sample_csv()).unwrap();
        assert_eq!(data.perms, vec![1.0, 2.0]);
        assert_eq!(data.heights, vec![10.0, 20.0]);
    }

    #[test]
    fn test_delta_matrix_example() {
        let data = transform(&sample_csv()).unwrap();

        for metric in [Metric::DeltaNoCutoff, Metric::DeltaCutoff] {
            let g = &data.grid(metric).unwrap().grid;
            assert_eq!(g.to_nested(), vec![vec![2.0, 2.0], vec![2.0, 2.0]]);
        }
    }

    #[test]
    fn test_delta_equals_clamped_difference_per_cell() {
        let csv = sample_csv()
            .replace("5;5;3;3\n", "25;-4;3;9\n");
        let data = transform(&csv).unwrap();

        let vert = &data.grid(Metric::CostVertNoCutoff).unwrap().grid;
        let hz = &data.grid(Metric::CostHzNoCutoff).unwrap().grid;
        let delta = &data.grid(Metric::DeltaNoCutoff).unwrap().grid;
        for row in 0..delta.rows() {
            for col in 0..delta.cols() {
                let expected = clamp_delta(
                    vert.get(row, col).unwrap(),
                    hz.get(row, col).unwrap(),
                );
                assert_eq!(delta.get(row, col), Some(expected));
            }
        }
        assert_eq!(delta.get(0, 0), Some(10.0));

        let cutoff = &data.grid(Metric::DeltaCutoff).unwrap().grid;
        assert_eq!(cutoff.get(0, 0), Some(-10.0));
    }

    #[test]
    fn test_cost_hz_cutoff_reads_its_own_column() {
        let csv = sample_csv().replace("5;5;3;3\n", "5;5;3;1\n");
        let data = transform(&csv).unwrap();

        let g = &data.grid(Metric::CostHzCutoff).unwrap().grid;
        assert_eq!(g.bounds(), Some(Bounds { min: 1.0, max: 1.0 }));
    }

    #[test]
    fn test_units_and_titles() {
        let data = transform(&sample_csv()).unwrap();

        assert_eq!(data.grid(Metric::EurVertCutoff).unwrap().unit, "MMbbl");
        assert_eq!(data.grid(Metric::CostHzNoCutoff).unwrap().unit, "kUSD");
        assert_eq!(data.grid(Metric::DeltaCutoff).unwrap().unit, "kUSD");
        assert_eq!(data.title(Metric::EurVertNoCutoff), "EUR_Vert_NoCutoff (MMbbl)");
        assert_eq!(data.title(Metric::DeltaCutoff), "Delta_Vert_Hz_Cutoff");
    }

    #[test]
    fn test_eur_bounds() {
        let data = transform(&sample_csv()).unwrap();

        let b = data.eur_bounds[&Metric::EurVertNoCutoff];
        assert_eq!((b.min, b.max), (100.0, 130.0));
        let b = data.eur_bounds[&Metric::EurHzCutoff];
        assert_eq!((b.min, b.max), (190.0, 250.0));
        assert_eq!(data.eur_bounds.len(), 4);
    }

    #[test]
    fn test_missing_values_zero_filled_before_delta() {
        let csv = sample_csv().replacen("5;5;3;3\n", "5;5;;3\n", 1);
        let data = transform(&csv).unwrap();

        let hz = &data.grid(Metric::CostHzNoCutoff).unwrap().grid;
        assert_eq!(hz.get(0, 0), Some(0.0));
        let delta = &data.grid(Metric::DeltaNoCutoff).unwrap().grid;
        assert_eq!(delta.get(0, 0), Some(5.0));
    }

    #[test]
    fn test_sparse_grid_is_shape_mismatch() {
        let mut csv = sample_csv();
        csv.push_str("3;10;0.2;0.3;200;1500;A;1;1;1;1;5;5;3;3\n");
        let err = transform(&csv).unwrap_err();

        assert!(matches!(
            err,
            DatasetError::Grid(GridError::ShapeMismatch { records: 5, rows: 3, cols: 2 })
        ));
    }

    #[test]
    fn test_narrow_table_is_schema_error() {
        let err = transform("Perm (mD);Gross_Height (m)\n1;10\n").unwrap_err();
        assert!(matches!(err, DatasetError::Schema(SchemaError::TooFewColumns { .. })));
    }

    #[test]
    fn test_header_only_is_empty_axis() {
        let csv = sample_csv().lines().next().unwrap().to_string();
        let err = transform(&csv).unwrap_err();
        assert!(matches!(err, DatasetError::Grid(GridError::EmptyAxis(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_csv().as_bytes()).unwrap();

        let data = load_dataset(file.path(), ';').unwrap();
        assert_eq!(data.record_count, 4);

        let summary = data.summary();
        assert_eq!((summary.rows, summary.cols), (2, 2));
        assert_eq!(summary.units[&9], "kUSD");
    }

    #[test]
    fn test_invalid_cell_after_blank_line_reports_source_line() {
        let mut lines: Vec<String> = sample_csv().lines().map(str::to_string).collect();
        lines.insert(2, String::new());
        lines[3] = lines[3].replacen("1;20;", "1;twenty;", 1);
        let err = transform(&lines.join("\n")).unwrap_err();

        match &err {
            DatasetError::Table(TableError::InvalidNumber { line, value, .. }) => {
                assert_eq!(*line, 4);
                assert_eq!(value, "twenty");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(err.to_string().contains("Line 4"));
    }

    #[test]
    fn test_infinite_costs_give_bounded_delta() {
        let csv = sample_csv().replacen("5;5;3;3\n", "inf;5;inf;3\n", 1);
        let data = transform(&csv).unwrap();

        let delta = &data.grid(Metric::DeltaNoCutoff).unwrap().grid;
        assert_eq!(delta.get(0, 0), Some(-DELTA_LIMIT));
        assert_eq!(delta.get(0, 1), Some(2.0));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(dir.path().join("nope.csv"), ';').unwrap_err();

        assert!(matches!(err, DatasetError::Table(TableError::Io(_))));
        assert!(err.is_not_found());
    }
}
