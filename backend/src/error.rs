//! Error types for the Wellmap load and view pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`TableError`] - Delimited table reading errors
//! - [`SchemaError`] - Column layout errors detected at load time
//! - [`GridError`] - Reshape errors
//! - [`DatasetError`] - Top-level load errors
//! - [`ViewError`] - View computation errors
//! - [`ServerError`] - HTTP layer errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Table Errors
// =============================================================================

/// Errors while reading the delimited input table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited content.
    #[error("Invalid table format: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file.
    #[error("Table file is empty")]
    Empty,

    /// Delimiter cannot be used for byte-level splitting.
    #[error("Delimiter '{0}' must be a single ASCII character")]
    InvalidDelimiter(char),

    /// Header line present but blank.
    #[error("No headers found in table")]
    NoHeaders,

    /// A cell that should be numeric is not.
    #[error("Line {line}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors in the positional column layout.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The header row is shorter than the fixed layout.
    #[error("Expected at least {required} columns, found {found}")]
    TooFewColumns { found: usize, required: usize },

    /// A header that must carry a `Name (unit)` label does not.
    #[error("Column {column} ('{header}') has no unit in parentheses")]
    MissingUnit { column: usize, header: String },
}

// =============================================================================
// Grid Errors
// =============================================================================

/// Errors while reshaping a column into a matrix.
#[derive(Debug, Error)]
pub enum GridError {
    /// The record count does not factor into the axis sizes.
    #[error("Cannot reshape {records} records into a {rows}x{cols} grid")]
    ShapeMismatch {
        records: usize,
        rows: usize,
        cols: usize,
    },

    /// An axis has no distinct values.
    #[error("No distinct {0} values")]
    EmptyAxis(&'static str),
}

// =============================================================================
// Dataset Errors (top-level load)
// =============================================================================

/// Top-level dataset loading errors.
///
/// This is the error returned by [`crate::dataset::load_dataset`].
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Table reading error.
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Column layout error.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Reshape error.
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

impl DatasetError {
    /// True when the underlying cause is a missing input file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DatasetError::Table(TableError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound
        )
    }
}

// =============================================================================
// View Errors
// =============================================================================

/// Errors while computing a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Metric id outside 1..=10.
    #[error("Unknown metric id: {0}")]
    UnknownMetric(u8),

    /// Both ends of the color window are zero.
    #[error("Cannot center the color scale on zero for range [{v_min}, {v_max}]")]
    DegenerateRange { v_min: f64, v_max: f64 },

    /// NaN or infinite slider input.
    #[error("{0} must be a finite number")]
    NonFiniteInput(&'static str),

    /// Submit was clicked without a file path.
    #[error("No file path provided")]
    MissingFilePath,

    /// Loading the dataset failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// View error.
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Socket or filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
