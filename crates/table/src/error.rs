use thiserror::Error;

/// Reasons a parse clears the table's validity flag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Cannot detect delimiter: first line has {tabs} tabs, {commas} commas, {semicolons} semicolons"
    )]
    AmbiguousDelimiter {
        tabs: usize,
        commas: usize,
        semicolons: usize,
    },

    #[error("Header row is empty")]
    EmptyHeader,

    #[error("Row {row} has {actual} cells, expected {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors that can occur during table operations
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Table is invalid: {0}")]
    InvalidTable(ParseError),

    #[error("Row not found: {name}")]
    RowNotFound { name: String },

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Row index out of bounds: {index} (table has {count} rows)")]
    RowIndexOutOfBounds { index: usize, count: usize },

    #[error("Column index out of bounds: {index} (table has {count} columns)")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    #[error("Type mismatch: expected {expected}, cell holds {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
