use crate::cell::{CellValue, FromCell};
use crate::delimiter::Delimiter;
use crate::error::{ParseError, Result, TableError};
use crate::options::ParseOptions;
use crate::tokenizer::{Boundary, Cursor};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// A typed table parsed from delimited text.
///
/// Cells are stored row-major in one flat vector. Column 0 of each row holds
/// the row key as a string; rows and columns can be addressed by index or by
/// name. A table is read-only once built.
#[derive(Debug, Clone)]
pub struct Table {
    cells: Vec<CellValue>,
    columns: Vec<String>,
    column_index: IndexMap<String, usize>,
    row_index: IndexMap<String, usize>,
    num_columns: usize,
    num_rows: usize,
    delimiter: Option<Delimiter>,
    failure: Option<ParseError>,
}

impl Table {
    /// Parse `text` with default options.
    ///
    /// Never fails: check [`Table::is_valid`] before reading from the table.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_options(text, ParseOptions::default())
    }

    /// Parse `text` with custom options, recording any failure on the table
    #[must_use]
    pub fn with_options(text: &str, options: ParseOptions) -> Self {
        let mut table = Table::empty();
        if let Err(e) = table.read(text, options) {
            tracing::debug!("Table parse failed: {}", e);
            table = Table::empty();
            table.failure = Some(e);
        }
        table
    }

    /// Parse `text` with default options, returning the failure as an error
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_options(text, ParseOptions::default())
    }

    /// Parse `text` with custom options, returning the failure as an error
    pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Self> {
        let table = Self::with_options(text, options);
        match table.failure {
            Some(e) => Err(TableError::Parse(e)),
            None => Ok(table),
        }
    }

    fn empty() -> Self {
        Table {
            cells: Vec::new(),
            columns: Vec::new(),
            column_index: IndexMap::new(),
            row_index: IndexMap::new(),
            num_columns: 0,
            num_rows: 0,
            delimiter: None,
            failure: None,
        }
    }

    fn read(&mut self, text: &str, options: ParseOptions) -> std::result::Result<(), ParseError> {
        let delimiter = Delimiter::detect(text, options.continental)?;
        tracing::debug!("Detected {} delimiter", delimiter);
        self.delimiter = Some(delimiter);

        let mut cursor = Cursor::new(text, delimiter.as_byte(), options.quoting);
        self.read_header(&mut cursor)?;
        while !cursor.at_end() {
            self.read_row(&mut cursor, options.continental)?;
        }

        tracing::debug!(
            "Parsed table with {} rows, {} columns",
            self.num_rows,
            self.num_columns
        );
        Ok(())
    }

    fn read_header(&mut self, cursor: &mut Cursor<'_>) -> std::result::Result<(), ParseError> {
        loop {
            let (token, boundary) = cursor.next_cell();
            let index = self.num_columns;
            let name = token.text.into_owned();
            match self.column_index.entry(name.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
                Entry::Occupied(entry) => {
                    tracing::warn!(
                        "Duplicate column name '{}' at index {}; lookups resolve to index {}",
                        entry.key(),
                        index,
                        entry.get()
                    );
                }
            }
            self.columns.push(name);
            self.num_columns += 1;
            if boundary != Boundary::Delimiter {
                break;
            }
        }
        cursor.skip_line_end();

        // A line of bare delimiters names no columns
        if self.columns.iter().all(String::is_empty) {
            return Err(ParseError::EmptyHeader);
        }
        Ok(())
    }

    fn read_row(
        &mut self,
        cursor: &mut Cursor<'_>,
        decimal_comma: bool,
    ) -> std::result::Result<(), ParseError> {
        let row = self.num_rows;
        let expected = self.num_columns;
        let mismatch = |actual| ParseError::ColumnCountMismatch {
            row,
            expected,
            actual,
        };

        // Column 0 is the row key and is always a string
        let (token, mut boundary) = cursor.next_cell();
        let key = token.text.into_owned();
        match self.row_index.entry(key.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(row);
            }
            Entry::Occupied(entry) => {
                tracing::warn!(
                    "Duplicate row name '{}' at index {}; lookups resolve to index {}",
                    entry.key(),
                    row,
                    entry.get()
                );
            }
        }
        self.cells.push(CellValue::String(key));

        let mut count = 1;
        while boundary == Boundary::Delimiter {
            if count == expected {
                return Err(mismatch(count + 1));
            }
            let (token, next) = cursor.next_cell();
            self.cells.push(CellValue::infer(&token.text, decimal_comma));
            count += 1;
            boundary = next;
        }

        if count != expected {
            return Err(mismatch(count));
        }

        cursor.skip_line_end();
        self.num_rows += 1;
        Ok(())
    }

    /// Whether parsing succeeded
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// The reason parsing failed, if it did
    #[must_use]
    pub fn failure(&self) -> Option<&ParseError> {
        self.failure.as_ref()
    }

    /// The detected delimiter, if detection succeeded
    #[must_use]
    pub fn delimiter(&self) -> Option<Delimiter> {
        self.delimiter
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    fn check_valid(&self) -> Result<()> {
        match &self.failure {
            Some(e) => Err(TableError::InvalidTable(e.clone())),
            None => Ok(()),
        }
    }

    /// Look up a row index by its key
    pub fn row_index(&self, name: &str) -> Result<usize> {
        self.check_valid()?;
        self.row_index
            .get(name)
            .copied()
            .ok_or_else(|| TableError::RowNotFound {
                name: name.to_string(),
            })
    }

    /// Look up a column index by its header name
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.check_valid()?;
        self.column_index
            .get(name)
            .copied()
            .ok_or_else(|| TableError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Header names in column order, duplicates included
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Distinct row keys in index order
    pub fn row_names(&self) -> impl Iterator<Item = &str> {
        self.row_index.keys().map(String::as_str)
    }

    /// Get a cell by row and column index
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.check_valid()?;
        if row >= self.num_rows {
            return Err(TableError::RowIndexOutOfBounds {
                index: row,
                count: self.num_rows,
            });
        }
        if col >= self.num_columns {
            return Err(TableError::ColumnIndexOutOfBounds {
                index: col,
                count: self.num_columns,
            });
        }
        Ok(&self.cells[col + row * self.num_columns])
    }

    /// Get a cell by row key and column name
    pub fn get_by_name(&self, row_name: &str, column_name: &str) -> Result<&CellValue> {
        self.get(self.row_index(row_name)?, self.column_index(column_name)?)
    }

    /// Get a cell as `T`, failing if the stored type differs
    pub fn value<T: FromCell>(&self, row: usize, col: usize) -> Result<T> {
        let cell = self.get(row, col)?;
        T::from_cell(cell).ok_or(TableError::TypeMismatch {
            expected: T::TYPE_NAME,
            actual: cell.type_name(),
        })
    }

    /// Get a cell by names as `T`, failing if the stored type differs
    pub fn value_by_name<T: FromCell>(&self, row_name: &str, column_name: &str) -> Result<T> {
        self.value(self.row_index(row_name)?, self.column_index(column_name)?)
    }

    /// All cells of one row, starting with its key
    pub fn row(&self, row: usize) -> Result<&[CellValue]> {
        self.check_valid()?;
        if row >= self.num_rows {
            return Err(TableError::RowIndexOutOfBounds {
                index: row,
                count: self.num_rows,
            });
        }
        let start = row * self.num_columns;
        Ok(&self.cells[start..start + self.num_columns])
    }

    /// Iterate over rows as cell slices
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        // chunks_exact panics on zero; an invalid table has no columns
        self.cells.chunks_exact(self.num_columns.max(1))
    }

    /// The flat row-major cell sequence
    #[must_use]
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}
