//! Typed tables parsed from delimited text
//!
//! Converts tab-, comma-, or (on request) semicolon-separated text into a
//! read-only table whose cells are inferred as integers, floats, or strings.
//! The first line names the columns and the first column of every row names
//! the row, so any cell can be addressed by index or by name.
//!
//! # Examples
//!
//! ```
//! use tbl_table::{CellValue, Table};
//!
//! let table = Table::parse(
//!     "Name Field,Integer Field,Float Field\nRowA,1,4.5\nRowB,2,6.25\n",
//! ).unwrap();
//!
//! assert_eq!(table.num_rows(), 2);
//! assert_eq!(table.num_columns(), 3);
//! assert_eq!(table.value_by_name::<i64>("RowA", "Integer Field").unwrap(), 1);
//! assert_eq!(table.get(1, 2).unwrap(), &CellValue::Float(6.25));
//! ```
//!
//! ## Checking validity instead of handling an error
//!
//! ```
//! use tbl_table::Table;
//!
//! let table = Table::new("a,b\nx,1,2\n");
//! assert!(!table.is_valid());
//! ```
//!
//! ## Quoted cells
//!
//! Double-quoted cells may contain delimiters and line breaks; `""` is a
//! literal quote.
//!
//! ```
//! use tbl_table::Table;
//!
//! let table = Table::parse("Name,Text\nA,\"Test 1, 2, 3\"\n").unwrap();
//! assert_eq!(table.value::<String>(0, 1).unwrap(), "Test 1, 2, 3");
//! ```
//!
//! ## Semicolon-separated text
//!
//! Only tab and comma are detected by default. Semicolon-separated text with
//! decimal commas needs the continental dialect:
//!
//! ```
//! use tbl_table::{ParseOptions, Table};
//!
//! let text = "Name;Float\nA;4,5\n";
//! assert!(Table::parse(text).is_err());
//!
//! let table = Table::parse_with_options(text, ParseOptions::continental()).unwrap();
//! assert_eq!(table.value::<f64>(0, 1).unwrap(), 4.5);
//! ```

mod cell;
mod delimiter;
mod error;
mod load;
mod options;
mod table;
mod tokenizer;

/// Re-export cell value type and typed extraction.
pub use cell::{CellValue, FromCell};
/// Re-export delimiter type.
pub use delimiter::Delimiter;
/// Re-export table error types.
pub use error::{ParseError, Result, TableError};
/// Re-export parse options.
pub use options::ParseOptions;
/// Re-export table type.
pub use table::Table;
