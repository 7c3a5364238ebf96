//! # tbl-cli
//!
//! Command-line interface for inspecting delimited tables.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tbl_table::{CellValue, ParseOptions, Table};
use tracing_subscriber::EnvFilter;

/// tbl - typed tables from tab- or comma-separated text
#[derive(Parser)]
#[command(name = "tbl")]
#[command(author, version, about = "Parse delimited text into a typed table", long_about = None)]
struct Cli {
    /// Table file to load
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format (summary, table, json)
    #[arg(short = 'f', long = "format", default_value = "summary")]
    format: OutputFormat,

    /// Print a single cell looked up by row and column name
    #[arg(short = 'g', long = "get", num_args = 2, value_names = ["ROW", "COLUMN"])]
    get: Option<Vec<String>>,

    /// Treat double quotes as ordinary characters
    #[arg(long = "no-quoting")]
    no_quoting: bool,

    /// Accept semicolon delimiters and decimal commas
    #[arg(long = "continental")]
    continental: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for a loaded table.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Shape and column names (default)
    #[default]
    Summary,
    /// Aligned text table
    Table,
    /// JSON array of row objects
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let table = load_table(&cli)?;
    tracing::info!(
        "Loaded {} ({} rows, {} columns)",
        cli.file.display(),
        table.num_rows(),
        table.num_columns()
    );

    if let Some(names) = &cli.get {
        let [row, column] = names.as_slice() else {
            anyhow::bail!("--get expects a row name and a column name");
        };
        let cell = table.get_by_name(row, column)?;
        println!("{cell}");
        return Ok(());
    }

    match cli.format {
        OutputFormat::Summary => print_summary(&table),
        OutputFormat::Table => print!("{}", render_table(&table)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table_to_json(&table))?);
        }
    }

    Ok(())
}

/// Load the table named on the command line with the requested options.
fn load_table(cli: &Cli) -> Result<Table> {
    let options = ParseOptions::new()
        .with_quoting(!cli.no_quoting)
        .with_continental(cli.continental);

    Table::from_path(&cli.file, options)
        .with_context(|| format!("Failed to load table: {}", cli.file.display()))
}

/// Print validity, delimiter, shape and column names.
fn print_summary(table: &Table) {
    let delimiter = table
        .delimiter()
        .map_or_else(|| "none".to_string(), |d| d.to_string());
    println!("{} {}", "valid:".bold(), "yes".green());
    println!("{} {}", "delimiter:".bold(), delimiter);
    println!("{} {}", "rows:".bold(), table.num_rows());
    println!("{} {}", "columns:".bold(), table.num_columns());
    for (index, name) in table.column_names().enumerate() {
        println!("  {index:>3}  {}", name.cyan());
    }
}

/// Render the table as aligned text with a highlighted header.
fn render_table(table: &Table) -> String {
    let headers: Vec<&str> = table.column_names().collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.iter().map(format_cell).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line = pad_line(headers.iter().copied(), &widths);
    out.push_str(&header_line.bold().to_string());
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        out.push_str(&pad_line(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out
}

fn pad_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

/// Format a cell for text output, escaping line breaks.
fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::String(s) => s.replace('\n', "\\n").replace('\r', "\\r"),
        other => other.to_string(),
    }
}

/// Convert the table to a JSON array of objects keyed by column name.
///
/// With duplicate column names the first column wins.
fn table_to_json(table: &Table) -> Vec<serde_json::Value> {
    let headers: Vec<&str> = table.column_names().collect();
    table
        .rows()
        .map(|row| {
            let mut object = serde_json::Map::new();
            for (name, cell) in headers.iter().zip(row) {
                if !object.contains_key(*name) {
                    object.insert((*name).to_string(), cell_to_json(cell));
                }
            }
            serde_json::Value::Object(object)
        })
        .collect()
}

fn cell_to_json(cell: &CellValue) -> serde_json::Value {
    match cell {
        CellValue::Int(i) => serde_json::Value::from(*i),
        // Non-finite floats have no JSON form
        CellValue::Float(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        CellValue::String(s) => serde_json::Value::String(s.clone()),
    }
}
