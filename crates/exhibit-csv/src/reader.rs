//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use exhibit_layout::{Frame, Value};

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Loads CSV data into a [`Frame`]
pub struct CsvFrameReader;

impl CsvFrameReader {
    /// Read a CSV file into a frame
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Frame> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let frame = Self::read(file, options)?;
        log::debug!(
            "read {} rows x {} columns from {}",
            frame.n_rows(),
            frame.n_cols(),
            path.display()
        );
        Ok(frame)
    }

    /// Read CSV from a reader into a frame
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Frame> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .from_reader(reader);

        let mut headers: Option<Vec<String>> = if options.has_header {
            Some(csv_reader.headers()?.iter().map(str::to_string).collect())
        } else {
            None
        };

        let mut labels = Vec::new();
        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let names = headers.get_or_insert_with(|| {
                (0..record.len()).map(|i| i.to_string()).collect()
            });
            check_index_col(options.index_col, names.len())?;

            let mut row = Vec::with_capacity(record.len());
            for (col, field) in record.iter().enumerate() {
                if Some(col) == options.index_col {
                    labels.push(field.to_string());
                } else if options.auto_detect_types {
                    row.push(detect_value(field));
                } else if field.is_empty() {
                    row.push(Value::Null);
                } else {
                    row.push(Value::Text(field.to_string()));
                }
            }
            rows.push(row);
        }

        let mut names = headers.unwrap_or_default();
        let index_name = match options.index_col {
            Some(index_col) => {
                check_index_col(Some(index_col), names.len())?;
                Some(names.remove(index_col))
            }
            None => None,
        };

        let mut frame = Frame::from_rows(names, rows)?;
        if let Some(name) = index_name {
            frame = frame.with_index(labels)?;
            if !name.is_empty() {
                frame = frame.with_index_name(name);
            }
        }
        Ok(frame)
    }
}

fn check_index_col(index_col: Option<usize>, columns: usize) -> CsvResult<()> {
    match index_col {
        Some(index) if index >= columns => Err(CsvError::IndexColumn { index, columns }),
        _ => Ok(()),
    }
}

/// Detect the type of a field value
///
/// Empty fields are missing values. Integers, floats, `true`/`false`,
/// `YYYY-MM-DD` dates and `YYYY-MM-DD HH:MM:SS` date-times are recognized;
/// anything else is text.
pub fn detect_value(field: &str) -> Value {
    let trimmed = field.trim();

    if trimmed.is_empty() {
        return Value::Null;
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Int(n);
    }

    if let Ok(n) = trimmed.parse::<f64>() {
        return Value::Float(n);
    }

    match trimmed.to_lowercase().as_str() {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT) {
        return Value::DateTime(dt);
    }

    if let Ok(d) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Value::from(d);
    }

    Value::Text(field.to_string())
}
