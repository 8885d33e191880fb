//! Labeled two-dimensional datasets
//!
//! A [`Frame`] is an ordered list of named [`Series`] sharing one row index.
//! Each series carries a [`DType`] inferred from its values, which drives the
//! default cell format and the column width rule.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use exhibit_core::{CellValue, FormatSpec};

use crate::error::{LayoutError, LayoutResult};

/// A single dataset value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Missing value; written as an empty (styled) cell
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Whether the value is missing (`Null` or a NaN float)
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// The cell written for this value
    pub fn to_cell_value(&self) -> CellValue {
        if self.is_null() {
            return CellValue::Empty;
        }
        match self {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Boolean(*b),
            Value::Int(n) => CellValue::Number(*n as f64),
            Value::Float(f) => CellValue::Number(*f),
            Value::Text(s) => CellValue::String(s.clone()),
            Value::DateTime(dt) => CellValue::datetime(dt),
        }
    }

    /// Length of the rendered value in characters
    pub fn display_len(&self) -> usize {
        self.to_string().chars().count()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) if x.is_nan() => Ok(()),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::DateTime(d.and_time(NaiveTime::MIN))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Int,
    Float,
    Bool,
    DateTime,
    Text,
}

impl DType {
    /// Infer the type of a column from its non-null values
    ///
    /// Mixed ints and floats are `Float`; any other mix is `Text`. A column
    /// with no values at all is `Float`.
    pub fn infer(values: &[Value]) -> DType {
        let mut dtype: Option<DType> = None;
        for value in values.iter().filter(|v| !v.is_null()) {
            let this = match value {
                Value::Null => continue,
                Value::Bool(_) => DType::Bool,
                Value::Int(_) => DType::Int,
                Value::Float(_) => DType::Float,
                Value::Text(_) => DType::Text,
                Value::DateTime(_) => DType::DateTime,
            };
            dtype = Some(match (dtype, this) {
                (None, t) => t,
                (Some(a), b) if a == b => a,
                (Some(DType::Int), DType::Float) | (Some(DType::Float), DType::Int) => {
                    DType::Float
                }
                _ => return DType::Text,
            });
        }
        dtype.unwrap_or(DType::Float)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DType::Int | DType::Float)
    }

    /// The format a column of this type gets when the caller gives none
    pub fn default_format(&self) -> FormatSpec {
        match self {
            DType::Float => FormatSpec::num_format("#,0.00"),
            DType::Int => FormatSpec::num_format("#,0"),
            DType::DateTime => FormatSpec::num_format("yyyy-mm-dd hh:mm"),
            DType::Text => FormatSpec::new().with("align", "left"),
            DType::Bool => FormatSpec::new().with("align", "center"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DType::Int => "int",
            DType::Float => "float",
            DType::Bool => "bool",
            DType::DateTime => "datetime",
            DType::Text => "text",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named column of values
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    values: Vec<Value>,
    dtype: DType,
}

impl Series {
    pub fn new<S, I, V>(name: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let dtype = DType::infer(&values);
        Self {
            name: name.into(),
            values,
            dtype,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered set of equally long columns with a row index
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<Series>,
    index: Vec<String>,
    index_name: Option<String>,
}

impl Frame {
    /// Build a frame; the index defaults to `0..n`
    pub fn new(columns: Vec<Series>) -> LayoutResult<Self> {
        let n_rows = columns.first().map_or(0, Series::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(LayoutError::RaggedFrame {
                column: bad.name().to_string(),
                expected: n_rows,
                found: bad.len(),
            });
        }
        Ok(Self {
            columns,
            index: (0..n_rows).map(|i| i.to_string()).collect(),
            index_name: None,
        })
    }

    /// Build a frame from row-major values
    pub fn from_rows<S: Into<String>>(
        column_names: impl IntoIterator<Item = S>,
        rows: Vec<Vec<Value>>,
    ) -> LayoutResult<Self> {
        let names: Vec<String> = column_names.into_iter().map(Into::into).collect();
        let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(rows.len()); names.len()];
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(LayoutError::RaggedFrame {
                    column: format!("row {}", i),
                    expected: names.len(),
                    found: row.len(),
                });
            }
            for (col, value) in columns.iter_mut().zip(row) {
                col.push(value);
            }
        }
        Frame::new(
            names
                .into_iter()
                .zip(columns)
                .map(|(name, values)| Series::new(name, values))
                .collect(),
        )
    }

    /// Replace the row labels
    pub fn with_index<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> LayoutResult<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if !self.columns.is_empty() && labels.len() != self.n_rows() {
            return Err(LayoutError::RaggedFrame {
                column: "index".to_string(),
                expected: self.n_rows(),
                found: labels.len(),
            });
        }
        self.index = labels;
        Ok(self)
    }

    /// Name the index (used as the default index label)
    pub fn with_index_name<S: Into<String>>(mut self, name: S) -> Self {
        self.index_name = Some(name.into());
        self
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    pub fn column(&self, i: usize) -> Option<&Series> {
        self.columns.get(i)
    }

    /// Position of a column by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Series::name)
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&Value> {
        self.columns.get(col).and_then(|c| c.values.get(row))
    }
}
