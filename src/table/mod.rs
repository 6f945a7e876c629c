pub use self::io::{read_csv, write_csv};

mod io;

use std::fmt;

use crate::error::{Error, Result};

/// A scalar cell value. Tables are schemaless across datasets, so every cell
/// carries its own type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Parses a CSV cell: integer first, then float, falling back to text.
    pub fn parse(cell: &str) -> Value {
        if let Ok(n) = cell.parse::<i64>() {
            Value::Int(n)
        } else if let Ok(x) = cell.parse::<f64>() {
            Value::Float(x)
        } else {
            Value::Text(cell.to_string())
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

/// An ordered sequence of uniform records: every row has exactly one value
/// per field, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    fields: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(name: &str, fields: &[&str]) -> Table {
        Table {
            name: name.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a record. The row must have one value per field.
    pub fn push(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.fields.len() {
            return Err(Error::DataFormat(format!(
                "table '{}': row has {} values, expected {}",
                self.name,
                row.len(),
                self.fields.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    pub fn get(&self, row: usize, field: &str) -> Option<&Value> {
        let index = self.field_index(field)?;
        self.rows.get(row).map(|r| &r[index])
    }

    /// Borrowed column in row order.
    pub fn column(&self, field: &str) -> Result<Vec<&Value>> {
        let index = self.field_index(field).ok_or_else(|| {
            Error::DataFormat(format!("table '{}': no field '{}'", self.name, field))
        })?;
        Ok(self.rows.iter().map(|r| &r[index]).collect())
    }

    /// Column converted to f64, failing on any non-numeric cell.
    pub fn numeric_column(&self, field: &str) -> Result<Vec<f64>> {
        self.column(field)?
            .iter()
            .map(|v| {
                v.as_f64().ok_or_else(|| {
                    Error::DataFormat(format!(
                        "table '{}': field '{}' has non-numeric value '{}'",
                        self.name, field, v
                    ))
                })
            })
            .collect()
    }

    /// Appends a new field with one value per existing row.
    pub fn add_field(&mut self, field: &str, values: Vec<Value>) -> Result<()> {
        if self.field_index(field).is_some() {
            return Err(Error::DataFormat(format!(
                "table '{}': field '{}' already exists",
                self.name, field
            )));
        }
        if values.len() != self.rows.len() {
            return Err(Error::DataFormat(format!(
                "table '{}': {} values for field '{}', expected {}",
                self.name,
                values.len(),
                field,
                self.rows.len()
            )));
        }
        self.fields.push(field.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }
}
