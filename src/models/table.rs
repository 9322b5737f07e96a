//! Loosely-typed table shape shared by the storage gateway, the
//! normalization views and the HTML table renderer.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A single value read from the database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Text(String),
}

impl Cell {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Key flag shown next to a column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum KeyKind {
    #[default]
    None,
    Primary,
    Foreign,
}

impl KeyKind {
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Primary => Some("PRI"),
            Self::Foreign => Some("FK"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub field: String,
    pub sql_type: String,
    pub key: KeyKind,
}

impl Column {
    pub fn new(field: impl Into<String>, sql_type: impl Into<String>, key: KeyKind) -> Self {
        Self {
            field: field.into(),
            sql_type: sql_type.into(),
            key,
        }
    }

    /// SQLite type affinity: any declared type containing "INT" is integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.sql_type.to_ascii_uppercase().contains("INT")
    }
}

pub type Row = HashMap<String, Cell>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub const fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_rows(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field == field)
    }
}
