use std::fmt;

use super::escape;
use crate::models::Table;

/// One `{columns, rows}` projection rendered as an HTML table, or the error
/// that prevented loading it.
pub struct TableView<'a> {
    name: &'a str,
    source: Result<&'a Table, &'a str>,
}

impl<'a> TableView<'a> {
    #[must_use]
    pub const fn new(name: &'a str, table: &'a Table) -> Self {
        Self {
            name,
            source: Ok(table),
        }
    }

    #[must_use]
    pub const fn failed(name: &'a str, message: &'a str) -> Self {
        Self {
            name,
            source: Err(message),
        }
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<div class=\"normalized-table\"><h3>Table: {}</h3>",
            escape(self.name)
        )?;

        let table = match self.source {
            Ok(table) => table,
            Err(message) => {
                return write!(f, "<div class=\"error\">{}</div></div>", escape(message));
            }
        };

        f.write_str("<table class=\"data-table\"><thead><tr>")?;
        for column in &table.columns {
            match column.key.label() {
                Some(key) => write!(f, "<th>{} ({key})</th>", escape(&column.field))?,
                None => write!(f, "<th>{}</th>", escape(&column.field))?,
            }
        }
        f.write_str("</tr></thead><tbody>")?;

        if table.is_empty() {
            write!(
                f,
                "<tr><td colspan=\"{}\">No data</td></tr>",
                table.columns.len()
            )?;
        }

        for row in &table.rows {
            f.write_str("<tr>")?;
            for column in &table.columns {
                let value = row
                    .get(&column.field)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                write!(f, "<td>{}</td>", escape(&value))?;
            }
            f.write_str("</tr>")?;
        }

        f.write_str("</tbody></table></div>")
    }
}
