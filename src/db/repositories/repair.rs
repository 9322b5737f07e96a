use crate::entities::{prelude::*, repairs};
use crate::models::{Cell, Column, KeyKind, Order, Row, Table};
use anyhow::{Context, Result};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, QueryResult, Set, Statement,
};
use tracing::{debug, info};

/// Repository for the `repairs` table plus the generic introspection the
/// normalization page needs.
pub struct RepairRepository {
    conn: DatabaseConnection,
}

impl RepairRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_order_model(r: repairs::Model) -> Order {
        Order {
            id: r.id,
            username: r.username,
            laptop_brands: r.laptop_brands,
            submit_date: r.submit_date,
        }
    }

    // ========================================================================
    // Orders
    // ========================================================================

    pub async fn insert(&self, username: &str, laptop_brands: &str) -> Result<i32> {
        let active_model = repairs::ActiveModel {
            username: Set(username.to_string()),
            laptop_brands: Set(laptop_brands.to_string()),
            ..Default::default()
        };

        let res = Repairs::insert(active_model).exec(&self.conn).await?;
        info!(
            repair_id = res.last_insert_id,
            "Recorded repair order for {}: {}", username, laptop_brands
        );
        Ok(res.last_insert_id)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Order>> {
        let result = Repairs::find_by_id(id).one(&self.conn).await?;
        Ok(result.map(Self::map_order_model))
    }

    /// All orders, newest first. Orders sharing a timestamp fall back to id.
    pub async fn list_recent_first(&self) -> Result<Vec<Order>> {
        let rows = Repairs::find()
            .order_by_desc(repairs::Column::SubmitDate)
            .order_by_desc(repairs::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_order_model).collect())
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub async fn describe(&self, table_name: &str) -> Result<Vec<Column>> {
        ensure_identifier(table_name)?;

        let backend = self.conn.get_database_backend();
        let rows = self
            .conn
            .query_all(Statement::from_sql_and_values(
                backend,
                "SELECT name, type, pk FROM pragma_table_info(?) ORDER BY cid",
                [table_name.into()],
            ))
            .await
            .with_context(|| format!("Failed to describe table '{table_name}'"))?;

        if rows.is_empty() {
            anyhow::bail!("Table '{table_name}' doesn't exist");
        }

        rows.iter().map(decode_column).collect()
    }

    pub async fn fetch_all(&self, table_name: &str) -> Result<Vec<Row>> {
        let columns = self.describe(table_name).await?;
        self.fetch_rows(table_name, &columns).await
    }

    /// Column metadata and every row, in storage order.
    pub async fn table(&self, table_name: &str) -> Result<Table> {
        let columns = self.describe(table_name).await?;
        let rows = self.fetch_rows(table_name, &columns).await?;
        debug!(table = table_name, rows = rows.len(), "Loaded table");
        Ok(Table::with_rows(columns, rows))
    }

    async fn fetch_rows(&self, table_name: &str, columns: &[Column]) -> Result<Vec<Row>> {
        let backend = self.conn.get_database_backend();
        // Identifiers cannot be bound, `describe` has already checked the name.
        let sql = format!("SELECT * FROM \"{table_name}\"");

        let results = self
            .conn
            .query_all(Statement::from_string(backend, sql))
            .await
            .with_context(|| format!("Failed to read table '{table_name}'"))?;

        Ok(results.iter().map(|r| decode_row(r, columns)).collect())
    }
}

fn ensure_identifier(table_name: &str) -> Result<()> {
    let valid = !table_name.is_empty()
        && table_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !table_name.starts_with(|c: char| c.is_ascii_digit());

    if !valid {
        anyhow::bail!("Invalid table name: '{table_name}'");
    }
    Ok(())
}

fn decode_column(row: &QueryResult) -> Result<Column> {
    let field: String = row.try_get("", "name")?;
    let sql_type: String = row.try_get("", "type")?;
    let pk: i32 = row.try_get("", "pk")?;

    let key = if pk > 0 {
        KeyKind::Primary
    } else {
        KeyKind::None
    };
    Ok(Column::new(field, sql_type, key))
}

fn decode_row(result: &QueryResult, columns: &[Column]) -> Row {
    columns
        .iter()
        .map(|column| (column.field.clone(), decode_cell(result, column)))
        .collect()
}

fn decode_cell(result: &QueryResult, column: &Column) -> Cell {
    let field = column.field.as_str();

    if column.is_integer() {
        if let Ok(value) = result.try_get::<Option<i64>>("", field) {
            return value.map_or(Cell::Null, Cell::Integer);
        }
    }

    match result.try_get::<Option<String>>("", field) {
        Ok(value) => value.map_or(Cell::Null, Cell::Text),
        Err(_) => result
            .try_get::<Option<i64>>("", field)
            .ok()
            .flatten()
            .map_or(Cell::Null, Cell::Integer),
    }
}
