//! Parameterized statement generation for mapped entities.
//!
//! Every builder is a pure function of the entity's static metadata: the SQL
//! text is fully assembled before execution and all runtime values are bound
//! through positional `?` placeholders, never interpolated into the text.

use thiserror::Error;

use crate::orm::connection::StoreError;
use crate::orm::table::{ColumnDef, Entity};

/// The result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// An enum representing possible errors that can occur during query operations.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The store failed to execute the statement.
    #[error("statement execution failed: {0}")]
    Execution(#[from] StoreError),

    /// Tried to reference a column that does not exist in the entity's column set.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Tried to assign a value whose kind does not match the column's declared kind.
    #[error("Type mismatch on column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        column: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Builds the `CREATE TABLE IF NOT EXISTS` DDL for `E`.
///
/// Column order matches [`Entity::columns`] order. An entity with zero mapped
/// columns still yields valid DDL through a single synthetic auto-incrementing
/// key column.
pub fn create_table<E: Entity>() -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (", E::table_name());

    let columns = E::columns();
    if columns.is_empty() {
        sql.push_str("dummy_id BIGSERIAL PRIMARY KEY");
    } else {
        for (idx, col) in columns.iter().enumerate() {
            if idx > 0 {
                sql.push_str(", ");
            }
            sql.push_str(col.name);
            sql.push(' ');
            sql.push_str(col.kind.sql_type());
            if !col.nullable {
                sql.push_str(" NOT NULL");
            }
            if col.unique {
                sql.push_str(" UNIQUE");
            }
            if col.primary_key {
                sql.push_str(" PRIMARY KEY");
            }
        }
    }

    sql.push_str(");");
    sql
}

/// Builds `INSERT INTO <table> (<cols>) VALUES (?, ...)` over all mapped columns.
pub fn insert<E: Entity>() -> String {
    let columns = E::columns()
        .iter()
        .map(|col| col.name)
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = E::columns()
        .iter()
        .map(|_| "?")
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        E::table_name(),
        columns,
        placeholders
    )
}

/// Builds `SELECT * FROM <table>`.
pub fn select_all<E: Entity>() -> String {
    format!("SELECT * FROM {}", E::table_name())
}

/// Builds `SELECT * FROM <table> WHERE <pk> = ?`.
pub fn select_by_pk<E: Entity>(pk: &ColumnDef) -> String {
    format!("SELECT * FROM {} WHERE {} = ?", E::table_name(), pk.name)
}

/// Builds `UPDATE <table> SET <col> = ?, ... WHERE <pk> = ?`.
///
/// The SET list covers every mapped column except the primary key; the
/// primary key appears only in the predicate and binds last.
pub fn update<E: Entity>(pk: &ColumnDef) -> String {
    let set_clause = E::columns()
        .iter()
        .filter(|col| col.name != pk.name)
        .map(|col| format!("{} = ?", col.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        E::table_name(),
        set_clause,
        pk.name
    )
}

/// Builds `DELETE FROM <table> WHERE <pk> = ?`.
pub fn delete<E: Entity>(pk: &ColumnDef) -> String {
    format!("DELETE FROM {} WHERE {} = ?", E::table_name(), pk.name)
}
