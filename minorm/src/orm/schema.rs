//! Idempotent schema generation from entity metadata.

use thiserror::Error;

use crate::orm::connection::{Connection, StoreError};
use crate::orm::query;
use crate::orm::table::Entity;

/// The result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// An error raised while executing the DDL for one table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to create table '{table}': {source}")]
pub struct SchemaError {
    /// The table whose DDL failed to execute.
    pub table: &'static str,
    /// The underlying store error.
    #[source]
    pub source: StoreError,
}

/// Type-erased DDL for one mapped entity, for batch schema setup.
#[derive(Debug, Clone)]
pub struct TableDdl {
    table: &'static str,
    ddl: String,
}

impl TableDdl {
    /// Builds the [`TableDdl`] for an entity type.
    pub fn of<E: Entity>() -> Self {
        Self {
            table: E::table_name(),
            ddl: query::create_table::<E>(),
        }
    }

    /// Returns the table name.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Returns the DDL text.
    pub fn ddl(&self) -> &str {
        &self.ddl
    }
}

/// Generates and executes `CREATE TABLE IF NOT EXISTS` DDL over an injected connection.
///
/// Generation is idempotent: re-running against an existing compatible table
/// is a no-op. Schema drift (added/removed/retyped columns) is not detected.
pub struct SchemaGenerator<C>
where
    C: Connection,
{
    conn: C,
}

impl<C> SchemaGenerator<C>
where
    C: Connection,
{
    /// Creates a generator over the given connection.
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    /// Ensures the table for `E` exists.
    pub fn ensure<E: Entity>(&self) -> SchemaResult<()> {
        self.run(&TableDdl::of::<E>())
    }

    /// Ensures every given table exists.
    ///
    /// A failing table never aborts the batch and nothing is rolled back:
    /// every remaining table is still attempted, each failure is logged, and
    /// the first error is returned once the batch is complete.
    pub fn ensure_all(&self, tables: &[TableDdl]) -> SchemaResult<()> {
        let mut first_error = None;
        for table in tables {
            if let Err(err) = self.run(table) {
                log::warn!(
                    "schema generation failed for table '{}': {}",
                    table.table,
                    err.source
                );
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    fn run(&self, table: &TableDdl) -> SchemaResult<()> {
        log::debug!("generating schema for table '{}'", table.table);
        self.conn
            .execute(&table.ddl, &[])
            .map_err(|source| SchemaError {
                table: table.table,
                source,
            })?;

        Ok(())
    }
}
