//! The store boundary consumed by the mapping engine.
//!
//! The engine depends only on the [`Connection`] capability, never on a
//! specific store implementation. The connection is injected by the caller,
//! who owns its lifecycle and any serialization of concurrent access; the
//! engine adds no locking, timeouts or retries of its own.

use thiserror::Error;

use crate::orm::value::Value;

/// An error reported by the underlying store driver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates a new [`StoreError`] from a driver message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single result row, supporting named-column lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<(String, Value)>,
}

impl Row {
    /// Creates a [`Row`] from column name/value pairs.
    pub fn new(values: Vec<(String, Value)>) -> Self {
        Self { values }
    }

    /// Returns the value of the named column, if the row carries it.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

/// A connection to a relational store.
///
/// Statements arrive fully built, with all runtime values passed as
/// positional parameters in placeholder order.
pub trait Connection {
    /// Executes a DDL/DML statement, returning the affected-row count.
    fn execute(&self, sql: &str, params: &[Value]) -> Result<u64, StoreError>;

    /// Executes a DQL statement, returning the matching rows in result-set order.
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StoreError>;
}

// several repositories may share one borrowed connection
impl<C> Connection for &C
where
    C: Connection,
{
    fn execute(&self, sql: &str, params: &[Value]) -> Result<u64, StoreError> {
        (**self).execute(sql, params)
    }

    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, StoreError> {
        (**self).query(sql, params)
    }
}
