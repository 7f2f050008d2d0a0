//! Prelude exposes all the types for the `minorm` crate.

pub use minorm_macros::Entity;

pub use crate::error::{OrmError, OrmResult};
pub use crate::orm::connection::{Connection, Row, StoreError};
pub use crate::orm::query::{QueryError, QueryResult};
pub use crate::orm::repository::Repository;
pub use crate::orm::schema::{SchemaError, SchemaGenerator, SchemaResult, TableDdl};
pub use crate::orm::table::{ColumnDef, ConfigurationError, ConfigurationResult, Entity};
pub use crate::orm::types::ScalarKind;
pub use crate::orm::value::Value;
