use thiserror::Error;

/// Minorm error type.
#[derive(Debug, Error)]
pub enum OrmError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] crate::orm::table::ConfigurationError),
    #[error("Schema error: {0}")]
    Schema(#[from] crate::orm::schema::SchemaError),
    #[error("Query error: {0}")]
    Query(#[from] crate::orm::query::QueryError),
}

/// Minorm result type.
pub type OrmResult<T> = Result<T, OrmError>;
