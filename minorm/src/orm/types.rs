//! This module exposes the scalar column kinds supported by the mapper.

/// An enumeration of all supported scalar column kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Integer,
    BigInt,
    Real,
    Double,
    Boolean,
    Text,
    Date,
    Timestamp,
}

impl ScalarKind {
    /// Returns the SQL column type this kind maps to in generated DDL.
    pub const fn sql_type(self) -> &'static str {
        match self {
            ScalarKind::Integer => "INTEGER",
            ScalarKind::BigInt => "BIGINT",
            ScalarKind::Real => "REAL",
            ScalarKind::Double => "DOUBLE PRECISION",
            ScalarKind::Boolean => "BOOLEAN",
            ScalarKind::Text => "VARCHAR(255)",
            ScalarKind::Date => "DATE",
            ScalarKind::Timestamp => "TIMESTAMP",
        }
    }

    /// Returns the kind name as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Integer => "Integer",
            ScalarKind::BigInt => "BigInt",
            ScalarKind::Real => "Real",
            ScalarKind::Double => "Double",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Text => "Text",
            ScalarKind::Date => "Date",
            ScalarKind::Timestamp => "Timestamp",
        }
    }
}
