use thiserror::Error;

use crate::orm::query::QueryError;
use crate::orm::types::ScalarKind;
use crate::orm::value::Value;

/// The result type for entity metadata lookups.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// An enum representing errors in the declared entity metadata.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No column of the entity is flagged as primary key.
    #[error("no primary key declared for table '{0}'")]
    NoPrimaryKey(&'static str),
}

/// Defines a column in a database table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// The name of the column.
    pub name: &'static str,
    /// The scalar kind of the column.
    pub kind: ScalarKind,
    /// Indicates if this column can contain NULL values.
    pub nullable: bool,
    /// Indicates if this column must hold unique values.
    pub unique: bool,
    /// Indicates if this column is the primary key.
    pub primary_key: bool,
}

/// A type mapped to exactly one relational table.
///
/// The descriptor table is declared at compile time, normally through
/// `#[derive(Entity)]`; every accessor here is a pure function of the type's
/// static shape and never depends on a particular instance's values.
///
/// `Default` provides the zero-initialized instance that read operations
/// populate column by column through [`Entity::set_column`].
pub trait Entity: Default + 'static {
    /// Returns the name of the table.
    fn table_name() -> &'static str;

    /// Returns the column definitions of the table, in declaration order.
    fn columns() -> &'static [ColumnDef];

    /// Converts the current field values into column-value pairs, in declaration order.
    fn to_values(&self) -> Vec<(ColumnDef, Value)>;

    /// Sets the field backing `column` from a result-set value.
    ///
    /// Fails with [`QueryError::UnknownColumn`] if no mapped column has that
    /// name, or [`QueryError::TypeMismatch`] if the value's variant does not
    /// match the column's declared kind.
    fn set_column(&mut self, column: &str, value: Value) -> Result<(), QueryError>;

    /// Returns the first column flagged as primary key, in declaration order.
    fn primary_key() -> ConfigurationResult<&'static ColumnDef> {
        Self::columns()
            .iter()
            .find(|col| col.primary_key)
            .ok_or(ConfigurationError::NoPrimaryKey(Self::table_name()))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::tests::user::{TwoKeys, Unkeyed, User};

    #[test]
    fn test_should_expose_columns_in_declaration_order() {
        let names = User::columns().iter().map(|col| col.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["id", "username", "email"]);
    }

    #[test]
    fn test_should_apply_column_defaults() {
        // `username` declares no name override: the lower-cased field name is used
        let username = &User::columns()[1];
        assert_eq!(username.name, "username");
        assert_eq!(username.kind, ScalarKind::Text);
        assert!(!username.nullable);
        assert!(username.unique);
        assert!(!username.primary_key);

        // `email` leaves unique at its default
        let email = &User::columns()[2];
        assert!(!email.unique);
    }

    #[test]
    fn test_should_find_primary_key() {
        let pk = User::primary_key().unwrap();
        assert_eq!(pk.name, "id");
        assert!(pk.primary_key);
    }

    #[test]
    fn test_should_fail_primary_key_lookup_without_flag() {
        assert_eq!(
            Unkeyed::primary_key().unwrap_err(),
            ConfigurationError::NoPrimaryKey("audit_log")
        );
    }

    #[test]
    fn test_should_take_first_primary_key_in_declaration_order() {
        // a hand-written impl may flag several columns; the first one wins
        let pk = TwoKeys::primary_key().unwrap();
        assert_eq!(pk.name, "first");
    }

    #[test]
    fn test_should_reject_unknown_column_on_set() {
        let mut user = User::default();
        let err = user.set_column("age", Value::Integer(30)).unwrap_err();
        assert!(matches!(err, QueryError::UnknownColumn(name) if name == "age"));
    }

    #[test]
    fn test_should_reject_mismatched_value_kind_on_set() {
        let mut user = User::default();
        let err = user.set_column("id", Value::Text("oops".to_string())).unwrap_err();
        assert!(matches!(
            err,
            QueryError::TypeMismatch {
                column: "id",
                expected: "Integer",
                found: "Text",
            }
        ));
    }

    #[test]
    fn test_should_marshal_and_unmarshal_values() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
        };

        let values = user.to_values();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].1, Value::Integer(7));
        assert_eq!(values[1].1, Value::Text("alice".to_string()));

        let mut copy = User::default();
        for (col, value) in values {
            copy.set_column(col.name, value).unwrap();
        }
        assert_eq!(copy, user);
    }
}
