//! The CRUD mapping engine, bound to one entity type.

use std::marker::PhantomData;

use crate::error::OrmResult;
use crate::orm::connection::{Connection, Row};
use crate::orm::query::{self, QueryError};
use crate::orm::table::{ColumnDef, Entity};
use crate::orm::value::Value;

/// A repository translating CRUD calls on `E` into parameterized SQL.
///
/// The repository is scoped to the single entity type bound at construction
/// and operates on an injected [`Connection`]. Operations are synchronous and
/// execute exactly once: a failed execution surfaces immediately, with no
/// retry and no partial application assumed. Writes borrow the caller's
/// instance to read its field values; reads construct fresh instances and
/// hand ownership to the caller.
pub struct Repository<E, C>
where
    E: Entity,
    C: Connection,
{
    conn: C,
    _marker: PhantomData<E>,
}

impl<E, C> Repository<E, C>
where
    E: Entity,
    C: Connection,
{
    /// Creates a repository for `E` over the given connection.
    pub fn new(conn: C) -> Self {
        Self {
            conn,
            _marker: PhantomData,
        }
    }

    /// Inserts the entity's current field values as a new row.
    ///
    /// All mapped columns are bound in declaration order.
    pub fn insert(&self, entity: &E) -> OrmResult<()> {
        let sql = query::insert::<E>();
        let params = entity
            .to_values()
            .into_iter()
            .map(|(_, value)| value)
            .collect::<Vec<_>>();

        self.conn
            .execute(&sql, &params)
            .map_err(QueryError::Execution)?;

        Ok(())
    }

    /// Looks up a single row by primary key.
    ///
    /// Returns `Ok(None)` when no row matches; a missing row is a valid
    /// empty result, not an error.
    pub fn find_by_id(&self, id: impl Into<Value>) -> OrmResult<Option<E>> {
        let pk = E::primary_key()?;
        let sql = query::select_by_pk::<E>(pk);
        let rows = self
            .conn
            .query(&sql, &[id.into()])
            .map_err(QueryError::Execution)?;

        match rows.into_iter().next() {
            Some(row) => Ok(Some(hydrate::<E>(&row)?)),
            None => Ok(None),
        }
    }

    /// Returns all rows of the table, in result-set order.
    ///
    /// An empty table yields an empty vector.
    pub fn find_all(&self) -> OrmResult<Vec<E>> {
        let sql = query::select_all::<E>();
        let rows = self
            .conn
            .query(&sql, &[])
            .map_err(QueryError::Execution)?;

        rows.iter()
            .map(|row| hydrate::<E>(row).map_err(Into::into))
            .collect()
    }

    /// Rewrites every non-key column of the row identified by the entity's primary key.
    ///
    /// Returns the number of affected rows.
    pub fn update(&self, entity: &E) -> OrmResult<u64> {
        let pk = E::primary_key()?;
        let sql = query::update::<E>(pk);

        // SET parameters in declaration order, then the primary key binds last
        let mut params = Vec::with_capacity(E::columns().len());
        for (col, value) in entity.to_values() {
            if col.name != pk.name {
                params.push(value);
            }
        }
        params.push(primary_key_value(entity, pk));

        let count = self
            .conn
            .execute(&sql, &params)
            .map_err(QueryError::Execution)?;

        Ok(count)
    }

    /// Deletes the row identified by the entity's current primary-key value.
    ///
    /// Returns the number of affected rows.
    pub fn delete(&self, entity: &E) -> OrmResult<u64> {
        let pk = E::primary_key()?;
        let sql = query::delete::<E>(pk);
        let params = [primary_key_value(entity, pk)];

        let count = self
            .conn
            .execute(&sql, &params)
            .map_err(QueryError::Execution)?;

        Ok(count)
    }
}

/// Constructs a zero-initialized `E` and fills every mapped column from the row.
fn hydrate<E: Entity>(row: &Row) -> Result<E, QueryError> {
    let mut entity = E::default();
    for col in E::columns() {
        let value = row
            .get(col.name)
            .cloned()
            .ok_or_else(|| QueryError::UnknownColumn(col.name.to_string()))?;
        entity.set_column(col.name, value)?;
    }

    Ok(entity)
}

/// Reads the entity's current primary-key value.
fn primary_key_value<E: Entity>(entity: &E, pk: &ColumnDef) -> Value {
    entity
        .to_values()
        .into_iter()
        .find(|(col, _)| col.name == pk.name)
        .map(|(_, value)| value)
        .expect("primary key column missing from to_values") // this can't fail; columns() and to_values() cover the same set
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::OrmError;
    use crate::orm::schema::SchemaGenerator;
    use crate::orm::table::ConfigurationError;
    use crate::tests::store::MemoryConnection;
    use crate::tests::user::{Unkeyed, User};

    fn users_repo(conn: &MemoryConnection) -> Repository<User, &MemoryConnection> {
        SchemaGenerator::new(conn).ensure::<User>().unwrap();
        Repository::new(conn)
    }

    #[test]
    fn test_should_insert_and_find_by_id() {
        let conn = MemoryConnection::new();
        let repo = users_repo(&conn);

        let alice = User::new(1, "alice", "a@x.com");
        repo.insert(&alice).unwrap();

        let found = repo.find_by_id(1).unwrap();
        assert_eq!(found, Some(alice));
    }

    #[test]
    fn test_should_return_none_when_no_row_matches() {
        let conn = MemoryConnection::new();
        let repo = users_repo(&conn);

        assert_eq!(repo.find_by_id(42).unwrap(), None);
    }

    #[test]
    fn test_should_find_all_in_result_set_order() {
        let conn = MemoryConnection::new();
        let repo = users_repo(&conn);

        assert!(repo.find_all().unwrap().is_empty());

        let alice = User::new(1, "alice", "a@x.com");
        let bob = User::new(2, "bob", "b@x.com");
        repo.insert(&alice).unwrap();
        repo.insert(&bob).unwrap();

        assert_eq!(repo.find_all().unwrap(), vec![alice, bob]);
    }

    #[test]
    fn test_should_update_non_key_fields_only() {
        let conn = MemoryConnection::new();
        let repo = users_repo(&conn);

        repo.insert(&User::new(1, "alice", "a@x.com")).unwrap();

        let renamed = User::new(1, "alice2", "a@x.com");
        assert_eq!(repo.update(&renamed).unwrap(), 1);
        assert_eq!(repo.find_by_id(1).unwrap(), Some(renamed));
    }

    #[test]
    fn test_should_delete_by_primary_key() {
        let conn = MemoryConnection::new();
        let repo = users_repo(&conn);

        let alice = User::new(1, "alice", "a@x.com");
        let bob = User::new(2, "bob", "b@x.com");
        repo.insert(&alice).unwrap();
        repo.insert(&bob).unwrap();

        assert_eq!(repo.delete(&bob).unwrap(), 1);
        assert_eq!(repo.find_by_id(2).unwrap(), None);
        assert_eq!(repo.find_all().unwrap(), vec![alice]);
    }

    // the concrete scenario from the original framework's demo
    #[test]
    fn test_should_run_full_crud_scenario() {
        let conn = MemoryConnection::new();
        let repo = users_repo(&conn);

        repo.insert(&User::new(1, "alice", "a@x.com")).unwrap();
        repo.insert(&User::new(2, "bob", "b@x.com")).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 2);
        assert_eq!(
            repo.find_by_id(1).unwrap(),
            Some(User::new(1, "alice", "a@x.com"))
        );

        repo.update(&User::new(1, "alice2", "a@x.com")).unwrap();
        assert_eq!(
            repo.find_by_id(1).unwrap(),
            Some(User::new(1, "alice2", "a@x.com"))
        );

        repo.delete(&User::new(2, "bob", "b@x.com")).unwrap();
        let remaining = repo.find_all().unwrap();
        assert_eq!(remaining, vec![User::new(1, "alice2", "a@x.com")]);
    }

    #[test]
    fn test_should_fail_keyed_operations_without_primary_key() {
        let conn = MemoryConnection::new();
        SchemaGenerator::new(&conn).ensure::<Unkeyed>().unwrap();
        let repo: Repository<Unkeyed, _> = Repository::new(&conn);

        let entry = Unkeyed {
            message: "hello".to_string(),
        };
        // insert needs no key and must still work
        repo.insert(&entry).unwrap();
        assert_eq!(conn.row_count("audit_log"), 1);

        let expected = ConfigurationError::NoPrimaryKey("audit_log");
        assert!(matches!(
            repo.find_by_id("hello").unwrap_err(),
            OrmError::Configuration(err) if err == expected
        ));
        assert!(matches!(
            repo.update(&entry).unwrap_err(),
            OrmError::Configuration(err) if err == expected
        ));
        assert!(matches!(
            repo.delete(&entry).unwrap_err(),
            OrmError::Configuration(err) if err == expected
        ));
        // the failed calls never reached the store
        assert_eq!(conn.row_count("audit_log"), 1);
    }

    #[test]
    fn test_should_propagate_execution_faults() {
        let conn = MemoryConnection::new();
        let repo = users_repo(&conn);

        conn.fail_next();
        assert!(matches!(
            repo.insert(&User::new(1, "alice", "a@x.com")).unwrap_err(),
            OrmError::Query(QueryError::Execution(_))
        ));

        conn.fail_next();
        assert!(matches!(
            repo.find_all().unwrap_err(),
            OrmError::Query(QueryError::Execution(_))
        ));
    }

    #[test]
    fn test_should_fail_hydration_on_mismatched_row_value() {
        let conn = MemoryConnection::new();
        let repo = users_repo(&conn);

        // a row whose id column holds text instead of an integer
        conn.execute(
            "INSERT INTO users (id, username, email) VALUES (?, ?, ?)",
            &[
                Value::Text("oops".to_string()),
                Value::Text("alice".to_string()),
                Value::Text("a@x.com".to_string()),
            ],
        )
        .unwrap();

        assert!(matches!(
            repo.find_all().unwrap_err(),
            OrmError::Query(QueryError::TypeMismatch { column: "id", .. })
        ));
    }
}
