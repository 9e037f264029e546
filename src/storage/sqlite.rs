use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::user::normalize_username;
use super::{StoreError, UserRecord, UserStore};

const DB_SCHEMA_VERSION: i64 = 1;

#[derive(Clone)]
pub struct SqliteStore {
    pub path: String,
}

fn query_err(op: &'static str) -> impl Fn(rusqlite::Error) -> StoreError {
    move |source| StoreError::Query { op, source }
}

/// The unique index on users(username) backs the in-transaction existence
/// check; a violation racing past that check still means a duplicate.
fn insert_err(op: &'static str, username: &str, err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::AlreadyExists {
                op,
                username: username.to_string(),
            }
        }
        source => StoreError::Query { op, source },
    }
}

fn db_find_user_id(conn: &Connection, username: &str) -> rusqlite::Result<Option<i64>> {
    conn.query_row(
        "SELECT id FROM users WHERE username = ?1",
        params![username],
        |row| row.get(0),
    )
    .optional()
}

fn map_user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserRecord> {
    Ok(UserRecord {
        id: row.get(0)?,
        username: row.get(1)?,
        name: row.get(2)?,
        surname: row.get(3)?,
        description: row.get(4)?,
    })
}

fn db_list_users(conn: &Connection) -> rusqlite::Result<Vec<UserRecord>> {
    let mut stmt = conn.prepare(
        "SELECT users.id, users.username, userdata.name, userdata.surname, userdata.description
         FROM users JOIN userdata ON userdata.userid = users.id",
    )?;
    let rows = stmt
        .query_map([], map_user_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn db_insert_user(conn: &Connection, username: &str, record: &UserRecord) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO users (id, username) VALUES (NULL, ?1)",
        params![username],
    )?;
    let id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO userdata (userid, name, surname, description) VALUES (?1, ?2, ?3, ?4)",
        params![id, record.name, record.surname, record.description],
    )?;
    Ok(())
}

impl SqliteStore {
    /// Build a store that targets the provided SQLite database path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    /// Remove the backing database file to force a clean start.
    pub fn reset_all(&self) -> std::io::Result<()> {
        if !std::path::Path::new(&self.path).exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path)
    }

    /// Open a connection once so the schema is installed up front.
    pub fn init(&self) -> Result<(), StoreError> {
        self.with_conn("init", |_conn| Ok(()))
    }

    /// Open a connection, ensure the schema, run the supplied closure, and
    /// release the connection on every exit path.
    fn with_conn<F, T>(&self, op: &'static str, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError>,
    {
        let conn = Connection::open(&self.path)
            .map_err(|source| StoreError::Connection { op, source })?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(query_err(op))?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(query_err(op))?;
        conn.busy_timeout(std::time::Duration::from_millis(500))
            .map_err(query_err(op))?;

        Self::migrate(&conn).map_err(query_err(op))?;
        f(&conn)
    }

    fn migrate(conn: &Connection) -> rusqlite::Result<()> {
        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version == DB_SCHEMA_VERSION {
            return Ok(());
        }

        log::info!(
            "SQLite schema migration: {} -> {}",
            version,
            DB_SCHEMA_VERSION
        );

        if version == 0 {
            conn.execute_batch(
                r#"
            CREATE TABLE users (
                id INTEGER PRIMARY KEY,
                username TEXT NOT NULL
            );
            CREATE UNIQUE INDEX users_username_idx ON users(username);
            CREATE TABLE userdata (
                userid INTEGER NOT NULL,
                name TEXT NOT NULL,
                surname TEXT NOT NULL,
                description TEXT NOT NULL
            );
            CREATE INDEX userdata_userid_idx ON userdata(userid);
        "#,
            )?;
            conn.pragma_update(None, "user_version", DB_SCHEMA_VERSION)?;
            return Ok(());
        }

        Err(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::ErrorCode::SchemaChanged as i32),
            Some("database schema version mismatch; please run with --reset option".to_string()),
        ))
    }
}

impl UserStore for SqliteStore {
    fn add_user(&self, record: &UserRecord) -> Result<(), StoreError> {
        const OP: &str = "add user";
        let username = normalize_username(&record.username);
        self.with_conn(OP, |conn| {
            let tx = conn.unchecked_transaction().map_err(query_err(OP))?;
            if db_find_user_id(&tx, &username)
                .map_err(query_err(OP))?
                .is_some()
            {
                return Err(StoreError::AlreadyExists {
                    op: OP,
                    username: username.clone(),
                });
            }
            db_insert_user(&tx, &username, record)
                .map_err(|err| insert_err(OP, &username, err))?;
            tx.commit().map_err(query_err(OP))
        })
    }

    fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        const OP: &str = "delete user";
        self.with_conn(OP, |conn| {
            let tx = conn.unchecked_transaction().map_err(query_err(OP))?;
            // Profile row first, then the account row it points at.
            tx.execute("DELETE FROM userdata WHERE userid = ?1", params![id])
                .map_err(query_err(OP))?;
            tx.execute("DELETE FROM users WHERE id = ?1", params![id])
                .map_err(query_err(OP))?;
            tx.commit().map_err(query_err(OP))
        })
    }

    fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        const OP: &str = "list users";
        self.with_conn(OP, |conn| db_list_users(conn).map_err(query_err(OP)))
    }

    fn update_user(&self, record: &UserRecord) -> Result<(), StoreError> {
        const OP: &str = "update user";
        let username = normalize_username(&record.username);
        self.with_conn(OP, |conn| {
            let tx = conn.unchecked_transaction().map_err(query_err(OP))?;
            let id = db_find_user_id(&tx, &username)
                .map_err(query_err(OP))?
                .ok_or_else(|| StoreError::NotFound {
                    op: OP,
                    username: username.clone(),
                })?;
            tx.execute(
                "UPDATE userdata SET name = ?1, surname = ?2, description = ?3 WHERE userid = ?4",
                params![record.name, record.surname, record.description, id],
            )
            .map_err(query_err(OP))?;
            tx.commit().map_err(query_err(OP))
        })
    }
}
