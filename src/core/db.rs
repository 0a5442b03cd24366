//! Database connection and schema migrations
use anyhow::{Error, Result};
use rusqlite::Connection as SyncConnection;
use tokio_rusqlite::Connection;

// Each entry moves the schema forward by one version. The current
// version is tracked with `PRAGMA user_version` so migrations are
// only ever applied once.
const MIGRATIONS: &[&str] = &[
    // 1: exchange table
    r#"
    CREATE TABLE IF NOT EXISTS exchange (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        user_message TEXT NOT NULL CHECK (length(user_message) > 0),
        bot_reply TEXT NOT NULL CHECK (length(bot_reply) > 0),
        timestamp TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );
    "#,
    // 2: history lookups are always by user ordered by time
    r#"
    CREATE INDEX IF NOT EXISTS exchange_user_id_timestamp
    ON exchange (user_id, timestamp);
    "#,
];

/// Open an async connection to the sqlite db at `path`. The special
/// path `:memory:` opens a private in-memory database.
pub async fn async_db(path: &str) -> Result<Connection, Error> {
    let db = if path == ":memory:" {
        Connection::open_in_memory().await?
    } else {
        Connection::open(path).await?
    };
    Ok(db)
}

pub fn schema_version(conn: &SyncConnection) -> Result<usize, rusqlite::Error> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Create the schema from scratch. Safe to run against an existing
/// database since every statement is idempotent.
pub fn initialize_db(conn: &mut SyncConnection) -> Result<(), rusqlite::Error> {
    let tx = conn.transaction()?;
    for sql in MIGRATIONS {
        tx.execute_batch(sql)?;
    }
    tx.pragma_update(None, "user_version", MIGRATIONS.len())?;
    tx.commit()
}

/// Apply any migrations newer than the database's recorded version.
/// Returns the number of migrations applied.
pub fn migrate_db(conn: &mut SyncConnection) -> Result<usize, rusqlite::Error> {
    let current = schema_version(conn)?;
    let pending = MIGRATIONS.iter().skip(current).collect::<Vec<_>>();
    if pending.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for sql in &pending {
        tx.execute_batch(sql)?;
    }
    tx.pragma_update(None, "user_version", MIGRATIONS.len())?;
    tx.commit()?;

    Ok(pending.len())
}
