use anyhow::{Context, Result};

use crate::core::db::{async_db, migrate_db};

pub async fn run(db_path: &str) -> Result<()> {
    println!("Migrating db...");
    let db = async_db(db_path)
        .await
        .with_context(|| format!("Failed to connect to db at {}", db_path))?;
    let applied = db
        .call(|conn| Ok(migrate_db(conn)?))
        .await
        .context("DB migration failed")?;
    println!("Finished migrating db, applied {} migration(s)", applied);

    Ok(())
}
