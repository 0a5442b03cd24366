use anyhow::{Context, Result};

use crate::core::db::{async_db, initialize_db};

pub async fn run(db_path: &str) -> Result<()> {
    println!("Initializing db at {}...", db_path);
    let db = async_db(db_path)
        .await
        .with_context(|| format!("Failed to connect to db at {}", db_path))?;
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await
    .context("DB initialization failed")?;
    println!("Finished initializing db");

    Ok(())
}
