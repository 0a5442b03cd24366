use anyhow::{Error, Result};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use tokio_rusqlite::{Connection, params};
use uuid::Uuid;

use super::models::Exchange;

fn parse_timestamp(idx: usize, val: String) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(&val)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Store a new exchange stamped with the current time and return it.
pub async fn insert_exchange(
    db: &Connection,
    user_id: &str,
    user_message: &str,
    bot_reply: &str,
) -> Result<Exchange, Error> {
    // Millisecond precision so the stored text round trips exactly
    let exchange = Exchange {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_owned(),
        user_message: user_message.to_owned(),
        bot_reply: bot_reply.to_owned(),
        timestamp: Utc::now().trunc_subsecs(3),
    };
    let row = exchange.clone();

    db.call(move |conn| {
        conn.execute(
            "INSERT INTO exchange (id, user_id, user_message, bot_reply, timestamp) VALUES (?, ?, ?, ?, ?)",
            params![
                row.id,
                row.user_id,
                row.user_message,
                row.bot_reply,
                row.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
            ],
        )?;
        Ok(())
    })
    .await?;

    Ok(exchange)
}

/// All exchanges for `user_id`, oldest first. Exchanges stored within
/// the same millisecond fall back to insertion order.
pub async fn find_exchanges_by_user(db: &Connection, user_id: &str) -> Result<Vec<Exchange>, Error> {
    let u_id = user_id.to_owned();
    let history = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT id, user_id, user_message, bot_reply, timestamp
                FROM exchange
                WHERE user_id = ?
                ORDER BY timestamp ASC, rowid ASC
                "#,
            )?;
            let rows = stmt
                .query_map([u_id], |row| {
                    Ok(Exchange {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        user_message: row.get(2)?,
                        bot_reply: row.get(3)?,
                        timestamp: parse_timestamp(4, row.get(4)?)?,
                    })
                })?
                .collect::<Result<Vec<Exchange>, rusqlite::Error>>()?;
            Ok(rows)
        })
        .await?;

    Ok(history)
}

/// Delete every exchange for `user_id`. Deleting nothing is not an
/// error. Returns the number of exchanges removed.
pub async fn delete_exchanges_by_user(db: &Connection, user_id: &str) -> Result<usize, Error> {
    let u_id = user_id.to_owned();
    let deleted = db
        .call(move |conn| {
            let deleted = conn.execute("DELETE FROM exchange WHERE user_id = ?", [u_id])?;
            Ok(deleted)
        })
        .await?;

    Ok(deleted)
}
