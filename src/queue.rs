//! Summon queue state machine
//!
//! The set of operations governing how a table's request enters,
//! coalesces, and leaves the queue, and how the pause flag gates the
//! guest-facing message. Every operation is scoped to one magician's
//! rows and is a single atomic statement against the store (plus a
//! point lookup where the account must be resolved first), so each is
//! safe to retry: the upsert coalesces, the delete and the pause-set
//! are idempotent.

use sqlx::SqlitePool;

use crate::constants::{ERR_INVALID_SUMMON_LINK, ERR_INVALID_TABLE_NUMBER};
use crate::error::{AppError, Result};
use crate::models::SummonEntry;

/// Ordered dashboard view of one magician's queue
#[derive(Debug)]
pub struct QueueView {
    pub paused: bool,
    /// Oldest outstanding request first; a re-summon moves a table to
    /// the back
    pub entries: Vec<SummonEntry>,
}

/// Record a summon from a table
///
/// Rejects out-of-range table numbers before touching storage and
/// unknown magicians with NotFound. Otherwise upserts the (magician,
/// table) entry: first scan creates it, every later scan refreshes
/// `last_requested_at` in place, so N scans between clears leave
/// exactly one row positioned at "most recent".
///
/// Pausing does not block ingestion. The returned flag only tells the
/// caller which confirmation message to show the guest.
pub async fn summon(
    pool: &SqlitePool,
    magician_id: i64,
    table_number: i64,
    capacity: u32,
    now_ms: i64,
) -> Result<bool> {
    if !SummonEntry::is_valid_table(table_number, capacity) {
        tracing::warn!(
            "Rejected summon for out-of-range table {} (capacity {})",
            table_number,
            capacity
        );
        return Err(AppError::InvalidInput(ERR_INVALID_SUMMON_LINK.to_string()));
    }

    let paused = lookup_paused(pool, magician_id).await?;

    // Two concurrent scans of the same table race on the UNIQUE
    // (magician_id, table_number) constraint; ON CONFLICT resolves the
    // loser into a timestamp refresh instead of a duplicate row.
    sqlx::query(
        r#"
        INSERT INTO summons (magician_id, table_number, last_requested_at)
        VALUES (?, ?, ?)
        ON CONFLICT (magician_id, table_number)
        DO UPDATE SET last_requested_at = excluded.last_requested_at
        "#,
    )
    .bind(magician_id)
    .bind(table_number)
    .bind(now_ms)
    .execute(pool)
    .await?;

    tracing::info!(
        "Summon recorded for magician {} table {}",
        magician_id,
        table_number
    );

    Ok(paused)
}

/// Fetch the queue for one magician, oldest request first, together
/// with the current pause flag so the dashboard needs a single poll.
pub async fn list_queue(pool: &SqlitePool, magician_id: i64) -> Result<QueueView> {
    let paused = lookup_paused(pool, magician_id).await?;

    let entries = sqlx::query_as::<_, SummonEntry>(
        r#"
        SELECT table_number, last_requested_at
        FROM summons
        WHERE magician_id = ?
        ORDER BY last_requested_at ASC
        "#,
    )
    .bind(magician_id)
    .fetch_all(pool)
    .await?;

    Ok(QueueView { paused, entries })
}

/// Remove one table's entry from the queue
///
/// Clearing a table with no live entry succeeds and changes nothing.
pub async fn clear_table(
    pool: &SqlitePool,
    magician_id: i64,
    table_number: i64,
    capacity: u32,
) -> Result<()> {
    if !SummonEntry::is_valid_table(table_number, capacity) {
        return Err(AppError::InvalidInput(ERR_INVALID_TABLE_NUMBER.to_string()));
    }

    let result = sqlx::query("DELETE FROM summons WHERE magician_id = ? AND table_number = ?")
        .bind(magician_id)
        .bind(table_number)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        tracing::debug!(
            "Clear for magician {} table {} matched no entry",
            magician_id,
            table_number
        );
    }

    Ok(())
}

/// Overwrite the magician's pause flag
///
/// Idempotent; setting the current value again is a no-op in effect.
pub async fn set_paused(pool: &SqlitePool, magician_id: i64, paused: bool) -> Result<bool> {
    let result = sqlx::query("UPDATE magicians SET paused = ? WHERE id = ?")
        .bind(paused)
        .bind(magician_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::MagicianNotFound);
    }

    Ok(paused)
}

/// Resolve a magician id to its pause flag, or NotFound
async fn lookup_paused(pool: &SqlitePool, magician_id: i64) -> Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT paused FROM magicians WHERE id = ?")
        .bind(magician_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::MagicianNotFound)
}
