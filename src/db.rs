// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Goal, TIMESTAMP_FMT, Transaction, TxKind};

pub fn open_or_init(path: &Path) -> LedgerResult<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    debug!(path = %path.display(), "store opened");
    Ok(conn)
}

/// Creates any missing table; safe to run on every startup.
pub fn init_schema(conn: &Connection) -> LedgerResult<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount TEXT NOT NULL, -- stored in CANONICAL currency
        category TEXT NOT NULL,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_created ON transactions(created_at);

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS goals(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        target TEXT NOT NULL,
        progress TEXT NOT NULL DEFAULT '0'
    );
    "#,
    )?;
    Ok(())
}

/// Drops every table and recreates an empty schema.
pub fn wipe(conn: &Connection) -> LedgerResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        r#"
    DROP TABLE IF EXISTS transactions;
    DROP TABLE IF EXISTS settings;
    DROP TABLE IF EXISTS goals;
    "#,
    )?;
    init_schema(&tx)?;
    tx.commit()?;
    info!("store wiped");
    Ok(())
}

fn decimal_col(r: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let s: String = r.get(idx)?;
    s.trim()
        .parse::<Decimal>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn timestamp_col(r: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let s: String = r.get(idx)?;
    NaiveDateTime::parse_from_str(&s, TIMESTAMP_FMT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn kind_col(r: &Row<'_>, idx: usize) -> rusqlite::Result<TxKind> {
    let s: String = r.get(idx)?;
    s.parse::<TxKind>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub fn insert_transaction(
    conn: &Connection,
    amount: Decimal,
    category: &str,
    kind: TxKind,
    created_at: NaiveDateTime,
) -> LedgerResult<i64> {
    conn.execute(
        "INSERT INTO transactions(amount, category, kind, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            amount.to_string(),
            category,
            kind.as_str(),
            created_at.format(TIMESTAMP_FMT).to_string()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Newest first; rows sharing a second fall back to insertion order.
pub fn list_transactions(conn: &Connection) -> LedgerResult<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, amount, category, kind, created_at FROM transactions
         ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(Transaction {
            id: r.get(0)?,
            amount: decimal_col(r, 1)?,
            category: r.get(2)?,
            kind: kind_col(r, 3)?,
            created_at: timestamp_col(r, 4)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

/// Amounts are TEXT decimals, so the sum is taken here rather than with SQL SUM().
pub fn sum_by_kind(conn: &Connection, kind: TxKind) -> LedgerResult<Decimal> {
    let mut stmt = conn.prepare("SELECT amount FROM transactions WHERE kind=?1")?;
    let rows = stmt.query_map(params![kind.as_str()], |r| decimal_col(r, 0))?;
    let mut total = Decimal::ZERO;
    for row in rows {
        total = total
            .checked_add(row?)
            .ok_or_else(LedgerError::out_of_range)?;
    }
    Ok(total)
}

pub fn insert_goal(conn: &Connection, name: &str, target: Decimal) -> LedgerResult<i64> {
    conn.execute(
        "INSERT INTO goals(name, target, progress) VALUES (?1, ?2, '0')",
        params![name, target.to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_goal(conn: &Connection, id: i64) -> LedgerResult<Option<Goal>> {
    let goal = conn
        .query_row(
            "SELECT id, name, target, progress FROM goals WHERE id=?1",
            params![id],
            goal_from_row,
        )
        .optional()?;
    Ok(goal)
}

/// Returns the number of rows touched (0 when the id is unknown).
pub fn increment_goal_progress(conn: &Connection, id: i64, delta: Decimal) -> LedgerResult<usize> {
    let current: Option<Decimal> = conn
        .query_row(
            "SELECT progress FROM goals WHERE id=?1",
            params![id],
            |r| decimal_col(r, 0),
        )
        .optional()?;
    let Some(current) = current else {
        return Ok(0);
    };
    let next = current
        .checked_add(delta)
        .ok_or_else(LedgerError::out_of_range)?;
    let n = conn.execute(
        "UPDATE goals SET progress=?1 WHERE id=?2",
        params![next.to_string(), id],
    )?;
    Ok(n)
}

pub fn list_goals(conn: &Connection) -> LedgerResult<Vec<Goal>> {
    let mut stmt = conn.prepare("SELECT id, name, target, progress FROM goals ORDER BY id")?;
    let rows = stmt.query_map([], goal_from_row)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

fn goal_from_row(r: &Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: r.get(0)?,
        name: r.get(1)?,
        target: decimal_col(r, 2)?,
        progress: decimal_col(r, 3)?,
    })
}

pub fn get_setting(conn: &Connection, key: &str) -> LedgerResult<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> LedgerResult<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}
