// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDateTime, Timelike};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::currency::CurrencyTable;
use crate::db;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthTotals, Summary, Transaction, TxKind};

/// Append-only transaction ledger. Input amounts are in `display` currency.
pub struct Ledger<'a> {
    conn: &'a Connection,
    currencies: &'a CurrencyTable,
    display: &'a str,
}

impl<'a> Ledger<'a> {
    pub fn new(conn: &'a Connection, currencies: &'a CurrencyTable, display: &'a str) -> Self {
        Self {
            conn,
            currencies,
            display,
        }
    }

    pub fn record(
        &self,
        amount: Decimal,
        category: &str,
        kind: TxKind,
    ) -> LedgerResult<Transaction> {
        let now = Local::now().naive_local();
        self.record_at(amount, category, kind, now)
    }

    pub fn record_at(
        &self,
        amount: Decimal,
        category: &str,
        kind: TxKind,
        at: NaiveDateTime,
    ) -> LedgerResult<Transaction> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "amount must be positive, got {}",
                amount
            )));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerError::Validation("category is empty".into()));
        }
        let canonical = self.currencies.to_canonical(amount, self.display)?;
        // keep the running total for this kind summable
        db::sum_by_kind(self.conn, kind)?
            .checked_add(canonical)
            .ok_or_else(LedgerError::out_of_range)?;
        // second precision at rest
        let at = at.with_nanosecond(0).unwrap_or(at);
        let id = db::insert_transaction(self.conn, canonical, category, kind, at)?;
        info!(id, %canonical, category, kind = kind.as_str(), "transaction recorded");
        Ok(Transaction {
            id,
            amount: canonical,
            category: category.to_string(),
            kind,
            created_at: at,
        })
    }

    pub fn summary(&self) -> LedgerResult<Summary> {
        let income = db::sum_by_kind(self.conn, TxKind::Income)?;
        let expense = db::sum_by_kind(self.conn, TxKind::Expense)?;
        let balance = income
            .checked_sub(expense)
            .ok_or_else(LedgerError::out_of_range)?;
        debug!(%income, %expense, "summary computed");
        Ok(Summary {
            income,
            expense,
            balance,
        })
    }

    pub fn list_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        db::list_transactions(self.conn)
    }

    /// Canonical expense totals per category.
    pub fn expenses_by_category(&self) -> LedgerResult<BTreeMap<String, Decimal>> {
        let mut out = BTreeMap::new();
        for t in self.list_transactions()? {
            if t.kind == TxKind::Expense {
                let slot = out.entry(t.category).or_insert(Decimal::ZERO);
                *slot = add(*slot, t.amount)?;
            }
        }
        Ok(out)
    }

    /// Canonical income and expense per `YYYY-MM`, oldest month first.
    pub fn monthly_totals(&self) -> LedgerResult<BTreeMap<String, MonthTotals>> {
        let mut out: BTreeMap<String, MonthTotals> = BTreeMap::new();
        for t in self.list_transactions()? {
            let m = out.entry(t.month()).or_default();
            match t.kind {
                TxKind::Income => m.income = add(m.income, t.amount)?,
                TxKind::Expense => m.expense = add(m.expense, t.amount)?,
            }
        }
        Ok(out)
    }
}

fn add(a: Decimal, b: Decimal) -> LedgerResult<Decimal> {
    a.checked_add(b).ok_or_else(LedgerError::out_of_range)
}
