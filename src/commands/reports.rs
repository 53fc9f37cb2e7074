// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::Session;
use crate::error::LedgerError;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(s: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(s, sub)?,
        Some(("monthly", sub)) => monthly(s, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct SummaryOut {
    currency: String,
    income: String,
    expense: String,
    balance: String,
}

pub fn summary(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let sum = s.ledger().summary()?;
    let ccy = &s.settings.currency;
    let disp = |v: Decimal| -> Result<String> {
        Ok(format!("{:.2}", s.currencies.to_display(v, ccy)?))
    };
    let out = SummaryOut {
        currency: ccy.clone(),
        income: disp(sum.income)?,
        expense: disp(sum.expense)?,
        balance: disp(sum.balance)?,
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        println!(
            "{}",
            pretty_table(
                &["Income", "Expense", "Balance"],
                vec![vec![
                    s.money(sum.income)?,
                    s.money(sum.expense)?,
                    s.money(sum.balance)?,
                ]],
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: String,
    pub share: String,
    pub currency: String,
}

/// Expense totals per category in the display currency, with percentage share.
pub fn category_rows(s: &Session) -> Result<Vec<CategoryRow>> {
    let totals = s.ledger().expenses_by_category()?;
    let mut grand = Decimal::ZERO;
    for amt in totals.values() {
        grand = grand
            .checked_add(*amt)
            .ok_or_else(LedgerError::out_of_range)?;
    }
    let ccy = &s.settings.currency;
    let mut data = Vec::new();
    for (cat, amt) in totals {
        let share = if grand.is_zero() {
            Decimal::ZERO
        } else {
            (amt / grand * Decimal::ONE_HUNDRED).round_dp(1)
        };
        data.push(CategoryRow {
            category: cat,
            amount: format!("{:.2}", s.currencies.to_display(amt, ccy)?),
            share: format!("{:.1}", share),
            currency: ccy.clone(),
        });
    }
    Ok(data)
}

fn by_category(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = category_rows(s)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No expenses recorded yet.");
        } else {
            let rows = data
                .iter()
                .map(|r| {
                    vec![
                        r.category.clone(),
                        format!("{} {}", r.currency, r.amount),
                        format!("{}%", r.share),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
        }
    }
    Ok(())
}

#[derive(Serialize)]
pub struct MonthRow {
    pub month: String,
    pub income: String,
    pub expense: String,
    pub net: String,
    pub currency: String,
}

/// Income vs expense per month in the display currency, oldest first.
pub fn monthly_rows(s: &Session) -> Result<Vec<MonthRow>> {
    let months = s.ledger().monthly_totals()?;
    let ccy = &s.settings.currency;
    let disp = |v: Decimal| -> Result<String> {
        Ok(format!("{:.2}", s.currencies.to_display(v, ccy)?))
    };
    let mut data = Vec::new();
    for (month, t) in months {
        let net = t
            .income
            .checked_sub(t.expense)
            .ok_or_else(LedgerError::out_of_range)?;
        data.push(MonthRow {
            month,
            income: disp(t.income)?,
            expense: disp(t.expense)?,
            net: disp(net)?,
            currency: ccy.clone(),
        });
    }
    Ok(data)
}

fn monthly(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = monthly_rows(s)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No transactions recorded yet.");
        } else {
            let rows = data
                .iter()
                .map(|r| {
                    vec![
                        r.month.clone(),
                        format!("{} {}", r.currency, r.income),
                        format!("{} {}", r.currency, r.expense),
                        format!("{} {}", r.currency, r.net),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Month", "Income", "Expense", "Net"], rows)
            );
        }
    }
    Ok(())
}
