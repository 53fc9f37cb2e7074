// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::Session;
use crate::models::{TIMESTAMP_FMT, TxKind};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;

pub fn handle(s: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(s, sub)?,
        Some(("list", sub)) => list(s, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").context("amount is required")?)?;
    let category = sub
        .get_one::<String>("category")
        .context("category is required")?;
    let kind = sub
        .get_one::<String>("kind")
        .map(String::as_str)
        .unwrap_or("expense")
        .parse::<TxKind>()?;

    let tx = s.ledger().record(amount, category, kind)?;
    println!(
        "Recorded {} #{}: {} ({})",
        tx.kind,
        tx.id,
        s.money(tx.amount)?,
        tx.category
    );
    Ok(())
}

fn list(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(s, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.kind.clone(),
                    r.date.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Amount", "Category", "Type", "Date"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub amount: String,
    pub currency: String,
    pub category: String,
    pub kind: String,
    pub date: String,
}

/// History rows with amounts shown in the display currency.
pub fn query_rows(s: &Session, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let kind = sub
        .get_one::<String>("kind")
        .map(|k| k.parse::<TxKind>())
        .transpose()?;
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    let symbol = &s.settings.currency;

    let mut data = Vec::new();
    for t in s.ledger().list_transactions()? {
        if kind.is_some_and(|k| k != t.kind) {
            continue;
        }
        if category.is_some_and(|c| c != &t.category) {
            continue;
        }
        if data.len() >= limit {
            break;
        }
        data.push(TransactionRow {
            id: t.id,
            amount: format!("{:.2}", s.currencies.to_display(t.amount, symbol)?),
            currency: symbol.clone(),
            category: t.category,
            kind: t.kind.to_string(),
            date: t.created_at.format(TIMESTAMP_FMT).to_string(),
        });
    }
    Ok(data)
}
