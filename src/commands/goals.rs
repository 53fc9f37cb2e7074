// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::Session;
use crate::goals::Goals;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

const BAR_WIDTH: usize = 20;

pub fn handle(s: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(s, sub)?,
        Some(("contribute", sub)) => contribute(s, sub)?,
        Some(("list", sub)) => list(s, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").context("name is required")?;
    let target = parse_decimal(sub.get_one::<String>("target").context("target is required")?)?;
    // targets are typed in the display currency
    let target = s.currencies.to_canonical(target, &s.settings.currency)?;
    let goal = Goals::new(&s.conn).create(name, target)?;
    println!(
        "Added goal #{} '{}' with target {}",
        goal.id,
        goal.name,
        s.money(goal.target)?
    );
    Ok(())
}

fn contribute(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("id is required")?;
    let amount = parse_decimal(sub.get_one::<String>("amount").context("amount is required")?)?;
    let amount = s.currencies.to_canonical(amount, &s.settings.currency)?;
    let goal = Goals::new(&s.conn).contribute(id, amount)?;
    println!(
        "Goal '{}' now at {} of {}{}",
        goal.name,
        s.money(goal.progress)?,
        s.money(goal.target)?,
        if goal.is_reached() { " (reached)" } else { "" }
    );
    Ok(())
}

#[derive(Serialize)]
struct GoalRow {
    id: i64,
    name: String,
    progress: String,
    target: String,
    currency: String,
}

fn bar(fraction: Decimal) -> String {
    let filled = (fraction * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn list(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let goals = Goals::new(&s.conn).list()?;
    let ccy = &s.settings.currency;
    if sub.get_flag("json") || sub.get_flag("jsonl") {
        let mut out = Vec::new();
        for g in &goals {
            out.push(GoalRow {
                id: g.id,
                name: g.name.clone(),
                progress: format!("{:.2}", s.currencies.to_display(g.progress, ccy)?),
                target: format!("{:.2}", s.currencies.to_display(g.target, ccy)?),
                currency: ccy.clone(),
            });
        }
        maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)?;
        return Ok(());
    }
    let mut data = Vec::new();
    for g in &goals {
        data.push(vec![
            g.id.to_string(),
            g.name.clone(),
            format!("{} / {}", s.money(g.progress)?, s.money(g.target)?),
            bar(g.fraction()),
        ]);
    }
    println!("{}", pretty_table(&["ID", "Goal", "Progress", ""], data));
    Ok(())
}
