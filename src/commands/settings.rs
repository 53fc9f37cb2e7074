// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::Session;
use crate::currency::CANONICAL_SYMBOL;
use crate::utils::pretty_table;
use anyhow::{Context, Result};

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(s),
        Some(("currency", sub)) => {
            let sym = sub.get_one::<String>("symbol").context("symbol is required")?;
            s.settings.set_currency(&s.conn, &s.currencies, sym.trim())?;
            println!("Display currency set to {}", s.settings.currency);
        }
        Some(("theme", sub)) => {
            let name = sub.get_one::<String>("name").context("name is required")?;
            s.settings.set_theme(&s.conn, name)?;
            println!("Theme set to {}", s.settings.theme);
        }
        _ => {}
    }
    Ok(())
}

fn show(s: &Session) {
    let pin = if s.settings.pin_hash.is_some() {
        "set"
    } else {
        "not set"
    };
    let rows = vec![
        vec!["currency".to_string(), s.settings.currency.clone()],
        vec!["theme".to_string(), s.settings.theme.clone()],
        vec!["pin".to_string(), pin.to_string()],
        vec![
            "database".to_string(),
            s.paths.db_file().display().to_string(),
        ],
        vec![
            "backups".to_string(),
            s.paths.backup_dir().display().to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
}

pub fn handle_currency(s: &Session, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let rows = s
            .currencies
            .symbols()
            .map(|(sym, rate)| {
                let marker = if sym == s.settings.currency { "*" } else { "" };
                vec![
                    format!("{}{}", sym, marker),
                    format!("1 {} = {} {}", sym, rate, CANONICAL_SYMBOL),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Symbol", "Rate"], rows));
    }
    Ok(())
}
