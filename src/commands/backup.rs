// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::backup::BackupManager;
use crate::commands::Session;
use crate::db;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Takes the session by value: `restore` must close the store before overwriting it.
pub fn handle(s: Session, m: &clap::ArgMatches) -> Result<()> {
    let manager = BackupManager::new(&s.paths);
    match m.subcommand() {
        Some(("create", _)) => {
            let path = manager.snapshot()?;
            println!("Backup written to {}", path.display());
        }
        Some(("list", sub)) => {
            let backups = manager.list()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &backups)? {
                let rows = backups
                    .iter()
                    .map(|b| vec![b.filename.clone(), format!("{} B", b.size_bytes)])
                    .collect();
                println!("{}", pretty_table(&["Backup", "Size"], rows));
            }
        }
        Some(("restore", sub)) => {
            let path = sub
                .get_one::<PathBuf>("path")
                .context("backup path is required")?;
            let Session { conn, .. } = s;
            conn.close().map_err(|(_, e)| e)?;
            manager.restore(path)?;
            println!("Backup restored from {}. Restart to apply changes.", path.display());
        }
        _ => {}
    }
    Ok(())
}

pub fn reset(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    if !m.get_flag("yes") {
        bail!("Refusing to erase all data without --yes");
    }
    db::wipe(&s.conn)?;
    s.settings = crate::config::Settings::load(&s.conn)?;
    println!("All data cleared!");
    Ok(())
}
