// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Verbatim file-copy snapshots of the store.
//!
//! Nothing locks the store while copying; this is a single-user tool.

use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::AppPaths;
use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Serialize)]
pub struct BackupInfo {
    pub filename: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

pub struct BackupManager {
    db_file: PathBuf,
    backup_dir: PathBuf,
}

impl BackupManager {
    pub fn new(paths: &AppPaths) -> Self {
        Self {
            db_file: paths.db_file(),
            backup_dir: paths.backup_dir(),
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    pub fn snapshot(&self) -> LedgerResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let mut target = self.backup_dir.join(format!("backup_{}.db", stamp));
        let mut n = 1;
        while target.exists() {
            target = self.backup_dir.join(format!("backup_{}_{}.db", stamp, n));
            n += 1;
        }
        fs::copy(&self.db_file, &target)?;
        info!(path = %target.display(), "snapshot written");
        Ok(target)
    }

    /// Overwrites the live store. Open connections must be reopened afterwards.
    pub fn restore(&self, source: &Path) -> LedgerResult<()> {
        if !source.is_file() {
            return Err(LedgerError::Storage(format!(
                "backup file not found: {}",
                source.display()
            )));
        }
        fs::copy(source, &self.db_file)?;
        info!(from = %source.display(), "store restored");
        Ok(())
    }

    /// Newest first.
    pub fn list(&self) -> LedgerResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("db") {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().to_string();
            out.push(BackupInfo {
                filename,
                size_bytes: entry.metadata()?.len(),
                path,
            });
        }
        out.sort_by(|a, b| sort_key(&b.filename).cmp(&sort_key(&a.filename)));
        Ok(out)
    }
}

/// `backup_<stamp>[_<n>].db` -> (stamp, n); unsuffixed names count as n = 0.
fn sort_key(filename: &str) -> (&str, u32) {
    let stem = filename.strip_suffix(".db").unwrap_or(filename);
    let stem = stem.strip_prefix("backup_").unwrap_or(stem);
    // the stamp itself is `YYYYMMDD_HHMMSS`, so only a third segment is a counter
    match stem.rsplit_once('_') {
        Some((stamp, n)) if stamp.contains('_') => match n.parse::<u32>() {
            Ok(n) => (stamp, n),
            Err(_) => (stem, 0),
        },
        _ => (stem, 0),
    }
}
