// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

use crate::currency::{CANONICAL_SYMBOL, CurrencyTable};
use crate::db;
use crate::error::{LedgerError, LedgerResult};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendwise", "spendwise"));

pub const DB_FILE: &str = "expenses.db";
pub const BACKUP_DIR: &str = "backups";
pub const DEFAULT_THEME: &str = "cosmo";

pub const KEY_PIN: &str = "pin";
pub const KEY_CURRENCY: &str = "currency";
pub const KEY_THEME: &str = "theme";

/// Where the store file and its backups live.
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_dir: PathBuf,
}

impl AppPaths {
    pub fn resolve(data_dir: Option<&Path>) -> LedgerResult<Self> {
        let base_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => ProjectDirs::from(APP.0, APP.1, APP.2)
                .ok_or_else(|| {
                    LedgerError::Storage("Could not determine platform-specific data dir".into())
                })?
                .data_dir()
                .to_path_buf(),
        };
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn db_file(&self) -> PathBuf {
        self.base_dir.join(DB_FILE)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join(BACKUP_DIR)
    }

    /// Creates the data and backup directories on first run.
    pub fn ensure(&self) -> LedgerResult<()> {
        fs::create_dir_all(&self.base_dir)?;
        fs::create_dir_all(self.backup_dir())?;
        Ok(())
    }
}

/// Typed view of the settings rows, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub currency: String,
    pub theme: String,
    pub pin_hash: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: CANONICAL_SYMBOL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            pin_hash: None,
        }
    }
}

impl Settings {
    pub fn load(conn: &Connection) -> LedgerResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            currency: db::get_setting(conn, KEY_CURRENCY)?.unwrap_or(defaults.currency),
            theme: db::get_setting(conn, KEY_THEME)?.unwrap_or(defaults.theme),
            pin_hash: db::get_setting(conn, KEY_PIN)?,
        })
    }

    pub fn set_currency(
        &mut self,
        conn: &Connection,
        table: &CurrencyTable,
        symbol: &str,
    ) -> LedgerResult<()> {
        if !table.contains(symbol) {
            return Err(LedgerError::UnknownCurrency(symbol.to_string()));
        }
        db::set_setting(conn, KEY_CURRENCY, symbol)?;
        self.currency = symbol.to_string();
        Ok(())
    }

    pub fn set_theme(&mut self, conn: &Connection, theme: &str) -> LedgerResult<()> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(LedgerError::Validation("theme name is empty".into()));
        }
        db::set_setting(conn, KEY_THEME, theme)?;
        self.theme = theme.to_string();
        Ok(())
    }
}
