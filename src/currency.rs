// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed-rate display currencies.
//!
//! Every amount at rest is in the canonical unit. A rate says how many
//! canonical units one unit of the display currency is worth, so
//! converting for display divides and converting user input multiplies.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::error::{LedgerError, LedgerResult};

pub const CANONICAL_SYMBOL: &str = "₹";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    rates: BTreeMap<String, Decimal>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert(CANONICAL_SYMBOL.to_string(), Decimal::ONE);
        rates.insert("$".to_string(), Decimal::from(83));
        Self { rates }
    }
}

impl CurrencyTable {
    pub fn new<I, S>(pairs: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut rates = BTreeMap::new();
        for (sym, rate) in pairs {
            let sym = sym.into();
            if sym.trim().is_empty() {
                return Err(LedgerError::Validation("currency symbol is empty".into()));
            }
            if rate <= Decimal::ZERO {
                return Err(LedgerError::Validation(format!(
                    "rate for '{}' must be positive, got {}",
                    sym, rate
                )));
            }
            rates.insert(sym, rate);
        }
        Ok(Self { rates })
    }

    pub fn rate(&self, symbol: &str) -> LedgerResult<Decimal> {
        self.rates
            .get(symbol)
            .copied()
            .ok_or_else(|| LedgerError::UnknownCurrency(symbol.to_string()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.rates.contains_key(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(s, r)| (s.as_str(), *r))
    }

    /// Rounded to 2 dp; only ever used for presentation.
    pub fn to_display(&self, canonical: Decimal, symbol: &str) -> LedgerResult<Decimal> {
        let rate = self.rate(symbol)?;
        let v = canonical
            .checked_div(rate)
            .ok_or_else(LedgerError::out_of_range)?;
        Ok(v.round_dp(2))
    }

    pub fn to_canonical(&self, display: Decimal, symbol: &str) -> LedgerResult<Decimal> {
        let rate = self.rate(symbol)?;
        display
            .checked_mul(rate)
            .ok_or_else(LedgerError::out_of_range)
    }

    pub fn format(&self, canonical: Decimal, symbol: &str) -> LedgerResult<String> {
        let v = self.to_display(canonical, symbol)?;
        Ok(format!("{} {:.2}", symbol, v))
    }
}
