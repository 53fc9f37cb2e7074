// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use tracing::info;

use crate::db;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Goal;

/// Savings goals. All amounts here are canonical.
pub struct Goals<'a> {
    conn: &'a Connection,
}

impl<'a> Goals<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, name: &str, target: Decimal) -> LedgerResult<Goal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation("goal name is empty".into()));
        }
        if target <= Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "goal target must be positive, got {}",
                target
            )));
        }
        let id = db::insert_goal(self.conn, name, target)?;
        info!(id, name, %target, "goal created");
        Ok(Goal {
            id,
            name: name.to_string(),
            target,
            progress: Decimal::ZERO,
        })
    }

    /// Progress only grows and is not capped at the target.
    pub fn contribute(&self, goal_id: i64, amount: Decimal) -> LedgerResult<Goal> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "contribution must not be negative, got {}",
                amount
            )));
        }
        let touched = db::increment_goal_progress(self.conn, goal_id, amount)?;
        if touched == 0 {
            return Err(LedgerError::NotFound {
                entity: "Goal",
                id: goal_id,
            });
        }
        let goal = db::get_goal(self.conn, goal_id)?.ok_or(LedgerError::NotFound {
            entity: "Goal",
            id: goal_id,
        })?;
        info!(id = goal_id, %amount, progress = %goal.progress, "goal contribution");
        Ok(goal)
    }

    pub fn list(&self) -> LedgerResult<Vec<Goal>> {
        db::list_goals(self.conn)
    }
}
