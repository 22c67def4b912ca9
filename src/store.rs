// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BaseData, DebtItem, GoalItem};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Paydown", "paydown"));

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unsupported snapshot version {found}, this build reads version {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// The whole-state envelope persisted as a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub data: BaseData,
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn new() -> Self {
        Snapshot {
            version: SNAPSHOT_VERSION,
            data: BaseData::default(),
            timestamp: Utc::now(),
        }
    }

    /// Insert a debt, assigning the next stable id. Update and delete key off
    /// this id, so debts sharing name/balance/rate stay unambiguous.
    pub fn add_debt(&mut self, mut debt: DebtItem) -> i64 {
        debt.id = next_id(self.data.debts.iter().map(|d| d.id));
        let id = debt.id;
        self.data.debts.push(debt);
        id
    }

    pub fn add_goal(&mut self, mut goal: GoalItem) -> i64 {
        goal.id = next_id(self.data.goals.iter().map(|g| g.id));
        let id = goal.id;
        self.data.goals.push(goal);
        id
    }

    pub fn debt_mut(&mut self, id: i64) -> Option<&mut DebtItem> {
        self.data.debts.iter_mut().find(|d| d.id == id)
    }

    pub fn goal_mut(&mut self, id: i64) -> Option<&mut GoalItem> {
        self.data.goals.iter_mut().find(|g| g.id == id)
    }

    pub fn remove_debt(&mut self, id: i64) -> bool {
        let before = self.data.debts.len();
        self.data.debts.retain(|d| d.id != id);
        self.data.debts.len() != before
    }

    pub fn remove_goal(&mut self, id: i64) -> bool {
        let before = self.data.goals.len();
        self.data.goals.retain(|g| g.id != id);
        self.data.goals.len() != before
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot::new()
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

pub fn snapshot_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("paydown.json"))
}

/// Read the snapshot at the default path, or start from defaults when no
/// file exists yet (income 0, the four empty categories, no debts/goals).
pub fn load_or_init() -> Result<Snapshot> {
    let path = snapshot_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        Ok(Snapshot::new())
    }
}

pub fn load_from(path: &Path) -> Result<Snapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read snapshot at {}", path.display()))?;
    let snap: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Parse snapshot at {}", path.display()))?;
    if snap.version != SNAPSHOT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: snap.version,
            expected: SNAPSHOT_VERSION,
        }
        .into());
    }
    Ok(snap)
}

pub fn save(snap: &mut Snapshot) -> Result<()> {
    let path = snapshot_path()?;
    save_to(&path, snap)
}

pub fn save_to(path: &Path, snap: &mut Snapshot) -> Result<()> {
    snap.timestamp = Utc::now();
    let raw = serde_json::to_string_pretty(snap)?;
    fs::write(path, raw).with_context(|| format!("Write snapshot at {}", path.display()))?;
    Ok(())
}
