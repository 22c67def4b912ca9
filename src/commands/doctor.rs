// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BaseData, CategoryName};
use crate::store::Snapshot;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle(snap: &Snapshot) -> Result<()> {
    let issues = collect_issues(&snap.data);
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues.into_iter().map(|(i, d)| vec![i, d]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Consistency checks over the stored data. The engines stay total over
/// whatever they are handed; anything flagged here is an editing-layer bug.
pub fn collect_issues(data: &BaseData) -> Vec<(String, String)> {
    let mut issues = Vec::new();

    // 1) Exactly one category per name
    for name in CategoryName::ALL {
        let count = data.categories.iter().filter(|c| c.name == name).count();
        if count == 0 {
            issues.push(("missing_category".into(), name.to_string()));
        } else if count > 1 {
            issues.push((
                "duplicate_category".into(),
                format!("{} appears {} times", name, count),
            ));
        }
    }

    // 2) Negative figures
    if data.income < Decimal::ZERO {
        issues.push(("negative_income".into(), data.income.to_string()));
    }
    for c in &data.categories {
        if c.amount < Decimal::ZERO || c.budget < Decimal::ZERO {
            issues.push(("negative_category_figure".into(), c.name.to_string()));
        }
    }
    for d in &data.debts {
        let negative = d.balance < Decimal::ZERO
            || d.min_payment < Decimal::ZERO
            || d.total_paid < Decimal::ZERO
            || d.interest_rate < Decimal::ZERO
            || d.planned_payment.is_some_and(|p| p < Decimal::ZERO);
        if negative {
            issues.push((
                "negative_debt_figure".into(),
                format!("'{}' (id {})", d.name, d.id),
            ));
        }
    }
    for g in &data.goals {
        let negative = g.target < Decimal::ZERO
            || g.current < Decimal::ZERO
            || g.monthly_contribution < Decimal::ZERO
            || g.planned_contribution.is_some_and(|p| p < Decimal::ZERO);
        if negative {
            issues.push((
                "negative_goal_figure".into(),
                format!("'{}' (id {})", g.name, g.id),
            ));
        }
    }

    // 3) Planned payments under the contractual minimum
    for d in &data.debts {
        if d.effective_payment() < d.min_payment {
            issues.push((
                "planned_below_min".into(),
                format!("'{}' (id {})", d.name, d.id),
            ));
        }
    }

    // 4) Stable ids must be unique within each collection
    let mut seen = HashSet::new();
    for d in &data.debts {
        if !seen.insert(d.id) {
            issues.push(("duplicate_debt_id".into(), d.id.to_string()));
        }
    }
    let mut seen = HashSet::new();
    for g in &data.goals {
        if !seen.insert(g.id) {
            issues.push(("duplicate_goal_id".into(), g.id.to_string()));
        }
    }

    issues
}
