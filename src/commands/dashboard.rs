// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::compute_metrics;
use crate::store::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(snap: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let calc = compute_metrics(&snap.data);
    if maybe_print_json(json_flag, jsonl_flag, &calc)? {
        return Ok(());
    }

    let rows = calc
        .spending_categories
        .iter()
        .map(|c| {
            vec![
                c.name.to_string(),
                fmt_money(&c.amount),
                fmt_money(&c.budget),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Budget"], rows));

    println!(
        "Income: {} | Spent: {} | Remaining: {}",
        fmt_money(&calc.total_budget),
        fmt_money(&calc.total_spent),
        fmt_money(&calc.remaining)
    );
    println!(
        "Debt payments: min {} | planned {} | paid {}",
        fmt_money(&calc.total_min_payments),
        fmt_money(&calc.total_planned_payments),
        fmt_money(&calc.total_paid)
    );
    if calc.is_debt_payment_consistent {
        println!("✅ debt budget covers the contractual minimums");
    } else {
        println!("⚠️ debt budget is below the contractual minimums");
    }
    if calc.is_budget_balanced {
        println!("✅ planned allocations fit within income");
    } else {
        println!("⚠️ planned allocations exceed income");
    }
    Ok(())
}
