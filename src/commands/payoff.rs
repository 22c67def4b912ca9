// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::compute_metrics;
use crate::store::Snapshot;
use crate::strategy::compute_strategy;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, parse_strategy, pretty_table};
use anyhow::Result;

pub fn handle(snap: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let strategy = parse_strategy(m.get_one::<String>("strategy").unwrap())?;
    let budget = match m.get_one::<String>("budget") {
        Some(s) => parse_decimal(s.trim())?,
        // default to the derived DEBT category budget (sum of planned payments)
        None => compute_metrics(&snap.data).total_planned_payments,
    };

    let plan = compute_strategy(&snap.data.debts, strategy, budget);
    if !maybe_print_json(json_flag, jsonl_flag, &plan)? {
        let rows = plan
            .iter()
            .map(|p| {
                vec![
                    p.priority.to_string(),
                    p.debt.name.clone(),
                    p.debt.r#type.to_string(),
                    fmt_money(&p.debt.balance),
                    format!("{}%", p.debt.interest_rate),
                    fmt_money(&p.debt.min_payment),
                    fmt_money(&p.recommended_payment),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Priority", "Debt", "Type", "Balance", "Rate", "Min", "Recommended"],
                rows
            )
        );
        println!("Strategy: {} | Budget: {}", strategy.as_str(), fmt_money(&budget));
    }
    Ok(())
}
