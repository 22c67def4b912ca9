// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::compute_metrics;
use crate::models::{Category, CategoryName};
use crate::store::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, parse_category, parse_decimal, pretty_table};
use anyhow::{Context, Result, bail};

pub fn handle(snap: &mut Snapshot, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-budget", sub)) => set_budget(snap, sub)?,
        Some(("set-spent", sub)) => set_spent(snap, sub)?,
        Some(("list", sub)) => list(snap, sub)?,
        _ => {}
    }
    Ok(())
}

// DEBT and GOALS figures are overwritten from the debt/goal collections on
// every recompute, so hand edits to them would be lost silently.
fn editable_category<'a>(snap: &'a mut Snapshot, name: CategoryName) -> Result<&'a mut Category> {
    if matches!(name, CategoryName::Debt | CategoryName::Goals) {
        bail!(
            "The {} category is derived; edit your debts or goals instead",
            name
        );
    }
    snap.data
        .categories
        .iter_mut()
        .find(|c| c.name == name)
        .with_context(|| format!("Category {} missing from snapshot", name))
}

fn set_budget(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let name = parse_category(sub.get_one::<String>("name").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let cat = editable_category(snap, name)?;
    cat.budget = amount;
    println!("Budget for {} set to {}", name, fmt_money(&amount));
    Ok(())
}

fn set_spent(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let name = parse_category(sub.get_one::<String>("name").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let cat = editable_category(snap, name)?;
    cat.amount = amount;
    println!("Spent for {} set to {}", name, fmt_money(&amount));
    Ok(())
}

fn list(snap: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    // list through the metrics engine so DEBT/GOALS show their derived figures
    let calc = compute_metrics(&snap.data);
    if !maybe_print_json(json_flag, jsonl_flag, &calc.spending_categories)? {
        let rows = calc
            .spending_categories
            .iter()
            .map(|c| {
                vec![
                    c.name.to_string(),
                    fmt_money(&c.amount),
                    fmt_money(&c.budget),
                    c.color.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Budget", "Color"], rows)
        );
    }
    Ok(())
}
