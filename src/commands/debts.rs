// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::DebtItem;
use crate::store::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, parse_debt_type, parse_decimal, pretty_table};
use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

pub fn handle(snap: &mut Snapshot, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(snap, sub)?,
        Some(("list", sub)) => list(snap, sub)?,
        Some(("update", sub)) => update(snap, sub)?,
        Some(("rm", sub)) => rm(snap, sub)?,
        Some(("pay", sub)) => pay(snap, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap().trim())?;
    let min_payment = parse_decimal(sub.get_one::<String>("min-payment").unwrap().trim())?;
    let interest_rate = parse_decimal(sub.get_one::<String>("interest-rate").unwrap().trim())?;
    let planned_payment = sub
        .get_one::<String>("planned-payment")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let r#type = parse_debt_type(sub.get_one::<String>("type").unwrap())?;

    let id = snap.add_debt(DebtItem {
        id: 0, // assigned by the store
        name: name.clone(),
        balance,
        min_payment,
        planned_payment,
        total_paid: Decimal::ZERO,
        interest_rate,
        r#type,
    });
    println!("Added debt '{}' (id {})", name, id);
    Ok(())
}

fn list(snap: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &snap.data.debts)? {
        let rows = snap
            .data
            .debts
            .iter()
            .map(|d| {
                vec![
                    d.id.to_string(),
                    d.name.clone(),
                    d.r#type.to_string(),
                    fmt_money(&d.balance),
                    format!("{}%", d.interest_rate),
                    fmt_money(&d.min_payment),
                    fmt_money(&d.effective_payment()),
                    fmt_money(&d.total_paid),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Debt", "Type", "Balance", "Rate", "Min", "Planned", "Paid"],
                rows
            )
        );
    }
    Ok(())
}

fn update(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let name = sub.get_one::<String>("name").map(|s| s.trim().to_string());
    let balance = sub
        .get_one::<String>("balance")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let min_payment = sub
        .get_one::<String>("min-payment")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let interest_rate = sub
        .get_one::<String>("interest-rate")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let planned_payment = sub
        .get_one::<String>("planned-payment")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let r#type = sub
        .get_one::<String>("type")
        .map(|s| parse_debt_type(s))
        .transpose()?;

    let debt = snap
        .debt_mut(id)
        .with_context(|| format!("Debt id {} not found", id))?;
    if let Some(v) = name {
        debt.name = v;
    }
    if let Some(v) = balance {
        debt.balance = v;
    }
    if let Some(v) = min_payment {
        debt.min_payment = v;
    }
    if let Some(v) = interest_rate {
        debt.interest_rate = v;
    }
    if let Some(v) = planned_payment {
        debt.planned_payment = Some(v);
    }
    if let Some(v) = r#type {
        debt.r#type = v;
    }
    println!("Updated debt '{}' (id {})", debt.name, id);
    Ok(())
}

fn rm(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !snap.remove_debt(id) {
        bail!("Debt id {} not found", id);
    }
    println!("Removed debt id {}", id);
    Ok(())
}

fn pay(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let debt = snap
        .debt_mut(id)
        .with_context(|| format!("Debt id {} not found", id))?;
    debt.total_paid += amount;
    println!(
        "Recorded payment of {} on '{}' (paid this period: {})",
        fmt_money(&amount),
        debt.name,
        fmt_money(&debt.total_paid)
    );
    Ok(())
}
