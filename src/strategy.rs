// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::DebtItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payoff ordering policy: smallest balance first (snowball) or highest
/// interest rate first (avalanche).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Snowball,
    Avalanche,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Snowball => "snowball",
            Strategy::Avalanche => "avalanche",
        }
    }
}

/// A debt annotated with its payoff rank and the payment the strategy
/// recommends for this period. Recomputed on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtWithStrategy {
    #[serde(flatten)]
    pub debt: DebtItem,
    pub recommended_payment: Decimal,
    pub priority: usize,
}

/// Rank `debts` under `strategy` and split `total_budget` into per-debt
/// recommended payments: every debt gets its contractual minimum, and any
/// budget beyond the sum of minimums goes entirely to the priority-1 debt.
/// The returned list is in priority order; the input is never mutated.
pub fn compute_strategy(
    debts: &[DebtItem],
    strategy: Strategy,
    total_budget: Decimal,
) -> Vec<DebtWithStrategy> {
    let total_min_payments: Decimal = debts.iter().map(|d| d.min_payment).sum();
    let extra_budget = (total_budget - total_min_payments).max(Decimal::ZERO);

    // sort_by is stable: ties keep their original relative order
    let mut ordered: Vec<&DebtItem> = debts.iter().collect();
    match strategy {
        Strategy::Snowball => ordered.sort_by(|a, b| a.balance.cmp(&b.balance)),
        Strategy::Avalanche => ordered.sort_by(|a, b| b.interest_rate.cmp(&a.interest_rate)),
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, debt)| {
            let mut recommended_payment = debt.min_payment;
            if idx == 0 && extra_budget > Decimal::ZERO {
                recommended_payment += extra_budget;
            }
            DebtWithStrategy {
                debt: debt.clone(),
                recommended_payment,
                priority: idx + 1,
            }
        })
        .collect()
}
