// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BaseData, Category, CategoryName, DebtItem, GoalItem};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyData {
    pub income: Decimal,
    pub expenses: Decimal,
    pub debt: Decimal,
    pub goals: Decimal,
    pub categories: Vec<Category>,
    pub debts: Vec<DebtItem>,
    pub goal_items: Vec<GoalItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCalculations {
    pub monthly_data: MonthlyData,
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub total_min_payments: Decimal,
    pub total_planned_payments: Decimal,
    pub total_paid: Decimal,
    pub max_total_payment: Decimal,
    pub is_debt_payment_consistent: bool,
    pub is_budget_balanced: bool,
    pub spending_categories: Vec<Category>,
}

/// Derive the dashboard figures from a whole-state snapshot. The DEBT and
/// GOALS categories are overwritten from the debt/goal aggregates on every
/// call; NEEDS and WANTS pass through unchanged. Pure function of `base`.
pub fn compute_metrics(base: &BaseData) -> DashboardCalculations {
    let total_paid: Decimal = base.debts.iter().map(|d| d.total_paid).sum();
    let total_min_payments: Decimal = base.debts.iter().map(|d| d.min_payment).sum();
    let total_planned_payments: Decimal = base.debts.iter().map(|d| d.effective_payment()).sum();
    // callers scale progress bars against the largest of the three figures
    let max_total_payment = total_min_payments.max(total_planned_payments).max(total_paid);

    let total_monthly_contributions: Decimal =
        base.goals.iter().map(|g| g.monthly_contribution).sum();
    let total_planned_contributions: Decimal =
        base.goals.iter().map(|g| g.effective_contribution()).sum();

    let updated_categories: Vec<Category> = base
        .categories
        .iter()
        .cloned()
        .map(|mut c| {
            match c.name {
                CategoryName::Debt => {
                    c.amount = total_paid;
                    c.budget = total_planned_payments;
                }
                CategoryName::Goals => {
                    c.amount = total_monthly_contributions;
                    c.budget = total_planned_contributions;
                }
                CategoryName::Needs | CategoryName::Wants => {}
            }
            c
        })
        .collect();

    // "total budget" is defined as income, not the sum of category budgets
    let total_budget = base.income;
    let total_spent: Decimal = updated_categories.iter().map(|c| c.amount).sum();
    let remaining = base.income - total_spent;

    let debt_budget = updated_categories
        .iter()
        .find(|c| c.name == CategoryName::Debt)
        .map(|c| c.budget);
    let is_debt_payment_consistent = debt_budget.is_some_and(|b| b >= total_min_payments);
    let planned_allocations: Decimal = updated_categories.iter().map(|c| c.budget).sum();
    let is_budget_balanced = planned_allocations <= base.income;

    let expenses: Decimal = updated_categories
        .iter()
        .filter(|c| matches!(c.name, CategoryName::Needs | CategoryName::Wants))
        .map(|c| c.amount)
        .sum();

    DashboardCalculations {
        monthly_data: MonthlyData {
            income: base.income,
            expenses,
            debt: total_paid,
            goals: total_monthly_contributions,
            categories: updated_categories.clone(),
            debts: base.debts.clone(),
            goal_items: base.goals.clone(),
        },
        total_budget,
        total_spent,
        remaining,
        total_min_payments,
        total_planned_payments,
        total_paid,
        max_total_payment,
        is_debt_payment_consistent,
        is_budget_balanced,
        spending_categories: updated_categories,
    }
}
