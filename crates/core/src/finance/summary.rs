//! Monthly totals and trend smoothing for the finance dashboard.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::{FinanceError, FinancialTransaction, TransactionKind};

pub const DEFAULT_SMOOTHING_WINDOW: usize = 3;

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    /// `YYYY-MM`.
    pub month: String,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
    pub months: Vec<MonthlyTotals>,
    /// Trailing moving average of `months[i].net`, same length as `months`.
    pub smoothed_net: Vec<f64>,
    pub window: usize,
}

/// Groups transactions by month, oldest month first.
pub fn monthly_summary(transactions: &[FinancialTransaction]) -> Vec<MonthlyTotals> {
    let mut by_month: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for tx in transactions {
        let entry = by_month
            .entry((tx.date.year(), tx.date.month()))
            .or_insert((0.0, 0.0));
        match tx.kind {
            TransactionKind::Income => entry.0 += tx.amount,
            TransactionKind::Expense => entry.1 += tx.amount,
        }
    }

    by_month
        .into_iter()
        .map(|((year, month), (income, expense))| MonthlyTotals {
            month: format!("{year:04}-{month:02}"),
            income,
            expense,
            net: income - expense,
        })
        .collect()
}

/// Trailing moving average.
///
/// Each output point averages the value at that position and up to
/// `window - 1` values before it, so early points use a shorter window.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>, FinanceError> {
    if window == 0 {
        return Err(FinanceError::InvalidWindow);
    }
    Ok((0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect())
}

/// Builds the full dashboard summary.
pub fn summarize(
    transactions: &[FinancialTransaction],
    window: usize,
) -> Result<FinanceSummary, FinanceError> {
    let months = monthly_summary(transactions);
    let nets: Vec<f64> = months.iter().map(|m| m.net).collect();
    let smoothed_net = moving_average(&nets, window)?;
    let total_income: f64 = months.iter().map(|m| m.income).sum();
    let total_expense: f64 = months.iter().map(|m| m.expense).sum();

    Ok(FinanceSummary {
        total_income,
        total_expense,
        net: total_income - total_expense,
        months,
        smoothed_net,
        window,
    })
}
