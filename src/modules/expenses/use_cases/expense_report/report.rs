// Read-side assembly of the expense ledger.
//
// Same tolerance policy as the trip progress aggregation: a malformed field
// degrades to a default, only a structurally wrong top-level value is an
// error. Rows are ordered by spent-on day ascending, undated rows first,
// store key as tiebreak.

use crate::modules::expenses::core::expense::{Expense, ExpenseCategory};
use crate::shared::core::coerce::non_negative_or_zero;
use crate::shared::core::dates::{display_date, parse_date};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value as Json;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportDataError {
    #[error("expense data is not a map of records")]
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRow {
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub display_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseReport {
    pub rows: Vec<ExpenseRow>,
    pub total_amount: f64,
    pub by_category: Vec<CategoryTotal>,
}

pub fn build_expense_report(data: Option<&Json>) -> Result<ExpenseReport, ReportDataError> {
    let records = match data {
        None | Some(Json::Null) => {
            return Ok(ExpenseReport {
                rows: Vec::new(),
                total_amount: 0.0,
                by_category: Vec::new(),
            });
        }
        Some(Json::Object(records)) => records,
        Some(_) => return Err(ReportDataError::InvalidInput),
    };

    let mut entries: Vec<(&String, Option<NaiveDate>, Expense)> = records
        .iter()
        .map(|(key, record)| {
            let expense = Expense::from_record(record);
            let parsed = expense.spent_on.as_deref().and_then(parse_date);
            (key, parsed, expense)
        })
        .collect();
    entries.sort_by(|(key_a, day_a, _), (key_b, day_b, _)| {
        day_a.cmp(day_b).then_with(|| key_a.cmp(key_b))
    });

    let mut rows = Vec::with_capacity(entries.len());
    let mut total_amount = 0.0;
    let mut totals: BTreeMap<ExpenseCategory, f64> = BTreeMap::new();
    for (_, parsed, expense) in entries {
        let amount = non_negative_or_zero(expense.amount);
        total_amount += amount;
        *totals.entry(expense.category).or_insert(0.0) += amount;
        rows.push(ExpenseRow {
            description: expense.description.unwrap_or_default(),
            category: expense.category,
            amount,
            display_date: display_date(parsed),
        });
    }

    Ok(ExpenseReport {
        rows,
        total_amount,
        by_category: totals
            .into_iter()
            .map(|(category, amount)| CategoryTotal { category, amount })
            .collect(),
    })
}
