use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::expenses::use_cases::expense_report::report::{
    CategoryTotal, ExpenseReport, ExpenseRow,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlExpenseRow {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub display_date: String,
}

impl From<ExpenseRow> for GqlExpenseRow {
    fn from(row: ExpenseRow) -> Self {
        Self {
            description: row.description,
            category: row.category.label().to_string(),
            amount: row.amount,
            display_date: row.display_date,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCategoryTotal {
    pub category: String,
    pub amount: f64,
}

impl From<CategoryTotal> for GqlCategoryTotal {
    fn from(total: CategoryTotal) -> Self {
        Self {
            category: total.category.label().to_string(),
            amount: total.amount,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlExpenseReport {
    pub rows: Vec<GqlExpenseRow>,
    pub total_amount: f64,
    pub by_category: Vec<GqlCategoryTotal>,
}

impl From<ExpenseReport> for GqlExpenseReport {
    fn from(report: ExpenseReport) -> Self {
        Self {
            rows: report.rows.into_iter().map(Into::into).collect(),
            total_amount: report.total_amount,
            by_category: report.by_category.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ExpensesQuery;

#[Object]
impl ExpensesQuery {
    async fn expenses(&self, context: &Context<'_>) -> GqlResult<GqlExpenseReport> {
        let state = context.data_unchecked::<AppState>();
        let report = state
            .expense_report
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(report.into())
    }
}
