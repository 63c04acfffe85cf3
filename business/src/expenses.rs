//! Budget page: expense list cache, refresh command, and totals.

use std::any::Any;

use aisle_states::{
    BoxFuture, CancellationToken, Command, CommandSnapshot, Compute, State, Updater,
    state_assign_impl,
};

use crate::config::BusinessConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::Client;
use crate::models::{Expense, ListExpensesResponse};

/// GET `/api/expenses`
pub async fn list_expenses(api_base_url: &str) -> ApiResult<Vec<Expense>> {
    let response = Client::get(format!("{api_base_url}/expenses"))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.is_success() {
        return Err(ApiError::from_response(&response));
    }

    let list: ListExpensesResponse = response
        .json()
        .map_err(|e| ApiError::decode("ListExpensesResponse", e))?;
    Ok(list.expenses)
}

/// Paid / outstanding split over a set of expenses, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseTotals {
    pub paid_cents: i64,
    pub outstanding_cents: i64,
}

impl ExpenseTotals {
    pub fn of(expenses: &[Expense]) -> Self {
        let mut totals = Self::default();
        for expense in expenses {
            if expense.paid {
                totals.paid_cents += expense.amount_cents;
            } else {
                totals.outstanding_cents += expense.amount_cents;
            }
        }
        totals
    }

    pub fn total_cents(&self) -> i64 {
        self.paid_cents + self.outstanding_cents
    }
}

#[derive(Debug, Clone, Default)]
pub enum ExpenseListResult {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Expense>),
    Error(ApiError),
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseListCompute {
    pub result: ExpenseListResult,
}

impl ExpenseListCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, ExpenseListResult::Loading)
    }

    pub fn expenses(&self) -> Option<&[Expense]> {
        match &self.result {
            ExpenseListResult::Loaded(expenses) => Some(expenses.as_slice()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.result {
            ExpenseListResult::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn totals(&self) -> ExpenseTotals {
        self.expenses().map(ExpenseTotals::of).unwrap_or_default()
    }
}

impl State for ExpenseListCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for ExpenseListCompute {}

#[derive(Debug, Default)]
pub struct RefreshExpensesCommand;

impl Command for RefreshExpensesCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> BoxFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            updater.set(ExpenseListCompute {
                result: ExpenseListResult::Loading,
            });

            let fetched = list_expenses(config.api_url().as_str()).await;
            if cancel.is_cancelled() {
                return;
            }

            let result = match fetched {
                Ok(expenses) => ExpenseListResult::Loaded(expenses),
                Err(err) => {
                    log::error!("expense list refresh failed: {err}");
                    ExpenseListResult::Error(err)
                }
            };
            updater.set(ExpenseListCompute { result });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    fn expense(id: u64, amount_cents: i64, paid: bool) -> Expense {
        Expense {
            id,
            description: format!("expense {id}"),
            category: ExpenseCategory::Other,
            vendor: None,
            amount_cents,
            paid,
            due_on: None,
        }
    }

    #[test]
    fn test_totals_split_paid_and_outstanding() {
        let expenses = vec![
            expense(1, 10_000, true),
            expense(2, 2_500, false),
            expense(3, 500, true),
        ];
        let totals = ExpenseTotals::of(&expenses);

        assert_eq!(totals.paid_cents, 10_500);
        assert_eq!(totals.outstanding_cents, 2_500);
        assert_eq!(totals.total_cents(), 13_000);
    }

    #[test]
    fn test_totals_of_empty_list_are_zero() {
        assert_eq!(ExpenseTotals::of(&[]), ExpenseTotals::default());
    }

    #[test]
    fn test_compute_totals_default_before_load() {
        let compute = ExpenseListCompute::default();
        assert!(!compute.is_loading());
        assert_eq!(compute.totals(), ExpenseTotals::default());
    }
}
