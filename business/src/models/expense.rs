use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One budget line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub description: String,
    #[serde(default)]
    pub category: ExpenseCategory,
    #[serde(default)]
    pub vendor: Option<String>,
    /// Stored in cents so sums stay exact.
    pub amount_cents: i64,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
}

impl Expense {
    /// `123456` -> `"1,234.56"` (currency symbol is the UI's concern).
    pub fn amount_display(&self) -> String {
        format_cents(self.amount_cents)
    }
}

/// Thousands-grouped decimal rendering of an amount in cents.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = cents / 100;
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, digit) in whole.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let whole: String = grouped.chars().rev().collect();
    format!("{sign}{whole}.{frac:02}")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Venue,
    Catering,
    Attire,
    Flowers,
    Music,
    Photography,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Venue => "Venue",
            Self::Catering => "Catering",
            Self::Attire => "Attire",
            Self::Flowers => "Flowers",
            Self::Music => "Music",
            Self::Photography => "Photography",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListExpensesResponse {
    pub expenses: Vec<Expense>,
}
