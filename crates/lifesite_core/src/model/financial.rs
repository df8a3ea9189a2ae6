//! Monthly financial line items.

use super::{nullable, string_or_number};
use crate::util::dates::parse_month_label;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancialKind {
    Income,
    Expense,
    Savings,
    Other,
}

impl FinancialKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" => Self::Income,
            "expense" | "expenses" => Self::Expense,
            "savings" | "saving" => Self::Savings,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialEntry {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Month label such as `August 2025`.
    #[serde(deserialize_with = "nullable")]
    pub month: String,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "nullable")]
    pub subcategory: String,
    #[serde(deserialize_with = "nullable")]
    pub amount: f64,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

impl FinancialEntry {
    pub fn kind(&self) -> FinancialKind {
        FinancialKind::parse(&self.kind)
    }

    /// First day of the entry's month, when the label parses.
    pub fn month_start(&self) -> Option<NaiveDate> {
        parse_month_label(&self.month)
    }
}
