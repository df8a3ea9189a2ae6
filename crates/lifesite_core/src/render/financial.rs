use super::html::{empty_state, escape_html, progress_bar, stat_tile};
use super::RenderContext;
use crate::filter::ViewState;
use crate::model::{FinancialEntry, FinancialKind};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Share of the month's expenses, 0 when there are none.
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialSummary {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub net: f64,
    pub categories: Vec<CategoryShare>,
}

impl FinancialSummary {
    pub fn savings_rate(&self) -> f64 {
        if self.income > 0.0 {
            self.savings / self.income * 100.0
        } else {
            0.0
        }
    }
}

/// Summary for the latest month present. Unparseable month labels are only
/// used when no label parses.
pub fn financial_summary(entries: &[FinancialEntry]) -> Option<FinancialSummary> {
    let month = entries
        .iter()
        .filter_map(|entry| entry.month_start().map(|start| (start, entry.month.as_str())))
        .max_by_key(|(start, _)| *start)
        .map(|(_, label)| label)
        .or_else(|| {
            entries
                .iter()
                .map(|entry| entry.month.as_str())
                .find(|m| !m.trim().is_empty())
        })?;

    let in_month: Vec<&FinancialEntry> = entries
        .iter()
        .filter(|entry| entry.month == month)
        .collect();
    let sum = |kind: FinancialKind| -> f64 {
        in_month
            .iter()
            .filter(|entry| entry.kind() == kind)
            .map(|entry| entry.amount)
            .sum()
    };
    let income = sum(FinancialKind::Income);
    let expenses = sum(FinancialKind::Expense);
    let savings = sum(FinancialKind::Savings);

    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in in_month.iter().filter(|entry| entry.kind() == FinancialKind::Expense) {
        *by_category.entry(entry.category.as_str()).or_insert(0.0) += entry.amount;
    }
    let mut categories: Vec<CategoryShare> = by_category
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category: category.to_string(),
            amount,
            percentage: if expenses > 0.0 { amount / expenses * 100.0 } else { 0.0 },
        })
        .collect();
    categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    Some(FinancialSummary {
        month: month.to_string(),
        income,
        expenses,
        savings,
        net: income - expenses,
        categories,
    })
}

pub fn render_financial(
    entries: &[FinancialEntry],
    _view: &ViewState,
    _ctx: &RenderContext,
) -> String {
    let Some(summary) = financial_summary(entries) else {
        return empty_state("No financial data yet.");
    };

    let mut html = format!(
        "<div class=\"space-y-6\"><h2 class=\"text-xl font-semibold\">{}</h2><div class=\"grid grid-cols-1 md:grid-cols-4 gap-4\">",
        escape_html(&summary.month)
    );
    html.push_str(&stat_tile("Total Income", &money(summary.income)));
    html.push_str(&stat_tile("Total Expenses", &money(summary.expenses)));
    html.push_str(&stat_tile("Total Savings", &money(summary.savings)));
    html.push_str(&stat_tile("Net Worth Change", &money(summary.net)));
    html.push_str("</div>");

    html.push_str(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Expense Breakdown</h3><div class=\"space-y-3\">",
    );
    for share in &summary.categories {
        html.push_str(&format!(
            "<div><div class=\"flex justify-between text-sm\"><span class=\"font-medium\">{}</span><span>{} ({:.1}%)</span></div>{}</div>",
            escape_html(&share.category),
            money(share.amount),
            share.percentage,
            progress_bar(share.percentage, "bg-blue")
        ));
    }
    html.push_str("</div></div>");

    html.push_str(&format!(
        "<div class=\"card p-6\"><h3 class=\"text-lg font-semibold mb-4\">Savings Rate</h3><div class=\"flex justify-between text-sm\"><span>Monthly Savings Rate</span><span>{:.1}%</span></div>{}</div></div>",
        summary.savings_rate(),
        progress_bar(summary.savings_rate(), "bg-green")
    ));
    html
}

fn money(amount: f64) -> String {
    let formatted = crate::model::metric::format_number(amount.abs());
    if amount < 0.0 {
        format!("-${formatted}")
    } else {
        format!("${formatted}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(month: &str, category: &str, amount: f64, kind: &str) -> FinancialEntry {
        FinancialEntry {
            id: format!("{month}-{category}"),
            month: month.to_string(),
            category: category.to_string(),
            amount,
            kind: kind.to_string(),
            ..FinancialEntry::default()
        }
    }

    #[test]
    fn latest_month_only() {
        let entries = vec![
            entry("July 2025", "Rent", 900.0, "expense"),
            entry("August 2025", "Salary", 4000.0, "income"),
            entry("August 2025", "Rent", 1000.0, "expense"),
            entry("August 2025", "Food", 500.0, "expense"),
            entry("August 2025", "Index fund", 800.0, "savings"),
        ];
        let summary = financial_summary(&entries).unwrap();
        assert_eq!(summary.month, "August 2025");
        assert_eq!(summary.expenses, 1500.0);
        assert_eq!(summary.net, 2500.0);
        assert_eq!(summary.categories[0].category, "Rent");
        assert!((summary.categories[1].percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((summary.savings_rate() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn money_formats_sign_and_grouping() {
        assert_eq!(money(2500.0), "$2,500");
        assert_eq!(money(-12.5), "-$12.5");
    }
}
