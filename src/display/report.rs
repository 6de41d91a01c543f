//! Report display formatting

use crate::reports::{PeriodSummary, ReportRow};

/// Format an income/expense summary
pub fn format_summary(summary: &PeriodSummary) -> String {
    format!(
        "Summary {} .. {}\nIncome:  {}\nExpense: {}\nNet:     {}\n",
        summary.from.format("%Y-%m-%d"),
        summary.to.format("%Y-%m-%d"),
        summary.income,
        summary.expense,
        summary.net
    )
}

/// Format category report rows, already sorted
pub fn format_category_report(rows: &[ReportRow], strategy_name: &str) -> String {
    if rows.is_empty() {
        return "(no operations in this period)\n".to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| r.category_name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = format!("Sorted by: {}\n", strategy_name);
    output.push_str(&format!(
        "{:<width$}  {:>12}\n",
        "Category",
        "Total",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}\n",
        "",
        "",
        width = name_width
    ));
    for row in rows {
        output.push_str(&format!(
            "{:<width$}  {:>12}\n",
            row.category_name,
            row.amount.to_string(),
            width = name_width
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_summary() {
        let summary = PeriodSummary {
            from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            income: Money::new(dec!(100)),
            expense: Money::new(dec!(40.5)),
            net: Money::new(dec!(59.5)),
        };

        let output = format_summary(&summary);
        assert!(output.starts_with("Summary 2025-01-01 .. 2025-01-31"));
        assert!(output.contains("Net:     59.5"));
    }

    #[test]
    fn test_format_category_report() {
        let rows = vec![
            ReportRow::new("Rent", Money::new(dec!(50))),
            ReportRow::new("Food", Money::new(dec!(10))),
        ];
        let output = format_category_report(&rows, "amount-desc");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Sorted by: amount-desc");
        assert!(lines[3].starts_with("Rent"));
        assert!(lines[4].starts_with("Food"));
    }
}
