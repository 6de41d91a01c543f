//! Category display formatting

use crate::models::Category;

/// Format categories as a table with their flow type
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<36}  {:<8}  {}\n", "ID", "Type", "Name"));
    output.push_str(&format!("{:-<36}  {:-<8}  {:-<4}\n", "", "", ""));

    for category in categories {
        output.push_str(&format!(
            "{:<36}  {:<8}  {}\n",
            category.id.to_string(),
            category.flow_type().to_string(),
            category.name()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DomainFactory, MoneyFlowType};

    #[test]
    fn test_format_category_list() {
        let cat = DomainFactory::new()
            .create_category(MoneyFlowType::Income, "Salary")
            .unwrap();

        let output = format_category_list(&[cat.clone()]);

        let row = output.lines().nth(2).unwrap();
        assert!(row.starts_with(&cat.id.to_string()));
        assert!(row.contains("Income"));
        assert!(row.ends_with("Salary"));
        assert_eq!(format_category_list(&[]), "No categories found.\n");
    }
}
