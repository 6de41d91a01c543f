//! Shell command table

/// Every command the shell understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellCommand {
    AddAccount,
    ListAccounts,
    EditAccount,
    DeleteAccount,
    AddCategory,
    ListCategories,
    EditCategory,
    DeleteCategory,
    AddOperation,
    ListOperations,
    EditOperation,
    DeleteOperation,
    ReportSummary,
    ReportByCategory,
    ImportAccounts,
    ImportOperations,
    ExportOperations,
    ExportAccounts,
    ExportCategories,
    RecalcBalance,
    Help,
    Exit,
}

impl ShellCommand {
    /// All commands in help order
    pub const ALL: [ShellCommand; 22] = [
        Self::AddAccount,
        Self::ListAccounts,
        Self::EditAccount,
        Self::DeleteAccount,
        Self::AddCategory,
        Self::ListCategories,
        Self::EditCategory,
        Self::DeleteCategory,
        Self::AddOperation,
        Self::ListOperations,
        Self::EditOperation,
        Self::DeleteOperation,
        Self::ReportSummary,
        Self::ReportByCategory,
        Self::ImportAccounts,
        Self::ImportOperations,
        Self::ExportOperations,
        Self::ExportAccounts,
        Self::ExportCategories,
        Self::RecalcBalance,
        Self::Help,
        Self::Exit,
    ];

    /// Name typed at the prompt
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddAccount => "add-account",
            Self::ListAccounts => "list-accounts",
            Self::EditAccount => "edit-account",
            Self::DeleteAccount => "delete-account",
            Self::AddCategory => "add-category",
            Self::ListCategories => "list-categories",
            Self::EditCategory => "edit-category",
            Self::DeleteCategory => "delete-category",
            Self::AddOperation => "add-operation",
            Self::ListOperations => "list-operations",
            Self::EditOperation => "edit-operation",
            Self::DeleteOperation => "delete-operation",
            Self::ReportSummary => "report-summary",
            Self::ReportByCategory => "report-by-category",
            Self::ImportAccounts => "import-accounts",
            Self::ImportOperations => "import-operations",
            Self::ExportOperations => "export-operations",
            Self::ExportAccounts => "export-accounts",
            Self::ExportCategories => "export-categories",
            Self::RecalcBalance => "recalc-balance",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// One-line help text
    pub fn description(&self) -> &'static str {
        match self {
            Self::AddAccount => "Create a bank account",
            Self::ListAccounts => "Show all accounts",
            Self::EditAccount => "Rename an account and/or set its balance",
            Self::DeleteAccount => "Delete an account by ID",
            Self::AddCategory => "Create an income or expense category",
            Self::ListCategories => "Show all categories",
            Self::EditCategory => "Rename a category",
            Self::DeleteCategory => "Delete a category by ID",
            Self::AddOperation => "Record an income or expense operation",
            Self::ListOperations => "Show operations, optionally for one account",
            Self::EditOperation => "Change the description of an operation",
            Self::DeleteOperation => "Delete an operation by ID",
            Self::ReportSummary => "Income, expense and net for a period",
            Self::ReportByCategory => "Totals per category for a period",
            Self::ImportAccounts => "Import accounts from CSV (name,balance)",
            Self::ImportOperations => {
                "Import operations from CSV (type,accountId,amount,date,categoryId,description)"
            }
            Self::ExportOperations => "Export operations to CSV",
            Self::ExportAccounts => "Export accounts to CSV",
            Self::ExportCategories => "Export categories to CSV",
            Self::RecalcBalance => "Recalculate an account balance from its operations",
            Self::Help => "Show this list",
            Self::Exit => "Leave the program",
        }
    }

    /// Look up a command by name, ignoring case and surrounding whitespace
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(input))
    }

    /// Whether the shell reports how long the command took
    pub fn is_timed(&self) -> bool {
        !matches!(self, Self::Help | Self::Exit)
    }
}

/// Help text listing every command
pub fn format_help() -> String {
    let width = ShellCommand::ALL
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0);

    let mut output = String::from("Available commands:\n");
    for cmd in ShellCommand::ALL {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            cmd.name(),
            cmd.description(),
            width = width
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            ShellCommand::parse("ADD-Account"),
            Some(ShellCommand::AddAccount)
        );
        assert_eq!(ShellCommand::parse(" exit "), Some(ShellCommand::Exit));
        assert_eq!(ShellCommand::parse("launch-rocket"), None);
        assert_eq!(ShellCommand::parse(""), None);
    }

    #[test]
    fn test_names_unique_and_round_trip() {
        let names: HashSet<_> = ShellCommand::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), ShellCommand::ALL.len());
        for cmd in ShellCommand::ALL {
            assert_eq!(ShellCommand::parse(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn test_help_lists_all() {
        let help = format_help();
        for cmd in ShellCommand::ALL {
            assert!(help.contains(cmd.name()));
        }
    }
}
