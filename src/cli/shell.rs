//! Interactive command loop
//!
//! Reads a command name per line, runs the matching handler and reports
//! failures without leaving the loop. The loop ends on `exit` or when input
//! runs out.

use std::io::{BufRead, Write};
use std::time::Instant;

use super::commands::{format_help, ShellCommand};
use super::transfer::{export_csv, import_csv, ExportTarget};
use super::{account, category, operation, report, Console};
use crate::config::Settings;
use crate::error::FinTrackResult;
use crate::import::ImportTarget;
use crate::reports::SortRegistry;
use crate::storage::Storage;

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A shell session over one storage
pub struct Shell<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    registry: SortRegistry,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, console: Console<R, W>) -> Self {
        Self {
            storage,
            settings,
            registry: SortRegistry::default(),
            console,
        }
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> FinTrackResult<()> {
        write!(self.console.out(), "{}", format_help())?;

        loop {
            let Some(line) = self.console.prompt("\n> ")? else {
                writeln!(self.console.out())?;
                break;
            };
            if line.is_empty() {
                continue;
            }

            let Some(command) = ShellCommand::parse(&line) else {
                writeln!(
                    self.console.out(),
                    "Unknown command: {}. Type 'help' for the list.",
                    line
                )?;
                continue;
            };

            match self.run_timed(command) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    tracing::debug!(command = command.name(), error = %e, "command failed");
                    writeln!(self.console.out(), "Error: {}", e)?;
                }
            }
        }

        Ok(())
    }

    /// Give back the console, e.g. to inspect output in tests
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn run_timed(&mut self, command: ShellCommand) -> FinTrackResult<Flow> {
        if !command.is_timed() {
            return self.dispatch(command);
        }

        let start = Instant::now();
        let result = self.dispatch(command);
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::info!(command = command.name(), elapsed_ms, ok = result.is_ok(), "command finished");
        if self.settings.show_timings {
            writeln!(
                self.console.out(),
                "[timer] {} took {} ms",
                command.name(),
                elapsed_ms
            )?;
        }
        result
    }

    fn dispatch(&mut self, command: ShellCommand) -> FinTrackResult<Flow> {
        let storage = self.storage;
        let console = &mut self.console;

        match command {
            ShellCommand::AddAccount => account::add_account(storage, console)?,
            ShellCommand::ListAccounts => account::list_accounts(storage, console)?,
            ShellCommand::EditAccount => account::edit_account(storage, console)?,
            ShellCommand::DeleteAccount => account::delete_account(storage, console)?,
            ShellCommand::RecalcBalance => account::recalc_balance(storage, console)?,
            ShellCommand::AddCategory => category::add_category(storage, console)?,
            ShellCommand::ListCategories => category::list_categories(storage, console)?,
            ShellCommand::EditCategory => category::edit_category(storage, console)?,
            ShellCommand::DeleteCategory => category::delete_category(storage, console)?,
            ShellCommand::AddOperation => operation::add_operation(storage, console)?,
            ShellCommand::ListOperations => operation::list_operations(storage, console)?,
            ShellCommand::EditOperation => operation::edit_operation(storage, console)?,
            ShellCommand::DeleteOperation => operation::delete_operation(storage, console)?,
            ShellCommand::ReportSummary => report::report_summary(storage, console)?,
            ShellCommand::ReportByCategory => {
                report::report_by_category(storage, self.settings, &self.registry, console)?
            }
            ShellCommand::ImportAccounts => import_csv(storage, ImportTarget::Accounts, console)?,
            ShellCommand::ImportOperations => {
                import_csv(storage, ImportTarget::Operations, console)?
            }
            ShellCommand::ExportOperations => {
                export_csv(storage, ExportTarget::Operations, console)?
            }
            ShellCommand::ExportAccounts => export_csv(storage, ExportTarget::Accounts, console)?,
            ShellCommand::ExportCategories => {
                export_csv(storage, ExportTarget::Categories, console)?
            }
            ShellCommand::Help => write!(console.out(), "{}", format_help())?,
            ShellCommand::Exit => {
                writeln!(console.out(), "Bye.")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MoneyFlowType};
    use crate::services::{AccountService, CategoryService};
    use crate::storage::Repository;
    use rust_decimal_macros::dec;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn quiet() -> Settings {
        Settings {
            show_timings: false,
            ..Settings::default()
        }
    }

    fn run(storage: &Storage, settings: &Settings, input: &str) -> String {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut shell = Shell::new(storage, settings, console);
        shell.run().unwrap();
        String::from_utf8(shell.into_console().into_output()).unwrap()
    }

    #[test]
    fn test_unknown_command_and_eof() {
        let storage = Storage::in_memory();
        let output = run(&storage, &quiet(), "frobnicate\n");
        assert!(output.contains("Unknown command: frobnicate"));
    }

    #[test]
    fn test_add_and_list_accounts() {
        let storage = Storage::in_memory();
        let output = run(
            &storage,
            &quiet(),
            "ADD-ACCOUNT\nMain\n100\nlist-accounts\nexit\n",
        );

        assert!(output.contains("Account 'Main' created with balance 100."));
        assert!(output.contains("Bye."));
        let accounts = storage.accounts.get_all().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].balance(), Money::new(dec!(100)));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let storage = Storage::in_memory();
        let output = run(
            &storage,
            &quiet(),
            "add-account\nBad\n-5\nadd-account\nGood\n\nexit\n",
        );

        assert!(output.contains("Error: Validation error"));
        let accounts = storage.accounts.get_all().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name(), "Good");
    }

    #[test]
    fn test_timer_line() {
        let storage = Storage::in_memory();
        let output = run(&storage, &Settings::default(), "list-accounts\nhelp\nexit\n");

        assert!(output.contains("[timer] list-accounts took "));
        assert!(!output.contains("[timer] help"));
        assert!(!output.contains("[timer] exit"));

        let output = run(&storage, &quiet(), "list-accounts\n");
        assert!(!output.contains("[timer]"));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let storage = Storage::in_memory();
        let account = AccountService::new(&storage)
            .create("Main", Money::zero())
            .unwrap();

        let input = format!(
            "delete-account\n{id}\nn\ndelete-account\n{id}\ny\n",
            id = account.id
        );
        let output = run(&storage, &quiet(), &input);

        assert!(output.contains("Cancelled."));
        assert!(output.contains("Account deleted."));
        assert!(storage.accounts.get(account.id).unwrap().is_none());
    }

    #[test]
    fn test_operation_flow_and_recalc() {
        let storage = Storage::in_memory();
        let account = AccountService::new(&storage)
            .create("Main", Money::new(dec!(100)))
            .unwrap();
        let salary = CategoryService::new(&storage)
            .create(MoneyFlowType::Income, "Salary")
            .unwrap();

        let input = format!(
            "add-operation\nincome\n{acc}\n{cat}\n500\n2025-03-01\npay day\n\
             recalc-balance\n{acc}\n\
             report-summary\n2025-03-01\n2025-03-31\n\
             report-by-category\n2025-03-01\n2025-03-31\n\n",
            acc = account.id,
            cat = salary.id
        );
        let output = run(&storage, &quiet(), &input);

        assert!(output.contains("Balance recalculated: 100 -> 500"));
        assert!(output.contains("Income:  500"));
        assert!(output.contains("Sorted by: amount-desc"));
        assert_eq!(
            storage.accounts.get(account.id).unwrap().unwrap().balance(),
            Money::new(dec!(500))
        );
    }

    #[test]
    fn test_import_and_export_commands() {
        let storage = Storage::in_memory();
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("accounts.csv");
        std::fs::write(&source, "name,balance\nMain,100\nBad,-5\n").unwrap();
        let target = temp.path().join("out").join("accounts.csv");

        let input = format!(
            "import-accounts\n{}\nexport-accounts\n{}\nimport-operations\n\n",
            source.display(),
            target.display()
        );
        let output = run(&storage, &quiet(), &input);

        assert!(output.contains("OK: 1 accounts imported."));
        assert!(output.contains("OK: 1 accounts exported"));
        assert!(output.contains("Error: Invalid argument"));
        let exported = std::fs::read_to_string(&target).unwrap();
        assert!(exported.starts_with("id,name,balance\n"));
        assert!(exported.contains(",Main,100"));
    }
}
