//! Line-oriented console over any reader/writer pair
//!
//! Handlers ask for one value per prompt. Parsing helpers turn bad input
//! into validation errors so the shell can report them and move on.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{FinTrackError, FinTrackResult};
use crate::import::parse_date;
use crate::models::{Money, MoneyFlowType};

/// Prompted input and plain output
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for handler output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect output in tests
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label`, then read one trimmed line; `None` at end of input
    pub fn prompt(&mut self, label: &str) -> FinTrackResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`prompt`](Self::prompt), but running out of input is an error
    pub fn ask(&mut self, label: &str) -> FinTrackResult<String> {
        self.prompt(label)?
            .ok_or_else(|| FinTrackError::InvalidArgument("Input ended unexpectedly".into()))
    }

    /// Ask for a value that may be left blank
    pub fn ask_optional(&mut self, label: &str) -> FinTrackResult<Option<String>> {
        let answer = self.ask(label)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Ask a yes/no question; anything but "y" or "yes" means no
    pub fn confirm(&mut self, question: &str) -> FinTrackResult<bool> {
        let answer = self.ask(&format!("{} (y/n): ", question))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    /// Ask for an ID of type `T`
    pub fn ask_id<T>(&mut self, label: &str) -> FinTrackResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let text = self.ask(label)?;
        text.parse()
            .map_err(|e| FinTrackError::Validation(format!("Invalid ID '{}': {}", text, e)))
    }

    /// Ask for an amount
    pub fn ask_money(&mut self, label: &str) -> FinTrackResult<Money> {
        let text = self.ask(label)?;
        Money::parse(&text).map_err(|e| FinTrackError::Validation(e.to_string()))
    }

    /// Ask for Income or Expense
    pub fn ask_flow(&mut self, label: &str) -> FinTrackResult<MoneyFlowType> {
        let text = self.ask(label)?;
        MoneyFlowType::parse(&text).ok_or_else(|| {
            FinTrackError::Validation(format!(
                "Invalid type '{}'. Use Income or Expense",
                text
            ))
        })
    }

    /// Ask for a date
    pub fn ask_date(&mut self, label: &str) -> FinTrackResult<NaiveDate> {
        let text = self.ask(label)?;
        parse_date(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountId;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_and_echoes_label() {
        let mut c = console("  hello  \n");
        assert_eq!(c.prompt("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(c.prompt("> ").unwrap(), None);
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn test_ask_fails_at_eof() {
        let mut c = console("");
        assert!(c.ask("Name: ").is_err());
    }

    #[test]
    fn test_confirm() {
        let mut c = console("Y\nno\nyes\n");
        assert!(c.confirm("Sure?").unwrap());
        assert!(!c.confirm("Sure?").unwrap());
        assert!(c.confirm("Sure?").unwrap());
    }

    #[test]
    fn test_typed_asks() {
        let id = AccountId::new();
        let mut c = console(&format!("{}\n12.5\nexpense\n2025-03-14\n\nnope\n", id));

        assert_eq!(c.ask_id::<AccountId>("id: ").unwrap(), id);
        assert_eq!(c.ask_money("amt: ").unwrap().to_string(), "12.5");
        assert_eq!(c.ask_flow("type: ").unwrap(), MoneyFlowType::Expense);
        assert_eq!(
            c.ask_date("date: ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
        assert_eq!(c.ask_optional("desc: ").unwrap(), None);
        assert!(c.ask_id::<AccountId>("id: ").unwrap_err().is_validation());
    }
}
