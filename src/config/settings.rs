//! Runtime settings for FinTrack
//!
//! Everything is supplied on the command line; there is no settings file and
//! no environment lookup.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::reports::{ReportSortStrategy, SortRegistry};

/// Default report sort strategy name
pub const DEFAULT_SORT: &str = "amount-desc";

/// Verbosity of log output on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Options that shape a shell session
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct Settings {
    /// Sort strategy for category reports (amount-desc, name-asc)
    #[arg(long = "sort", value_name = "NAME", default_value = DEFAULT_SORT)]
    pub sort_strategy: String,

    /// Hide the per-command "[timer]" line
    #[arg(long = "no-timings", action = clap::ArgAction::SetFalse)]
    pub show_timings: bool,

    /// Log verbosity on stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Accounts CSV to import before the shell starts
    #[arg(long = "accounts", value_name = "PATH")]
    pub preload_accounts: Option<PathBuf>,

    /// Operations CSV to import before the shell starts
    #[arg(long = "operations", value_name = "PATH")]
    pub preload_operations: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_strategy: DEFAULT_SORT.to_string(),
            show_timings: true,
            log_level: LogLevel::default(),
            preload_accounts: None,
            preload_operations: None,
        }
    }
}

impl Settings {
    /// Resolve the configured sort strategy, falling back to the registry default
    pub fn sort_strategy<'r>(&self, registry: &'r SortRegistry) -> Option<&'r dyn ReportSortStrategy> {
        if !registry.contains(&self.sort_strategy) {
            tracing::warn!(
                requested = %self.sort_strategy,
                "unknown sort strategy, using default"
            );
        }
        registry.select(&self.sort_strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        settings: Settings,
    }

    fn parse(args: &[&str]) -> Settings {
        let mut argv = vec!["fintrack"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().settings
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(parse(&[]), Settings::default());
    }

    #[test]
    fn test_flags() {
        let settings = parse(&[
            "--sort",
            "name-asc",
            "--no-timings",
            "--log-level",
            "debug",
            "--accounts",
            "a.csv",
        ]);

        assert_eq!(settings.sort_strategy, "name-asc");
        assert!(!settings.show_timings);
        assert_eq!(settings.log_level.as_directive(), "debug");
        assert_eq!(settings.preload_accounts, Some(PathBuf::from("a.csv")));
        assert_eq!(settings.preload_operations, None);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(TestCli::try_parse_from(["fintrack", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_sort_strategy_fallback() {
        let registry = SortRegistry::default();
        let settings = Settings {
            sort_strategy: "bogus".into(),
            ..Settings::default()
        };
        assert_eq!(
            settings.sort_strategy(&registry).map(|s| s.name()),
            Some("amount-desc")
        );
    }
}
