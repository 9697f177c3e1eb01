//! Runtime settings resolved from flags and environment

use clap::ValueEnum;
use std::io::IsTerminal;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Let the terminal and `NO_COLOR`/`CLICOLOR` decide
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: ColorChoice,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn new(color: ColorChoice, log_filter: Option<String>) -> Self {
        Self {
            color,
            log_filter: log_filter
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Whether log lines on stderr get ANSI styling.
    pub fn log_ansi(&self) -> bool {
        self.ansi_for(
            std::io::stderr().is_terminal(),
            std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()),
        )
    }

    fn ansi_for(&self, terminal: bool, no_color: bool) -> bool {
        match self.color {
            ColorChoice::Auto => terminal && !no_color,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// Set the process-wide styling override. Call once at startup.
    pub fn apply(&self) {
        match self.color {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}
