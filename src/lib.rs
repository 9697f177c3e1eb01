pub mod browser;
pub mod config;
pub mod console;
pub mod logging;
pub mod process;
pub mod query;

#[cfg(test)]
mod testing;

pub use process::{CommandLine, Execution, Executor, RunError, Runner, SystemRunner};
pub use query::{sequence_contains, sequence_without};
