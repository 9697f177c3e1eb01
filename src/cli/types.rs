use clap::{Parser, Subcommand};
use strand::config::ColorChoice;

#[derive(Parser)]
#[command(name = "strand")]
#[command(about = "Run commands and inspect what they print", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// When to use colors
    #[arg(long, value_enum, env = "STRAND_COLOR", default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// Log filter, e.g. "debug" or "strand=trace"
    #[arg(long, env = "STRAND_LOG", global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a command that must succeed and print its output
    Run {
        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Run a command, print its output and outcome, exit 1 if it failed
    Try {
        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Print whether the output of a command contains some text
    Contains {
        /// Text to look for
        target: String,

        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Print whether the output of a command has a line equal to some text
    ContainsLine {
        /// Line to look for
        target: String,

        /// Program and arguments, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Print the program used to open URLs in a browser
    Browser,

    /// Ask a question and echo the answer
    Ask {
        /// Question shown before reading the answer
        label: String,
    },

    /// Print a count followed by a (pluralized) word
    Pluralize { count: String, word: String },

    /// Indent every line of some text
    Indent {
        /// Number of two-space units
        #[arg(short, long, default_value_t = 1)]
        level: usize,

        text: String,
    },
}
