//! Argument vectors for external commands

use std::fmt;
use thiserror::Error;

/// Returned when an argument vector has no program name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("A command needs at least a program name")]
pub struct EmptyCommandError;

/// An external command as a fixed argument vector.
///
/// The first element names the executable, the rest are passed to it
/// verbatim. Nothing is interpreted by a shell, so quotes, globs and
/// pipes reach the child process as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Every element of the vector, program first.
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }
}

impl TryFrom<Vec<String>> for CommandLine {
    type Error = EmptyCommandError;

    fn try_from(mut argv: Vec<String>) -> Result<Self, Self::Error> {
        if argv.is_empty() {
            return Err(EmptyCommandError);
        }
        let program = argv.remove(0);
        Ok(Self {
            program,
            args: argv,
        })
    }
}

impl TryFrom<&[&str]> for CommandLine {
    type Error = EmptyCommandError;

    fn try_from(argv: &[&str]) -> Result<Self, Self::Error> {
        match argv.split_first() {
            Some((program, args)) => Ok(Self::new(*program, args.iter().copied())),
            None => Err(EmptyCommandError),
        }
    }
}

/// Space-joined, for diagnostics only.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.argv().collect();
        f.write_str(&joined.join(" "))
    }
}
