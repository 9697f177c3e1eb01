//! Integration tests spawning real processes

mod helpers;

#[cfg(unix)]
mod query;
#[cfg(unix)]
mod runner;
