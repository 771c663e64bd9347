//! Entry points that turn user input into zoom sequence runs.

pub mod cli;
