//! Support library for the contragraph CLI binary.
//!
//! Re-exports the CLI, input and logging modules so doctests and integration
//! tests can exercise the command pipeline without forking a subprocess.

pub mod cli;
pub mod input;
pub mod logging;
