//! Command-line interface orchestration for contragraph.
//!
//! The `contract` command applies a sequence of contractions to an edge list
//! and prints the resulting graph as DOT. The `mincut` command runs the
//! Stoer–Wagner driver and can write a DOT snapshot of every phase.

mod commands;

pub use commands::{
    Cli, CliError, Command, ContractCommand, ExecutionSummary, MincutCommand, NodePair,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
