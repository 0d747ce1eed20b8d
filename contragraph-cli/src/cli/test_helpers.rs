//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary edge lists and assert error handling
//! behaviour. These helpers keep the test cases concise and consistent.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, ContractCommand, MincutCommand, NodePair, run_cli};

/// The triangle used by most command tests.
pub(super) const TRIANGLE: &str = "3 3\n0 1 3\n0 2 5\n1 2 7\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_edge_list(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn contract_cli(input: PathBuf, pairs: &[(usize, usize)], directed: bool) -> Cli {
    Cli {
        command: Command::Contract(ContractCommand {
            pairs: pairs
                .iter()
                .map(|&(first, second)| NodePair { first, second })
                .collect(),
            directed,
            keep_self_loops: false,
            input: Some(input),
        }),
    }
}

pub(super) fn mincut_cli(input: PathBuf, snapshots: Option<PathBuf>) -> Cli {
    Cli {
        command: Command::Mincut(MincutCommand {
            input: Some(input),
            snapshots,
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
