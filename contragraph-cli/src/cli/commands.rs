//! Command implementations and argument parsing for the contragraph CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use contragraph_core::{
    ContractibleGraph, Direction, GraphBuilder, GraphError, MinCut, MinCutError, SelfLoops,
    minimum_cut_observed,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::input::{EdgeList, EdgeListError, parse_edge_list};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "contragraph",
    about = "Contract weighted graphs and compute global minimum cuts."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Contract node pairs in order and print the resulting graph as DOT.
    Contract(ContractCommand),
    /// Compute a global minimum cut with the Stoer–Wagner algorithm.
    Mincut(MincutCommand),
}

/// Options accepted by the `contract` command.
#[derive(Debug, Args, Clone)]
pub struct ContractCommand {
    /// Pair of node ids to contract, written `A,B`. Repeat the flag to
    /// contract several pairs; ids returned by earlier contractions are
    /// accepted as well.
    #[arg(long = "pair", value_parser = parse_pair)]
    pub pairs: Vec<NodePair>,

    /// Keep arcs as written instead of adding the reverse of each edge.
    #[arg(long)]
    pub directed: bool,

    /// Keep self-loops instead of dropping them.
    #[arg(long = "keep-self-loops")]
    pub keep_self_loops: bool,

    /// Edge list to read; standard input when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Options accepted by the `mincut` command.
#[derive(Debug, Args, Clone)]
pub struct MincutCommand {
    /// Edge list to read; standard input when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory receiving one DOT snapshot per phase and the final
    /// expansion with the cut highlighted.
    #[arg(long)]
    pub snapshots: Option<PathBuf>,
}

/// Two node ids named on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodePair {
    /// First node of the pair.
    pub first: usize,
    /// Second node of the pair.
    pub second: usize,
}

pub(super) fn parse_pair(raw: &str) -> Result<NodePair, String> {
    let Some((first, second)) = raw.split_once(',') else {
        return Err(format!("expected `A,B`, found `{raw}`"));
    };
    let parse = |value: &str| {
        value
            .trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid node id `{}`: {err}", value.trim()))
    };
    Ok(NodePair {
        first: parse(first)?,
        second: parse(second)?,
    })
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Standard input could not be read.
    #[error("failed to read standard input: {source}")]
    Stdin {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed.
    #[error(transparent)]
    Input(#[from] EdgeListError),
    /// The edge list referenced nodes outside the declared range.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The minimum-cut driver failed.
    #[error(transparent)]
    MinCut(#[from] MinCutError),
    /// A snapshot file could not be written.
    #[error("failed to write snapshot `{path}`: {source}")]
    Snapshot {
        /// Path of the snapshot.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A contraction named a node id that does not exist yet.
    #[error("node {node} does not exist; the graph has {total} node ids")]
    UnknownNode {
        /// The id given on the command line.
        node: usize,
        /// Number of node ids allocated so far.
        total: usize,
    },
    /// A contraction named two ids that already belong to the same node.
    #[error("nodes {first} and {second} were already merged into node {node}")]
    AlreadyMerged {
        /// First id of the pair.
        first: usize,
        /// Second id of the pair.
        second: usize,
        /// Live node both ids resolve to.
        node: usize,
    },
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Input(err) => Some(err.code().as_str()),
            Self::Graph(err) => Some(err.code().as_str()),
            Self::MinCut(err) => Some(err.code().as_str()),
            _ => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of the `contract` command.
    Contract {
        /// Number of live nodes after every contraction.
        live_nodes: usize,
        /// DOT rendering of the contracted graph.
        dot: String,
    },
    /// Result of the `mincut` command.
    Mincut(MinCut<i64>),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use contragraph_cli::cli::{Cli, Command, ContractCommand, ExecutionSummary, NodePair, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n0 1 3\n0 2 5\n1 2 7\n")?;
/// let cli = Cli {
///     command: Command::Contract(ContractCommand {
///         pairs: vec![NodePair { first: 0, second: 1 }],
///         directed: false,
///         keep_self_loops: false,
///         input: Some(file.path().to_path_buf()),
///     }),
/// };
/// let ExecutionSummary::Contract { live_nodes, dot } = run_cli(cli)? else {
///     unreachable!("contract returns a contract summary");
/// };
/// assert_eq!(live_nodes, 2);
/// assert_eq!(dot, "graph g { 3 -- 4 [label=12]; }");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Contract(command) => {
            Span::current().record("command", field::display("contract"));
            run_contract(command)
        }
        Command::Mincut(command) => {
            Span::current().record("command", field::display("mincut"));
            run_mincut(command)
        }
    }
}

#[instrument(
    name = "cli.contract",
    err,
    skip(command),
    fields(pairs = command.pairs.len(), directed = command.directed, self_loops = field::Empty),
)]
pub(super) fn run_contract(command: ContractCommand) -> Result<ExecutionSummary, CliError> {
    let list = read_edge_list(command.input.as_deref())?;
    let self_loops = if command.keep_self_loops {
        SelfLoops::Keep
    } else {
        SelfLoops::Drop
    };
    Span::current().record(
        "self_loops",
        field::display(if command.keep_self_loops { "keep" } else { "drop" }),
    );

    let mut graph = GraphBuilder::new(list.node_count)
        .with_self_loops(self_loops)
        .build(list.arcs(command.directed))?;
    for pair in &command.pairs {
        contract_pair(&mut graph, *pair)?;
    }

    let direction = if command.directed {
        Direction::Directed
    } else {
        Direction::Undirected
    };
    let dot = graph.dot(direction).to_string();
    info!(
        live_nodes = graph.node_count(),
        total_nodes = graph.total_nodes(),
        "contraction completed"
    );
    Ok(ExecutionSummary::Contract {
        live_nodes: graph.node_count(),
        dot,
    })
}

fn contract_pair(graph: &mut ContractibleGraph<i64>, pair: NodePair) -> Result<usize, CliError> {
    let total = graph.total_nodes();
    for node in [pair.first, pair.second] {
        if node >= total {
            return Err(CliError::UnknownNode { node, total });
        }
    }
    let node = graph.find_node(pair.first);
    if node == graph.find_node(pair.second) {
        return Err(CliError::AlreadyMerged {
            first: pair.first,
            second: pair.second,
            node,
        });
    }
    Ok(graph.contract(pair.first, pair.second))
}

#[instrument(
    name = "cli.mincut",
    err,
    skip(command),
    fields(snapshots = field::Empty),
)]
pub(super) fn run_mincut(command: MincutCommand) -> Result<ExecutionSummary, CliError> {
    let list = read_edge_list(command.input.as_deref())?;
    let mut graph = ContractibleGraph::from_edges(list.node_count, list.arcs(false))?;

    let cut = match command.snapshots.as_deref() {
        Some(dir) => {
            Span::current().record("snapshots", field::display(dir.display()));
            fs::create_dir_all(dir).map_err(|source| CliError::Snapshot {
                path: dir.to_path_buf(),
                source,
            })?;
            let cut = minimum_cut_observed(&mut graph, |phase, graph| {
                write_snapshot(
                    &snapshot_path(dir, phase),
                    &graph.dot(Direction::Undirected).to_string(),
                )?;
                Ok(())
            })
            .map_err(unwrap_snapshot_error)?;
            let expansion = graph.expand();
            write_snapshot(
                &snapshot_path(dir, cut.phases()),
                &expansion.dot(Direction::Undirected).to_string(),
            )?;
            cut
        }
        None => minimum_cut_observed(&mut graph, |_, _| Ok(()))?,
    };

    info!(
        weight = cut.weight(),
        phases = cut.phases(),
        "minimum cut completed"
    );
    Ok(ExecutionSummary::Mincut(cut))
}

/// Writes one DOT snapshot followed by a newline.
fn write_snapshot(path: &Path, dot: &str) -> Result<(), CliError> {
    fs::write(path, format!("{dot}\n")).map_err(|source| CliError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}

/// Recovers a [`CliError::Snapshot`] raised inside the phase observer.
fn unwrap_snapshot_error(err: MinCutError) -> CliError {
    match err {
        MinCutError::Observer { phase, source } => match source.downcast::<CliError>() {
            Ok(snapshot) => *snapshot,
            Err(source) => CliError::MinCut(MinCutError::Observer { phase, source }),
        },
        other => CliError::MinCut(other),
    }
}

/// Returns `dir/NNN.dot` for a phase, zero padded to three digits.
pub(super) fn snapshot_path(dir: &Path, phase: usize) -> PathBuf {
    dir.join(format!("{phase:03}.dot"))
}

#[instrument(name = "cli.read_input", err, fields(path = field::Empty))]
pub(super) fn read_edge_list(path: Option<&Path>) -> Result<EdgeList, CliError> {
    let text = match path {
        Some(path) => {
            Span::current().record("path", field::display(path.display()));
            fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            Span::current().record("path", field::display("<stdin>"));
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Stdin { source })?;
            text
        }
    };
    Ok(parse_edge_list(&text)?)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use contragraph_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Contract {
///     live_nodes: 1,
///     dot: "graph g { }".into(),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "graph g { }\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Contract { dot, .. } => writeln!(writer, "{dot}"),
        ExecutionSummary::Mincut(cut) => {
            writeln!(writer, "min cut: {}", cut.weight())?;
            writeln!(writer, "phases: {}", cut.phases())?;
            let partition: Vec<String> = cut.partition().iter().map(ToString::to_string).collect();
            writeln!(writer, "partition: {}", partition.join(" "))?;
            for edge in cut.cut_edges() {
                writeln!(
                    writer,
                    "{} -- {} {}",
                    edge.source(),
                    edge.destination(),
                    edge.weight()
                )?;
            }
            Ok(())
        }
    }
}
