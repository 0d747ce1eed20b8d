//! Edge-list parsing for the contragraph CLI.
//!
//! The format is a whitespace-separated token stream: a node count `n`, an
//! edge count `m`, then `m` triples `source destination weight`. Line breaks
//! carry no meaning beyond separating tokens; they are only tracked so errors
//! can point at the offending line.

use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

/// Errors raised while parsing an edge list.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The input ended before every declared token was read.
    #[error("expected {expected} on line {line}, found end of input")]
    MissingToken {
        /// Description of the token that was expected.
        expected: &'static str,
        /// Line on which the input ended.
        line: usize,
    },
    /// A token could not be parsed as the expected integer.
    #[error("expected {expected} on line {line}, found `{token}`")]
    InvalidToken {
        /// The token as written in the input.
        token: String,
        /// Description of the token that was expected.
        expected: &'static str,
        /// Line the token appeared on.
        line: usize,
    },
    /// The absolute edge weights, counting both arcs of every edge, sum past
    /// `i64::MAX`.
    #[error("edge weight on line {line} pushes the total absolute weight past {}", i64::MAX)]
    WeightOverflow {
        /// Line of the edge weight that crossed the bound.
        line: usize,
    },
}

impl EdgeListError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::MissingToken { .. } => EdgeListErrorCode::MissingToken,
            Self::InvalidToken { .. } => EdgeListErrorCode::InvalidToken,
            Self::WeightOverflow { .. } => EdgeListErrorCode::WeightOverflow,
        }
    }
}

/// Machine-readable error codes for [`EdgeListError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeListErrorCode {
    /// The input ended early.
    MissingToken,
    /// A token was not a valid integer.
    InvalidToken,
    /// The weights could overflow a sum.
    WeightOverflow,
}

impl EdgeListErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingToken => "INPUT_MISSING_TOKEN",
            Self::InvalidToken => "INPUT_INVALID_TOKEN",
            Self::WeightOverflow => "INPUT_WEIGHT_OVERFLOW",
        }
    }
}

/// A parsed edge list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeList {
    /// Number of nodes declared by the header.
    pub node_count: usize,
    /// Edges in input order, as written.
    pub edges: Vec<(usize, usize, i64)>,
}

impl EdgeList {
    /// Returns the arcs to build a graph from.
    ///
    /// Undirected lists yield both directions of every edge, the forward arc
    /// first.
    #[must_use]
    pub fn arcs(&self, directed: bool) -> Vec<(usize, usize, i64)> {
        if directed {
            return self.edges.clone();
        }
        self.edges
            .iter()
            .flat_map(|&(a, b, weight)| [(a, b, weight), (b, a, weight)])
            .collect()
    }
}

struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, std::str::SplitWhitespace<'a>)>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            current: None,
            last_line: 1,
        }
    }

    fn next_token(&mut self) -> Option<(&'a str, usize)> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(word) = words.next() {
                    return Some((word, *line));
                }
            }
            let (index, line) = self.lines.next()?;
            self.last_line = index + 1;
            self.current = Some((index + 1, line.split_whitespace()));
        }
    }

    fn line(&self) -> usize {
        self.current.as_ref().map_or(self.last_line, |&(line, _)| line)
    }

    fn expect<T: FromStr>(&mut self, expected: &'static str) -> Result<T, EdgeListError> {
        let Some((token, line)) = self.next_token() else {
            return Err(EdgeListError::MissingToken {
                expected,
                line: self.last_line,
            });
        };
        token.parse().map_err(|_| EdgeListError::InvalidToken {
            token: token.to_owned(),
            expected,
            line,
        })
    }
}

/// Parses an edge list from `text`.
///
/// Tokens after the last declared edge are ignored with a warning.
///
/// Every sum the graph and the minimum-cut driver form is bounded by the sum
/// of absolute arc weights, so that total, with each edge counted in both
/// directions, must fit in an `i64`.
///
/// # Errors
/// Returns [`EdgeListError`] when a token is missing, is not an integer of
/// the expected kind, or when the weights exceed the bound above. Node ids
/// are not range-checked here; graph construction does that.
///
/// # Examples
/// ```
/// use contragraph_cli::input::parse_edge_list;
///
/// let list = parse_edge_list("3 2\n0 1 4\n1 2 -1\n")?;
/// assert_eq!(list.node_count, 3);
/// assert_eq!(list.edges, vec![(0, 1, 4), (1, 2, -1)]);
/// # Ok::<(), contragraph_cli::input::EdgeListError>(())
/// ```
pub fn parse_edge_list(text: &str) -> Result<EdgeList, EdgeListError> {
    let mut tokens = Tokens::new(text);
    let node_count: usize = tokens.expect("node count")?;
    let edge_count: usize = tokens.expect("edge count")?;
    let mut edges = Vec::new();
    let mut total: u64 = 0;
    for _ in 0..edge_count {
        let source: usize = tokens.expect("edge source")?;
        let destination: usize = tokens.expect("edge destination")?;
        let weight: i64 = tokens.expect("edge weight")?;
        total = total
            .checked_add(weight.unsigned_abs())
            .and_then(|sum| sum.checked_add(weight.unsigned_abs()))
            .filter(|&sum| sum <= i64::MAX.unsigned_abs())
            .ok_or(EdgeListError::WeightOverflow {
                line: tokens.line(),
            })?;
        edges.push((source, destination, weight));
    }
    if let Some((token, line)) = tokens.next_token() {
        warn!(token, line, "ignoring input after the declared edges");
    }
    Ok(EdgeList { node_count, edges })
}
