//! Error types for the contragraph core library.
//!
//! The engine itself treats precondition violations as panics; only
//! construction and the minimum-cut driver report recoverable errors.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while building a [`crate::ContractibleGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An arc referenced a node id outside `[0, node_count)`.
    #[error("arc ({from}, {to}) references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The out-of-range endpoint.
        node: usize,
        /// Tail of the offending arc, as provided.
        from: usize,
        /// Head of the offending arc, as provided.
        to: usize,
        /// Number of nodes the graph was built with.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An arc referenced a node id outside the graph.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
    }
}

/// Failure reported by a minimum-cut phase observer.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error produced by the Stoer–Wagner driver.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MinCutError {
    /// A cut needs at least two live nodes.
    #[error("a minimum cut needs at least two live nodes (got {nodes})")]
    TooFewNodes {
        /// Number of live nodes when the driver started.
        nodes: usize,
    },
    /// The phase observer aborted the run.
    #[error("phase observer failed at phase {phase}: {source}")]
    Observer {
        /// Phase the observer was called for.
        phase: usize,
        /// Error returned by the observer.
        #[source]
        source: ObserverError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MinCutError`] variants.
    enum MinCutErrorCode for MinCutError {
        /// A cut needs at least two live nodes.
        TooFewNodes => TooFewNodes { .. } => "MINCUT_TOO_FEW_NODES",
        /// The phase observer aborted the run.
        Observer => Observer { .. } => "MINCUT_OBSERVER_FAILED",
    }
}
