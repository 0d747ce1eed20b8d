//! Combiners applied when two arcs between the same live endpoints merge.
//!
//! A fold must be associative and commutative: the engine makes no promise
//! about the order in which parallel arcs are combined.

use std::ops::Add;

/// Combines the weights of two arcs that now share both endpoints.
///
/// # Examples
/// ```
/// use contragraph_core::{Fold, FoldFn, Max, Sum};
///
/// assert_eq!(Sum.fold(&3, &4), 7);
/// assert_eq!(Max.fold(&3, &4), 4);
/// assert_eq!(FoldFn(|a: &u32, b: &u32| a | b).fold(&0b01, &0b10), 0b11);
/// ```
pub trait Fold<W> {
    /// Returns the weight of the arc that replaces `kept` and `merged`.
    fn fold(&self, kept: &W, merged: &W) -> W;
}

/// Adds the weights together. This is the default fold.
///
/// Uses the plain `+` of `W`, so integer weights overflow like ordinary
/// arithmetic. Every folded weight is bounded by the sum of the absolute
/// input weights; keep that sum within the range of `W`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sum;

impl<W> Fold<W> for Sum
where
    W: Clone + Add<Output = W>,
{
    fn fold(&self, kept: &W, merged: &W) -> W {
        kept.clone() + merged.clone()
    }
}

/// Keeps the smaller of the two weights.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Min;

impl<W> Fold<W> for Min
where
    W: Clone + Ord,
{
    fn fold(&self, kept: &W, merged: &W) -> W {
        kept.min(merged).clone()
    }
}

/// Keeps the larger of the two weights.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Max;

impl<W> Fold<W> for Max
where
    W: Clone + Ord,
{
    fn fold(&self, kept: &W, merged: &W) -> W {
        kept.max(merged).clone()
    }
}

/// Adapts a closure into a [`Fold`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FoldFn<F>(pub F);

impl<W, F> Fold<W> for FoldFn<F>
where
    F: Fn(&W, &W) -> W,
{
    fn fold(&self, kept: &W, merged: &W) -> W {
        (self.0)(kept, merged)
    }
}
