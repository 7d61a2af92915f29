use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::Weight;

/// Shortest known distance to a vertex.
///
/// `Infinite` marks a vertex with no path from the source and orders after
/// every finite value. Serializes as the bare number, or `null` when infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Extends the distance by one edge. Infinity absorbs any weight, and a
    /// sum that overflows `W` is infinite too.
    pub fn extend(self, weight: W) -> Self {
        match self {
            Distance::Finite(d) => d.checked_add(&weight).map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}
