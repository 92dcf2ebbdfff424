use std::fmt;

use serde::{Deserialize, Serialize};

/// Two values travelling through a pipeline together.
///
/// Produced by [`Iter::zip`](crate::Iter::zip),
/// [`Iter::cartesian_product`](crate::Iter::cartesian_product) and
/// [`Iter::from_map`](crate::Iter::from_map).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair<X, Y> {
    pub x: X,
    pub y: Y,
}

impl<X, Y> Pair<X, Y> {
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    pub fn into_tuple(self) -> (X, Y) {
        (self.x, self.y)
    }
}

impl<X, Y> From<(X, Y)> for Pair<X, Y> {
    fn from((x, y): (X, Y)) -> Self {
        Self { x, y }
    }
}

impl<X, Y> From<Pair<X, Y>> for (X, Y) {
    fn from(pair: Pair<X, Y>) -> Self {
        pair.into_tuple()
    }
}

impl<X: fmt::Display, Y: fmt::Display> fmt::Display for Pair<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
