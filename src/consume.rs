//! Terminal operations.
//!
//! These run on the calling thread. Most of them drain the sequence; the
//! ones that can answer early (`all`, `any`, `find`, `position`, `nth`)
//! drop the rest of it, which shuts the producing stages down.

use std::fmt::Display;

use itertools::Itertools;

use crate::iter::Iter;

impl<T: Send + 'static> Iter<T> {
    pub fn collect(self) -> Vec<T> {
        self.rx.into_iter().collect()
    }

    pub fn count(self) -> usize {
        self.rx.into_iter().count()
    }

    /// The final element, or `None` for an empty sequence.
    pub fn last(self) -> Option<T> {
        self.rx.into_iter().last()
    }

    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(T),
    {
        self.rx.into_iter().for_each(f);
    }

    /// Split into the elements that satisfy `pred` and those that do not,
    /// keeping the original order within each side.
    pub fn partition<F>(self, mut pred: F) -> (Vec<T>, Vec<T>)
    where
        F: FnMut(&T) -> bool,
    {
        self.rx.into_iter().partition(|v| pred(v))
    }

    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.rx.into_iter().fold(init, f)
    }

    /// Fold using the first element as the starting accumulator. `None` for
    /// an empty sequence.
    pub fn reduce<F>(self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.rx.into_iter().reduce(f)
    }

    /// `true` if every element satisfies `pred`; stops at the first that
    /// does not. An empty sequence gives `true`.
    pub fn all<F>(self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.rx.into_iter().all(|v| pred(&v))
    }

    /// `true` if some element satisfies `pred`; stops at the first that does.
    pub fn any<F>(self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.rx.into_iter().any(|v| pred(&v))
    }

    pub fn find<F>(self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.rx.into_iter().find(|v| pred(v))
    }

    /// One-based position of the first element satisfying `pred`.
    pub fn position<F>(self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.rx.into_iter().position(|v| pred(&v)).map(|i| i + 1)
    }

    /// The `n`-th element, counting from one. `None` if the sequence is
    /// shorter than `n` or `n` is zero.
    pub fn nth(self, n: usize) -> Option<T> {
        let index = n.checked_sub(1)?;
        self.rx.into_iter().nth(index)
    }

    /// Render every element with `Display`, separated by `sep`.
    pub fn join(self, sep: &str) -> String
    where
        T: Display,
    {
        self.rx.into_iter().join(sep)
    }
}
