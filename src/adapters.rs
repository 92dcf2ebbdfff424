//! Lazy single-input transformers.
//!
//! Each method here spawns one stage thread that reads the upstream
//! sequence in order and writes zero, one or more values per input to its
//! own output channel. Upstream order is always preserved.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::error::{IterError, Result};
use crate::iter::Iter;

impl<T: Send + 'static> Iter<T> {
    // ============================================================================
    // Per-element
    // ============================================================================

    /// Transform every element with `f`. The output type may differ.
    pub fn map<U, F>(self, mut f: F) -> Iter<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        self.then("map", move |input, out| {
            for v in input {
                out.send(f(v))?;
            }
            Ok(())
        })
    }

    /// Keep only the elements for which `pred` returns `true`.
    pub fn filter<F>(self, mut pred: F) -> Self
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        self.then("filter", move |input, out| {
            for v in input {
                if pred(&v) {
                    out.send(v)?;
                }
            }
            Ok(())
        })
    }

    // ============================================================================
    // Prefixes and strides
    // ============================================================================

    /// Pass on at most `n` elements, then hang up on the upstream.
    pub fn take(self, n: usize) -> Self {
        self.then("take", move |input, out| {
            for v in input.iter().take(n) {
                out.send(v)?;
            }
            Ok(())
        })
    }

    /// Emit the first element and then every `step`-th one after it.
    ///
    /// A step of zero is rejected with [`IterError::ZeroStep`].
    pub fn step_by(self, step: usize) -> Result<Self> {
        if step == 0 {
            warn!("step_by called with a step of 0");
            return Err(IterError::ZeroStep);
        }
        Ok(self.then("step_by", move |input, out| {
            for v in input.iter().step_by(step) {
                out.send(v)?;
            }
            Ok(())
        }))
    }

    // ============================================================================
    // Splicing
    // ============================================================================

    /// All of `self`, then all of `other`.
    pub fn chain(self, other: Iter<T>) -> Self {
        let other = other.rx;
        self.then("chain", move |input, out| {
            for v in input {
                out.send(v)?;
            }
            for v in other {
                out.send(v)?;
            }
            Ok(())
        })
    }

    /// Put `sep` between each pair of consecutive elements.
    pub fn intersperse(self, sep: T) -> Self
    where
        T: Clone,
    {
        self.then("intersperse", move |input, out| {
            let mut values = input.into_iter();
            if let Some(first) = values.next() {
                out.send(first)?;
                for v in values {
                    out.send(sep.clone())?;
                    out.send(v)?;
                }
            }
            Ok(())
        })
    }

    // ============================================================================
    // Predicate-bounded prefixes
    // ============================================================================

    /// Drop elements while `pred` holds; everything from the first failure
    /// onwards passes through untouched.
    pub fn skip_while<F>(self, mut pred: F) -> Self
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        self.then("skip_while", move |input, out| {
            for v in input.iter().skip_while(|v| pred(v)) {
                out.send(v)?;
            }
            Ok(())
        })
    }

    /// Pass elements while `pred` holds and stop for good at the first
    /// element that fails it.
    pub fn take_while<F>(self, mut pred: F) -> Self
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        self.then("take_while", move |input, out| {
            for v in input.iter().take_while(|v| pred(v)) {
                out.send(v)?;
            }
            Ok(())
        })
    }

    // ============================================================================
    // Side effects and duplicates
    // ============================================================================

    /// Call `f` on each element just before it is passed on unchanged.
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use chaniter::Iter;
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&seen);
    /// let doubled = Iter::new([1, 2, 3])
    ///     .inspect(move |v| log.lock().unwrap().push(*v))
    ///     .map(|v| v * 2)
    ///     .collect();
    ///
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn inspect<F>(self, mut f: F) -> Self
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.then("inspect", move |input, out| {
            for v in input {
                f(&v);
                out.send(v)?;
            }
            Ok(())
        })
    }

    /// Collapse runs of adjacent elements that `eq` considers equal down to
    /// the first element of each run.
    ///
    /// Each element is compared with the one directly before it, so only
    /// neighbours are merged: `[1, 2, 1]` stays as it is.
    pub fn dedup<F>(self, mut eq: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool + Send + 'static,
    {
        self.then("dedup", move |input, out| {
            let mut last: Option<T> = None;
            for v in input {
                let repeated = last.as_ref().is_some_and(|prev| eq(prev, &v));
                last = Some(v.clone());
                if !repeated {
                    out.send(v)?;
                }
            }
            Ok(())
        })
    }

    /// Emit only the first element seen for each key produced by `key`,
    /// across the whole sequence.
    ///
    /// Keys of every distinct element are kept until the stage finishes.
    pub fn unique<K, F>(self, mut key: F) -> Self
    where
        K: Eq + Hash + Send + 'static,
        F: FnMut(&T) -> K + Send + 'static,
    {
        self.then("unique", move |input, out| {
            let mut seen = FxHashSet::default();
            for v in input {
                if seen.insert(key(&v)) {
                    out.send(v)?;
                }
            }
            Ok(())
        })
    }
}
