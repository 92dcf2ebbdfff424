//! Terminal operations that split a sequence into groups.
//!
//! All of these drain the whole sequence on the calling thread before
//! returning.

use std::collections::VecDeque;
use std::mem;

use itertools::Itertools;
use tracing::warn;

use crate::error::{IterError, Result};
use crate::iter::Iter;

impl<T: Send + 'static> Iter<T> {
    /// Split into runs of consecutive elements for which `pred` gives the
    /// same answer.
    pub fn group_by<F>(self, pred: F) -> Vec<Vec<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let runs = self.rx.into_iter().chunk_by(pred);
        let groups = runs.into_iter().map(|(_, run)| run.collect()).collect();
        groups
    }

    /// Split into chunks of `size` elements; the last chunk holds whatever
    /// is left over.
    ///
    /// A `size` of zero puts everything into a single chunk.
    pub fn chunks(self, size: usize) -> Vec<Vec<T>> {
        if size == 0 {
            let all = self.collect();
            return if all.is_empty() { Vec::new() } else { vec![all] };
        }

        let mut chunks = Vec::new();
        let mut current = Vec::with_capacity(size);
        for v in self.rx {
            current.push(v);
            if current.len() == size {
                chunks.push(mem::replace(&mut current, Vec::with_capacity(size)));
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }

    /// All overlapping windows of `size` consecutive elements.
    ///
    /// A sequence shorter than `size` gives one window holding all of it.
    /// Every window is its own `Vec`.
    pub fn windows(self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            warn!("windows called with a window length of 0");
            return Err(IterError::ZeroWindow);
        }

        let mut values = self.rx.into_iter();
        let mut window: VecDeque<T> = values.by_ref().take(size).collect();
        if window.len() < size {
            return Ok(vec![window.into()]);
        }

        let mut windows = vec![window.iter().cloned().collect::<Vec<_>>()];
        for v in values {
            window.pop_front();
            window.push_back(v);
            windows.push(window.iter().cloned().collect());
        }
        Ok(windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MIXED: [i32; 9] = [-2, -1, 1, 2, 3, -4, -5, 7, 8];

    #[test]
    fn group_by_sign() {
        let groups = Iter::new(MIXED).group_by(|v| *v > 0);
        assert_eq!(
            groups,
            vec![vec![-2, -1], vec![1, 2, 3], vec![-4, -5], vec![7, 8]]
        );
    }

    #[test]
    fn group_by_empty_has_no_groups() {
        assert!(Iter::new(Vec::<i32>::new()).group_by(|v| *v > 0).is_empty());
    }

    #[test]
    fn chunks_of_three() {
        assert_eq!(
            Iter::new(MIXED).chunks(3),
            vec![vec![-2, -1, 1], vec![2, 3, -4], vec![-5, 7, 8]]
        );
    }

    #[test]
    fn chunks_with_remainder() {
        assert_eq!(
            Iter::new(MIXED).chunks(2),
            vec![vec![-2, -1], vec![1, 2], vec![3, -4], vec![-5, 7], vec![8]]
        );
    }

    #[test]
    fn chunks_of_zero_is_one_chunk() {
        assert_eq!(Iter::new([1, 2, 3]).chunks(0), vec![vec![1, 2, 3]]);
        assert!(Iter::new(Vec::<i32>::new()).chunks(0).is_empty());
    }

    #[test]
    fn windows_slide_by_one() {
        assert_eq!(
            Iter::new(1..=5).windows(2).unwrap(),
            vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]
        );
        assert_eq!(
            Iter::new(1..=5).windows(3).unwrap(),
            vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]
        );
    }

    #[test]
    fn windows_short_input_gives_one_window() {
        assert_eq!(Iter::new(1..=2).windows(5).unwrap(), vec![vec![1, 2]]);
        assert_eq!(
            Iter::new(Vec::<i32>::new()).windows(2).unwrap(),
            vec![Vec::<i32>::new()]
        );
    }

    #[test]
    fn windows_of_zero_is_an_error() {
        assert!(matches!(Iter::new(1..=2).windows(0), Err(IterError::ZeroWindow)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn chunks_concatenate_back(items in prop::collection::vec(any::<i16>(), 0..40), size in 1usize..8) {
            let chunks = Iter::new(items.clone()).chunks(size);
            prop_assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= size));
            prop_assert!(chunks.iter().rev().skip(1).all(|c| c.len() == size));
            prop_assert_eq!(chunks.concat(), items);
        }

        #[test]
        fn windows_overlap_by_all_but_one(items in prop::collection::vec(any::<i16>(), 0..40), size in 1usize..8) {
            let windows = Iter::new(items.clone()).windows(size).unwrap();
            if items.len() >= size {
                prop_assert_eq!(windows.len(), items.len() - size + 1);
                prop_assert!(windows.iter().all(|w| w.len() == size));
                for pair in windows.windows(2) {
                    prop_assert_eq!(&pair[0][1..], &pair[1][..size - 1]);
                }
            } else {
                prop_assert_eq!(windows, vec![items]);
            }
        }

        #[test]
        fn group_by_runs_alternate(items in prop::collection::vec(any::<i8>(), 0..40)) {
            let groups = Iter::new(items.clone()).group_by(|v| *v >= 0);
            for group in &groups {
                let first = group[0] >= 0;
                prop_assert!(group.iter().all(|v| (*v >= 0) == first));
            }
            for pair in groups.windows(2) {
                prop_assert_ne!(pair[0][0] >= 0, pair[1][0] >= 0);
            }
            prop_assert_eq!(groups.concat(), items);
        }
    }
}
