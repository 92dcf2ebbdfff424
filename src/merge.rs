//! Combinators that read two sequences.
//!
//! Inputs are always read in a fixed alternation on a single stage thread,
//! never raced against each other, so the output order only depends on the
//! input orders.

use itertools::Itertools;

use crate::iter::Iter;
use crate::pair::Pair;

impl<T: Send + 'static> Iter<T> {
    /// Pair up elements of both sequences until either one runs out.
    ///
    /// `self` is read first; once it is exhausted `other` is not read again.
    pub fn zip<U>(self, other: Iter<U>) -> Iter<Pair<T, U>>
    where
        U: Send + 'static,
    {
        let other = other.rx;
        self.then("zip", move |input, out| {
            for (x, y) in input.iter().zip(other.iter()) {
                out.send(Pair::new(x, y))?;
            }
            Ok(())
        })
    }

    /// Alternate between `self` and `other`, starting with `self`. When one
    /// side runs dry the rest of the other is passed through as is.
    pub fn interleave(self, other: Iter<T>) -> Self {
        let other = other.rx;
        self.then("interleave", move |input, out| {
            for v in input.into_iter().interleave(other) {
                out.send(v)?;
            }
            Ok(())
        })
    }

    /// Alternate between `self` and `other` and stop as soon as the side
    /// whose turn it is has nothing left.
    pub fn interleave_shortest(self, other: Iter<T>) -> Self {
        let other = other.rx;
        self.then("interleave_shortest", move |input, out| {
            for v in input.into_iter().interleave_shortest(other) {
                out.send(v)?;
            }
            Ok(())
        })
    }

    /// Every element of `self` paired with every element of `other`, in
    /// row-major order.
    ///
    /// `other` is read once, while the first row is produced, and replayed
    /// from a buffer for the remaining rows. If `self` is empty `other` is
    /// never read.
    pub fn cartesian_product<U>(self, other: Iter<U>) -> Iter<Pair<T, U>>
    where
        T: Clone,
        U: Clone + Send + 'static,
    {
        let other = other.rx;
        self.then("cartesian_product", move |input, out| {
            let mut rows = input.into_iter();
            let Some(first) = rows.next() else {
                return Ok(());
            };

            let mut columns = Vec::new();
            for y in other {
                columns.push(y.clone());
                out.send(Pair::new(first.clone(), y))?;
            }

            for x in rows {
                for y in &columns {
                    out.send(Pair::new(x.clone(), y.clone()))?;
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    use crossbeam::channel::{self, SendTimeoutError};

    use crate::stage::feed_until_hangup;

    fn pairs(raw: &[(i32, i32)]) -> Vec<Pair<i32, i32>> {
        raw.iter().copied().map(Pair::from).collect()
    }

    #[test]
    fn zip_pairs_in_order() {
        let zipped = Iter::new([1, 2, 3]).zip(Iter::new([4, 5, 6])).collect();
        assert_eq!(zipped, pairs(&[(1, 4), (2, 5), (3, 6)]));
    }

    #[test]
    fn zip_truncates_to_shorter() {
        let zipped = Iter::new([1, 2, 3]).zip(Iter::new(["a"])).collect();
        assert_eq!(zipped, vec![Pair::new(1, "a")]);

        let zipped = Iter::new([1]).zip(Iter::new(["a", "b", "c"])).collect();
        assert_eq!(zipped, vec![Pair::new(1, "a")]);
    }

    #[test]
    fn zip_with_empty_is_empty() {
        let zipped = Iter::new(Vec::<u8>::new()).zip(Iter::new(0..10)).collect();
        assert!(zipped.is_empty());
    }

    #[test]
    fn interleave_appends_longer_tail() {
        let out = Iter::new([1, 2, 3]).interleave(Iter::new([4, 5, 6, 7, 8])).collect();
        assert_eq!(out, vec![1, 4, 2, 5, 3, 6, 7, 8]);

        let out = Iter::new([1, 2, 3, 4]).interleave(Iter::new([9])).collect();
        assert_eq!(out, vec![1, 9, 2, 3, 4]);
    }

    #[test]
    fn interleave_shortest_stops_at_first_gap() {
        let out = Iter::new([1, 2, 3])
            .interleave_shortest(Iter::new([4, 5, 6, 7, 8]))
            .collect();
        assert_eq!(out, vec![1, 4, 2, 5, 3, 6]);

        let out = Iter::new([1, 2, 3, 4]).interleave_shortest(Iter::new([9])).collect();
        assert_eq!(out, vec![1, 9, 2]);
    }

    #[test]
    fn cartesian_product_is_row_major() {
        let product = Iter::new([1, 2, 3])
            .cartesian_product(Iter::new([4, 5, 6, 7, 8]))
            .collect();
        let expected: Vec<_> = (1..=3)
            .flat_map(|x| (4..=8).map(move |y| Pair::new(x, y)))
            .collect();
        assert_eq!(product.len(), 15);
        assert_eq!(product, expected);
    }

    #[test]
    fn cartesian_product_with_empty_sides() {
        assert!(Iter::new([1, 2])
            .cartesian_product(Iter::new(Vec::<i32>::new()))
            .collect()
            .is_empty());
        assert!(Iter::new(Vec::<i32>::new())
            .cartesian_product(Iter::new([1, 2]))
            .collect()
            .is_empty());
    }

    #[test]
    fn zip_releases_the_longer_side() {
        let (tx, rx) = channel::bounded(0);
        let reader = thread::spawn(move || Iter::from_chan(rx).zip(Iter::new([10u64, 20])).collect());
        // A third element is read before the short side is found empty.
        assert_eq!(feed_until_hangup(tx), Some(3));
        let expected = vec![Pair::new(0, 10), Pair::new(1, 20)];
        assert_eq!(reader.join().unwrap(), expected);
    }

    #[test]
    fn interleave_shortest_releases_the_longer_side() {
        let (tx, rx) = channel::bounded(0);
        let reader = thread::spawn(move || {
            Iter::from_chan(rx)
                .interleave_shortest(Iter::new([10u64, 20]))
                .collect()
        });
        assert_eq!(feed_until_hangup(tx), Some(3));
        assert_eq!(reader.join().unwrap(), vec![0, 10, 1, 20, 2]);
    }

    #[test]
    fn cartesian_product_releases_unread_side() {
        let (tx, rx) = channel::bounded::<i32>(0);
        let product = Iter::new(Vec::<i32>::new())
            .cartesian_product(Iter::from_chan(rx))
            .collect();
        assert!(product.is_empty());
        // The stage dropped its receiver without reading.
        assert!(matches!(
            tx.send_timeout(1, Duration::from_secs(5)),
            Err(SendTimeoutError::Disconnected(1))
        ));
    }
}
