//! The core [`Seq`] pipeline type and its non-terminal operators.
//!
//! A `Seq<T>` wraps an upstream producer behind a boxed iterator handle.
//! Every non-terminal operator consumes the sequence by value and returns a
//! new `Seq` whose iterator delegates to the old one, so composing operators
//! allocates one small adaptor per stage and pulls nothing from the source.
//! Terminal operators (see the methods documented alongside these) own the
//! single forward pull loop.
//!
//! Ordering: elements flow through every operator in upstream order except
//! the explicitly order-altering ones (`sorted*`, `shuffled*`). Those, by
//! contract, materialize the upstream at the point the operator is called
//! and re-wrap the buffer lazily.

use std::hash::Hash;

use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Result, SeqError};

/// A lazily-evaluated chain of transformation stages over a source of
/// elements, finite or infinite.
///
/// Sequences are single-pass: each operator takes `self` by value, so a
/// chain can only ever be driven once and the compiler rejects interleaved
/// pulls from two chains over one source. To branch, materialize first
/// (`to_list`) and build a sequence per branch from the vector.
///
/// # Example
/// ```
/// use koseq::Seq;
///
/// let out = Seq::new([0, 1, 2, 3, 4, 5])
///     .filter(|&n| n % 2 == 0)
///     .map(|n| n * 10)
///     .to_list();
/// assert_eq!(out, vec![0, 20, 40]);
/// ```
pub struct Seq<T: 'static> {
    pub(crate) iter: Box<dyn Iterator<Item = T>>,
}

impl<T: 'static> Seq<T> {
    /// Wraps any iterable source. The source is not touched until a terminal
    /// operator runs, so infinite producers are fine:
    ///
    /// ```
    /// use koseq::Seq;
    ///
    /// let squares = Seq::new(1u64..).map(|n| n * n).take(4).to_list();
    /// assert_eq!(squares, vec![1, 4, 9, 16]);
    /// ```
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Seq { iter: Box::new(source.into_iter()) }
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Seq { iter: Box::new(std::iter::empty()) }
    }

    /// Keeps the elements satisfying `predicate`.
    pub fn filter<P>(self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Seq { iter: Box::new(self.iter.filter(predicate)) }
    }

    /// Replaces each element with `f(element)`.
    pub fn map<R, F>(self, f: F) -> Seq<R>
    where
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Seq { iter: Box::new(self.iter.map(f)) }
    }

    /// Replaces each element with `f(element)`, dropping `None` results.
    pub fn map_not_none<R, F>(self, f: F) -> Seq<R>
    where
        R: 'static,
        F: FnMut(T) -> Option<R> + 'static,
    {
        Seq { iter: Box::new(self.iter.filter_map(f)) }
    }

    /// Expands each element into the elements produced by `f(element)`,
    /// concatenated in upstream order with inner order preserved.
    ///
    /// ```
    /// use koseq::Seq;
    ///
    /// let out = Seq::new(["ab", "cd"])
    ///     .flat_map(|s| s.chars().collect::<Vec<_>>())
    ///     .to_list();
    /// assert_eq!(out, vec!['a', 'b', 'c', 'd']);
    /// ```
    pub fn flat_map<R, I, F>(self, f: F) -> Seq<R>
    where
        R: 'static,
        I: IntoIterator<Item = R> + 'static,
        I::IntoIter: 'static,
        F: FnMut(T) -> I + 'static,
    {
        Seq { iter: Box::new(self.iter.flat_map(f)) }
    }

    /// Skips the first `n` elements; `n` past the end yields an empty
    /// sequence.
    pub fn drop(self, n: usize) -> Seq<T> {
        Seq { iter: Box::new(self.iter.skip(n)) }
    }

    /// Skips elements while `predicate` holds. Once it fails for the first
    /// time the latch flips permanently: every later element passes, even
    /// ones the predicate would match again.
    pub fn drop_while<P>(self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Seq { iter: Box::new(self.iter.skip_while(predicate)) }
    }

    /// Stops after `n` elements; a shorter upstream yields all of them.
    pub fn take(self, n: usize) -> Seq<T> {
        Seq { iter: Box::new(self.iter.take(n)) }
    }

    /// Stops at, and excludes, the first element for which `predicate`
    /// fails. Nothing further is pulled from upstream.
    pub fn take_while<P>(self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Seq { iter: Box::new(self.iter.take_while(predicate)) }
    }

    /// Pairs each element with its zero-based index.
    pub fn enumerate(self) -> Seq<(usize, T)> {
        Seq { iter: Box::new(self.iter.enumerate()) }
    }

    /// Groups consecutive elements into windows of exactly `size`, flushing
    /// a final shorter window at exhaustion. A `size` of zero is an
    /// [`SeqError::InvalidArgument`] failure.
    ///
    /// ```
    /// use koseq::Seq;
    ///
    /// let windows = Seq::new(1..=7).chunked(3)?.to_list();
    /// assert_eq!(windows, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    /// # Ok::<(), koseq::SeqError>(())
    /// ```
    pub fn chunked(self, size: usize) -> Result<Seq<Vec<T>>> {
        if size == 0 {
            return Err(SeqError::InvalidArgument(
                "chunk size must be at least 1".to_string(),
            ));
        }
        Ok(Seq { iter: Box::new(Chunked { upstream: self.iter, size }) })
    }

    /// Drops later duplicates, keeping the first occurrence in place.
    pub fn distinct(self) -> Seq<T>
    where
        T: Clone + Eq + Hash,
    {
        Seq { iter: Box::new(self.iter.unique()) }
    }

    /// Like [`distinct`](Seq::distinct), but deduplicates on `key(element)`.
    pub fn distinct_by<K, F>(self, key: F) -> Seq<T>
    where
        K: Eq + Hash + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        Seq { iter: Box::new(self.iter.unique_by(key)) }
    }

    /// Materializes the upstream and stable-sorts it ascending.
    pub fn sorted(self) -> Seq<T>
    where
        T: Ord,
    {
        let mut elements: Vec<T> = self.iter.collect();
        elements.sort();
        Seq::new(elements)
    }

    /// Materializes the upstream and stable-sorts it ascending by
    /// `key(element)`; equal keys keep their encounter order.
    pub fn sorted_by<K, F>(self, key: F) -> Seq<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut elements: Vec<T> = self.iter.collect();
        elements.sort_by_key(key);
        Seq::new(elements)
    }

    /// Materializes the upstream and stable-sorts it descending. Equal
    /// elements keep their encounter order, so this is a reversed comparator
    /// rather than sort-then-reverse.
    pub fn sorted_desc(self) -> Seq<T>
    where
        T: Ord,
    {
        let mut elements: Vec<T> = self.iter.collect();
        elements.sort_by(|a, b| b.cmp(a));
        Seq::new(elements)
    }

    /// Materializes the upstream and stable-sorts it descending by
    /// `key(element)`; equal keys keep their encounter order.
    pub fn sorted_by_desc<K, F>(self, mut key: F) -> Seq<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut elements: Vec<T> = self.iter.collect();
        elements.sort_by(|a, b| key(b).cmp(&key(a)));
        Seq::new(elements)
    }

    /// Materializes the upstream and returns a uniformly random permutation
    /// of it, drawn from the thread-local generator. For a reproducible
    /// permutation use [`shuffled_with`](Seq::shuffled_with).
    pub fn shuffled(self) -> Seq<T> {
        self.shuffled_with(&mut rand::rng())
    }

    /// Like [`shuffled`](Seq::shuffled), with a caller-supplied generator.
    ///
    /// ```
    /// use koseq::Seq;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let a = Seq::new(0..8).shuffled_with(&mut StdRng::seed_from_u64(7)).to_list();
    /// let b = Seq::new(0..8).shuffled_with(&mut StdRng::seed_from_u64(7)).to_list();
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffled_with<R>(self, rng: &mut R) -> Seq<T>
    where
        R: Rng + ?Sized,
    {
        let mut elements: Vec<T> = self.iter.collect();
        elements.shuffle(rng);
        Seq::new(elements)
    }
}

impl<T: 'static> Seq<Option<T>> {
    /// Drops every `None`, unwrapping the values that remain.
    pub fn filter_not_none(self) -> Seq<T> {
        Seq { iter: Box::new(self.iter.flatten()) }
    }
}

impl<T, I> Seq<I>
where
    T: 'static,
    I: IntoIterator<Item = T> + 'static,
    I::IntoIter: 'static,
{
    /// Concatenates a sequence of iterables into one flat sequence, in
    /// order. Equivalent to `flat_map` with the identity function.
    pub fn flatten(self) -> Seq<T> {
        Seq { iter: Box::new(self.iter.flatten()) }
    }
}

impl<T: 'static> Iterator for Seq<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T: 'static> From<Vec<T>> for Seq<T> {
    fn from(elements: Vec<T>) -> Self {
        Seq::new(elements)
    }
}

/// Stage iterator for [`Seq::chunked`]. Buffers at most one window.
struct Chunked<T: 'static> {
    upstream: Box<dyn Iterator<Item = T>>,
    size: usize,
}

impl<T: 'static> Iterator for Chunked<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let mut window = Vec::with_capacity(self.size);
        while window.len() < self.size {
            match self.upstream.next() {
                Some(element) => window.push(element),
                None => break,
            }
        }
        if window.is_empty() { None } else { Some(window) }
    }
}
