//! Terminal operators: each drives the whole chain to completion, or to its
//! short-circuit point, and returns a concrete value.
//!
//! The pull loop lives here, never in the stages: a terminal operator pulls
//! one element at a time from the front of the chain until exhaustion or
//! until the answer is determined (`any`, `all`, `none`, `first`, `single`
//! and the bounded-consumption stages stop pulling as soon as they can).

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;

use itertools::Itertools;

use crate::error::{Result, SeqError};
use crate::seq::Seq;

impl<T: 'static> Seq<T> {
    /// Materializes every element, in order.
    pub fn to_list(self) -> Vec<T> {
        self.iter.collect()
    }

    /// Materializes the unique elements.
    pub fn to_set(self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.iter.collect()
    }

    /// True iff every element satisfies `predicate`; vacuously true on an
    /// empty sequence. Stops pulling at the first failure.
    pub fn all<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter.all(|element| predicate(&element))
    }

    /// True iff some element satisfies `predicate`; false on an empty
    /// sequence. Stops pulling at the first success.
    pub fn any<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter.any(|element| predicate(&element))
    }

    /// True iff no element satisfies `predicate`; vacuously true on an
    /// empty sequence.
    pub fn none<P>(self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any(predicate)
    }

    /// The natural-order maximum; the first of equal maxima wins.
    pub fn max(self) -> Result<T>
    where
        T: Ord,
    {
        self.max_or_none().ok_or(SeqError::EmptySequence)
    }

    /// Non-failing [`max`](Seq::max): `None` on an empty sequence.
    pub fn max_or_none(self) -> Option<T>
    where
        T: Ord,
    {
        // Strict comparison keeps the first of equal elements.
        self.reduce_or_none(|best, candidate| if candidate > best { candidate } else { best })
    }

    /// The natural-order minimum; the first of equal minima wins.
    pub fn min(self) -> Result<T>
    where
        T: Ord,
    {
        self.min_or_none().ok_or(SeqError::EmptySequence)
    }

    /// Non-failing [`min`](Seq::min): `None` on an empty sequence.
    pub fn min_or_none(self) -> Option<T>
    where
        T: Ord,
    {
        self.reduce_or_none(|best, candidate| if candidate < best { candidate } else { best })
    }

    /// The element whose `key` is largest; ties go to the first encountered.
    pub fn max_by<K, F>(self, key: F) -> Result<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.max_by_or_none(key).ok_or(SeqError::EmptySequence)
    }

    /// Non-failing [`max_by`](Seq::max_by): `None` on an empty sequence.
    pub fn max_by_or_none<K, F>(mut self, mut key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let first = self.iter.next()?;
        let mut best_key = key(&first);
        let mut best = first;
        for element in self.iter {
            let candidate_key = key(&element);
            if candidate_key > best_key {
                best_key = candidate_key;
                best = element;
            }
        }
        Some(best)
    }

    /// The element whose `key` is smallest; ties go to the first encountered.
    pub fn min_by<K, F>(self, key: F) -> Result<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.min_by_or_none(key).ok_or(SeqError::EmptySequence)
    }

    /// Non-failing [`min_by`](Seq::min_by): `None` on an empty sequence.
    pub fn min_by_or_none<K, F>(mut self, mut key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let first = self.iter.next()?;
        let mut best_key = key(&first);
        let mut best = first;
        for element in self.iter {
            let candidate_key = key(&element);
            if candidate_key < best_key {
                best_key = candidate_key;
                best = element;
            }
        }
        Some(best)
    }

    /// The only element of the sequence.
    ///
    /// Fails with [`SeqError::EmptySequence`] on zero elements and
    /// [`SeqError::TooManyElements`] on two or more; the second pull is the
    /// last, so an infinite upstream still terminates.
    pub fn single(mut self) -> Result<T> {
        let first = self.iter.next().ok_or(SeqError::EmptySequence)?;
        match self.iter.next() {
            Some(_) => Err(SeqError::TooManyElements),
            None => Ok(first),
        }
    }

    /// Like [`single`](Seq::single), but an empty sequence yields
    /// `Ok(None)`. Two or more elements still fail.
    pub fn single_or_none(mut self) -> Result<Option<T>> {
        let Some(first) = self.iter.next() else {
            return Ok(None);
        };
        match self.iter.next() {
            Some(_) => Err(SeqError::TooManyElements),
            None => Ok(Some(first)),
        }
    }

    /// The first element. Pulls exactly one element.
    pub fn first(mut self) -> Result<T> {
        self.iter.next().ok_or(SeqError::EmptySequence)
    }

    /// Non-failing [`first`](Seq::first).
    pub fn first_or_none(mut self) -> Option<T> {
        self.iter.next()
    }

    /// The last element, driving the chain to exhaustion.
    pub fn last(self) -> Result<T> {
        self.last_or_none().ok_or(SeqError::EmptySequence)
    }

    /// Non-failing [`last`](Seq::last).
    pub fn last_or_none(self) -> Option<T> {
        self.iter.last()
    }

    /// Left-fold with no seed: the first element is the initial accumulator.
    ///
    /// ```
    /// use koseq::Seq;
    ///
    /// let word = Seq::new(["a", "b", "c"])
    ///     .map(String::from)
    ///     .reduce(|acc, s| acc + &s)?;
    /// assert_eq!(word, "abc");
    /// # Ok::<(), koseq::SeqError>(())
    /// ```
    pub fn reduce<F>(self, operation: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.reduce_or_none(operation).ok_or(SeqError::EmptySequence)
    }

    /// Non-failing [`reduce`](Seq::reduce): `None` on an empty sequence.
    pub fn reduce_or_none<F>(self, operation: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.iter.reduce(operation)
    }

    /// The sum of all elements.
    pub fn sum(self) -> Result<T>
    where
        T: Add<Output = T>,
    {
        self.reduce(|acc, element| acc + element)
    }

    /// Non-failing [`sum`](Seq::sum): `None` on an empty sequence.
    pub fn sum_or_none(self) -> Option<T>
    where
        T: Add<Output = T>,
    {
        self.reduce_or_none(|acc, element| acc + element)
    }

    /// Builds a map from the `(key, value)` pairs produced by `f`; a later
    /// key overwrites an earlier one.
    pub fn associate<K, V, F>(self, f: F) -> HashMap<K, V>
    where
        K: Eq + Hash,
        F: FnMut(T) -> (K, V),
    {
        self.iter.map(f).collect()
    }

    /// Builds a map from `key(element)` to the element itself; a later key
    /// overwrites an earlier one.
    pub fn associate_by<K, F>(self, mut key: F) -> HashMap<K, T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.iter.map(|element| (key(&element), element)).collect()
    }

    /// Builds a map from each element to `value(element)`.
    pub fn associate_with<V, F>(self, mut value: F) -> HashMap<T, V>
    where
        T: Eq + Hash,
        F: FnMut(&T) -> V,
    {
        self.iter
            .map(|element| {
                let v = value(&element);
                (element, v)
            })
            .collect()
    }

    /// Groups elements by `key(element)`.
    ///
    /// Groups appear in first-seen key order and each group keeps its
    /// elements in encounter order, which is why the result is an ordered
    /// association rather than a `HashMap`.
    ///
    /// ```
    /// use koseq::Seq;
    ///
    /// let groups = Seq::new(["one", "two", "three"]).group_by(|s| s.len());
    /// assert_eq!(groups, vec![(3, vec!["one", "two"]), (5, vec!["three"])]);
    /// ```
    pub fn group_by<K, F>(self, mut key: F) -> Vec<(K, Vec<T>)>
    where
        K: Clone + Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<(K, Vec<T>)> = Vec::new();
        for element in self.iter {
            let k = key(&element);
            match slots.get(&k) {
                Some(&slot) => groups[slot].1.push(element),
                None => {
                    slots.insert(k.clone(), groups.len());
                    groups.push((k, vec![element]));
                }
            }
        }
        groups
    }

    /// Invokes `action` on each element, in order, for its side effects.
    pub fn for_each<F>(self, mut action: F)
    where
        F: FnMut(T),
    {
        for element in self.iter {
            action(element);
        }
    }

    /// Concatenates the string form of every element with `separator`
    /// between neighbors.
    pub fn join_to_string(self, separator: &str) -> String
    where
        T: Display,
    {
        self.join_to_string_with(separator, "", "")
    }

    /// [`join_to_string`](Seq::join_to_string) wrapped in `prefix` and
    /// `suffix`; an empty sequence yields just `prefix + suffix`.
    pub fn join_to_string_with(mut self, separator: &str, prefix: &str, suffix: &str) -> String
    where
        T: Display,
    {
        format!("{prefix}{}{suffix}", self.iter.join(separator))
    }

    /// Splits the elements into those satisfying `predicate` and those not,
    /// each side preserving encounter order.
    pub fn partition<P>(self, predicate: P) -> (Vec<T>, Vec<T>)
    where
        P: FnMut(&T) -> bool,
    {
        self.iter.partition(predicate)
    }
}
