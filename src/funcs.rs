//! Curried free-function builders: the second calling convention.
//!
//! Each builder takes the operator's arguments and returns a function from
//! `Seq` to the operator's result, forwarding to the identically-named
//! method on [`Seq`]. That makes the free-function form and the method form
//! interchangeable link for link: for any chain,
//! `seq.pipe(funcs::map(f)).pipe(funcs::to_list())` and
//! `seq.map(f).to_list()` produce the same value with the same laziness.
//!
//! ```
//! use koseq::{Pipe, Seq, funcs};
//!
//! let total = Seq::new([1, 2, 3])
//!     .pipe(funcs::map(|n: i32| n + 1))
//!     .pipe(funcs::sum());
//! assert_eq!(total, Ok(9));
//! ```

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;

use rand::Rng;

use crate::error::Result;
use crate::seq::Seq;

/// Curried [`Seq::filter`].
pub fn filter<T, P>(predicate: P) -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.filter(predicate)
}

/// Curried [`Seq::filter_not_none`].
pub fn filter_not_none<T: 'static>() -> impl FnOnce(Seq<Option<T>>) -> Seq<T> {
    |seq| seq.filter_not_none()
}

/// Curried [`Seq::filter_is_instance`].
pub fn filter_is_instance<R: Any>() -> impl FnOnce(Seq<Box<dyn Any>>) -> Seq<R> {
    |seq| seq.filter_is_instance::<R>()
}

/// Curried [`Seq::cast`].
pub fn cast<R: Any>() -> impl FnOnce(Seq<Box<dyn Any>>) -> Result<Seq<R>> {
    |seq| seq.cast::<R>()
}

/// Curried [`Seq::map`].
pub fn map<T, R, F>(f: F) -> impl FnOnce(Seq<T>) -> Seq<R>
where
    T: 'static,
    R: 'static,
    F: FnMut(T) -> R + 'static,
{
    move |seq| seq.map(f)
}

/// Curried [`Seq::map_not_none`].
pub fn map_not_none<T, R, F>(f: F) -> impl FnOnce(Seq<T>) -> Seq<R>
where
    T: 'static,
    R: 'static,
    F: FnMut(T) -> Option<R> + 'static,
{
    move |seq| seq.map_not_none(f)
}

/// Curried [`Seq::flat_map`].
pub fn flat_map<T, R, I, F>(f: F) -> impl FnOnce(Seq<T>) -> Seq<R>
where
    T: 'static,
    R: 'static,
    I: IntoIterator<Item = R> + 'static,
    I::IntoIter: 'static,
    F: FnMut(T) -> I + 'static,
{
    move |seq| seq.flat_map(f)
}

/// Curried [`Seq::flatten`].
pub fn flatten<T, I>() -> impl FnOnce(Seq<I>) -> Seq<T>
where
    T: 'static,
    I: IntoIterator<Item = T> + 'static,
    I::IntoIter: 'static,
{
    |seq| seq.flatten()
}

/// Curried [`Seq::drop`].
pub fn drop<T: 'static>(n: usize) -> impl FnOnce(Seq<T>) -> Seq<T> {
    move |seq| seq.drop(n)
}

/// Curried [`Seq::drop_while`].
pub fn drop_while<T, P>(predicate: P) -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.drop_while(predicate)
}

/// Curried [`Seq::take`].
pub fn take<T: 'static>(n: usize) -> impl FnOnce(Seq<T>) -> Seq<T> {
    move |seq| seq.take(n)
}

/// Curried [`Seq::take_while`].
pub fn take_while<T, P>(predicate: P) -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.take_while(predicate)
}

/// Curried [`Seq::sorted`].
pub fn sorted<T>() -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: Ord + 'static,
{
    |seq| seq.sorted()
}

/// Curried [`Seq::sorted_by`].
pub fn sorted_by<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: 'static,
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |seq| seq.sorted_by(key)
}

/// Curried [`Seq::sorted_desc`].
pub fn sorted_desc<T>() -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: Ord + 'static,
{
    |seq| seq.sorted_desc()
}

/// Curried [`Seq::sorted_by_desc`].
pub fn sorted_by_desc<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: 'static,
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |seq| seq.sorted_by_desc(key)
}

/// Curried [`Seq::chunked`].
pub fn chunked<T: 'static>(size: usize) -> impl FnOnce(Seq<T>) -> Result<Seq<Vec<T>>> {
    move |seq| seq.chunked(size)
}

/// Curried [`Seq::enumerate`].
pub fn enumerate<T: 'static>() -> impl FnOnce(Seq<T>) -> Seq<(usize, T)> {
    |seq| seq.enumerate()
}

/// Curried [`Seq::shuffled`].
pub fn shuffled<T: 'static>() -> impl FnOnce(Seq<T>) -> Seq<T> {
    |seq| seq.shuffled()
}

/// Curried [`Seq::shuffled_with`]. Borrows the generator for the duration
/// of the returned function.
pub fn shuffled_with<T, R>(rng: &mut R) -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: 'static,
    R: Rng + ?Sized,
{
    move |seq| seq.shuffled_with(rng)
}

/// Curried [`Seq::distinct`].
pub fn distinct<T>() -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: Clone + Eq + Hash + 'static,
{
    |seq| seq.distinct()
}

/// Curried [`Seq::distinct_by`].
pub fn distinct_by<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> Seq<T>
where
    T: 'static,
    K: Eq + Hash + 'static,
    F: FnMut(&T) -> K + 'static,
{
    move |seq| seq.distinct_by(key)
}

/// Curried [`Seq::to_list`].
pub fn to_list<T: 'static>() -> impl FnOnce(Seq<T>) -> Vec<T> {
    |seq| seq.to_list()
}

/// Curried [`Seq::to_set`].
pub fn to_set<T>() -> impl FnOnce(Seq<T>) -> HashSet<T>
where
    T: Eq + Hash + 'static,
{
    |seq| seq.to_set()
}

/// Curried [`Seq::all`].
pub fn all<T, P>(predicate: P) -> impl FnOnce(Seq<T>) -> bool
where
    T: 'static,
    P: FnMut(&T) -> bool,
{
    move |seq| seq.all(predicate)
}

/// Curried [`Seq::any`].
pub fn any<T, P>(predicate: P) -> impl FnOnce(Seq<T>) -> bool
where
    T: 'static,
    P: FnMut(&T) -> bool,
{
    move |seq| seq.any(predicate)
}

/// Curried [`Seq::none`].
pub fn none<T, P>(predicate: P) -> impl FnOnce(Seq<T>) -> bool
where
    T: 'static,
    P: FnMut(&T) -> bool,
{
    move |seq| seq.none(predicate)
}

/// Curried [`Seq::max`].
pub fn max<T>() -> impl FnOnce(Seq<T>) -> Result<T>
where
    T: Ord + 'static,
{
    |seq| seq.max()
}

/// Curried [`Seq::max_or_none`].
pub fn max_or_none<T>() -> impl FnOnce(Seq<T>) -> Option<T>
where
    T: Ord + 'static,
{
    |seq| seq.max_or_none()
}

/// Curried [`Seq::max_by`].
pub fn max_by<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> Result<T>
where
    T: 'static,
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |seq| seq.max_by(key)
}

/// Curried [`Seq::max_by_or_none`].
pub fn max_by_or_none<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> Option<T>
where
    T: 'static,
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |seq| seq.max_by_or_none(key)
}

/// Curried [`Seq::min`].
pub fn min<T>() -> impl FnOnce(Seq<T>) -> Result<T>
where
    T: Ord + 'static,
{
    |seq| seq.min()
}

/// Curried [`Seq::min_or_none`].
pub fn min_or_none<T>() -> impl FnOnce(Seq<T>) -> Option<T>
where
    T: Ord + 'static,
{
    |seq| seq.min_or_none()
}

/// Curried [`Seq::min_by`].
pub fn min_by<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> Result<T>
where
    T: 'static,
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |seq| seq.min_by(key)
}

/// Curried [`Seq::min_by_or_none`].
pub fn min_by_or_none<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> Option<T>
where
    T: 'static,
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |seq| seq.min_by_or_none(key)
}

/// Curried [`Seq::single`].
pub fn single<T: 'static>() -> impl FnOnce(Seq<T>) -> Result<T> {
    |seq| seq.single()
}

/// Curried [`Seq::single_or_none`].
pub fn single_or_none<T: 'static>() -> impl FnOnce(Seq<T>) -> Result<Option<T>> {
    |seq| seq.single_or_none()
}

/// Curried [`Seq::first`].
pub fn first<T: 'static>() -> impl FnOnce(Seq<T>) -> Result<T> {
    |seq| seq.first()
}

/// Curried [`Seq::first_or_none`].
pub fn first_or_none<T: 'static>() -> impl FnOnce(Seq<T>) -> Option<T> {
    |seq| seq.first_or_none()
}

/// Curried [`Seq::last`].
pub fn last<T: 'static>() -> impl FnOnce(Seq<T>) -> Result<T> {
    |seq| seq.last()
}

/// Curried [`Seq::last_or_none`].
pub fn last_or_none<T: 'static>() -> impl FnOnce(Seq<T>) -> Option<T> {
    |seq| seq.last_or_none()
}

/// Curried [`Seq::reduce`].
pub fn reduce<T, F>(operation: F) -> impl FnOnce(Seq<T>) -> Result<T>
where
    T: 'static,
    F: FnMut(T, T) -> T,
{
    move |seq| seq.reduce(operation)
}

/// Curried [`Seq::reduce_or_none`].
pub fn reduce_or_none<T, F>(operation: F) -> impl FnOnce(Seq<T>) -> Option<T>
where
    T: 'static,
    F: FnMut(T, T) -> T,
{
    move |seq| seq.reduce_or_none(operation)
}

/// Curried [`Seq::sum`].
pub fn sum<T>() -> impl FnOnce(Seq<T>) -> Result<T>
where
    T: Add<Output = T> + 'static,
{
    |seq| seq.sum()
}

/// Curried [`Seq::sum_or_none`].
pub fn sum_or_none<T>() -> impl FnOnce(Seq<T>) -> Option<T>
where
    T: Add<Output = T> + 'static,
{
    |seq| seq.sum_or_none()
}

/// Curried [`Seq::associate`].
pub fn associate<T, K, V, F>(f: F) -> impl FnOnce(Seq<T>) -> HashMap<K, V>
where
    T: 'static,
    K: Eq + Hash,
    F: FnMut(T) -> (K, V),
{
    move |seq| seq.associate(f)
}

/// Curried [`Seq::associate_by`].
pub fn associate_by<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> HashMap<K, T>
where
    T: 'static,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    move |seq| seq.associate_by(key)
}

/// Curried [`Seq::associate_with`].
pub fn associate_with<T, V, F>(value: F) -> impl FnOnce(Seq<T>) -> HashMap<T, V>
where
    T: Eq + Hash + 'static,
    F: FnMut(&T) -> V,
{
    move |seq| seq.associate_with(value)
}

/// Curried [`Seq::group_by`].
pub fn group_by<T, K, F>(key: F) -> impl FnOnce(Seq<T>) -> Vec<(K, Vec<T>)>
where
    T: 'static,
    K: Clone + Eq + Hash,
    F: FnMut(&T) -> K,
{
    move |seq| seq.group_by(key)
}

/// Curried [`Seq::for_each`].
pub fn for_each<T, F>(action: F) -> impl FnOnce(Seq<T>)
where
    T: 'static,
    F: FnMut(T),
{
    move |seq| seq.for_each(action)
}

/// Curried [`Seq::join_to_string`].
pub fn join_to_string<T>(separator: &str) -> impl FnOnce(Seq<T>) -> String
where
    T: Display + 'static,
{
    move |seq| seq.join_to_string(separator)
}

/// Curried [`Seq::join_to_string_with`].
pub fn join_to_string_with<'a, T>(
    separator: &'a str,
    prefix: &'a str,
    suffix: &'a str,
) -> impl FnOnce(Seq<T>) -> String
where
    T: Display + 'static,
{
    move |seq| seq.join_to_string_with(separator, prefix, suffix)
}

/// Curried [`Seq::partition`].
pub fn partition<T, P>(predicate: P) -> impl FnOnce(Seq<T>) -> (Vec<T>, Vec<T>)
where
    T: 'static,
    P: FnMut(&T) -> bool,
{
    move |seq| seq.partition(predicate)
}
