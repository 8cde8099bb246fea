/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

//! Lazily sorted views of unordered maps.
//!
//! The obvious way to visit a [`HashMap`] in key order is to collect its
//! keys, sort them eagerly and walk the result, paying O(n·log n) before the
//! first pair is available. The iterators here heapify the keys in O(n)
//! instead and pop them on demand, so a traversal that is abandoned after k
//! pairs costs O(n + k·log n) overall.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::heap;
use crate::heap::Heap;

/// Returns an iterator over the key-value pairs of `map`, ordered by its
/// keys.
///
/// The iterator borrows `map` for its whole lifetime, so the map cannot be
/// mutated mid-traversal.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use iter_ext::sorted_from_map;
///
/// let m = HashMap::from([("one", 1), ("two", 2), ("three", 3)]);
/// let pairs: Vec<_> = sorted_from_map(&m).collect();
/// assert_eq!(pairs, [(&"one", &1), (&"three", &3), (&"two", &2)]);
/// ```
pub fn sorted_from_map<K, V, S>(map: &HashMap<K, V, S>) -> SortedPairs<'_, K, V, S>
where
    K: Ord + Hash,
    S: BuildHasher,
{
    SortedPairs {
        keys: Heap::new(map.keys().collect()),
        map,
    }
}

/// Returns an iterator over the key-value pairs of `map`, ordered by its
/// keys under `compare`.
///
/// Same cost profile as [`sorted_from_map`]. For the output order to be
/// deterministic, `compare` must define a [total order] on `K`. A comparator
/// that collapses distinct keys (comparing strings by length, say) leaves
/// the relative order of the collapsed keys unspecified, but every pair is
/// still yielded exactly once and iteration still terminates.
///
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub fn sorted_from_map_by<K, V, S, F>(
    map: &HashMap<K, V, S>,
    mut compare: F,
) -> SortedPairsBy<'_, K, V, S, F>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnMut(&K, &K) -> Ordering,
{
    let mut keys: Vec<&K> = map.keys().collect();
    heap::heapify(&mut keys, &mut |a, b| compare(a, b));
    SortedPairsBy { keys, map, compare }
}

/// Iterator returned by [`sorted_from_map`].
pub struct SortedPairs<'a, K, V, S> {
    keys: Heap<&'a K>,
    map: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> Iterator for SortedPairs<'a, K, V, S>
where
    K: Ord + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        Some((key, &self.map[key]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V, S> ExactSizeIterator for SortedPairs<'_, K, V, S>
where
    K: Ord + Hash,
    S: BuildHasher,
{
}

impl<K, V, S> FusedIterator for SortedPairs<'_, K, V, S>
where
    K: Ord + Hash,
    S: BuildHasher,
{
}

impl<K, V, S> fmt::Debug for SortedPairs<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedPairs")
            .field("remaining", &self.keys.len())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`sorted_from_map_by`].
pub struct SortedPairsBy<'a, K, V, S, F> {
    keys: Vec<&'a K>,
    map: &'a HashMap<K, V, S>,
    compare: F,
}

impl<'a, K, V, S, F> Iterator for SortedPairsBy<'a, K, V, S, F>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnMut(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let compare = &mut self.compare;
        let key = heap::pop_min(&mut self.keys, &mut |a, b| compare(a, b))?;
        Some((key, &self.map[key]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.keys.len(), Some(self.keys.len()))
    }
}

impl<K, V, S, F> ExactSizeIterator for SortedPairsBy<'_, K, V, S, F>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnMut(&K, &K) -> Ordering,
{
}

impl<K, V, S, F> FusedIterator for SortedPairsBy<'_, K, V, S, F>
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnMut(&K, &K) -> Ordering,
{
}

impl<K, V, S, F> fmt::Debug for SortedPairsBy<'_, K, V, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedPairsBy")
            .field("remaining", &self.keys.len())
            .finish_non_exhaustive()
    }
}
