/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

#![deny(warnings, missing_docs, clippy::all, rustdoc::broken_intra_doc_links)]

//! Crate extending functionality of [std::iter]
//!
//! Everything here produces or consumes plain [`Iterator`]s and follows the
//! same contract the standard adapters follow:
//!
//! * lazy: nothing is computed until `next` is called, and no adapter reads
//!   ahead of what its consumer has accepted;
//! * early stop: a consumer stops a sequence by ceasing to call `next` and
//!   dropping it, and dropping releases whatever the sequence holds open, on
//!   every exit path (exhaustion, early stop, unwind);
//! * single use: iterators are moved into their consumer; a fresh traversal
//!   means a fresh factory call (or a [`Clone`], where implemented).
//!
//! The push view of the same contract, in which the sequence drives a
//! caller-supplied continuation that returns `false` to stop, is available
//! through [`IterExt::for_each_while`], and [`from_pull`] adapts
//! externally-driven pull sources (a pair of next/stop functions) into
//! iterators with guaranteed release.
//!
//! The centerpiece is [`sorted_from_map`] (and its comparator-taking
//! sibling, [`sorted_from_map_by`]): iteration over a [`HashMap`]'s pairs in
//! key order that heapifies the keys in O(n) and sorts lazily from there, so
//! consuming k of n pairs costs O(n + k·log n) rather than the O(n·log n) of
//! an eager sort.
//!
//! [`HashMap`]: std::collections::HashMap

mod ext;
mod heap;
mod pull;
mod sorted_map;
mod sources;

pub use crate::ext::IterExt;
pub use crate::pull::FromPull;
pub use crate::pull::from_pull;
pub use crate::sorted_map::SortedPairs;
pub use crate::sorted_map::SortedPairsBy;
pub use crate::sorted_map::sorted_from_map;
pub use crate::sorted_map::sorted_from_map_by;
pub use crate::sources::Between;
pub use crate::sources::Iterate;
pub use crate::sources::between;
pub use crate::sources::iterate;
