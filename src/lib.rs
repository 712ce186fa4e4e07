/*
Copyright 2025 James Forster

This file is part of range_algebra.

range_algebra is free software: you can redistribute it and/or
modify it under the terms of the GNU Affero General Public License as
published by the Free Software Foundation, either version 3 of the
License, or (at your option) any later version.

range_algebra is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with range_algebra. If not, see <https://www.gnu.org/licenses/>.
*/

//! This crate provides [`Range`], [`RangeSet`] and [`RangeMap`]:
//! intervals with open, closed and unbounded endpoints over any
//! ordered type, and two ordered containers of them based off
//! [`BTreeMap`].
//!
//! ## Example using `RangeSet`
//!
//! ```rust
//! use range_algebra::Range;
//! use range_algebra::RangeSet;
//!
//! let mut set = RangeSet::new();
//!
//! set.add(Range::closed(1, 10).unwrap());
//! set.add(Range::closed_open(11, 15).unwrap());
//!
//! // [11, 15) and [15, 20) touch at 15, so they coalesce
//! set.add(Range::closed_open(15, 20).unwrap());
//!
//! assert_eq!(
//! 	set.iter().collect::<Vec<_>>(),
//! 	[
//! 		&Range::closed(1, 10).unwrap(),
//! 		&Range::closed_open(11, 20).unwrap()
//! 	]
//! );
//! ```
//!
//! ## Example using `RangeMap`
//!
//! ```rust
//! use range_algebra::Range;
//! use range_algebra::RangeMap;
//!
//! let mut map = RangeMap::new();
//!
//! map.put(Range::closed(1, 10).unwrap(), "a");
//! map.put(Range::closed(4, 6).unwrap(), "b");
//!
//! // puts split the overwritten portion out of existing entries
//! assert_eq!(
//! 	map.iter().collect::<Vec<_>>(),
//! 	[
//! 		(&Range::closed_open(1, 4).unwrap(), &"a"),
//! 		(&Range::closed(4, 6).unwrap(), &"b"),
//! 		(&Range::open_closed(6, 10).unwrap(), &"a")
//! 	]
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Bounds
//!
//! Every range carries two [`Bound`]s, each either finite with an
//! [`Open`](BoundType::Open) or [`Closed`](BoundType::Closed)
//! qualifier, or [`Unbounded`](Bound::Unbounded). Unboundedness is an
//! explicit variant, never a sentinel value of the point type.
//!
//! ### Invalid and empty ranges
//!
//! A range is only constructible if its bounds describe an interval.
//! Equal finite endpoints are the singleton when both bounds are
//! closed, and the **empty range** when both are open. The two mixed
//! combinations are rejected.
//!
//! | range    | valid          |
//! | -------- | -------------- |
//! | `[0, 1]` | YES            |
//! | `[0, 0]` | YES, singleton |
//! | `(0, 0)` | YES, empty     |
//! | `[0, 0)` | NO             |
//! | `(0, 0]` | NO             |
//! | `[9, 8]` | NO             |
//!
//! Adding, putting or removing an empty range on a container is always
//! a no-op rather than an error, and the containers never store empty
//! ranges.
//!
//! ### Overlapping
//!
//! Two ranges "overlap" if there exists a point contained in both,
//! so `[2, 4]` and `[4, 6]` overlap while `[2, 4)` and `[4, 6]` do
//! not.
//!
//! ### Touching
//!
//! Two ranges are "touching" if they do not overlap and no value can
//! sit between them. `[2, 4)` and `[4, 6]` touch at `4`, but `(2, 4)`
//! and `(4, 6)` do not touch since `4` itself separates them. Note
//! that no discreteness is assumed of the point type: `[2, 3]` and
//! `[4, 6]` do not touch even over the integers.
//!
//! ### Connectedness
//!
//! A range is "connected" to another if they overlap or touch. A
//! [`RangeSet`] coalesces connected ranges into one; a [`RangeMap`]
//! never coalesces anything, it only splits.
//!
//! ### Mutability
//!
//! [`RangeSet`] and [`RangeMap`] mutate in place and hand out live
//! [`SubRangeSet`]/[`SubRangeMap`] views; [`ImmutableRangeSet`] and
//! [`ImmutableRangeMap`] run the same algorithms but return a fresh
//! instance from every mutator, so they can be shared freely.
//!
//! ### Discrete domains
//!
//! The containers treat every point type as continuous. Knowledge
//! about a discrete type lives in a [`DiscreteDomain`] capability
//! passed explicitly to [`Range::canonical`], which rewrites a range
//! into the unique half-open form so that, for example, `(1, 5]` and
//! `[2, 6)` over [`Integers`] compare equal after canonicalization.
//!
//! [`BTreeMap`]: std::collections::BTreeMap

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub mod bound;
pub mod discrete_domain;
pub mod immutable_range_map;
pub mod immutable_range_set;
pub mod range;
pub mod range_map;
pub mod range_set;
pub mod test_ranges;

mod cut;
pub(crate) mod utils;

pub use crate::bound::{Bound, BoundType};
pub use crate::discrete_domain::{DiscreteDomain, Integers};
pub use crate::immutable_range_map::{
	ImmutableRangeMap, ImmutableRangeMapBuilder,
};
pub use crate::immutable_range_set::{
	ImmutableRangeSet, ImmutableRangeSetBuilder,
};
pub use crate::range::{
	DisconnectedError, EmptyInputError, InvalidRangeError, Range,
};
pub use crate::range_map::{OutOfViewError, RangeMap, SubRangeMap};
pub use crate::range_set::{RangeSet, SubRangeSet};
