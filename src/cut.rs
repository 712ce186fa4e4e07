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

use std::cmp::Ordering;

use crate::bound::Bound;

/// The position of an endpoint on the line of `T` values, used for
/// every comparison in this crate and as the key type of the backing
/// tree.
///
/// `Below(v)` sits immediately before `v` and `Above(v)` immediately
/// after it, so a closed lower bound and an open lower bound at the
/// same value occupy different positions. Mapping lower and upper
/// bounds onto cuts makes touching ranges adjacent: the upper bound of
/// `[a, b)` and the lower bound of `[b, c)` are both `Below(b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Cut<T> {
	/// Before every value, the position of an unbounded lower bound.
	BelowAll,
	/// Just before the value: a closed lower or an open upper bound.
	Below(T),
	/// Just after the value: an open lower or a closed upper bound.
	Above(T),
	/// After every value, the position of an unbounded upper bound.
	AboveAll,
}

impl<T> Cut<T> {
	pub(crate) fn from_lower(bound: Bound<T>) -> Self {
		match bound {
			Bound::Unbounded => Cut::BelowAll,
			Bound::Closed(value) => Cut::Below(value),
			Bound::Open(value) => Cut::Above(value),
		}
	}
	pub(crate) fn from_upper(bound: Bound<T>) -> Self {
		match bound {
			Bound::Unbounded => Cut::AboveAll,
			Bound::Closed(value) => Cut::Above(value),
			Bound::Open(value) => Cut::Below(value),
		}
	}
	pub(crate) fn into_lower(self) -> Bound<T> {
		match self {
			Cut::BelowAll => Bound::Unbounded,
			Cut::Below(value) => Bound::Closed(value),
			Cut::Above(value) => Bound::Open(value),
			Cut::AboveAll => {
				unreachable!("no lower bound sits above every value")
			}
		}
	}
	pub(crate) fn into_upper(self) -> Bound<T> {
		match self {
			Cut::AboveAll => Bound::Unbounded,
			Cut::Above(value) => Bound::Closed(value),
			Cut::Below(value) => Bound::Open(value),
			Cut::BelowAll => {
				unreachable!("no upper bound sits below every value")
			}
		}
	}
	pub(crate) fn value(&self) -> Option<&T> {
		match self {
			Cut::Below(value) | Cut::Above(value) => Some(value),
			Cut::BelowAll | Cut::AboveAll => None,
		}
	}
}

impl<T> Cut<&T>
where
	T: Clone,
{
	pub(crate) fn cloned(self) -> Cut<T> {
		match self {
			Cut::BelowAll => Cut::BelowAll,
			Cut::Below(value) => Cut::Below(value.clone()),
			Cut::Above(value) => Cut::Above(value.clone()),
			Cut::AboveAll => Cut::AboveAll,
		}
	}
}

impl<T> Ord for Cut<T>
where
	T: Ord,
{
	#[rustfmt::skip]
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Cut::BelowAll, Cut::BelowAll) => Ordering::Equal,
			(Cut::BelowAll, Cut::Below(_)) => Ordering::Less,
			(Cut::BelowAll, Cut::Above(_)) => Ordering::Less,
			(Cut::BelowAll, Cut::AboveAll) => Ordering::Less,

			(Cut::Below(_), Cut::BelowAll) => Ordering::Greater,
			(Cut::Below(this), Cut::Below(that)) => this.cmp(that),
			(Cut::Below(this), Cut::Above(that)) => cmp_with_tie(this, that, Ordering::Less),
			(Cut::Below(_), Cut::AboveAll) => Ordering::Less,

			(Cut::Above(_), Cut::BelowAll) => Ordering::Greater,
			(Cut::Above(this), Cut::Below(that)) => cmp_with_tie(this, that, Ordering::Greater),
			(Cut::Above(this), Cut::Above(that)) => this.cmp(that),
			(Cut::Above(_), Cut::AboveAll) => Ordering::Less,

			(Cut::AboveAll, Cut::BelowAll) => Ordering::Greater,
			(Cut::AboveAll, Cut::Below(_)) => Ordering::Greater,
			(Cut::AboveAll, Cut::Above(_)) => Ordering::Greater,
			(Cut::AboveAll, Cut::AboveAll) => Ordering::Equal,
		}
	}
}

impl<T> PartialOrd for Cut<T>
where
	T: Ord,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Compare by value, falling back to `tie` when the values are equal.
fn cmp_with_tie<T>(left: &T, right: &T, tie: Ordering) -> Ordering
where
	T: Ord,
{
	left.cmp(right).then(tie)
}
