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

//! The module containing [`ImmutableRangeSet`], the persistent
//! front-end over [`RangeSet`], and its builder.

use std::hash::{Hash, Hasher};

use crate::range::Range;
use crate::range_set::RangeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable ordered set of pairwise-disconnected [`Range`]s.
///
/// Every mutating operation clones the backing tree and returns a new
/// instance, leaving the original untouched, so one instance can be
/// shared freely across threads without synchronization. The
/// algorithms are the same as [`RangeSet`]'s; only the ownership
/// regime differs.
///
/// # Examples
/// ```
/// use range_algebra::test_ranges::{ie, ii};
/// use range_algebra::ImmutableRangeSet;
///
/// let set = ImmutableRangeSet::builder()
/// 	.add(ii(1, 10))
/// 	.add(ie(11, 15))
/// 	.build();
///
/// let bigger = set.add(ie(15, 20));
///
/// // the original is untouched
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&ii(1, 10), &ie(11, 15)]);
/// assert_eq!(
/// 	bigger.iter().collect::<Vec<_>>(),
/// 	[&ii(1, 10), &ie(11, 20)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmutableRangeSet<T> {
	inner: RangeSet<T>,
}

impl<T> ImmutableRangeSet<T>
where
	T: Ord + Clone,
{
	/// Makes a builder accumulating ranges with the coalescing
	/// [`RangeSet::add`] semantics.
	pub fn builder() -> ImmutableRangeSetBuilder<T> {
		ImmutableRangeSetBuilder {
			inner: RangeSet::new(),
		}
	}

	/// Returns a new set with the given range added, as
	/// [`RangeSet::add`] does.
	pub fn add(&self, range: Range<T>) -> ImmutableRangeSet<T> {
		let mut inner = self.inner.clone();
		inner.add(range);
		ImmutableRangeSet { inner }
	}

	/// Returns a new set with the given range removed, as
	/// [`RangeSet::remove`] does.
	pub fn remove(&self, range: &Range<T>) -> ImmutableRangeSet<T> {
		let mut inner = self.inner.clone();
		inner.remove(range);
		ImmutableRangeSet { inner }
	}

	/// See [`RangeSet::contains()`] for more details.
	pub fn contains(&self, point: &T) -> bool {
		self.inner.contains(point)
	}

	/// See [`RangeSet::range_containing()`] for more details.
	pub fn range_containing(&self, point: &T) -> Option<&Range<T>> {
		self.inner.range_containing(point)
	}

	/// See [`RangeSet::encloses()`] for more details.
	pub fn encloses(&self, range: &Range<T>) -> bool {
		self.inner.encloses(range)
	}

	/// See [`RangeSet::encloses_all()`] for more details.
	pub fn encloses_all(&self, other: &ImmutableRangeSet<T>) -> bool {
		self.inner.encloses_all(&other.inner)
	}

	/// See [`RangeSet::overlaps()`] for more details.
	pub fn overlaps(&self, range: &Range<T>) -> bool {
		self.inner.overlaps(range)
	}

	/// See [`RangeSet::span()`] for more details.
	pub fn span(&self) -> Option<Range<T>> {
		self.inner.span()
	}

	/// Returns the complement of this set as a new instance. See
	/// [`RangeSet::complement()`] for more details.
	pub fn complement(&self) -> ImmutableRangeSet<T> {
		ImmutableRangeSet {
			inner: self.inner.complement(),
		}
	}

	/// Returns the portion of this set within the given range as a new
	/// instance. See [`RangeSet::sub_range_set()`] for more details.
	pub fn sub_range_set(&self, range: &Range<T>) -> ImmutableRangeSet<T> {
		ImmutableRangeSet {
			inner: self.inner.sub_range_set(range),
		}
	}

	/// Returns a mutable copy of this set.
	pub fn to_range_set(&self) -> RangeSet<T> {
		self.inner.clone()
	}

	/// See [`RangeSet::first()`] for more details.
	pub fn first(&self) -> Option<&Range<T>> {
		self.inner.first()
	}

	/// See [`RangeSet::last()`] for more details.
	pub fn last(&self) -> Option<&Range<T>> {
		self.inner.last()
	}
}

impl<T> ImmutableRangeSet<T> {
	/// Makes a new, empty `ImmutableRangeSet`.
	pub fn new() -> Self {
		ImmutableRangeSet {
			inner: RangeSet::new(),
		}
	}

	/// See [`RangeSet::len()`] for more details.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// See [`RangeSet::is_empty()`] for more details.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// See [`RangeSet::iter()`] for more details.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Range<T>> {
		self.inner.iter()
	}
}

/// A single-owner accumulator producing an [`ImmutableRangeSet`].
///
/// The builder folds [`add`](ImmutableRangeSetBuilder::add) over its
/// input and hands the finished set out once through
/// [`build`](ImmutableRangeSetBuilder::build); it is not shared while
/// accumulating.
#[derive(Debug)]
pub struct ImmutableRangeSetBuilder<T> {
	inner: RangeSet<T>,
}

impl<T> ImmutableRangeSetBuilder<T>
where
	T: Ord + Clone,
{
	/// Adds a range, coalescing as [`RangeSet::add`] does.
	pub fn add(mut self, range: Range<T>) -> Self {
		self.inner.add(range);
		self
	}

	/// Finishes the accumulation.
	pub fn build(self) -> ImmutableRangeSet<T> {
		ImmutableRangeSet { inner: self.inner }
	}
}

// Trait Impls ==========================

impl<T> Default for ImmutableRangeSet<T> {
	fn default() -> Self {
		ImmutableRangeSet {
			inner: RangeSet::default(),
		}
	}
}

impl<T> From<RangeSet<T>> for ImmutableRangeSet<T> {
	fn from(set: RangeSet<T>) -> Self {
		ImmutableRangeSet { inner: set }
	}
}

impl<T> From<ImmutableRangeSet<T>> for RangeSet<T> {
	fn from(set: ImmutableRangeSet<T>) -> Self {
		set.inner
	}
}

impl<T> FromIterator<Range<T>> for ImmutableRangeSet<T>
where
	T: Ord + Clone,
{
	fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
		ImmutableRangeSet {
			inner: RangeSet::from_iter(iter),
		}
	}
}

impl<T> Hash for ImmutableRangeSet<T>
where
	T: Hash,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.inner.hash(state)
	}
}

#[cfg(feature = "serde")]
impl<T> Serialize for ImmutableRangeSet<T>
where
	T: Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.inner.serialize(serializer)
	}
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for ImmutableRangeSet<T>
where
	T: Ord + Clone + Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		RangeSet::deserialize(deserializer)
			.map(|inner| ImmutableRangeSet { inner })
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{ee, eu, ie, ii, iu, ue};

	#[test]
	fn builder_tests() {
		let set = ImmutableRangeSet::builder()
			.add(ie(1, 5))
			.add(ie(5, 9))
			.add(ii(20, 30))
			.build();
		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			[&ie(1, 9), &ii(20, 30)]
		);
	}

	#[test]
	fn mutators_leave_the_original_untouched() {
		let set = ImmutableRangeSet::from_iter([ii(1, 10)]);

		let added = set.add(ii(20, 30));
		let removed = set.remove(&ee(3, 5));

		assert_eq!(set.iter().collect::<Vec<_>>(), [&ii(1, 10)]);
		assert_eq!(
			added.iter().collect::<Vec<_>>(),
			[&ii(1, 10), &ii(20, 30)]
		);
		assert_eq!(
			removed.iter().collect::<Vec<_>>(),
			[&ii(1, 3), &ii(5, 10)]
		);
	}

	#[test]
	fn query_tests() {
		let set = ImmutableRangeSet::from_iter([ii(1, 10), iu(20)]);
		assert_eq!(set.contains(&5), true);
		assert_eq!(set.contains(&15), false);
		assert_eq!(set.range_containing(&25), Some(&iu(20)));
		assert_eq!(set.encloses(&ii(2, 9)), true);
		assert_eq!(set.overlaps(&ii(15, 25)), true);
		assert_eq!(set.span(), Some(iu(1)));
		assert_eq!(set.first(), Some(&ii(1, 10)));
		assert_eq!(set.last(), Some(&iu(20)));
		assert_eq!(
			set.encloses_all(&ImmutableRangeSet::from_iter([ii(2, 9)])),
			true
		);
	}

	#[test]
	fn complement_and_sub_tests() {
		let set = ImmutableRangeSet::from_iter([ii(1, 10)]);
		assert_eq!(
			set.complement().iter().collect::<Vec<_>>(),
			[&ue(1), &eu(10)]
		);
		assert_eq!(
			set.sub_range_set(&ii(5, 20)).iter().collect::<Vec<_>>(),
			[&ii(5, 10)]
		);
	}

	#[test]
	fn conversion_tests() {
		let mutable = RangeSet::from_iter([ii(1, 10)]);
		let immutable = ImmutableRangeSet::from(mutable.clone());
		assert_eq!(immutable.to_range_set(), mutable);
		assert_eq!(RangeSet::from(immutable), mutable);
	}
}
