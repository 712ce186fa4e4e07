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

//! The module containing [`ImmutableRangeMap`], the persistent
//! front-end over [`RangeMap`], and its builder.

use std::hash::{Hash, Hasher};

use crate::range::Range;
use crate::range_map::RangeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable ordered map of pairwise-disjoint [`Range`]s to values.
///
/// Every mutating operation clones the backing tree and returns a new
/// instance, leaving the original untouched, so one instance can be
/// shared freely across threads without synchronization. The
/// algorithms are the same as [`RangeMap`]'s; only the ownership
/// regime differs.
///
/// # Examples
/// ```
/// use range_algebra::test_ranges::{ee, ie, ii};
/// use range_algebra::ImmutableRangeMap;
///
/// let map = ImmutableRangeMap::builder()
/// 	.put(ie(1, 5), "a")
/// 	.put(ie(5, 9), "b")
/// 	.build();
///
/// let changed = map.put(ii(3, 6), "c");
///
/// // the original is untouched
/// assert_eq!(map.get(&4), Some(&"a"));
/// assert_eq!(
/// 	changed.iter().collect::<Vec<_>>(),
/// 	[(&ie(1, 3), &"a"), (&ii(3, 6), &"c"), (&ee(6, 9), &"b")]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmutableRangeMap<T, V> {
	inner: RangeMap<T, V>,
}

impl<T, V> ImmutableRangeMap<T, V>
where
	T: Ord + Clone,
	V: Clone,
{
	/// Makes a builder accumulating entries with the splitting
	/// [`RangeMap::put`] semantics.
	pub fn builder() -> ImmutableRangeMapBuilder<T, V> {
		ImmutableRangeMapBuilder {
			inner: RangeMap::new(),
		}
	}

	/// Returns a new map with the given entry put in, as
	/// [`RangeMap::put`] does.
	pub fn put(&self, range: Range<T>, value: V) -> ImmutableRangeMap<T, V> {
		let mut inner = self.inner.clone();
		inner.put(range, value);
		ImmutableRangeMap { inner }
	}

	/// Returns a new map with every entry of `other` put in, as
	/// [`RangeMap::put_all`] does.
	pub fn put_all(
		&self,
		other: &ImmutableRangeMap<T, V>,
	) -> ImmutableRangeMap<T, V> {
		let mut inner = self.inner.clone();
		inner.put_all(other.inner.clone());
		ImmutableRangeMap { inner }
	}

	/// Returns a new map with the given range removed, as
	/// [`RangeMap::remove`] does.
	pub fn remove(&self, range: &Range<T>) -> ImmutableRangeMap<T, V> {
		let mut inner = self.inner.clone();
		inner.remove(range);
		ImmutableRangeMap { inner }
	}

	/// Returns the portion of this map within the given range as a new
	/// instance. See [`RangeMap::sub_range_map()`] for more details.
	pub fn sub_range_map(&self, range: &Range<T>) -> ImmutableRangeMap<T, V> {
		ImmutableRangeMap {
			inner: self.inner.sub_range_map(range),
		}
	}

	/// Returns a mutable copy of this map.
	pub fn to_range_map(&self) -> RangeMap<T, V> {
		self.inner.clone()
	}
}

impl<T, V> ImmutableRangeMap<T, V>
where
	T: Ord + Clone,
{
	/// See [`RangeMap::get()`] for more details.
	pub fn get(&self, point: &T) -> Option<&V> {
		self.inner.get(point)
	}

	/// See [`RangeMap::get_entry()`] for more details.
	pub fn get_entry(&self, point: &T) -> Option<(&Range<T>, &V)> {
		self.inner.get_entry(point)
	}

	/// See [`RangeMap::contains()`] for more details.
	pub fn contains(&self, point: &T) -> bool {
		self.inner.contains(point)
	}

	/// See [`RangeMap::overlaps()`] for more details.
	pub fn overlaps(&self, range: &Range<T>) -> bool {
		self.inner.overlaps(range)
	}

	/// See [`RangeMap::overlapping()`] for more details.
	pub fn overlapping(
		&self,
		range: &Range<T>,
	) -> impl DoubleEndedIterator<Item = (&Range<T>, &V)> {
		self.inner.overlapping(range)
	}

	/// See [`RangeMap::span()`] for more details.
	pub fn span(&self) -> Option<Range<T>> {
		self.inner.span()
	}

	/// See [`RangeMap::first_entry()`] for more details.
	pub fn first_entry(&self) -> Option<(&Range<T>, &V)> {
		self.inner.first_entry()
	}

	/// See [`RangeMap::last_entry()`] for more details.
	pub fn last_entry(&self) -> Option<(&Range<T>, &V)> {
		self.inner.last_entry()
	}
}

impl<T, V> ImmutableRangeMap<T, V> {
	/// Makes a new, empty `ImmutableRangeMap`.
	pub fn new() -> Self {
		ImmutableRangeMap {
			inner: RangeMap::new(),
		}
	}

	/// See [`RangeMap::len()`] for more details.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// See [`RangeMap::is_empty()`] for more details.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// See [`RangeMap::iter()`] for more details.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Range<T>, &V)> {
		self.inner.iter()
	}
}

/// A single-owner accumulator producing an [`ImmutableRangeMap`].
///
/// The builder folds [`put`](ImmutableRangeMapBuilder::put) over its
/// input and hands the finished map out once through
/// [`build`](ImmutableRangeMapBuilder::build); it is not shared while
/// accumulating.
#[derive(Debug)]
pub struct ImmutableRangeMapBuilder<T, V> {
	inner: RangeMap<T, V>,
}

impl<T, V> ImmutableRangeMapBuilder<T, V>
where
	T: Ord + Clone,
	V: Clone,
{
	/// Puts an entry in, splitting as [`RangeMap::put`] does.
	pub fn put(mut self, range: Range<T>, value: V) -> Self {
		self.inner.put(range, value);
		self
	}

	/// Finishes the accumulation.
	pub fn build(self) -> ImmutableRangeMap<T, V> {
		ImmutableRangeMap { inner: self.inner }
	}
}

// Trait Impls ==========================

impl<T, V> Default for ImmutableRangeMap<T, V> {
	fn default() -> Self {
		ImmutableRangeMap {
			inner: RangeMap::default(),
		}
	}
}

impl<T, V> From<RangeMap<T, V>> for ImmutableRangeMap<T, V> {
	fn from(map: RangeMap<T, V>) -> Self {
		ImmutableRangeMap { inner: map }
	}
}

impl<T, V> From<ImmutableRangeMap<T, V>> for RangeMap<T, V> {
	fn from(map: ImmutableRangeMap<T, V>) -> Self {
		map.inner
	}
}

impl<T, V> FromIterator<(Range<T>, V)> for ImmutableRangeMap<T, V>
where
	T: Ord + Clone,
	V: Clone,
{
	fn from_iter<I: IntoIterator<Item = (Range<T>, V)>>(iter: I) -> Self {
		ImmutableRangeMap {
			inner: RangeMap::from_iter(iter),
		}
	}
}

impl<T, V> Hash for ImmutableRangeMap<T, V>
where
	T: Hash,
	V: Hash,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.inner.hash(state)
	}
}

#[cfg(feature = "serde")]
impl<T, V> Serialize for ImmutableRangeMap<T, V>
where
	T: Serialize,
	V: Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.inner.serialize(serializer)
	}
}

#[cfg(feature = "serde")]
impl<'de, T, V> Deserialize<'de> for ImmutableRangeMap<T, V>
where
	T: Ord + Clone + Deserialize<'de>,
	V: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		RangeMap::deserialize(deserializer)
			.map(|inner| ImmutableRangeMap { inner })
	}
}
