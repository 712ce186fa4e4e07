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

//! The module containing [`RangeMap`] and its live view
//! [`SubRangeMap`].

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::empty;
use std::ops::Bound as SearchBound;

use itertools::Either;
use smallvec::SmallVec;

use crate::cut::Cut;
use crate::range::Range;
use crate::utils::{clip, cut_range};

#[cfg(feature = "serde")]
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::de::{SeqAccess, Visitor};
#[cfg(feature = "serde")]
use serde::ser::SerializeSeq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered map of pairwise-disjoint [`Range`]s to values, based on
/// [`BTreeMap`].
///
/// Entries are kept sorted by their lower bounds and never overlap.
/// [`RangeMap::put`] overwrites only the intersecting portions of
/// existing entries and never merges entries, even when two adjacent
/// entries carry equal values.
///
/// # Examples
/// ```
/// use range_algebra::test_ranges::{ee, ii};
/// use range_algebra::RangeMap;
///
/// let mut map = RangeMap::new();
///
/// map.put(ee(3, 7), "1");
/// map.put(ii(9, 10), "2");
///
/// assert_eq!(map.get(&5), Some(&"1"));
/// assert_eq!(map.get(&8), None);
///
/// // Iterate over the entries in the map
/// for (range, value) in map.iter() {
/// 	println!("{range:?}, {value:?}");
/// }
/// ```
///
/// [`BTreeMap`]: std::collections::BTreeMap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMap<T, V> {
	inner: BTreeMap<Cut<T>, (Range<T>, V)>,
}

/// An error type to represent a write through a sub-view whose target
/// range is not enclosed by the view's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfViewError;

impl fmt::Display for OutOfViewError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("the target range is not enclosed by the view's range")
	}
}
impl std::error::Error for OutOfViewError {}

impl<T, V> RangeMap<T, V>
where
	T: Ord + Clone,
{
	/// Returns an iterator over every entry in the map that overlaps
	/// the given range, in ascending order.
	///
	/// Entries that only touch the range share no point with it and
	/// are not returned.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeMap;
	///
	/// let map = RangeMap::from_iter([
	/// 	(ie(1, 4), false),
	/// 	(ie(4, 8), true),
	/// 	(ie(8, 100), false),
	/// ]);
	///
	/// let mut overlapping = map.overlapping(&ie(2, 8));
	///
	/// assert_eq!(
	/// 	overlapping.collect::<Vec<_>>(),
	/// 	[(&ie(1, 4), &false), (&ie(4, 8), &true)]
	/// );
	/// ```
	pub fn overlapping(
		&self,
		range: &Range<T>,
	) -> impl DoubleEndedIterator<Item = (&Range<T>, &V)> {
		if range.is_empty() {
			return Either::Left(empty());
		}
		let lower = range.lower_cut_owned();
		let upper = range.upper_cut_owned();

		// the first overlapping entry may start at or before the
		// search range, every other one starts strictly inside it
		let first = self
			.inner
			.range(..=lower.clone())
			.next_back()
			.filter(|(_, (stored, _))| stored.upper_cut() > range.lower_cut())
			.map(|(_, (stored, value))| (stored, value));
		let rest = self
			.inner
			.range((SearchBound::Excluded(lower), SearchBound::Excluded(upper)))
			.map(|(_, (stored, value))| (stored, value));

		Either::Right(first.into_iter().chain(rest))
	}

	/// Returns `true` if the given range overlaps any entry of the
	/// map.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ie, ii};
	/// use range_algebra::RangeMap;
	///
	/// let mut map = RangeMap::new();
	///
	/// map.put(ie(5, 10), false);
	///
	/// assert_eq!(map.overlaps(&ii(1, 3)), false);
	/// assert_eq!(map.overlaps(&ee(3, 5)), false);
	///
	/// assert_eq!(map.overlaps(&ii(4, 5)), true);
	/// assert_eq!(map.overlaps(&ie(4, 6)), true);
	/// ```
	pub fn overlaps(&self, range: &Range<T>) -> bool {
		self.overlapping(range).next().is_some()
	}

	/// Returns the entry whose range contains the given point, if any.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeMap;
	///
	/// let map = RangeMap::from_iter([
	/// 	(ie(1, 4), false),
	/// 	(ie(4, 8), true),
	/// ]);
	///
	/// assert_eq!(map.get_entry(&3), Some((&ie(1, 4), &false)));
	/// assert_eq!(map.get_entry(&4), Some((&ie(4, 8), &true)));
	/// assert_eq!(map.get_entry(&8), None);
	/// ```
	pub fn get_entry(&self, point: &T) -> Option<(&Range<T>, &V)> {
		let (stored, value) = self
			.inner
			.range(..=Cut::Below(point.clone()))
			.next_back()
			.map(|(_, entry)| entry)?;
		stored.contains(point).then_some((stored, value))
	}

	/// Returns a reference to the value whose range contains the given
	/// point, if any.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeMap;
	///
	/// let map = RangeMap::from_iter([(ie(1, 4), false)]);
	///
	/// assert_eq!(map.get(&3), Some(&false));
	/// assert_eq!(map.get(&4), None);
	/// ```
	pub fn get(&self, point: &T) -> Option<&V> {
		self.get_entry(point).map(|(_, value)| value)
	}

	/// Returns a mutable reference to the value whose range contains
	/// the given point, if any.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeMap;
	///
	/// let mut map = RangeMap::from_iter([(ie(1, 4), false)]);
	///
	/// if let Some(value) = map.get_mut(&2) {
	/// 	*value = true;
	/// }
	///
	/// assert_eq!(map.get(&1), Some(&true));
	/// ```
	pub fn get_mut(&mut self, point: &T) -> Option<&mut V> {
		let key = self.get_entry(point)?.0.lower_cut_owned();
		self.inner.get_mut(&key).map(|(_, value)| value)
	}

	/// Returns `true` if some entry's range contains the given point.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeMap;
	///
	/// let map = RangeMap::from_iter([(ie(1, 4), false)]);
	///
	/// assert_eq!(map.contains(&3), true);
	/// assert_eq!(map.contains(&4), false);
	/// ```
	pub fn contains(&self, point: &T) -> bool {
		self.get_entry(point).is_some()
	}

	/// Overwrites the portion of the map intersecting the given range
	/// with a single new entry.
	///
	/// Intersecting entries keep their non-overlapping fragments with
	/// their original values; the intersecting portions are discarded.
	/// Entries are never merged, even when adjacent entries hold equal
	/// values. Putting an empty range is a no-op.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeMap;
	///
	/// let mut map = RangeMap::from_iter([(ie(2, 8), false)]);
	///
	/// map.put(ie(4, 6), true);
	///
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(&ie(2, 4), &false), (&ie(4, 6), &true), (&ie(6, 8), &false)]
	/// );
	/// ```
	pub fn put(&mut self, range: Range<T>, value: V)
	where
		V: Clone,
	{
		if range.is_empty() {
			return;
		}
		self.cut_out(&range);
		self.insert_raw(range, value);
	}

	/// Moves every entry of `other` into `self` as if by calling
	/// [`RangeMap::put`] for each. The entries of `other` are disjoint,
	/// so the order they are put in has no effect on the end state.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ie, ii};
	/// use range_algebra::RangeMap;
	///
	/// let mut map = RangeMap::from_iter([(ii(1, 5), "a")]);
	///
	/// map.put_all(RangeMap::from_iter([(ie(3, 4), "b"), (ie(7, 9), "c")]));
	///
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[
	/// 		(&ie(1, 3), &"a"),
	/// 		(&ie(3, 4), &"b"),
	/// 		(&ii(4, 5), &"a"),
	/// 		(&ie(7, 9), &"c")
	/// 	]
	/// );
	/// ```
	pub fn put_all(&mut self, other: RangeMap<T, V>)
	where
		V: Clone,
	{
		for (range, value) in other {
			self.put(range, value);
		}
	}

	/// Removes the given range from the map.
	///
	/// Intersecting entries are trimmed or deleted; their fragments
	/// outside the removed range survive with their original values,
	/// so an entry straddling the range splits in two. Removing an
	/// empty range is a no-op.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ii};
	/// use range_algebra::RangeMap;
	///
	/// let mut map = RangeMap::from_iter([(ii(1, 10), false)]);
	///
	/// map.remove(&ee(3, 5));
	///
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(&ii(1, 3), &false), (&ii(5, 10), &false)]
	/// );
	/// ```
	pub fn remove(&mut self, range: &Range<T>)
	where
		V: Clone,
	{
		if range.is_empty() {
			return;
		}
		self.cut_out(range);
	}

	/// Returns the minimal range enclosing every entry of the map, or
	/// `None` when the map is empty.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ie, ii};
	/// use range_algebra::RangeMap;
	///
	/// let map =
	/// 	RangeMap::from_iter([(ie(1, 4), false), (ii(8, 100), true)]);
	///
	/// assert_eq!(map.span(), Some(ii(1, 100)));
	/// assert_eq!(RangeMap::<i32, bool>::new().span(), None);
	/// ```
	pub fn span(&self) -> Option<Range<T>> {
		let (_, (first, _)) = self.inner.first_key_value()?;
		let (_, (last, _)) = self.inner.last_key_value()?;
		Some(first.span(last))
	}

	/// Returns a new map holding the portion of this map within the
	/// given range: every entry overlapping it, clipped to it, with its
	/// value.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ie, ii};
	/// use range_algebra::RangeMap;
	///
	/// let map = RangeMap::from_iter([
	/// 	(ee(3, 7), "1"),
	/// 	(ii(9, 10), "2"),
	/// 	(ii(12, 16), "3"),
	/// ]);
	///
	/// assert_eq!(
	/// 	map.sub_range_map(&ii(5, 11)).iter().collect::<Vec<_>>(),
	/// 	[(&ie(5, 7), &"1"), (&ii(9, 10), &"2")]
	/// );
	/// ```
	pub fn sub_range_map(&self, range: &Range<T>) -> RangeMap<T, V>
	where
		V: Clone,
	{
		let mut output = RangeMap::new();
		for (stored, value) in self.overlapping(range) {
			output.insert_raw(clip(stored, range), value.clone());
		}
		output
	}

	/// Returns a live view of the portion of this map within the given
	/// range. See [`SubRangeMap`] for the view's behavior.
	pub fn sub_range_map_mut(
		&mut self,
		range: Range<T>,
	) -> SubRangeMap<'_, T, V> {
		SubRangeMap {
			map: self,
			view: range,
		}
	}

	/// Returns the first entry in the map, if any.
	pub fn first_entry(&self) -> Option<(&Range<T>, &V)> {
		self.inner
			.first_key_value()
			.map(|(_, (range, value))| (range, value))
	}

	/// Returns the last entry in the map, if any.
	pub fn last_entry(&self) -> Option<(&Range<T>, &V)> {
		self.inner
			.last_key_value()
			.map(|(_, (range, value))| (range, value))
	}

	/// Removes every entry overlapping the given range, reinserting
	/// the fragments that fall outside of it.
	fn cut_out(&mut self, range: &Range<T>)
	where
		V: Clone,
	{
		let affected: SmallVec<[Cut<T>; 4]> = self
			.overlapping(range)
			.map(|(stored, _)| stored.lower_cut_owned())
			.collect();

		for key in affected {
			let (stored, value) = self.inner.remove(&key).unwrap();
			let fragments = cut_range(&stored, range);
			if let Some(before) = fragments.before_cut {
				self.insert_raw(before, value.clone());
			}
			if let Some(after) = fragments.after_cut {
				self.insert_raw(after, value.clone());
			}
		}
	}

	/// Inserts an entry known not to overlap anything already stored.
	pub(crate) fn insert_raw(&mut self, range: Range<T>, value: V) {
		let key = range.lower_cut_owned();
		self.inner.insert(key, (range, value));
	}

	/// Inserts a range absorbing everything connected to it, storing
	/// the span of the whole group under the given value. Only sound
	/// when stored entries are pairwise disconnected, which is how
	/// [`RangeSet`](crate::RangeSet) maintains its entries.
	pub(crate) fn insert_coalescing(&mut self, range: Range<T>, value: V) {
		if range.is_empty() {
			return;
		}
		let mut merged = range;
		let mut absorbed: SmallVec<[Cut<T>; 4]> = SmallVec::new();
		for (key, (stored, _)) in
			self.inner.range(..=merged.upper_cut_owned()).rev()
		{
			if stored.upper_cut() < merged.lower_cut() {
				break;
			}
			merged = merged.span(stored);
			absorbed.push(key.clone());
		}
		for key in &absorbed {
			self.inner.remove(key);
		}
		self.insert_raw(merged, value);
	}

	/// The stored entry which could enclose the given range, if it does
	/// enclose it.
	pub(crate) fn enclosing_entry(&self, range: &Range<T>) -> Option<&Range<T>> {
		self.inner
			.range(..=range.lower_cut_owned())
			.next_back()
			.map(|(_, (stored, _))| stored)
			.filter(|stored| stored.encloses(range))
	}
}

impl<T, V> RangeMap<T, V> {
	/// Makes a new, empty `RangeMap`.
	///
	/// # Examples
	/// ```
	/// use range_algebra::RangeMap;
	///
	/// let map: RangeMap<i8, bool> = RangeMap::new();
	/// ```
	pub fn new() -> Self {
		RangeMap {
			inner: BTreeMap::new(),
		}
	}

	/// Returns the number of entries in the map.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeMap;
	///
	/// let mut map = RangeMap::new();
	///
	/// assert_eq!(map.len(), 0);
	/// map.put(ie(0, 1), false);
	/// assert_eq!(map.len(), 1);
	/// ```
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the map contains no entries.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Removes every entry from the map.
	pub fn clear(&mut self) {
		self.inner.clear()
	}

	/// Returns an iterator over every entry in the map in ascending
	/// order of the ranges' lower bounds.
	///
	/// The yielded ranges are never empty and never overlap, and
	/// adjacent equal-valued entries stay separate.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeMap;
	///
	/// let map = RangeMap::from_iter([
	/// 	(ie(1, 4), false),
	/// 	(ie(4, 8), true),
	/// ]);
	///
	/// let mut iter = map.iter();
	///
	/// assert_eq!(iter.next(), Some((&ie(1, 4), &false)));
	/// assert_eq!(iter.next(), Some((&ie(4, 8), &true)));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Range<T>, &V)> {
		self.inner.values().map(|(range, value)| (range, value))
	}

	/// Returns an iterator over every entry in the map with a mutable
	/// reference to its value, in ascending order.
	pub fn iter_mut(
		&mut self,
	) -> impl DoubleEndedIterator<Item = (&Range<T>, &mut V)> {
		self.inner
			.values_mut()
			.map(|(range, value)| (&*range, value))
	}
}

/// A live, mutable view of the portion of a [`RangeMap`] within a
/// fixed range.
///
/// Every read consults the parent map at query time, so mutations made
/// through the view are immediately visible on the parent and
/// mutations of the parent between queries are visible through the
/// view. Writes whose target range is not entirely enclosed by the
/// view's range, a straddling write included, fail with
/// [`OutOfViewError`] and leave the parent untouched. The view
/// mutably borrows its parent, so it cannot outlive it.
///
/// # Examples
/// ```
/// use range_algebra::test_ranges::{ee, ei, ie, ii};
/// use range_algebra::RangeMap;
///
/// let mut map = RangeMap::new();
/// map.put(ee(3, 7), "1");
/// map.put(ii(9, 10), "2");
/// map.put(ii(12, 16), "3");
///
/// let mut sub = map.sub_range_map_mut(ii(5, 11));
///
/// assert_eq!(
/// 	sub.iter().collect::<Vec<_>>(),
/// 	[(ie(5, 7), &"1"), (ii(9, 10), &"2")]
/// );
///
/// sub.put(ii(7, 9), "4").unwrap();
/// assert!(sub.put(ii(10, 20), "5").is_err());
///
/// assert_eq!(
/// 	map.iter().collect::<Vec<_>>(),
/// 	[
/// 		(&ee(3, 7), &"1"),
/// 		(&ii(7, 9), &"4"),
/// 		(&ei(9, 10), &"2"),
/// 		(&ii(12, 16), &"3")
/// 	]
/// );
/// ```
pub struct SubRangeMap<'a, T, V> {
	map: &'a mut RangeMap<T, V>,
	view: Range<T>,
}

impl<'a, T, V> SubRangeMap<'a, T, V>
where
	T: Ord + Clone,
{
	/// Returns the range this view is restricted to.
	pub fn view(&self) -> &Range<T> {
		&self.view
	}

	/// Returns a reference to the value whose range contains the given
	/// point, if the point lies within the view.
	pub fn get(&self, point: &T) -> Option<&V> {
		if self.view.contains(point) {
			self.map.get(point)
		} else {
			None
		}
	}

	/// Returns the entry whose range contains the given point, clipped
	/// to the view, if the point lies within the view.
	pub fn get_entry(&self, point: &T) -> Option<(Range<T>, &V)> {
		if !self.view.contains(point) {
			return None;
		}
		self.map
			.get_entry(point)
			.map(|(stored, value)| (clip(stored, &self.view), value))
	}

	/// Returns an iterator over the parent's entries overlapping the
	/// view, clipped to it, in ascending order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Range<T>, &V)> {
		self.map
			.overlapping(&self.view)
			.map(|(stored, value)| (clip(stored, &self.view), value))
	}

	/// Returns the minimal range enclosing every entry visible through
	/// the view, or `None` when the view sees nothing.
	pub fn span(&self) -> Option<Range<T>> {
		let mut entries = self.map.overlapping(&self.view);
		let first = clip(entries.next()?.0, &self.view);
		match entries.next_back() {
			Some((last, _)) => Some(first.span(&clip(last, &self.view))),
			None => Some(first),
		}
	}

	/// Returns `true` if no entry of the parent overlaps the view.
	pub fn is_empty(&self) -> bool {
		self.map.overlapping(&self.view).next().is_none()
	}

	/// Writes an entry through to the parent map as [`RangeMap::put`]
	/// does, or fails with [`OutOfViewError`] when the given range is
	/// not enclosed by the view's range.
	pub fn put(
		&mut self,
		range: Range<T>,
		value: V,
	) -> Result<(), OutOfViewError>
	where
		V: Clone,
	{
		if !self.view.encloses(&range) {
			return Err(OutOfViewError);
		}
		self.map.put(range, value);
		Ok(())
	}

	/// Removes a range from the parent map as [`RangeMap::remove`]
	/// does, or fails with [`OutOfViewError`] when the given range is
	/// not enclosed by the view's range.
	pub fn remove(&mut self, range: &Range<T>) -> Result<(), OutOfViewError>
	where
		V: Clone,
	{
		if !self.view.encloses(range) {
			return Err(OutOfViewError);
		}
		self.map.remove(range);
		Ok(())
	}
}

// Trait Impls ==========================

impl<T, V> Default for RangeMap<T, V> {
	fn default() -> Self {
		RangeMap {
			inner: BTreeMap::new(),
		}
	}
}

impl<T, V> IntoIterator for RangeMap<T, V> {
	type Item = (Range<T>, V);
	type IntoIter = IntoIter<T, V>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.inner.into_iter(),
		};
	}
}

/// An owning iterator over the entries of a [`RangeMap`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`RangeMap`] (provided by the [`IntoIterator`] trait). See its
/// documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T, V> {
	inner: btree_map::IntoIter<Cut<T>, (Range<T>, V)>,
}
impl<T, V> Iterator for IntoIter<T, V> {
	type Item = (Range<T>, V);
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(_, entry)| entry)
	}
}

impl<T, V> FromIterator<(Range<T>, V)> for RangeMap<T, V>
where
	T: Ord + Clone,
	V: Clone,
{
	fn from_iter<I: IntoIterator<Item = (Range<T>, V)>>(iter: I) -> Self {
		let mut map = RangeMap::new();
		for (range, value) in iter {
			map.put(range, value);
		}
		return map;
	}
}

impl<T, V> Extend<(Range<T>, V)> for RangeMap<T, V>
where
	T: Ord + Clone,
	V: Clone,
{
	fn extend<I: IntoIterator<Item = (Range<T>, V)>>(&mut self, iter: I) {
		for (range, value) in iter {
			self.put(range, value);
		}
	}
}

impl<T, V> Hash for RangeMap<T, V>
where
	T: Hash,
	V: Hash,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.len().hash(state);
		for (range, value) in self.iter() {
			range.hash(state);
			value.hash(state);
		}
	}
}

#[cfg(feature = "serde")]
impl<T, V> Serialize for RangeMap<T, V>
where
	T: Serialize,
	V: Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.len()))?;
		for (range, value) in self.iter() {
			seq.serialize_element(&(range, value))?;
		}
		seq.end()
	}
}

#[cfg(feature = "serde")]
impl<'de, T, V> Deserialize<'de> for RangeMap<T, V>
where
	T: Ord + Clone + Deserialize<'de>,
	V: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_seq(RangeMapVisitor {
			t: PhantomData,
			v: PhantomData,
		})
	}
}

#[cfg(feature = "serde")]
struct RangeMapVisitor<T, V> {
	t: PhantomData<T>,
	v: PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, T, V> Visitor<'de> for RangeMapVisitor<T, V>
where
	T: Ord + Clone + Deserialize<'de>,
	V: Deserialize<'de>,
{
	type Value = RangeMap<T, V>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a RangeMap")
	}

	fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut map = RangeMap::new();
		while let Some((range, value)) =
			access.next_element::<(Range<T>, V)>()?
		{
			if range.is_empty() || map.overlaps(&range) {
				return Err(serde::de::Error::custom(
					"empty or overlapping range",
				));
			}
			map.insert_raw(range, value);
		}
		Ok(map)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{ee, ei, eu, ie, ii, iu, ue, ui, uu};

	fn basic() -> RangeMap<i32, bool> {
		RangeMap::from_iter([
			(ui(4), false),
			(ee(5, 7), true),
			(ii(7, 7), false),
			(ie(14, 16), true),
		])
	}

	#[test]
	fn put_non_overlapping_tests() {
		let mut map = RangeMap::new();
		map.put(ie(1, 4), false);
		map.put(ie(8, 100), false);
		map.put(ie(4, 8), true);
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ie(1, 4), &false), (&ie(4, 8), &true), (&ie(8, 100), &false)]
		);
	}

	#[test]
	fn put_splits_enclosing_entry() {
		let mut map = RangeMap::from_iter([(ii(1, 10), "a")]);
		map.put(ii(4, 6), "b");
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ie(1, 4), &"a"), (&ii(4, 6), &"b"), (&ei(6, 10), &"a")]
		);
	}

	#[test]
	fn put_trims_partial_overlaps() {
		let mut map =
			RangeMap::from_iter([(ie(1, 5), "a"), (ie(5, 9), "b")]);
		map.put(ii(3, 6), "c");
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ie(1, 3), &"a"), (&ii(3, 6), &"c"), (&ee(6, 9), &"b")]
		);
	}

	#[test]
	fn put_swallows_enclosed_entries() {
		let mut map = RangeMap::from_iter([
			(ii(2, 3), "a"),
			(ii(5, 6), "b"),
			(ii(8, 9), "c"),
		]);
		map.put(ii(1, 10), "d");
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ii(1, 10), &"d")]
		);
	}

	#[test]
	fn put_does_not_merge_adjacent_equal_values() {
		let mut map = RangeMap::new();
		map.put(ie(1, 5), "x");
		map.put(ie(5, 9), "x");
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ie(1, 5), &"x"), (&ie(5, 9), &"x")]
		);
	}

	#[test]
	fn put_empty_range_is_a_no_op() {
		let mut map = basic();
		map.put(ee(0, 0), true);
		assert_eq!(map, basic());
	}

	#[test]
	fn remove_tests() {
		//removing the middle splits an entry in two
		let mut map = RangeMap::from_iter([(ii(1, 10), "a")]);
		map.remove(&ee(3, 5));
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ii(1, 3), &"a"), (&ii(5, 10), &"a")]
		);

		//removing across several entries trims the outer two
		let mut map = RangeMap::from_iter([
			(ie(1, 4), "a"),
			(ie(4, 8), "b"),
			(ie(8, 100), "c"),
		]);
		map.remove(&ie(2, 40));
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ie(1, 2), &"a"), (&ie(40, 100), &"c")]
		);

		//removing an empty range changes nothing
		let mut map = basic();
		map.remove(&ee(6, 6));
		assert_eq!(map, basic());

		//removing everything leaves the map empty
		let mut map = basic();
		map.remove(&uu());
		assert_eq!(map.is_empty(), true);
	}

	#[test]
	fn get_tests() {
		let map = basic();
		assert_eq!(map.get(&-400), Some(&false));
		assert_eq!(map.get(&4), Some(&false));
		assert_eq!(map.get(&5), None);
		assert_eq!(map.get(&6), Some(&true));
		assert_eq!(map.get(&7), Some(&false));
		assert_eq!(map.get(&8), None);
		assert_eq!(map.get(&14), Some(&true));
		assert_eq!(map.get(&16), None);
		assert_eq!(map.get_entry(&6), Some((&ee(5, 7), &true)));
		assert_eq!(map.contains(&7), true);
		assert_eq!(map.contains(&8), false);
	}

	#[test]
	fn overlapping_tests() {
		let map = basic();
		assert_eq!(
			map.overlapping(&ii(5, 14)).collect::<Vec<_>>(),
			[(&ee(5, 7), &true), (&ii(7, 7), &false), (&ie(14, 16), &true)]
		);
		//touching entries are not overlapping
		assert_eq!(
			map.overlapping(&ii(4, 5)).collect::<Vec<_>>(),
			[(&ui(4), &false)]
		);
		assert_eq!(map.overlapping(&ee(0, 0)).count(), 0);
		assert_eq!(map.overlaps(&eu(16)), false);
		assert_eq!(map.overlaps(&iu(15)), true);
	}

	#[test]
	fn span_tests() {
		assert_eq!(basic().span(), Some(ue(16)));
		assert_eq!(RangeMap::<i32, ()>::new().span(), None);
		assert_eq!(
			RangeMap::from_iter([(ii(1, 3), ())]).span(),
			Some(ii(1, 3))
		);
	}

	#[test]
	fn put_all_tests() {
		let mut map = RangeMap::from_iter([(ii(1, 5), "a")]);
		map.put_all(RangeMap::from_iter([(ie(3, 4), "b"), (ie(7, 9), "c")]));
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[
				(&ie(1, 3), &"a"),
				(&ie(3, 4), &"b"),
				(&ii(4, 5), &"a"),
				(&ie(7, 9), &"c")
			]
		);
	}

	#[test]
	fn sub_range_map_tests() {
		let map = RangeMap::from_iter([
			(ee(3, 7), "1"),
			(ii(9, 10), "2"),
			(ii(12, 16), "3"),
		]);
		let sub = map.sub_range_map(&ii(5, 11));
		assert_eq!(
			sub.iter().collect::<Vec<_>>(),
			[(&ie(5, 7), &"1"), (&ii(9, 10), &"2")]
		);
		//the original map is untouched by queries on the copy
		assert_eq!(map.len(), 3);
	}

	#[test]
	fn sub_range_map_mut_writes_through() {
		let mut map = RangeMap::from_iter([
			(ee(3, 7), "1"),
			(ii(9, 10), "2"),
			(ii(12, 16), "3"),
		]);

		let mut sub = map.sub_range_map_mut(ii(5, 11));
		assert_eq!(sub.view(), &ii(5, 11));
		assert_eq!(
			sub.iter().collect::<Vec<_>>(),
			[(ie(5, 7), &"1"), (ii(9, 10), &"2")]
		);
		assert_eq!(sub.span(), Some(ii(5, 10)));
		assert_eq!(sub.get(&6), Some(&"1"));
		assert_eq!(sub.get(&4), None);
		assert_eq!(sub.get(&13), None);
		assert_eq!(sub.get_entry(&6), Some((ie(5, 7), &"1")));

		sub.put(ii(7, 9), "4").unwrap();
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[
				(&ee(3, 7), &"1"),
				(&ii(7, 9), &"4"),
				(&ei(9, 10), &"2"),
				(&ii(12, 16), &"3")
			]
		);
	}

	#[test]
	fn sub_range_map_mut_rejects_escaping_writes() {
		let mut map = RangeMap::from_iter([(ii(9, 10), "2")]);
		let mut sub = map.sub_range_map_mut(ii(5, 11));

		//fully outside
		assert_eq!(sub.put(ii(20, 30), "x"), Err(OutOfViewError));
		//straddling the view boundary also fails fast
		assert_eq!(sub.put(ii(10, 20), "x"), Err(OutOfViewError));
		assert_eq!(sub.remove(&ii(10, 20)), Err(OutOfViewError));

		//the parent is untouched by the failed writes
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ii(9, 10), &"2")]
		);
	}

	#[test]
	fn sub_range_map_mut_reflects_later_parent_state() {
		let mut map = RangeMap::from_iter([(ii(1, 20), "a")]);
		let mut sub = map.sub_range_map_mut(ii(5, 11));
		sub.remove(&ii(6, 7)).unwrap();
		//the removal through the view is visible on the next query
		assert_eq!(
			sub.iter().collect::<Vec<_>>(),
			[(ie(5, 6), &"a"), (ei(7, 11), &"a")]
		);
		assert_eq!(sub.is_empty(), false);
	}

	#[test]
	fn iter_mut_tests() {
		let mut map =
			RangeMap::from_iter([(ie(1, 4), false), (ie(4, 8), false)]);
		for (range, value) in map.iter_mut() {
			if *range == ie(4, 8) {
				*value = true;
			}
		}
		assert_eq!(
			map.iter().collect::<Vec<_>>(),
			[(&ie(1, 4), &false), (&ie(4, 8), &true)]
		);

		let mut map = RangeMap::from_iter([(ie(1, 4), false)]);
		if let Some(value) = map.get_mut(&2) {
			*value = true;
		}
		assert_eq!(map.get(&1), Some(&true));
	}

	#[test]
	fn equality_and_hash_tests() {
		use std::collections::hash_map::DefaultHasher;

		let built_forwards =
			RangeMap::from_iter([(ie(1, 4), false), (ie(8, 100), true)]);
		let built_backwards =
			RangeMap::from_iter([(ie(8, 100), true), (ie(1, 4), false)]);
		assert_eq!(built_forwards, built_backwards);

		let hash_of = |map: &RangeMap<i32, bool>| {
			let mut hasher = DefaultHasher::new();
			map.hash(&mut hasher);
			hasher.finish()
		};
		assert_eq!(hash_of(&built_forwards), hash_of(&built_backwards));
	}

	#[test]
	fn first_and_last_entry_tests() {
		let map = basic();
		assert_eq!(map.first_entry(), Some((&ui(4), &false)));
		assert_eq!(map.last_entry(), Some((&ie(14, 16), &true)));
		assert_eq!(RangeMap::<i32, ()>::new().first_entry(), None);
	}
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{ie, ii, ui};

	#[test]
	fn map_round_trip() {
		let map = RangeMap::from_iter([
			(ui(0), "a".to_string()),
			(ie(1, 4), "b".to_string()),
			(ii(8, 100), "c".to_string()),
		]);
		let json = serde_json::to_string(&map).unwrap();
		let back: RangeMap<i32, String> =
			serde_json::from_str(&json).unwrap();
		assert_eq!(back, map);
	}

	#[test]
	fn overlapping_entries_are_rejected() {
		let json = r#"[
			[[{"Closed":1},{"Closed":5}],"a"],
			[[{"Closed":3},{"Closed":9}],"b"]
		]"#;
		assert!(serde_json::from_str::<RangeMap<i32, String>>(json).is_err());
	}
}
