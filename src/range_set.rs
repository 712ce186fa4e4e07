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

//! The module containing [`RangeSet`] and its live view
//! [`SubRangeSet`]. Since [`RangeSet`] is a wrapper around
//! [`RangeMap`], some of the methods' docs point towards the
//! equivalent method's docs on [`RangeMap`] to prevent inconsistency.

use std::hash::{Hash, Hasher};
use std::iter::once;

use itertools::Itertools;

use crate::range::Range;
use crate::range_map::{
	IntoIter as RangeMapIntoIter, OutOfViewError, RangeMap,
};
use crate::utils::clip;

#[cfg(feature = "serde")]
use std::fmt;
#[cfg(feature = "serde")]
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::de::{SeqAccess, Visitor};
#[cfg(feature = "serde")]
use serde::ser::SerializeSeq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered set of pairwise-disconnected [`Range`]s based on
/// [`RangeMap`].
///
/// Adding a range coalesces it with every range it is connected to, so
/// the set never holds two ranges which overlap or touch each other.
///
/// # Examples
/// ```
/// use range_algebra::test_ranges::{ee, ii};
/// use range_algebra::RangeSet;
///
/// let mut set = RangeSet::new();
///
/// set.add(ee(1, 3));
/// set.add(ii(4, 9));
///
/// // (1, 3) and [4, 9] are separated by the gap [3, 4)
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&ee(1, 3), &ii(4, 9)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSet<T> {
	inner: RangeMap<T, ()>,
}

impl<T> RangeSet<T>
where
	T: Ord + Clone,
{
	/// Adds the given range to the set, coalescing it with every range
	/// connected to it.
	///
	/// Zero, one, or several ranges may be absorbed, since a single
	/// insertion can bridge previously-disconnected ranges. Adding an
	/// empty range is a no-op, and adding an already-enclosed range
	/// changes nothing.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ie, ii};
	/// use range_algebra::RangeSet;
	///
	/// let mut set = RangeSet::new();
	///
	/// set.add(ii(1, 10));
	/// set.add(ie(11, 15));
	/// assert_eq!(
	/// 	set.iter().collect::<Vec<_>>(),
	/// 	[&ii(1, 10), &ie(11, 15)]
	/// );
	///
	/// // [11, 15) and [15, 20) touch at 15 and coalesce
	/// set.add(ie(15, 20));
	/// assert_eq!(
	/// 	set.iter().collect::<Vec<_>>(),
	/// 	[&ii(1, 10), &ie(11, 20)]
	/// );
	///
	/// // the empty range changes nothing
	/// set.add(ee(0, 0));
	/// assert_eq!(set.len(), 2);
	/// ```
	pub fn add(&mut self, range: Range<T>) {
		self.inner.insert_coalescing(range, ());
	}

	/// Removes the given range from the set.
	///
	/// Every intersecting range is replaced by its fragments outside
	/// the removed range, so a range straddling it splits in two.
	/// Removing an empty range is a no-op.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ie, ii};
	/// use range_algebra::RangeSet;
	///
	/// let mut set = RangeSet::from_iter([ii(1, 10), ie(11, 20)]);
	///
	/// set.remove(&ee(5, 10));
	///
	/// // the closed singleton [10, 10] survives since 10 itself was
	/// // excluded from the removed range
	/// assert_eq!(
	/// 	set.iter().collect::<Vec<_>>(),
	/// 	[&ii(1, 5), &ii(10, 10), &ie(11, 20)]
	/// );
	/// ```
	pub fn remove(&mut self, range: &Range<T>) {
		self.inner.remove(range);
	}

	/// Returns `true` if some range in the set contains the given
	/// point.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeSet;
	///
	/// let set = RangeSet::from_iter([ie(1, 4), ie(8, 100)]);
	///
	/// assert_eq!(set.contains(&3), true);
	/// assert_eq!(set.contains(&4), false);
	/// ```
	pub fn contains(&self, point: &T) -> bool {
		self.inner.contains(point)
	}

	/// Returns the range in the set containing the given point, if
	/// any.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ie;
	/// use range_algebra::RangeSet;
	///
	/// let set = RangeSet::from_iter([ie(1, 4), ie(8, 100)]);
	///
	/// assert_eq!(set.range_containing(&3), Some(&ie(1, 4)));
	/// assert_eq!(set.range_containing(&5), None);
	/// ```
	pub fn range_containing(&self, point: &T) -> Option<&Range<T>> {
		self.inner.get_entry(point).map(|(range, _)| range)
	}

	/// Returns `true` if some single range in the set encloses the
	/// given range.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ii};
	/// use range_algebra::RangeSet;
	///
	/// let set = RangeSet::from_iter([ii(1, 10), ii(20, 30)]);
	///
	/// assert_eq!(set.encloses(&ee(2, 9)), true);
	/// assert_eq!(set.encloses(&ii(5, 25)), false);
	/// ```
	pub fn encloses(&self, range: &Range<T>) -> bool {
		self.inner.enclosing_entry(range).is_some()
	}

	/// Returns `true` if every range of `other` is enclosed by some
	/// range of this set.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ii;
	/// use range_algebra::RangeSet;
	///
	/// let set = RangeSet::from_iter([ii(1, 10), ii(20, 30)]);
	///
	/// assert_eq!(
	/// 	set.encloses_all(&RangeSet::from_iter([ii(2, 9), ii(20, 25)])),
	/// 	true
	/// );
	/// assert_eq!(
	/// 	set.encloses_all(&RangeSet::from_iter([ii(2, 15)])),
	/// 	false
	/// );
	/// ```
	pub fn encloses_all(&self, other: &RangeSet<T>) -> bool {
		other.iter().all(|range| self.encloses(range))
	}

	/// See [`RangeMap::overlaps()`] for more details.
	pub fn overlaps(&self, range: &Range<T>) -> bool {
		self.inner.overlaps(range)
	}

	/// See [`RangeMap::overlapping()`] for more details.
	pub fn overlapping(
		&self,
		range: &Range<T>,
	) -> impl DoubleEndedIterator<Item = &Range<T>> {
		self.inner.overlapping(range).map(first)
	}

	/// Returns the minimal range enclosing every range in the set, or
	/// `None` when the set is empty.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ie, ii};
	/// use range_algebra::RangeSet;
	///
	/// let set = RangeSet::from_iter([ie(1, 4), ii(8, 100)]);
	///
	/// assert_eq!(set.span(), Some(ii(1, 100)));
	/// assert_eq!(RangeSet::<i32>::new().span(), None);
	/// ```
	pub fn span(&self) -> Option<Range<T>> {
		self.inner.span()
	}

	/// Returns an iterator of the maximal ranges within `outer` not
	/// covered by any range of the set, in ascending order.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ie, iu};
	/// use range_algebra::RangeSet;
	///
	/// let set = RangeSet::from_iter([ie(1, 3), ie(5, 7), ie(9, 100)]);
	///
	/// let mut gaps = set.gaps(&iu(2));
	///
	/// assert_eq!(
	/// 	gaps.collect::<Vec<_>>(),
	/// 	[ie(3, 5), ie(7, 9), iu(100)]
	/// );
	/// ```
	pub fn gaps<'a>(
		&'a self,
		outer: &Range<T>,
	) -> impl Iterator<Item = Range<T>> + 'a {
		once(outer.lower_cut_owned())
			.chain(self.overlapping(outer).flat_map(|stored| {
				[stored.lower_cut_owned(), stored.upper_cut_owned()]
			}))
			.chain(once(outer.upper_cut_owned()))
			.tuples()
			.filter(|(gap_lower, gap_upper)| gap_lower < gap_upper)
			.map(|(gap_lower, gap_upper)| {
				Range::from_cuts(gap_lower, gap_upper)
			})
	}

	/// Returns the set of everything this set does not cover,
	/// including the unbounded tails.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ie, iu, ue, uu};
	/// use range_algebra::RangeSet;
	///
	/// let set = RangeSet::from_iter([ie(1, 3), iu(5)]);
	///
	/// assert_eq!(
	/// 	set.complement().iter().collect::<Vec<_>>(),
	/// 	[&ue(1), &ie(3, 5)]
	/// );
	/// assert_eq!(
	/// 	RangeSet::new().complement().iter().collect::<Vec<_>>(),
	/// 	[&uu()]
	/// );
	/// ```
	pub fn complement(&self) -> RangeSet<T> {
		let mut output = RangeSet::new();
		for gap in self.gaps(&Range::all()) {
			output.inner.insert_raw(gap, ());
		}
		output
	}

	/// Returns a new set holding every range of this set connected to
	/// the given range, clipped to it. Ranges which only touch it clip
	/// to nothing and are left out.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ie, ii};
	/// use range_algebra::RangeSet;
	///
	/// let set = RangeSet::from_iter([ii(1, 3), ii(5, 9)]);
	///
	/// assert_eq!(
	/// 	set.sub_range_set(&ii(2, 6)).iter().collect::<Vec<_>>(),
	/// 	[&ii(2, 3), &ii(5, 6)]
	/// );
	/// ```
	pub fn sub_range_set(&self, range: &Range<T>) -> RangeSet<T> {
		RangeSet {
			inner: self.inner.sub_range_map(range),
		}
	}

	/// Returns a live view of the portion of this set within the given
	/// range. See [`SubRangeSet`] for the view's behavior.
	pub fn sub_range_set_mut(&mut self, range: Range<T>) -> SubRangeSet<'_, T> {
		SubRangeSet {
			set: self,
			view: range,
		}
	}

	/// Returns the first range in the set, if any.
	pub fn first(&self) -> Option<&Range<T>> {
		self.inner.first_entry().map(first)
	}

	/// Returns the last range in the set, if any.
	pub fn last(&self) -> Option<&Range<T>> {
		self.inner.last_entry().map(first)
	}
}

impl<T> RangeSet<T> {
	/// Makes a new, empty `RangeSet`.
	///
	/// # Examples
	/// ```
	/// use range_algebra::RangeSet;
	///
	/// let set: RangeSet<i8> = RangeSet::new();
	/// ```
	pub fn new() -> Self {
		RangeSet {
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

	/// See [`RangeMap::clear()`] for more details.
	pub fn clear(&mut self) {
		self.inner.clear()
	}

	/// Returns an iterator over every range in the set in ascending
	/// order.
	///
	/// The yielded ranges are never empty and no two of them are
	/// connected.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Range<T>> {
		self.inner.iter().map(first)
	}
}

/// A live, mutable view of the portion of a [`RangeSet`] within a
/// fixed range.
///
/// Every read consults the parent set at query time. Writes whose
/// target range is not entirely enclosed by the view's range, a
/// straddling write included, fail with [`OutOfViewError`] and leave
/// the parent untouched. The view mutably borrows its parent, so it
/// cannot outlive it.
///
/// # Examples
/// ```
/// use range_algebra::test_ranges::{ie, ii};
/// use range_algebra::RangeSet;
///
/// let mut set = RangeSet::from_iter([ii(1, 10)]);
///
/// let mut sub = set.sub_range_set_mut(ii(5, 20));
///
/// assert_eq!(sub.iter().collect::<Vec<_>>(), [ii(5, 10)]);
///
/// sub.remove(&ii(8, 12)).unwrap();
/// assert!(sub.add(ii(15, 25)).is_err());
///
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&ie(1, 8)]);
/// ```
pub struct SubRangeSet<'a, T> {
	set: &'a mut RangeSet<T>,
	view: Range<T>,
}

impl<'a, T> SubRangeSet<'a, T>
where
	T: Ord + Clone,
{
	/// Returns the range this view is restricted to.
	pub fn view(&self) -> &Range<T> {
		&self.view
	}

	/// Returns `true` if the point lies within the view and within
	/// some range of the parent set.
	pub fn contains(&self, point: &T) -> bool {
		self.view.contains(point) && self.set.contains(point)
	}

	/// Returns an iterator over the parent's ranges overlapping the
	/// view, clipped to it, in ascending order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = Range<T>> + '_ {
		self.set
			.overlapping(&self.view)
			.map(|stored| clip(stored, &self.view))
	}

	/// Returns the minimal range enclosing every range visible through
	/// the view, or `None` when the view sees nothing.
	pub fn span(&self) -> Option<Range<T>> {
		let mut ranges = self.set.overlapping(&self.view);
		let first = clip(ranges.next()?, &self.view);
		match ranges.next_back() {
			Some(last) => Some(first.span(&clip(last, &self.view))),
			None => Some(first),
		}
	}

	/// Returns `true` if no range of the parent overlaps the view.
	pub fn is_empty(&self) -> bool {
		self.set.overlapping(&self.view).next().is_none()
	}

	/// Adds a range through to the parent set as [`RangeSet::add`]
	/// does, or fails with [`OutOfViewError`] when the given range is
	/// not enclosed by the view's range.
	pub fn add(&mut self, range: Range<T>) -> Result<(), OutOfViewError> {
		if !self.view.encloses(&range) {
			return Err(OutOfViewError);
		}
		self.set.add(range);
		Ok(())
	}

	/// Removes a range from the parent set as [`RangeSet::remove`]
	/// does, or fails with [`OutOfViewError`] when the given range is
	/// not enclosed by the view's range.
	pub fn remove(&mut self, range: &Range<T>) -> Result<(), OutOfViewError> {
		if !self.view.encloses(range) {
			return Err(OutOfViewError);
		}
		self.set.remove(range);
		Ok(())
	}
}

// Helper Functions ==========================

fn first<A, B>((a, _): (A, B)) -> A {
	a
}

// Trait Impls ==========================

impl<T> Default for RangeSet<T> {
	fn default() -> Self {
		RangeSet {
			inner: RangeMap::default(),
		}
	}
}

impl<T> IntoIterator for RangeSet<T> {
	type Item = Range<T>;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.inner.into_iter(),
		};
	}
}

/// An owning iterator over the ranges of a [`RangeSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`RangeSet`] (provided by the [`IntoIterator`] trait). See its
/// documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T> {
	inner: RangeMapIntoIter<T, ()>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = Range<T>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(first)
	}
}

impl<T> FromIterator<Range<T>> for RangeSet<T>
where
	T: Ord + Clone,
{
	fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
		let mut set = RangeSet::new();
		for range in iter {
			set.add(range);
		}
		return set;
	}
}

impl<T> Extend<Range<T>> for RangeSet<T>
where
	T: Ord + Clone,
{
	fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
		for range in iter {
			self.add(range);
		}
	}
}

impl<T> Hash for RangeSet<T>
where
	T: Hash,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.inner.hash(state)
	}
}

#[cfg(feature = "serde")]
impl<T> Serialize for RangeSet<T>
where
	T: Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.len()))?;
		for range in self.iter() {
			seq.serialize_element(&range)?;
		}
		seq.end()
	}
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for RangeSet<T>
where
	T: Ord + Clone + Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_seq(RangeSetVisitor { t: PhantomData })
	}
}

#[cfg(feature = "serde")]
struct RangeSetVisitor<T> {
	t: PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> Visitor<'de> for RangeSetVisitor<T>
where
	T: Ord + Clone + Deserialize<'de>,
{
	type Value = RangeSet<T>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a RangeSet")
	}

	fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut set = RangeSet::new();
		while let Some(range) = access.next_element()? {
			set.add(range);
		}
		Ok(set)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{ee, ei, eu, ie, ii, iu, ue, ui, uu};

	#[test]
	fn add_disconnected_and_touching_tests() {
		let mut set = RangeSet::new();
		set.add(ii(1, 10));
		set.add(ie(11, 15));
		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			[&ii(1, 10), &ie(11, 15)]
		);

		//touching at 15 coalesces
		set.add(ie(15, 20));
		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			[&ii(1, 10), &ie(11, 20)]
		);

		//the empty range is a no-op
		set.add(ee(0, 0));
		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			[&ii(1, 10), &ie(11, 20)]
		);
	}

	#[test]
	fn add_bridges_several_ranges() {
		let mut set =
			RangeSet::from_iter([ii(1, 2), ii(5, 6), ii(9, 10)]);
		set.add(ii(2, 9));
		assert_eq!(set.iter().collect::<Vec<_>>(), [&ii(1, 10)]);
	}

	#[test]
	fn add_enclosed_range_is_idempotent() {
		let mut set = RangeSet::from_iter([ii(1, 10)]);
		set.add(ii(3, 5));
		assert_eq!(set.iter().collect::<Vec<_>>(), [&ii(1, 10)]);
		set.add(ii(1, 10));
		assert_eq!(set.iter().collect::<Vec<_>>(), [&ii(1, 10)]);
	}

	#[test]
	fn add_does_not_coalesce_across_point_gaps() {
		//(1, 3) and [4, 9] leave the gap [3, 4)
		let mut set = RangeSet::new();
		set.add(ee(1, 3));
		set.add(ii(4, 9));
		assert_eq!(set.iter().collect::<Vec<_>>(), [&ee(1, 3), &ii(4, 9)]);

		//(1, 3) and (3, 9) are separated by 3 alone
		let mut set = RangeSet::new();
		set.add(ee(1, 3));
		set.add(ee(3, 9));
		assert_eq!(set.iter().collect::<Vec<_>>(), [&ee(1, 3), &ee(3, 9)]);

		//[1, 3] and (3, 9) share the boundary at 3
		let mut set = RangeSet::new();
		set.add(ii(1, 3));
		set.add(ee(3, 9));
		assert_eq!(set.iter().collect::<Vec<_>>(), [&ie(1, 9)]);
	}

	#[test]
	fn remove_splits_straddled_range() {
		let mut set = RangeSet::from_iter([ii(1, 10), ie(11, 20)]);
		set.remove(&ee(5, 10));
		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			[&ii(1, 5), &ii(10, 10), &ie(11, 20)]
		);
	}

	#[test]
	fn remove_edge_cases() {
		//removing an empty range is a no-op
		let mut set = RangeSet::from_iter([ii(1, 10)]);
		set.remove(&ee(5, 5));
		assert_eq!(set.iter().collect::<Vec<_>>(), [&ii(1, 10)]);

		//removing a disconnected range is a no-op
		set.remove(&ii(15, 20));
		assert_eq!(set.iter().collect::<Vec<_>>(), [&ii(1, 10)]);

		//removing everything empties the set
		set.remove(&uu());
		assert_eq!(set.is_empty(), true);
	}

	#[test]
	fn contains_tests() {
		let set = RangeSet::from_iter([ui(4), ee(5, 7), ie(14, 16)]);
		assert_eq!(set.contains(&-400), true);
		assert_eq!(set.contains(&4), true);
		assert_eq!(set.contains(&5), false);
		assert_eq!(set.contains(&6), true);
		assert_eq!(set.contains(&16), false);
		assert_eq!(set.range_containing(&6), Some(&ee(5, 7)));
		assert_eq!(set.range_containing(&5), None);
	}

	#[test]
	fn encloses_tests() {
		let set = RangeSet::from_iter([ii(1, 10), ii(20, 30)]);
		assert_eq!(set.encloses(&ee(2, 9)), true);
		assert_eq!(set.encloses(&ii(1, 10)), true);
		assert_eq!(set.encloses(&ii(5, 25)), false);
		assert_eq!(set.encloses(&ii(15, 16)), false);
		assert_eq!(set.encloses(&eu(25)), false);

		//the empty range is enclosed wherever its pivot is covered
		assert_eq!(set.encloses(&ee(5, 5)), true);
		assert_eq!(set.encloses(&ee(15, 15)), false);
	}

	#[test]
	fn encloses_all_tests() {
		let set = RangeSet::from_iter([ii(1, 10), ii(20, 30)]);
		assert_eq!(set.encloses_all(&RangeSet::new()), true);
		assert_eq!(
			set.encloses_all(&RangeSet::from_iter([ii(2, 9), ii(20, 30)])),
			true
		);
		assert_eq!(
			set.encloses_all(&RangeSet::from_iter([ii(2, 9), ii(15, 16)])),
			false
		);
	}

	#[test]
	fn span_tests() {
		assert_eq!(
			RangeSet::from_iter([ie(1, 3), ii(8, 100)]).span(),
			Some(ii(1, 100))
		);
		assert_eq!(
			RangeSet::from_iter([ue(3), iu(8)]).span(),
			Some(uu())
		);
		assert_eq!(RangeSet::<i32>::new().span(), None);
	}

	#[test]
	fn gaps_tests() {
		let set = RangeSet::from_iter([ie(1, 3), ie(5, 7), ie(9, 100)]);
		assert_eq!(
			set.gaps(&iu(2)).collect::<Vec<_>>(),
			[ie(3, 5), ie(7, 9), iu(100)]
		);
		assert_eq!(
			set.gaps(&ii(3, 4)).collect::<Vec<_>>(),
			[ii(3, 4)]
		);
		assert_eq!(set.gaps(&ii(5, 6)).count(), 0);
		assert_eq!(set.gaps(&ee(0, 0)).count(), 0);
	}

	#[test]
	fn complement_tests() {
		assert_eq!(
			RangeSet::from_iter([ie(1, 3), iu(5)])
				.complement()
				.iter()
				.collect::<Vec<_>>(),
			[&ue(1), &ie(3, 5)]
		);
		assert_eq!(
			RangeSet::<i32>::new()
				.complement()
				.iter()
				.collect::<Vec<_>>(),
			[&uu()]
		);
		assert_eq!(
			RangeSet::from_iter([uu()]).complement().is_empty(),
			true
		);
		//complementing twice round-trips
		let set = RangeSet::from_iter([ei(1, 3), ii(8, 100)]);
		assert_eq!(set.complement().complement(), set);
	}

	#[test]
	fn sub_range_set_tests() {
		let set = RangeSet::from_iter([ii(1, 3), ii(5, 9), ii(20, 30)]);
		let sub = set.sub_range_set(&ii(2, 6));
		assert_eq!(sub.iter().collect::<Vec<_>>(), [&ii(2, 3), &ii(5, 6)]);

		//ranges only touching the clipping range are left out
		let sub = set.sub_range_set(&ee(3, 5));
		assert_eq!(sub.is_empty(), true);
	}

	#[test]
	fn sub_range_set_mut_tests() {
		let mut set = RangeSet::from_iter([ii(1, 10)]);
		{
			let mut sub = set.sub_range_set_mut(ii(5, 20));
			assert_eq!(sub.view(), &ii(5, 20));
			assert_eq!(sub.iter().collect::<Vec<_>>(), [ii(5, 10)]);
			assert_eq!(sub.span(), Some(ii(5, 10)));
			assert_eq!(sub.contains(&7), true);
			assert_eq!(sub.contains(&2), false);
			assert_eq!(sub.is_empty(), false);

			sub.remove(&ii(8, 12)).unwrap();
			sub.add(ii(15, 18)).unwrap();

			//straddling or outside writes fail fast
			assert_eq!(sub.add(ii(15, 25)), Err(OutOfViewError));
			assert_eq!(sub.remove(&ii(0, 6)), Err(OutOfViewError));
		}
		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			[&ie(1, 8), &ii(15, 18)]
		);
	}

	#[test]
	fn iter_is_sorted_and_disconnected() {
		let mut set = RangeSet::new();
		for range in [
			ii(18, 19),
			ie(1, 3),
			ei(3, 7),
			ii(10, 12),
			ii(11, 13),
			ee(15, 16),
			ii(40, 45),
			iu(50),
		] {
			set.add(range);
		}
		for (left, right) in set.iter().tuple_windows() {
			assert!(
				left.upper_cut() < right.lower_cut(),
				"{left:?} and {right:?} are connected"
			);
		}
	}

	#[test]
	fn equality_and_hash_tests() {
		use std::collections::hash_map::DefaultHasher;
		use std::hash::{Hash, Hasher};

		let one = RangeSet::from_iter([ie(1, 5), ie(5, 9)]);
		let two = RangeSet::from_iter([ie(1, 9)]);
		assert_eq!(one, two);

		let hash_of = |set: &RangeSet<i32>| {
			let mut hasher = DefaultHasher::new();
			set.hash(&mut hasher);
			hasher.finish()
		};
		assert_eq!(hash_of(&one), hash_of(&two));
		assert_ne!(one, RangeSet::from_iter([ii(1, 9)]));
	}

	#[test]
	fn into_iter_tests() {
		let set = RangeSet::from_iter([ie(8, 10), ie(1, 3)]);
		assert_eq!(
			set.into_iter().collect::<Vec<_>>(),
			[ie(1, 3), ie(8, 10)]
		);
	}
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{ee, ie, iu};

	#[test]
	fn set_round_trip() {
		let set = RangeSet::from_iter([ee(1, 3), ie(5, 9), iu(100)]);
		let json = serde_json::to_string(&set).unwrap();
		let back: RangeSet<i32> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, set);
	}
}
