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

//! The module containing [`Range`], its constructors and its algebra
//! operations.

use std::cmp::{max, min};
use std::fmt;

use crate::bound::{Bound, BoundType};
use crate::cut::Cut;
use crate::discrete_domain::DiscreteDomain;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An interval over an ordered type `T`, defined by a lower and an
/// upper [`Bound`].
///
/// Ranges are immutable values compared by structural equality of
/// their bounds: `[2, 5]` and `(1, 6)` are different ranges even over
/// a type for which they contain the same points.
///
/// # Empty ranges
///
/// A range with two open bounds on the same value, such as `(5, 5)`,
/// is valid and denotes the empty range at that position. Equal finite
/// endpoint values with any combination of bound types other than
/// closed/closed (the singleton `[v, v]`) or open/open are rejected at
/// construction.
///
/// | range    | valid          |
/// | -------- | -------------- |
/// | `[0, 0]` | YES, singleton |
/// | `(0, 0)` | YES, empty     |
/// | `[0, 0)` | NO             |
/// | `(0, 0]` | NO             |
/// | `[9, 8]` | NO             |
///
/// # Examples
/// ```
/// use range_algebra::Range;
///
/// let range = Range::closed_open(4, 8).unwrap();
///
/// assert_eq!(range.contains(&4), true);
/// assert_eq!(range.contains(&8), false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
	lower: Bound<T>,
	upper: Bound<T>,
}

/// An error type to represent constructing a range from bounds which do
/// not form a valid interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError;

impl fmt::Display for InvalidRangeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("the given bounds do not form a valid range")
	}
}
impl std::error::Error for InvalidRangeError {}

/// An error type to represent intersecting two ranges which are not
/// connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisconnectedError;

impl fmt::Display for DisconnectedError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("the ranges are not connected")
	}
}
impl std::error::Error for DisconnectedError {}

/// An error type to represent asking for the range enclosing an empty
/// sequence of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("no points were given to enclose")
	}
}
impl std::error::Error for EmptyInputError {}

impl<T> Range<T>
where
	T: Ord,
{
	/// Makes a range from the given pair of bounds.
	///
	/// Fails when both bounds are finite with `lower > upper`, or when
	/// both are finite and equal with any bound types other than
	/// closed/closed (the singleton) or open/open (the empty range).
	///
	/// # Examples
	/// ```
	/// use range_algebra::{Bound, Range};
	///
	/// assert!(Range::from_bounds(Bound::Closed(2), Bound::Open(5)).is_ok());
	/// assert!(Range::from_bounds(Bound::Unbounded, Bound::Closed(5)).is_ok());
	/// assert!(Range::from_bounds(Bound::Closed(5), Bound::Open(5)).is_err());
	/// assert!(Range::from_bounds(Bound::Closed(5), Bound::Open(2)).is_err());
	/// ```
	pub fn from_bounds(
		lower: Bound<T>,
		upper: Bound<T>,
	) -> Result<Range<T>, InvalidRangeError> {
		if let (
			Bound::Open(lower_value) | Bound::Closed(lower_value),
			Bound::Open(upper_value) | Bound::Closed(upper_value),
		) = (&lower, &upper)
		{
			if lower_value > upper_value {
				return Err(InvalidRangeError);
			}
			if lower_value == upper_value {
				let same_type = matches!(
					(&lower, &upper),
					(Bound::Closed(_), Bound::Closed(_))
						| (Bound::Open(_), Bound::Open(_))
				);
				if !same_type {
					return Err(InvalidRangeError);
				}
			}
		}
		Ok(Range { lower, upper })
	}

	/// Makes the range `(lower, upper)`, excluding both endpoints.
	///
	/// `open(v, v)` is the empty range at `v`.
	pub fn open(lower: T, upper: T) -> Result<Range<T>, InvalidRangeError> {
		Range::from_bounds(Bound::Open(lower), Bound::Open(upper))
	}

	/// Makes the range `[lower, upper]`, including both endpoints.
	pub fn closed(lower: T, upper: T) -> Result<Range<T>, InvalidRangeError> {
		Range::from_bounds(Bound::Closed(lower), Bound::Closed(upper))
	}

	/// Makes the range `(lower, upper]`.
	pub fn open_closed(
		lower: T,
		upper: T,
	) -> Result<Range<T>, InvalidRangeError> {
		Range::from_bounds(Bound::Open(lower), Bound::Closed(upper))
	}

	/// Makes the range `[lower, upper)`.
	pub fn closed_open(
		lower: T,
		upper: T,
	) -> Result<Range<T>, InvalidRangeError> {
		Range::from_bounds(Bound::Closed(lower), Bound::Open(upper))
	}

	/// Makes the range `[lower, +∞)`.
	pub fn at_least(lower: T) -> Range<T> {
		Range {
			lower: Bound::Closed(lower),
			upper: Bound::Unbounded,
		}
	}

	/// Makes the range `(lower, +∞)`.
	pub fn greater_than(lower: T) -> Range<T> {
		Range {
			lower: Bound::Open(lower),
			upper: Bound::Unbounded,
		}
	}

	/// Makes the range `(-∞, upper]`.
	pub fn at_most(upper: T) -> Range<T> {
		Range {
			lower: Bound::Unbounded,
			upper: Bound::Closed(upper),
		}
	}

	/// Makes the range `(-∞, upper)`.
	pub fn less_than(upper: T) -> Range<T> {
		Range {
			lower: Bound::Unbounded,
			upper: Bound::Open(upper),
		}
	}

	/// Makes the range from `lower` up to everything, with the given
	/// bound type on the lower side.
	///
	/// # Examples
	/// ```
	/// use range_algebra::{BoundType, Range};
	///
	/// assert_eq!(Range::down_to(5, BoundType::Closed), Range::at_least(5));
	/// assert_eq!(Range::down_to(5, BoundType::Open), Range::greater_than(5));
	/// ```
	pub fn down_to(lower: T, bound_type: BoundType) -> Range<T> {
		match bound_type {
			BoundType::Closed => Range::at_least(lower),
			BoundType::Open => Range::greater_than(lower),
		}
	}

	/// Makes the range from everything up to `upper`, with the given
	/// bound type on the upper side.
	pub fn up_to(upper: T, bound_type: BoundType) -> Range<T> {
		match bound_type {
			BoundType::Closed => Range::at_most(upper),
			BoundType::Open => Range::less_than(upper),
		}
	}

	/// Makes the range `(-∞, +∞)` over everything.
	pub fn all() -> Range<T> {
		Range {
			lower: Bound::Unbounded,
			upper: Bound::Unbounded,
		}
	}

	/// Returns the smallest closed range enclosing every given point,
	/// or an [`EmptyInputError`] when no points are given.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ii;
	/// use range_algebra::{EmptyInputError, Range};
	///
	/// assert_eq!(Range::enclose_all([5, 2, 9]), Ok(ii(2, 9)));
	/// assert_eq!(Range::<i32>::enclose_all([]), Err(EmptyInputError));
	/// ```
	pub fn enclose_all(
		points: impl IntoIterator<Item = T>,
	) -> Result<Range<T>, EmptyInputError>
	where
		T: Clone,
	{
		let mut points = points.into_iter();
		let first = points.next().ok_or(EmptyInputError)?;
		let (mut lowest, mut highest) = (first.clone(), first);
		for point in points {
			if point < lowest {
				lowest = point;
			} else if point > highest {
				highest = point;
			}
		}
		Ok(Range {
			lower: Bound::Closed(lowest),
			upper: Bound::Closed(highest),
		})
	}

	/// Returns the lower bound of the range.
	pub fn lower_bound(&self) -> Bound<&T> {
		self.lower.as_ref()
	}

	/// Returns the upper bound of the range.
	pub fn upper_bound(&self) -> Bound<&T> {
		self.upper.as_ref()
	}

	/// Returns `true` if the range contains no points.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ii};
	///
	/// assert_eq!(ee(5, 5).is_empty(), true);
	/// assert_eq!(ii(5, 5).is_empty(), false);
	/// assert_eq!(ee(5, 6).is_empty(), false);
	/// ```
	pub fn is_empty(&self) -> bool {
		match (&self.lower, &self.upper) {
			(Bound::Open(lower), Bound::Open(upper)) => lower == upper,
			_ => false,
		}
	}

	/// Returns `true` if the given point lies within the range.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ei, ui};
	///
	/// assert_eq!(ei(4, 8).contains(&4), false);
	/// assert_eq!(ei(4, 8).contains(&8), true);
	/// assert_eq!(ui(4).contains(&-800), true);
	/// ```
	pub fn contains(&self, point: &T) -> bool {
		self.lower_cut() <= Cut::Below(point)
			&& self.upper_cut() >= Cut::Above(point)
	}

	/// Returns `true` if every one of the given points lies within the
	/// range; vacuously true for an empty sequence.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::ii;
	///
	/// assert_eq!(ii(1, 9).contains_all(&[2, 5, 9]), true);
	/// assert_eq!(ii(1, 9).contains_all(&[2, 15]), false);
	///
	/// let no_points: [i32; 0] = [];
	/// assert_eq!(ii(1, 9).contains_all(&no_points), true);
	/// ```
	pub fn contains_all<'a>(
		&self,
		points: impl IntoIterator<Item = &'a T>,
	) -> bool
	where
		T: 'a,
	{
		points.into_iter().all(|point| self.contains(point))
	}

	/// Returns `true` if every point within `other` also lies within
	/// `self`. Every range encloses itself.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ie, ii};
	///
	/// assert_eq!(ii(1, 9).encloses(&ee(2, 3)), true);
	/// assert_eq!(ii(1, 9).encloses(&ii(1, 9)), true);
	/// assert_eq!(ie(1, 9).encloses(&ii(1, 9)), false);
	/// ```
	pub fn encloses(&self, other: &Range<T>) -> bool {
		self.lower_cut() <= other.lower_cut()
			&& self.upper_cut() >= other.upper_cut()
	}

	/// Returns `true` if there is a point, or a shared boundary, common
	/// to both ranges, so that no third range can sit between them.
	///
	/// Touching counts: `[1, 5)` and `[5, 9)` are connected even though
	/// they share no point. `(1, 5)` and `(5, 9)` are not, since `5`
	/// itself separates them.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ie, ii};
	///
	/// assert_eq!(ii(1, 5).is_connected(&ii(3, 9)), true);
	/// assert_eq!(ie(1, 5).is_connected(&ie(5, 9)), true);
	/// assert_eq!(ee(1, 5).is_connected(&ee(5, 9)), false);
	/// assert_eq!(ii(1, 2).is_connected(&ii(5, 9)), false);
	/// ```
	pub fn is_connected(&self, other: &Range<T>) -> bool {
		self.lower_cut() <= other.upper_cut()
			&& other.lower_cut() <= self.upper_cut()
	}

	/// Returns the largest range enclosed by both `self` and `other`,
	/// or a [`DisconnectedError`] when the two are not connected.
	///
	/// The intersection of two ranges that only touch is the empty
	/// range at their shared boundary.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ie, ii};
	/// use range_algebra::DisconnectedError;
	///
	/// assert_eq!(ii(1, 5).intersection(&ii(3, 9)), Ok(ii(3, 5)));
	/// assert_eq!(ie(1, 5).intersection(&ie(5, 9)), Ok(ee(5, 5)));
	/// assert_eq!(ii(1, 2).intersection(&ii(5, 9)), Err(DisconnectedError));
	/// ```
	pub fn intersection(
		&self,
		other: &Range<T>,
	) -> Result<Range<T>, DisconnectedError>
	where
		T: Clone,
	{
		if !self.is_connected(other) {
			return Err(DisconnectedError);
		}
		Ok(Range::from_cuts(
			max(self.lower_cut(), other.lower_cut()).cloned(),
			min(self.upper_cut(), other.upper_cut()).cloned(),
		))
	}

	/// Returns the smallest range enclosing both `self` and `other`,
	/// defined even when the two are disconnected.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ii, iu, uu};
	///
	/// assert_eq!(ii(1, 3).span(&ii(5, 9)), ii(1, 9));
	/// assert_eq!(ii(1, 3).span(&iu(2)), iu(1));
	/// assert_eq!(ii(1, 3).span(&uu()), uu());
	/// ```
	pub fn span(&self, other: &Range<T>) -> Range<T>
	where
		T: Clone,
	{
		Range::from_cuts(
			min(self.lower_cut(), other.lower_cut()).cloned(),
			max(self.upper_cut(), other.upper_cut()).cloned(),
		)
	}

	/// Rewrites the range into its canonical half-open form over the
	/// given discrete domain: a closed (or unbounded) lower bound and
	/// an open (or unbounded) upper bound.
	///
	/// Two ranges containing the same domain values always canonicalize
	/// to the same range. An unbounded lower bound becomes closed at
	/// the domain's minimum when it has one; a closed upper bound at
	/// the domain's maximum becomes unbounded. The empty range
	/// canonicalizes to itself, and a range containing no domain value
	/// collapses to the empty range at its endpoint.
	///
	/// # Examples
	/// ```
	/// use range_algebra::test_ranges::{ee, ei, ie, ii, iu};
	/// use range_algebra::Integers;
	///
	/// assert_eq!(ii(1, 5).canonical(&Integers), ie(1, 6));
	/// assert_eq!(ei(1, 5).canonical(&Integers), ie(2, 6));
	/// assert_eq!(ee(1, 5).canonical(&Integers), ie(2, 5));
	/// assert_eq!(ie(1, 5).canonical(&Integers), ie(1, 5));
	/// assert_eq!(iu(1).canonical(&Integers), iu(1));
	///
	/// // (3, 4) contains no integer at all
	/// assert_eq!(ee(3, 4).canonical(&Integers), ee(4, 4));
	/// ```
	pub fn canonical<D>(&self, domain: &D) -> Range<T>
	where
		D: DiscreteDomain<T>,
		T: Clone,
	{
		if self.is_empty() {
			return self.clone();
		}
		let lower = match self.lower_cut() {
			Cut::BelowAll => match domain.min_value() {
				Some(minimum) => Cut::Below(minimum),
				None => Cut::BelowAll,
			},
			Cut::Below(value) => Cut::Below(value.clone()),
			Cut::Above(value) => match domain.next(value) {
				Some(next) => Cut::Below(next),
				// no domain value lies above `value`
				None => {
					return Range {
						lower: Bound::Open(value.clone()),
						upper: Bound::Open(value.clone()),
					};
				}
			},
			Cut::AboveAll => unreachable!(),
		};
		let upper = match self.upper_cut() {
			Cut::AboveAll => Cut::AboveAll,
			Cut::Above(value) => match domain.next(value) {
				Some(next) => Cut::Below(next),
				None => Cut::AboveAll,
			},
			Cut::Below(value) => Cut::Below(value.clone()),
			Cut::BelowAll => unreachable!(),
		};
		Range::from_cuts(lower, upper)
	}

	/// The cut of the lower bound. The empty range sits wholly at its
	/// pivot value, below it on both sides.
	pub(crate) fn lower_cut(&self) -> Cut<&T> {
		match (&self.lower, &self.upper) {
			(Bound::Open(lower), Bound::Open(upper)) if lower == upper => {
				Cut::Below(lower)
			}
			_ => Cut::from_lower(self.lower.as_ref()),
		}
	}

	/// The cut of the upper bound.
	pub(crate) fn upper_cut(&self) -> Cut<&T> {
		match (&self.lower, &self.upper) {
			(Bound::Open(lower), Bound::Open(upper)) if lower == upper => {
				Cut::Below(upper)
			}
			_ => Cut::from_upper(self.upper.as_ref()),
		}
	}

	pub(crate) fn lower_cut_owned(&self) -> Cut<T>
	where
		T: Clone,
	{
		self.lower_cut().cloned()
	}

	pub(crate) fn upper_cut_owned(&self) -> Cut<T>
	where
		T: Clone,
	{
		self.upper_cut().cloned()
	}

	/// Rebuilds a range from a pair of cuts, normalizing a collapsed
	/// pair to the empty range at its pivot value.
	pub(crate) fn from_cuts(lower: Cut<T>, upper: Cut<T>) -> Range<T>
	where
		T: Clone,
	{
		if lower < upper {
			Range {
				lower: lower.into_lower(),
				upper: upper.into_upper(),
			}
		} else {
			let pivot = lower
				.value()
				.or_else(|| upper.value())
				.expect("a collapsed cut pair always has a finite side")
				.clone();
			Range {
				lower: Bound::Open(pivot.clone()),
				upper: Bound::Open(pivot),
			}
		}
	}
}

// Trait Impls ==========================

#[cfg(feature = "serde")]
impl<T> Serialize for Range<T>
where
	T: Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		(&self.lower, &self.upper).serialize(serializer)
	}
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Range<T>
where
	T: Ord + Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let (lower, upper) =
			<(Bound<T>, Bound<T>)>::deserialize(deserializer)?;
		Range::from_bounds(lower, upper).map_err(serde::de::Error::custom)
	}
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{ee, ie, ii, iu, uu};

	#[test]
	fn range_round_trip() {
		for range in [uu(), iu(3), ie(1, 5), ii(4, 4), ee(4, 4)] {
			let json = serde_json::to_string(&range).unwrap();
			let back: Range<i32> = serde_json::from_str(&json).unwrap();
			assert_eq!(back, range);
		}
	}

	#[test]
	fn invalid_ranges_are_rejected() {
		let mismatched = r#"[{"Closed":5},{"Open":5}]"#;
		assert!(serde_json::from_str::<Range<i32>>(mismatched).is_err());
		let backwards = r#"[{"Closed":9},{"Closed":8}]"#;
		assert!(serde_json::from_str::<Range<i32>>(backwards).is_err());
	}
}
