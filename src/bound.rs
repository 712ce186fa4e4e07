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

//! The module containing [`Bound`] and [`BoundType`], the public
//! endpoint representation of a [`Range`](crate::Range).

/// Whether a finite endpoint includes its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundType {
	/// The endpoint value is excluded from the range.
	Open,
	/// The endpoint value is included in the range.
	Closed,
}

/// One endpoint of a [`Range`](crate::Range).
///
/// An absent endpoint is always the explicit [`Bound::Unbounded`]
/// variant, never a sentinel value of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bound<T> {
	/// No endpoint, the range continues forever on this side.
	Unbounded,
	/// A finite endpoint that excludes its value.
	Open(T),
	/// A finite endpoint that includes its value.
	Closed(T),
}

impl<T> Bound<T> {
	/// Converts from `&Bound<T>` to `Bound<&T>`.
	pub fn as_ref(&self) -> Bound<&T> {
		match self {
			Bound::Unbounded => Bound::Unbounded,
			Bound::Open(value) => Bound::Open(value),
			Bound::Closed(value) => Bound::Closed(value),
		}
	}

	/// Returns a reference to the endpoint value, if there is one.
	///
	/// # Examples
	/// ```
	/// use range_algebra::Bound;
	///
	/// assert_eq!(Bound::Closed(5).value(), Some(&5));
	/// assert_eq!(Bound::<u8>::Unbounded.value(), None);
	/// ```
	pub fn value(&self) -> Option<&T> {
		match self {
			Bound::Unbounded => None,
			Bound::Open(value) | Bound::Closed(value) => Some(value),
		}
	}

	/// Returns the open/closed qualifier of a finite endpoint, or
	/// `None` when unbounded.
	pub fn bound_type(&self) -> Option<BoundType> {
		match self {
			Bound::Unbounded => None,
			Bound::Open(_) => Some(BoundType::Open),
			Bound::Closed(_) => Some(BoundType::Closed),
		}
	}
}

impl<T> Bound<&T>
where
	T: Clone,
{
	/// Maps a `Bound<&T>` to a `Bound<T>` by cloning the endpoint.
	pub fn cloned(self) -> Bound<T> {
		match self {
			Bound::Unbounded => Bound::Unbounded,
			Bound::Open(value) => Bound::Open(value.clone()),
			Bound::Closed(value) => Bound::Closed(value.clone()),
		}
	}
}
