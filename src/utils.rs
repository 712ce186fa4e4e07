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

use std::cmp::{max, min};

use crate::range::Range;

/// The fragments of a stored range which survive cutting another range
/// out of it.
#[derive(Debug)]
pub(crate) struct CutResult<T> {
	pub(crate) before_cut: Option<Range<T>>,
	pub(crate) after_cut: Option<Range<T>>,
}

/// Cuts `cut` out of `base`, returning the surviving fragment on each
/// side. A fragment is only produced where `base` extends strictly past
/// `cut` on that side.
pub(crate) fn cut_range<T>(base: &Range<T>, cut: &Range<T>) -> CutResult<T>
where
	T: Ord + Clone,
{
	let before_cut = (base.lower_cut() < cut.lower_cut()).then(|| {
		Range::from_cuts(base.lower_cut().cloned(), cut.lower_cut().cloned())
	});
	let after_cut = (cut.upper_cut() < base.upper_cut()).then(|| {
		Range::from_cuts(cut.upper_cut().cloned(), base.upper_cut().cloned())
	});

	CutResult {
		before_cut,
		after_cut,
	}
}

/// Clips `base` to the given range. Only meaningful when the two are
/// connected.
pub(crate) fn clip<T>(base: &Range<T>, range: &Range<T>) -> Range<T>
where
	T: Ord + Clone,
{
	Range::from_cuts(
		max(base.lower_cut(), range.lower_cut()).cloned(),
		min(base.upper_cut(), range.upper_cut()).cloned(),
	)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{ee, ie, ii, iu, ue};

	#[test]
	fn cut_range_tests() {
		//cut the middle out, two fragments survive
		let result = cut_range(&ii(1, 10), &ee(3, 5));
		assert_eq!(result.before_cut, Some(ii(1, 3)));
		assert_eq!(result.after_cut, Some(ii(5, 10)));

		//cut off one side
		let result = cut_range(&ii(1, 10), &iu(5));
		assert_eq!(result.before_cut, Some(ie(1, 5)));
		assert_eq!(result.after_cut, None);

		//cut covers the base entirely
		let result = cut_range(&ii(1, 10), &ii(1, 10));
		assert_eq!(result.before_cut, None);
		assert_eq!(result.after_cut, None);

		//a closed bound survives the cut of its open twin
		let result = cut_range(&ii(1, 10), &ee(5, 10));
		assert_eq!(result.before_cut, Some(ii(1, 5)));
		assert_eq!(result.after_cut, Some(ii(10, 10)));
	}

	#[test]
	fn clip_tests() {
		assert_eq!(clip(&ii(1, 10), &ii(5, 20)), ii(5, 10));
		assert_eq!(clip(&ii(1, 10), &ue(5)), ie(1, 5));
		assert_eq!(clip(&ii(1, 10), &ii(0, 20)), ii(1, 10));
		//touching ranges clip to the empty range
		assert_eq!(clip(&ie(1, 5), &ie(5, 9)), ee(5, 5));
	}
}
