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

//! Short constructors of [`Range<i32>`] used by the tests and doc
//! examples.
//!
//! The two letters stand for the kinds of the lower and upper bounds
//! in order: `i` for inclusive (closed), `e` for exclusive (open) and
//! `u` for unbounded. So `ie(1, 5)` is `[1, 5)` and `uu()` is the
//! range over everything.

use crate::range::Range;

/// The range over everything, `(-∞, +∞)`.
pub fn uu() -> Range<i32> {
	Range::all()
}
/// The range `(-∞, x]`.
pub fn ui(x: i32) -> Range<i32> {
	Range::at_most(x)
}
/// The range `(-∞, x)`.
pub fn ue(x: i32) -> Range<i32> {
	Range::less_than(x)
}
/// The range `[x, +∞)`.
pub fn iu(x: i32) -> Range<i32> {
	Range::at_least(x)
}
/// The range `(x, +∞)`.
pub fn eu(x: i32) -> Range<i32> {
	Range::greater_than(x)
}
/// The range `[x1, x2]`.
pub fn ii(x1: i32, x2: i32) -> Range<i32> {
	Range::closed(x1, x2).unwrap()
}
/// The range `[x1, x2)`.
pub fn ie(x1: i32, x2: i32) -> Range<i32> {
	Range::closed_open(x1, x2).unwrap()
}
/// The range `(x1, x2]`.
pub fn ei(x1: i32, x2: i32) -> Range<i32> {
	Range::open_closed(x1, x2).unwrap()
}
/// The range `(x1, x2)`, the empty range when `x1 == x2`.
pub fn ee(x1: i32, x2: i32) -> Range<i32> {
	Range::open(x1, x2).unwrap()
}
