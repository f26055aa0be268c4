// Copyright 2016-2018 Matthew D. Michelotti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Scratch holds the temporary vectors and ranges that the tests borrow while
// they run. Every take must be matched by a give on every exit path of the
// same call; the stack depth is fixed at the deepest borrow made by any test.

use crate::geom::Vec2;

pub const VEC_SLOTS: usize = 10;
pub const RANGE_SLOTS: usize = 5;

/// A projected interval on an axis.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    #[inline]
    pub fn new(min: f64, max: f64) -> Range {
        Range { min, max }
    }

    /// Moves both ends by `delta`.
    #[inline]
    pub fn shift(&mut self, delta: f64) {
        self.min += delta;
        self.max += delta;
    }
}

/// Fixed pool of scratch vectors and ranges with stack discipline.
#[derive(Clone, Debug)]
pub struct Scratch {
    vecs: [Vec2; VEC_SLOTS],
    vec_top: usize,
    ranges: [Range; RANGE_SLOTS],
    range_top: usize,
}

impl Scratch {
    pub fn new() -> Scratch {
        Scratch {
            vecs: [Vec2::zero(); VEC_SLOTS],
            vec_top: VEC_SLOTS,
            ranges: [Range::default(); RANGE_SLOTS],
            range_top: RANGE_SLOTS,
        }
    }

    pub fn take_vec(&mut self) -> Vec2 {
        assert!(self.vec_top > 0, "scratch vector pool exhausted");
        self.vec_top -= 1;
        self.vecs[self.vec_top]
    }

    pub fn give_vec(&mut self, vec: Vec2) {
        assert!(self.vec_top < VEC_SLOTS, "illegal state");
        self.vecs[self.vec_top] = vec;
        self.vec_top += 1;
    }

    pub fn take_range(&mut self) -> Range {
        assert!(self.range_top > 0, "scratch range pool exhausted");
        self.range_top -= 1;
        self.ranges[self.range_top]
    }

    pub fn give_range(&mut self, range: Range) {
        assert!(self.range_top < RANGE_SLOTS, "illegal state");
        self.ranges[self.range_top] = range;
        self.range_top += 1;
    }

    /// Number of vectors currently borrowed.
    pub fn vecs_in_use(&self) -> usize {
        VEC_SLOTS - self.vec_top
    }

    /// Number of ranges currently borrowed.
    pub fn ranges_in_use(&self) -> usize {
        RANGE_SLOTS - self.range_top
    }

    /// Whether every borrowed slot has been returned.
    pub fn is_idle(&self) -> bool {
        self.vecs_in_use() == 0 && self.ranges_in_use() == 0
    }
}

impl Default for Scratch {
    fn default() -> Scratch {
        Scratch::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::v2;

    #[test]
    fn test_take_and_give() {
        let mut scratch = Scratch::new();
        assert!(scratch.is_idle());
        let a = scratch.take_vec();
        let b = scratch.take_vec();
        let range = scratch.take_range();
        assert_eq!(scratch.vecs_in_use(), 2);
        assert_eq!(scratch.ranges_in_use(), 1);
        scratch.give_vec(b);
        scratch.give_vec(a);
        scratch.give_range(range);
        assert!(scratch.is_idle());
    }

    #[test]
    fn test_full_depth() {
        let mut scratch = Scratch::new();
        let vecs: Vec<Vec2> = (0..VEC_SLOTS).map(|_| scratch.take_vec()).collect();
        let ranges: Vec<Range> = (0..RANGE_SLOTS).map(|_| scratch.take_range()).collect();
        assert_eq!(scratch.vecs_in_use(), VEC_SLOTS);
        assert_eq!(scratch.ranges_in_use(), RANGE_SLOTS);
        vecs.into_iter().for_each(|v| scratch.give_vec(v));
        ranges.into_iter().for_each(|r| scratch.give_range(r));
        assert!(scratch.is_idle());
    }

    #[test]
    #[should_panic]
    fn test_exhausted_vec_pool() {
        let mut scratch = Scratch::new();
        for _ in 0..=VEC_SLOTS {
            scratch.take_vec();
        }
    }

    #[test]
    #[should_panic]
    fn test_give_without_take() {
        let mut scratch = Scratch::new();
        scratch.give_vec(v2(1.0, 1.0));
    }

    #[test]
    fn test_range_shift() {
        let mut range = Range::new(-1.0, 2.0);
        range.shift(3.0);
        assert_eq!(range, Range::new(2.0, 5.0));
    }
}
