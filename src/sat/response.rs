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

use crate::geom::{ShapeKind, Vec2};
use std::mem;

/// The result of an intersection test.
///
/// A single `Response` can be reused across many tests to avoid allocation,
/// but it must be `clear`ed between independent tests:
/// the tests only ever lower `overlap` and only ever reset the containment flags
/// to `false`, so state left over from a previous test leaks into the next one.
///
/// Fields are only meaningful after a test that returned `true`.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Response {
    /// Kind of the first shape in the test.
    pub a: Option<ShapeKind>,
    /// Kind of the second shape in the test.
    pub b: Option<ShapeKind>,
    /// Unit vector along which `a` overlaps `b`.
    pub overlap_n: Vec2,
    /// `overlap_n * overlap`.
    /// Subtracting it from the position of `a` separates the shapes.
    pub overlap_v: Vec2,
    /// Penetration depth along `overlap_n`.
    pub overlap: f64,
    /// Whether `a` is entirely inside `b`.
    pub a_in_b: bool,
    /// Whether `b` is entirely inside `a`.
    pub b_in_a: bool,
}

impl Response {
    /// Constructs a cleared response.
    pub fn new() -> Response {
        let mut response = Response {
            a: None,
            b: None,
            overlap_n: Vec2::zero(),
            overlap_v: Vec2::zero(),
            overlap: 0.0,
            a_in_b: true,
            b_in_a: true,
        };
        response.clear();
        response
    }

    /// Resets `overlap` to infinity and both containment flags to `true`.
    ///
    /// The shape kinds and overlap vectors are left alone; every successful test overwrites them.
    pub fn clear(&mut self) -> &mut Response {
        self.a_in_b = true;
        self.b_in_a = true;
        self.overlap = f64::INFINITY;
        self
    }

    /// Swaps the roles of `a` and `b`:
    /// the overlap vectors are reversed and the containment flags exchanged.
    pub fn mirror(&mut self) -> &mut Response {
        self.overlap_n.reverse_mut();
        self.overlap_v.reverse_mut();
        mem::swap(&mut self.a, &mut self.b);
        mem::swap(&mut self.a_in_b, &mut self.b_in_a);
        self
    }
}

impl Default for Response {
    fn default() -> Response {
        Response::new()
    }
}
