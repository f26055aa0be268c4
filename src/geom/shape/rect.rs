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

use crate::geom::{v2, Polygon, Vec2};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box.
///
/// `pos` is the corner with the smallest x and y coordinates.
/// A `Rect` has no collision logic of its own; convert it with `to_polygon`.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Rect {
    /// The minimum corner.
    pub pos: Vec2,
    /// The width.
    pub w: f64,
    /// The height.
    pub h: f64,
}

impl Rect {
    /// Constructs a new `Rect` with the given minimum corner and dimensions.
    #[inline]
    pub fn new(pos: Vec2, w: f64, h: f64) -> Rect {
        Rect { pos, w, h }
    }

    /// Returns a new polygon at `pos` with the four corners in counter-clockwise order,
    /// starting at the local origin.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(
            self.pos,
            vec![Vec2::zero(), v2(self.w, 0.0), v2(self.w, self.h), v2(0.0, self.h)],
        )
    }
}
