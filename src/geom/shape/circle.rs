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

use crate::geom::{v2, Polygon, Rect, Vec2};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A circle with a position and a radius.
///
/// The effective center is `pos + offset`.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    /// The position of the circle.
    pub pos: Vec2,
    /// The radius.
    pub r: f64,
    /// Shifts the center without touching `pos`.
    pub offset: Vec2,
}

impl Circle {
    /// Constructs a new circle centered at `pos` with radius `r` and no offset.
    #[inline]
    pub fn new(pos: Vec2, r: f64) -> Circle {
        Circle { pos, r, offset: Vec2::zero() }
    }

    /// Sets the offset. The value is copied into the circle.
    pub fn set_offset(&mut self, offset: Vec2) -> &mut Circle {
        self.offset = offset;
        self
    }

    /// Returns `pos + offset`.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.offset
    }

    /// Returns the axis-aligned bounding box.
    pub fn aabb_rect(&self) -> Rect {
        let r = self.r;
        Rect::new(self.center() - v2(r, r), r * 2.0, r * 2.0)
    }

    /// Same as `aabb_rect`, converted to a new polygon.
    pub fn aabb(&self) -> Polygon {
        self.aabb_rect().to_polygon()
    }
}
