// Copyright 2016-2017 Matthew D. Michelotti
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

use crate::geom::Vec2;
use crate::sat::{self, Response};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

mod circle;
mod polygon;
mod rect;


pub use self::circle::Circle;
pub use self::polygon::Polygon;
pub use self::rect::Rect;

/// Enumeration of kinds of shapes that take part in collision tests.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// Circle.
    Circle,
    /// Convex polygon.
    Polygon,
}

/// A shape that can be tested against any other shape.
///
/// A `Rect` takes part as a polygon (see `From<Rect>`).
#[derive(PartialEq, Clone, Debug)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A convex polygon.
    Polygon(Polygon),
}

impl Shape {
    /// Returns the kind of shape.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Returns the position of the shape.
    pub fn pos(&self) -> Vec2 {
        match self {
            Shape::Circle(circle) => circle.pos,
            Shape::Polygon(polygon) => polygon.pos,
        }
    }

    /// Returns a mutable reference to the position of the shape.
    pub fn pos_mut(&mut self) -> &mut Vec2 {
        match self {
            Shape::Circle(circle) => &mut circle.pos,
            Shape::Polygon(polygon) => &mut polygon.pos,
        }
    }

    /// Returns the axis-aligned bounding box as a new polygon.
    pub fn aabb(&self) -> Polygon {
        match self {
            Shape::Circle(circle) => circle.aabb(),
            Shape::Polygon(polygon) => polygon.aabb(),
        }
    }

    /// Runs the pairwise test that matches the kinds of `a` and `b`.
    ///
    /// `response` is filled in the same way as the underlying test,
    /// with `a` and `b` in the roles given here.
    /// It is not cleared first.
    pub fn test(a: &Shape, b: &Shape, response: Option<&mut Response>) -> bool {
        sat::test_shapes(a, b, response)
    }

    /// Shorthand for `Shape::test(self, other, response)`.
    pub fn collides(&self, other: &Shape, response: Option<&mut Response>) -> bool {
        Shape::test(self, other, response)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Shape {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Shape {
        Shape::Polygon(polygon)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Shape {
        Shape::Polygon(rect.to_polygon())
    }
}
