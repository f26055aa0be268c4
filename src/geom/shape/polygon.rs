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

use crate::error::ShapeError;
use crate::geom::{v2, Rect, Vec2};

/// A convex polygon with any number of points in counter-clockwise order.
///
/// The points are relative to `pos`.
/// Two overlays are applied on top of the points whenever they change:
/// first `offset` is added, then the result is rotated by `angle`.
/// The overlaid points are available through `calc_points`, along with
/// the derived `edges` and `normals`, and are what the collision tests use.
///
/// `pos` may be changed freely.
/// Everything else goes through setters so the derived state stays in sync.
///
/// Convexity and winding are not checked by `new`;
/// use `try_new` or `validate` for that.
#[derive(PartialEq, Clone, Debug)]
pub struct Polygon {
    /// The origin of the polygon's local frame.
    pub pos: Vec2,
    angle: f64,
    offset: Vec2,
    points: Vec<Vec2>,
    calc_points: Vec<Vec2>,
    edges: Vec<Vec2>,
    normals: Vec<Vec2>,
}

impl Polygon {
    /// Constructs a new polygon at `pos` with the given counter-clockwise `points`.
    ///
    /// Consecutive duplicate points are collapsed.
    pub fn new(pos: Vec2, points: Vec<Vec2>) -> Polygon {
        let mut polygon = Polygon {
            pos,
            angle: 0.0,
            offset: Vec2::zero(),
            points: Vec::new(),
            calc_points: Vec::new(),
            edges: Vec::new(),
            normals: Vec::new(),
        };
        polygon.set_points(points);
        polygon
    }

    /// Same as `new`, but rejects polygons that the collision tests cannot handle.
    pub fn try_new(pos: Vec2, points: Vec<Vec2>) -> Result<Polygon, ShapeError> {
        let polygon = Polygon::new(pos, points);
        polygon.validate()?;
        Ok(polygon)
    }

    /// The rotation overlay, in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The offset overlay.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The base points, before `offset` and `angle` are applied.
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// The points after `offset` and `angle` are applied, still relative to `pos`.
    #[inline]
    pub fn calc_points(&self) -> &[Vec2] {
        &self.calc_points
    }

    /// `edges()[i]` runs from `calc_points()[i]` to the next calculated point.
    #[inline]
    pub fn edges(&self) -> &[Vec2] {
        &self.edges
    }

    /// `normals()[i]` is the unit normal of `edges()[i]`, pointing out of the polygon.
    #[inline]
    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    /// Replaces the points of the polygon.
    ///
    /// Consecutive duplicate points (compared exactly, including the last
    /// point against the first) are collapsed.
    /// The derived buffers are reallocated only if the number of points changes.
    pub fn set_points(&mut self, mut points: Vec<Vec2>) -> &mut Polygon {
        let given = points.len();
        collapse_duplicates(&mut points);
        if points.len() != given {
            log::trace!("collapsed {} duplicate polygon points", given - points.len());
        }
        let len = points.len();
        if len != self.calc_points.len() {
            self.calc_points = vec![Vec2::zero(); len];
            self.edges = vec![Vec2::zero(); len];
            self.normals = vec![Vec2::zero(); len];
        }
        self.points = points;
        self.recalc();
        self
    }

    /// Sets the rotation overlay, in radians.
    pub fn set_angle(&mut self, angle: f64) -> &mut Polygon {
        self.angle = angle;
        self.recalc();
        self
    }

    /// Sets the offset overlay, which is applied before the rotation.
    ///
    /// The offset is copied into the polygon.
    pub fn set_offset(&mut self, offset: Vec2) -> &mut Polygon {
        self.offset = offset;
        self.recalc();
        self
    }

    /// Permanently rotates the base points counter-clockwise about the local origin.
    ///
    /// Unlike `set_angle`, this changes `points`, and any `angle` is applied on top of it.
    pub fn rotate(&mut self, angle: f64) -> &mut Polygon {
        for point in &mut self.points {
            point.rotate_mut(angle);
        }
        self.recalc();
        self
    }

    /// Permanently translates the base points.
    ///
    /// Unlike `set_offset`, this changes `points`, and any `offset` is applied on top of it.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Polygon {
        for point in &mut self.points {
            *point += v2(dx, dy);
        }
        self.recalc();
        self
    }

    fn recalc(&mut self) {
        let (offset, angle) = (self.offset, self.angle);
        for (calc_point, &point) in self.calc_points.iter_mut().zip(self.points.iter()) {
            let mut moved = point + offset;
            if angle != 0.0 {
                moved.rotate_mut(angle);
            }
            *calc_point = moved;
        }

        let len = self.calc_points.len();
        for i in 0..len {
            let next = if i + 1 < len { i + 1 } else { 0 };
            let edge = self.calc_points[next] - self.calc_points[i];
            self.edges[i] = edge;
            self.normals[i] = edge.perp().normalize();
        }
    }

    /// Returns the axis-aligned bounding box of the calculated points,
    /// placed in world space at `pos`.
    ///
    /// A polygon with no points yields an empty box at `pos`.
    pub fn aabb_rect(&self) -> Rect {
        let first = match self.calc_points.first() {
            Some(&point) => point,
            None => return Rect::new(self.pos, 0.0, 0.0),
        };
        let (mut min, mut max) = (first, first);
        for point in &self.calc_points[1..] {
            // NaN coordinates fail every comparison and are skipped
            if point.x < min.x {
                min.x = point.x;
            } else if point.x > max.x {
                max.x = point.x;
            }
            if point.y < min.y {
                min.y = point.y;
            } else if point.y > max.y {
                max.y = point.y;
            }
        }
        Rect::new(self.pos + min, max.x - min.x, max.y - min.y)
    }

    /// Same as `aabb_rect`, converted to a new polygon.
    pub fn aabb(&self) -> Polygon {
        self.aabb_rect().to_polygon()
    }

    /// Returns the area-weighted centroid of the calculated points, relative to `pos`.
    ///
    /// The result is meaningless (NaN or infinite) for a polygon with zero area.
    pub fn centroid(&self) -> Vec2 {
        let points = &self.calc_points;
        let len = points.len();
        let (mut cx, mut cy, mut area) = (0.0, 0.0, 0.0);
        for i in 0..len {
            let p1 = points[i];
            let p2 = points[if i + 1 < len { i + 1 } else { 0 }];
            let cross = p1.x * p2.y - p2.x * p1.y;
            cx += (p1.x + p2.x) * cross;
            cy += (p1.y + p2.y) * cross;
            area += cross;
        }
        // area holds twice the signed area; the centroid divides by six times it
        let area = area * 3.0;
        v2(cx / area, cy / area)
    }

    /// Checks that the polygon is convex, counter-clockwise and encloses some area.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let len = self.calc_points.len();
        if len < 3 {
            return Err(ShapeError::TooFewPoints(len));
        }
        let double_area: f64 = (0..len)
            .map(|i| cross(self.calc_points[i], self.calc_points[(i + 1) % len]))
            .sum();
        if double_area == 0.0 {
            return Err(ShapeError::ZeroArea);
        }
        if double_area < 0.0 {
            return Err(ShapeError::Clockwise);
        }
        for i in 0..len {
            let next = (i + 1) % len;
            if cross(self.edges[i], self.edges[next]) < 0.0 {
                return Err(ShapeError::NotConvex(next));
            }
        }
        Ok(())
    }
}

impl Default for Polygon {
    fn default() -> Polygon {
        Polygon::new(Vec2::zero(), Vec::new())
    }
}

fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

fn collapse_duplicates(points: &mut Vec<Vec2>) {
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
}
