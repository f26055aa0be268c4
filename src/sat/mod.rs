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

//! Separating axis collision tests.
//!
//! The tests are available as methods on a `Sat` engine, which owns its own
//! scratch space, and as free functions that run on an engine private to the
//! calling thread.
//!
//! None of the tests validate their input.
//! Polygons must be convex, wound counter-clockwise and have non-zero area,
//! and axes passed to `is_separating_axis` must have unit length;
//! otherwise the results are meaningless (but no panic occurs).

mod axis;
mod response;
mod scratch;
mod solvers;


pub use self::response::Response;
pub use self::scratch::{Range, Scratch};

use crate::geom::{Circle, Polygon, Rect, Shape, Vec2};
use std::cell::RefCell;

/// Side length of the probe square used by `point_in_polygon`.
pub const POINT_PROBE_SIZE: f64 = 0.000001;

/// A collision test engine.
///
/// Holds the scratch vectors and ranges borrowed by the tests, so a test never
/// allocates. An engine must not be shared between threads while in use;
/// give each thread its own (the free functions in this module already do).
#[derive(Clone, Debug)]
pub struct Sat {
    scratch: Scratch,
    probe: Polygon,
    probe_response: Response,
}

impl Sat {
    /// Constructs an engine with an idle scratch pool.
    pub fn new() -> Sat {
        Sat {
            scratch: Scratch::new(),
            probe: Rect::new(Vec2::zero(), POINT_PROBE_SIZE, POINT_PROBE_SIZE).to_polygon(),
            probe_response: Response::new(),
        }
    }

    /// The scratch space. Every slot is returned between tests.
    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    /// Returns `true` if `axis` separates the two point sets, placed at `a_pos` and `b_pos`.
    ///
    /// `axis` must be a unit vector.
    /// If the axis does not separate them and a `response` is given, the overlap
    /// along the axis is folded into it: the smallest overlap seen so far is kept
    /// in `overlap` and `overlap_n`, and the containment flags are lowered when
    /// the projections show that one shape sticks out of the other.
    pub fn is_separating_axis(
        &mut self,
        a_pos: Vec2,
        b_pos: Vec2,
        a_points: &[Vec2],
        b_points: &[Vec2],
        axis: Vec2,
        response: Option<&mut Response>,
    ) -> bool {
        solvers::is_separating_axis(&mut self.scratch, a_pos, b_pos, a_points, b_points, axis, response)
    }

    /// Returns `true` if `p` is inside or on the boundary of `c`.
    pub fn point_in_circle(&mut self, p: Vec2, c: &Circle) -> bool {
        solvers::point_in_circle(&mut self.scratch, p, c)
    }

    /// Returns `true` if `p` is inside `poly`.
    ///
    /// This tests whether a tiny square (`POINT_PROBE_SIZE` wide, with its corner at `p`)
    /// is entirely contained in the polygon, so points within about `POINT_PROBE_SIZE`
    /// of the boundary may be classified either way.
    pub fn point_in_polygon(&mut self, p: Vec2, poly: &Polygon) -> bool {
        self.probe.pos = p;
        self.probe_response.clear();
        let collided = solvers::test_polygon_polygon(
            &mut self.scratch,
            &self.probe,
            poly,
            Some(&mut self.probe_response),
        );
        collided && self.probe_response.a_in_b
    }

    /// Returns `true` if the circles touch or overlap.
    ///
    /// On collision, `response.overlap_n` points from the center of `a` to the center of `b`.
    pub fn test_circle_circle(&mut self, a: &Circle, b: &Circle, response: Option<&mut Response>) -> bool {
        solvers::test_circle_circle(&mut self.scratch, a, b, response)
    }

    /// Returns `true` if the polygon and circle overlap.
    pub fn test_polygon_circle(
        &mut self,
        polygon: &Polygon,
        circle: &Circle,
        response: Option<&mut Response>,
    ) -> bool {
        solvers::test_polygon_circle(&mut self.scratch, polygon, circle, response)
    }

    /// Returns `true` if the circle and polygon overlap.
    ///
    /// Runs `test_polygon_circle` and mirrors the response so that `a` is the circle.
    pub fn test_circle_polygon(
        &mut self,
        circle: &Circle,
        polygon: &Polygon,
        response: Option<&mut Response>,
    ) -> bool {
        solvers::test_circle_polygon(&mut self.scratch, circle, polygon, response)
    }

    /// Returns `true` if the polygons overlap.
    ///
    /// Every edge normal of `a` and then of `b` is tried as a separating axis.
    /// When `false` is returned the response may hold partial results and should be ignored.
    pub fn test_polygon_polygon(&mut self, a: &Polygon, b: &Polygon, response: Option<&mut Response>) -> bool {
        solvers::test_polygon_polygon(&mut self.scratch, a, b, response)
    }

    /// Runs the pairwise test that matches the kinds of `a` and `b`.
    pub fn test_shapes(&mut self, a: &Shape, b: &Shape, response: Option<&mut Response>) -> bool {
        match (a, b) {
            (Shape::Circle(a), Shape::Circle(b)) => self.test_circle_circle(a, b, response),
            (Shape::Circle(a), Shape::Polygon(b)) => self.test_circle_polygon(a, b, response),
            (Shape::Polygon(a), Shape::Circle(b)) => self.test_polygon_circle(a, b, response),
            (Shape::Polygon(a), Shape::Polygon(b)) => self.test_polygon_polygon(a, b, response),
        }
    }
}

impl Default for Sat {
    fn default() -> Sat {
        Sat::new()
    }
}

thread_local! {
    static SAT: RefCell<Sat> = RefCell::new(Sat::new());
}

fn with_sat<R>(f: impl FnOnce(&mut Sat) -> R) -> R {
    SAT.with(|sat| f(&mut sat.borrow_mut()))
}

/// See `Sat::is_separating_axis`.
pub fn is_separating_axis(
    a_pos: Vec2,
    b_pos: Vec2,
    a_points: &[Vec2],
    b_points: &[Vec2],
    axis: Vec2,
    response: Option<&mut Response>,
) -> bool {
    with_sat(|sat| sat.is_separating_axis(a_pos, b_pos, a_points, b_points, axis, response))
}

/// See `Sat::point_in_circle`.
pub fn point_in_circle(p: Vec2, c: &Circle) -> bool {
    with_sat(|sat| sat.point_in_circle(p, c))
}

/// See `Sat::point_in_polygon`.
pub fn point_in_polygon(p: Vec2, poly: &Polygon) -> bool {
    with_sat(|sat| sat.point_in_polygon(p, poly))
}

/// See `Sat::test_circle_circle`.
pub fn test_circle_circle(a: &Circle, b: &Circle, response: Option<&mut Response>) -> bool {
    with_sat(|sat| sat.test_circle_circle(a, b, response))
}

/// See `Sat::test_polygon_circle`.
pub fn test_polygon_circle(polygon: &Polygon, circle: &Circle, response: Option<&mut Response>) -> bool {
    with_sat(|sat| sat.test_polygon_circle(polygon, circle, response))
}

/// See `Sat::test_circle_polygon`.
pub fn test_circle_polygon(circle: &Circle, polygon: &Polygon, response: Option<&mut Response>) -> bool {
    with_sat(|sat| sat.test_circle_polygon(circle, polygon, response))
}

/// See `Sat::test_polygon_polygon`.
pub fn test_polygon_polygon(a: &Polygon, b: &Polygon, response: Option<&mut Response>) -> bool {
    with_sat(|sat| sat.test_polygon_polygon(a, b, response))
}

/// See `Sat::test_shapes`.
pub fn test_shapes(a: &Shape, b: &Shape, response: Option<&mut Response>) -> bool {
    with_sat(|sat| sat.test_shapes(a, b, response))
}
