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

// This module contains the collision tests themselves. Each one borrows
// what it needs from the given Scratch and hands everything back before
// returning, whichever way it returns.

use crate::geom::{Circle, Polygon, ShapeKind, Vec2};
use crate::sat::axis::{flatten_points_on, voronoi_region, VoronoiRegion};
use crate::sat::{Range, Response, Scratch};

pub fn is_separating_axis(
    scratch: &mut Scratch,
    a_pos: Vec2,
    b_pos: Vec2,
    a_points: &[Vec2],
    b_points: &[Vec2],
    axis: Vec2,
    response: Option<&mut Response>,
) -> bool {
    let mut range_a = scratch.take_range();
    let mut range_b = scratch.take_range();
    let mut offset = scratch.take_vec();

    let projected_offset = offset.copy_from(b_pos).sub_mut(a_pos).dot(axis);
    flatten_points_on(a_points, axis, &mut range_a);
    flatten_points_on(b_points, axis, &mut range_b);
    range_b.shift(projected_offset);

    let separated = range_a.min > range_b.max || range_b.min > range_a.max;
    if !separated {
        if let Some(response) = response {
            record_axis_overlap(response, range_a, range_b, axis);
        }
    }

    scratch.give_vec(offset);
    scratch.give_range(range_b);
    scratch.give_range(range_a);
    separated
}

// a and b are overlapping ranges on the unit vector axis
fn record_axis_overlap(response: &mut Response, a: Range, b: Range, axis: Vec2) {
    let overlap = if a.min < b.min {
        response.a_in_b = false;
        if a.max < b.max {
            response.b_in_a = false;
            a.max - b.min
        } else {
            nested_overlap(a, b)
        }
    } else {
        response.b_in_a = false;
        if a.max > b.max {
            response.a_in_b = false;
            a.min - b.max
        } else {
            nested_overlap(a, b)
        }
    };

    let abs_overlap = overlap.abs();
    if abs_overlap < response.overlap {
        response.overlap = abs_overlap;
        response.overlap_n = axis;
        if overlap < 0.0 {
            response.overlap_n.reverse_mut();
        }
    }
}

// one range contains the other; take the shorter way out, negative if a must move backwards
fn nested_overlap(a: Range, b: Range) -> f64 {
    let forward = a.max - b.min;
    let backward = b.max - a.min;
    if forward < backward {
        forward
    } else {
        -backward
    }
}

pub fn point_in_circle(scratch: &mut Scratch, p: Vec2, c: &Circle) -> bool {
    let mut difference = scratch.take_vec();
    difference.copy_from(p).sub_mut(c.pos).sub_mut(c.offset);
    let inside = difference.len_sq() <= c.r * c.r;
    scratch.give_vec(difference);
    inside
}

pub fn test_circle_circle(
    scratch: &mut Scratch,
    a: &Circle,
    b: &Circle,
    response: Option<&mut Response>,
) -> bool {
    let mut difference = scratch.take_vec();
    difference.copy_from(b.center()).sub_mut(a.center());

    let total_radius = a.r + b.r;
    let distance_sq = difference.len_sq();
    let collided = distance_sq <= total_radius * total_radius;

    if collided {
        if let Some(response) = response {
            let dist = distance_sq.sqrt();
            response.a = Some(ShapeKind::Circle);
            response.b = Some(ShapeKind::Circle);
            response.overlap = total_radius - dist;
            response.overlap_n = *difference.normalize_mut();
            response.overlap_v = difference * response.overlap;
            response.a_in_b = a.r <= b.r && dist <= b.r - a.r;
            response.b_in_a = b.r <= a.r && dist <= a.r - b.r;
        }
    }

    scratch.give_vec(difference);
    collided
}

pub fn test_polygon_circle(
    scratch: &mut Scratch,
    polygon: &Polygon,
    circle: &Circle,
    mut response: Option<&mut Response>,
) -> bool {
    let mut circle_pos = scratch.take_vec();
    circle_pos.copy_from(circle.center()).sub_mut(polygon.pos);

    let radius = circle.r;
    let radius_sq = radius * radius;
    let points = polygon.calc_points();
    let edges = polygon.edges();
    let len = points.len();

    let mut edge = scratch.take_vec();
    let mut point = scratch.take_vec();
    let mut collided = true;

    for i in 0..len {
        let next = if i == len - 1 { 0 } else { i + 1 };
        let prev = if i == 0 { len - 1 } else { i - 1 };
        let mut overlap = 0.0;
        let mut overlap_n = None;

        edge.copy_from(edges[i]);
        point.copy_from(circle_pos).sub_mut(points[i]);

        // a vertex outside the circle means the polygon is not inside it
        if point.len_sq() > radius_sq {
            if let Some(response) = response.as_deref_mut() {
                response.a_in_b = false;
            }
        }

        match voronoi_region(edge, point) {
            VoronoiRegion::Left => {
                // only the vertex's own wedge counts, so check the previous edge agrees
                edge.copy_from(edges[prev]);
                let mut point_2 = scratch.take_vec();
                point_2.copy_from(circle_pos).sub_mut(points[prev]);
                if voronoi_region(edge, point_2) == VoronoiRegion::Right {
                    let dist = point.len();
                    if dist > radius {
                        collided = false;
                    } else if let Some(response) = response.as_deref_mut() {
                        response.b_in_a = false;
                        overlap_n = Some(*point.normalize_mut());
                        overlap = radius - dist;
                    }
                }
                scratch.give_vec(point_2);
            }
            VoronoiRegion::Right => {
                edge.copy_from(edges[next]);
                point.copy_from(circle_pos).sub_mut(points[next]);
                if voronoi_region(edge, point) == VoronoiRegion::Left {
                    let dist = point.len();
                    if dist > radius {
                        collided = false;
                    } else if let Some(response) = response.as_deref_mut() {
                        response.b_in_a = false;
                        overlap_n = Some(*point.normalize_mut());
                        overlap = radius - dist;
                    }
                }
            }
            VoronoiRegion::Middle => {
                let normal = *edge.perp_mut().normalize_mut();
                let dist = point.dot(normal);
                if dist > 0.0 && dist.abs() > radius {
                    collided = false;
                } else if let Some(response) = response.as_deref_mut() {
                    overlap_n = Some(normal);
                    overlap = radius - dist;
                    // center outside the edge, or part of the circle sticking out of it
                    if dist >= 0.0 || overlap < 2.0 * radius {
                        response.b_in_a = false;
                    }
                }
            }
        }

        if !collided {
            break;
        }

        if let (Some(overlap_n), Some(response)) = (overlap_n, response.as_deref_mut()) {
            if overlap.abs() < response.overlap.abs() {
                response.overlap = overlap;
                response.overlap_n = overlap_n;
            }
        }
    }

    if collided {
        if let Some(response) = response {
            response.a = Some(ShapeKind::Polygon);
            response.b = Some(ShapeKind::Circle);
            response.overlap_v = response.overlap_n * response.overlap;
        }
    }

    scratch.give_vec(point);
    scratch.give_vec(edge);
    scratch.give_vec(circle_pos);
    collided
}

pub fn test_circle_polygon(
    scratch: &mut Scratch,
    circle: &Circle,
    polygon: &Polygon,
    mut response: Option<&mut Response>,
) -> bool {
    let collided = test_polygon_circle(scratch, polygon, circle, response.as_deref_mut());
    if collided {
        if let Some(response) = response {
            response.mirror();
        }
    }
    collided
}

pub fn test_polygon_polygon(
    scratch: &mut Scratch,
    a: &Polygon,
    b: &Polygon,
    mut response: Option<&mut Response>,
) -> bool {
    let a_points = a.calc_points();
    let b_points = b.calc_points();

    for &axis in a.normals().iter().chain(b.normals()) {
        if is_separating_axis(scratch, a.pos, b.pos, a_points, b_points, axis, response.as_deref_mut()) {
            return false;
        }
    }

    if let Some(response) = response {
        response.a = Some(ShapeKind::Polygon);
        response.b = Some(ShapeKind::Polygon);
        response.overlap_v = response.overlap_n * response.overlap;
    }
    true
}
