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

/// Describes why a polygon does not satisfy the preconditions of the collision tests.
///
/// Only produced by the opt-in checks (`Polygon::validate` and `Polygon::try_new`).
/// The collision tests themselves never validate their input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A polygon needs at least three distinct points to enclose any area.
    #[error("polygon has {0} distinct points, at least 3 are required")]
    TooFewPoints(usize),
    /// The points are collinear.
    #[error("polygon has zero area")]
    ZeroArea,
    /// The points wind clockwise.
    #[error("polygon points are in clockwise order, counter-clockwise is required")]
    Clockwise,
    /// The polygon turns the wrong way at the given vertex.
    #[error("polygon is not convex at vertex {0}")]
    NotConvex(usize),
}
