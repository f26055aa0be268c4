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

use crate::geom::Vec2;
use crate::sat::Range;

/// Region of a point relative to a line segment that starts at the origin.
///
/// ```text
///          |    Middle    |
///   Left  [S]------------[E]  Right
///          |    Middle    |
/// ```
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum VoronoiRegion {
    /// Before the start of the segment.
    Left,
    /// Alongside the segment.
    Middle,
    /// Past the end of the segment.
    Right,
}

/// Projects `points` onto the unit vector `axis`, storing the extent of the
/// projection in `result`.
pub fn flatten_points_on(points: &[Vec2], axis: Vec2, result: &mut Range) {
    let mut min = f64::MAX;
    let mut max = -f64::MAX;
    for point in points {
        let dot = point.dot(axis);
        if dot < min {
            min = dot;
        }
        if dot > max {
            max = dot;
        }
    }
    result.min = min;
    result.max = max;
}

/// Classifies `point` against the segment from the origin to `line`.
/// Points exactly on a boundary count as `Middle`.
pub fn voronoi_region(line: Vec2, point: Vec2) -> VoronoiRegion {
    let len_sq = line.len_sq();
    let dp = point.dot(line);
    if dp < 0.0 {
        VoronoiRegion::Left
    } else if dp > len_sq {
        VoronoiRegion::Right
    } else {
        VoronoiRegion::Middle
    }
}
