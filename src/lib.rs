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

//! Separating axis collision tests for 2D games.
//!
//! Shapes live in `geom`: `Vec2`, `Circle`, convex `Polygon`s, and `Rect`s that
//! convert to polygons. The tests live in `sat` and answer whether two shapes
//! overlap, optionally filling a `Response` with the minimum translation needed
//! to separate them. `World` is a small all-pairs simulation built on top.
//!
//! ```
//! use sat2d::geom::{v2, Circle};
//! use sat2d::sat::{self, Response};
//!
//! let a = Circle::new(v2(0.0, 0.0), 20.0);
//! let b = Circle::new(v2(30.0, 0.0), 20.0);
//! let mut response = Response::new();
//! assert!(sat::test_circle_circle(&a, &b, Some(&mut response)));
//! assert_eq!(response.overlap_v, v2(10.0, 0.0));
//! ```

pub mod geom;
pub mod sat;
mod error;
mod world;

pub use crate::error::ShapeError;
pub use crate::world::*;
