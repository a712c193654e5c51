// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 The isect developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Geometric primitive value types.
//!
//! All types are plain `Copy` structs generic over an IEEE-754 scalar. The
//! query engine operates on the `f32` instantiations; the wrapper methods on
//! these types delegate to the canonical scalar functions in [`crate::query`].

pub mod aabb;
pub mod obb;
pub mod plane;
pub mod point_2;
pub mod point_3;
pub mod ray;
pub mod segment;
pub mod sphere;
pub mod triangle;
pub mod vector_2;
pub mod vector_3;

pub use aabb::{Aabb, Aar};
pub use obb::OrientedBox;
pub use plane::{Line2, Plane};
pub use point_2::Point2;
pub use point_3::Point3;
pub use ray::{Ray2, Ray3};
pub use segment::{Segment2, Segment3};
pub use sphere::{Circle, Sphere};
pub use triangle::{Triangle2, Triangle3};
pub use vector_2::Vector2;
pub use vector_3::Vector3;
