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

use num_traits::Float;

use crate::geometry::{Circle, Plane, Point2, Point3};
use crate::query::{self, PointOnTriangle};

/// A 2D triangle. CCW winding is required by the circle/triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<T: Float> {
    pub v0: Point2<T>,
    pub v1: Point2<T>,
    pub v2: Point2<T>,
}

impl<T: Float> Triangle2<T> {
    pub fn new(v0: Point2<T>, v1: Point2<T>, v2: Point2<T>) -> Self {
        Self { v0, v1, v2 }
    }
}

impl Triangle2<f32> {
    /// Edge-sign containment test; points on edges and vertices count as
    /// inside.
    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        query::point::test_point_triangle(
            p.x, p.y, self.v0.x, self.v0.y, self.v1.x, self.v1.y, self.v2.x, self.v2.y,
        )
    }

    /// Closest point on this triangle together with the Voronoi region it
    /// falls in.
    pub fn closest_point(&self, p: Point2<f32>) -> (Point2<f32>, PointOnTriangle) {
        query::closest::find_closest_point_on_triangle_2d(
            self.v0.x, self.v0.y, self.v1.x, self.v1.y, self.v2.x, self.v2.y, p.x, p.y,
        )
    }

    /// Requires CCW winding.
    pub fn test_circle(&self, circle: &Circle<f32>) -> bool {
        query::circle::test_circle_triangle(
            circle.center.x,
            circle.center.y,
            circle.radius * circle.radius,
            self.v0.x,
            self.v0.y,
            self.v1.x,
            self.v1.y,
            self.v2.x,
            self.v2.y,
        )
    }
}

/// A 3D triangle. Winding matters for the backface-culling ray tests and
/// for the sign of the derived plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3<T: Float> {
    pub v0: Point3<T>,
    pub v1: Point3<T>,
    pub v2: Point3<T>,
}

impl<T: Float> Triangle3<T> {
    pub fn new(v0: Point3<T>, v1: Point3<T>, v2: Point3<T>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Plane containing this triangle, normal per CCW winding.
    pub fn plane(&self) -> Plane<T> {
        Plane::from_points(self.v0, self.v1, self.v2)
    }
}

impl Triangle3<f32> {
    /// Closest point on this triangle together with the Voronoi region it
    /// falls in.
    pub fn closest_point(&self, p: Point3<f32>) -> (Point3<f32>, PointOnTriangle) {
        query::closest::find_closest_point_on_triangle(
            self.v0.x, self.v0.y, self.v0.z, self.v1.x, self.v1.y, self.v1.z, self.v2.x, self.v2.y,
            self.v2.z, p.x, p.y, p.z,
        )
    }

    /// Signed distance of `p` to the plane of this triangle; positive on
    /// the front (normal) side of the CCW winding.
    pub fn distance_to_point(&self, p: Point3<f32>) -> f32 {
        query::point::distance_point_triangle_plane(
            p.x, p.y, p.z, self.v0.x, self.v0.y, self.v0.z, self.v1.x, self.v1.y, self.v1.z,
            self.v2.x, self.v2.y, self.v2.z,
        )
    }
}
