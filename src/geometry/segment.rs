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

use crate::geometry::{Circle, Plane, Point2, Point3, Sphere, Triangle3};
use crate::query;

/// An undirected 2D line segment.
///
/// Swapping `a` and `b` never changes whether a query intersects, only the
/// parametrization of the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<T: Float> {
    pub a: Point2<T>,
    pub b: Point2<T>,
}

impl<T: Float> Segment2<T> {
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> T {
        self.a.distance(&self.b)
    }
}

impl Segment2<f32> {
    pub fn test_circle(&self, circle: &Circle<f32>) -> bool {
        query::circle::test_line_segment_circle(
            self.a.x,
            self.a.y,
            self.b.x,
            self.b.y,
            circle.center.x,
            circle.center.y,
            circle.radius,
        )
    }
}

/// An undirected 3D line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3<T: Float> {
    pub a: Point3<T>,
    pub b: Point3<T>,
}

impl<T: Float> Segment3<T> {
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> T {
        self.a.distance(&self.b)
    }
}

impl Segment3<f32> {
    pub fn test_triangle(&self, triangle: &Triangle3<f32>, epsilon: f32) -> bool {
        query::triangle::test_line_segment_triangle(
            self.a.x,
            self.a.y,
            self.a.z,
            self.b.x,
            self.b.y,
            self.b.z,
            triangle.v0.x,
            triangle.v0.y,
            triangle.v0.z,
            triangle.v1.x,
            triangle.v1.y,
            triangle.v1.z,
            triangle.v2.x,
            triangle.v2.y,
            triangle.v2.z,
            epsilon,
        )
    }

    pub fn intersect_triangle(
        &self,
        triangle: &Triangle3<f32>,
        epsilon: f32,
    ) -> Option<Point3<f32>> {
        query::triangle::intersect_line_segment_triangle(
            self.a.x,
            self.a.y,
            self.a.z,
            self.b.x,
            self.b.y,
            self.b.z,
            triangle.v0.x,
            triangle.v0.y,
            triangle.v0.z,
            triangle.v1.x,
            triangle.v1.y,
            triangle.v1.z,
            triangle.v2.x,
            triangle.v2.y,
            triangle.v2.z,
            epsilon,
        )
    }

    pub fn intersect_plane(&self, plane: &Plane<f32>) -> Option<Point3<f32>> {
        query::plane::intersect_line_segment_plane(
            self.a.x, self.a.y, self.a.z, self.b.x, self.b.y, self.b.z, plane.a, plane.b, plane.c,
            plane.d,
        )
    }

    pub fn test_sphere(&self, sphere: &Sphere<f32>) -> bool {
        query::sphere::test_line_segment_sphere(
            self.a.x,
            self.a.y,
            self.a.z,
            self.b.x,
            self.b.y,
            self.b.z,
            sphere.center.x,
            sphere.center.y,
            sphere.center.z,
            sphere.radius * sphere.radius,
        )
    }

    /// Point on this segment closest to `p`.
    pub fn closest_point(&self, p: Point3<f32>) -> Point3<f32> {
        query::closest::find_closest_point_on_line_segment(
            self.a.x, self.a.y, self.a.z, self.b.x, self.b.y, self.b.z, p.x, p.y, p.z,
        )
    }

    /// Closest pair of points between this segment and `other`, as
    /// `(point on self, point on other, squared distance)`.
    pub fn closest_points(&self, other: &Segment3<f32>) -> (Point3<f32>, Point3<f32>, f32) {
        query::closest::find_closest_points_line_segments(
            self.a.x, self.a.y, self.a.z, self.b.x, self.b.y, self.b.z, other.a.x, other.a.y,
            other.a.z, other.b.x, other.b.y, other.b.z,
        )
    }
}
