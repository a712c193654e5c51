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

use crate::geometry::{Plane, Point2, Point3, Segment2, Triangle3, Vector2, Vector3};
use crate::query;

/// A 2D ray with origin and direction.
///
/// The direction is caller-supplied; routines that require it to be
/// normalized say so in their documentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<T: Float> {
    pub origin: Point2<T>,
    pub dir: Vector2<T>,
}

impl<T: Float> Ray2<T> {
    pub fn new(origin: Point2<T>, dir: Vector2<T>) -> Self {
        Self { origin, dir }
    }

    /// Point along the ray at parameter `t`.
    pub fn at(&self, t: T) -> Point2<T> {
        self.origin + self.dir * t
    }
}

impl Ray2<f32> {
    /// Intersection with the line through `point` with normal `normal`,
    /// approaching from the front side only.
    pub fn intersect_line(
        &self,
        point: Point2<f32>,
        normal: Vector2<f32>,
        epsilon: f32,
    ) -> Option<f32> {
        query::line::intersect_ray_line(
            self.origin.x,
            self.origin.y,
            self.dir.x,
            self.dir.y,
            point.x,
            point.y,
            normal.x,
            normal.y,
            epsilon,
        )
    }

    pub fn intersect_line_segment(&self, segment: &Segment2<f32>) -> Option<f32> {
        query::line::intersect_ray_line_segment(
            self.origin.x,
            self.origin.y,
            self.dir.x,
            self.dir.y,
            segment.a.x,
            segment.a.y,
            segment.b.x,
            segment.b.y,
        )
    }

    /// Nearest intersection with the closed polygon `vertices`, as
    /// `(edge index, intersection point)`.
    pub fn intersect_polygon(&self, vertices: &[Point2<f32>]) -> Option<(usize, Point2<f32>)> {
        query::polygon::intersect_polygon_ray(
            vertices,
            self.origin.x,
            self.origin.y,
            self.dir.x,
            self.dir.y,
        )
    }
}

/// A 3D ray with origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3<T: Float> {
    pub origin: Point3<T>,
    pub dir: Vector3<T>,
}

impl<T: Float> Ray3<T> {
    pub fn new(origin: Point3<T>, dir: Vector3<T>) -> Self {
        Self { origin, dir }
    }

    pub fn at(&self, t: T) -> Point3<T> {
        self.origin + self.dir * t
    }
}

impl Ray3<f32> {
    /// Intersection with a plane approached from the front
    /// (`normal . dir < 0`).
    pub fn intersect_plane(&self, plane: &Plane<f32>) -> Option<f32> {
        query::plane::intersect_ray_plane(
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.dir.x,
            self.dir.y,
            self.dir.z,
            plane.a,
            plane.b,
            plane.c,
            plane.d,
        )
    }

    /// Point-normal variant of [`Ray3::intersect_plane`]; `epsilon` bounds
    /// the front-approach test on the normal/direction dot product.
    pub fn intersect_plane_point_normal(
        &self,
        point: Point3<f32>,
        normal: Vector3<f32>,
        epsilon: f32,
    ) -> Option<f32> {
        query::plane::intersect_ray_plane_point_normal(
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.dir.x,
            self.dir.y,
            self.dir.z,
            point.x,
            point.y,
            point.z,
            normal.x,
            normal.y,
            normal.z,
            epsilon,
        )
    }

    pub fn test_triangle(&self, triangle: &Triangle3<f32>, epsilon: f32) -> bool {
        query::triangle::test_ray_triangle(
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.dir.x,
            self.dir.y,
            self.dir.z,
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

    /// Like [`Ray3::test_triangle`] but culls triangles facing away from the
    /// ray (only front-facing CCW triangles hit).
    pub fn test_triangle_front(&self, triangle: &Triangle3<f32>, epsilon: f32) -> bool {
        query::triangle::test_ray_triangle_front(
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.dir.x,
            self.dir.y,
            self.dir.z,
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

    pub fn intersect_triangle(&self, triangle: &Triangle3<f32>, epsilon: f32) -> Option<f32> {
        query::triangle::intersect_ray_triangle(
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.dir.x,
            self.dir.y,
            self.dir.z,
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

    pub fn intersect_triangle_front(&self, triangle: &Triangle3<f32>, epsilon: f32) -> Option<f32> {
        query::triangle::intersect_ray_triangle_front(
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.dir.x,
            self.dir.y,
            self.dir.z,
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
}
