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

use crate::geometry::{Circle, Line2, Plane, Point2, Point3, Ray2, Ray3, Segment2, Segment3, Sphere};
use crate::query::{self, AarSide, SegmentBoxIntersection};

/// An axis-aligned box with `min <= max` componentwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<T: Float> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Float> Aabb<T> {
    pub fn new(min: Point3<T>, max: Point3<T>) -> Self {
        Self { min, max }
    }
}

impl Aabb<f32> {
    /// Closed-interval containment on every axis.
    pub fn contains_point(&self, p: Point3<f32>) -> bool {
        query::point::test_point_aab(
            p.x, p.y, p.z, self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        )
    }

    pub fn test_aab(&self, other: &Aabb<f32>) -> bool {
        query::boxes::test_aab_aab(
            self.min.x,
            self.min.y,
            self.min.z,
            self.max.x,
            self.max.y,
            self.max.z,
            other.min.x,
            other.min.y,
            other.min.z,
            other.max.x,
            other.max.y,
            other.max.z,
        )
    }

    pub fn test_plane(&self, plane: &Plane<f32>) -> bool {
        query::plane::test_aab_plane(
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z, plane.a,
            plane.b, plane.c, plane.d,
        )
    }

    pub fn test_sphere(&self, sphere: &Sphere<f32>) -> bool {
        query::boxes::test_aab_sphere(
            self.min.x,
            self.min.y,
            self.min.z,
            self.max.x,
            self.max.y,
            self.max.z,
            sphere.center.x,
            sphere.center.y,
            sphere.center.z,
            sphere.radius * sphere.radius,
        )
    }

    pub fn test_ray(&self, ray: &Ray3<f32>) -> bool {
        query::ray_box::test_ray_aab(
            ray.origin.x,
            ray.origin.y,
            ray.origin.z,
            ray.dir.x,
            ray.dir.y,
            ray.dir.z,
            self.min.x,
            self.min.y,
            self.min.z,
            self.max.x,
            self.max.y,
            self.max.z,
        )
    }

    /// Near/far ray parameters for the slab intersection.
    pub fn intersect_ray(&self, ray: &Ray3<f32>) -> Option<(f32, f32)> {
        query::ray_box::intersect_ray_aab(
            ray.origin.x,
            ray.origin.y,
            ray.origin.z,
            ray.dir.x,
            ray.dir.y,
            ray.dir.z,
            self.min.x,
            self.min.y,
            self.min.z,
            self.max.x,
            self.max.y,
            self.max.z,
        )
    }

    pub fn intersect_segment(&self, segment: &Segment3<f32>) -> SegmentBoxIntersection {
        query::ray_box::intersect_line_segment_aab(
            segment.a.x,
            segment.a.y,
            segment.a.z,
            segment.b.x,
            segment.b.y,
            segment.b.z,
            self.min.x,
            self.min.y,
            self.min.z,
            self.max.x,
            self.max.y,
            self.max.z,
        )
    }
}

/// An axis-aligned rectangle with `min <= max` componentwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aar<T: Float> {
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T: Float> Aar<T> {
    pub fn new(min: Point2<T>, max: Point2<T>) -> Self {
        Self { min, max }
    }
}

impl Aar<f32> {
    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        query::point::test_point_aar(p.x, p.y, self.min.x, self.min.y, self.max.x, self.max.y)
    }

    pub fn test_aar(&self, other: &Aar<f32>) -> bool {
        query::boxes::test_aar_aar(
            self.min.x,
            self.min.y,
            self.max.x,
            self.max.y,
            other.min.x,
            other.min.y,
            other.max.x,
            other.max.y,
        )
    }

    pub fn test_circle(&self, circle: &Circle<f32>) -> bool {
        query::boxes::test_aar_circle(
            self.min.x,
            self.min.y,
            self.max.x,
            self.max.y,
            circle.center.x,
            circle.center.y,
            circle.radius * circle.radius,
        )
    }

    pub fn test_line(&self, line: &Line2<f32>) -> bool {
        query::boxes::test_aar_line(
            self.min.x, self.min.y, self.max.x, self.max.y, line.a, line.b, line.c,
        )
    }

    pub fn test_ray(&self, ray: &Ray2<f32>) -> bool {
        query::ray_box::test_ray_aar(
            ray.origin.x,
            ray.origin.y,
            ray.dir.x,
            ray.dir.y,
            self.min.x,
            self.min.y,
            self.max.x,
            self.max.y,
        )
    }

    /// Near/far ray parameters plus the side the near intersection point is
    /// closest to.
    pub fn intersect_ray(&self, ray: &Ray2<f32>) -> Option<(f32, f32, AarSide)> {
        query::ray_box::intersect_ray_aar(
            ray.origin.x,
            ray.origin.y,
            ray.dir.x,
            ray.dir.y,
            self.min.x,
            self.min.y,
            self.max.x,
            self.max.y,
        )
    }

    pub fn intersect_segment(&self, segment: &Segment2<f32>) -> SegmentBoxIntersection {
        query::ray_box::intersect_line_segment_aar(
            segment.a.x,
            segment.a.y,
            segment.b.x,
            segment.b.y,
            self.min.x,
            self.min.y,
            self.max.x,
            self.max.y,
        )
    }
}
