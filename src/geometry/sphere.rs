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

use crate::geometry::{Point2, Point3, Ray2, Ray3, Triangle3, Vector2, Vector3};
use crate::query::{self, PointOnTriangle};

/// A sphere with center and non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere<T: Float> {
    pub center: Point3<T>,
    pub radius: T,
}

impl<T: Float> Sphere<T> {
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Self { center, radius }
    }
}

impl Sphere<f32> {
    /// Closed-ball containment.
    pub fn contains_point(&self, p: Point3<f32>) -> bool {
        query::point::test_point_sphere(
            p.x,
            p.y,
            p.z,
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius * self.radius,
        )
    }

    pub fn test_sphere(&self, other: &Sphere<f32>) -> bool {
        query::sphere::test_sphere_sphere(
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius * self.radius,
            other.center.x,
            other.center.y,
            other.center.z,
            other.radius * other.radius,
        )
    }

    /// Circle of intersection with `other`, as `(center, radius)`.
    pub fn intersect_sphere(&self, other: &Sphere<f32>) -> Option<(Point3<f32>, f32)> {
        query::sphere::intersect_sphere_sphere(
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius * self.radius,
            other.center.x,
            other.center.y,
            other.center.z,
            other.radius * other.radius,
        )
    }

    /// Contact point and triangle feature if this sphere touches `triangle`.
    pub fn intersect_triangle(
        &self,
        triangle: &Triangle3<f32>,
    ) -> Option<(Point3<f32>, PointOnTriangle)> {
        query::sphere::intersect_sphere_triangle(
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius,
            triangle.v0.x,
            triangle.v0.y,
            triangle.v0.z,
            triangle.v1.x,
            triangle.v1.y,
            triangle.v1.z,
            triangle.v2.x,
            triangle.v2.y,
            triangle.v2.z,
        )
    }

    /// Requires `ray.dir` to be normalized.
    pub fn test_ray(&self, ray: &Ray3<f32>) -> bool {
        query::sphere::test_ray_sphere(
            ray.origin.x,
            ray.origin.y,
            ray.origin.z,
            ray.dir.x,
            ray.dir.y,
            ray.dir.z,
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius * self.radius,
        )
    }

    /// Near/far ray parameters; requires `ray.dir` to be normalized.
    pub fn intersect_ray(&self, ray: &Ray3<f32>) -> Option<(f32, f32)> {
        query::sphere::intersect_ray_sphere(
            ray.origin.x,
            ray.origin.y,
            ray.origin.z,
            ray.dir.x,
            ray.dir.y,
            ray.dir.z,
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius * self.radius,
        )
    }

    /// Earliest contact of this sphere moving with `velocity` against
    /// `triangle`, as `(contact point, t, feature)`.
    pub fn intersect_swept_triangle(
        &self,
        velocity: Vector3<f32>,
        triangle: &Triangle3<f32>,
        epsilon: f32,
        max_t: f32,
    ) -> Option<(Point3<f32>, f32, PointOnTriangle)> {
        query::swept::intersect_swept_sphere_triangle(
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius,
            velocity.x,
            velocity.y,
            velocity.z,
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
            max_t,
        )
    }
}

/// A circle with center and non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T: Float> {
    pub center: Point2<T>,
    pub radius: T,
}

impl<T: Float> Circle<T> {
    pub fn new(center: Point2<T>, radius: T) -> Self {
        Self { center, radius }
    }
}

impl Circle<f32> {
    /// Closed-disk containment.
    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        query::point::test_point_circle(
            p.x,
            p.y,
            self.center.x,
            self.center.y,
            self.radius * self.radius,
        )
    }

    pub fn test_circle(&self, other: &Circle<f32>) -> bool {
        query::circle::test_circle_circle(
            self.center.x,
            self.center.y,
            self.radius,
            other.center.x,
            other.center.y,
            other.radius,
        )
    }

    /// Chord of intersection with `other`, as `(center, half length)`.
    pub fn intersect_circle(&self, other: &Circle<f32>) -> Option<(Point2<f32>, f32)> {
        query::circle::intersect_circle_circle(
            self.center.x,
            self.center.y,
            self.radius * self.radius,
            other.center.x,
            other.center.y,
            other.radius * other.radius,
        )
    }

    /// Requires `ray.dir` to be normalized.
    pub fn test_ray(&self, ray: &Ray2<f32>) -> bool {
        query::circle::test_ray_circle(
            ray.origin.x,
            ray.origin.y,
            ray.dir.x,
            ray.dir.y,
            self.center.x,
            self.center.y,
            self.radius * self.radius,
        )
    }

    /// Near/far ray parameters; requires `ray.dir` to be normalized.
    pub fn intersect_ray(&self, ray: &Ray2<f32>) -> Option<(f32, f32)> {
        query::circle::intersect_ray_circle(
            ray.origin.x,
            ray.origin.y,
            ray.dir.x,
            ray.dir.y,
            self.center.x,
            self.center.y,
            self.radius * self.radius,
        )
    }

    /// Whether this circle, moving by `movement`, hits the static `other`.
    pub fn test_moving_circle(&self, movement: Vector2<f32>, other: &Circle<f32>) -> bool {
        query::swept::test_moving_circle_circle(
            self.center.x,
            self.center.y,
            movement.x,
            movement.y,
            self.radius,
            other.center.x,
            other.center.y,
            other.radius,
        )
    }
}
