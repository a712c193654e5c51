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

use crate::geometry::{Point2, Point3, Sphere, Vector3};
use crate::query;

/// A plane given by the coefficients of `a*x + b*y + c*z + d = 0`.
///
/// `(a, b, c)` must be unit length for the routines that compute true
/// Euclidean distances; the per-routine documentation states where this is
/// required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: Float> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: Float> Plane<T> {
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Build the (unnormalized) plane containing the CCW triangle
    /// `(v0, v1, v2)`, with the normal pointing to the front side.
    pub fn from_points(v0: Point3<T>, v1: Point3<T>, v2: Point3<T>) -> Self {
        let n = (v1 - v0).cross(&(v2 - v0));
        Self {
            a: n.x,
            b: n.y,
            c: n.z,
            d: -n.dot(&v0.to_vector()),
        }
    }

    pub fn normal(&self) -> Vector3<T> {
        Vector3::new(self.a, self.b, self.c)
    }
}

impl Plane<f32> {
    /// Signed distance of `p` to this plane, positive on the side the
    /// normal points toward. Exact only for unit-length `(a, b, c)`.
    pub fn distance_to_point(&self, p: Point3<f32>) -> f32 {
        query::point::distance_point_plane(p.x, p.y, p.z, self.a, self.b, self.c, self.d)
    }

    pub fn test_sphere(&self, sphere: &Sphere<f32>) -> bool {
        query::plane::test_plane_sphere(
            self.a,
            self.b,
            self.c,
            self.d,
            sphere.center.x,
            sphere.center.y,
            sphere.center.z,
            sphere.radius,
        )
    }

    /// Circle of intersection with `sphere`, as `(center, radius)`.
    pub fn intersect_sphere(&self, sphere: &Sphere<f32>) -> Option<(Point3<f32>, f32)> {
        query::plane::intersect_plane_sphere(
            self.a,
            self.b,
            self.c,
            self.d,
            sphere.center.x,
            sphere.center.y,
            sphere.center.z,
            sphere.radius,
        )
    }

    /// Earliest contact of a sphere moving with `velocity` against this
    /// plane, as `(contact point, t)`. The plane is interpreted as
    /// `a*x + b*y + c*z = d` with unit `(a, b, c)`.
    pub fn intersect_swept_sphere(
        &self,
        sphere: &Sphere<f32>,
        velocity: Vector3<f32>,
    ) -> Option<(Point3<f32>, f32)> {
        query::plane::intersect_plane_swept_sphere(
            self.a,
            self.b,
            self.c,
            self.d,
            sphere.center.x,
            sphere.center.y,
            sphere.center.z,
            sphere.radius,
            velocity.x,
            velocity.y,
            velocity.z,
        )
    }

    /// Whether a sphere of radius `radius` moving from `t0` to `t1` crosses
    /// this plane. Same `a*x + b*y + c*z = d` convention as
    /// [`Plane::intersect_swept_sphere`].
    pub fn test_swept_sphere(&self, t0: Point3<f32>, radius: f32, t1: Point3<f32>) -> bool {
        query::plane::test_plane_swept_sphere(
            self.a, self.b, self.c, self.d, t0.x, t0.y, t0.z, radius, t1.x, t1.y, t1.z,
        )
    }
}

/// A 2D line given by the coefficients of `a*x + b*y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<T: Float> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Float> Line2<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Build the (unnormalized) line through `p0` and `p1`.
    pub fn from_points(p0: Point2<T>, p1: Point2<T>) -> Self {
        let a = p0.y - p1.y;
        let b = p1.x - p0.x;
        Self {
            a,
            b,
            c: -b * p0.y - a * p0.x,
        }
    }
}

impl Line2<f32> {
    /// Signed distance of `p` to this line. Exact only for unit `(a, b)`.
    pub fn distance_to_point(&self, p: Point2<f32>) -> f32 {
        query::point::distance_point_line(p.x, p.y, self.a, self.b, self.c)
    }
}
