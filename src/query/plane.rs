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

//! Plane queries: spheres, swept spheres, boxes, rays and segments against
//! the plane `a*x + b*y + c*z + d = 0`.
//!
//! The swept-sphere routines use the `a*x + b*y + c*z = d` convention
//! instead; their `d` is the negation of the general-form constant.

use crate::geometry::Point3;

/// Whether the sphere intersects the plane. The plane equation need not be
/// normalized.
pub fn test_plane_sphere(
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    radius: f32,
) -> bool {
    let denom = (a * a + b * b + c * c).sqrt();
    let dist = (a * center_x + b * center_y + c * center_z + d) / denom;
    -radius <= dist && dist <= radius
}

/// Circle of intersection between a plane and a sphere, as
/// `(circle center, circle radius)`.
pub fn intersect_plane_sphere(
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    radius: f32,
) -> Option<(Point3<f32>, f32)> {
    let inv_denom = 1.0 / (a * a + b * b + c * c).sqrt();
    let dist = (a * center_x + b * center_y + c * center_z + d) * inv_denom;
    if -radius <= dist && dist <= radius {
        let center = Point3::new(
            center_x + dist * a * inv_denom,
            center_y + dist * b * inv_denom,
            center_z + dist * c * inv_denom,
        );
        let r = (radius * radius - dist * dist).sqrt();
        return Some((center, r));
    }
    None
}

/// First contact of a sphere moving with velocity `(vx, vy, vz)` against
/// the plane `a*x + b*y + c*z = d` (normalized equation required), as
/// `(contact point, time)`. A sphere already overlapping the plane reports
/// its center at time zero.
pub fn intersect_plane_swept_sphere(
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    c_x: f32,
    c_y: f32,
    c_z: f32,
    radius: f32,
    v_x: f32,
    v_y: f32,
    v_z: f32,
) -> Option<(Point3<f32>, f32)> {
    let dist = a * c_x + b * c_y + c * c_z - d;
    if dist.abs() <= radius {
        return Some((Point3::new(c_x, c_y, c_z), 0.0));
    }
    let denom = a * v_x + b * v_y + c * v_z;
    if denom * dist >= 0.0 {
        // moving parallel to or away from the plane
        return None;
    }
    // use +r when the sphere is in front of the plane, else -r
    let r = if dist > 0.0 { radius } else { -radius };
    let t = (r - dist) / denom;
    let p = Point3::new(
        c_x + t * v_x - r * a,
        c_y + t * v_y - r * b,
        c_z + t * v_z - r * c,
    );
    Some((p, t))
}

/// Whether a sphere moving from `t0` to `t1` crosses or touches the plane
/// `a*x + b*y + c*z = d` (normalized equation required).
pub fn test_plane_swept_sphere(
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    t0_x: f32,
    t0_y: f32,
    t0_z: f32,
    r: f32,
    t1_x: f32,
    t1_y: f32,
    t1_z: f32,
) -> bool {
    let adist = t0_x * a + t0_y * b + t0_z * c - d;
    let bdist = t1_x * a + t1_y * b + t1_z * c - d;
    // opposite sides of the plane
    if adist * bdist < 0.0 {
        return true;
    }
    // start or end position within radius
    adist.abs() <= r || bdist.abs() <= r
}

/// Whether the axis-aligned box `[min, max]` intersects the plane, via the
/// p/n-vertex test.
pub fn test_aab_plane(
    min_x: f32,
    min_y: f32,
    min_z: f32,
    max_x: f32,
    max_y: f32,
    max_z: f32,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
) -> bool {
    let (p_x, n_x) = if a > 0.0 { (max_x, min_x) } else { (min_x, max_x) };
    let (p_y, n_y) = if b > 0.0 { (max_y, min_y) } else { (min_y, max_y) };
    let (p_z, n_z) = if c > 0.0 { (max_z, min_z) } else { (min_z, max_z) };
    let dist_n = d + a * n_x + b * n_y + c * n_z;
    let dist_p = d + a * p_x + b * p_y + c * p_z;
    dist_n <= 0.0 && dist_p >= 0.0
}

/// Parametric `t` at which the ray hits the front face of the plane, or
/// `None` when the ray points away from or along the plane. Only a ray
/// direction with a negative dot against the plane normal can hit.
pub fn intersect_ray_plane(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
) -> Option<f32> {
    let denom = a * dir_x + b * dir_y + c * dir_z;
    if denom < 0.0 {
        let t = -(a * origin_x + b * origin_y + c * origin_z + d) / denom;
        if t >= 0.0 {
            return Some(t);
        }
    }
    None
}

/// Point-normal form of [`intersect_ray_plane`]. `epsilon` is the upper
/// bound on the normal/direction dot product below which the ray counts as
/// approaching the front face.
pub fn intersect_ray_plane_point_normal(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    point_x: f32,
    point_y: f32,
    point_z: f32,
    normal_x: f32,
    normal_y: f32,
    normal_z: f32,
    epsilon: f32,
) -> Option<f32> {
    let denom = normal_x * dir_x + normal_y * dir_y + normal_z * dir_z;
    if denom < epsilon {
        let t = ((point_x - origin_x) * normal_x
            + (point_y - origin_y) * normal_y
            + (point_z - origin_z) * normal_z)
            / denom;
        if t >= 0.0 {
            return Some(t);
        }
    }
    None
}

/// Point where the segment `p0 -> p1` crosses the plane, if it does.
pub fn intersect_line_segment_plane(
    p0_x: f32,
    p0_y: f32,
    p0_z: f32,
    p1_x: f32,
    p1_y: f32,
    p1_z: f32,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
) -> Option<Point3<f32>> {
    let dir_x = p1_x - p0_x;
    let dir_y = p1_y - p0_y;
    let dir_z = p1_z - p0_z;
    let denom = a * dir_x + b * dir_y + c * dir_z;
    let t = -(a * p0_x + b * p0_y + c * p0_z + d) / denom;
    if (0.0..=1.0).contains(&t) {
        return Some(Point3::new(
            p0_x + t * dir_x,
            p0_y + t * dir_y,
            p0_z + t * dir_z,
        ));
    }
    None
}
