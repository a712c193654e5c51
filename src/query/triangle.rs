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

//! Möller-Trumbore ray/triangle and segment/triangle queries.
//!
//! The `_front` variants cull backfaces: only a ray entering against the
//! CCW winding's normal counts, and the near-parallel rejection happens on
//! the signed determinant. The unsuffixed variants hit either face.

use crate::geometry::Point3;

/// Whether the ray hits the front face of the CCW triangle, at a distance
/// of at least `epsilon`.
pub fn test_ray_triangle_front(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
    epsilon: f32,
) -> bool {
    let edge1_x = v1_x - v0_x;
    let edge1_y = v1_y - v0_y;
    let edge1_z = v1_z - v0_z;
    let edge2_x = v2_x - v0_x;
    let edge2_y = v2_y - v0_y;
    let edge2_z = v2_z - v0_z;
    let pvec_x = dir_y * edge2_z - dir_z * edge2_y;
    let pvec_y = dir_z * edge2_x - dir_x * edge2_z;
    let pvec_z = dir_x * edge2_y - dir_y * edge2_x;
    let det = edge1_x * pvec_x + edge1_y * pvec_y + edge1_z * pvec_z;
    if det < epsilon {
        return false;
    }
    let tvec_x = origin_x - v0_x;
    let tvec_y = origin_y - v0_y;
    let tvec_z = origin_z - v0_z;
    let u = tvec_x * pvec_x + tvec_y * pvec_y + tvec_z * pvec_z;
    if u < 0.0 || u > det {
        return false;
    }
    let qvec_x = tvec_y * edge1_z - tvec_z * edge1_y;
    let qvec_y = tvec_z * edge1_x - tvec_x * edge1_z;
    let qvec_z = tvec_x * edge1_y - tvec_y * edge1_x;
    let v = dir_x * qvec_x + dir_y * qvec_y + dir_z * qvec_z;
    if v < 0.0 || u + v > det {
        return false;
    }
    let inv_det = 1.0 / det;
    let t = (edge2_x * qvec_x + edge2_y * qvec_y + edge2_z * qvec_z) * inv_det;
    t >= epsilon
}

/// Whether the ray hits either face of the triangle, at a distance of at
/// least `epsilon`.
pub fn test_ray_triangle(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
    epsilon: f32,
) -> bool {
    let edge1_x = v1_x - v0_x;
    let edge1_y = v1_y - v0_y;
    let edge1_z = v1_z - v0_z;
    let edge2_x = v2_x - v0_x;
    let edge2_y = v2_y - v0_y;
    let edge2_z = v2_z - v0_z;
    let pvec_x = dir_y * edge2_z - dir_z * edge2_y;
    let pvec_y = dir_z * edge2_x - dir_x * edge2_z;
    let pvec_z = dir_x * edge2_y - dir_y * edge2_x;
    let det = edge1_x * pvec_x + edge1_y * pvec_y + edge1_z * pvec_z;
    if det > -epsilon && det < epsilon {
        return false;
    }
    let tvec_x = origin_x - v0_x;
    let tvec_y = origin_y - v0_y;
    let tvec_z = origin_z - v0_z;
    let inv_det = 1.0 / det;
    let u = (tvec_x * pvec_x + tvec_y * pvec_y + tvec_z * pvec_z) * inv_det;
    if u < 0.0 || u > 1.0 {
        return false;
    }
    let qvec_x = tvec_y * edge1_z - tvec_z * edge1_y;
    let qvec_y = tvec_z * edge1_x - tvec_x * edge1_z;
    let qvec_z = tvec_x * edge1_y - tvec_y * edge1_x;
    let v = (dir_x * qvec_x + dir_y * qvec_y + dir_z * qvec_z) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return false;
    }
    let t = (edge2_x * qvec_x + edge2_y * qvec_y + edge2_z * qvec_z) * inv_det;
    t >= epsilon
}

/// Ray parameter `t` of the hit against the front face of the CCW
/// triangle. The barycentric bounds are checked against the unnormalized
/// determinant; `t` itself is not clamped and may be negative when the
/// triangle's plane lies behind the origin.
pub fn intersect_ray_triangle_front(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
    epsilon: f32,
) -> Option<f32> {
    let edge1_x = v1_x - v0_x;
    let edge1_y = v1_y - v0_y;
    let edge1_z = v1_z - v0_z;
    let edge2_x = v2_x - v0_x;
    let edge2_y = v2_y - v0_y;
    let edge2_z = v2_z - v0_z;
    let pvec_x = dir_y * edge2_z - dir_z * edge2_y;
    let pvec_y = dir_z * edge2_x - dir_x * edge2_z;
    let pvec_z = dir_x * edge2_y - dir_y * edge2_x;
    let det = edge1_x * pvec_x + edge1_y * pvec_y + edge1_z * pvec_z;
    if det <= epsilon {
        return None;
    }
    let tvec_x = origin_x - v0_x;
    let tvec_y = origin_y - v0_y;
    let tvec_z = origin_z - v0_z;
    let u = tvec_x * pvec_x + tvec_y * pvec_y + tvec_z * pvec_z;
    if u < 0.0 || u > det {
        return None;
    }
    let qvec_x = tvec_y * edge1_z - tvec_z * edge1_y;
    let qvec_y = tvec_z * edge1_x - tvec_x * edge1_z;
    let qvec_z = tvec_x * edge1_y - tvec_y * edge1_x;
    let v = dir_x * qvec_x + dir_y * qvec_y + dir_z * qvec_z;
    if v < 0.0 || u + v > det {
        return None;
    }
    let inv_det = 1.0 / det;
    Some((edge2_x * qvec_x + edge2_y * qvec_y + edge2_z * qvec_z) * inv_det)
}

/// Ray parameter `t` of the hit against either face of the triangle. `t`
/// may be negative when the triangle's plane lies behind the origin.
pub fn intersect_ray_triangle(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
    epsilon: f32,
) -> Option<f32> {
    let edge1_x = v1_x - v0_x;
    let edge1_y = v1_y - v0_y;
    let edge1_z = v1_z - v0_z;
    let edge2_x = v2_x - v0_x;
    let edge2_y = v2_y - v0_y;
    let edge2_z = v2_z - v0_z;
    let pvec_x = dir_y * edge2_z - dir_z * edge2_y;
    let pvec_y = dir_z * edge2_x - dir_x * edge2_z;
    let pvec_z = dir_x * edge2_y - dir_y * edge2_x;
    let det = edge1_x * pvec_x + edge1_y * pvec_y + edge1_z * pvec_z;
    if det > -epsilon && det < epsilon {
        return None;
    }
    let tvec_x = origin_x - v0_x;
    let tvec_y = origin_y - v0_y;
    let tvec_z = origin_z - v0_z;
    let inv_det = 1.0 / det;
    let u = (tvec_x * pvec_x + tvec_y * pvec_y + tvec_z * pvec_z) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }
    let qvec_x = tvec_y * edge1_z - tvec_z * edge1_y;
    let qvec_y = tvec_z * edge1_x - tvec_x * edge1_z;
    let qvec_z = tvec_x * edge1_y - tvec_y * edge1_x;
    let v = (dir_x * qvec_x + dir_y * qvec_y + dir_z * qvec_z) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    Some((edge2_x * qvec_x + edge2_y * qvec_y + edge2_z * qvec_z) * inv_det)
}

/// Whether the segment `p0 -> p1` crosses the triangle (either face).
pub fn test_line_segment_triangle(
    p0_x: f32,
    p0_y: f32,
    p0_z: f32,
    p1_x: f32,
    p1_y: f32,
    p1_z: f32,
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
    epsilon: f32,
) -> bool {
    let dir_x = p1_x - p0_x;
    let dir_y = p1_y - p0_y;
    let dir_z = p1_z - p0_z;
    match intersect_ray_triangle(
        p0_x, p0_y, p0_z, dir_x, dir_y, dir_z, v0_x, v0_y, v0_z, v1_x, v1_y, v1_z, v2_x, v2_y,
        v2_z, epsilon,
    ) {
        Some(t) => (0.0..=1.0).contains(&t),
        None => false,
    }
}

/// Point where the segment `p0 -> p1` crosses the triangle (either face),
/// if it does.
pub fn intersect_line_segment_triangle(
    p0_x: f32,
    p0_y: f32,
    p0_z: f32,
    p1_x: f32,
    p1_y: f32,
    p1_z: f32,
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
    epsilon: f32,
) -> Option<Point3<f32>> {
    let dir_x = p1_x - p0_x;
    let dir_y = p1_y - p0_y;
    let dir_z = p1_z - p0_z;
    let t = intersect_ray_triangle(
        p0_x, p0_y, p0_z, dir_x, dir_y, dir_z, v0_x, v0_y, v0_z, v1_x, v1_y, v1_z, v2_x, v2_y,
        v2_z, epsilon,
    )?;
    if (0.0..=1.0).contains(&t) {
        return Some(Point3::new(
            p0_x + dir_x * t,
            p0_y + dir_y * t,
            p0_z + dir_z * t,
        ));
    }
    None
}
