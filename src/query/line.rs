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

//! 2D line, ray and segment intersections.

use crate::geometry::Point2;

/// Ray parameter `t` of the hit against the front side of the 2D line
/// through `(point_x, point_y)` with normal `(normal_x, normal_y)`.
/// `epsilon` is the upper bound on the normal/direction dot product below
/// which the ray counts as approaching the front side.
pub fn intersect_ray_line(
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
    point_x: f32,
    point_y: f32,
    normal_x: f32,
    normal_y: f32,
    epsilon: f32,
) -> Option<f32> {
    let denom = normal_x * dir_x + normal_y * dir_y;
    if denom < epsilon {
        let t = ((point_x - origin_x) * normal_x + (point_y - origin_y) * normal_y) / denom;
        if t >= 0.0 {
            return Some(t);
        }
    }
    None
}

/// Ray parameter `t` of the hit against the segment `a -> b`. A ray
/// parallel to the segment produces infinite parameters that fail the
/// range checks.
pub fn intersect_ray_line_segment(
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
    a_x: f32,
    a_y: f32,
    b_x: f32,
    b_y: f32,
) -> Option<f32> {
    let v1_x = origin_x - a_x;
    let v1_y = origin_y - a_y;
    let v2_x = b_x - a_x;
    let v2_y = b_y - a_y;
    let inv_v23 = 1.0 / (v2_y * dir_x - v2_x * dir_y);
    let t1 = (v2_x * v1_y - v2_y * v1_x) * inv_v23;
    let t2 = (v1_y * dir_x - v1_x * dir_y) * inv_v23;
    if t1 >= 0.0 && t2 >= 0.0 && t2 <= 1.0 {
        return Some(t1);
    }
    None
}

/// Intersection point of the two infinite lines through `ps1 -> pe1` and
/// `ps2 -> pe2`. Parallel (or coincident) lines have a zero determinant
/// and no single intersection point.
pub fn intersect_line_line(
    ps1_x: f32,
    ps1_y: f32,
    pe1_x: f32,
    pe1_y: f32,
    ps2_x: f32,
    ps2_y: f32,
    pe2_x: f32,
    pe2_y: f32,
) -> Option<Point2<f32>> {
    let d1_x = ps1_x - pe1_x;
    let d1_y = pe1_y - ps1_y;
    let d1_ps1 = d1_y * ps1_x + d1_x * ps1_y;
    let d2_x = ps2_x - pe2_x;
    let d2_y = pe2_y - ps2_y;
    let d2_ps2 = d2_y * ps2_x + d2_x * ps2_y;
    let det = d1_y * d2_x - d2_y * d1_x;
    if det == 0.0 {
        return None;
    }
    Some(Point2::new(
        (d2_x * d1_ps1 - d1_x * d2_ps2) / det,
        (d1_y * d2_ps2 - d2_y * d1_ps1) / det,
    ))
}
