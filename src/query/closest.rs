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

//! Closest-point queries on planes, segments, triangles and rectangles.

use crate::geometry::{Point2, Point3};
use crate::query::PointOnTriangle;

/// Orthogonal projection of `p` onto the plane through `(a_x, a_y, a_z)`
/// with unit normal `(n_x, n_y, n_z)`.
pub fn find_closest_point_on_plane(
    a_x: f32,
    a_y: f32,
    a_z: f32,
    n_x: f32,
    n_y: f32,
    n_z: f32,
    p_x: f32,
    p_y: f32,
    p_z: f32,
) -> Point3<f32> {
    let d = -(n_x * a_x + n_y * a_y + n_z * a_z);
    let t = n_x * p_x + n_y * p_y + n_z * p_z - d;
    Point3::new(p_x - t * n_x, p_y - t * n_y, p_z - t * n_z)
}

/// Closest point to `p` on the segment `a -> b`, clamping the projection
/// parameter to `[0, 1]`.
pub fn find_closest_point_on_line_segment(
    a_x: f32,
    a_y: f32,
    a_z: f32,
    b_x: f32,
    b_y: f32,
    b_z: f32,
    p_x: f32,
    p_y: f32,
    p_z: f32,
) -> Point3<f32> {
    let ab_x = b_x - a_x;
    let ab_y = b_y - a_y;
    let ab_z = b_z - a_z;
    let mut t = ((p_x - a_x) * ab_x + (p_y - a_y) * ab_y + (p_z - a_z) * ab_z)
        / (ab_x * ab_x + ab_y * ab_y + ab_z * ab_z);
    if t < 0.0 {
        t = 0.0;
    }
    if t > 1.0 {
        t = 1.0;
    }
    Point3::new(a_x + t * ab_x, a_y + t * ab_y, a_z + t * ab_z)
}

/// Closest points between the segments `a0 -> a1` and `b0 -> b1`, as
/// `(point on a, point on b, squared distance)`.
///
/// Segments degenerating into points get their own branches; otherwise the
/// 2x2 system from the dot-product formulation is solved, clamping each
/// parameter to `[0, 1]` and re-solving the other when one clamps.
pub fn find_closest_points_line_segments(
    a0_x: f32,
    a0_y: f32,
    a0_z: f32,
    a1_x: f32,
    a1_y: f32,
    a1_z: f32,
    b0_x: f32,
    b0_y: f32,
    b0_z: f32,
    b1_x: f32,
    b1_y: f32,
    b1_z: f32,
) -> (Point3<f32>, Point3<f32>, f32) {
    const EPSILON: f32 = 1e-5;
    let d1x = a1_x - a0_x;
    let d1y = a1_y - a0_y;
    let d1z = a1_z - a0_z;
    let d2x = b1_x - b0_x;
    let d2y = b1_y - b0_y;
    let d2z = b1_z - b0_z;
    let r_x = a0_x - b0_x;
    let r_y = a0_y - b0_y;
    let r_z = a0_z - b0_z;
    let a = d1x * d1x + d1y * d1y + d1z * d1z;
    let e = d2x * d2x + d2y * d2y + d2z * d2z;
    let f = d2x * r_x + d2y * r_y + d2z * r_z;
    let s;
    let mut t;
    if a <= EPSILON && e <= EPSILON {
        // both segments degenerate into points
        let result_a = Point3::new(a0_x, a0_y, a0_z);
        let result_b = Point3::new(b0_x, b0_y, b0_z);
        let dist = result_a.distance_squared(&result_b);
        return (result_a, result_b, dist);
    }
    if a <= EPSILON {
        // first segment degenerates into a point
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1x * r_x + d1y * r_y + d1z * r_z;
        if e <= EPSILON {
            // second segment degenerates into a point
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1x * d2x + d1y * d2y + d1z * d2z;
            let denom = a * e - b * b;
            // if the segments are not parallel, compute the closest point
            // on L1 to L2 and clamp to segment S1; else pick arbitrary s
            let mut s0 = if denom != 0.0 {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            // t = ((P1 + D1*s) - P2).D2 / D2.D2 = (b*s + f) / e
            t = (b * s0 + f) / e;
            // if t in [0,1] done, else clamp t and recompute s
            if t < 0.0 {
                t = 0.0;
                s0 = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s0 = ((b - c) / a).clamp(0.0, 1.0);
            }
            s = s0;
        }
    }
    let result_a = Point3::new(a0_x + d1x * s, a0_y + d1y * s, a0_z + d1z * s);
    let result_b = Point3::new(b0_x + d2x * t, b0_y + d2y * t, b0_z + d2z * t);
    let d_x = result_a.x - result_b.x;
    let d_y = result_a.y - result_b.y;
    let d_z = result_a.z - result_b.z;
    (result_a, result_b, d_x * d_x + d_y * d_y + d_z * d_z)
}

/// Closest point to `p` on the triangle `(v0, v1, v2)` and the Voronoi
/// region it lies in.
///
/// The regions are tried in the fixed order vertex 0, vertex 1, edge 01,
/// vertex 2, edge 20, edge 12, face; the `<=`/`>=` boundary comparisons
/// make the earlier region win on a tie.
pub fn find_closest_point_on_triangle(
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
    p_x: f32,
    p_y: f32,
    p_z: f32,
) -> (Point3<f32>, PointOnTriangle) {
    let ab_x = v1_x - v0_x;
    let ab_y = v1_y - v0_y;
    let ab_z = v1_z - v0_z;
    let ac_x = v2_x - v0_x;
    let ac_y = v2_y - v0_y;
    let ac_z = v2_z - v0_z;
    let ap_x = p_x - v0_x;
    let ap_y = p_y - v0_y;
    let ap_z = p_z - v0_z;
    let d1 = ab_x * ap_x + ab_y * ap_y + ab_z * ap_z;
    let d2 = ac_x * ap_x + ac_y * ap_y + ac_z * ap_z;
    if d1 <= 0.0 && d2 <= 0.0 {
        return (Point3::new(v0_x, v0_y, v0_z), PointOnTriangle::Vertex0);
    }
    let bp_x = p_x - v1_x;
    let bp_y = p_y - v1_y;
    let bp_z = p_z - v1_z;
    let d3 = ab_x * bp_x + ab_y * bp_y + ab_z * bp_z;
    let d4 = ac_x * bp_x + ac_y * bp_y + ac_z * bp_z;
    if d3 >= 0.0 && d4 <= d3 {
        return (Point3::new(v1_x, v1_y, v1_z), PointOnTriangle::Vertex1);
    }
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return (
            Point3::new(v0_x + v * ab_x, v0_y + v * ab_y, v0_z + v * ab_z),
            PointOnTriangle::Edge01,
        );
    }
    let cp_x = p_x - v2_x;
    let cp_y = p_y - v2_y;
    let cp_z = p_z - v2_z;
    let d5 = ab_x * cp_x + ab_y * cp_y + ab_z * cp_z;
    let d6 = ac_x * cp_x + ac_y * cp_y + ac_z * cp_z;
    if d6 >= 0.0 && d5 <= d6 {
        return (Point3::new(v2_x, v2_y, v2_z), PointOnTriangle::Vertex2);
    }
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return (
            Point3::new(v0_x + w * ac_x, v0_y + w * ac_y, v0_z + w * ac_z),
            PointOnTriangle::Edge20,
        );
    }
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
        let w = (d4 - d3) / (d4 - d3 + d5 - d6);
        return (
            Point3::new(
                v1_x + w * (v2_x - v1_x),
                v1_y + w * (v2_y - v1_y),
                v1_z + w * (v2_z - v1_z),
            ),
            PointOnTriangle::Edge12,
        );
    }
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    (
        Point3::new(
            v0_x + ab_x * v + ac_x * w,
            v0_y + ab_y * v + ac_y * w,
            v0_z + ab_z * v + ac_z * w,
        ),
        PointOnTriangle::Face,
    )
}

/// 2D variant of [`find_closest_point_on_triangle`], same region order and
/// tie-breaks.
pub fn find_closest_point_on_triangle_2d(
    v0_x: f32,
    v0_y: f32,
    v1_x: f32,
    v1_y: f32,
    v2_x: f32,
    v2_y: f32,
    p_x: f32,
    p_y: f32,
) -> (Point2<f32>, PointOnTriangle) {
    let ab_x = v1_x - v0_x;
    let ab_y = v1_y - v0_y;
    let ac_x = v2_x - v0_x;
    let ac_y = v2_y - v0_y;
    let ap_x = p_x - v0_x;
    let ap_y = p_y - v0_y;
    let d1 = ab_x * ap_x + ab_y * ap_y;
    let d2 = ac_x * ap_x + ac_y * ap_y;
    if d1 <= 0.0 && d2 <= 0.0 {
        return (Point2::new(v0_x, v0_y), PointOnTriangle::Vertex0);
    }
    let bp_x = p_x - v1_x;
    let bp_y = p_y - v1_y;
    let d3 = ab_x * bp_x + ab_y * bp_y;
    let d4 = ac_x * bp_x + ac_y * bp_y;
    if d3 >= 0.0 && d4 <= d3 {
        return (Point2::new(v1_x, v1_y), PointOnTriangle::Vertex1);
    }
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return (
            Point2::new(v0_x + v * ab_x, v0_y + v * ab_y),
            PointOnTriangle::Edge01,
        );
    }
    let cp_x = p_x - v2_x;
    let cp_y = p_y - v2_y;
    let d5 = ab_x * cp_x + ab_y * cp_y;
    let d6 = ac_x * cp_x + ac_y * cp_y;
    if d6 >= 0.0 && d5 <= d6 {
        return (Point2::new(v2_x, v2_y), PointOnTriangle::Vertex2);
    }
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return (
            Point2::new(v0_x + w * ac_x, v0_y + w * ac_y),
            PointOnTriangle::Edge20,
        );
    }
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
        let w = (d4 - d3) / (d4 - d3 + d5 - d6);
        return (
            Point2::new(v1_x + w * (v2_x - v1_x), v1_y + w * (v2_y - v1_y)),
            PointOnTriangle::Edge12,
        );
    }
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    (
        Point2::new(v0_x + ab_x * v + ac_x * w, v0_y + ab_y * v + ac_y * w),
        PointOnTriangle::Face,
    )
}

/// Closest point to `p` on the rectangle spanned from corner `a` by the
/// edge endpoints `b` and `c`, found by clamping the projection onto each
/// edge independently.
pub fn find_closest_point_on_rectangle(
    a_x: f32,
    a_y: f32,
    a_z: f32,
    b_x: f32,
    b_y: f32,
    b_z: f32,
    c_x: f32,
    c_y: f32,
    c_z: f32,
    p_x: f32,
    p_y: f32,
    p_z: f32,
) -> Point3<f32> {
    let ab_x = b_x - a_x;
    let ab_y = b_y - a_y;
    let ab_z = b_z - a_z;
    let ac_x = c_x - a_x;
    let ac_y = c_y - a_y;
    let ac_z = c_z - a_z;
    let d_x = p_x - a_x;
    let d_y = p_y - a_y;
    let d_z = p_z - a_z;
    let mut q_x = a_x;
    let mut q_y = a_y;
    let mut q_z = a_z;
    let mut dist = d_x * ab_x + d_y * ab_y + d_z * ab_z;
    let mut maxdist = ab_x * ab_x + ab_y * ab_y + ab_z * ab_z;
    if dist >= maxdist {
        q_x += ab_x;
        q_y += ab_y;
        q_z += ab_z;
    } else if dist > 0.0 {
        q_x += dist / maxdist * ab_x;
        q_y += dist / maxdist * ab_y;
        q_z += dist / maxdist * ab_z;
    }
    dist = d_x * ac_x + d_y * ac_y + d_z * ac_z;
    maxdist = ac_x * ac_x + ac_y * ac_y + ac_z * ac_z;
    if dist >= maxdist {
        q_x += ac_x;
        q_y += ac_y;
        q_z += ac_z;
    } else if dist > 0.0 {
        q_x += dist / maxdist * ac_x;
        q_y += dist / maxdist * ac_y;
        q_z += dist / maxdist * ac_z;
    }
    Point3::new(q_x, q_y, q_z)
}
