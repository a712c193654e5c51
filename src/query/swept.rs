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

//! Continuous collision queries for moving spheres and circles.

use crate::geometry::Point3;
use crate::numeric::lowest_positive_root;
use crate::query::PointOnTriangle;

// Barycentric containment of a 3D point in the triangle's plane.
fn test_point_in_triangle(
    p_x: f32,
    p_y: f32,
    p_z: f32,
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
) -> bool {
    let e10_x = v1_x - v0_x;
    let e10_y = v1_y - v0_y;
    let e10_z = v1_z - v0_z;
    let e20_x = v2_x - v0_x;
    let e20_y = v2_y - v0_y;
    let e20_z = v2_z - v0_z;
    let a = e10_x * e10_x + e10_y * e10_y + e10_z * e10_z;
    let b = e10_x * e20_x + e10_y * e20_y + e10_z * e20_z;
    let c = e20_x * e20_x + e20_y * e20_y + e20_z * e20_z;
    let ac_bb = a * c - b * b;
    let vp_x = p_x - v0_x;
    let vp_y = p_y - v0_y;
    let vp_z = p_z - v0_z;
    let d = vp_x * e10_x + vp_y * e10_y + vp_z * e10_z;
    let e = vp_x * e20_x + vp_y * e20_y + vp_z * e20_z;
    let x = d * c - e * b;
    let y = e * a - d * b;
    let z = x + y - ac_bb;
    z < 0.0 && x >= 0.0 && y >= 0.0
}

/// Earliest contact of a sphere moving with velocity `(vel_x, vel_y,
/// vel_z)` against the triangle `(v0, v1, v2)`, within the time window
/// `[0, max_t]`.
///
/// Returns the contact point on the triangle, the contact time, and the
/// triangle feature hit first. The face is tried via the offset plane at
/// distance `radius`; if the plane contact point falls outside the
/// triangle, the three vertices and three edges are tested with the
/// quadratic root solver, keeping the earliest time. A sphere moving
/// (near) parallel to the triangle plane (`|normal . velocity| <
/// epsilon` after normalization) reports no contact.
pub fn intersect_swept_sphere_triangle(
    center_x: f32,
    center_y: f32,
    center_z: f32,
    radius: f32,
    vel_x: f32,
    vel_y: f32,
    vel_z: f32,
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
    max_t: f32,
) -> Option<(Point3<f32>, f32, PointOnTriangle)> {
    let v10_x = v1_x - v0_x;
    let v10_y = v1_y - v0_y;
    let v10_z = v1_z - v0_z;
    let v20_x = v2_x - v0_x;
    let v20_y = v2_y - v0_y;
    let v20_z = v2_z - v0_z;
    // triangle plane
    let a = v10_y * v20_z - v20_y * v10_z;
    let b = v10_z * v20_x - v20_z * v10_x;
    let c = v10_x * v20_y - v20_x * v10_y;
    let d = -(a * v0_x + b * v0_y + c * v0_z);
    let inv_len = 1.0 / (a * a + b * b + c * c).sqrt();
    let signed_dist = (a * center_x + b * center_y + c * center_z + d) * inv_len;
    let dot = (a * vel_x + b * vel_y + c * vel_z) * inv_len;
    if dot < epsilon && dot > -epsilon {
        return None;
    }
    // time the sphere surface reaches the plane
    let pt0 = (radius - signed_dist) / dot;
    if pt0 > max_t {
        return None;
    }
    let p0_x = center_x - radius * a * inv_len + vel_x * pt0;
    let p0_y = center_y - radius * b * inv_len + vel_y * pt0;
    let p0_z = center_z - radius * c * inv_len + vel_z * pt0;
    if test_point_in_triangle(
        p0_x, p0_y, p0_z, v0_x, v0_y, v0_z, v1_x, v1_y, v1_z, v2_x, v2_y, v2_z,
    ) {
        return Some((Point3::new(p0_x, p0_y, p0_z), pt0, PointOnTriangle::Face));
    }
    let mut best: Option<(Point3<f32>, f32, PointOnTriangle)> = None;
    let mut t0 = max_t;
    let a_quad = vel_x * vel_x + vel_y * vel_y + vel_z * vel_z;
    let radius2 = radius * radius;
    // vertex v0
    let center_v0_x = center_x - v0_x;
    let center_v0_y = center_y - v0_y;
    let center_v0_z = center_z - v0_z;
    let b0 = 2.0 * (vel_x * center_v0_x + vel_y * center_v0_y + vel_z * center_v0_z);
    let c0 =
        center_v0_x * center_v0_x + center_v0_y * center_v0_y + center_v0_z * center_v0_z - radius2;
    let root0 = lowest_positive_root(a_quad, b0, c0, t0);
    if root0 < t0 {
        best = Some((Point3::new(v0_x, v0_y, v0_z), root0, PointOnTriangle::Vertex0));
        t0 = root0;
    }
    // vertex v1
    let center_v1_x = center_x - v1_x;
    let center_v1_y = center_y - v1_y;
    let center_v1_z = center_z - v1_z;
    let center_v1_len =
        center_v1_x * center_v1_x + center_v1_y * center_v1_y + center_v1_z * center_v1_z;
    let b1 = 2.0 * (vel_x * center_v1_x + vel_y * center_v1_y + vel_z * center_v1_z);
    let c1 = center_v1_len - radius2;
    let root1 = lowest_positive_root(a_quad, b1, c1, t0);
    if root1 < t0 {
        best = Some((Point3::new(v1_x, v1_y, v1_z), root1, PointOnTriangle::Vertex1));
        t0 = root1;
    }
    // vertex v2
    let center_v2_x = center_x - v2_x;
    let center_v2_y = center_y - v2_y;
    let center_v2_z = center_z - v2_z;
    let b2 = 2.0 * (vel_x * center_v2_x + vel_y * center_v2_y + vel_z * center_v2_z);
    let c2 =
        center_v2_x * center_v2_x + center_v2_y * center_v2_y + center_v2_z * center_v2_z - radius2;
    let root2 = lowest_positive_root(a_quad, b2, c2, t0);
    if root2 < t0 {
        best = Some((Point3::new(v2_x, v2_y, v2_z), root2, PointOnTriangle::Vertex2));
        t0 = root2;
    }
    // edge v0 -> v1
    let base_to0_len = center_v0_x * center_v0_x + center_v0_y * center_v0_y + center_v0_z * center_v0_z;
    let len10 = v10_x * v10_x + v10_y * v10_y + v10_z * v10_z;
    let v10_vel = v10_x * vel_x + v10_y * vel_y + v10_z * vel_z;
    let a10 = len10 * -a_quad + v10_vel * v10_vel;
    let v10_base_to0 = v10_x * -center_v0_x + v10_y * -center_v0_y + v10_z * -center_v0_z;
    let vel_base_to0 = vel_x * -center_v0_x + vel_y * -center_v0_y + vel_z * -center_v0_z;
    let b10 = len10 * 2.0 * vel_base_to0 - 2.0 * v10_vel * v10_base_to0;
    let c10 = len10 * (radius2 - base_to0_len) + v10_base_to0 * v10_base_to0;
    let root10 = lowest_positive_root(a10, b10, c10, t0);
    if root10 < t0 {
        let f10 = (v10_vel * root10 - v10_base_to0) / len10;
        if (0.0..=1.0).contains(&f10) {
            best = Some((
                Point3::new(v0_x + f10 * v10_x, v0_y + f10 * v10_y, v0_z + f10 * v10_z),
                root10,
                PointOnTriangle::Edge01,
            ));
            t0 = root10;
        }
    }
    // edge v0 -> v2
    let len20 = v20_x * v20_x + v20_y * v20_y + v20_z * v20_z;
    let v20_vel = v20_x * vel_x + v20_y * vel_y + v20_z * vel_z;
    let a20 = len20 * -a_quad + v20_vel * v20_vel;
    let v20_base_to0 = v20_x * -center_v0_x + v20_y * -center_v0_y + v20_z * -center_v0_z;
    let b20 = len20 * 2.0 * vel_base_to0 - 2.0 * v20_vel * v20_base_to0;
    let c20 = len20 * (radius2 - base_to0_len) + v20_base_to0 * v20_base_to0;
    let root20 = lowest_positive_root(a20, b20, c20, t0);
    if root20 < t0 {
        let f20 = (v20_vel * root20 - v20_base_to0) / len20;
        if (0.0..=1.0).contains(&f20) {
            best = Some((
                Point3::new(v0_x + f20 * v20_x, v0_y + f20 * v20_y, v0_z + f20 * v20_z),
                root20,
                PointOnTriangle::Edge20,
            ));
            t0 = root20;
        }
    }
    // edge v1 -> v2
    let v21_x = v2_x - v1_x;
    let v21_y = v2_y - v1_y;
    let v21_z = v2_z - v1_z;
    let len21 = v21_x * v21_x + v21_y * v21_y + v21_z * v21_z;
    let v21_vel = v21_x * vel_x + v21_y * vel_y + v21_z * vel_z;
    let a21 = len21 * -a_quad + v21_vel * v21_vel;
    let v21_base_to1 = v21_x * -center_v1_x + v21_y * -center_v1_y + v21_z * -center_v1_z;
    let vel_base_to1 = vel_x * -center_v1_x + vel_y * -center_v1_y + vel_z * -center_v1_z;
    let b21 = len21 * 2.0 * vel_base_to1 - 2.0 * v21_vel * v21_base_to1;
    let c21 = len21 * (radius2 - center_v1_len) + v21_base_to1 * v21_base_to1;
    let root21 = lowest_positive_root(a21, b21, c21, t0);
    if root21 < t0 {
        let f21 = (v21_vel * root21 - v21_base_to1) / len21;
        if (0.0..=1.0).contains(&f21) {
            best = Some((
                Point3::new(v1_x + f21 * v21_x, v1_y + f21 * v21_y, v1_z + f21 * v21_z),
                root21,
                PointOnTriangle::Edge12,
            ));
        }
    }
    best
}

/// Whether a circle at `(a_x, a_y)` moving by `(ma_x, ma_y)` over the step
/// reaches the circle at `(b_x, b_y)`, by ray-casting the relative motion
/// against the radius-sum circle.
pub fn test_moving_circle_circle(
    a_x: f32,
    a_y: f32,
    ma_x: f32,
    ma_y: f32,
    a_r: f32,
    b_x: f32,
    b_y: f32,
    b_r: f32,
) -> bool {
    let ar_br = a_r + b_r;
    let dist = ((a_x - b_x) * (a_x - b_x) + (a_y - b_y) * (a_y - b_y)).sqrt() - ar_br;
    let m_len = (ma_x * ma_x + ma_y * ma_y).sqrt();
    if m_len < dist {
        return false;
    }
    let inv_m_len = 1.0 / m_len;
    let n_x = ma_x * inv_m_len;
    let n_y = ma_y * inv_m_len;
    let c_x = b_x - a_x;
    let c_y = b_y - a_y;
    let n_dot_c = n_x * c_x + n_y * c_y;
    if n_dot_c <= 0.0 {
        return false;
    }
    let c_len = (c_x * c_x + c_y * c_y).sqrt();
    let c_len_n_dot_c = c_len * c_len - n_dot_c * n_dot_c;
    let ar_br2 = ar_br * ar_br;
    if c_len_n_dot_c >= ar_br2 {
        return false;
    }
    let t = ar_br2 - c_len_n_dot_c;
    if t < 0.0 {
        return false;
    }
    let distance = n_dot_c - t.sqrt();
    m_len >= distance
}
