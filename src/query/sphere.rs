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

//! Sphere queries against spheres, triangles, rays and segments.

use crate::geometry::Point3;
use crate::query::PointOnTriangle;
use crate::query::closest::find_closest_point_on_triangle;

/// Whether two spheres (given by center and *squared* radius) intersect.
///
/// Derived from the radical-plane position `h` of the intersection circle;
/// two identical spheres (distance zero) divide by zero and the resulting
/// NaN compares false, reporting no intersection.
pub fn test_sphere_sphere(
    a_x: f32,
    a_y: f32,
    a_z: f32,
    radius_squared_a: f32,
    b_x: f32,
    b_y: f32,
    b_z: f32,
    radius_squared_b: f32,
) -> bool {
    let d_x = b_x - a_x;
    let d_y = b_y - a_y;
    let d_z = b_z - a_z;
    let dist_squared = d_x * d_x + d_y * d_y + d_z * d_z;
    let h = 0.5 + (radius_squared_a - radius_squared_b) / dist_squared;
    let r_i = radius_squared_a - h * h * dist_squared;
    r_i >= 0.0
}

/// Circle of intersection of two spheres, as `(circle center, circle
/// radius)`.
pub fn intersect_sphere_sphere(
    a_x: f32,
    a_y: f32,
    a_z: f32,
    radius_squared_a: f32,
    b_x: f32,
    b_y: f32,
    b_z: f32,
    radius_squared_b: f32,
) -> Option<(Point3<f32>, f32)> {
    let d_x = b_x - a_x;
    let d_y = b_y - a_y;
    let d_z = b_z - a_z;
    let dist_squared = d_x * d_x + d_y * d_y + d_z * d_z;
    let h = 0.5 + (radius_squared_a - radius_squared_b) / dist_squared;
    let r_i = radius_squared_a - h * h * dist_squared;
    if r_i >= 0.0 {
        let center = Point3::new(a_x + h * d_x, a_y + h * d_y, a_z + h * d_z);
        return Some((center, r_i.sqrt()));
    }
    None
}

/// Whether the sphere touches the triangle; on intersection, the closest
/// point on the triangle and the Voronoi region it falls in.
pub fn intersect_sphere_triangle(
    s_x: f32,
    s_y: f32,
    s_z: f32,
    s_r: f32,
    v0_x: f32,
    v0_y: f32,
    v0_z: f32,
    v1_x: f32,
    v1_y: f32,
    v1_z: f32,
    v2_x: f32,
    v2_y: f32,
    v2_z: f32,
) -> Option<(Point3<f32>, PointOnTriangle)> {
    let (closest, region) = find_closest_point_on_triangle(
        v0_x, v0_y, v0_z, v1_x, v1_y, v1_z, v2_x, v2_y, v2_z, s_x, s_y, s_z,
    );
    let v_x = closest.x - s_x;
    let v_y = closest.y - s_y;
    let v_z = closest.z - s_z;
    let dot = v_x * v_x + v_y * v_y + v_z * v_z;
    if dot <= s_r * s_r {
        return Some((closest, region));
    }
    None
}

/// Whether the ray hits the sphere, center/squared-radius form. The ray
/// direction must be normalized. An origin past the sphere (exit behind
/// the origin) reports no hit.
pub fn test_ray_sphere(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    radius_squared: f32,
) -> bool {
    let l_x = center_x - origin_x;
    let l_y = center_y - origin_y;
    let l_z = center_z - origin_z;
    let tca = l_x * dir_x + l_y * dir_y + l_z * dir_z;
    let d2 = l_x * l_x + l_y * l_y + l_z * l_z - tca * tca;
    if d2 > radius_squared {
        return false;
    }
    let thc = (radius_squared - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;
    t0 < t1 && t1 >= 0.0
}

/// Near and far ray parameters `(t0, t1)` of the ray/sphere intersection.
/// `t0` is negative when the origin lies inside the sphere. The ray
/// direction must be normalized.
pub fn intersect_ray_sphere(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    radius_squared: f32,
) -> Option<(f32, f32)> {
    let l_x = center_x - origin_x;
    let l_y = center_y - origin_y;
    let l_z = center_z - origin_z;
    let tca = l_x * dir_x + l_y * dir_y + l_z * dir_z;
    let d2 = l_x * l_x + l_y * l_y + l_z * l_z - tca * tca;
    if d2 > radius_squared {
        return None;
    }
    let thc = (radius_squared - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;
    if t0 < t1 && t1 >= 0.0 {
        return Some((t0, t1));
    }
    None
}

/// Whether the segment `p0 -> p1` comes within the (squared) radius of the
/// sphere center, by clamping the projection of the center onto the
/// segment.
pub fn test_line_segment_sphere(
    p0_x: f32,
    p0_y: f32,
    p0_z: f32,
    p1_x: f32,
    p1_y: f32,
    p1_z: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    radius_squared: f32,
) -> bool {
    let mut d_x = p1_x - p0_x;
    let mut d_y = p1_y - p0_y;
    let mut d_z = p1_z - p0_z;
    let nom = (center_x - p0_x) * d_x + (center_y - p0_y) * d_y + (center_z - p0_z) * d_z;
    let den = d_x * d_x + d_y * d_y + d_z * d_z;
    let u = nom / den;
    if u < 0.0 {
        d_x = p0_x - center_x;
        d_y = p0_y - center_y;
        d_z = p0_z - center_z;
    } else if u > 1.0 {
        d_x = p1_x - center_x;
        d_y = p1_y - center_y;
        d_z = p1_z - center_z;
    } else {
        let p_x = p0_x + u * d_x;
        let p_y = p0_y + u * d_y;
        let p_z = p0_z + u * d_z;
        d_x = p_x - center_x;
        d_y = p_y - center_y;
        d_z = p_z - center_z;
    }
    let dist = d_x * d_x + d_y * d_y + d_z * d_z;
    dist <= radius_squared
}
