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

//! Circle queries against circles, lines, rays, segments and triangles.

use crate::geometry::Point2;

/// Whether two circles, given by center and plain radius, intersect or
/// touch.
pub fn test_circle_circle(a_x: f32, a_y: f32, r_a: f32, b_x: f32, b_y: f32, r_b: f32) -> bool {
    let d = (a_x - b_x) * (a_x - b_x) + (a_y - b_y) * (a_y - b_y);
    d <= (r_a + r_b) * (r_a + r_b)
}

/// Intersection of two circles given by center and *squared* radius, as
/// `(center of the common chord, half chord length)`.
///
/// Coincident centers divide by zero; the NaN half-length fails the sign
/// check and reports no intersection.
pub fn intersect_circle_circle(
    a_x: f32,
    a_y: f32,
    radius_squared_a: f32,
    b_x: f32,
    b_y: f32,
    radius_squared_b: f32,
) -> Option<(Point2<f32>, f32)> {
    let d_x = b_x - a_x;
    let d_y = b_y - a_y;
    let dist_squared = d_x * d_x + d_y * d_y;
    let h = 0.5 + (radius_squared_a - radius_squared_b) / dist_squared;
    let r_i = (radius_squared_a - h * h * dist_squared).sqrt();
    if r_i >= 0.0 {
        return Some((Point2::new(a_x + h * d_x, a_y + h * d_y), r_i));
    }
    None
}

/// Whether the line `a*x + b*y + c = 0` passes within `radius` of the
/// circle center.
pub fn test_line_circle(a: f32, b: f32, c: f32, center_x: f32, center_y: f32, radius: f32) -> bool {
    let denom = (a * a + b * b).sqrt();
    let dist = (a * center_x + b * center_y + c) / denom;
    -radius <= dist && dist <= radius
}

/// Chord cut from the circle by the line `a*x + b*y + c = 0`, as
/// `(chord center, half chord length)`.
pub fn intersect_line_circle(
    a: f32,
    b: f32,
    c: f32,
    center_x: f32,
    center_y: f32,
    radius: f32,
) -> Option<(Point2<f32>, f32)> {
    let inv_denom = 1.0 / (a * a + b * b).sqrt();
    let dist = (a * center_x + b * center_y + c) * inv_denom;
    if -radius <= dist && dist <= radius {
        let center = Point2::new(center_x + dist * a * inv_denom, center_y + dist * b * inv_denom);
        let half_length = (radius * radius - dist * dist).sqrt();
        return Some((center, half_length));
    }
    None
}

/// [`intersect_line_circle`] for the line through `(x0, y0)` and
/// `(x1, y1)`.
pub fn intersect_line_circle_through(
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    center_x: f32,
    center_y: f32,
    radius: f32,
) -> Option<(Point2<f32>, f32)> {
    intersect_line_circle(
        y0 - y1,
        x1 - x0,
        (x0 - x1) * y0 + (y1 - y0) * x0,
        center_x,
        center_y,
        radius,
    )
}

/// Whether the ray hits the circle, center/squared-radius form. The ray
/// direction must be normalized.
pub fn test_ray_circle(
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
    center_x: f32,
    center_y: f32,
    radius_squared: f32,
) -> bool {
    let l_x = center_x - origin_x;
    let l_y = center_y - origin_y;
    let tca = l_x * dir_x + l_y * dir_y;
    let d2 = l_x * l_x + l_y * l_y - tca * tca;
    if d2 > radius_squared {
        return false;
    }
    let thc = (radius_squared - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;
    t0 < t1 && t1 >= 0.0
}

/// Near and far ray parameters `(t0, t1)` of the ray/circle intersection.
/// `t0` is negative when the origin lies inside the circle. The ray
/// direction must be normalized.
pub fn intersect_ray_circle(
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
    center_x: f32,
    center_y: f32,
    radius_squared: f32,
) -> Option<(f32, f32)> {
    let l_x = center_x - origin_x;
    let l_y = center_y - origin_y;
    let tca = l_x * dir_x + l_y * dir_y;
    let d2 = l_x * l_x + l_y * l_y - tca * tca;
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

/// Whether the segment `p0 -> p1` intersects the circle, by solving the
/// quadratic in the segment parameter and accepting either root in
/// `[0, 1]`.
pub fn test_line_segment_circle(
    p0_x: f32,
    p0_y: f32,
    p1_x: f32,
    p1_y: f32,
    center_x: f32,
    center_y: f32,
    radius: f32,
) -> bool {
    let d_x = p1_x - p0_x;
    let d_y = p1_y - p0_y;
    let f_x = p0_x - center_x;
    let f_y = p0_y - center_y;
    let a = d_x * d_x + d_y * d_y;
    let b = 2.0 * (f_x * d_x + f_y * d_y);
    let c = f_x * f_x + f_y * f_y - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }
    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    if (0.0..=1.0).contains(&t1) {
        return true;
    }
    let t2 = (-b + sqrt_d) / (2.0 * a);
    (0.0..=1.0).contains(&t2)
}

/// Whether the circle intersects the CCW triangle `(v0, v1, v2)`,
/// center/squared-radius form. Tests the vertices, containment of the
/// center and the three edges in turn.
pub fn test_circle_triangle(
    center_x: f32,
    center_y: f32,
    radius_squared: f32,
    v0_x: f32,
    v0_y: f32,
    v1_x: f32,
    v1_y: f32,
    v2_x: f32,
    v2_y: f32,
) -> bool {
    let c1x = center_x - v0_x;
    let c1y = center_y - v0_y;
    let c1sqr = c1x * c1x + c1y * c1y - radius_squared;
    if c1sqr <= 0.0 {
        return true;
    }
    let c2x = center_x - v1_x;
    let c2y = center_y - v1_y;
    let c2sqr = c2x * c2x + c2y * c2y - radius_squared;
    if c2sqr <= 0.0 {
        return true;
    }
    let c3x = center_x - v2_x;
    let c3y = center_y - v2_y;
    let c3sqr = c3x * c3x + c3y * c3y - radius_squared;
    if c3sqr <= 0.0 {
        return true;
    }
    let e1x = v1_x - v0_x;
    let e1y = v1_y - v0_y;
    let e2x = v2_x - v1_x;
    let e2y = v2_y - v1_y;
    let e3x = v0_x - v2_x;
    let e3y = v0_y - v2_y;
    // center inside the (CCW) triangle
    if e1x * c1y - e1y * c1x >= 0.0 && e2x * c2y - e2y * c2x >= 0.0 && e3x * c3y - e3y * c3x >= 0.0
    {
        return true;
    }
    let mut k = c1x * e1x + c1y * e1y;
    if k >= 0.0 {
        let len = e1x * e1x + e1y * e1y;
        if k <= len && c1sqr * len <= k * k {
            return true;
        }
    }
    k = c2x * e2x + c2y * e2y;
    if k > 0.0 {
        let len = e2x * e2x + e2y * e2y;
        if k <= len && c2sqr * len <= k * k {
            return true;
        }
    }
    k = c3x * e3x + c3y * e3y;
    if k >= 0.0 {
        let len = e3x * e3x + e3y * e3y;
        if k < len && c3sqr * len <= k * k {
            return true;
        }
    }
    false
}
