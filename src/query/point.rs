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

//! Point containment and signed distance queries.

/// Whether `(px, py)` lies inside the 2D triangle `(v0, v1, v2)`.
///
/// Edge-sign test; points exactly on an edge or vertex count as inside.
/// Works for either winding.
pub fn test_point_triangle(
    px: f32,
    py: f32,
    v0x: f32,
    v0y: f32,
    v1x: f32,
    v1y: f32,
    v2x: f32,
    v2y: f32,
) -> bool {
    let b1 = (px - v1x) * (v0y - v1y) - (v0x - v1x) * (py - v1y) < 0.0;
    let b2 = (px - v2x) * (v1y - v2y) - (v1x - v2x) * (py - v2y) < 0.0;
    if b1 != b2 {
        return false;
    }
    let b3 = (px - v0x) * (v2y - v0y) - (v2x - v0x) * (py - v0y) < 0.0;
    b2 == b3
}

/// Closed-interval containment in the rectangle `[min, max]`.
pub fn test_point_aar(px: f32, py: f32, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> bool {
    px >= min_x && py >= min_y && px <= max_x && py <= max_y
}

/// Closed-interval containment in the box `[min, max]`.
pub fn test_point_aab(
    px: f32,
    py: f32,
    pz: f32,
    min_x: f32,
    min_y: f32,
    min_z: f32,
    max_x: f32,
    max_y: f32,
    max_z: f32,
) -> bool {
    px >= min_x && py >= min_y && pz >= min_z && px <= max_x && py <= max_y && pz <= max_z
}

/// Closed-disk containment.
pub fn test_point_circle(px: f32, py: f32, center_x: f32, center_y: f32, radius_squared: f32) -> bool {
    let dx = px - center_x;
    let dy = py - center_y;
    dx * dx + dy * dy <= radius_squared
}

/// Closed-ball containment.
pub fn test_point_sphere(
    px: f32,
    py: f32,
    pz: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    radius_squared: f32,
) -> bool {
    let dx = px - center_x;
    let dy = py - center_y;
    let dz = pz - center_z;
    dx * dx + dy * dy + dz * dz <= radius_squared
}

/// Signed distance of a point to the plane `a*x + b*y + c*z + d = 0`,
/// positive on the side the normal points toward.
pub fn distance_point_plane(px: f32, py: f32, pz: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let denom = (a * a + b * b + c * c).sqrt();
    (a * px + b * py + c * pz + d) / denom
}

/// Signed distance of a point to the plane of the CCW triangle
/// `(v0, v1, v2)`; positive means the point is on the front (normal) side.
pub fn distance_point_triangle_plane(
    px: f32,
    py: f32,
    pz: f32,
    v0x: f32,
    v0y: f32,
    v0z: f32,
    v1x: f32,
    v1y: f32,
    v1z: f32,
    v2x: f32,
    v2y: f32,
    v2z: f32,
) -> f32 {
    let v1y0y = v1y - v0y;
    let v2z0z = v2z - v0z;
    let v2y0y = v2y - v0y;
    let v1z0z = v1z - v0z;
    let v2x0x = v2x - v0x;
    let v1x0x = v1x - v0x;
    let a = v1y0y * v2z0z - v2y0y * v1z0z;
    let b = v1z0z * v2x0x - v2z0z * v1x0x;
    let c = v1x0x * v2y0y - v2x0x * v1y0y;
    let d = -(a * v0x + b * v0y + c * v0z);
    distance_point_plane(px, py, pz, a, b, c, d)
}

/// Signed distance of `(px, py)` to the line `a*x + b*y + c = 0`.
pub fn distance_point_line(px: f32, py: f32, a: f32, b: f32, c: f32) -> f32 {
    let denom = (a * a + b * b).sqrt();
    (a * px + b * py + c) / denom
}

/// Signed distance of `(px, py)` to the line through `(x0, y0)` and
/// `(x1, y1)`.
pub fn distance_point_line_through(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let denom = (dx * dx + dy * dy).sqrt();
    (dx * (y0 - py) - (x0 - px) * dy) / denom
}

/// Distance (unsigned) of a point to the 3D line through `(x0, y0, z0)`
/// and `(x1, y1, z1)`.
pub fn distance_point_line_through_3d(
    px: f32,
    py: f32,
    pz: f32,
    x0: f32,
    y0: f32,
    z0: f32,
    x1: f32,
    y1: f32,
    z1: f32,
) -> f32 {
    let d21x = x1 - x0;
    let d21y = y1 - y0;
    let d21z = z1 - z0;
    let d10x = x0 - px;
    let d10y = y0 - py;
    let d10z = z0 - pz;
    let cx = d21y * d10z - d21z * d10y;
    let cy = d21z * d10x - d21x * d10z;
    let cz = d21x * d10y - d21y * d10x;
    ((cx * cx + cy * cy + cz * cz) / (d21x * d21x + d21y * d21y + d21z * d21z)).sqrt()
}
