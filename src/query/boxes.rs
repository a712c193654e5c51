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

//! Box overlap queries: axis-aligned boxes and rectangles, oriented boxes,
//! and boxes against spheres, circles and lines.

/// Overlap test for two axis-aligned boxes. Boxes that merely touch on a
/// face, edge or corner intersect.
pub fn test_aab_aab(
    min_xa: f32,
    min_ya: f32,
    min_za: f32,
    max_xa: f32,
    max_ya: f32,
    max_za: f32,
    min_xb: f32,
    min_yb: f32,
    min_zb: f32,
    max_xb: f32,
    max_yb: f32,
    max_zb: f32,
) -> bool {
    max_xa >= min_xb
        && max_ya >= min_yb
        && max_za >= min_zb
        && min_xa <= max_xb
        && min_ya <= max_yb
        && min_za <= max_zb
}

/// Overlap test for two axis-aligned rectangles; touching counts.
pub fn test_aar_aar(
    min_xa: f32,
    min_ya: f32,
    max_xa: f32,
    max_ya: f32,
    min_xb: f32,
    min_yb: f32,
    max_xb: f32,
    max_yb: f32,
) -> bool {
    max_xa >= min_xb && max_ya >= min_yb && min_xa <= max_xb && min_ya <= max_yb
}

/// Separating-axis test between two oriented boxes, given as center, the
/// three (unit) local axes and the half-extents of each.
///
/// Tests the 15 candidate axes. An epsilon is added to the absolute
/// rotation terms to counteract arithmetic error when two edges are
/// (near) parallel and their cross product is (near) null.
pub fn test_ob_ob(
    b0c_x: f32,
    b0c_y: f32,
    b0c_z: f32,
    b0ux_x: f32,
    b0ux_y: f32,
    b0ux_z: f32,
    b0uy_x: f32,
    b0uy_y: f32,
    b0uy_z: f32,
    b0uz_x: f32,
    b0uz_y: f32,
    b0uz_z: f32,
    b0hs_x: f32,
    b0hs_y: f32,
    b0hs_z: f32,
    b1c_x: f32,
    b1c_y: f32,
    b1c_z: f32,
    b1ux_x: f32,
    b1ux_y: f32,
    b1ux_z: f32,
    b1uy_x: f32,
    b1uy_y: f32,
    b1uy_z: f32,
    b1uz_x: f32,
    b1uz_y: f32,
    b1uz_z: f32,
    b1hs_x: f32,
    b1hs_y: f32,
    b1hs_z: f32,
) -> bool {
    const EPSILON: f32 = 1e-5;
    // rotation matrix expressing b1 in b0's coordinate frame
    let rm00 = b0ux_x * b1ux_x + b0uy_x * b1uy_x + b0uz_x * b1uz_x;
    let rm10 = b0ux_x * b1ux_y + b0uy_x * b1uy_y + b0uz_x * b1uz_y;
    let rm20 = b0ux_x * b1ux_z + b0uy_x * b1uy_z + b0uz_x * b1uz_z;
    let rm01 = b0ux_y * b1ux_x + b0uy_y * b1uy_x + b0uz_y * b1uz_x;
    let rm11 = b0ux_y * b1ux_y + b0uy_y * b1uy_y + b0uz_y * b1uz_y;
    let rm21 = b0ux_y * b1ux_z + b0uy_y * b1uy_z + b0uz_y * b1uz_z;
    let rm02 = b0ux_z * b1ux_x + b0uy_z * b1uy_x + b0uz_z * b1uz_x;
    let rm12 = b0ux_z * b1ux_y + b0uy_z * b1uy_y + b0uz_z * b1uz_y;
    let rm22 = b0ux_z * b1ux_z + b0uy_z * b1uy_z + b0uz_z * b1uz_z;
    let arm00 = rm00.abs() + EPSILON;
    let arm01 = rm01.abs() + EPSILON;
    let arm02 = rm02.abs() + EPSILON;
    let arm10 = rm10.abs() + EPSILON;
    let arm11 = rm11.abs() + EPSILON;
    let arm12 = rm12.abs() + EPSILON;
    let arm20 = rm20.abs() + EPSILON;
    let arm21 = rm21.abs() + EPSILON;
    let arm22 = rm22.abs() + EPSILON;
    // translation, brought into b0's coordinate frame
    let tx = b1c_x - b0c_x;
    let ty = b1c_y - b0c_y;
    let tz = b1c_z - b0c_z;
    let tax = tx * b0ux_x + ty * b0ux_y + tz * b0ux_z;
    let tay = tx * b0uy_x + ty * b0uy_y + tz * b0uy_z;
    let taz = tx * b0uz_x + ty * b0uz_y + tz * b0uz_z;
    // axes L = A0, A1, A2
    let mut ra = b0hs_x;
    let mut rb = b1hs_x * arm00 + b1hs_y * arm01 + b1hs_z * arm02;
    if tax.abs() > ra + rb {
        return false;
    }
    ra = b0hs_y;
    rb = b1hs_x * arm10 + b1hs_y * arm11 + b1hs_z * arm12;
    if tay.abs() > ra + rb {
        return false;
    }
    ra = b0hs_z;
    rb = b1hs_x * arm20 + b1hs_y * arm21 + b1hs_z * arm22;
    if taz.abs() > ra + rb {
        return false;
    }
    // axes L = B0, B1, B2
    ra = b0hs_x * arm00 + b0hs_y * arm10 + b0hs_z * arm20;
    rb = b1hs_x;
    if (tax * rm00 + tay * rm10 + taz * rm20).abs() > ra + rb {
        return false;
    }
    ra = b0hs_x * arm01 + b0hs_y * arm11 + b0hs_z * arm21;
    rb = b1hs_y;
    if (tax * rm01 + tay * rm11 + taz * rm21).abs() > ra + rb {
        return false;
    }
    ra = b0hs_x * arm02 + b0hs_y * arm12 + b0hs_z * arm22;
    rb = b1hs_z;
    if (tax * rm02 + tay * rm12 + taz * rm22).abs() > ra + rb {
        return false;
    }
    // axis L = A0 x B0
    ra = b0hs_y * arm20 + b0hs_z * arm10;
    rb = b1hs_y * arm02 + b1hs_z * arm01;
    if (taz * rm10 - tay * rm20).abs() > ra + rb {
        return false;
    }
    // axis L = A0 x B1
    ra = b0hs_y * arm21 + b0hs_z * arm11;
    rb = b1hs_x * arm02 + b1hs_z * arm00;
    if (taz * rm11 - tay * rm21).abs() > ra + rb {
        return false;
    }
    // axis L = A0 x B2
    ra = b0hs_y * arm22 + b0hs_z * arm12;
    rb = b1hs_x * arm01 + b1hs_y * arm00;
    if (taz * rm12 - tay * rm22).abs() > ra + rb {
        return false;
    }
    // axis L = A1 x B0
    ra = b0hs_x * arm20 + b0hs_z * arm00;
    rb = b1hs_y * arm12 + b1hs_z * arm11;
    if (tax * rm20 - taz * rm00).abs() > ra + rb {
        return false;
    }
    // axis L = A1 x B1
    ra = b0hs_x * arm21 + b0hs_z * arm01;
    rb = b1hs_x * arm12 + b1hs_z * arm10;
    if (tax * rm21 - taz * rm01).abs() > ra + rb {
        return false;
    }
    // axis L = A1 x B2
    ra = b0hs_x * arm22 + b0hs_z * arm02;
    rb = b1hs_x * arm11 + b1hs_y * arm10;
    if (tax * rm22 - taz * rm02).abs() > ra + rb {
        return false;
    }
    // axis L = A2 x B0
    ra = b0hs_x * arm10 + b0hs_y * arm00;
    rb = b1hs_y * arm22 + b1hs_z * arm21;
    if (tay * rm00 - tax * rm10).abs() > ra + rb {
        return false;
    }
    // axis L = A2 x B1
    ra = b0hs_x * arm11 + b0hs_y * arm01;
    rb = b1hs_x * arm22 + b1hs_z * arm20;
    if (tay * rm01 - tax * rm11).abs() > ra + rb {
        return false;
    }
    // axis L = A2 x B2
    ra = b0hs_x * arm12 + b0hs_y * arm02;
    rb = b1hs_x * arm21 + b1hs_y * arm20;
    // no separating axis found
    (tay * rm02 - tax * rm12).abs() <= ra + rb
}

/// Whether the box `[min, max]` and the sphere overlap, by subtracting the
/// squared axis distances from the squared radius.
pub fn test_aab_sphere(
    min_x: f32,
    min_y: f32,
    min_z: f32,
    max_x: f32,
    max_y: f32,
    max_z: f32,
    center_x: f32,
    center_y: f32,
    center_z: f32,
    radius_squared: f32,
) -> bool {
    let mut radius2 = radius_squared;
    if center_x < min_x {
        let d = center_x - min_x;
        radius2 -= d * d;
    } else if center_x > max_x {
        let d = center_x - max_x;
        radius2 -= d * d;
    }
    if center_y < min_y {
        let d = center_y - min_y;
        radius2 -= d * d;
    } else if center_y > max_y {
        let d = center_y - max_y;
        radius2 -= d * d;
    }
    if center_z < min_z {
        let d = center_z - min_z;
        radius2 -= d * d;
    } else if center_z > max_z {
        let d = center_z - max_z;
        radius2 -= d * d;
    }
    radius2 >= 0.0
}

/// 2D analogue of [`test_aab_sphere`].
pub fn test_aar_circle(
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
    center_x: f32,
    center_y: f32,
    radius_squared: f32,
) -> bool {
    let mut radius2 = radius_squared;
    if center_x < min_x {
        let d = center_x - min_x;
        radius2 -= d * d;
    } else if center_x > max_x {
        let d = center_x - max_x;
        radius2 -= d * d;
    }
    if center_y < min_y {
        let d = center_y - min_y;
        radius2 -= d * d;
    } else if center_y > max_y {
        let d = center_y - max_y;
        radius2 -= d * d;
    }
    radius2 >= 0.0
}

/// Whether the line `a*x + b*y + c = 0` crosses the rectangle
/// `[min, max]`, via the p/n-vertex test.
pub fn test_aar_line(min_x: f32, min_y: f32, max_x: f32, max_y: f32, a: f32, b: f32, c: f32) -> bool {
    let (p_x, n_x) = if a > 0.0 { (max_x, min_x) } else { (min_x, max_x) };
    let (p_y, n_y) = if b > 0.0 { (max_y, min_y) } else { (min_y, max_y) };
    let dist_n = c + a * n_x + b * n_y;
    let dist_p = c + a * p_x + b * p_y;
    dist_n <= 0.0 && dist_p >= 0.0
}

/// [`test_aar_line`] for the line through `(x0, y0)` and `(x1, y1)`.
pub fn test_aar_line_through(
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
) -> bool {
    let a = y0 - y1;
    let b = x1 - x0;
    let c = -b * y0 - a * x0;
    test_aar_line(min_x, min_y, max_x, max_y, a, b, c)
}
