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

//! Convex polygon queries. Polygons are vertex slices; edge `i` runs from
//! vertex `i` to vertex `i + 1`, the last edge closing back to vertex 0.

use crate::geometry::Point2;

/// Nearest intersection of a ray with the polygon's outline, as
/// `(edge index, intersection point)`. All edges are scanned; the hit with
/// the smallest non-negative ray parameter wins.
pub fn intersect_polygon_ray(
    vertices: &[Point2<f32>],
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
) -> Option<(usize, Point2<f32>)> {
    let count = vertices.len();
    if count == 0 {
        return None;
    }
    let mut nearest_t = f32::INFINITY;
    let mut hit = None;
    let mut a_x = vertices[count - 1].x;
    let mut a_y = vertices[count - 1].y;
    for (i, b) in vertices.iter().enumerate() {
        let b_x = b.x;
        let b_y = b.y;
        let doa_x = origin_x - a_x;
        let doa_y = origin_y - a_y;
        let dba_x = b_x - a_x;
        let dba_y = b_y - a_y;
        let inv_dba_dir = 1.0 / (dba_y * dir_x - dba_x * dir_y);
        let t = (dba_x * doa_y - dba_y * doa_x) * inv_dba_dir;
        if t >= 0.0 && t < nearest_t {
            let t2 = (doa_y * dir_x - doa_x * dir_y) * inv_dba_dir;
            if (0.0..=1.0).contains(&t2) {
                nearest_t = t;
                let p = Point2::new(origin_x + t * dir_x, origin_y + t * dir_y);
                hit = Some(((i + count - 1) % count, p));
            }
        }
        a_x = b_x;
        a_y = b_y;
    }
    hit
}

/// [`intersect_polygon_ray`] over interleaved `[x0, y0, x1, y1, ..]`
/// coordinates.
pub fn intersect_polygon_ray_flat(
    vertices_xy: &[f32],
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
) -> Option<(usize, Point2<f32>)> {
    let count = vertices_xy.len() >> 1;
    if count == 0 {
        return None;
    }
    let mut nearest_t = f32::INFINITY;
    let mut hit = None;
    let mut a_x = vertices_xy[(count - 1) << 1];
    let mut a_y = vertices_xy[((count - 1) << 1) + 1];
    for i in 0..count {
        let b_x = vertices_xy[i << 1];
        let b_y = vertices_xy[(i << 1) + 1];
        let doa_x = origin_x - a_x;
        let doa_y = origin_y - a_y;
        let dba_x = b_x - a_x;
        let dba_y = b_y - a_y;
        let inv_dba_dir = 1.0 / (dba_y * dir_x - dba_x * dir_y);
        let t = (dba_x * doa_y - dba_y * doa_x) * inv_dba_dir;
        if t >= 0.0 && t < nearest_t {
            let t2 = (doa_y * dir_x - doa_x * dir_y) * inv_dba_dir;
            if (0.0..=1.0).contains(&t2) {
                nearest_t = t;
                let p = Point2::new(origin_x + t * dir_x, origin_y + t * dir_y);
                hit = Some(((i + count - 1) % count, p));
            }
        }
        a_x = b_x;
        a_y = b_y;
    }
    hit
}

// Project both polygons onto the axis and report whether it separates
// them. Bails out early once the projected intervals are seen to overlap.
fn separating_axis(v1s: &[Point2<f32>], v2s: &[Point2<f32>], a_x: f32, a_y: f32) -> bool {
    let mut min_a = f32::INFINITY;
    let mut max_a = f32::NEG_INFINITY;
    let mut min_b = f32::INFINITY;
    let mut max_b = f32::NEG_INFINITY;
    let max_len = v1s.len().max(v2s.len());
    for k in 0..max_len {
        if k < v1s.len() {
            let v1 = v1s[k];
            let d = v1.x * a_x + v1.y * a_y;
            if d < min_a {
                min_a = d;
            }
            if d > max_a {
                max_a = d;
            }
        }
        if k < v2s.len() {
            let v2 = v2s[k];
            let d = v2.x * a_x + v2.y * a_y;
            if d < min_b {
                min_b = d;
            }
            if d > max_b {
                max_b = d;
            }
        }
        if min_a <= max_b && min_b <= max_a {
            return false;
        }
    }
    true
}

/// Separating-axis test between two convex polygons, using the edge
/// normals of both as candidate axes.
pub fn test_polygon_polygon(v1s: &[Point2<f32>], v2s: &[Point2<f32>]) -> bool {
    // separating axis among the first polygon's edges
    let mut j = v1s.len() - 1;
    for i in 0..v1s.len() {
        let s = v1s[i];
        let t = v1s[j];
        if separating_axis(v1s, v2s, s.y - t.y, t.x - s.x) {
            return false;
        }
        j = i;
    }
    // then among the second polygon's edges
    let mut j = v2s.len() - 1;
    for i in 0..v2s.len() {
        let s = v2s[i];
        let t = v2s[j];
        if separating_axis(v1s, v2s, s.y - t.y, t.x - s.x) {
            return false;
        }
        j = i;
    }
    true
}
