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

//! Slab tests of rays and line segments against axis-aligned boxes and
//! rectangles.
//!
//! A zero direction component produces infinite (or NaN, when the origin
//! sits on the slab boundary) slab parameters; the NaN checks in the
//! near/far merges keep those from poisoning the result. This is the
//! branchless-unfriendly but robust formulation.

use crate::query::{AarSide, SegmentBoxIntersection};

/// Whether the ray hits the box `[min, max]`. Intersections behind the
/// origin do not count, an origin inside the box does.
pub fn test_ray_aab(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    min_x: f32,
    min_y: f32,
    min_z: f32,
    max_x: f32,
    max_y: f32,
    max_z: f32,
) -> bool {
    let inv_dir_x = 1.0 / dir_x;
    let inv_dir_y = 1.0 / dir_y;
    let inv_dir_z = 1.0 / dir_z;
    let (mut t_near, mut t_far) = if inv_dir_x >= 0.0 {
        ((min_x - origin_x) * inv_dir_x, (max_x - origin_x) * inv_dir_x)
    } else {
        ((max_x - origin_x) * inv_dir_x, (min_x - origin_x) * inv_dir_x)
    };
    let (tymin, tymax) = if inv_dir_y >= 0.0 {
        ((min_y - origin_y) * inv_dir_y, (max_y - origin_y) * inv_dir_y)
    } else {
        ((max_y - origin_y) * inv_dir_y, (min_y - origin_y) * inv_dir_y)
    };
    if t_near > tymax || tymin > t_far {
        return false;
    }
    let (tzmin, tzmax) = if inv_dir_z >= 0.0 {
        ((min_z - origin_z) * inv_dir_z, (max_z - origin_z) * inv_dir_z)
    } else {
        ((max_z - origin_z) * inv_dir_z, (min_z - origin_z) * inv_dir_z)
    };
    if t_near > tzmax || tzmin > t_far {
        return false;
    }
    t_near = if tymin > t_near || t_near.is_nan() { tymin } else { t_near };
    t_far = if tymax < t_far || t_far.is_nan() { tymax } else { t_far };
    t_near = if tzmin > t_near { tzmin } else { t_near };
    t_far = if tzmax < t_far { tzmax } else { t_far };
    t_near < t_far && t_far >= 0.0
}

/// `(near, far)` ray parameters of the hit against the box `[min, max]`.
/// `near` is negative when the origin is inside the box.
pub fn intersect_ray_aab(
    origin_x: f32,
    origin_y: f32,
    origin_z: f32,
    dir_x: f32,
    dir_y: f32,
    dir_z: f32,
    min_x: f32,
    min_y: f32,
    min_z: f32,
    max_x: f32,
    max_y: f32,
    max_z: f32,
) -> Option<(f32, f32)> {
    let inv_dir_x = 1.0 / dir_x;
    let inv_dir_y = 1.0 / dir_y;
    let inv_dir_z = 1.0 / dir_z;
    let (mut t_near, mut t_far) = if inv_dir_x >= 0.0 {
        ((min_x - origin_x) * inv_dir_x, (max_x - origin_x) * inv_dir_x)
    } else {
        ((max_x - origin_x) * inv_dir_x, (min_x - origin_x) * inv_dir_x)
    };
    let (tymin, tymax) = if inv_dir_y >= 0.0 {
        ((min_y - origin_y) * inv_dir_y, (max_y - origin_y) * inv_dir_y)
    } else {
        ((max_y - origin_y) * inv_dir_y, (min_y - origin_y) * inv_dir_y)
    };
    if t_near > tymax || tymin > t_far {
        return None;
    }
    let (tzmin, tzmax) = if inv_dir_z >= 0.0 {
        ((min_z - origin_z) * inv_dir_z, (max_z - origin_z) * inv_dir_z)
    } else {
        ((max_z - origin_z) * inv_dir_z, (min_z - origin_z) * inv_dir_z)
    };
    if t_near > tzmax || tzmin > t_far {
        return None;
    }
    t_near = if tymin > t_near || t_near.is_nan() { tymin } else { t_near };
    t_far = if tymax < t_far || t_far.is_nan() { tymax } else { t_far };
    t_near = if tzmin > t_near { tzmin } else { t_near };
    t_far = if tzmax < t_far { tzmax } else { t_far };
    if t_near < t_far && t_far >= 0.0 {
        return Some((t_near, t_far));
    }
    None
}

/// Classify the segment `p0 -> p1` against the box `[min, max]`.
pub fn intersect_line_segment_aab(
    p0_x: f32,
    p0_y: f32,
    p0_z: f32,
    p1_x: f32,
    p1_y: f32,
    p1_z: f32,
    min_x: f32,
    min_y: f32,
    min_z: f32,
    max_x: f32,
    max_y: f32,
    max_z: f32,
) -> SegmentBoxIntersection {
    let dir_x = p1_x - p0_x;
    let dir_y = p1_y - p0_y;
    let dir_z = p1_z - p0_z;
    let inv_dir_x = 1.0 / dir_x;
    let inv_dir_y = 1.0 / dir_y;
    let inv_dir_z = 1.0 / dir_z;
    let (mut t_near, mut t_far) = if inv_dir_x >= 0.0 {
        ((min_x - p0_x) * inv_dir_x, (max_x - p0_x) * inv_dir_x)
    } else {
        ((max_x - p0_x) * inv_dir_x, (min_x - p0_x) * inv_dir_x)
    };
    let (tymin, tymax) = if inv_dir_y >= 0.0 {
        ((min_y - p0_y) * inv_dir_y, (max_y - p0_y) * inv_dir_y)
    } else {
        ((max_y - p0_y) * inv_dir_y, (min_y - p0_y) * inv_dir_y)
    };
    if t_near > tymax || tymin > t_far {
        return SegmentBoxIntersection::Outside;
    }
    let (tzmin, tzmax) = if inv_dir_z >= 0.0 {
        ((min_z - p0_z) * inv_dir_z, (max_z - p0_z) * inv_dir_z)
    } else {
        ((max_z - p0_z) * inv_dir_z, (min_z - p0_z) * inv_dir_z)
    };
    if t_near > tzmax || tzmin > t_far {
        return SegmentBoxIntersection::Outside;
    }
    t_near = if tymin > t_near || t_near.is_nan() { tymin } else { t_near };
    t_far = if tymax < t_far || t_far.is_nan() { tymax } else { t_far };
    t_near = if tzmin > t_near { tzmin } else { t_near };
    t_far = if tzmax < t_far { tzmax } else { t_far };
    classify_segment_window(t_near, t_far)
}

/// Whether the ray hits the rectangle `[min, max]`.
pub fn test_ray_aar(
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
) -> bool {
    let inv_dir_x = 1.0 / dir_x;
    let inv_dir_y = 1.0 / dir_y;
    let (mut t_near, mut t_far) = if inv_dir_x >= 0.0 {
        ((min_x - origin_x) * inv_dir_x, (max_x - origin_x) * inv_dir_x)
    } else {
        ((max_x - origin_x) * inv_dir_x, (min_x - origin_x) * inv_dir_x)
    };
    let (tymin, tymax) = if inv_dir_y >= 0.0 {
        ((min_y - origin_y) * inv_dir_y, (max_y - origin_y) * inv_dir_y)
    } else {
        ((max_y - origin_y) * inv_dir_y, (min_y - origin_y) * inv_dir_y)
    };
    if t_near > tymax || tymin > t_far {
        return false;
    }
    t_near = if tymin > t_near || t_near.is_nan() { tymin } else { t_near };
    t_far = if tymax < t_far || t_far.is_nan() { tymax } else { t_far };
    t_near < t_far && t_far >= 0.0
}

/// `(near, far, side)` of the ray hit against the rectangle `[min, max]`,
/// where `side` names the rectangle edge the entry point is nearest to.
pub fn intersect_ray_aar(
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
) -> Option<(f32, f32, AarSide)> {
    let inv_dir_x = 1.0 / dir_x;
    let inv_dir_y = 1.0 / dir_y;
    let (mut t_near, mut t_far) = if inv_dir_x >= 0.0 {
        ((min_x - origin_x) * inv_dir_x, (max_x - origin_x) * inv_dir_x)
    } else {
        ((max_x - origin_x) * inv_dir_x, (min_x - origin_x) * inv_dir_x)
    };
    let (tymin, tymax) = if inv_dir_y >= 0.0 {
        ((min_y - origin_y) * inv_dir_y, (max_y - origin_y) * inv_dir_y)
    } else {
        ((max_y - origin_y) * inv_dir_y, (min_y - origin_y) * inv_dir_y)
    };
    if t_near > tymax || tymin > t_far {
        return None;
    }
    t_near = if tymin > t_near || t_near.is_nan() { tymin } else { t_near };
    t_far = if tymax < t_far || t_far.is_nan() { tymax } else { t_far };
    if t_near < t_far && t_far >= 0.0 {
        let px = origin_x + t_near * dir_x;
        let py = origin_y + t_near * dir_y;
        let da_x = (px - min_x).abs();
        let da_y = (py - min_y).abs();
        let db_x = (px - max_x).abs();
        let db_y = (py - max_y).abs();
        let mut side = AarSide::MinX;
        let mut min = da_x;
        if da_y < min {
            min = da_y;
            side = AarSide::MinY;
        }
        if db_x < min {
            min = db_x;
            side = AarSide::MaxX;
        }
        if db_y < min {
            side = AarSide::MaxY;
        }
        return Some((t_near, t_far, side));
    }
    None
}

/// Classify the segment `p0 -> p1` against the rectangle `[min, max]`.
pub fn intersect_line_segment_aar(
    p0_x: f32,
    p0_y: f32,
    p1_x: f32,
    p1_y: f32,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
) -> SegmentBoxIntersection {
    let dir_x = p1_x - p0_x;
    let dir_y = p1_y - p0_y;
    let inv_dir_x = 1.0 / dir_x;
    let inv_dir_y = 1.0 / dir_y;
    let (mut t_near, mut t_far) = if inv_dir_x >= 0.0 {
        ((min_x - p0_x) * inv_dir_x, (max_x - p0_x) * inv_dir_x)
    } else {
        ((max_x - p0_x) * inv_dir_x, (min_x - p0_x) * inv_dir_x)
    };
    let (tymin, tymax) = if inv_dir_y >= 0.0 {
        ((min_y - p0_y) * inv_dir_y, (max_y - p0_y) * inv_dir_y)
    } else {
        ((max_y - p0_y) * inv_dir_y, (min_y - p0_y) * inv_dir_y)
    };
    if t_near > tymax || tymin > t_far {
        return SegmentBoxIntersection::Outside;
    }
    t_near = if tymin > t_near || t_near.is_nan() { tymin } else { t_near };
    t_far = if tymax < t_far || t_far.is_nan() { tymax } else { t_far };
    classify_segment_window(t_near, t_far)
}

// Shared tail of the segment/box classifications: decide how the slab
// window [t_near, t_far] overlaps the segment's own [0, 1] range.
fn classify_segment_window(t_near: f32, t_far: f32) -> SegmentBoxIntersection {
    if t_near < t_far && t_near <= 1.0 && t_far >= 0.0 {
        if t_near > 0.0 && t_far > 1.0 {
            SegmentBoxIntersection::One(t_near)
        } else if t_near < 0.0 && t_far < 1.0 {
            SegmentBoxIntersection::One(t_far)
        } else if t_near < 0.0 && t_far > 1.0 {
            SegmentBoxIntersection::Inside(t_near, t_far)
        } else {
            SegmentBoxIntersection::Two(t_near, t_far)
        }
    } else {
        SegmentBoxIntersection::Outside
    }
}
