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

use isect::geometry::{Aabb, Aar, Point2, Point3, Ray2, Ray3, Segment2, Segment3, Vector2, Vector3};
use isect::query::{AarSide, SegmentBoxIntersection};
use isect::query::ray_box::{
    intersect_line_segment_aab, intersect_line_segment_aar, intersect_ray_aab, intersect_ray_aar,
    test_ray_aab, test_ray_aar,
};

#[test]
fn test_ray_enters_and_exits_unit_box() {
    assert!(test_ray_aab(
        -5.0, 0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0
    ));
    let (near, far) = intersect_ray_aab(
        -5.0, 0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    )
    .unwrap();
    assert_eq!(near, 5.0);
    assert_eq!(far, 6.0);
}

#[test]
fn test_ray_aab_origin_on_slab_boundary() {
    // origin y sits on the min-y face; the 0 * inf slab parameter is NaN
    // and must not reject the hit
    let r = intersect_ray_aab(
        -5.0, 0.0, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    );
    assert_eq!(r, Some((5.0, 6.0)));
}

#[test]
fn test_ray_aab_origin_inside() {
    let (near, far) = intersect_ray_aab(
        0.5, 0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    )
    .unwrap();
    assert_eq!(near, -0.5);
    assert_eq!(far, 0.5);
}

#[test]
fn test_ray_aab_box_behind_origin() {
    assert!(!test_ray_aab(
        5.0, 0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0
    ));
    assert!(
        intersect_ray_aab(5.0, 0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0).is_none()
    );
}

#[test]
fn test_ray_aab_wrapper() {
    let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    let ray = Ray3::new(Point3::new(-5.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(aabb.intersect_ray(&ray), Some((5.0, 6.0)));
}

#[test]
fn test_segment_fully_inside_box() {
    let r = intersect_line_segment_aab(
        0.25, 0.5, 0.5, 0.75, 0.5, 0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    );
    assert_eq!(r, SegmentBoxIntersection::Inside(-0.5, 1.5));
    assert!(r.intersects());
}

#[test]
fn test_segment_through_box() {
    let r = intersect_line_segment_aab(
        -0.5, 0.5, 0.5, 1.5, 0.5, 0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    );
    assert_eq!(r, SegmentBoxIntersection::Two(0.25, 0.75));
}

#[test]
fn test_segment_leaving_box() {
    // starts inside, ends outside; one boundary crossing
    let r = intersect_line_segment_aab(
        0.5, 0.5, 0.5, 2.5, 0.5, 0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    );
    assert_eq!(r, SegmentBoxIntersection::One(0.25));
}

#[test]
fn test_segment_through_box_reversed_endpoints() {
    // same crossing walked from the far end; the window mirrors to 1 - t
    let r = intersect_line_segment_aab(
        -1.0, 0.5, 0.5, 3.0, 0.5, 0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    );
    assert_eq!(r, SegmentBoxIntersection::Two(0.25, 0.5));
    let r = intersect_line_segment_aab(
        3.0, 0.5, 0.5, -1.0, 0.5, 0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    );
    assert_eq!(r, SegmentBoxIntersection::Two(0.5, 0.75));
}

#[test]
fn test_segment_outside_box() {
    let r = intersect_line_segment_aab(
        2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0,
    );
    assert_eq!(r, SegmentBoxIntersection::Outside);
    assert!(!r.intersects());
}

#[test]
fn test_segment_aab_wrapper() {
    let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    let seg = Segment3::new(Point3::new(0.25, 0.5, 0.5), Point3::new(0.75, 0.5, 0.5));
    assert!(aabb.intersect_segment(&seg).intersects());
}

#[test]
fn test_ray_against_rectangle() {
    assert!(test_ray_aar(-2.0, 0.5, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0));
    let (near, far, side) = intersect_ray_aar(-2.0, 0.5, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
    assert_eq!(near, 2.0);
    assert_eq!(far, 3.0);
    assert_eq!(side, AarSide::MinX);
}

#[test]
fn test_ray_aar_entry_side_from_above() {
    let (near, far, side) = intersect_ray_aar(0.5, 3.0, 0.0, -1.0, 0.0, 0.0, 1.0, 1.0).unwrap();
    assert_eq!(near, 2.0);
    assert_eq!(far, 3.0);
    assert_eq!(side, AarSide::MaxY);
}

#[test]
fn test_ray_aar_wrapper() {
    let aar = Aar::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
    let ray = Ray2::new(Point2::new(-2.0, 0.5), Vector2::new(1.0, 0.0));
    assert!(aar.test_ray(&ray));
    assert_eq!(aar.intersect_ray(&ray), Some((2.0, 3.0, AarSide::MinX)));
}

#[test]
fn test_segment_through_rectangle() {
    let r = intersect_line_segment_aar(-1.0, 0.5, 3.0, 0.5, 0.0, 0.0, 1.0, 1.0);
    assert_eq!(r, SegmentBoxIntersection::Two(0.25, 0.5));
}

#[test]
fn test_segment_inside_rectangle() {
    let aar = Aar::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
    let seg = Segment2::new(Point2::new(0.25, 0.5), Point2::new(0.75, 0.5));
    assert_eq!(
        aar.intersect_segment(&seg),
        SegmentBoxIntersection::Inside(-0.5, 1.5)
    );
}

#[test]
fn test_segment_outside_rectangle() {
    let r = intersect_line_segment_aar(2.0, 2.0, 3.0, 2.0, 0.0, 0.0, 1.0, 1.0);
    assert_eq!(r, SegmentBoxIntersection::Outside);
}
