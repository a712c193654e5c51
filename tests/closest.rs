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

use isect::geometry::{Point2, Point3, Segment3, Triangle3};
use isect::query::PointOnTriangle;
use isect::query::closest::{
    find_closest_point_on_line_segment, find_closest_point_on_plane,
    find_closest_point_on_rectangle, find_closest_point_on_triangle,
    find_closest_point_on_triangle_2d, find_closest_points_line_segments,
};

#[test]
fn test_closest_point_on_plane() {
    let q = find_closest_point_on_plane(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 5.0);
    assert_eq!(q, Point3::new(1.0, 2.0, 0.0));
}

#[test]
fn test_closest_point_on_segment_interior() {
    let q = find_closest_point_on_line_segment(0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 5.0, 0.0);
    assert_eq!(q, Point3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_closest_point_on_segment_clamps_to_endpoints() {
    let q = find_closest_point_on_line_segment(0.0, 0.0, 0.0, 2.0, 0.0, 0.0, -3.0, 0.0, 0.0);
    assert_eq!(q, Point3::new(0.0, 0.0, 0.0));
    let q = find_closest_point_on_line_segment(0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 7.0, 1.0, 0.0);
    assert_eq!(q, Point3::new(2.0, 0.0, 0.0));
}

#[test]
fn test_closest_point_segment_wrapper() {
    let seg = Segment3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
    assert_eq!(
        seg.closest_point(Point3::new(1.0, 5.0, 0.0)),
        Point3::new(1.0, 0.0, 0.0)
    );
}

#[test]
fn test_closest_points_between_crossing_segments() {
    let (pa, pb, d2) = find_closest_points_line_segments(
        -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 1.0, 1.0,
    );
    assert_eq!(pa, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(pb, Point3::new(0.0, 0.0, 1.0));
    assert_eq!(d2, 1.0);
}

#[test]
fn test_closest_points_between_parallel_segments() {
    let (pa, pb, d2) = find_closest_points_line_segments(
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 2.0, 0.0,
    );
    assert_eq!(pa, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(pb, Point3::new(0.0, 2.0, 0.0));
    assert_eq!(d2, 4.0);
}

#[test]
fn test_closest_points_clamped_to_endpoints() {
    // disjoint collinear segments; nearest endpoints decide
    let (pa, pb, d2) = find_closest_points_line_segments(
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 5.0, 0.0, 0.0,
    );
    assert_eq!(pa, Point3::new(1.0, 0.0, 0.0));
    assert_eq!(pb, Point3::new(3.0, 0.0, 0.0));
    assert_eq!(d2, 4.0);
}

#[test]
fn test_closest_points_degenerate_segments() {
    // both segments are points
    let (pa, pb, d2) = find_closest_points_line_segments(
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 4.0, 0.0, 3.0, 4.0, 0.0,
    );
    assert_eq!(pa, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(pb, Point3::new(3.0, 4.0, 0.0));
    assert_eq!(d2, 25.0);
    // only the first is a point
    let (pa, pb, d2) = find_closest_points_line_segments(
        0.0, 3.0, 0.0, 0.0, 3.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0,
    );
    assert_eq!(pa, Point3::new(0.0, 3.0, 0.0));
    assert_eq!(pb, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(d2, 9.0);
}

#[test]
fn test_closest_point_on_triangle_vertex_region() {
    let (q, region) = find_closest_point_on_triangle(
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, -1.0, 0.0,
    );
    assert_eq!(q, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(region, PointOnTriangle::Vertex0);
}

#[test]
fn test_closest_point_on_triangle_edge_region() {
    let (q, region) = find_closest_point_on_triangle(
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, -1.0, 0.0,
    );
    assert_eq!(q, Point3::new(0.5, 0.0, 0.0));
    assert_eq!(region, PointOnTriangle::Edge01);
}

#[test]
fn test_closest_point_on_triangle_face_region() {
    let (q, region) = find_closest_point_on_triangle(
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.25, 0.25, 3.0,
    );
    assert_eq!(q, Point3::new(0.25, 0.25, 0.0));
    assert_eq!(region, PointOnTriangle::Face);
}

#[test]
fn test_closest_point_on_triangle_query_on_edge() {
    // a point already on the edge is its own closest point
    let (q, region) = find_closest_point_on_triangle(
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, 0.0, 0.0,
    );
    assert_eq!(q, Point3::new(0.5, 0.0, 0.0));
    assert_eq!(region, PointOnTriangle::Edge01);
}

#[test]
fn test_closest_point_on_triangle_query_on_vertex() {
    let (q, region) = find_closest_point_on_triangle(
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0,
    );
    assert_eq!(q, Point3::new(0.0, 1.0, 0.0));
    assert_eq!(region, PointOnTriangle::Vertex2);
    let (q, region) = find_closest_point_on_triangle(
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0,
    );
    assert_eq!(q, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(region, PointOnTriangle::Vertex0);
}

#[test]
fn test_closest_point_on_triangle_2d_query_on_edge() {
    let (q, region) = find_closest_point_on_triangle_2d(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.5, 0.0);
    assert_eq!(q, Point2::new(0.5, 0.0));
    assert_eq!(region, PointOnTriangle::Edge01);
}

#[test]
fn test_closest_point_on_triangle_wrapper() {
    let tri = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    let (q, region) = tri.closest_point(Point3::new(-1.0, -1.0, 0.0));
    assert_eq!(q, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(region, PointOnTriangle::Vertex0);
}

#[test]
fn test_closest_point_on_triangle_2d_regions() {
    let (q, region) =
        find_closest_point_on_triangle_2d(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 2.0, 2.0);
    assert_eq!(q, Point2::new(0.5, 0.5));
    assert_eq!(region, PointOnTriangle::Edge12);
    let (q, region) =
        find_closest_point_on_triangle_2d(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 2.0, -1.0);
    assert_eq!(q, Point2::new(1.0, 0.0));
    assert_eq!(region, PointOnTriangle::Vertex1);
}

#[test]
fn test_closest_point_on_rectangle_interior() {
    let q = find_closest_point_on_rectangle(
        0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.5, 3.0,
    );
    assert_eq!(q, Point3::new(1.0, 0.5, 0.0));
}

#[test]
fn test_closest_point_on_rectangle_corner_clamp() {
    let q = find_closest_point_on_rectangle(
        0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 5.0, 0.0,
    );
    assert_eq!(q, Point3::new(2.0, 1.0, 0.0));
}
