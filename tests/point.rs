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

use isect::geometry::{Point2, Point3, Sphere, Triangle2};
use isect::query::point::{
    distance_point_line, distance_point_line_through, distance_point_line_through_3d,
    distance_point_plane, distance_point_triangle_plane, test_point_aab, test_point_aar,
    test_point_circle, test_point_triangle,
};

#[test]
fn test_point_inside_triangle() {
    assert!(test_point_triangle(0.25, 0.25, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0));
    assert!(!test_point_triangle(1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_point_on_triangle_edge_counts_as_inside() {
    assert!(test_point_triangle(0.5, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0));
    assert!(test_point_triangle(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_point_triangle_either_winding() {
    // same triangle, CW vertex order
    assert!(test_point_triangle(0.25, 0.25, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0));
}

#[test]
fn test_point_triangle_wrapper() {
    let tri = Triangle2::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    );
    assert!(tri.contains_point(Point2::new(0.25, 0.25)));
    assert!(!tri.contains_point(Point2::new(-0.25, 0.25)));
}

#[test]
fn test_point_aar_closed_bounds() {
    assert!(test_point_aar(0.0, 0.0, 0.0, 0.0, 1.0, 1.0));
    assert!(test_point_aar(1.0, 1.0, 0.0, 0.0, 1.0, 1.0));
    assert!(!test_point_aar(1.1, 0.5, 0.0, 0.0, 1.0, 1.0));
}

#[test]
fn test_point_aab_closed_bounds() {
    assert!(test_point_aab(0.5, 0.5, 0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0));
    assert!(test_point_aab(1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0));
    assert!(!test_point_aab(0.5, 0.5, -0.1, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0));
}

#[test]
fn test_point_circle_boundary() {
    assert!(test_point_circle(1.0, 0.0, 0.0, 0.0, 1.0));
    assert!(!test_point_circle(1.1, 0.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_point_sphere_wrapper() {
    let s = Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0);
    assert!(s.contains_point(Point3::new(0.0, 1.0, 0.0)));
    assert!(!s.contains_point(Point3::new(0.0, 1.1, 0.0)));
}

#[test]
fn test_distance_point_plane_signed() {
    // plane z = 0, normal +z
    assert_eq!(distance_point_plane(0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 0.0), 2.0);
    assert_eq!(
        distance_point_plane(0.0, 0.0, -3.0, 0.0, 0.0, 1.0, 0.0),
        -3.0
    );
}

#[test]
fn test_distance_point_triangle_plane_signed() {
    let d = distance_point_triangle_plane(
        0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    );
    assert_eq!(d, 5.0);
    let d = distance_point_triangle_plane(
        0.0, 0.0, -5.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    );
    assert_eq!(d, -5.0);
}

#[test]
fn test_distance_point_line_forms_agree() {
    // line x = 0
    assert_eq!(distance_point_line(3.0, 5.0, 1.0, 0.0, 0.0), 3.0);
    // the same line through two points
    assert_eq!(
        distance_point_line_through(2.0, 0.0, 0.0, 0.0, 0.0, 1.0),
        2.0
    );
}

#[test]
fn test_distance_point_line_3d() {
    let d = distance_point_line_through_3d(0.0, 3.0, 4.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    assert_eq!(d, 5.0);
}
