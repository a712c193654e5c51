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

use isect::geometry::{Aabb, Point3};
use isect::query::boxes::{
    test_aab_aab, test_aab_sphere, test_aar_aar, test_aar_circle, test_aar_line,
    test_aar_line_through, test_ob_ob,
};

#[test]
fn test_aab_aab_overlap() {
    assert!(test_aab_aab(
        0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 3.0, 3.0, 3.0
    ));
    assert!(!test_aab_aab(
        0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0
    ));
}

#[test]
fn test_aab_aab_touching_faces_intersect() {
    // maxX of the first equals minX of the second
    assert!(test_aab_aab(
        0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 2.0, 1.0, 1.0
    ));
}

#[test]
fn test_aab_aab_wrapper() {
    let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Point3::new(0.5, 0.5, 0.5), Point3::new(2.0, 2.0, 2.0));
    assert!(a.test_aab(&b));
    assert!(b.test_aab(&a));
}

#[test]
fn test_aar_aar_touching_edges_intersect() {
    assert!(test_aar_aar(0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0));
    assert!(!test_aar_aar(0.0, 0.0, 1.0, 1.0, 1.5, 0.0, 2.0, 1.0));
}

#[test]
fn test_ob_ob_axis_aligned() {
    // two unit half-extent boxes, identity orientation
    let id = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    assert!(test_ob_ob(
        0.0, 0.0, 0.0, id[0], id[1], id[2], id[3], id[4], id[5], id[6], id[7], id[8], 1.0, 1.0,
        1.0, 1.5, 0.0, 0.0, id[0], id[1], id[2], id[3], id[4], id[5], id[6], id[7], id[8], 1.0,
        1.0, 1.0,
    ));
    assert!(!test_ob_ob(
        0.0, 0.0, 0.0, id[0], id[1], id[2], id[3], id[4], id[5], id[6], id[7], id[8], 1.0, 1.0,
        1.0, 3.0, 0.0, 0.0, id[0], id[1], id[2], id[3], id[4], id[5], id[6], id[7], id[8], 1.0,
        1.0, 1.0,
    ));
}

#[test]
fn test_ob_ob_rotated() {
    // second box rotated 45 degrees about z; its x reach is sqrt(2)
    let s = std::f32::consts::FRAC_1_SQRT_2;
    let id = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let rot = [s, s, 0.0, -s, s, 0.0, 0.0, 0.0, 1.0];
    // corner of the rotated box penetrates the face of the first
    assert!(test_ob_ob(
        0.0, 0.0, 0.0, id[0], id[1], id[2], id[3], id[4], id[5], id[6], id[7], id[8], 1.0, 1.0,
        1.0, 2.0, 0.0, 0.0, rot[0], rot[1], rot[2], rot[3], rot[4], rot[5], rot[6], rot[7],
        rot[8], 1.0, 1.0, 1.0,
    ));
    // pulled back past 1 + sqrt(2), the x axis separates them
    assert!(!test_ob_ob(
        0.0, 0.0, 0.0, id[0], id[1], id[2], id[3], id[4], id[5], id[6], id[7], id[8], 1.0, 1.0,
        1.0, 2.75, 0.0, 0.0, rot[0], rot[1], rot[2], rot[3], rot[4], rot[5], rot[6], rot[7],
        rot[8], 1.0, 1.0, 1.0,
    ));
}

#[test]
fn test_aab_sphere_overlap() {
    // touching face counts
    assert!(test_aab_sphere(
        -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 2.0, 0.0, 0.0, 1.0
    ));
    assert!(!test_aab_sphere(
        -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 2.5, 0.0, 0.0, 1.0
    ));
    // sphere center inside the box
    assert!(test_aab_sphere(
        -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.25
    ));
}

#[test]
fn test_aar_circle_overlap() {
    assert!(test_aar_circle(-1.0, -1.0, 1.0, 1.0, 2.0, 0.0, 1.0));
    assert!(!test_aar_circle(-1.0, -1.0, 1.0, 1.0, 2.5, 0.0, 1.0));
    // corner distance decides
    assert!(!test_aar_circle(-1.0, -1.0, 1.0, 1.0, 2.0, 2.0, 1.9));
    assert!(test_aar_circle(-1.0, -1.0, 1.0, 1.0, 2.0, 2.0, 2.1));
}

#[test]
fn test_aar_against_line() {
    // line x - y = 0 through the rectangle [1,2]x[0,3]
    assert!(test_aar_line(1.0, 0.0, 2.0, 3.0, 1.0, -1.0, 0.0));
    // and past the rectangle [2,3]x[0,0.5]
    assert!(!test_aar_line(2.0, 0.0, 3.0, 0.5, 1.0, -1.0, 0.0));
}

#[test]
fn test_aar_against_line_through_points() {
    // the same line y = x, defined by two points
    assert!(test_aar_line_through(1.0, 0.0, 2.0, 3.0, 0.0, 0.0, 1.0, 1.0));
    assert!(!test_aar_line_through(
        2.0, 0.0, 3.0, 0.5, 0.0, 0.0, 1.0, 1.0
    ));
}
