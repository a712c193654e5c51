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

//! Randomized consistency checks with a fixed seed.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use isect::geometry::{Aabb, OrientedBox, Point2, Point3, Ray3, Sphere, Vector3};
use isect::query::SegmentBoxIntersection;
use isect::query::boxes::test_aab_aab;
use isect::query::circle::test_line_segment_circle;
use isect::query::closest::{find_closest_point_on_line_segment, find_closest_point_on_triangle};
use isect::query::point::{distance_point_triangle_plane, test_point_aab};
use isect::query::polygon::test_polygon_polygon;
use isect::query::ray_box::intersect_line_segment_aab;
use isect::query::sphere::{test_line_segment_sphere, test_sphere_sphere};
use isect::query::triangle::{intersect_ray_triangle, test_line_segment_triangle};

fn random_point(rng: &mut StdRng) -> Point3<f32> {
    Point3::new(
        rng.random_range(-5.0f32..5.0),
        rng.random_range(-5.0f32..5.0),
        rng.random_range(-5.0f32..5.0),
    )
}

fn random_point_2d(rng: &mut StdRng) -> Point2<f32> {
    Point2::new(
        rng.random_range(-5.0f32..5.0),
        rng.random_range(-5.0f32..5.0),
    )
}

fn random_aabb(rng: &mut StdRng) -> Aabb<f32> {
    let a = random_point(rng);
    let b = random_point(rng);
    Aabb::new(
        Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
        Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
    )
}

#[test]
fn test_aab_aab_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let a = random_aabb(&mut rng);
        let b = random_aabb(&mut rng);
        let ab = test_aab_aab(
            a.min.x, a.min.y, a.min.z, a.max.x, a.max.y, a.max.z, b.min.x, b.min.y, b.min.z,
            b.max.x, b.max.y, b.max.z,
        );
        let ba = test_aab_aab(
            b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z, a.min.x, a.min.y, a.min.z,
            a.max.x, a.max.y, a.max.z,
        );
        assert_eq!(ab, ba);
    }
}

#[test]
fn test_aab_containing_shared_point_intersects() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let a = random_aabb(&mut rng);
        let b = random_aabb(&mut rng);
        let p = random_point(&mut rng);
        let in_a = test_point_aab(
            p.x, p.y, p.z, a.min.x, a.min.y, a.min.z, a.max.x, a.max.y, a.max.z,
        );
        let in_b = test_point_aab(
            p.x, p.y, p.z, b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z,
        );
        if in_a && in_b {
            assert!(a.test_aab(&b));
        }
    }
}

#[test]
fn test_sphere_sphere_matches_distance_bounds() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..1000 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let ra = rng.random_range(0.1f32..3.0);
        let rb = rng.random_range(0.1f32..3.0);
        let d = a.distance(&b);
        // the surfaces intersect iff the distance is between |ra - rb|
        // and ra + rb; skip samples too close to either boundary for a
        // stable float comparison
        let expected = d <= ra + rb && d >= (ra - rb).abs();
        let near_boundary =
            (d - (ra + rb)).abs() < 1e-3 || (d - (ra - rb).abs()).abs() < 1e-3 || d < 1e-3;
        if near_boundary {
            continue;
        }
        assert_eq!(
            test_sphere_sphere(a.x, a.y, a.z, ra * ra, b.x, b.y, b.z, rb * rb),
            expected
        );
    }
}

#[test]
fn test_ray_aab_hit_points_lie_on_box() {
    let mut rng = StdRng::seed_from_u64(99);
    let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let mut hits = 0;
    for _ in 0..1000 {
        let origin = Point3::new(
            rng.random_range(2.0f32..5.0),
            rng.random_range(-3.0f32..3.0),
            rng.random_range(-3.0f32..3.0),
        );
        let target = random_point(&mut rng);
        let dir = Vector3::new(target.x - origin.x, target.y - origin.y, target.z - origin.z);
        let ray = Ray3::new(origin, dir);
        if let Some((near, far)) = aabb.intersect_ray(&ray) {
            assert!(near < far);
            let entry = ray.at(near);
            let exit = ray.at(far);
            for p in [entry, exit] {
                assert!(p.x >= -1.001 && p.x <= 1.001);
                assert!(p.y >= -1.001 && p.y <= 1.001);
                assert!(p.z >= -1.001 && p.z <= 1.001);
            }
            hits += 1;
        }
    }
    assert!(hits > 0);
}

#[test]
fn test_closest_point_on_segment_is_nearest_sample() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let p = random_point(&mut rng);
        let q = find_closest_point_on_line_segment(a.x, a.y, a.z, b.x, b.y, b.z, p.x, p.y, p.z);
        let best = p.distance_squared(&q);
        // no sampled point on the segment may be closer
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let s = Point3::new(
                a.x + t * (b.x - a.x),
                a.y + t * (b.y - a.y),
                a.z + t * (b.z - a.z),
            );
            assert!(best <= p.distance_squared(&s) + 1e-4);
        }
    }
}

#[test]
fn test_closest_point_on_triangle_beats_vertices() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..500 {
        let v0 = random_point(&mut rng);
        let v1 = random_point(&mut rng);
        let v2 = random_point(&mut rng);
        let p = random_point(&mut rng);
        let (q, _) = find_closest_point_on_triangle(
            v0.x, v0.y, v0.z, v1.x, v1.y, v1.z, v2.x, v2.y, v2.z, p.x, p.y, p.z,
        );
        let best = p.distance_squared(&q);
        for v in [v0, v1, v2] {
            assert!(best <= p.distance_squared(&v) + 1e-4);
        }
    }
}

#[test]
fn test_segment_aab_endpoint_order_invariance() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..1000 {
        let aabb = random_aabb(&mut rng);
        let p0 = random_point(&mut rng);
        let p1 = random_point(&mut rng);
        let fwd = intersect_line_segment_aab(
            p0.x, p0.y, p0.z, p1.x, p1.y, p1.z, aabb.min.x, aabb.min.y, aabb.min.z, aabb.max.x,
            aabb.max.y, aabb.max.z,
        );
        let rev = intersect_line_segment_aab(
            p1.x, p1.y, p1.z, p0.x, p0.y, p0.z, aabb.min.x, aabb.min.y, aabb.min.z, aabb.max.x,
            aabb.max.y, aabb.max.z,
        );
        assert_eq!(fwd.intersects(), rev.intersects());
        // a crossing seen from the other end carries the mirrored window
        if let (SegmentBoxIntersection::Two(a, b), SegmentBoxIntersection::Two(c, d)) = (fwd, rev)
        {
            assert!((a - (1.0 - d)).abs() < 1e-3);
            assert!((b - (1.0 - c)).abs() < 1e-3);
        }
    }
}

#[test]
fn test_segment_triangle_endpoint_order_invariance() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..1000 {
        let v0 = random_point(&mut rng);
        let v1 = random_point(&mut rng);
        let v2 = random_point(&mut rng);
        let p0 = random_point(&mut rng);
        let p1 = random_point(&mut rng);
        let fwd = test_line_segment_triangle(
            p0.x, p0.y, p0.z, p1.x, p1.y, p1.z, v0.x, v0.y, v0.z, v1.x, v1.y, v1.z, v2.x, v2.y,
            v2.z, 1e-6,
        );
        let rev = test_line_segment_triangle(
            p1.x, p1.y, p1.z, p0.x, p0.y, p0.z, v0.x, v0.y, v0.z, v1.x, v1.y, v1.z, v2.x, v2.y,
            v2.z, 1e-6,
        );
        assert_eq!(fwd, rev);
    }
}

#[test]
fn test_segment_sphere_endpoint_order_invariance() {
    let mut rng = StdRng::seed_from_u64(47);
    for _ in 0..1000 {
        let p0 = random_point(&mut rng);
        let p1 = random_point(&mut rng);
        let c = random_point(&mut rng);
        let r = rng.random_range(0.1f32..3.0);
        let fwd = test_line_segment_sphere(p0.x, p0.y, p0.z, p1.x, p1.y, p1.z, c.x, c.y, c.z, r * r);
        let rev = test_line_segment_sphere(p1.x, p1.y, p1.z, p0.x, p0.y, p0.z, c.x, c.y, c.z, r * r);
        assert_eq!(fwd, rev);
    }
}

#[test]
fn test_segment_circle_endpoint_order_invariance() {
    let mut rng = StdRng::seed_from_u64(53);
    for _ in 0..1000 {
        let p0 = random_point_2d(&mut rng);
        let p1 = random_point_2d(&mut rng);
        let c = random_point_2d(&mut rng);
        let r = rng.random_range(0.1f32..3.0);
        let fwd = test_line_segment_circle(p0.x, p0.y, p1.x, p1.y, c.x, c.y, r);
        let rev = test_line_segment_circle(p1.x, p1.y, p0.x, p0.y, c.x, c.y, r);
        assert_eq!(fwd, rev);
    }
}

#[test]
fn test_ray_and_segment_triangle_agree() {
    let mut rng = StdRng::seed_from_u64(61);
    let mut hits = 0;
    for _ in 0..1000 {
        let v0 = random_point(&mut rng);
        let v1 = random_point(&mut rng);
        let v2 = random_point(&mut rng);
        let origin = random_point(&mut rng);
        let end = random_point(&mut rng);
        let dir = end - origin;
        // the epsilon gates the unnormalized determinant; a generous value
        // rejects near-parallel configurations whose t is too imprecise to
        // check against the plane
        let t = intersect_ray_triangle(
            origin.x, origin.y, origin.z, dir.x, dir.y, dir.z, v0.x, v0.y, v0.z, v1.x, v1.y,
            v1.z, v2.x, v2.y, v2.z, 0.5,
        );
        if let Some(t) = t {
            if (0.0..=1.0).contains(&t) {
                // the segment test must agree, and the hit point must sit
                // on the triangle's plane
                assert!(test_line_segment_triangle(
                    origin.x, origin.y, origin.z, end.x, end.y, end.z, v0.x, v0.y, v0.z, v1.x,
                    v1.y, v1.z, v2.x, v2.y, v2.z, 0.5,
                ));
                let hit = origin + dir * t;
                let dist = distance_point_triangle_plane(
                    hit.x, hit.y, hit.z, v0.x, v0.y, v0.z, v1.x, v1.y, v1.z, v2.x, v2.y, v2.z,
                );
                assert!(dist.abs() < 1e-2);
                hits += 1;
            }
        }
    }
    assert!(hits > 0);
}

// yaw about z, then pitch about x; the rows stay orthonormal
fn random_axes(rng: &mut StdRng) -> (Vector3<f32>, Vector3<f32>, Vector3<f32>) {
    let (sa, ca) = rng.random_range(0.0f32..std::f32::consts::TAU).sin_cos();
    let (sb, cb) = rng.random_range(0.0f32..std::f32::consts::TAU).sin_cos();
    (
        Vector3::new(ca, sa, 0.0),
        Vector3::new(-sa * cb, ca * cb, sb),
        Vector3::new(sa * sb, -ca * sb, cb),
    )
}

fn random_ob(rng: &mut StdRng) -> OrientedBox<f32> {
    let (ax, ay, az) = random_axes(rng);
    OrientedBox::new(
        random_point(rng),
        ax,
        ay,
        az,
        Vector3::new(
            rng.random_range(0.1f32..2.0),
            rng.random_range(0.1f32..2.0),
            rng.random_range(0.1f32..2.0),
        ),
    )
}

#[test]
fn test_ob_ob_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(71);
    for _ in 0..500 {
        let a = random_ob(&mut rng);
        let b = random_ob(&mut rng);
        assert_eq!(a.test_ob(&b), b.test_ob(&a));
    }
}

#[test]
fn test_polygon_polygon_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(83);
    for _ in 0..500 {
        let a = [
            random_point_2d(&mut rng),
            random_point_2d(&mut rng),
            random_point_2d(&mut rng),
        ];
        let b = [
            random_point_2d(&mut rng),
            random_point_2d(&mut rng),
            random_point_2d(&mut rng),
        ];
        assert_eq!(test_polygon_polygon(&a, &b), test_polygon_polygon(&b, &a));
    }
}

#[test]
fn test_sphere_contains_its_interior_samples() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let center = random_point(&mut rng);
        let radius = rng.random_range(0.5f32..3.0);
        let sphere = Sphere::new(center, radius);
        // a point strictly inside
        let f = rng.random_range(0.0f32..0.9);
        let dir = Vector3::new(
            rng.random_range(-1.0f32..1.0),
            rng.random_range(-1.0f32..1.0),
            rng.random_range(-1.0f32..1.0),
        );
        let len = (dir.x * dir.x + dir.y * dir.y + dir.z * dir.z).sqrt();
        if len < 1e-3 {
            continue;
        }
        let inside = Point3::new(
            center.x + dir.x / len * radius * f,
            center.y + dir.y / len * radius * f,
            center.z + dir.z / len * radius * f,
        );
        assert!(sphere.contains_point(inside));
        let outside = Point3::new(
            center.x + dir.x / len * radius * 1.5,
            center.y + dir.y / len * radius * 1.5,
            center.z + dir.z / len * radius * 1.5,
        );
        assert!(!sphere.contains_point(outside));
    }
}
