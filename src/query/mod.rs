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

//! The intersection/query engine.
//!
//! Canonical implementations over decomposed `f32` coordinates, one file per
//! primitive-pair group. Every routine is a pure function: absence of an
//! intersection is an expected outcome reported through the return value,
//! degenerate input either hits an explicit epsilon guard or propagates
//! NaN/Infinity into comparisons that filter it out. No routine panics on
//! geometric input.

pub mod boxes;
pub mod circle;
pub mod closest;
pub mod line;
pub mod plane;
pub mod point;
pub mod polygon;
pub mod ray_box;
pub mod sphere;
pub mod swept;
pub mod triangle;

/// The Voronoi region of a triangle a closest-point or contact query
/// resolved to.
///
/// Each of the seven regions gets its own variant, so the face region is
/// never conflated with a vertex or edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointOnTriangle {
    Vertex0,
    Vertex1,
    Vertex2,
    Edge01,
    Edge12,
    Edge20,
    Face,
}

/// The side of an axis-aligned rectangle a ray intersection is nearest to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AarSide {
    MinX,
    MinY,
    MaxX,
    MaxY,
}

/// Classification of a line segment against an axis-aligned box or
/// rectangle.
///
/// `One` carries the single parametric intersection, `Two` the near/far
/// pair in `[0, 1]`, and `Inside` the unclamped slab window (near below 0,
/// far above 1) of a segment fully contained in the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentBoxIntersection {
    Outside,
    One(f32),
    Two(f32, f32),
    Inside(f32, f32),
}

impl SegmentBoxIntersection {
    /// Whether any part of the segment lies in the box.
    pub fn intersects(&self) -> bool {
        !matches!(self, SegmentBoxIntersection::Outside)
    }
}
