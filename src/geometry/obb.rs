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

use num_traits::Float;

use crate::geometry::{Point3, Vector3};
use crate::query;

/// An oriented box given by center, three local axes and half-extents.
///
/// The axes must be unit length and mutually orthogonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox<T: Float> {
    pub center: Point3<T>,
    pub axis_x: Vector3<T>,
    pub axis_y: Vector3<T>,
    pub axis_z: Vector3<T>,
    pub half_extents: Vector3<T>,
}

impl<T: Float> OrientedBox<T> {
    pub fn new(
        center: Point3<T>,
        axis_x: Vector3<T>,
        axis_y: Vector3<T>,
        axis_z: Vector3<T>,
        half_extents: Vector3<T>,
    ) -> Self {
        Self {
            center,
            axis_x,
            axis_y,
            axis_z,
            half_extents,
        }
    }

    /// Axis-aligned box as an oriented box.
    pub fn axis_aligned(center: Point3<T>, half_extents: Vector3<T>) -> Self {
        Self {
            center,
            axis_x: Vector3::new(T::one(), T::zero(), T::zero()),
            axis_y: Vector3::new(T::zero(), T::one(), T::zero()),
            axis_z: Vector3::new(T::zero(), T::zero(), T::one()),
            half_extents,
        }
    }
}

impl OrientedBox<f32> {
    /// Separating-axis overlap test against `other`.
    pub fn test_ob(&self, other: &OrientedBox<f32>) -> bool {
        query::boxes::test_ob_ob(
            self.center.x,
            self.center.y,
            self.center.z,
            self.axis_x.x,
            self.axis_x.y,
            self.axis_x.z,
            self.axis_y.x,
            self.axis_y.y,
            self.axis_y.z,
            self.axis_z.x,
            self.axis_z.y,
            self.axis_z.z,
            self.half_extents.x,
            self.half_extents.y,
            self.half_extents.z,
            other.center.x,
            other.center.y,
            other.center.z,
            other.axis_x.x,
            other.axis_x.y,
            other.axis_x.z,
            other.axis_y.x,
            other.axis_y.y,
            other.axis_y.z,
            other.axis_z.x,
            other.axis_z.y,
            other.axis_z.z,
            other.half_extents.x,
            other.half_extents.y,
            other.half_extents.z,
        )
    }
}
