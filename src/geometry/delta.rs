// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
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

use crate::point_set::Vertex;

/// A triangular probe: an anchor and two further vertices.
///
/// Deltas are built for a single predicate check and dropped; they borrow the vertices
/// they span.
#[derive(Debug, Clone, Copy)]
pub struct Delta<'a> {
    corners: [&'a Vertex; 3],
}

impl<'a> Delta<'a> {
    /// # Panics
    /// If the three vertices are not pairwise distinct (by label).
    pub fn new(anchor: &'a Vertex, a: &'a Vertex, b: &'a Vertex) -> Self {
        assert!(
            anchor.label != a.label && anchor.label != b.label && a.label != b.label,
            "delta corners must be distinct: {}, {}, {}",
            anchor.label,
            a.label,
            b.label
        );
        Self {
            corners: [anchor, a, b],
        }
    }

    pub fn anchor(&self) -> &'a Vertex {
        self.corners[0]
    }

    pub fn corners(&self) -> &[&'a Vertex; 3] {
        &self.corners
    }

    /// The two corners other than the anchor.
    pub fn others(&self) -> [&'a Vertex; 2] {
        [self.corners[1], self.corners[2]]
    }

    pub fn has_corner(&self, v: &Vertex) -> bool {
        self.corners.iter().any(|c| c.label == v.label)
    }
}
