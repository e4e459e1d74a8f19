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

use crate::point_set::vertex::VertexId;

/// Index of an edge inside the arena of one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// A directed candidate edge between two points below an anchor.
///
/// `weight` stays unset until the recurrence finalizes the edge as an outgoing edge of
/// its source; `prev` links to the edge the chain arrived through and always points at
/// an edge finalized earlier in the same sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: Option<i64>,
    pub bearing: f64,
    pub prev: Option<EdgeId>,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId, bearing: f64) -> Self {
        Self {
            source,
            target,
            weight: None,
            bearing,
            prev: None,
        }
    }

    /// The finalized weight, or zero while unset.
    #[inline]
    pub fn weight(&self) -> i64 {
        self.weight.unwrap_or(0)
    }
}

/// Append-only storage for every edge created during one run.
#[derive(Debug, Clone, Default)]
pub struct EdgeArena {
    edges: Vec<Edge>,
}

impl EdgeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edge: Edge) -> EdgeId {
        self.edges.push(edge);
        EdgeId(self.edges.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Assigns the weight and predecessor of an edge. Each edge is finalized once.
    pub fn finalize(&mut self, id: EdgeId, weight: i64, prev: Option<EdgeId>) {
        let edge = &mut self.edges[id.0];
        debug_assert!(edge.weight.is_none(), "edge {:?} finalized twice", id);
        edge.weight = Some(weight);
        edge.prev = prev;
    }

    /// Follows predecessor links from `start` back to the edge that opened the chain.
    pub fn chain(&self, start: EdgeId) -> impl Iterator<Item = EdgeId> + '_ {
        std::iter::successors(Some(start), move |id| self[*id].prev)
    }
}

impl std::ops::Index<EdgeId> for EdgeArena {
    type Output = Edge;
    fn index(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }
}
