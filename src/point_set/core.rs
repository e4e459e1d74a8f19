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

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::IslandError;
use crate::geometry::Point2;
use crate::point_set::result::{IslandResult, Probe};
use crate::point_set::vertex::{Color, Vertex, VertexId};

/// The colored vertices of one problem instance together with the result of the last run.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    vertices: Vec<Vertex>,
    by_label: HashMap<String, VertexId>,
    result: IslandResult,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices<I>(vertices: I) -> Result<Self, IslandError>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut set = Self::new();
        for v in vertices {
            set.insert(v)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, vertex: Vertex) -> Result<VertexId, IslandError> {
        if !vertex.position.is_finite() {
            return Err(IslandError::NonFiniteCoordinate {
                label: vertex.label,
                x: vertex.position.x,
                y: vertex.position.y,
            });
        }
        if self.by_label.contains_key(&vertex.label) {
            return Err(IslandError::DuplicateLabel(vertex.label));
        }
        let id = VertexId(self.vertices.len());
        self.by_label.insert(vertex.label.clone(), id);
        self.vertices.push(vertex);
        Ok(id)
    }

    pub fn add_vertex(
        &mut self,
        position: Point2<f64>,
        color: Color,
        label: impl Into<String>,
    ) -> Result<VertexId, IslandError> {
        self.insert(Vertex::new(position, color, label))
    }

    /// Adds a vertex under the next free `v<n>` label.
    pub fn push_vertex(&mut self, position: Point2<f64>, color: Color) -> Result<VertexId, IslandError> {
        let label = self.next_label();
        self.add_vertex(position, color, label)
    }

    /// Like [`push_vertex`](Self::push_vertex), but refuses positions closer than
    /// `min_separation` to an existing vertex.
    pub fn place_vertex(
        &mut self,
        position: Point2<f64>,
        color: Color,
        min_separation: f64,
    ) -> Result<VertexId, IslandError> {
        if self.is_position_invalid(&position, min_separation) {
            return Err(IslandError::PositionTooClose {
                x: position.x,
                y: position.y,
                min_separation,
            });
        }
        self.push_vertex(position, color)
    }

    pub fn is_position_invalid(&self, position: &Point2<f64>, min_separation: f64) -> bool {
        !position.is_finite()
            || self
                .vertices
                .iter()
                .any(|v| v.position.distance_to(position) < min_separation)
    }

    fn next_label(&self) -> String {
        let mut n = self.vertices.len() + 1;
        loop {
            let label = format!("v{n}");
            if !self.by_label.contains_key(&label) {
                return label;
            }
            n += 1;
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn id_of(&self, label: &str) -> Option<VertexId> {
        self.by_label.get(label).copied()
    }

    pub fn vertex_by_label(&self, label: &str) -> Option<&Vertex> {
        self.id_of(label).map(|id| self.vertex(id))
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn blue_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_blue()).count()
    }

    pub fn red_count(&self) -> usize {
        self.len() - self.blue_count()
    }

    /// Stable sort by ascending `y`. Invalidates previously handed out [`VertexId`]s.
    ///
    /// `-0.0` and `0.0` compare equal here, as they do in [`is_sorted_y`](Self::is_sorted_y).
    pub fn sort_y(&mut self) {
        if self.is_sorted_y() {
            return;
        }
        self.vertices
            .sort_by(|a, b| a.y().partial_cmp(&b.y()).unwrap_or(Ordering::Equal));
        self.by_label = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.label.clone(), VertexId(i)))
            .collect();
    }

    pub fn is_sorted_y(&self) -> bool {
        self.vertices.is_sorted_by(|a, b| a.y() <= b.y())
    }

    /// Ids of the blue vertices, in the current sequence order.
    pub fn blue_ids(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_blue())
            .map(|(i, _)| VertexId(i))
            .collect()
    }

    pub fn result(&self) -> &IslandResult {
        &self.result
    }

    pub fn max_weight(&self) -> i64 {
        self.result.max_weight()
    }

    pub fn set_max_weight(&mut self, weight: i64) {
        self.result.set_max_weight(weight);
    }

    /// Appends the boundary segment `from`-`to` and its description.
    pub fn add_border(&mut self, from: &str, to: &str) {
        self.result.add_border(from, to);
    }

    pub fn record_probe(&mut self, probe: Probe) {
        self.result.push_probe(probe);
    }

    pub fn clear_result(&mut self) {
        self.result = IslandResult::default();
    }
}
