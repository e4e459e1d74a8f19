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

//! The optimal-island engine.
//!
//! Every blue vertex in turn serves as the anchor of an angular sweep over the blue
//! vertices below it. Pairs of swept points whose triangle with the anchor holds no red
//! vertex become candidate edges, and a recurrence over the sweep order chains
//! compatible triangles while accumulating the blue points they cover. The heaviest
//! chain over all anchors is the island.

use log::{debug, info};

use crate::point_set::{EdgeArena, PointSet};

pub mod reconstruct;
pub mod recurrence;
pub mod sweep;

pub use reconstruct::{AnchorSweep, Optimum, find_optimum, write_island};
pub use recurrence::{partition_edges, process_edges, settle_point};
pub use sweep::{PointState, order_points_below, usable_edges};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Bearings closer than this to zero are treated as zero and nudged to `±bearing_eps`.
    pub bearing_eps: f64,
    /// Subtracted when a probe extends a chain; the anchor and the shared corner are
    /// otherwise counted by both triangles.
    pub shared_corner_adjustment: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bearing_eps: 1e-9,
            shared_corner_adjustment: 2,
        }
    }
}

pub struct WeightComputer<'g> {
    graph: &'g mut PointSet,
    config: EngineConfig,
}

impl<'g> WeightComputer<'g> {
    pub fn new(graph: &'g mut PointSet) -> Self {
        Self::with_config(graph, EngineConfig::default())
    }

    pub fn with_config(graph: &'g mut PointSet, config: EngineConfig) -> Self {
        Self { graph, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the optimal island and stores it in the point set, replacing the result
    /// of any earlier run. Returns the maximum weight; zero means no island.
    ///
    /// The point set is sorted by `y` first, so vertex ids handed out before the call
    /// are no longer valid afterwards.
    pub fn run(&mut self) -> i64 {
        self.graph.sort_y();
        self.graph.clear_result();

        let blue = self.graph.blue_ids();
        let vertices = self.graph.vertices();
        let mut arena = EdgeArena::new();
        let mut sweeps = Vec::new();

        for (i, &anchor) in blue.iter().enumerate().take(blue.len().saturating_sub(1)) {
            let label = &vertices[anchor.0].label;
            let ordered = order_points_below(vertices, anchor, &blue[i + 1..], self.config.bearing_eps);
            if ordered.len() < 2 {
                debug!("anchor {label}: {} point(s) below, skipped", ordered.len());
                continue;
            }

            let usable = usable_edges(vertices, anchor, &ordered, &mut arena);
            if usable.is_empty() {
                debug!("anchor {label}: no color-pure probe among {} points", ordered.len());
                continue;
            }
            debug!(
                "anchor {label}: {} points below, {} usable probes",
                ordered.len(),
                usable.len()
            );

            let points = process_edges(vertices, anchor, ordered, &usable, &mut arena, &self.config);
            sweeps.push(AnchorSweep { anchor, points });
        }

        let Some(optimum) = find_optimum(&sweeps, &arena) else {
            info!(
                "no island among {} blue and {} red vertices",
                blue.len(),
                self.graph.red_count()
            );
            return 0;
        };

        let edge = &arena[optimum.edge];
        info!(
            "island of weight {} anchored at {}, ending with {} -> {}",
            optimum.weight,
            self.graph.vertex(optimum.anchor).label,
            self.graph.vertex(edge.source).label,
            self.graph.vertex(edge.target).label
        );
        write_island(self.graph, &optimum, &arena);
        optimum.weight
    }
}
