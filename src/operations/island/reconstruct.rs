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

use crate::operations::island::sweep::PointState;
use crate::point_set::{EdgeArena, EdgeId, PointSet, Probe, VertexId};

/// The ordered points of one anchor after the recurrence ran.
#[derive(Debug, Clone)]
pub struct AnchorSweep {
    pub anchor: VertexId,
    pub points: Vec<PointState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optimum {
    pub anchor: VertexId,
    pub edge: EdgeId,
    pub weight: i64,
}

/// Scans every outgoing edge of every sweep. Among edges of maximum weight the last one
/// scanned wins. A maximum that is not positive means there is no island.
pub fn find_optimum(sweeps: &[AnchorSweep], arena: &EdgeArena) -> Option<Optimum> {
    let mut best: Option<Optimum> = None;
    let mut max = 0;
    for sweep in sweeps {
        for &edge in sweep.points.iter().flat_map(|p| p.lbi.iter()) {
            let weight = arena[edge].weight();
            if max <= weight {
                max = weight;
                best = Some(Optimum {
                    anchor: sweep.anchor,
                    edge,
                    weight,
                });
            }
        }
    }
    best.filter(|o| o.weight > 0)
}

/// Writes the maximum weight, the boundary and the probe chain of `optimum` into `set`.
///
/// The boundary opens with the anchor and the winning edge's target, then follows the
/// predecessor links. The probe that opened the chain is closed off back to the anchor.
pub fn write_island(set: &mut PointSet, optimum: &Optimum, arena: &EdgeArena) {
    let label = |id: VertexId| set.vertex(id).label.clone();
    let anchor = label(optimum.anchor);

    let mut segments = vec![(anchor.clone(), label(arena[optimum.edge].target))];
    let mut probes = Vec::new();
    for id in arena.chain(optimum.edge) {
        let e = &arena[id];
        segments.push((label(e.source), label(e.target)));
        probes.push(Probe {
            anchor: anchor.clone(),
            source: label(e.source),
            target: label(e.target),
            weight: e.weight(),
        });
        if e.prev.is_none() {
            segments.push((anchor.clone(), label(e.source)));
        }
    }

    set.set_max_weight(optimum.weight);
    for (from, to) in &segments {
        set.add_border(from, to);
    }
    for probe in probes {
        set.record_probe(probe);
    }
}
