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

use log::{trace, warn};

use crate::geometry::Delta;
use crate::kernel::{base_weight, is_compatible};
use crate::operations::island::EngineConfig;
use crate::operations::island::sweep::PointState;
use crate::point_set::{EdgeArena, EdgeId, Vertex, VertexId};

/// Splits the usable edges touching `pi` into its incoming list `Lai` and outgoing list
/// `Lbi`.
///
/// Each list has a first and a next bucket. An edge goes to the first bucket when `pi`
/// is left of the anchor and the edge's other endpoint is right of `pi`, or when `pi`
/// is not left of the anchor and the other endpoint is not right of `pi`. Buckets are
/// sorted by edge bearing (incoming decreasing, outgoing increasing) and concatenated.
pub fn partition_edges(
    vertices: &[Vertex],
    anchor: VertexId,
    pi: VertexId,
    usable: &[EdgeId],
    arena: &EdgeArena,
) -> (Vec<EdgeId>, Vec<EdgeId>) {
    let x = vertices[pi.0].x();
    let left_of_anchor = x < vertices[anchor.0].x();

    let (mut lai_first, mut lai_next) = (Vec::new(), Vec::new());
    let (mut lbi_first, mut lbi_next) = (Vec::new(), Vec::new());
    for &id in usable {
        let e = &arena[id];
        if e.target == pi {
            let partner_right = x < vertices[e.source.0].x();
            if left_of_anchor == partner_right {
                lai_first.push(id);
            } else {
                lai_next.push(id);
            }
        } else if e.source == pi {
            let partner_right = x < vertices[e.target.0].x();
            if left_of_anchor == partner_right {
                lbi_first.push(id);
            } else {
                lbi_next.push(id);
            }
        }
    }

    let descending = |a: &EdgeId, b: &EdgeId| arena[*b].bearing.total_cmp(&arena[*a].bearing);
    let ascending = |a: &EdgeId, b: &EdgeId| arena[*a].bearing.total_cmp(&arena[*b].bearing);
    lai_first.sort_by(descending);
    lai_next.sort_by(descending);
    lbi_first.sort_by(ascending);
    lbi_next.sort_by(ascending);

    lai_first.extend(lai_next);
    lbi_first.extend(lbi_next);
    (lai_first, lbi_first)
}

/// The outgoing edge `source -> target` among the already settled points, if any.
fn settled_outgoing(
    settled: &[PointState],
    source: VertexId,
    target: VertexId,
    arena: &EdgeArena,
) -> Option<EdgeId> {
    settled
        .iter()
        .flat_map(|p| p.lbi.iter().copied())
        .filter(|&bi| arena[bi].source == source && arena[bi].target == target)
        .last()
}

/// Index of the first maximum.
fn first_max(weights: &[i64]) -> usize {
    let mut best = 0;
    for (i, &w) in weights.iter().enumerate().skip(1) {
        if w > weights[best] {
            best = i;
        }
    }
    best
}

/// Runs the recurrence at `pi` and finalizes the weight and predecessor of every edge in
/// `lbi`.
///
/// `settled` are the points processed before `pi` for the same anchor; their outgoing
/// edges are final.
#[allow(clippy::too_many_arguments)]
pub fn settle_point(
    vertices: &[Vertex],
    anchor: VertexId,
    settled: &[PointState],
    pi: VertexId,
    lai: &[EdgeId],
    lbi: &[EdgeId],
    arena: &mut EdgeArena,
    config: &EngineConfig,
) {
    // Incoming edges take the weight their source settled them with.
    let view: &EdgeArena = arena;
    let incoming: Vec<i64> = lai
        .iter()
        .map(|&ai| {
            settled_outgoing(settled, view[ai].source, pi, view)
                .map_or(view[ai].weight(), |bi| view[bi].weight())
        })
        .collect();

    let p = &vertices[anchor.0];
    for &bmi in lbi {
        let (source, target) = (arena[bmi].source, arena[bmi].target);
        let probe = Delta::new(p, &vertices[source.0], &vertices[target.0]);
        let base = base_weight(&probe, vertices) as i64;

        let last_compatible = lai.iter().rposition(|&ai| {
            let e = &arena[ai];
            is_compatible(&Delta::new(p, &vertices[e.source.0], &vertices[e.target.0]), &probe)
        });

        let (weight, prev) = match last_compatible {
            None => (base, None),
            Some(sm) => {
                let provisional = lai[first_max(&incoming[..=sm])];
                match settled_outgoing(settled, arena[provisional].source, pi, arena) {
                    Some(bi) => (
                        arena[bi].weight() + base - config.shared_corner_adjustment,
                        Some(bi),
                    ),
                    None => {
                        warn!(
                            "no settled edge {} -> {} to chain from; starting a new chain",
                            vertices[arena[provisional].source.0].label,
                            vertices[pi.0].label
                        );
                        (base, None)
                    }
                }
            }
        };

        arena.finalize(bmi, weight, prev);
        trace!(
            "edge {} -> {}: weight {}, prev {:?}",
            vertices[source.0].label,
            vertices[target.0].label,
            weight,
            prev
        );
    }
}

/// Processes the ordered points of one anchor in sweep order and returns them with
/// their finalized `Lai`/`Lbi`.
pub fn process_edges(
    vertices: &[Vertex],
    anchor: VertexId,
    ordered: Vec<PointState>,
    usable: &[EdgeId],
    arena: &mut EdgeArena,
    config: &EngineConfig,
) -> Vec<PointState> {
    let mut settled: Vec<PointState> = Vec::with_capacity(ordered.len());
    for mut point in ordered {
        let (lai, lbi) = partition_edges(vertices, anchor, point.vertex, usable, arena);
        settle_point(vertices, anchor, &settled, point.vertex, &lai, &lbi, arena, config);
        point.lai = lai;
        point.lbi = lbi;
        settled.push(point);
    }
    settled
}
