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

use crate::geometry::{Delta, line_bearing, nudge_zero_bearing};
use crate::kernel::is_color_pure;
use crate::point_set::{Edge, EdgeArena, EdgeId, Vertex, VertexId};

/// A vertex entered into the sweep of one anchor.
///
/// `bearing` is relative to that anchor; `lai` and `lbi` are the incoming and outgoing
/// candidate edges, filled once while the anchor is processed.
#[derive(Debug, Clone, PartialEq)]
pub struct PointState {
    pub vertex: VertexId,
    pub bearing: f64,
    pub lai: Vec<EdgeId>,
    pub lbi: Vec<EdgeId>,
}

impl PointState {
    pub fn new(vertex: VertexId, bearing: f64) -> Self {
        Self {
            vertex,
            bearing,
            lai: Vec::new(),
            lbi: Vec::new(),
        }
    }
}

/// Orders the blue vertices of `below` around `anchor`.
///
/// Negative bearings (left of the anchor) come first, then positive ones; each group is
/// sorted by decreasing bearing, equal bearings keeping their order in `below`. Bearings
/// within `eps` of zero are pushed to `±eps` by the side of the anchor the vertex is on,
/// so no returned bearing is zero.
pub fn order_points_below(
    vertices: &[Vertex],
    anchor: VertexId,
    below: &[VertexId],
    eps: f64,
) -> Vec<PointState> {
    let origin = &vertices[anchor.0];
    let (mut ordered, mut positive): (Vec<PointState>, Vec<PointState>) = below
        .iter()
        .filter(|id| vertices[id.0].is_blue())
        .map(|&id| {
            let v = &vertices[id.0];
            let bearing = line_bearing(&origin.position, &v.position);
            PointState::new(id, nudge_zero_bearing(bearing, origin.x(), v.x(), eps))
        })
        .partition(|p| p.bearing < 0.0);

    ordered.sort_by(|a, b| b.bearing.total_cmp(&a.bearing));
    positive.sort_by(|a, b| b.bearing.total_cmp(&a.bearing));
    ordered.extend(positive);
    ordered
}

/// Creates an edge `a -> b` for every pair of ordered points, `a` before `b`, whose probe
/// with the anchor is color-pure. Returns nothing when fewer than two points are given.
pub fn usable_edges(
    vertices: &[Vertex],
    anchor: VertexId,
    ordered: &[PointState],
    arena: &mut EdgeArena,
) -> Vec<EdgeId> {
    if ordered.len() < 2 {
        return Vec::new();
    }
    let p = &vertices[anchor.0];
    let mut usable = Vec::new();
    for (i, a) in ordered.iter().enumerate() {
        let va = &vertices[a.vertex.0];
        for b in &ordered[i + 1..] {
            let vb = &vertices[b.vertex.0];
            if is_color_pure(&Delta::new(p, va, vb), vertices) {
                let bearing = line_bearing(&va.position, &vb.position);
                usable.push(arena.push(Edge::new(a.vertex, b.vertex, bearing)));
            }
        }
    }
    usable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;
    use crate::point_set::Color;

    fn set(points: &[(f64, f64, Color)]) -> Vec<Vertex> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y, c))| Vertex::new(Point2::new(x, y), c, format!("v{i}")))
            .collect()
    }

    #[test]
    fn sweep_runs_left_to_right_below_anchor() {
        let vs = set(&[
            (0.0, 0.0, Color::Blue),
            (4.0, 1.0, Color::Blue),
            (-4.0, 1.0, Color::Blue),
            (0.0, 5.0, Color::Blue),
            (-1.0, 6.0, Color::Blue),
        ]);
        let below = [VertexId(1), VertexId(2), VertexId(3), VertexId(4)];
        let order: Vec<usize> = order_points_below(&vs, VertexId(0), &below, 1e-9)
            .iter()
            .map(|p| p.vertex.0)
            .collect();
        assert_eq!(order, vec![2, 4, 3, 1]);
    }

    #[test]
    fn horizontal_neighbours_are_nudged() {
        let vs = set(&[
            (0.0, 0.0, Color::Blue),
            (3.0, 0.0, Color::Blue),
            (-3.0, 0.0, Color::Blue),
            (-1.0, 1.0, Color::Blue),
        ]);
        let below = [VertexId(1), VertexId(2), VertexId(3)];
        let ordered = order_points_below(&vs, VertexId(0), &below, 1e-9);
        let order: Vec<usize> = ordered.iter().map(|p| p.vertex.0).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(ordered[0].bearing, -1e-9);
        assert_eq!(ordered[2].bearing, 1e-9);
    }

    #[test]
    fn red_points_are_never_ordered() {
        let vs = set(&[
            (0.0, 0.0, Color::Blue),
            (1.0, 1.0, Color::Red),
            (2.0, 3.0, Color::Blue),
        ]);
        let ordered = order_points_below(&vs, VertexId(0), &[VertexId(1), VertexId(2)], 1e-9);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].vertex, VertexId(2));
    }

    #[test]
    fn impure_pairs_produce_no_edge() {
        let vs = set(&[
            (0.0, 0.0, Color::Blue),
            (-4.0, 6.0, Color::Blue),
            (4.0, 6.0, Color::Blue),
            (0.0, 5.0, Color::Red),
            (6.0, 8.0, Color::Blue),
        ]);
        let below = [VertexId(1), VertexId(2), VertexId(4)];
        let ordered = order_points_below(&vs, VertexId(0), &below, 1e-9);
        let mut arena = EdgeArena::new();
        let usable = usable_edges(&vs, VertexId(0), &ordered, &mut arena);

        let pairs: Vec<(usize, usize)> = usable
            .iter()
            .map(|&e| (arena[e].source.0, arena[e].target.0))
            .collect();
        assert!(!pairs.contains(&(1, 2)));
        assert!(!pairs.contains(&(1, 4)));
        assert_eq!(pairs, vec![(2, 4)]);
        assert_eq!(arena.len(), usable.len());
    }

    #[test]
    fn single_point_has_no_edges() {
        let vs = set(&[(0.0, 0.0, Color::Blue), (1.0, 1.0, Color::Blue)]);
        let ordered = order_points_below(&vs, VertexId(0), &[VertexId(1)], 1e-9);
        let mut arena = EdgeArena::new();
        assert!(usable_edges(&vs, VertexId(0), &ordered, &mut arena).is_empty());
    }

    #[test]
    fn equal_bearings_keep_input_order() {
        // Both pairs sit on one ray from the anchor, so their bearings are identical.
        let vs = set(&[
            (0.0, 0.0, Color::Blue),
            (1.0, 1.0, Color::Blue),
            (2.0, 2.0, Color::Blue),
            (-1.0, 1.0, Color::Blue),
            (-3.0, 3.0, Color::Blue),
        ]);
        let order = |below: &[VertexId]| -> Vec<usize> {
            order_points_below(&vs, VertexId(0), below, 1e-9)
                .iter()
                .map(|p| p.vertex.0)
                .collect()
        };
        assert_eq!(order(&[VertexId(1), VertexId(2), VertexId(3), VertexId(4)]), vec![3, 4, 1, 2]);
        assert_eq!(order(&[VertexId(2), VertexId(1), VertexId(4), VertexId(3)]), vec![4, 3, 2, 1]);
    }
}
