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

use std::collections::BTreeSet;

use proptest::prelude::*;

use optimal_island::geometry::{Delta, Point2};
use optimal_island::kernel::{base_weight, is_color_pure};
use optimal_island::operations::island::order_points_below;
use optimal_island::point_set::{Color, PointSet};
use optimal_island::WeightComputer;

/// Up to 12 vertices on distinct integer positions, some of them red.
fn arb_point_set() -> impl Strategy<Value = PointSet> {
    (
        prop::collection::btree_set((-20i32..20, -20i32..20), 0..12),
        prop::collection::vec(prop::bool::weighted(0.25), 12),
    )
        .prop_map(|(positions, reds): (BTreeSet<(i32, i32)>, Vec<bool>)| {
            let mut set = PointSet::new();
            for (i, (x, y)) in positions.into_iter().enumerate() {
                let color = if reds[i] { Color::Red } else { Color::Blue };
                set.push_vertex(Point2::new(f64::from(x), f64::from(y)), color).unwrap();
            }
            set
        })
}

proptest! {
    #[test]
    fn sort_y_is_idempotent(mut set in arb_point_set()) {
        set.sort_y();
        prop_assert!(set.is_sorted_y());
        let once = set.vertices().to_vec();
        set.sort_y();
        prop_assert_eq!(set.vertices(), once.as_slice());
    }

    #[test]
    fn purity_ignores_corner_order(set in arb_point_set()) {
        let vs = set.vertices();
        prop_assume!(vs.len() >= 3);
        let (a, b, c) = (&vs[0], &vs[1], &vs[2]);
        let reference = Delta::new(a, b, c);
        let pure = is_color_pure(&reference, vs);
        let weight = base_weight(&reference, vs);
        for delta in [
            Delta::new(a, c, b),
            Delta::new(b, a, c),
            Delta::new(b, c, a),
            Delta::new(c, a, b),
            Delta::new(c, b, a),
        ] {
            prop_assert_eq!(is_color_pure(&delta, vs), pure);
            prop_assert_eq!(base_weight(&delta, vs), weight);
        }
    }

    #[test]
    fn sweep_order_shape(mut set in arb_point_set()) {
        set.sort_y();
        let blue = set.blue_ids();
        prop_assume!(blue.len() >= 2);
        let ordered = order_points_below(set.vertices(), blue[0], &blue[1..], 1e-9);
        prop_assert_eq!(ordered.len(), blue.len() - 1);

        let split = ordered.iter().position(|p| p.bearing > 0.0).unwrap_or(ordered.len());
        prop_assert!(ordered[..split].iter().all(|p| p.bearing < 0.0));
        prop_assert!(ordered[split..].iter().all(|p| p.bearing > 0.0));
        for group in [&ordered[..split], &ordered[split..]] {
            for pair in group.windows(2) {
                prop_assert!(pair[0].bearing >= pair[1].bearing);
            }
        }
        prop_assert!(ordered.iter().all(|p| p.bearing.abs() >= 1e-9));
    }

    #[test]
    fn island_boundary_is_a_closed_chain(mut set in arb_point_set()) {
        let weight = WeightComputer::new(&mut set).run();
        let result = set.result();
        prop_assert!(weight >= 0);
        prop_assert_eq!(weight, result.max_weight());
        prop_assert_eq!(result.is_empty(), weight == 0);
        if weight > 0 {
            let chain = result.chain();
            let segments = result.segments();
            prop_assert_eq!(chain[0].weight, weight);
            prop_assert_eq!(segments.len(), chain.len() + 2);
            prop_assert_eq!(result.vertices().len(), chain.len() + 2);
            prop_assert_eq!(&segments[0].from, &chain[0].anchor);
            prop_assert_eq!(&segments[segments.len() - 1].from, &chain[0].anchor);
            for pair in chain.windows(2) {
                prop_assert_eq!(&pair[0].source, &pair[1].target);
            }
            for label in result.vertices() {
                let v = set.vertex_by_label(label).unwrap();
                prop_assert_eq!(v.color, Color::Blue);
            }
        }
    }

    #[test]
    fn rerun_gives_same_result(mut set in arb_point_set()) {
        let first = WeightComputer::new(&mut set).run();
        let snapshot = set.result().clone();
        let second = WeightComputer::new(&mut set).run();
        prop_assert_eq!(first, second);
        prop_assert_eq!(set.result(), &snapshot);
    }
}
