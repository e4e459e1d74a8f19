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

use num_traits::Float;

use crate::geometry::{Delta, Point2};
use crate::kernel::orientation::orient2d_sign;
use crate::point_set::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrianglePoint {
    In,
    On,
    Off,
}

pub fn is_point_on_segment<T>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> bool
where
    T: Float,
{
    if orient2d_sign(a, b, p) != Ordering::Equal {
        return false;
    }
    let (min_x, max_x) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
    let (min_y, max_y) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

/// Classifies `p` against the closed triangle `a, b, c`, with either winding.
///
/// A degenerate triangle has no interior: `p` is `On` if it lies on one of its sides.
pub fn point_in_or_on_triangle<T>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
) -> TrianglePoint
where
    T: Float,
{
    let winding = orient2d_sign(a, b, c);
    if winding == Ordering::Equal {
        let on = is_point_on_segment(p, a, b)
            || is_point_on_segment(p, b, c)
            || is_point_on_segment(p, c, a);
        return if on { TrianglePoint::On } else { TrianglePoint::Off };
    }

    let sides = [
        orient2d_sign(a, b, p),
        orient2d_sign(b, c, p),
        orient2d_sign(c, a, p),
    ];
    if sides.iter().all(|&s| s == winding) {
        TrianglePoint::In
    } else if sides.iter().all(|&s| s == winding || s == Ordering::Equal) {
        TrianglePoint::On
    } else {
        TrianglePoint::Off
    }
}

fn classify(v: &Vertex, delta: &Delta<'_>) -> TrianglePoint {
    let [p, a, b] = delta.corners();
    point_in_or_on_triangle(&v.position, &p.position, &a.position, &b.position)
}

/// True when no non-blue vertex other than the probe's own corners lies inside the
/// probe or on its boundary.
pub fn is_color_pure(delta: &Delta<'_>, vertices: &[Vertex]) -> bool {
    vertices
        .iter()
        .filter(|v| !v.is_blue() && !delta.has_corner(v))
        .all(|v| classify(v, delta) == TrianglePoint::Off)
}

/// Number of blue vertices inside the probe or on its boundary, corners excluded.
pub fn base_weight(delta: &Delta<'_>, vertices: &[Vertex]) -> usize {
    vertices
        .iter()
        .filter(|v| v.is_blue() && !delta.has_corner(v))
        .filter(|v| classify(v, delta) != TrianglePoint::Off)
        .count()
}

/// Whether probe `first` may precede probe `second` in a chain around their common
/// anchor.
///
/// The probes must share exactly one corner besides the anchor. Their other corners have
/// to lie strictly on opposite sides of the line through the anchor and the shared
/// corner, so the triangles only meet along that line, and the outline
/// `anchor, first's corner, shared, second's corner` must not turn inward at the shared
/// corner.
///
/// # Panics
/// If the two probes have different anchors.
pub fn is_compatible(first: &Delta<'_>, second: &Delta<'_>) -> bool {
    let p = first.anchor();
    assert!(
        p.label == second.anchor().label,
        "probes anchored at {} and {} cannot be chained",
        p.label,
        second.anchor().label
    );

    let [a1, a2] = first.others();
    let [b1, b2] = second.others();
    let same = |x: &Vertex, y: &Vertex| x.label == y.label;
    let (a, s, b) = match (same(a1, b1), same(a1, b2), same(a2, b1), same(a2, b2)) {
        (true, false, false, false) => (a2, a1, b2),
        (false, true, false, false) => (a2, a1, b1),
        (false, false, true, false) => (a1, a2, b2),
        (false, false, false, true) => (a1, a2, b1),
        _ => return false,
    };

    let side_a = orient2d_sign(&p.position, &s.position, &a.position);
    let side_b = orient2d_sign(&p.position, &s.position, &b.position);
    if side_a == Ordering::Equal || side_b == Ordering::Equal || side_a == side_b {
        return false;
    }

    let outline = orient2d_sign(&p.position, &a.position, &s.position);
    let turn = orient2d_sign(&a.position, &s.position, &b.position);
    turn == outline || turn == Ordering::Equal
}
