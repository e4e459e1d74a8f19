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
use rug::Rational;

use crate::geometry::Point2;

/// Twice the signed area of `a, b, c`, in plain floating point.
///
/// Returns:
/// - >0 if counter-clockwise (in a y-up frame; clockwise on screen)
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T
where
    T: Float,
{
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Sign of [`orient2d`], certified.
///
/// The floating-point determinant is trusted when it clears a forward error bound;
/// otherwise the sign is recomputed over `rug::Rational`, which is exact for any finite
/// input.
pub fn orient2d_sign<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Ordering
where
    T: Float,
{
    let det_left = (a.x - c.x) * (b.y - c.y);
    let det_right = (a.y - c.y) * (b.x - c.x);
    let det = det_left - det_right;

    let two = T::one() + T::one();
    let bound = two * two * T::epsilon() * (det_left.abs() + det_right.abs());
    if det > bound {
        return Ordering::Greater;
    }
    if det < -bound {
        return Ordering::Less;
    }
    orient2d_exact(a, b, c)
}

/// Sign of the orientation determinant evaluated over exact rationals.
pub fn orient2d_exact<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Ordering
where
    T: Float,
{
    let q = |v: T| v.to_f64().and_then(Rational::from_f64).unwrap_or_default();

    let dx1 = Rational::from(&q(b.x) - &q(a.x));
    let dy1 = Rational::from(&q(b.y) - &q(a.y));
    let dx2 = Rational::from(&q(c.x) - &q(a.x));
    let dy2 = Rational::from(&q(c.y) - &q(a.y));

    let det = Rational::from(&dx1 * &dy2) - Rational::from(&dy1 * &dx2);
    det.cmp0()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let b = Point2 { x: 1.0, y: 0.0 };
        let c = Point2 { x: 0.0, y: 1.0 };

        assert!(orient2d(&a, &b, &c) > 0.0);
        assert_eq!(orient2d_sign(&a, &b, &c), Ordering::Greater);
        assert_eq!(orient2d_sign(&a, &c, &b), Ordering::Less);
    }

    #[test]
    fn collinear_is_equal() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(3.0, 3.0);
        assert_eq!(orient2d_sign(&a, &b, &c), Ordering::Equal);
    }

    #[test]
    fn near_degenerate_resolved_exactly() {
        // 0.1 + 0.2 is not 0.3 in binary, so these three are not collinear.
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(0.1 + 0.2, 0.3);
        let c = Point2::new(3.0, 3.0);
        assert_eq!(orient2d_sign(&a, &b, &c), orient2d_exact(&a, &b, &c));
        assert_ne!(orient2d_exact(&a, &b, &c), Ordering::Equal);
    }

    #[test]
    fn filter_agrees_with_exact_on_small_grid() {
        let pts: Vec<Point2<f64>> = (0..4)
            .flat_map(|x| (0..4).map(move |y| Point2::new(x as f64 * 0.5, y as f64 * 0.25)))
            .collect();
        for a in &pts {
            for b in &pts {
                for c in &pts {
                    assert_eq!(orient2d_sign(a, b, c), orient2d_exact(a, b, c));
                }
            }
        }
    }
}
