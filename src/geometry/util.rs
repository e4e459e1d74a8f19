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

use num_traits::{Float, FloatConst};

use crate::geometry::Point2;

/// Angle of the line through `from` and `to`, in radians.
///
/// This is the angle of the line, not of the vector: swapping the endpoints gives the
/// same value. Points to the right of `from` and below it (larger `y`) get a positive
/// bearing, points to the left and below get a negative one. A vertical line is `π/2`,
/// coincident points are `0`.
pub fn line_bearing<T>(from: &Point2<T>, to: &Point2<T>) -> T
where
    T: Float + FloatConst,
{
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.is_zero() {
        return if dy.is_zero() { T::zero() } else { T::FRAC_PI_2() };
    }
    (dy / dx).atan()
}

/// Replaces a bearing within `eps` of zero by `±eps`, choosing the sign from the side of
/// `origin_x` the point at `x` lies on. Genuine bearings are farther than `eps` from zero,
/// so the nudged value keeps its place in a sorted sweep.
pub fn nudge_zero_bearing<T>(bearing: T, origin_x: T, x: T, eps: T) -> T
where
    T: Float,
{
    if bearing.abs() > eps {
        return bearing;
    }
    if origin_x < x { eps } else { -eps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn bearing_is_symmetric_in_endpoints() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert_eq!(line_bearing(&a, &b), line_bearing(&b, &a));
    }

    #[test]
    fn bearing_sign_follows_side() {
        let o = Point2::new(0.0, 0.0);
        assert!((line_bearing(&o, &Point2::new(1.0, 1.0)) - FRAC_PI_4).abs() < 1e-12);
        assert!((line_bearing(&o, &Point2::new(-1.0, 1.0)) + FRAC_PI_4).abs() < 1e-12);
        assert_eq!(line_bearing(&o, &Point2::new(0.0, 3.0)), std::f64::consts::FRAC_PI_2);
        assert_eq!(line_bearing(&o, &o), 0.0);
    }

    #[test]
    fn nudge_only_touches_near_zero() {
        assert_eq!(nudge_zero_bearing(0.0, 0.0, 5.0, 1e-9), 1e-9);
        assert_eq!(nudge_zero_bearing(0.0, 0.0, -5.0, 1e-9), -1e-9);
        assert_eq!(nudge_zero_bearing(0.25, 0.0, -5.0, 1e-9), 0.25);
    }
}
