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

//! Optimal islands in two-colored planar point sets.
//!
//! Given blue and red points, an island is a region bounded by blue points that holds no
//! red point. [`WeightComputer`] finds the island covering the most blue points and
//! writes its boundary back into the [`PointSet`]:
//!
//! ```
//! use optimal_island::geometry::Point2;
//! use optimal_island::point_set::{Color, PointSet};
//! use optimal_island::operations::WeightComputer;
//!
//! let mut set = PointSet::new();
//! set.add_vertex(Point2::new(0.0, 0.0), Color::Blue, "a").unwrap();
//! set.add_vertex(Point2::new(-4.0, 6.0), Color::Blue, "b").unwrap();
//! set.add_vertex(Point2::new(4.0, 6.0), Color::Blue, "c").unwrap();
//! set.add_vertex(Point2::new(0.0, 4.0), Color::Blue, "d").unwrap();
//!
//! let weight = WeightComputer::new(&mut set).run();
//! assert_eq!(weight, 1);
//! assert_eq!(set.result().segments().len(), 3);
//! ```

pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod operations;
pub mod point_set;

pub use error::IslandError;
pub use operations::{EngineConfig, WeightComputer};
pub use point_set::PointSet;
