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

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::IslandError;
use crate::geometry::Point2;
use crate::point_set::{Color, PointSet};

/// The square area vertices are placed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            x: 380.0,
            y: 25.0,
            size: 800.0,
        }
    }
}

impl Board {
    pub fn contains(&self, p: &Point2<f64>) -> bool {
        p.x >= self.x && p.x <= self.x + self.size && p.y >= self.y && p.y <= self.y + self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub count: usize,
    /// Share of red vertices, at most one half.
    pub red_ratio: f64,
    pub board: Board,
    pub min_separation: f64,
    /// Total number of candidate positions drawn before giving up.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 30,
            red_ratio: 0.2,
            board: Board::default(),
            min_separation: 20.0,
            max_attempts: 10_000,
        }
    }
}

impl GeneratorConfig {
    pub fn red_count(&self) -> usize {
        (self.count as f64 * self.red_ratio).round() as usize
    }

    fn validate(&self) -> Result<(), IslandError> {
        if !(0.0..=0.5).contains(&self.red_ratio) {
            return Err(IslandError::InvalidConfig("red_ratio must be within [0, 0.5]"));
        }
        if !(self.board.size.is_finite() && self.board.size > 0.0)
            || !self.board.x.is_finite()
            || !self.board.y.is_finite()
        {
            return Err(IslandError::InvalidConfig("board must be finite with a positive size"));
        }
        if !(self.min_separation.is_finite() && self.min_separation >= 0.0) {
            return Err(IslandError::InvalidConfig("min_separation must be finite and non-negative"));
        }
        Ok(())
    }
}

/// Places `config.count` vertices uniformly on the board, rejecting positions closer than
/// `min_separation` to an earlier vertex. Exactly [`GeneratorConfig::red_count`] of them
/// are red, the rest blue, labelled `v1`, `v2`, ...
pub fn random_point_set<R>(rng: &mut R, config: &GeneratorConfig) -> Result<PointSet, IslandError>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let reds = config.red_count();
    let mut colors: Vec<Color> = (0..config.count)
        .map(|i| if i < reds { Color::Red } else { Color::Blue })
        .collect();
    colors.shuffle(rng);

    let board = config.board;
    let mut set = PointSet::new();
    let mut attempts = 0;
    for color in colors {
        loop {
            if attempts == config.max_attempts {
                return Err(IslandError::PlacementExhausted {
                    placed: set.len(),
                    requested: config.count,
                });
            }
            attempts += 1;

            let position = Point2::new(
                rng.random_range(board.x..board.x + board.size),
                rng.random_range(board.y..board.y + board.size),
            );
            match set.place_vertex(position, color, config.min_separation) {
                Ok(_) => break,
                Err(IslandError::PositionTooClose { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    debug!(
        "generated {} blue and {} red vertices in {} attempts",
        set.blue_count(),
        set.red_count(),
        attempts
    );
    Ok(set)
}

/// [`random_point_set`] driven by a `StdRng` seeded with `seed`.
pub fn seeded_point_set(config: &GeneratorConfig, seed: u64) -> Result<PointSet, IslandError> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_point_set(&mut rng, config)
}
