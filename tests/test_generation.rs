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

use optimal_island::IslandError;
use optimal_island::WeightComputer;
use optimal_island::operations::{Board, GeneratorConfig, random_point_set, seeded_point_set};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_same_seed_same_points() {
    let config = GeneratorConfig::default();
    let a = seeded_point_set(&config, 42).unwrap();
    let b = seeded_point_set(&config, 42).unwrap();
    assert_eq!(a.vertices(), b.vertices());
}

#[test]
fn test_counts_and_labels() {
    let config = GeneratorConfig::default();
    let set = seeded_point_set(&config, 7).unwrap();
    assert_eq!(set.len(), 30);
    assert_eq!(config.red_count(), 6);
    assert_eq!(set.red_count(), 6);
    assert_eq!(set.blue_count(), 24);
    for (i, v) in set.vertices().iter().enumerate() {
        assert_eq!(v.label, format!("v{}", i + 1));
    }
}

#[test]
fn test_points_on_board_and_separated() {
    let config = GeneratorConfig {
        count: 40,
        min_separation: 35.0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let set = random_point_set(&mut rng, &config).unwrap();

    let vs = set.vertices();
    for (i, a) in vs.iter().enumerate() {
        assert!(config.board.contains(&a.position));
        for b in &vs[i + 1..] {
            assert!(a.position.distance_to(&b.position) >= config.min_separation);
        }
    }
}

#[test]
fn test_invalid_config() {
    let config = GeneratorConfig {
        red_ratio: 0.7,
        ..Default::default()
    };
    assert!(matches!(seeded_point_set(&config, 1), Err(IslandError::InvalidConfig(_))));

    let config = GeneratorConfig {
        board: Board {
            x: 0.0,
            y: 0.0,
            size: 0.0,
        },
        ..Default::default()
    };
    assert!(matches!(seeded_point_set(&config, 1), Err(IslandError::InvalidConfig(_))));

    let config = GeneratorConfig {
        min_separation: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(seeded_point_set(&config, 1), Err(IslandError::InvalidConfig(_))));
}

#[test]
fn test_placement_exhausted() {
    let config = GeneratorConfig {
        count: 10,
        board: Board {
            x: 0.0,
            y: 0.0,
            size: 10.0,
        },
        min_separation: 100.0,
        max_attempts: 500,
        ..Default::default()
    };
    assert_eq!(
        seeded_point_set(&config, 9).err(),
        Some(IslandError::PlacementExhausted {
            placed: 1,
            requested: 10
        })
    );
}

#[test]
fn test_generated_set_runs() {
    let config = GeneratorConfig::default();
    let mut set = seeded_point_set(&config, 2024).unwrap();
    let weight = WeightComputer::new(&mut set).run();
    assert_eq!(weight, set.max_weight());
    assert!(weight >= 0);
    assert_eq!(set.result().is_empty(), weight == 0);
    assert!(set.is_sorted_y());
}
