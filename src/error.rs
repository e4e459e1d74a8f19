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

//! Error type for the fallible, provider-facing parts of the crate.
//!
//! The island computation itself does not fail: anchors without usable probes are
//! skipped and an empty result is a valid outcome.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IslandError {
    /// Labels identify vertices in the exported boundary, so they must be unique.
    #[error("vertex label `{0}` is already used in this point set")]
    DuplicateLabel(String),
    #[error("vertex `{label}` has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { label: String, x: f64, y: f64 },
    #[error("position ({x}, {y}) is closer than {min_separation} to an existing vertex")]
    PositionTooClose { x: f64, y: f64, min_separation: f64 },
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("placed only {placed} of {requested} vertices before running out of attempts")]
    PlacementExhausted { placed: usize, requested: usize },
}
