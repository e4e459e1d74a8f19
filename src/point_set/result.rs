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

use std::fmt;

/// One side of the island boundary, as a pair of vertex labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundarySegment {
    pub from: String,
    pub to: String,
}

impl fmt::Display for BoundarySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// A probe of the winning chain: the triangle `anchor, source, target` and the weight
/// the chain had accumulated when it reached this probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub anchor: String,
    pub source: String,
    pub target: String,
    pub weight: i64,
}

/// What a run leaves behind for display and export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IslandResult {
    max_weight: i64,
    segments: Vec<BoundarySegment>,
    vertices: Vec<String>,
    chain: Vec<Probe>,
    text: String,
}

impl IslandResult {
    /// Zero means no island was found.
    pub fn max_weight(&self) -> i64 {
        self.max_weight
    }

    pub fn segments(&self) -> &[BoundarySegment] {
        &self.segments
    }

    /// Boundary vertex labels, deduplicated, in the order they were first reached.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Probes of the winning chain, from the winner back to the probe that opened it.
    pub fn chain(&self) -> &[Probe] {
        &self.chain
    }

    /// Segment descriptions, each preceded by a newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn set_max_weight(&mut self, weight: i64) {
        self.max_weight = weight;
    }

    pub(crate) fn add_border(&mut self, from: &str, to: &str) {
        for label in [from, to] {
            if !self.vertices.iter().any(|v| v == label) {
                self.vertices.push(label.to_owned());
            }
        }
        let segment = BoundarySegment {
            from: from.to_owned(),
            to: to.to_owned(),
        };
        self.text.push('\n');
        self.text.push_str(&segment.to_string());
        self.segments.push(segment);
    }

    pub(crate) fn push_probe(&mut self, probe: Probe) {
        self.chain.push(probe);
    }
}
