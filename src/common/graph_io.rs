// ============================================================================
// This code is part of Rusty-BSuitor.
// ----------------------------------------------------------------------------
// MIT License
//
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use crate::verbose_println;
use super::graph::{WghAdjGraph, WghEdge};
use super::io::read_file_to_vec;

/// Reads a headerless edge list of `u v w` integer triples, one per
/// line; comment and blank lines are skipped by the parser.
pub fn read_wgh_adj_graph_from_file(fname: &str) -> WghAdjGraph {
    verbose_println!("reading file...");
    let es: Vec<WghEdge> = read_file_to_vec(fname);

    verbose_println!("building the graph...");
    let g = WghAdjGraph::from_edges(&es);

    println!("extracted graph n={} m={}", g.num_vertices(), es.len());
    g
}
