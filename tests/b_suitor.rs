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

use std::collections::HashSet;

use bsuitor::DefInt;
use bsuitor::common::graph::{ WghAdjGraph, WghEdge };
use bsuitor::suitor::par_bs::{ self, BSuitor };
use bsuitor::suitor::serial_bs;

fn graph(triples: &[(DefInt, DefInt, DefInt)]) -> WghAdjGraph {
    let es: Vec<WghEdge> = triples
        .iter()
        .map(|&(u, v, w)| WghEdge::new(u, v, w))
        .collect();
    WghAdjGraph::from_edges(&es)
}

fn uniform(sweep: usize, _ext: DefInt) -> DefInt {
    sweep as DefInt
}

fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

/// Simple graph without parallel edges or self loops.
fn random_graph(n: u64, tries: usize, seed: u64) -> WghAdjGraph {
    let mut st = seed;
    let mut pairs = HashSet::new();
    let mut triples = vec![];
    for _ in 0..tries {
        let u = (lcg(&mut st) % n) as DefInt;
        let v = (lcg(&mut st) % n) as DefInt;
        let w = (lcg(&mut st) % 1000 + 1) as DefInt;
        if u == v { continue; }
        if pairs.insert((u.min(v), u.max(v))) {
            triples.push((u, v, w));
        }
    }
    graph(&triples)
}


#[test]
fn path_keeps_heaviest_edge() {
    let g = graph(&[(0, 1, 5), (1, 2, 3), (0, 2, 1)]);
    let totals = par_bs::b_suitor(&g, 2, 1, uniform);
    assert_eq!(totals, vec![0, 5]);

    // vertex 2 must end unmatched
    let mut bs = BSuitor::new(&g);
    bs.run_sweep(1, 2, &uniform);
    assert!(bs.suitors(2).is_empty());
}


#[test]
fn saturated_triangle_keeps_every_edge() {
    let g = graph(&[(0, 1, 5), (1, 2, 3), (0, 2, 1)]);
    let totals = par_bs::b_suitor(&g, 2, 2, uniform);
    assert_eq!(totals, vec![0, 5, 9]);
}


#[test]
fn star_keeps_only_max_edge() {
    let g = graph(&[(0, 1, 10), (0, 2, 20), (0, 3, 30), (0, 4, 40)]);
    let totals = par_bs::b_suitor(&g, 4, 1, uniform);
    assert_eq!(totals, vec![0, 40]);
}


#[test]
fn zero_capacity_matches_nothing() {
    let g = random_graph(40, 200, 7);
    let mut bs = BSuitor::new(&g);
    assert_eq!(bs.run_sweep(0, 4, &uniform), 0);
    for v in 0..g.num_vertices() {
        assert!(bs.suitors(v).is_empty());
    }
}


#[test]
fn capacity_bound_and_distinct_proposers() {
    let g = random_graph(60, 500, 42);
    let mut bs = BSuitor::new(&g);
    bs.run_sweep(3, 4, &uniform);

    for v in 0..g.num_vertices() {
        let s = bs.suitors(v);
        assert!(s.len() <= 3, "set of {v} exceeds its capacity");

        let proposers: HashSet<DefInt> = s.iter().map(|e| e.v).collect();
        assert_eq!(proposers.len(), s.len(), "duplicate proposer at {v}");

        for win in s.windows(2) {
            assert!(win[0].prio() > win[1].prio(), "unsorted set at {v}");
        }
    }
}


#[test]
fn acceptance_is_mutual() {
    let g = random_graph(50, 400, 3);
    let mut bs = BSuitor::new(&g);
    let total = bs.run_sweep(2, 4, &uniform);

    let mut sum = 0u64;
    for v in 0..g.num_vertices() {
        for e in bs.suitors(v) {
            sum += e.w as u64;
            let back = bs.suitors(e.v as usize);
            assert!(
                back.iter().any(|b| b.v as usize == v && b.w == e.w),
                "{v} accepted {} without reciprocation", e.v
            );
        }
    }
    assert_eq!(sum % 2, 0);
    assert_eq!(total, sum / 2);
}


#[test]
fn repeated_solves_are_deterministic() {
    let g = random_graph(80, 700, 11);
    let a = par_bs::b_suitor(&g, 4, 3, uniform);
    let b = par_bs::b_suitor(&g, 4, 3, uniform);
    let c = serial_bs::b_suitor(&g, 3, uniform);
    assert_eq!(a, b);
    assert_eq!(a, c);
}


#[test]
fn totals_monotonic_in_capacity() {
    let g = random_graph(70, 600, 23);
    let totals = par_bs::b_suitor(&g, 4, 5, uniform);
    for win in totals.windows(2) {
        assert!(win[0] <= win[1], "total decreased: {totals:?}");
    }
}


#[test]
fn ties_prefer_larger_identifier() {
    // both edges of vertex 10 weigh the same; 30 must win the slot
    let g = graph(&[(10, 20, 5), (10, 30, 5)]);
    let mut bs = BSuitor::new(&g);
    let total = bs.run_sweep(1, 2, &uniform);

    assert_eq!(total, 5);
    assert_eq!(g.ext, vec![10, 20, 30]);
    let s = bs.suitors(0);
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].ext, 30);
    assert!(bs.suitors(1).is_empty());
    assert_eq!(bs.suitors(2).len(), 1);
}


#[test]
fn serial_matches_parallel_across_thread_counts() {
    let g = random_graph(90, 900, 5);
    let expected = serial_bs::b_suitor(&g, 4, uniform);
    for threads in [1, 2, 3, 8] {
        assert_eq!(par_bs::b_suitor(&g, threads, 4, uniform), expected);
    }
}
