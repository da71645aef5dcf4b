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

use std::str::FromStr;
use rayon::prelude::*;

use crate::DefInt;

// **************************************************************
//    PROPOSAL ORDERING
// **************************************************************

/// Ranking key shared by adjacency lists and suitor sets: a larger key
/// is a stronger proposal. Heavier edges win; equal weights break ties
/// toward the larger *original* vertex identifier.
///
/// Both structures must order by this exact key, or a vertex could come
/// to regret an acceptance its adjacency scan told it was optimal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Prio {
    pub w: DefInt,
    pub ext: DefInt,
}

impl Prio {
    pub const fn new(w: DefInt, ext: DefInt) -> Self { Self { w, ext } }
}

// **************************************************************
//    WEIGHTED EDGE TRIPLES
// **************************************************************

#[derive(Clone, Copy, Debug)]
pub struct WghEdge {
    pub u: DefInt,
    pub v: DefInt,
    pub w: DefInt,
}

impl WghEdge {
    pub fn new(u: DefInt, v: DefInt, w: DefInt) -> Self
    { Self { u, v, w } }
}

impl FromStr for WghEdge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: Vec<&str> = s.trim().split_whitespace().collect();
        if s.len() != 3 { return Err(ParseEdgeError); }
        let (a, b, w) = (s[0].parse(), s[1].parse(), s[2].parse());
        if a.is_err() || b.is_err() || w.is_err() {
            return Err(ParseEdgeError);
        }
        Ok(Self::new(a.unwrap(), b.unwrap(), w.unwrap()))
    }
}

pub struct ParseEdgeError;

impl std::fmt::Display for ParseEdgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Can not parse as weighted edge.")
    }
}

impl std::fmt::Debug for ParseEdgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{ file: {}, line: {} }}: can not parse as weighted edge.", file!(), line!())
    }
}

// **************************************************************
//    WEIGHTED ADJACENCY REPRESENTATION
// **************************************************************

#[derive(Clone, Copy, Debug)]
pub struct Ngh {
    pub w: DefInt,
    pub v: DefInt,
}

impl Ngh {
    pub fn new(w: DefInt, v: DefInt) -> Self { Self { w, v } }
}

impl Default for Ngh { fn default() -> Self { Self { w: 0, v: 0 } } }

/// Immutable weighted graph in CSR form over dense vertex indices
/// `0..n`. `ext[i]` is the original identifier of dense vertex `i`;
/// dense indices are assigned in increasing original-identifier order.
/// Every adjacency slice is sorted by `Prio` descending at construction
/// and never re-sorted.
pub struct WghAdjGraph {
    pub offsets: Vec<DefInt>,
    pub nghs: Vec<Ngh>,
    pub ext: Vec<DefInt>,
    pub n: usize,
    pub m: usize,
}

impl WghAdjGraph {
    pub const fn num_vertices(&self) -> usize
    { self.n }

    pub const fn num_directed_edges(&self) -> usize
    { self.m }

    /// Builds the graph from undirected triples: deduplicates the
    /// endpoint identifiers, renumbers them densely, stores each edge
    /// once per endpoint and sorts all adjacency slices.
    pub fn from_edges(es: &[WghEdge]) -> Self {
        let mut ext: Vec<DefInt> = Vec::with_capacity(es.len() * 2);
        for e in es {
            ext.push(e.u);
            ext.push(e.v);
        }
        ext.par_sort_unstable();
        ext.dedup();
        let n = ext.len();

        let dense = |id: DefInt| -> usize {
            ext.binary_search(&id).unwrap()
        };

        let mut degrees = vec![0 as DefInt; n];
        for e in es {
            degrees[dense(e.u)] += 1;
            degrees[dense(e.v)] += 1;
        }

        let mut offsets: Vec<DefInt> = Vec::with_capacity(n + 1);
        let mut acc: DefInt = 0;
        for v in 0..n {
            offsets.push(acc);
            acc += degrees[v];
        }
        offsets.push(acc);

        let m = acc as usize;
        let mut nghs = vec![Ngh::default(); m];
        let mut cursor: Vec<usize> = offsets[..n]
            .iter()
            .map(|&o| o as usize)
            .collect();
        for e in es {
            let (du, dv) = (dense(e.u), dense(e.v));
            nghs[cursor[du]] = Ngh::new(e.w, dv as DefInt);
            cursor[du] += 1;
            nghs[cursor[dv]] = Ngh::new(e.w, du as DefInt);
            cursor[dv] += 1;
        }

        // carve one mutable slice per vertex so the sorts can run in parallel
        let mut slices: Vec<&mut [Ngh]> = Vec::with_capacity(n);
        let mut rest: &mut [Ngh] = &mut nghs;
        for v in 0..n {
            let (s, r) = std::mem::take(&mut rest)
                .split_at_mut(degrees[v] as usize);
            slices.push(s);
            rest = r;
        }
        slices.par_iter_mut().for_each(|s| {
            s.sort_unstable_by(|a, b| {
                Prio::new(b.w, ext[b.v as usize])
                    .cmp(&Prio::new(a.w, ext[a.v as usize]))
            })
        });
        drop(slices);

        Self { offsets, nghs, ext, n, m }
    }

    #[inline(always)]
    pub fn neighbors(&self, v: usize) -> &[Ngh] {
        debug_assert!(v < self.n);
        &self.nghs[self.offsets[v] as usize..self.offsets[v + 1] as usize]
    }

    #[inline(always)]
    pub fn degree(&self, v: usize) -> usize {
        debug_assert!(v < self.n);
        (self.offsets[v + 1] - self.offsets[v]) as usize
    }
}
