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

use crate::DefInt;
use crate::common::graph::Prio;

/// One accepted proposal: edge weight, the proposer's original
/// identifier (the tie-break key) and its dense index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuitorEntry {
    pub w: DefInt,
    pub ext: DefInt,
    pub v: DefInt,
}

impl SuitorEntry {
    pub fn new(w: DefInt, ext: DefInt, v: DefInt) -> Self
    { Self { w, ext, v } }

    #[inline(always)]
    pub fn prio(&self) -> Prio { Prio::new(self.w, self.ext) }
}

/// Bounded acceptance set of one vertex, strongest entry first, ordered
/// by the same key that orders adjacency lists. Holds at most one entry
/// per proposer and never more than the vertex's capacity.
#[derive(Clone, Default)]
pub struct SuitorSet {
    entries: Vec<SuitorEntry>,
}

impl SuitorSet {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn clear(&mut self) { self.entries.clear(); }

    pub fn entries(&self) -> &[SuitorEntry] { &self.entries }

    pub fn has_suitor(&self, v: DefInt) -> bool {
        self.entries.iter().any(|e| e.v == v)
    }

    pub fn weakest(&self) -> Option<&SuitorEntry> {
        self.entries.last()
    }

    /// Inserts `e` at its ranked position. If the set is saturated the
    /// weakest entry is evicted first and returned; eligibility checks
    /// guarantee it ranks strictly below `e`.
    pub fn insert(&mut self, e: SuitorEntry, cap: usize) -> Option<SuitorEntry> {
        debug_assert!(cap > 0);
        debug_assert!(self.entries.len() <= cap);
        debug_assert!(!self.has_suitor(e.v));

        let evicted = if self.entries.len() == cap {
            let out = self.entries.pop();
            debug_assert!(out.as_ref().map_or(false, |o| e.prio() > o.prio()));
            out
        } else {
            None
        };

        let at = self.entries.partition_point(|s| s.prio() > e.prio());
        self.entries.insert(at, e);
        evicted
    }

    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| e.w as u64).sum()
    }
}
