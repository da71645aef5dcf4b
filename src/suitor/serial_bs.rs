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
use crate::common::graph::{ Prio, WghAdjGraph };
use super::suitor_set::{ SuitorEntry, SuitorSet };

/// Single-threaded b-Suitor with the same eligibility and acceptance
/// rules as the parallel engine. The comparator's total order makes the
/// fixpoint unique, so both must report identical totals; this one is
/// the baseline and the checker's oracle.
pub fn b_suitor<P>(g: &WghAdjGraph, blimit: usize, policy: P) -> Vec<u64>
where
    P: Fn(usize, DefInt) -> DefInt,
{
    let n = g.num_vertices();
    let mut totals = Vec::with_capacity(blimit + 1);

    for sweep in 0..=blimit {
        let cap: Vec<usize> = (0..n)
            .map(|v| policy(sweep, g.ext[v]) as usize)
            .collect();
        let mut sets: Vec<SuitorSet> = vec![SuitorSet::new(); n];
        // proposals each vertex may still make; grows on displacement
        let mut pending: Vec<usize> = cap.clone();
        let mut stack: Vec<usize> = (0..n).rev().collect();

        while let Some(u) = stack.pop() {
            while pending[u] > 0 {
                match find_eligible(g, &sets, &cap, u) {
                    None => {
                        // no prospect can reopen once the scan fails
                        pending[u] = 0;
                    }
                    Some((w, v)) => {
                        pending[u] -= 1;
                        let e = SuitorEntry::new(w, g.ext[u], u as DefInt);
                        if let Some(out) = sets[v].insert(e, cap[v]) {
                            let z = out.v as usize;
                            if pending[z] == 0 {
                                stack.push(z);
                            }
                            pending[z] += 1;
                        }
                    }
                }
            }
        }

        let sum: u64 = sets.iter().map(SuitorSet::total_weight).sum();
        debug_assert!(sum % 2 == 0, "asymmetric acceptance");
        totals.push(sum / 2);
    }

    totals
}

fn find_eligible(
    g: &WghAdjGraph,
    sets: &[SuitorSet],
    cap: &[usize],
    u: usize,
) -> Option<(DefInt, usize)> {
    let ext_u = g.ext[u];
    for ngh in g.neighbors(u) {
        let v = ngh.v as usize;
        let s = &sets[v];
        let cand = Prio::new(ngh.w, ext_u);
        if !s.has_suitor(u as DefInt)
            && (s.len() < cap[v]
                || (cap[v] > 0
                    && s.weakest().map_or(false, |e| cand > e.prio())))
        {
            return Some((ngh.w, v));
        }
    }
    None
}
