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

use std::sync::atomic::AtomicU32;

use num_traits::PrimInt;
use rayon::prelude::*;

use crate::{ DefInt, ORDER };
use crate::common::graph::{ Prio, WghAdjGraph };
use super::lock::{ SpinLock, SpinGuard };
use super::suitor_set::{ SuitorEntry, SuitorSet };

/// Round-based parallel b-Suitor state. Owns everything a sweep
/// mutates: per-vertex capacities, per-round proposal budgets, the
/// lock-guarded suitor sets and the displacement counters. The graph
/// is borrowed and reused unmodified across sweeps.
pub struct BSuitor<'a> {
    g: &'a WghAdjGraph,
    cap: Vec<DefInt>,
    budget: Vec<DefInt>,
    suitors: Vec<SpinLock<SuitorSet>>,
    displaced: Vec<AtomicU32>,
}

impl<'a> BSuitor<'a> {
    pub fn new(g: &'a WghAdjGraph) -> Self {
        let n = g.num_vertices();
        Self {
            g,
            cap: vec![0; n],
            budget: vec![0; n],
            suitors: (0..n).map(|_| SpinLock::new(SuitorSet::new())).collect(),
            displaced: (0..n).map(|_| AtomicU32::new(0)).collect(),
        }
    }

    /// Single-threaded sweep reset: capacities from the policy, empty
    /// sets, zeroed counters, full proposal budgets. The policy sees
    /// the *original* vertex identifier, once per vertex.
    fn reset<P>(&mut self, sweep: usize, policy: &P) where
        P: Fn(usize, DefInt) -> DefInt,
    {
        for v in 0..self.g.num_vertices() {
            let c = policy(sweep, self.g.ext[v]);
            self.cap[v] = c;
            self.budget[v] = c;
            self.suitors[v].get_mut().clear();
            *self.displaced[v].get_mut() = 0;
        }
    }

    /// Scans `u`'s adjacency in stored (strongest-first) order for the
    /// first target that would accept it right now, and returns with
    /// that target's lock still held so the acceptance is atomic.
    /// `None` means `u` has no remaining prospect and goes inactive.
    fn find_eligible(&self, u: usize)
        -> Option<(DefInt, usize, SpinGuard<'_, SuitorSet>)>
    {
        let ext_u = self.g.ext[u];
        for ngh in self.g.neighbors(u) {
            let v = ngh.v as usize;
            let s = self.suitors[v].lock();
            let cap = self.cap[v] as usize;
            let cand = Prio::new(ngh.w, ext_u);
            if !s.has_suitor(u as DefInt)
                && (s.len() < cap
                    || (cap > 0
                        && s.weakest().map_or(false, |e| cand > e.prio())))
            {
                return Some((ngh.w, v, s));
            }
        }
        None
    }

    /// Commits an eligible proposal under the target's lock. A vertex
    /// evicted for the first time this round lands in the worker's
    /// private buffer; the counter keeps later evictions from queueing
    /// it twice while still crediting each one.
    fn accept(
        &self,
        v: usize,
        w: DefInt,
        u: usize,
        mut s: SpinGuard<'_, SuitorSet>,
        evicted: &mut Vec<DefInt>,
    ) {
        let e = SuitorEntry::new(w, self.g.ext[u], u as DefInt);
        if let Some(out) = s.insert(e, self.cap[v] as usize) {
            if self.displaced[out.v as usize].fetch_add(1, ORDER) == 0 {
                evicted.push(out.v);
            }
        }
    }

    /// One worker's share of a round. At most one vertex lock is held
    /// at any point, so workers cannot deadlock.
    fn run_partition(&self, part: &[DefInt]) -> Vec<DefInt> {
        let mut evicted = Vec::new();
        for &u in part {
            let u = u as usize;
            let mut granted: DefInt = 0;
            while granted < self.budget[u] {
                match self.find_eligible(u) {
                    None => break,
                    Some((w, v, s)) => {
                        granted += 1;
                        self.accept(v, w, u, s, &mut evicted);
                    }
                }
            }
        }
        evicted
    }

    /// Runs one capacity sweep to its fixpoint and returns the total
    /// matched weight. Every round snapshots the active queue, fans the
    /// snapshot out round-robin over `threads` workers, joins them all,
    /// re-queues the round's displaced vertices and turns each vertex's
    /// displacement count into its next proposal budget.
    pub fn run_sweep<P>(&mut self, sweep: usize, threads: usize, policy: &P)
        -> u64 where
        P: Fn(usize, DefInt) -> DefInt,
    {
        self.reset(sweep, policy);
        let n = self.g.num_vertices();
        // initial queue: every vertex once, already distinct
        let mut queue: Vec<DefInt> = (0..n as DefInt).collect();

        while !queue.is_empty() {
            let snapshot = std::mem::take(&mut queue);
            let parts = round_robin_split(&snapshot, threads);

            let this = &*self;
            let buffers: Vec<Vec<DefInt>> = parts
                .into_par_iter()
                .map(|p| this.run_partition(&p))
                .collect(); // full barrier: no round overlap

            for r in buffers {
                queue.extend(r);
            }
            for v in 0..n {
                self.budget[v] = self.displaced[v].swap(0, ORDER);
            }
        }

        self.matched_weight()
    }

    /// Each accepted edge is recorded from both endpoints, so the raw
    /// sum is even and halves to the matched weight.
    pub fn matched_weight(&self) -> u64 {
        let sum: u64 = self.suitors
            .iter()
            .map(|s| s.lock().total_weight())
            .sum();
        debug_assert!(sum % 2 == 0, "asymmetric acceptance");
        sum / 2
    }

    /// Snapshot of one vertex's accepted proposals, strongest first.
    pub fn suitors(&self, v: usize) -> Vec<SuitorEntry> {
        self.suitors[v].lock().entries().to_vec()
    }
}

fn round_robin_split<T: PrimInt + Send>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let k = k.max(1);
    let mut parts: Vec<Vec<T>> = (0..k)
        .map(|_| Vec::with_capacity(items.len() / k + 1))
        .collect();
    for (i, &x) in items.iter().enumerate() {
        parts[i % k].push(x);
    }
    parts
}

/// Sweeps ascending capacity bounds `0..=blimit` over the graph and
/// returns the total matched weight per sweep.
pub fn b_suitor<P>(
    g: &WghAdjGraph,
    threads: usize,
    blimit: usize,
    policy: P
) -> Vec<u64> where
    P: Fn(usize, DefInt) -> DefInt,
{
    let mut bs = BSuitor::new(g);
    (0..=blimit)
        .map(|sweep| bs.run_sweep(sweep, threads, &policy))
        .collect()
}
