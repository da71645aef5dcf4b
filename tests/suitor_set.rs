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

use bsuitor::suitor::suitor_set::{ SuitorEntry, SuitorSet };


#[test]
fn insert_keeps_ranked_order() {
    let mut s = SuitorSet::new();
    s.insert(SuitorEntry::new(3, 1, 1), 4);
    s.insert(SuitorEntry::new(9, 2, 2), 4);
    s.insert(SuitorEntry::new(5, 3, 3), 4);

    let ws: Vec<u32> = s.entries().iter().map(|e| e.w).collect();
    assert_eq!(ws, vec![9, 5, 3]);
    assert_eq!(s.weakest().unwrap().w, 3);
}


#[test]
fn saturated_insert_evicts_weakest() {
    let mut s = SuitorSet::new();
    assert!(s.insert(SuitorEntry::new(5, 1, 1), 2).is_none());
    assert!(s.insert(SuitorEntry::new(3, 2, 2), 2).is_none());

    let out = s.insert(SuitorEntry::new(4, 3, 3), 2).unwrap();
    assert_eq!(out.v, 2);
    assert_eq!(out.w, 3);

    let ws: Vec<u32> = s.entries().iter().map(|e| e.w).collect();
    assert_eq!(ws, vec![5, 4]);
    assert_eq!(s.len(), 2);
}


#[test]
fn equal_weights_rank_by_external_id() {
    let mut s = SuitorSet::new();
    s.insert(SuitorEntry::new(5, 10, 1), 3);
    s.insert(SuitorEntry::new(5, 30, 2), 3);
    s.insert(SuitorEntry::new(5, 20, 3), 3);

    let exts: Vec<u32> = s.entries().iter().map(|e| e.ext).collect();
    assert_eq!(exts, vec![30, 20, 10]);
    assert_eq!(s.weakest().unwrap().ext, 10);
}


#[test]
fn tracks_proposers() {
    let mut s = SuitorSet::new();
    s.insert(SuitorEntry::new(7, 4, 4), 2);
    assert!(s.has_suitor(4));
    assert!(!s.has_suitor(5));

    s.clear();
    assert!(s.is_empty());
    assert!(!s.has_suitor(4));
}


#[test]
fn sums_accepted_weights() {
    let mut s = SuitorSet::new();
    s.insert(SuitorEntry::new(7, 1, 1), 3);
    s.insert(SuitorEntry::new(2, 2, 2), 3);
    assert_eq!(s.total_weight(), 9);
}
