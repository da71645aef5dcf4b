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

use clap::Parser;

use bsuitor::DefInt;
use bsuitor::common::graph::WghAdjGraph;
use bsuitor::common::graph_io::read_wgh_adj_graph_from_file;
use bsuitor::common::io::read_file_to_vec_seq;
use bsuitor::suitor::serial_bs;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// bs results filename (one total per sweep)
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,
}

fn uniform(sweep: usize, _ext: DefInt) -> DefInt {
    sweep as DefInt
}

pub fn check(g: &WghAdjGraph, totals: &[u64]) -> bool {
    if totals.is_empty() {
        println!("bs_check: empty result file");
        return false;
    }

    for i in 1..totals.len() {
        if totals[i] < totals[i - 1] {
            println!("bs_check: total decreased at sweep {i}");
            return false;
        }
    }

    let expected = serial_bs::b_suitor(g, totals.len() - 1, uniform);
    for (i, (&t, &e)) in totals.iter().zip(expected.iter()).enumerate() {
        if t != e {
            println!("bs_check: sweep {i}: got {t}, expected {e}");
            return false;
        }
    }
    true
}

fn main() {
    let args = Args::parse();
    let g = read_wgh_adj_graph_from_file(&args.ifname);
    let r: Vec<u64> = read_file_to_vec_seq(&args.rfname);
    if check(&g, &r) { println!("OK"); }
    else { println!("ERR"); std::process::exit(1); }
}
