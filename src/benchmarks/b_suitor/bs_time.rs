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

#![allow(dead_code)]

use std::time::Duration;

use clap::Parser;

use bsuitor::{ define_algs, finalize, init };
use bsuitor::DefInt;
use bsuitor::common::graph::WghAdjGraph;
use bsuitor::common::graph_io::read_wgh_adj_graph_from_file;
use bsuitor::common::io::write_slice_to_file_seq;
use bsuitor::common::time_loop::time_loop;
use bsuitor::suitor::{ par_bs, serial_bs };

define_algs!(
    (SERIAL, "serial"),
    (PAR, "par")
);

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the number of worker threads
    #[clap(value_parser, required=true)]
    threads: usize,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// the maximum sweep index (inclusive)
    #[clap(value_parser, required=true)]
    blimit: usize,

    /// the algorithm to use
    #[clap(short, long, value_parser, default_value_t = Algs::PAR)]
    algorithm: Algs,

    /// the output filename
    #[clap(short, long, required=false, default_value_t = ("").to_string())]
    ofname: String,

    /// the number of rounds to execute the benchmark
    #[clap(short, long, value_parser, required=false, default_value_t=1)]
    rounds: usize,
}

/// uniform capacity bound: every vertex may match up to `sweep` neighbors
fn uniform(sweep: usize, _ext: DefInt) -> DefInt {
    sweep as DefInt
}

pub fn run(
    alg: Algs,
    rounds: usize,
    threads: usize,
    blimit: usize,
    g: &WghAdjGraph
) -> (Vec<u64>, Duration) {
    let mut r = vec![];

    let mean = time_loop(
        "bs",
        rounds,
        Duration::new(1, 0),
        || {},
        || {
            r = match alg {
                Algs::SERIAL => serial_bs::b_suitor(g, blimit, uniform),
                Algs::PAR => par_bs::b_suitor(g, threads, blimit, uniform),
            };
        },
        || {}
    );
    (r, mean)
}

fn main() {
    let args = Args::parse();
    init!(args.threads);

    let g = read_wgh_adj_graph_from_file(&args.ifname);
    let (r, d) = run(args.algorithm, args.rounds, args.threads, args.blimit, &g);

    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, args.ofname)
    );
}
