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

use std::time::{ Duration, Instant };

use super::get_time::Timer;

/// Runs `run` untimed until the warmup budget is spent, then `rounds`
/// timed repetitions, printing each round's time and returning the mean.
pub fn time_loop<I, R, E>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    mut init: I,
    mut run: R,
    mut end: E
) -> Duration where
    I: FnMut(),
    R: FnMut(),
    E: FnMut(),
{
    let wt = Instant::now();
    while wt.elapsed() < warmup {
        init(); run(); end();
    }

    if rounds == 0 { return Duration::ZERO; }

    let mut t = Timer::new(name);
    for _ in 0..rounds {
        init();
        t.start();
        run();
        let d = t.stop();
        t.report(d, "");
        end();
    }
    t.total_time() / rounds as u32
}
