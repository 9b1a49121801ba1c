/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate lib_wclique;

use clap::{App, Arg, ArgMatches};

use lib_wclique::wclique::error::WCQResult;
use lib_wclique::wclique::input::Input;
use lib_wclique::wclique::output::Output;
use lib_wclique::wclique::transformer::{RunSummary, Transformer};

fn get_command_line_args() -> ArgMatches<'static> {
    let matches: ArgMatches = App::new("Wclique")
        .version("0.1.0")
        .about(
            "Enumerates the cliques of a graph whose vertex vector-weight \
             sums equal a prescribed target, given a sequence of partial \
             solutions and active vertex sets on stdin. Prints the \
             solutions as a single bracketed array on stdout.",
        )
        .arg(
            Arg::with_name("startwork")
                .help("Index of the first seed to process (seeds count from 1)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("endwork")
                .help("Index of the last seed to process, or -1 for no upper bound")
                .required(true)
                .allow_hyphen_values(true)
                .index(2),
        )
        .get_matches();
    matches
}

fn main() -> WCQResult<()> {
    let matches: ArgMatches = get_command_line_args();
    let transformer = Transformer::from_argmatches(matches)?;
    let input = Input::console();
    let mut output = Output::console();
    let summary: RunSummary = transformer.run(input, &mut output)?;
    eprintln!(
        "seeds_read={} seeds_searched={} solutions={} calls={}",
        summary.seeds_read, summary.seeds_searched, summary.solutions, summary.calls
    );
    Ok(())
}
