/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;

use clap::ArgMatches;

use crate::wclique::error::{WCQError, WCQResult};
use crate::wclique::graph_builder::GraphBuilder;
use crate::wclique::id_types::VertexId;
use crate::wclique::input::Input;
use crate::wclique::output::Output;
use crate::wclique::search::{CliqueSearch, SearchOptions, Seed};
use crate::wclique::sink::StreamingSink;
use crate::wclique::token_reader::TokenReader;

/// Counters reported after a run, for the diagnostic stream.
#[derive(Copy, Clone, Debug)]
pub struct RunSummary {
    /// Seeds consumed from the input stream.
    pub seeds_read: u64,
    /// Seeds actually searched (inside the work range).
    pub seeds_searched: u64,
    /// Solutions emitted.
    pub solutions: usize,
    /// Recursive search calls, across all seeds.
    pub calls: u64,
}

/// Used to set up the weighted clique mining run: holds the work range and
/// drives header parsing, the seed loop and the solution stream.
pub struct Transformer {
    startwork: u64,
    endwork: Option<u64>,
}

impl Transformer {
    /// `startwork` counts seeds from 1; `endwork = None` means no upper
    /// bound (wire value -1).
    pub fn new(startwork: u64, endwork: Option<u64>) -> WCQResult<Self> {
        if startwork < 1 {
            return Err(WCQError::from(format!(
                "startwork must be at least 1, got {}",
                startwork
            )));
        }
        if let Some(end) = endwork {
            if end < startwork {
                return Err(WCQError::from(format!(
                    "endwork {} lies before startwork {}",
                    end, startwork
                )));
            }
        }
        Ok(Self { startwork, endwork })
    }

    /// Constructs a transformer from an ArgMatches object (to help with
    /// command line arguments).
    pub fn from_argmatches(matches: ArgMatches) -> WCQResult<Self> {
        let arg_value = |name: &str| -> WCQResult<&str> {
            matches
                .value_of(name)
                .ok_or_else(|| WCQError::from(format!("Missing required argument: {}", name)))
        };
        let startwork: i64 = arg_value("startwork")?.parse::<i64>()?;
        if startwork < 1 {
            return Err(WCQError::from(format!(
                "startwork must be at least 1, got {}",
                startwork
            )));
        }
        let endwork: i64 = arg_value("endwork")?.parse::<i64>()?;
        let endwork: Option<u64> = match endwork {
            -1 => None,
            end if end >= 0 => Some(end as u64),
            end => {
                return Err(WCQError::from(format!(
                    "endwork must be at least startwork, or -1 for no bound, got {}",
                    end
                )))
            }
        };
        Transformer::new(startwork as u64, endwork)
    }

    /// Reads the full protocol from `input` -- flags, graph header, then
    /// the seed stream -- and writes the single solution array to
    /// `output`. Seeds outside the work range are consumed but not
    /// searched; once `endwork` seeds have been read no further seed is
    /// touched. In stop-after-first mode the seed loop ends as soon as a
    /// solution exists.
    pub fn run(&self, input: Input, output: &mut Output) -> WCQResult<RunSummary> {
        let mut reader = TokenReader::new(input);
        let enumerate_all = read_flag(&mut reader, "isolevel")?;
        let maximal_only = read_flag(&mut reader, "allmaxes")?;
        let (graph, weights) = GraphBuilder::from_tokens(&mut reader)?;
        let order = graph.order();
        let mut sink = StreamingSink::open(output)?;
        let options = SearchOptions {
            enumerate_all,
            maximal_only,
        };
        let mut search = CliqueSearch::new(&graph, &weights, options, &mut sink);
        let mut seeds_read: u64 = 0;
        let mut seeds_searched: u64 = 0;
        loop {
            if let Some(end) = self.endwork {
                if seeds_read >= end {
                    break;
                }
            }
            // A missing first token is the clean end of the seed stream.
            let sofar_len = match reader.next_token()? {
                Some(value) => value,
                None => break,
            };
            let seed = read_seed(&mut reader, sofar_len, order, weights.dim())?;
            seeds_read += 1;
            if seeds_read >= self.startwork {
                seeds_searched += 1;
                search.run(seed)?;
                if !enumerate_all && search.solutions() > 0 {
                    break;
                }
            }
        }
        let summary = RunSummary {
            seeds_read,
            seeds_searched,
            solutions: search.solutions(),
            calls: search.calls(),
        };
        drop(search);
        sink.finish()?;
        Ok(summary)
    }
}

/// Reads the remainder of a seed record whose leading `|S|` token has
/// already been consumed. From here on, end-of-input is fatal: a partial
/// seed is a corrupt stream.
fn read_seed(
    reader: &mut TokenReader,
    sofar_len: i64,
    order: usize,
    dim: usize,
) -> WCQResult<Seed> {
    let sofar = read_vertex_list(reader, sofar_len, order, "a partial-solution vertex")?;
    let active_len = reader.require_token("the active-set length")?;
    let active = read_vertex_list(reader, active_len, order, "an active-set vertex")?;
    let mut target: Vec<u64> = Vec::with_capacity(dim);
    for _ in 0..dim {
        target.push(reader.require_non_negative("a target entry")?);
    }
    Ok(Seed {
        sofar,
        active,
        target,
    })
}

fn read_vertex_list(
    reader: &mut TokenReader,
    len: i64,
    order: usize,
    what: &str,
) -> WCQResult<Vec<VertexId>> {
    if len < 0 {
        return Err(WCQError::from(format!(
            "A list length must be non-negative, got {}",
            len
        )));
    }
    let mut vertices: Vec<VertexId> = Vec::new();
    for _ in 0..len {
        let label = reader.require_token(what)?;
        if label < 1 || label as usize > order {
            return Err(WCQError::from(format!(
                "Vertex label {} outside 1..={}",
                label, order
            )));
        }
        vertices.push(VertexId::from_label(label as usize));
    }
    Ok(vertices)
}

fn read_flag(reader: &mut TokenReader, name: &str) -> WCQResult<bool> {
    match reader.require_token(name)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(WCQError::from(format!(
            "{} must be 0 or 1, got {}",
            name, other
        ))),
    }
}
