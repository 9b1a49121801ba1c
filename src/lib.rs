/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate fxhash;
extern crate itertools;
extern crate serde_json;
extern crate thiserror;

pub mod wclique;

pub use wclique::budget::{BudgetOutcome, ResidualBudget};
pub use wclique::colouring::ColouringScratch;
pub use wclique::error::{WCQError, WCQResult};
pub use wclique::graph::AdjacencyGraph;
pub use wclique::graph_builder::GraphBuilder;
pub use wclique::id_types::VertexId;
pub use wclique::input::Input;
pub use wclique::ordering::{order_smallest_last, partition_candidates};
pub use wclique::output::Output;
pub use wclique::search::{CliqueSearch, SearchOptions, Seed};
pub use wclique::sink::{CliqueAccumulator, SolutionSink, StreamingSink};
pub use wclique::test_utils::*;
pub use wclique::token_reader::TokenReader;
pub use wclique::transformer::{RunSummary, Transformer};
pub use wclique::weights::WeightTable;
