/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use fxhash::FxHashSet;

use crate::wclique::error::WCQResult;
use crate::wclique::graph::AdjacencyGraph;
use crate::wclique::id_types::VertexId;
use crate::wclique::input::Input;
use crate::wclique::output::Output;
use crate::wclique::transformer::{RunSummary, Transformer};
use crate::wclique::weights::WeightTable;

/// Assembles a graph from a 1-based edge list.
pub fn gen_graph(order: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(order);
    for &(u, v) in edges {
        graph.add_edge(VertexId::from_label(u), VertexId::from_label(v));
    }
    graph
}

pub fn gen_weights(vectors: &[Vec<u64>]) -> WCQResult<WeightTable> {
    let mut weights = WeightTable::new(vectors[0].len());
    for vector in vectors {
        weights.push(vector.clone())?;
    }
    Ok(weights)
}

/// 1-based labels of accumulated solutions, in emission order.
pub fn labels(solutions: &[Vec<VertexId>]) -> Vec<Vec<usize>> {
    solutions
        .iter()
        .map(|clique| clique.iter().map(|v| v.label()).collect())
        .collect()
}

/// One seed for `gen_input`: partial solution, active set, target, all in
/// wire form (1-based labels).
pub type RawSeed = (Vec<usize>, Vec<usize>, Vec<u64>);

/// Renders a full input stream in the wire format: flags, order,
/// dimension, the adjacency matrix built from the (1-based) edge list, one
/// weight vector per vertex, then the seeds.
pub fn gen_input(
    enumerate_all: bool,
    maximal_only: bool,
    order: usize,
    edges: &[(usize, usize)],
    weightvectors: &[Vec<u64>],
    seeds: &[RawSeed],
) -> String {
    assert_eq!(weightvectors.len(), order);
    let dim = weightvectors[0].len();
    let mut matrix = vec![0u8; order * order];
    for &(u, v) in edges {
        matrix[(u - 1) * order + (v - 1)] = 1;
        matrix[(v - 1) * order + (u - 1)] = 1;
    }
    let mut text = format!(
        "{} {}\n{} {}\n",
        enumerate_all as u8, maximal_only as u8, order, dim
    );
    for i in 0..order {
        let row: Vec<String> = (0..order)
            .map(|j| matrix[i * order + j].to_string())
            .collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    for vector in weightvectors {
        let row: Vec<String> = vector.iter().map(|w| w.to_string()).collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    for (sofar, active, target) in seeds {
        text.push_str(&format!("{}", sofar.len()));
        for v in sofar {
            text.push_str(&format!(" {}", v));
        }
        text.push_str(&format!(" {}", active.len()));
        for v in active {
            text.push_str(&format!(" {}", v));
        }
        for k in target {
            text.push_str(&format!(" {}", k));
        }
        text.push('\n');
    }
    text
}

/// Runs the full pipeline on an in-memory input stream and parses the
/// emitted array back into lists of 1-based labels, in emission order.
pub fn run_miner(
    input_text: &str,
    startwork: u64,
    endwork: Option<u64>,
) -> WCQResult<Vec<Vec<usize>>> {
    Ok(run_miner_with_summary(input_text, startwork, endwork)?.0)
}

pub fn run_miner_with_summary(
    input_text: &str,
    startwork: u64,
    endwork: Option<u64>,
) -> WCQResult<(Vec<Vec<usize>>, RunSummary)> {
    let transformer = Transformer::new(startwork, endwork)?;
    let mut buffer: Vec<u8> = Vec::new();
    let summary = {
        let input = Input::string(input_text.as_bytes());
        let mut output = Output::string(&mut buffer);
        transformer.run(input, &mut output)?
    };
    let text = String::from_utf8(buffer)?;
    let solutions: Vec<Vec<usize>> = serde_json::from_str(text.trim())?;
    Ok((solutions, summary))
}

/// Order-insensitive view of a solution list, for comparing enumerations
/// that may differ in traversal order.
pub fn solution_set(solutions: &[Vec<usize>]) -> FxHashSet<Vec<usize>> {
    solutions
        .iter()
        .map(|clique| {
            let mut sorted = clique.clone();
            sorted.sort_unstable();
            sorted
        })
        .collect()
}

/// Asserts that two solution lists are equal as sets of vertex sets and
/// that neither contains a duplicate.
pub fn assert_same_solutions(actual: &[Vec<usize>], expected: &[Vec<usize>]) {
    let actual_set = solution_set(actual);
    let expected_set = solution_set(expected);
    assert_eq!(
        actual_set.len(),
        actual.len(),
        "duplicate solutions in {:?}",
        actual
    );
    assert_eq!(actual_set, expected_set);
}
