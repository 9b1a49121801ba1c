/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_wclique;

use lib_wclique::wclique::error::WCQResult;
use lib_wclique::wclique::graph::AdjacencyGraph;
use lib_wclique::wclique::id_types::VertexId;
use lib_wclique::wclique::search::{CliqueSearch, SearchOptions, Seed};
use lib_wclique::wclique::sink::{CliqueAccumulator, SolutionSink};
use lib_wclique::wclique::test_utils::{
    assert_same_solutions, gen_graph, gen_weights, labels, solution_set,
};
use lib_wclique::wclique::weights::WeightTable;

const ALL: SearchOptions = SearchOptions {
    enumerate_all: true,
    maximal_only: false,
};
const ALL_MAXIMAL: SearchOptions = SearchOptions {
    enumerate_all: true,
    maximal_only: true,
};
const FIRST: SearchOptions = SearchOptions {
    enumerate_all: false,
    maximal_only: false,
};

fn gen_seed(sofar: &[usize], active: &[usize], target: &[u64]) -> Seed {
    Seed {
        sofar: sofar.iter().map(|&v| VertexId::from_label(v)).collect(),
        active: active.iter().map(|&v| VertexId::from_label(v)).collect(),
        target: target.to_vec(),
    }
}

fn run_search(
    graph: &AdjacencyGraph,
    weights: &WeightTable,
    options: SearchOptions,
    seed: Seed,
) -> WCQResult<Vec<Vec<usize>>> {
    let mut sink = CliqueAccumulator::new();
    let mut search = CliqueSearch::new(graph, weights, options, &mut sink);
    search.run(seed)?;
    Ok(labels(sink.solutions()))
}

fn unit_weights(order: usize) -> WCQResult<WeightTable> {
    gen_weights(&vec![vec![1u64]; order])
}

#[test]
fn test_triangle_with_unit_weights() -> WCQResult<()> {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (2, 3)]);
    let weights = unit_weights(4)?;
    let found = run_search(&graph, &weights, ALL, gen_seed(&[], &[1, 2, 3, 4], &[3]))?;
    assert_same_solutions(&found, &[vec![1, 2, 3]]);
    Ok(())
}

#[test]
fn test_no_maximal_clique_of_weight_two_in_triangle() -> WCQResult<()> {
    // Every edge of the triangle extends to the whole triangle, so the
    // maximality filter rejects all weight-2 cliques.
    let graph = gen_graph(4, &[(1, 2), (1, 3), (2, 3)]);
    let weights = unit_weights(4)?;
    let found = run_search(
        &graph,
        &weights,
        ALL_MAXIMAL,
        gen_seed(&[], &[1, 2, 3, 4], &[2]),
    )?;
    assert!(found.is_empty());
    Ok(())
}

#[test]
fn test_two_dimensional_weights() -> WCQResult<()> {
    let graph = gen_graph(3, &[(1, 2), (1, 3), (2, 3)]);
    let weights = gen_weights(&[vec![1, 0], vec![0, 1], vec![1, 1]])?;
    let found = run_search(&graph, &weights, ALL, gen_seed(&[], &[1, 2, 3], &[1, 1]))?;
    assert_same_solutions(&found, &[vec![1, 2], vec![3]]);
    Ok(())
}

#[test]
fn test_unreachable_target_on_path() -> WCQResult<()> {
    let graph = gen_graph(3, &[(1, 2), (2, 3)]);
    let weights = unit_weights(3)?;
    let found = run_search(&graph, &weights, ALL, gen_seed(&[], &[1, 2, 3], &[3]))?;
    assert!(found.is_empty());
    Ok(())
}

#[test]
fn test_first_solution_mode_stops_after_one() -> WCQResult<()> {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    let weights = unit_weights(4)?;
    let found = run_search(&graph, &weights, FIRST, gen_seed(&[], &[1, 2, 3, 4], &[2]))?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].len(), 2);
    assert!(graph.adjacent(
        VertexId::from_label(found[0][0]),
        VertexId::from_label(found[0][1])
    ));
    Ok(())
}

#[test]
fn test_first_solution_mode_with_no_solution() -> WCQResult<()> {
    let graph = gen_graph(3, &[(1, 2), (2, 3)]);
    let weights = unit_weights(3)?;
    let found = run_search(&graph, &weights, FIRST, gen_seed(&[], &[1, 2, 3], &[3]))?;
    assert!(found.is_empty());
    Ok(())
}

#[test]
fn test_seeded_search_reports_augmented_clique() -> WCQResult<()> {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    let weights = unit_weights(4)?;
    let found = run_search(&graph, &weights, ALL, gen_seed(&[1], &[2, 3, 4], &[3]))?;
    assert_same_solutions(&found, &[vec![1, 2, 3, 4]]);
    Ok(())
}

#[test]
fn test_enumerates_every_triangle_of_k4() -> WCQResult<()> {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    let weights = unit_weights(4)?;
    let found = run_search(&graph, &weights, ALL, gen_seed(&[], &[1, 2, 3, 4], &[3]))?;
    assert_same_solutions(
        &found,
        &[
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![2, 3, 4],
        ],
    );
    // None of the triangles is maximal in K4.
    let maximal = run_search(
        &graph,
        &weights,
        ALL_MAXIMAL,
        gen_seed(&[], &[1, 2, 3, 4], &[3]),
    )?;
    assert!(maximal.is_empty());
    Ok(())
}

#[test]
fn test_maximal_clique_of_full_weight() -> WCQResult<()> {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    let weights = unit_weights(4)?;
    let found = run_search(
        &graph,
        &weights,
        ALL_MAXIMAL,
        gen_seed(&[], &[1, 2, 3, 4], &[4]),
    )?;
    assert_same_solutions(&found, &[vec![1, 2, 3, 4]]);
    Ok(())
}

#[test]
fn test_every_solution_is_a_clique_with_the_right_weight() -> WCQResult<()> {
    let graph = gen_graph(5, &[(1, 2), (1, 3), (2, 3), (3, 4), (4, 5)]);
    let weights = gen_weights(&[vec![1], vec![2], vec![1], vec![2], vec![1]])?;
    let found = run_search(&graph, &weights, ALL, gen_seed(&[], &[1, 2, 3, 4, 5], &[3]))?;
    assert!(!found.is_empty());
    for solution in &found {
        let members: Vec<VertexId> =
            solution.iter().map(|&v| VertexId::from_label(v)).collect();
        assert!(graph.is_clique(&members));
        let total: u64 = members.iter().map(|&v| weights.vector(v)[0]).sum();
        assert_eq!(total, 3);
    }
    Ok(())
}

#[test]
fn test_active_order_does_not_change_the_solution_set() -> WCQResult<()> {
    let graph = gen_graph(3, &[(1, 2), (1, 3), (2, 3)]);
    let weights = gen_weights(&[vec![1, 0], vec![0, 1], vec![1, 1]])?;
    let baseline = run_search(&graph, &weights, ALL, gen_seed(&[], &[1, 2, 3], &[1, 1]))?;
    for permutation in &[
        vec![3, 2, 1],
        vec![2, 3, 1],
        vec![3, 1, 2],
        vec![2, 1, 3],
        vec![1, 3, 2],
    ] {
        let found = run_search(&graph, &weights, ALL, gen_seed(&[], permutation, &[1, 1]))?;
        assert_eq!(solution_set(&found), solution_set(&baseline));
    }
    Ok(())
}

#[test]
fn test_empty_active_set_with_zero_target_emits_the_seed() -> WCQResult<()> {
    let graph = gen_graph(3, &[(1, 2), (1, 3), (2, 3)]);
    let weights = unit_weights(3)?;
    let found = run_search(&graph, &weights, ALL, gen_seed(&[1, 2], &[], &[0]))?;
    assert_same_solutions(&found, &[vec![1, 2]]);
    // With the maximality filter, vertex 3 disqualifies the pair.
    let maximal = run_search(&graph, &weights, ALL_MAXIMAL, gen_seed(&[1, 2], &[], &[0]))?;
    assert!(maximal.is_empty());
    // The full triangle passes.
    let triangle = run_search(
        &graph,
        &weights,
        ALL_MAXIMAL,
        gen_seed(&[1, 2, 3], &[], &[0]),
    )?;
    assert_same_solutions(&triangle, &[vec![1, 2, 3]]);
    Ok(())
}

#[test]
fn test_zero_target_with_leftover_active_fails_maximality() -> WCQResult<()> {
    // Spent target but a non-empty active set: the seed cannot be maximal.
    let graph = gen_graph(3, &[(1, 2), (1, 3), (2, 3)]);
    let weights = unit_weights(3)?;
    let found = run_search(&graph, &weights, ALL_MAXIMAL, gen_seed(&[1], &[2], &[0]))?;
    assert!(found.is_empty());
    Ok(())
}

#[test]
fn test_overweight_vertex_is_eliminated_up_front() -> WCQResult<()> {
    let graph = gen_graph(2, &[(1, 2)]);
    let weights = gen_weights(&[vec![5], vec![1]])?;
    let found = run_search(&graph, &weights, ALL, gen_seed(&[], &[1, 2], &[1]))?;
    assert_same_solutions(&found, &[vec![2]]);
    Ok(())
}

#[test]
fn test_call_counter_advances() -> WCQResult<()> {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (2, 3)]);
    let weights = unit_weights(4)?;
    let mut sink = CliqueAccumulator::new();
    let mut search = CliqueSearch::new(&graph, &weights, ALL, &mut sink);
    search.run(gen_seed(&[], &[1, 2, 3, 4], &[3]))?;
    assert!(search.calls() >= 2);
    assert_eq!(search.solutions(), 1);
    assert_eq!(sink.count(), 1);
    Ok(())
}
