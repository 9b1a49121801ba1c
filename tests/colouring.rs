/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_wclique;

use lib_wclique::wclique::colouring::ColouringScratch;
use lib_wclique::wclique::error::WCQResult;
use lib_wclique::wclique::id_types::VertexId;
use lib_wclique::wclique::ordering::order_smallest_last;
use lib_wclique::wclique::test_utils::{gen_graph, gen_weights};

fn vertices(labels: &[usize]) -> Vec<VertexId> {
    labels.iter().map(|&v| VertexId::from_label(v)).collect()
}

fn label_list(active: &[VertexId]) -> Vec<usize> {
    active.iter().map(|v| v.label()).collect()
}

#[test]
fn test_smallest_last_places_low_degree_first() {
    // Triangle 1-2-3 plus the isolated vertex 4.
    let graph = gen_graph(4, &[(1, 2), (1, 3), (2, 3)]);
    let mut active = vertices(&[1, 2, 3, 4]);
    order_smallest_last(&graph, &mut active, 4);
    // The isolated vertex is selected first; the swap drops vertex 1 into
    // the vacated last slot.
    assert_eq!(label_list(&active), vec![4, 2, 3, 1]);
}

#[test]
fn test_smallest_last_decrements_suffix_degrees() {
    // Star centred at 1 with leaves 2, 3, 4: each placed leaf lowers the
    // centre's residual degree, so by the third slot the centre ties the
    // remaining leaf and wins on position.
    let graph = gen_graph(4, &[(1, 2), (1, 3), (1, 4)]);
    let mut active = vertices(&[1, 2, 3, 4]);
    order_smallest_last(&graph, &mut active, 4);
    assert_eq!(label_list(&active), vec![2, 3, 1, 4]);
}

#[test]
fn test_smallest_last_orders_only_the_prefix() {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (2, 3)]);
    let mut active = vertices(&[3, 1, 4, 2]);
    // The suffix past endconsider still counts towards degrees but is not
    // reordered.
    order_smallest_last(&graph, &mut active, 3);
    assert_eq!(active[3], VertexId::from_label(2));
    assert_eq!(&label_list(&active)[..3], &[4, 1, 3]);
}

#[test]
fn test_bound_tightens_branching_to_reachable_prefix() -> WCQResult<()> {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (2, 3)]);
    let weights = gen_weights(&[vec![1], vec![1], vec![1], vec![1]])?;
    let active = vertices(&[4, 1, 2, 3]);
    let mut scratch = ColouringScratch::new(graph.order());
    // The triangle needs three colours; the bound reaches 3 while
    // colouring position 1, so branching stops after positions 0 and 1.
    assert_eq!(scratch.bound(&graph, &weights, &active, 4, 4, 0, 3), Some(2));
    Ok(())
}

#[test]
fn test_bound_prunes_unreachable_target() -> WCQResult<()> {
    let graph = gen_graph(4, &[(1, 2), (1, 3), (2, 3)]);
    let weights = gen_weights(&[vec![1], vec![1], vec![1], vec![1]])?;
    let active = vertices(&[4, 1, 2, 3]);
    let mut scratch = ColouringScratch::new(graph.order());
    // Even with the isolated vertex, only three colour classes appear:
    // vertex 4 joins an existing class instead of opening a fourth, so the
    // bound stays at 3 < 4.
    assert_eq!(scratch.bound(&graph, &weights, &active, 4, 4, 0, 4), None);
    Ok(())
}

#[test]
fn test_independent_vertices_share_one_colour() -> WCQResult<()> {
    // No edges at all: everything lands in a single colour class, so the
    // bound is the largest single weight.
    let graph = gen_graph(3, &[]);
    let weights = gen_weights(&[vec![1], vec![1], vec![1]])?;
    let active = vertices(&[1, 2, 3]);
    let mut scratch = ColouringScratch::new(graph.order());
    assert_eq!(scratch.bound(&graph, &weights, &active, 3, 3, 0, 2), None);
    Ok(())
}

#[test]
fn test_bound_keeps_smaller_existing_endconsider() -> WCQResult<()> {
    let graph = gen_graph(3, &[]);
    let weights = gen_weights(&[vec![2], vec![2], vec![2]])?;
    let active = vertices(&[1, 2, 3]);
    let mut scratch = ColouringScratch::new(graph.order());
    // The goal is met on the very first coloured vertex (position 2), but
    // the caller's endconsider of 1 is already tighter.
    assert_eq!(scratch.bound(&graph, &weights, &active, 1, 3, 0, 2), Some(1));
    Ok(())
}

#[test]
fn test_class_maximum_tracks_heaviest_member() -> WCQResult<()> {
    // Path 1-2-3: vertices 1 and 3 share a colour, and the class weight is
    // the heavier of the two. Goal 5 = 4 (shared class) + 1 (vertex 2) is
    // reached only because the class maximum is upgraded.
    let graph = gen_graph(3, &[(1, 2), (2, 3)]);
    let weights = gen_weights(&[vec![4], vec![1], vec![1]])?;
    let active = vertices(&[1, 2, 3]);
    let mut scratch = ColouringScratch::new(graph.order());
    assert_eq!(scratch.bound(&graph, &weights, &active, 3, 3, 0, 5), Some(1));
    assert_eq!(scratch.bound(&graph, &weights, &active, 3, 3, 0, 6), None);
    Ok(())
}
