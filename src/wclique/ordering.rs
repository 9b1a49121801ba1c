/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::wclique::graph::AdjacencyGraph;
use crate::wclique::id_types::VertexId;

/// Two-pointer partition of the active set: vertices satisfying `keep`
/// are packed into the prefix and the returned length delimits them.
/// Relative order within each side is not preserved.
pub fn partition_candidates<F>(active: &mut [VertexId], keep: F) -> usize
where
    F: Fn(VertexId) -> bool,
{
    let mut i = 0;
    let mut end = active.len();
    while i < end {
        if keep(active[i]) {
            i += 1;
        } else {
            end -= 1;
            active.swap(i, end);
        }
    }
    end
}

/// Reorders `active[..endconsider]` into a smallest-last order: each slot
/// receives a vertex of minimum degree in the subgraph induced by it and
/// everything after it (degrees are taken over the whole active set, then
/// decremented as ordered vertices leave the suffix). High-degree vertices
/// end up late, which is where the reverse-order colouring starts.
pub fn order_smallest_last(graph: &AdjacencyGraph, active: &mut [VertexId], endconsider: usize) {
    let mut degrees: Vec<usize> = Vec::with_capacity(endconsider);
    for i in 0..endconsider {
        let row = graph.row(active[i]);
        degrees.push(active.iter().filter(|u| row[u.index()] != 0).count());
    }
    for i in 0..endconsider {
        let mut minptr = i;
        for j in (i + 1)..endconsider {
            if degrees[j] < degrees[minptr] {
                minptr = j;
            }
        }
        active.swap(i, minptr);
        degrees.swap(i, minptr);
        let row = graph.row(active[i]);
        for j in (i + 1)..endconsider {
            if row[active[j].index()] != 0 {
                degrees[j] -= 1;
            }
        }
    }
}
