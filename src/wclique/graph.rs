/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use itertools::Itertools;

use crate::wclique::id_types::VertexId;

/// A simple undirected graph stored as a dense row-major 0/1 byte matrix.
/// The matrix is symmetric with a zero diagonal (producers guarantee this).
/// Edge tests are O(1) and a row scan over m candidates costs O(m), which
/// is what the degree-ordering and colouring passes lean on.
pub struct AdjacencyGraph {
    order: usize,
    entries: Vec<u8>,
}

impl AdjacencyGraph {
    pub fn new(order: usize) -> Self {
        Self {
            order,
            entries: vec![0u8; order * order],
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn set(&mut self, u: VertexId, v: VertexId, adjacent: bool) {
        self.entries[u.index() * self.order + v.index()] = adjacent as u8;
    }

    /// Symmetric insert, for graphs assembled from edge lists.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.set(u, v, true);
        self.set(v, u, true);
    }

    #[inline]
    pub fn adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.entries[u.index() * self.order + v.index()] != 0
    }

    /// The dense neighbourhood row of `v`: `row(v)[u.index()] != 0` iff
    /// `u` and `v` are adjacent.
    #[inline]
    pub fn row(&self, v: VertexId) -> &[u8] {
        let start = v.index() * self.order;
        &self.entries[start..start + self.order]
    }

    /// Whether the given vertices are pairwise adjacent.
    pub fn is_clique(&self, vertices: &[VertexId]) -> bool {
        vertices
            .iter()
            .tuple_combinations::<(_, _)>()
            .all(|(&u, &v)| self.adjacent(u, v))
    }

    /// Whether the clique `left ∪ right` is maximal: no vertex of the graph
    /// is adjacent to every member. Members disqualify themselves through
    /// the zero diagonal.
    pub fn is_maximal_union(&self, left: &[VertexId], right: &[VertexId]) -> bool {
        for candidate in 0..self.order {
            let row = self.row(VertexId::from(candidate));
            if left
                .iter()
                .chain(right.iter())
                .all(|u| row[u.index()] != 0)
            {
                return false;
            }
        }
        true
    }

    pub fn is_maximal(&self, clique: &[VertexId]) -> bool {
        self.is_maximal_union(clique, &[])
    }
}
