/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::wclique::graph::AdjacencyGraph;
use crate::wclique::id_types::VertexId;
use crate::wclique::weights::WeightTable;

/// Scratch for the greedy colouring bound, allocated once per search and
/// threaded through the recursion. The arrays are only live inside a
/// single `bound` call, so every recursion depth can share them.
pub struct ColouringScratch {
    colour: Vec<usize>,
    population: Vec<usize>,
    heaviest: Vec<u64>,
    forbidden: Vec<bool>,
}

impl ColouringScratch {
    pub fn new(order: usize) -> Self {
        Self {
            colour: vec![0; order + 1],
            population: vec![0; order + 1],
            heaviest: vec![0; order + 1],
            forbidden: vec![false; order + 1],
        }
    }

    /// Greedy proper colouring of `active[..startcolouring]` in reverse
    /// order. Each vertex takes the allowed colour with the largest
    /// population (ties towards the smaller colour index), or opens a new
    /// one. Per colour class the maximum pivot-coordinate weight is
    /// tracked; their sum `cwsum` bounds what any clique drawn from the
    /// coloured set can contribute to the pivot coordinate, since a clique
    /// meets each colour class at most once.
    ///
    /// Colouring halts as soon as `cwsum` reaches `goal`; branching is then
    /// restricted to the vertices needed to get there. Returns the
    /// tightened `endconsider`, or `None` when even the bound falls short
    /// of `goal` and the call can be abandoned.
    pub fn bound(
        &mut self,
        graph: &AdjacencyGraph,
        weights: &WeightTable,
        active: &[VertexId],
        endconsider: usize,
        startcolouring: usize,
        pivot: usize,
        goal: u64,
    ) -> Option<usize> {
        let mut cwsum: u64 = 0;
        let mut used = 0;
        for i in (0..startcolouring).rev() {
            for flag in self.forbidden[..used].iter_mut() {
                *flag = false;
            }
            let row = graph.row(active[i]);
            for j in (i + 1)..startcolouring {
                if row[active[j].index()] != 0 {
                    self.forbidden[self.colour[j]] = true;
                }
            }
            let mut chosen: Option<usize> = None;
            for c in 0..used {
                if self.forbidden[c] {
                    continue;
                }
                match chosen {
                    Some(best) if self.population[best] >= self.population[c] => {}
                    _ => chosen = Some(c),
                }
            }
            let weight = weights.vector(active[i])[pivot];
            let c = match chosen {
                Some(c) => {
                    if self.heaviest[c] < weight {
                        cwsum += weight - self.heaviest[c];
                        self.heaviest[c] = weight;
                    }
                    c
                }
                None => {
                    let c = used;
                    used += 1;
                    self.population[c] = 0;
                    self.heaviest[c] = weight;
                    cwsum += weight;
                    c
                }
            };
            self.colour[i] = c;
            self.population[c] += 1;
            if cwsum >= goal {
                return Some(endconsider.min(i + 1));
            }
        }
        // The bound never reached the goal: no clique in this active set
        // can hit the pivot coordinate of the target.
        None
    }
}
