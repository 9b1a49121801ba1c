/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::wclique::budget::{BudgetOutcome, ResidualBudget};
use crate::wclique::colouring::ColouringScratch;
use crate::wclique::error::WCQResult;
use crate::wclique::graph::AdjacencyGraph;
use crate::wclique::id_types::VertexId;
use crate::wclique::ordering::{order_smallest_last, partition_candidates};
use crate::wclique::sink::SolutionSink;
use crate::wclique::weights::WeightTable;

/// Used to set up the weighted clique search.
#[derive(Copy, Clone, Debug)]
pub struct SearchOptions {
    /// Enumerate every solution, or stop after the first one.
    pub enumerate_all: bool,
    /// Only accept cliques that are maximal in the graph.
    pub maximal_only: bool,
}

/// One unit of work: a partial solution (already a clique), the vertices
/// available to extend it (each joined to every vertex of the partial
/// solution), and the weight sum still to be realised by the extension.
pub struct Seed {
    pub sofar: Vec<VertexId>,
    pub active: Vec<VertexId>,
    pub target: Vec<u64>,
}

/// Branch-and-bound driver for cliques with a prescribed vector-weight
/// sum. Each call prunes the active set against the residual target,
/// handles the zero-target and equality terminations, then branches over a
/// pivot-restricted, degree-ordered, colouring-bounded prefix of the
/// active set, restoring the partial solution and target on return.
pub struct CliqueSearch<'a, S: SolutionSink> {
    graph: &'a AdjacencyGraph,
    weights: &'a WeightTable,
    options: SearchOptions,
    sink: &'a mut S,
    scratch: ColouringScratch,
    calls: u64,
}

impl<'a, S: SolutionSink> CliqueSearch<'a, S> {
    pub fn new(
        graph: &'a AdjacencyGraph,
        weights: &'a WeightTable,
        options: SearchOptions,
        sink: &'a mut S,
    ) -> Self {
        let scratch = ColouringScratch::new(graph.order());
        Self {
            graph,
            weights,
            options,
            sink,
            scratch,
            calls: 0,
        }
    }

    /// Number of recursive calls made so far, across seeds.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Number of solutions delivered to the sink so far.
    pub fn solutions(&self) -> usize {
        self.sink.count()
    }

    pub fn run(&mut self, seed: Seed) -> WCQResult<()> {
        let Seed {
            mut sofar,
            mut active,
            mut target,
        } = seed;
        self.search(&mut sofar, &mut active, &mut target)
    }

    fn search(
        &mut self,
        sofar: &mut Vec<VertexId>,
        active: &mut Vec<VertexId>,
        target: &mut Vec<u64>,
    ) -> WCQResult<()> {
        self.calls += 1;
        if target.iter().all(|&goal| goal == 0) {
            // The partial solution alone is the candidate.
            if self.options.maximal_only
                && !(active.is_empty() && self.graph.is_maximal(sofar))
            {
                return Ok(());
            }
            return self.sink.emit(sofar);
        }
        let (mut budget, outcome) = ResidualBudget::evaluate(self.weights, active, target);
        let equality = match outcome {
            BudgetOutcome::Infeasible => return Ok(()),
            BudgetOutcome::Feasible { equality } => equality,
        };
        if equality {
            // The whole surviving active set is the only possible
            // augmentation; it works iff it is a clique.
            if !self.graph.is_clique(active) {
                return Ok(());
            }
            if self.options.maximal_only && !self.graph.is_maximal_union(sofar, active) {
                return Ok(());
            }
            let solution: Vec<VertexId> =
                sofar.iter().chain(active.iter()).copied().collect();
            return self.sink.emit(&solution);
        }
        let pivot = match budget.pivot_coordinate() {
            Some(position) => position,
            None => return Ok(()),
        };
        let mut endconsider = if self.weights.dim() > 1 {
            // Vertices not contributing to the pivot coordinate cannot
            // open a branch; they stay available as extension material.
            let weights = self.weights;
            partition_candidates(active, |v| weights.vector(v)[pivot] > 0)
        } else if self.options.maximal_only {
            // Scalar weights with the maximality filter: every maximal
            // clique in the active set contains the first vertex or one of
            // its non-neighbours, so neighbours need not open branches.
            let graph = self.graph;
            let first = active[0];
            partition_candidates(active, |v| !graph.adjacent(first, v))
        } else {
            active.len()
        };
        if target[pivot] > 1 {
            order_smallest_last(self.graph, active, endconsider);
            let startcolouring = if self.weights.dim() > 1 {
                endconsider
            } else {
                active.len()
            };
            endconsider = match self.scratch.bound(
                self.graph,
                self.weights,
                active,
                endconsider,
                startcolouring,
                pivot,
                target[pivot],
            ) {
                Some(tightened) => tightened,
                None => return Ok(()),
            };
        }
        let mut child: Vec<VertexId> = Vec::with_capacity(active.len());
        for i in 0..endconsider {
            let v = active[i];
            child.clear();
            let row = self.graph.row(v);
            for &u in &active[i + 1..] {
                if row[u.index()] != 0 {
                    child.push(u);
                }
            }
            for &p in self.weights.positions(v) {
                target[p] -= self.weights.vector(v)[p];
            }
            sofar.push(v);
            self.search(sofar, &mut child, target)?;
            sofar.pop();
            for &p in self.weights.positions(v) {
                target[p] += self.weights.vector(v)[p];
            }
            if !self.options.enumerate_all && self.sink.count() > 0 {
                return Ok(());
            }
            // v no longer participates in the remaining branches at this
            // level; re-check residual feasibility without it.
            if !budget.retire(self.weights, v, target) {
                return Ok(());
            }
        }
        Ok(())
    }
}
