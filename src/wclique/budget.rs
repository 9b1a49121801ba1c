/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::wclique::id_types::VertexId;
use crate::wclique::weights::WeightTable;

/// Verdict of a residual-budget evaluation over the active set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BudgetOutcome {
    /// Some coordinate of the target exceeds what the surviving active
    /// vertices can still contribute; the call has no solution.
    Infeasible,
    /// The target is reachable. With `equality`, the remaining target is
    /// met exactly by the sum over the whole surviving active set, so the
    /// only possible solution is the entire set.
    Feasible { equality: bool },
}

/// Per-call budget bookkeeping: for each coordinate, the sum of weights
/// over the surviving active vertices (`nactive`) and how many of them
/// contribute to it (`carriers`).
pub struct ResidualBudget {
    nactive: Vec<u64>,
    carriers: Vec<usize>,
}

impl ResidualBudget {
    /// Eliminates from `active` every vertex individually infeasible
    /// against `target` (some non-zero coordinate of its weight vector
    /// exceeds the target there), compacting survivors in place and in
    /// order, then totals the per-coordinate sums and carrier counts.
    pub fn evaluate(
        weights: &WeightTable,
        active: &mut Vec<VertexId>,
        target: &[u64],
    ) -> (Self, BudgetOutcome) {
        let mut nactive = vec![0u64; target.len()];
        let mut carriers = vec![0usize; target.len()];
        active.retain(|&v| {
            let vector = weights.vector(v);
            for &p in weights.positions(v) {
                if vector[p] > target[p] {
                    return false;
                }
            }
            for &p in weights.positions(v) {
                nactive[p] += vector[p];
                carriers[p] += 1;
            }
            true
        });
        let mut equality = true;
        for (j, &goal) in target.iter().enumerate() {
            if goal > nactive[j] {
                return (Self { nactive, carriers }, BudgetOutcome::Infeasible);
            }
            if goal != nactive[j] {
                equality = false;
            }
        }
        (
            Self { nactive, carriers },
            BudgetOutcome::Feasible { equality },
        )
    }

    /// The coordinate with the fewest contributing vertices, ties towards
    /// the smallest index. `None` only if no coordinate has a carrier.
    pub fn pivot_coordinate(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (j, &count) in self.carriers.iter().enumerate() {
            if count == 0 {
                continue;
            }
            match best {
                Some(b) if self.carriers[b] <= count => {}
                _ => best = Some(j),
            }
        }
        best
    }

    /// Removes `v`'s contribution after its branch has been fully explored.
    /// Returns false when some coordinate of the target can no longer be
    /// reached by the vertices still in play, in which case the caller
    /// abandons the remaining branches.
    pub fn retire(&mut self, weights: &WeightTable, v: VertexId, target: &[u64]) -> bool {
        let vector = weights.vector(v);
        for &p in weights.positions(v) {
            self.nactive[p] -= vector[p];
            if self.nactive[p] < target[p] {
                return false;
            }
        }
        true
    }

    pub fn nactive(&self) -> &[u64] {
        &self.nactive
    }

    pub fn carriers(&self) -> &[usize] {
        &self.carriers
    }
}
