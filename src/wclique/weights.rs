/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::wclique::error::{WCQError, WCQResult};
use crate::wclique::id_types::VertexId;

/// Per-vertex weight vectors of a fixed dimension, with a companion list of
/// the non-zero coordinate positions of each vector. The position lists let
/// the search touch only the coordinates a vertex actually contributes to.
pub struct WeightTable {
    dim: usize,
    vectors: Vec<Vec<u64>>,
    positions: Vec<Vec<usize>>,
}

impl WeightTable {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Appends the weight vector of the next vertex. An all-zero vector is
    /// a caller error.
    pub fn push(&mut self, vector: Vec<u64>) -> WCQResult<()> {
        if vector.len() != self.dim {
            return Err(WCQError::from(format!(
                "Weight vector of length {} in a table of dimension {}",
                vector.len(),
                self.dim
            )));
        }
        let positions: Vec<usize> = vector
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0)
            .map(|(j, _)| j)
            .collect();
        if positions.is_empty() {
            return Err(WCQError::from(format!(
                "Vertex {} has an all-zero weight vector",
                self.vectors.len() + 1
            )));
        }
        self.vectors.push(vector);
        self.positions.push(positions);
        Ok(())
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    pub fn vector(&self, v: VertexId) -> &[u64] {
        &self.vectors[v.index()]
    }

    /// Indices of the non-zero coordinates of `v`'s weight vector.
    #[inline]
    pub fn positions(&self, v: VertexId) -> &[usize] {
        &self.positions[v.index()]
    }
}
