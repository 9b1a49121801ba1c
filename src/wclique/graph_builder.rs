/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::wclique::error::{WCQError, WCQResult};
use crate::wclique::graph::AdjacencyGraph;
use crate::wclique::id_types::VertexId;
use crate::wclique::token_reader::TokenReader;
use crate::wclique::weights::WeightTable;

/// Builds the read-only stores from the header section of the input
/// stream: order, weight dimension, the full adjacency matrix in row-major
/// order, then one weight vector per vertex. Matrix entries outside {0,1}
/// are a fatal protocol error; symmetry and the zero diagonal are the
/// producer's contract and are not rechecked.
pub struct GraphBuilder {}

impl GraphBuilder {
    pub fn from_tokens(reader: &mut TokenReader) -> WCQResult<(AdjacencyGraph, WeightTable)> {
        let order = reader.require_token("the graph order")?;
        if order < 1 {
            return Err(WCQError::from(format!(
                "Graph order must be at least 1, got {}",
                order
            )));
        }
        let order = order as usize;
        let dim = reader.require_token("the weight dimension")?;
        if dim < 1 {
            return Err(WCQError::from(format!(
                "Weight dimension must be at least 1, got {}",
                dim
            )));
        }
        let dim = dim as usize;

        let mut graph = AdjacencyGraph::new(order);
        for i in 0..order {
            for j in 0..order {
                let entry = reader.require_token("an adjacency matrix entry")?;
                match entry {
                    0 | 1 => graph.set(VertexId::from(i), VertexId::from(j), entry == 1),
                    _ => {
                        return Err(WCQError::from(format!(
                            "Adjacency matrix entries must be 0 or 1, got {}",
                            entry
                        )))
                    }
                }
            }
        }

        let mut weights = WeightTable::new(dim);
        for _ in 0..order {
            let mut vector: Vec<u64> = Vec::with_capacity(dim);
            for _ in 0..dim {
                vector.push(reader.require_non_negative("a weight entry")?);
            }
            weights.push(vector)?;
        }
        Ok((graph, weights))
    }
}
