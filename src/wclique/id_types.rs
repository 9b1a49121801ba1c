/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::fmt;

/// Uniquely identifies a vertex of the graph under search. Internally this
/// is a zero-based index into the adjacency matrix and weight table; the
/// wire protocol labels vertices from 1, so `from_label`/`label` translate
/// at the boundary.
#[derive(Hash, Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct VertexId {
    id: usize,
}
impl VertexId {
    pub fn from_label(label: usize) -> Self {
        Self { id: label - 1 }
    }
    pub fn label(&self) -> usize {
        self.id + 1
    }
    #[inline]
    pub fn index(&self) -> usize {
        self.id
    }
}
impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self { id: index }
    }
}
impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vertex:{}", self.label())
    }
}
