/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::wclique::error::WCQResult;
use crate::wclique::id_types::VertexId;
use crate::wclique::output::Output;

/// Receives solutions in discovery order. The search driver polls `count`
/// to enforce the stop-after-first-solution mode.
pub trait SolutionSink {
    fn emit(&mut self, clique: &[VertexId]) -> WCQResult<()>;
    fn count(&self) -> usize;
}

/// Accumulates solutions in memory.
pub struct CliqueAccumulator {
    solutions: Vec<Vec<VertexId>>,
}

impl CliqueAccumulator {
    pub fn new() -> Self {
        Self {
            solutions: Vec::new(),
        }
    }
    pub fn solutions(&self) -> &[Vec<VertexId>] {
        &self.solutions
    }
    pub fn into_solutions(self) -> Vec<Vec<VertexId>> {
        self.solutions
    }
}
impl Default for CliqueAccumulator {
    fn default() -> Self {
        CliqueAccumulator::new()
    }
}
impl SolutionSink for CliqueAccumulator {
    fn emit(&mut self, clique: &[VertexId]) -> WCQResult<()> {
        self.solutions.push(clique.to_vec());
        Ok(())
    }
    fn count(&self) -> usize {
        self.solutions.len()
    }
}

/// Streams solutions to a byte sink as one bracketed array of vertex-label
/// lists, comma-separated with no trailing comma. `open` writes the
/// opening bracket, `finish` the closing one.
pub struct StreamingSink<'a, 'b> {
    output: &'a mut Output<'b>,
    emitted: usize,
}

impl<'a, 'b> StreamingSink<'a, 'b> {
    pub fn open(output: &'a mut Output<'b>) -> WCQResult<Self> {
        output.write_str("[")?;
        Ok(Self { output, emitted: 0 })
    }

    pub fn finish(self) -> WCQResult<()> {
        self.output.write_str("]\n")?;
        Ok(())
    }
}

impl<'a, 'b> SolutionSink for StreamingSink<'a, 'b> {
    fn emit(&mut self, clique: &[VertexId]) -> WCQResult<()> {
        if self.emitted > 0 {
            self.output.write_str(",")?;
        }
        let labels: Vec<usize> = clique.iter().map(|v| v.label()).collect();
        self.output.write_str(&serde_json::to_string(&labels)?)?;
        self.emitted += 1;
        Ok(())
    }

    fn count(&self) -> usize {
        self.emitted
    }
}
