/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::io::{self, Error, Write};

use crate::wclique::error::WCQResult;

/// A byte sink for the solution stream: the process console or an
/// in-memory buffer. The streaming sink writes through this without any
/// line structure of its own, so `Output` stays a thin `Write` wrapper.
pub struct Output<'a> {
    destination: Box<dyn Write + 'a>,
}

impl<'a> Output<'a> {
    pub fn console() -> Output<'static> {
        Output {
            destination: Box::new(io::stdout()),
        }
    }
    pub fn string(text: &'a mut Vec<u8>) -> Output<'a> {
        Output {
            destination: Box::new(text),
        }
    }
    pub fn write_str(&mut self, text: &str) -> WCQResult<()> {
        self.write_all(text.as_bytes())?;
        Ok(())
    }
}
impl<'a> Write for Output<'a> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        self.destination.write(buf)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.destination.flush()
    }
}
