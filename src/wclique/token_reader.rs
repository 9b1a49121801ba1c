/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::io::BufRead;

use crate::wclique::error::{WCQError, WCQResult};
use crate::wclique::input::Input;

/// Scans whitespace-separated integer tokens off an `Input`. The entire
/// wire protocol -- flags, matrix entries, weights and seeds -- is a flat
/// stream of such tokens.
pub struct TokenReader<'a> {
    source: Input<'a>,
}

impl<'a> TokenReader<'a> {
    pub fn new(source: Input<'a>) -> Self {
        Self { source }
    }

    /// Next token, or `None` on clean end-of-input.
    pub fn next_token(&mut self) -> WCQResult<Option<i64>> {
        let mut token: Vec<u8> = Vec::new();
        loop {
            let available = self.source.fill_buf()?;
            if available.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut complete = false;
            for &byte in available {
                consumed += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    complete = true;
                    break;
                }
                token.push(byte);
            }
            self.source.consume(consumed);
            if complete {
                break;
            }
        }
        if token.is_empty() {
            return Ok(None);
        }
        let text = String::from_utf8(token)?;
        Ok(Some(text.parse::<i64>()?))
    }

    /// Next token, where end-of-input is a protocol error (used once a
    /// record has been partially consumed).
    pub fn require_token(&mut self, what: &str) -> WCQResult<i64> {
        match self.next_token()? {
            Some(value) => Ok(value),
            None => Err(WCQError::from(format!(
                "Unexpected end of input while reading {}",
                what
            ))),
        }
    }

    /// Required token constrained to be non-negative.
    pub fn require_non_negative(&mut self, what: &str) -> WCQResult<u64> {
        let value = self.require_token(what)?;
        if value < 0 {
            return Err(WCQError::from(format!(
                "{} must be non-negative, got {}",
                what, value
            )));
        }
        Ok(value as u64)
    }
}
