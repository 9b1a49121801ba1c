/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use thiserror::Error;

pub type WCQResult<T> = std::result::Result<T, WCQError>;

#[derive(Debug, Error)]
pub enum WCQError {
    #[error("{0}")]
    Generic(String),

    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Bad UTF8 in token: {0}")]
    UTF8(#[from] std::string::FromUtf8Error),

    #[error("Parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("JSON error: {0}")]
    JSON(#[from] serde_json::Error),
}

impl WCQError {
    pub fn new(msg: &str) -> Self {
        Self::Generic(msg.to_owned())
    }
}

impl From<String> for WCQError {
    fn from(str: String) -> Self {
        WCQError::Generic(str)
    }
}

impl From<&str> for WCQError {
    fn from(str: &str) -> Self {
        WCQError::Generic(str.to_owned())
    }
}
