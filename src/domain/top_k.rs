use std::fmt;

use serde::Serialize;

/// Number of chunks the pipeline retrieves to answer a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopK(u32);

impl TopK {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 50;
    pub const DEFAULT: u32 = 5;

    pub fn new(value: i64) -> Result<Self, TopKError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(TopKError::OutOfRange(value));
        }
        Ok(Self(value as u32))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for TopK {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopKError {
    #[error("top_k must be between 1 and 50, got {0}")]
    OutOfRange(i64),
}
