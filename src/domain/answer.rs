use serde::Serialize;
use serde_json::Value;

/// Answer produced by the pipeline. Its shape belongs to the pipeline and is
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Answer(Value);

impl Answer {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
